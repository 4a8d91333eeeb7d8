use clap::Parser;
use featurevariants_lib::config::{self, Options};
use featurevariants_lib::{style, Error, VariantGenerator};
use log::info;
use std::fs;
use std::path::PathBuf;

const FEATUREVARIANTS_INTRO: &str = "featurevariants - feature & browser detection variants for utility CSS";

#[derive(Parser)]
#[command(name = "featurevariants")]
#[command(about = "Generate feature detection variants for utility CSS")]
struct Args {
    /// Utility stylesheet to read.
    input: PathBuf,

    /// Output file name (stdout when omitted).
    output: Option<PathBuf>,

    /// JSON file with `separator`, `defaults` and `variants`.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Register the built-in browser and feature variants.
    #[arg(long)]
    defaults: bool,

    /// String placed between the variant name and the utility class.
    #[arg(short, long)]
    separator: Option<String>,

    /// Variants to generate, in order (every registered variant when omitted).
    #[arg(short, long = "variant")]
    variants: Vec<String>,

    /// Print the CSS without optional whitespace.
    #[arg(long)]
    minify: bool,
}

fn main() {
    env_logger::init();

    // parse the args given in terminal
    let args: Args = Args::parse();
    info!("{}", FEATUREVARIANTS_INTRO);

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Error> {
    let mut options = match &args.config {
        Some(path) => config::load(path)?,
        None => Options::default(),
    };
    options.defaults |= args.defaults;
    if let Some(separator) = args.separator {
        options.separator = separator;
    }

    let css_content = fs::read_to_string(&args.input).map_err(|e| Error::io(&args.input, e))?;
    let utilities = style::parse(&css_content)?;

    let mut generator = VariantGenerator::new().separator(options.separator.clone());
    let registered = generator.register_variants(&options.descriptors())?;
    info!("registered {} variants", registered);

    let output = if args.variants.is_empty() {
        generator.generate_all(&utilities)?
    } else {
        generator.generate(&utilities, &args.variants)?
    };

    let rendered = if args.minify {
        output.to_minified_css()
    } else {
        output.to_string()
    };

    match &args.output {
        Some(path) => fs::write(path, rendered).map_err(|e| Error::io(path, e))?,
        None => print!("{}", rendered),
    }
    Ok(())
}
