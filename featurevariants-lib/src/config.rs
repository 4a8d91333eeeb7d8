use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::generate::DEFAULT_SEPARATOR;
use crate::variant::{default_variants, VariantDescriptor};

/// Variant options, usually read from a JSON file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawOptions")]
pub struct Options {
    pub separator: String,
    /// Register the built-in catalog before `variants`.
    pub defaults: bool,
    pub variants: Vec<VariantDescriptor>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawOptions {
    List(Vec<VariantDescriptor>),
    Table(OptionsTable),
}

/// The object form. Unknown keys are rejected so a lone descriptor object
/// is an error instead of an empty table.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct OptionsTable {
    #[serde(default = "default_separator")]
    separator: String,
    #[serde(default)]
    defaults: bool,
    #[serde(default)]
    variants: Vec<VariantDescriptor>,
}

impl From<RawOptions> for Options {
    fn from(raw: RawOptions) -> Self {
        match raw {
            RawOptions::List(variants) => Options {
                variants,
                ..Options::default()
            },
            RawOptions::Table(OptionsTable {
                separator,
                defaults,
                variants,
            }) => Options {
                separator,
                defaults,
                variants,
            },
        }
    }
}

impl Default for Options {
    fn default() -> Self {
        Options {
            separator: default_separator(),
            defaults: false,
            variants: Vec::new(),
        }
    }
}

impl Options {
    /// The built-in catalog (when enabled) followed by the configured variants.
    pub fn descriptors(&self) -> Vec<VariantDescriptor> {
        let mut descriptors = Vec::new();
        if self.defaults {
            descriptors.extend_from_slice(default_variants());
        }
        descriptors.extend(self.variants.iter().cloned());
        descriptors
    }
}

pub fn load(path: &Path) -> Result<Options> {
    let text = fs::read_to_string(path).map_err(|err| Error::io(path, err))?;
    serde_json::from_str(&text).map_err(|source| Error::Config {
        path: path.to_path_buf(),
        source,
    })
}

fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}
