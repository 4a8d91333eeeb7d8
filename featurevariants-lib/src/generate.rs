use crate::error::{Error, Result};
use crate::host::{DefaultHost, Host, VariantContext};
use crate::style::owned_css::{Container, Stylesheet};
use crate::variant::{handle, Rewrite, VariantDescriptor};
use log::{debug, info};

pub const DEFAULT_SEPARATOR: &str = ":";

/// Registers variants and applies them to utility rules, the way a utility
/// framework applies the variants its plugins add.
pub struct VariantGenerator<H: Host = DefaultHost> {
    host: H,
    separator: String,
    variants: Vec<(String, Rewrite)>,
}

impl VariantGenerator<DefaultHost> {
    pub fn new() -> Self {
        Self::with_host(DefaultHost)
    }
}

impl Default for VariantGenerator<DefaultHost> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Host> VariantGenerator<H> {
    pub fn with_host(host: H) -> Self {
        VariantGenerator {
            host,
            separator: DEFAULT_SEPARATOR.to_string(),
            variants: Vec::new(),
        }
    }

    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Register `rewrite` under `name`. A later registration with the same
    /// name replaces the earlier one.
    pub fn add_variant(&mut self, name: impl Into<String>, rewrite: Rewrite) {
        let name = name.into();
        debug!("registering variant {:?}", name);
        match self.variants.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = rewrite,
            None => self.variants.push((name, rewrite)),
        }
    }

    /// Validate and register every enabled descriptor, in order.
    ///
    /// Disabled descriptors are skipped without validation. The first invalid
    /// descriptor aborts registration; variants registered before it stay.
    pub fn register_variants(&mut self, descriptors: &[VariantDescriptor]) -> Result<usize> {
        let mut registered = 0;
        for descriptor in descriptors {
            if !descriptor.is_enabled() {
                debug!("skipping disabled variant {}", descriptor.to_json());
                continue;
            }
            let rewrite = handle(descriptor)?;
            self.add_variant(rewrite.name().to_string(), rewrite);
            registered += 1;
        }
        Ok(registered)
    }

    pub fn variant_names(&self) -> impl Iterator<Item = &str> {
        self.variants.iter().map(|(name, _)| name.as_str())
    }

    pub fn rewrite(&self, name: &str) -> Option<&Rewrite> {
        self.variants
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, rewrite)| rewrite)
    }

    /// The utilities followed by their variants, one configured variant at
    /// a time. Each rewrite runs once per top-level utility node; a node the
    /// rewrite leaves untouched is not emitted again.
    pub fn generate<S: AsRef<str>>(
        &self,
        utilities: &Stylesheet,
        configured: &[S],
    ) -> Result<Stylesheet> {
        let mut output = utilities.clone();

        for name in configured {
            let name = name.as_ref();
            let rewrite = self
                .rewrite(name)
                .ok_or_else(|| Error::UnknownVariant(name.to_string()))?;

            for node in &utilities.nodes {
                let mut container = Stylesheet::new(vec![node.clone()]);
                let mut ctx = VariantContext::new(&mut container, &self.separator);
                rewrite.apply(&self.host, &mut ctx);

                let produced = container.take_nodes();
                if produced.len() == 1 && produced[0] == *node {
                    debug!("variant {:?} left a utility unchanged, not emitting it", name);
                    continue;
                }
                output.nodes.extend(produced);
            }
        }

        info!(
            "generated {} nodes from {} utilities and {} variants",
            output.nodes.len(),
            utilities.nodes.len(),
            configured.len()
        );
        Ok(output)
    }

    /// [`generate`](Self::generate) with every registered variant, in
    /// registration order.
    pub fn generate_all(&self, utilities: &Stylesheet) -> Result<Stylesheet> {
        let names: Vec<&str> = self.variant_names().collect();
        self.generate(utilities, &names)
    }
}
