pub mod defaults;
pub mod descriptor;
pub mod handler;
pub mod validate;

pub use defaults::default_variants;
pub use descriptor::{AtRuleSpec, Variant, VariantDescriptor};
pub use handler::{dispatch, handle, Rewrite};
pub use validate::validate;
