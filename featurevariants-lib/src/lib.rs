//! Feature and browser detection variants for utility CSS.
//!
//! A variant is described by a small JSON record and rewrites every utility
//! rule generated under it, either by nesting the selector under a parent
//! class or by wrapping the rule in an at-rule:
//!
//! ```
//! use featurevariants_lib::{style, VariantDescriptor, VariantGenerator};
//!
//! let utilities = style::parse(".appearance-none { appearance: none }")?;
//!
//! let mut generator = VariantGenerator::new();
//! generator.register_variants(&[
//!     VariantDescriptor::class("yolo").with("parentClassName", "hey"),
//!     VariantDescriptor::at_rule("sup", "supports", "(flex-wrap: wrap)"),
//! ])?;
//!
//! let css = generator.generate_all(&utilities)?.to_minified_css();
//! assert_eq!(
//!     css,
//!     r".appearance-none{appearance:none}.hey .yolo\:appearance-none{appearance:none}@supports (flex-wrap: wrap){.sup\:appearance-none{appearance:none}}"
//! );
//! # Ok::<(), featurevariants_lib::Error>(())
//! ```

pub mod config;
pub mod generate;
pub mod host;
pub mod style;
pub mod variant;

mod error;

pub use error::{Error, Result, ValidationError, ValidationErrorKind, MESSAGE_TAG};
pub use generate::{VariantGenerator, DEFAULT_SEPARATOR};
pub use host::{DefaultHost, Host, VariantContext};
pub use variant::{default_variants, handle, AtRuleSpec, Rewrite, Variant, VariantDescriptor};
