pub mod escape;
pub mod owned_css;
pub mod variant_css;

pub use owned_css::{AtRule, Container, Declaration, Node, Rule, Stylesheet};
pub use variant_css::parse;
