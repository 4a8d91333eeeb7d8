//! Turns validated variants into selector rewrites.

use crate::error::ValidationError;
use crate::host::{Host, VariantContext};
use crate::style::owned_css::{Container, Node, Rule};
use crate::variant::descriptor::{AtRuleSpec, Variant, VariantDescriptor};
use crate::variant::validate::validate;

/// The rewrite a variant performs on every rule generated under it.
#[derive(Debug, Clone, PartialEq)]
pub enum Rewrite {
    /// `.C` becomes `.<parent> .<name><sep>C`.
    ClassScope {
        name: String,
        parent_class_name: String,
    },
    /// Rules move into `@<at_rule>` and `.C` becomes `.<name><sep>C`.
    AtRuleWrap { name: String, at_rule: AtRuleSpec },
}

/// Validate `descriptor` and pick its rewrite.
pub fn handle(descriptor: &VariantDescriptor) -> Result<Rewrite, ValidationError> {
    validate(descriptor).map(dispatch)
}

pub fn dispatch(variant: Variant) -> Rewrite {
    match variant {
        Variant::Class {
            name,
            parent_class_name,
        } => Rewrite::ClassScope {
            name,
            parent_class_name,
        },
        Variant::AtRule { name, at_rule } => Rewrite::AtRuleWrap { name, at_rule },
    }
}

impl Rewrite {
    pub fn name(&self) -> &str {
        match self {
            Rewrite::ClassScope { name, .. } | Rewrite::AtRuleWrap { name, .. } => name,
        }
    }

    /// Rewrite the rules in `ctx` in place.
    pub fn apply<H: Host + ?Sized>(&self, host: &H, ctx: &mut VariantContext<'_>) {
        match self {
            Rewrite::ClassScope {
                name,
                parent_class_name,
            } => {
                let parent = host.escape(parent_class_name);
                let separator = ctx.separator().to_string();
                ctx.modify_selectors(|class_name| {
                    format!(
                        ".{} .{}",
                        parent,
                        host.escape(&format!("{}{}{}", name, separator, class_name))
                    )
                });
            }
            Rewrite::AtRuleWrap { name, at_rule } => {
                let separator = ctx.separator().to_string();
                let container = ctx.container();

                let mut wrapper = host.create_at_rule(at_rule);
                wrapper.nodes.extend(container.take_nodes());
                // Only simple `.class` selectors are supported: the first
                // character is dropped whatever it is.
                wrapper.walk_rules(&mut |rule: &mut Rule| {
                    let mut chars = rule.selector.chars();
                    chars.next();
                    let composed = format!("{}{}{}", name, separator, chars.as_str());
                    rule.selector = format!(".{}", host.escape(&composed));
                });
                container.append(Node::AtRule(wrapper));
            }
        }
    }
}
