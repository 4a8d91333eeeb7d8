//! Capabilities a host framework hands to variant rewrites.

use log::debug;

use crate::style::escape::{escape_class_name, last_class_name};
use crate::style::owned_css::{AtRule, Container, Rule};
use crate::variant::AtRuleSpec;

/// Services the rewrites need from whoever generates the CSS.
pub trait Host {
    /// Turn an arbitrary string into a single valid class-name token.
    fn escape(&self, token: &str) -> String;

    /// Build an empty at-rule node from `spec`.
    fn create_at_rule(&self, spec: &AtRuleSpec) -> AtRule {
        AtRule::from_spec(spec)
    }
}

/// Host backed by this crate's own CSS tree and escaping.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultHost;

impl Host for DefaultHost {
    fn escape(&self, token: &str) -> String {
        escape_class_name(token)
    }
}

impl<H: Host + ?Sized> Host for &H {
    fn escape(&self, token: &str) -> String {
        (**self).escape(token)
    }

    fn create_at_rule(&self, spec: &AtRuleSpec) -> AtRule {
        (**self).create_at_rule(spec)
    }
}

/// What a rewrite receives each time the host applies it to a generated rule.
pub struct VariantContext<'a> {
    container: &'a mut dyn Container,
    separator: &'a str,
}

impl<'a> VariantContext<'a> {
    pub fn new(container: &'a mut dyn Container, separator: &'a str) -> Self {
        VariantContext {
            container,
            separator,
        }
    }

    pub fn separator(&self) -> &str {
        self.separator
    }

    pub fn container(&mut self) -> &mut dyn Container {
        &mut *self.container
    }

    /// Replace every selector with `modify(class_name)`, where `class_name`
    /// is the selector's last class, unescaped.
    ///
    /// Rules nested in grouping at-rules such as `@media` are rewritten too.
    /// Selectors without any class are left as they are.
    pub fn modify_selectors<F>(&mut self, mut modify: F)
    where
        F: FnMut(&str) -> String,
    {
        self.container.walk_rules(&mut |rule: &mut Rule| {
            let rewritten: Vec<String> = rule
                .selectors()
                .into_iter()
                .map(|selector| match last_class_name(selector) {
                    Some(class_name) => modify(&class_name),
                    None => {
                        debug!("selector {:?} has no class, leaving it unchanged", selector);
                        selector.to_string()
                    }
                })
                .collect();
            rule.selector = rewritten.join(", ");
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::owned_css::{Node, Stylesheet};
    use pretty_assertions::assert_eq;

    #[test]
    fn default_host_escapes_class_names() {
        assert_eq!(DefaultHost.escape("yo|lo:flex"), r"yo\|lo\:flex");
    }

    #[test]
    fn default_at_rule_copies_spec() {
        let spec = AtRuleSpec {
            name: "media".to_string(),
            params: "print".to_string(),
            extra: Default::default(),
        };
        let at_rule = DefaultHost.create_at_rule(&spec);
        assert_eq!(at_rule, AtRule::new("media", "print"));
    }

    #[test]
    fn modify_selectors_passes_unescaped_class() {
        let mut sheet = Stylesheet::new(vec![
            Rule::new(r".w-1\/2, .block").into(),
            Rule::new("div > p").into(),
        ]);
        let mut seen = Vec::new();
        let mut ctx = VariantContext::new(&mut sheet, ":");
        ctx.modify_selectors(|class_name| {
            seen.push(class_name.to_string());
            format!(".x-{}", class_name.len())
        });

        assert_eq!(seen, vec!["w-1/2", "block"]);
        let selectors: Vec<_> = sheet
            .nodes
            .iter()
            .map(|node| match node {
                Node::Rule(rule) => rule.selector.clone(),
                Node::AtRule(at_rule) => at_rule.name.clone(),
            })
            .collect();
        assert_eq!(selectors, vec![".x-5, .x-5", "div > p"]);
    }

    #[test]
    fn modify_selectors_passes_last_class() {
        let mut sheet = Stylesheet::new(vec![Rule::new(r".group:hover .group-hover\:flex").into()]);
        let mut seen = Vec::new();
        VariantContext::new(&mut sheet, ":").modify_selectors(|class_name| {
            seen.push(class_name.to_string());
            ".done".to_string()
        });
        assert_eq!(seen, vec!["group-hover:flex"]);
    }

    #[test]
    fn modify_selectors_reaches_rules_in_at_rules() {
        let mut media = AtRule::new("media", "(min-width: 640px)");
        media.append(Rule::new(r".sm\:block").into());
        let mut sheet = Stylesheet::new(vec![media.into()]);
        VariantContext::new(&mut sheet, ":").modify_selectors(|class_name| format!(".x {}", class_name));

        let Node::AtRule(media) = &sheet.nodes[0] else {
            panic!("expected the at-rule to stay in place");
        };
        assert_eq!(media.nodes, vec![Node::Rule(Rule::new(".x sm:block"))]);
    }
}
