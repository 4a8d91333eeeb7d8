// src/style/owned_css.rs (fully-owned rule tree the variant rewrites operate on)
use serde_json::{Map, Value};
use std::fmt;

use crate::variant::AtRuleSpec;

/// A fully-owned stylesheet: style rules and grouping at-rules.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stylesheet {
    pub nodes: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Rule(Rule),
    AtRule(AtRule),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    /// Full selector text, e.g. ".red" or ".a, .b > p".
    pub selector: String,
    pub declarations: Vec<Declaration>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub property: String,
    pub value: String,
    pub important: bool,
}

/// `@name params { nodes }`.
#[derive(Debug, Clone, PartialEq)]
pub struct AtRule {
    pub name: String,
    pub params: String,
    /// Engine-specific properties carried over from the spec the node was built from.
    pub extra: Map<String, Value>,
    pub nodes: Vec<Node>,
}

/// A node that owns child nodes.
pub trait Container {
    fn nodes(&self) -> &[Node];

    fn nodes_mut(&mut self) -> &mut Vec<Node>;

    fn append(&mut self, node: Node) {
        self.nodes_mut().push(node);
    }

    /// Detach every child, leaving the container empty.
    fn take_nodes(&mut self) -> Vec<Node> {
        std::mem::take(self.nodes_mut())
    }

    /// Visit every style rule in the subtree, depth first.
    fn walk_rules(&mut self, visit: &mut dyn FnMut(&mut Rule)) {
        for node in self.nodes_mut() {
            match node {
                Node::Rule(rule) => visit(rule),
                Node::AtRule(at_rule) => at_rule.walk_rules(visit),
            }
        }
    }
}

impl Container for Stylesheet {
    fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    fn nodes_mut(&mut self) -> &mut Vec<Node> {
        &mut self.nodes
    }
}

impl Container for AtRule {
    fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    fn nodes_mut(&mut self) -> &mut Vec<Node> {
        &mut self.nodes
    }
}

impl Rule {
    pub fn new(selector: impl Into<String>) -> Self {
        Rule {
            selector: selector.into(),
            declarations: Vec::new(),
        }
    }

    pub fn declaration(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.declarations.push(Declaration {
            property: property.into(),
            value: value.into(),
            important: false,
        });
        self
    }

    /// The comma-separated selectors of this rule, trimmed.
    pub fn selectors(&self) -> Vec<&str> {
        split_top_level_commas(&self.selector)
            .into_iter()
            .map(str::trim)
            .filter(|selector| !selector.is_empty())
            .collect()
    }
}

impl AtRule {
    pub fn new(name: impl Into<String>, params: impl Into<String>) -> Self {
        AtRule {
            name: name.into(),
            params: params.into(),
            extra: Map::new(),
            nodes: Vec::new(),
        }
    }

    /// Build an empty at-rule carrying everything from `spec` verbatim.
    pub fn from_spec(spec: &AtRuleSpec) -> Self {
        AtRule {
            name: spec.name.clone(),
            params: spec.params.clone(),
            extra: spec.extra.clone(),
            nodes: Vec::new(),
        }
    }
}

impl Stylesheet {
    pub fn new(nodes: Vec<Node>) -> Self {
        Stylesheet { nodes }
    }

    /// Serialize without any optional whitespace.
    pub fn to_minified_css(&self) -> String {
        let mut out = String::new();
        for node in &self.nodes {
            write_minified(node, &mut out);
        }
        out
    }
}

impl From<Rule> for Node {
    fn from(rule: Rule) -> Self {
        Node::Rule(rule)
    }
}

impl From<AtRule> for Node {
    fn from(at_rule: AtRule) -> Self {
        Node::AtRule(at_rule)
    }
}

/// Split on commas that are not nested in parentheses/brackets or escaped.
fn split_top_level_commas(selector: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    let mut escaped = false;

    for (idx, ch) in selector.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' => escaped = true,
            '(' | '[' => depth += 1,
            ')' | ']' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&selector[start..idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }
    parts.push(&selector[start..]);
    parts
}

fn write_minified(node: &Node, out: &mut String) {
    match node {
        Node::Rule(rule) => {
            out.push_str(&rule.selector);
            out.push('{');
            let decls: Vec<String> = rule
                .declarations
                .iter()
                .map(|decl| {
                    let mut text = format!("{}:{}", decl.property, decl.value);
                    if decl.important {
                        text.push_str("!important");
                    }
                    text
                })
                .collect();
            out.push_str(&decls.join(";"));
            out.push('}');
        }
        Node::AtRule(at_rule) => {
            out.push('@');
            out.push_str(&at_rule.name);
            let params = collapse_whitespace(&at_rule.params);
            if !params.is_empty() {
                out.push(' ');
                out.push_str(&params);
            }
            out.push('{');
            for child in &at_rule.nodes {
                write_minified(child, out);
            }
            out.push('}');
        }
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn write_indented(f: &mut fmt::Formatter<'_>, node: &Node, depth: usize) -> fmt::Result {
    let indent = "  ".repeat(depth);
    match node {
        Node::Rule(rule) => {
            writeln!(f, "{}{} {{", indent, rule.selector)?;
            for decl in &rule.declarations {
                let important = if decl.important { " !important" } else { "" };
                writeln!(f, "{}  {}: {}{};", indent, decl.property, decl.value, important)?;
            }
            writeln!(f, "{}}}", indent)
        }
        Node::AtRule(at_rule) => {
            let params = at_rule.params.trim();
            if params.is_empty() {
                writeln!(f, "{}@{} {{", indent, at_rule.name)?;
            } else {
                writeln!(f, "{}@{} {} {{", indent, at_rule.name, params)?;
            }
            for child in &at_rule.nodes {
                write_indented(f, child, depth + 1)?;
            }
            writeln!(f, "{}}}", indent)
        }
    }
}

impl fmt::Display for Stylesheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, node) in self.nodes.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            write_indented(f, node, 0)?;
        }
        Ok(())
    }
}
