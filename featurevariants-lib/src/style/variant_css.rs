use crate::error::{Error, Result};
use crate::style::owned_css::{AtRule, Declaration, Node, Rule, Stylesheet};
use lightningcss::declaration::DeclarationBlock;
use lightningcss::printer::PrinterOptions;
use lightningcss::rules::{style::StyleRule, CssRule, CssRuleList};
use lightningcss::stylesheet::{ParserOptions, StyleSheet as LightningStyleSheet};
use lightningcss::traits::ToCss;
use log::{debug, warn};

/// Parse a raw CSS string (LightningCSS) and convert it to a fully-owned stylesheet.
///
/// `@media` and `@supports` preludes are printed back by LightningCSS, so
/// their params come out normalized: `(min-width: 640px)` becomes
/// `(width >= 640px)`.
pub fn parse(css_text: &str) -> Result<Stylesheet> {
    let sheet = LightningStyleSheet::parse(css_text, ParserOptions::default())
        .map_err(|e| Error::parse(e.to_string()))?;

    let nodes = convert_rules(&sheet.rules)?;
    debug!("parsed {} top-level nodes", nodes.len());
    Ok(Stylesheet::new(nodes))
}

fn convert_rules(rules: &CssRuleList<'_>) -> Result<Vec<Node>> {
    let mut nodes = Vec::new();

    for rule in &rules.0 {
        match rule {
            CssRule::Style(style_rule) => {
                nodes.push(Node::Rule(convert_style_rule(style_rule)?));
            }
            CssRule::Media(media_rule) => {
                let mut at_rule = AtRule::new("media", to_css(&media_rule.query)?);
                at_rule.nodes = convert_rules(&media_rule.rules)?;
                nodes.push(Node::AtRule(at_rule));
            }
            CssRule::Supports(supports_rule) => {
                let mut at_rule = AtRule::new("supports", to_css(&supports_rule.condition)?);
                at_rule.nodes = convert_rules(&supports_rule.rules)?;
                nodes.push(Node::AtRule(at_rule));
            }
            CssRule::MozDocument(document_rule) => {
                // LightningCSS only accepts the url-prefix() form.
                let mut at_rule = AtRule::new("-moz-document", "url-prefix()");
                at_rule.nodes = convert_rules(&document_rule.rules)?;
                nodes.push(Node::AtRule(at_rule));
            }
            other => {
                warn!("skipping unsupported rule: {}", describe(other));
            }
        }
    }

    Ok(nodes)
}

/// Copy a single StyleRule's selectors + declarations into an owned Rule.
fn convert_style_rule(style_rule: &StyleRule<'_>) -> Result<Rule> {
    let mut selectors = Vec::new();
    for selector in &style_rule.selectors.0 {
        selectors.push(to_css(selector)?);
    }

    let mut rule = Rule::new(selectors.join(", "));
    rule.declarations = convert_declarations(&style_rule.declarations)?;
    Ok(rule)
}

fn convert_declarations(block: &DeclarationBlock<'_>) -> Result<Vec<Declaration>> {
    let normal = block.declarations.iter().map(|p| (p, false));
    let important = block.important_declarations.iter().map(|p| (p, true));

    normal
        .chain(important)
        .map(|(property, important)| {
            let value = property
                .value_to_css_string(PrinterOptions::default())
                .map_err(|e| Error::parse(e.to_string()))?;
            Ok(Declaration {
                property: to_css(&property.property_id())?,
                value,
                important,
            })
        })
        .collect()
}

fn to_css<T: ToCss>(value: &T) -> Result<String> {
    value
        .to_css_string(PrinterOptions::default())
        .map_err(|e| Error::parse(e.to_string()))
}

fn describe(rule: &CssRule<'_>) -> &'static str {
    match rule {
        CssRule::Import(_) => "@import",
        CssRule::FontFace(_) => "@font-face",
        CssRule::Keyframes(_) => "@keyframes",
        CssRule::Unknown(_) => "unknown at-rule",
        _ => "rule",
    }
}
