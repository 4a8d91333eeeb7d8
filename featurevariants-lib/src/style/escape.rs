//! Class-name escaping and extraction.

use std::fmt;

use cssparser::{serialize_identifier, Parser, ParserInput, Token};

/// Escape `token` so it can be used as a single class-name token.
///
/// ```
/// use featurevariants_lib::style::escape::escape_class_name;
///
/// assert_eq!(escape_class_name("yo|lo:flex"), "yo\\|lo\\:flex");
/// ```
pub fn escape_class_name(token: &str) -> String {
    EscapedClassName(token).to_string()
}

/// Displays the wrapped token escaped as a single class-name token.
#[derive(Debug, Clone, Copy)]
pub struct EscapedClassName<'a>(pub &'a str);

impl fmt::Display for EscapedClassName<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        serialize_identifier(self.0, f)
    }
}

/// The last class name in `selector`, with escapes resolved.
///
/// Only top-level tokens count; classes inside `:not(...)` and other
/// functional pseudo-classes are not looked at.
pub fn last_class_name(selector: &str) -> Option<String> {
    let mut input = ParserInput::new(selector);
    let mut parser = Parser::new(&mut input);
    let mut after_dot = false;
    let mut last = None;

    while let Ok(token) = parser.next_including_whitespace() {
        match token {
            Token::Delim('.') => {
                after_dot = true;
                continue;
            }
            Token::Ident(name) if after_dot => last = Some(name.to_string()),
            _ => {}
        }
        after_dot = false;
    }
    last
}
