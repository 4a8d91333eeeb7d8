//! Error types for variant validation and CSS generation.

use std::path::PathBuf;

/// Prefix carried by every validation message.
pub const MESSAGE_TAG: &str = "[TailwindCSS FeatureDetection plugin]";

/// Result type alias for generation operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The check a descriptor failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    InvalidName,
    InvalidStrategy,
    InvalidParentClassName,
    InvalidAtRule,
}

/// A variant descriptor that cannot be turned into a rewrite.
///
/// `variant` holds the descriptor serialized as JSON, fields in their
/// original order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error(
        "{tag}: The provided variant `{variant}` does not have a valid name. \
         Please ensure a name is correctly set.",
        tag = MESSAGE_TAG
    )]
    InvalidName { variant: String },

    #[error(
        "{tag}: The provided variant `{variant}` does not have a valid strategy. \
         Please ensure the strategy is either `class` or `atRule`.",
        tag = MESSAGE_TAG
    )]
    InvalidStrategy { variant: String },

    #[error(
        "{tag}: The provided variant `{variant}` does not have a valid \"parentClassName\" property. \
         Please ensure a value is correctly set when the variant strategy is set to `class`.",
        tag = MESSAGE_TAG
    )]
    InvalidParentClassName { variant: String },

    #[error(
        "{tag}: The provided variant `{variant}` does not have a valid \"atRule\" property. \
         Please ensure a value is correctly set when the variant strategy is set to `atRule`.",
        tag = MESSAGE_TAG
    )]
    InvalidAtRule { variant: String },
}

impl ValidationError {
    pub fn kind(&self) -> ValidationErrorKind {
        match self {
            Self::InvalidName { .. } => ValidationErrorKind::InvalidName,
            Self::InvalidStrategy { .. } => ValidationErrorKind::InvalidStrategy,
            Self::InvalidParentClassName { .. } => ValidationErrorKind::InvalidParentClassName,
            Self::InvalidAtRule { .. } => ValidationErrorKind::InvalidAtRule,
        }
    }

    /// The serialized descriptor that failed validation.
    pub fn variant(&self) -> &str {
        match self {
            Self::InvalidName { variant }
            | Self::InvalidStrategy { variant }
            | Self::InvalidParentClassName { variant }
            | Self::InvalidAtRule { variant } => variant,
        }
    }
}

/// Errors raised while loading options, parsing utilities or generating variants.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Utility stylesheet could not be parsed or printed.
    #[error("CSS parse error: {message}")]
    Parse { message: String },

    /// A configured variant name was never registered.
    #[error(
        "Your config mentions the \"{0}\" variant, but \"{0}\" doesn't appear to be a variant. \
         Did you forget or misconfigure a plugin that supplies that variant?"
    )]
    UnknownVariant(String),

    #[error("Failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid variant options in '{path}': {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_tag_and_descriptor() {
        let err = ValidationError::InvalidName {
            variant: r#"{"name":" "}"#.to_string(),
        };
        let message = err.to_string();
        assert!(message.starts_with("[TailwindCSS FeatureDetection plugin]: "));
        assert!(message.contains(r#"`{"name":" "}`"#));
        assert!(message.contains("does not have a valid name"));
        assert_eq!(err.kind(), ValidationErrorKind::InvalidName);
    }

    #[test]
    fn validation_error_is_transparent() {
        let err: Error = ValidationError::InvalidAtRule {
            variant: "{}".to_string(),
        }
        .into();
        assert!(err
            .to_string()
            .contains(r#"does not have a valid "atRule" property"#));
    }

    #[test]
    fn unknown_variant_message() {
        let err = Error::UnknownVariant("yolo2".to_string());
        assert!(err.to_string().contains(
            "Your config mentions the \"yolo2\" variant, but \"yolo2\" doesn't appear to be a variant"
        ));
    }
}
