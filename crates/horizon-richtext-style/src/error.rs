//! Error types for the styling crate.

/// Result type alias for style operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while parsing style values.
///
/// The converter never surfaces these to its callers: leaf parsers report them
/// so they can be logged, then the affected field is left unset.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A color value could not be resolved.
    #[error("Invalid color '{value}'")]
    InvalidColor { value: String },

    /// A declaration did not have the `name: value` shape.
    #[error("Malformed declaration '{declaration}'")]
    MalformedDeclaration { declaration: String },

    /// A recognized property carried a value it does not accept.
    #[error("Invalid value for property '{property}': {message}")]
    InvalidValue { property: String, message: String },
}

impl Error {
    /// Create a color error.
    pub fn invalid_color(value: impl Into<String>) -> Self {
        Self::InvalidColor {
            value: value.into(),
        }
    }

    /// Create a malformed-declaration error.
    pub fn malformed_declaration(declaration: impl Into<String>) -> Self {
        Self::MalformedDeclaration {
            declaration: declaration.into(),
        }
    }

    /// Create a value error.
    pub fn invalid_value(property: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            property: property.into(),
            message: message.into(),
        }
    }
}
