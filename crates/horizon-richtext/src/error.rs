//! Error types for conversion.

use crate::markup::MarkupError;

/// Result type alias for conversion operations.
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Errors that abort a conversion.
///
/// [`convert`](crate::convert) maps every one of these to an empty document;
/// [`try_convert`](crate::try_convert) returns them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    /// The markup reader gave up on the input.
    #[error("Markup error: {0}")]
    Markup(#[from] MarkupError),

    /// A finished span does not fit inside the document text.
    #[error("Span {start}..{end} out of bounds for text of {len} characters")]
    SpanOutOfBounds { start: usize, end: usize, len: usize },
}

impl ConvertError {
    /// Create a span bounds error.
    pub fn span_out_of_bounds(start: usize, end: usize, len: usize) -> Self {
        Self::SpanOutOfBounds { start, end, len }
    }
}
