//! HTML to rich-text conversion for Horizon.
//!
//! This crate turns an HTML fragment into a [`RichTextDocument`]: plain text
//! plus character style ranges (weight, italics, decoration, colors, size,
//! baseline shift, shadow) and paragraph style ranges (alignment, indent).
//!
//! - **Markup reading**: a lenient tokenizer with simple tag balancing
//! - **Conversion**: a stack of element frames that opens and closes spans
//! - **Styling**: inline `style`/`align` attributes via [`horizon_richtext_style`]
//!
//! # Example
//!
//! ```
//! use horizon_richtext::convert;
//! use horizon_richtext_style::types::FontWeight;
//!
//! let doc = convert("<b>Hello</b> world");
//!
//! assert_eq!(doc.text(), "Hello world");
//! let bold = &doc.character_spans()[0];
//! assert_eq!((bold.start, bold.end), (0, 5));
//! assert_eq!(bold.style.font_weight, Some(FontWeight::BOLD));
//! ```
//!
//! # Failure
//!
//! [`convert`] never fails: if the input cannot be converted the result is an
//! empty document and a warning is logged. Use [`try_convert`] to see the
//! error instead.

pub mod convert;
pub mod document;
pub mod logging;
pub mod markup;
pub mod options;

mod error;

pub use document::{CharacterSpan, ParagraphSpan, RichTextDocument, Span};
pub use error::{ConvertError, Result};
pub use options::{ConvertOptions, MarkupOptions};

use logging::targets;

/// Convert an HTML fragment with default options.
pub fn convert(html: &str) -> RichTextDocument {
    convert_with_options(html, &ConvertOptions::default())
}

/// Convert an HTML fragment, falling back to an empty document on failure.
pub fn convert_with_options(html: &str, options: &ConvertOptions) -> RichTextDocument {
    match try_convert(html, options) {
        Ok(doc) => doc,
        Err(e) => {
            tracing::warn!(target: targets::CONVERT, "conversion failed, returning empty document: {}", e);
            RichTextDocument::empty()
        }
    }
}

/// Convert an HTML fragment, reporting failures.
#[tracing::instrument(skip_all, target = "horizon_richtext::convert", level = "debug")]
pub fn try_convert(html: &str, options: &ConvertOptions) -> Result<RichTextDocument> {
    let mut converter = convert::Converter::with_options(options.clone());
    markup::read(html, &options.markup, &mut converter)?;
    converter.try_finish()
}

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::convert::Converter;
    pub use crate::markup::{Attributes, MarkupSink};
    pub use crate::{
        CharacterSpan, ConvertError, ConvertOptions, ParagraphSpan, RichTextDocument, Span,
        convert, convert_with_options, try_convert,
    };
    pub use horizon_richtext_style::prelude::*;
}
