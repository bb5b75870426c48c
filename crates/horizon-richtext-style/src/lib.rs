//! Style values for Horizon rich text.
//!
//! This crate holds the character and paragraph styles that a converted
//! document attaches to ranges of text, together with the small amount of CSS
//! needed to produce them:
//!
//! - **Colors**: hex, `rgb()`/`rgba()`, `hsl()`/`hsla()` and named colors
//! - **Inline styles**: `style="..."` declarations and the `align` attribute
//! - **Styles**: option-per-field structs with right-biased merging
//!
//! # Example
//!
//! ```
//! use horizon_richtext_style::prelude::*;
//!
//! let inline = InlineStyle::parse(Some("center"), Some("color: #00f; text-decoration: underline"));
//!
//! assert_eq!(inline.paragraph.text_align, Some(TextAlign::Center));
//! assert_eq!(inline.character.color, Some(Color::BLUE));
//! assert_eq!(inline.character.decoration, Some(TextDecoration::Underline));
//! ```

pub mod color;
pub mod parser;
pub mod style;
pub mod types;

mod error;

pub use error::{Error, Result};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::color::{Color, resolve_color};
    pub use crate::parser::InlineStyle;
    pub use crate::style::{CharacterStyle, ParagraphStyle};
    pub use crate::types::{
        BaselineShift, FontStyle, FontWeight, Shadow, TextAlign, TextDecoration, TextIndent,
    };
}
