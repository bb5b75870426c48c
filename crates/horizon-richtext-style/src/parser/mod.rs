//! Inline style parsing.
//!
//! Only the `style` and `align` attributes of an element are read; there are
//! no selectors, stylesheets or cascade. See [`InlineStyle::parse`].

mod declaration;
mod inline;
mod shadow;

pub use declaration::{Declaration, parse_declarations};
pub use inline::InlineStyle;
pub use shadow::parse_text_shadow;

pub(crate) const TARGET: &str = "horizon_richtext_style::parser";
