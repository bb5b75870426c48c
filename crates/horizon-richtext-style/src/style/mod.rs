//! Character and paragraph styles.
//!
//! Every field is an `Option`: `None` means "not specified here, inherit".
//! Merging is right-biased per field, so the more specific style goes on the
//! right:
//!
//! ```
//! use horizon_richtext_style::style::CharacterStyle;
//! use horizon_richtext_style::types::FontWeight;
//! use horizon_richtext_style::color::Color;
//!
//! let base = CharacterStyle::new().font_weight(FontWeight::BOLD).color(Color::RED);
//! let merged = base.merged(&CharacterStyle::new().color(Color::BLUE));
//!
//! assert_eq!(merged.font_weight, Some(FontWeight::BOLD));
//! assert_eq!(merged.color, Some(Color::BLUE));
//! ```

mod character;
mod paragraph;

pub use character::CharacterStyle;
pub use paragraph::ParagraphStyle;

/// Copy every field that is set on `$other` into `$self`.
macro_rules! merge_if_set {
    ($self:ident, $other:ident; $($field:ident),+ $(,)?) => {
        $(
            if $other.$field.is_some() {
                $self.$field = $other.$field;
            }
        )+
    };
}

pub(crate) use merge_if_set;

// Ensure styles are Send + Sync
static_assertions::assert_impl_all!(CharacterStyle: Send, Sync);
static_assertions::assert_impl_all!(ParagraphStyle: Send, Sync);
