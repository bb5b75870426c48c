//! Value types carried by character and paragraph styles.

use crate::color::Color;

/// Font weight, typically ranging from 100 (thin) to 900 (black).
///
/// Bold and semi-bold are distinct weights: headings past level three use
/// [`FontWeight::SEMI_BOLD`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FontWeight(pub u16);

impl FontWeight {
    /// Normal/regular weight (400).
    pub const NORMAL: Self = Self(400);
    /// Semi-bold weight (600).
    pub const SEMI_BOLD: Self = Self(600);
    /// Bold weight (700).
    pub const BOLD: Self = Self(700);

    /// Create a font weight from a numeric value (100-900).
    pub fn new(weight: u16) -> Self {
        Self(weight.clamp(100, 900))
    }

    /// Get the numeric weight value.
    pub const fn value(self) -> u16 {
        self.0
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

/// Font style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FontStyle {
    /// Upright glyphs.
    #[default]
    Normal,
    /// Italic glyphs.
    Italic,
}

/// Text decoration line.
///
/// `None` is an explicit value: it overrides an inherited decoration rather
/// than leaving the field unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TextDecoration {
    None,
    Underline,
    LineThrough,
}

impl TextDecoration {
    /// Parse from a CSS `text-decoration` value.
    ///
    /// Values other than `underline` and `line-through` map to `None`.
    pub fn from_css(s: &str) -> Self {
        let s = s.trim();
        if s.eq_ignore_ascii_case("underline") {
            Self::Underline
        } else if s.eq_ignore_ascii_case("line-through") {
            Self::LineThrough
        } else {
            Self::None
        }
    }
}

/// Text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TextAlign {
    /// Align to the start of the text direction (left for LTR, right for RTL).
    #[default]
    Start,
    /// Align to the end of the text direction (right for LTR, left for RTL).
    End,
    /// Center the text.
    Center,
    /// Justify text to fill the available width.
    Justify,
}

impl TextAlign {
    /// Parse from a CSS `text-align` value or an HTML `align` attribute.
    ///
    /// `left` folds into `Start` and `right` into `End`.
    pub fn from_css(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "start" | "left" => Some(Self::Start),
            "end" | "right" => Some(Self::End),
            "center" => Some(Self::Center),
            "justify" => Some(Self::Justify),
            _ => None,
        }
    }
}

/// Paragraph indentation in points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextIndent {
    /// Indent of the first line.
    pub first_line: f32,
    /// Indent of every following line.
    pub rest: f32,
}

impl TextIndent {
    pub const fn new(first_line: f32, rest: f32) -> Self {
        Self { first_line, rest }
    }
}

/// Vertical baseline shift as a fraction of the font size.
///
/// Positive values raise the text.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaselineShift(pub f32);

/// A text shadow.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shadow {
    /// Horizontal offset in pixels.
    pub offset_x: f32,
    /// Vertical offset in pixels.
    pub offset_y: f32,
    /// Blur radius in pixels.
    pub blur_radius: f32,
    /// Shadow color, `None` when unspecified.
    pub color: Option<Color>,
}

impl Shadow {
    /// Blur radius used when a shadow does not give one.
    pub const DEFAULT_BLUR_RADIUS: f32 = 0.01;
}

impl Default for Shadow {
    fn default() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            blur_radius: Self::DEFAULT_BLUR_RADIUS,
            color: None,
        }
    }
}
