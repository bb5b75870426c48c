//! Conversion settings.

use horizon_richtext_style::color::Color;
use horizon_richtext_style::types::TextIndent;

/// Settings for the markup reader.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MarkupOptions {
    /// Maximum number of simultaneously open elements. `None` (the default)
    /// accepts any depth.
    pub max_depth: Option<usize>,
}

impl MarkupOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject input with more than `max_depth` simultaneously open elements.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }
}

/// Settings for HTML to rich-text conversion.
///
/// The defaults reproduce the standard element styles; override individual
/// values with the `with_*` methods.
///
/// ```
/// use horizon_richtext::ConvertOptions;
/// use horizon_richtext_style::color::Color;
///
/// let options = ConvertOptions::default()
///     .with_link_color(Color::RED)
///     .with_max_depth(64);
///
/// assert_eq!(options.link_color, Color::RED);
/// assert_eq!(options.markup.max_depth, Some(64));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ConvertOptions {
    /// Foreground color of `<a href>` text.
    pub link_color: Color,
    /// Glyph appended for each `<img src>`.
    pub image_placeholder: char,
    /// Font size of the image placeholder, in points.
    pub image_font_size: f32,
    /// Indent applied by `<blockquote>`.
    pub blockquote_indent: TextIndent,
    /// Indent applied by `<ol>` and `<ul>`.
    pub list_indent: TextIndent,
    /// Font size of `<sup>` and `<sub>` text, in points.
    pub script_font_size: f32,
    /// Baseline shift of `<sup>` text.
    pub superscript_shift: f32,
    /// Baseline shift of `<sub>` text.
    pub subscript_shift: f32,
    /// Markup reader settings.
    pub markup: MarkupOptions,
}

impl ConvertOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_link_color(mut self, color: Color) -> Self {
        self.link_color = color;
        self
    }

    pub fn with_image_placeholder(mut self, placeholder: char) -> Self {
        self.image_placeholder = placeholder;
        self
    }

    pub fn with_image_font_size(mut self, size: f32) -> Self {
        self.image_font_size = size;
        self
    }

    pub fn with_blockquote_indent(mut self, first_line: f32, rest: f32) -> Self {
        self.blockquote_indent = TextIndent::new(first_line, rest);
        self
    }

    pub fn with_list_indent(mut self, first_line: f32, rest: f32) -> Self {
        self.list_indent = TextIndent::new(first_line, rest);
        self
    }

    pub fn with_script_font_size(mut self, size: f32) -> Self {
        self.script_font_size = size;
        self
    }

    /// Set the superscript and subscript baseline shifts.
    pub fn with_script_shifts(mut self, superscript: f32, subscript: f32) -> Self {
        self.superscript_shift = superscript;
        self.subscript_shift = subscript;
        self
    }

    /// Set the markup nesting limit. There is none by default.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.markup.max_depth = Some(max_depth);
        self
    }
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            link_color: Color::BLUE,
            image_placeholder: '\u{FFFC}',
            image_font_size: 30.0,
            blockquote_indent: TextIndent::new(16.0, 16.0),
            list_indent: TextIndent::new(20.0, 32.0),
            script_font_size: 10.0,
            superscript_shift: 0.4,
            subscript_shift: -0.2,
            markup: MarkupOptions::default(),
        }
    }
}
