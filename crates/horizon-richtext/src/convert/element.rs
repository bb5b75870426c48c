//! Recognized elements.

use std::collections::HashMap;
use std::sync::OnceLock;

use horizon_richtext_style::style::CharacterStyle;
use horizon_richtext_style::types::FontWeight;

/// What the converter does with a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum ElementKind {
    Paragraph,
    Division,
    Span,
    Strong,
    Emphasis,
    Blockquote,
    Anchor,
    Underline,
    Strikethrough,
    Superscript,
    Subscript,
    /// `h1`..`h6`, level 1-6.
    Heading(u8),
    Image,
    OrderedList,
    UnorderedList,
    ListItem,
    LineBreak,
    /// Children are converted, nothing is applied.
    Passthrough,
}

static ELEMENTS: OnceLock<HashMap<&'static str, ElementKind>> = OnceLock::new();

impl ElementKind {
    /// Look up a tag name, ignoring ASCII case.
    pub(crate) fn from_tag(tag: &str) -> Self {
        let table = ELEMENTS.get_or_init(|| {
            use ElementKind::*;
            HashMap::from([
                ("p", Paragraph),
                ("div", Division),
                ("span", Span),
                ("strong", Strong),
                ("b", Strong),
                ("em", Emphasis),
                ("i", Emphasis),
                ("cite", Emphasis),
                ("dfn", Emphasis),
                ("blockquote", Blockquote),
                ("a", Anchor),
                ("u", Underline),
                ("ins", Underline),
                ("del", Strikethrough),
                ("s", Strikethrough),
                ("strike", Strikethrough),
                ("sup", Superscript),
                ("sub", Subscript),
                ("h1", Heading(1)),
                ("h2", Heading(2)),
                ("h3", Heading(3)),
                ("h4", Heading(4)),
                ("h5", Heading(5)),
                ("h6", Heading(6)),
                ("img", Image),
                ("ol", OrderedList),
                ("ul", UnorderedList),
                ("li", ListItem),
                ("br", LineBreak),
            ])
        });

        let key = tag.to_ascii_lowercase();
        table.get(key.as_str()).copied().unwrap_or(Self::Passthrough)
    }

    /// Line breaks this element wants before its content when it does not
    /// already start a line. Any positive margin produces a single `\n`.
    pub(crate) fn margin(self) -> usize {
        match self {
            Self::Paragraph | Self::Image | Self::OrderedList | Self::UnorderedList | Self::ListItem => 1,
            Self::Division => 2,
            _ => 0,
        }
    }
}

static HEADINGS: OnceLock<[CharacterStyle; 6]> = OnceLock::new();

/// Character style of heading `level` (1-6, clamped).
pub(crate) fn heading_style(level: u8) -> CharacterStyle {
    let table = HEADINGS.get_or_init(|| {
        let heading = |weight, size| CharacterStyle::new().font_weight(weight).font_size(size);
        [
            heading(FontWeight::BOLD, 32.0),
            heading(FontWeight::BOLD, 26.0),
            heading(FontWeight::BOLD, 20.0),
            heading(FontWeight::SEMI_BOLD, 16.0),
            heading(FontWeight::SEMI_BOLD, 14.0),
            heading(FontWeight::SEMI_BOLD, 10.0),
        ]
    });
    table[usize::from(level.clamp(1, 6)) - 1]
}
