//! The converted document.
//!
//! A [`RichTextDocument`] is plain text plus two families of style ranges.
//! All offsets count Unicode scalar values (`char`s), not bytes.

use horizon_richtext_style::style::{CharacterStyle, ParagraphStyle};

/// A style applied to the character range `start..end`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span<T> {
    pub start: usize,
    pub end: usize,
    pub style: T,
}

impl<T> Span<T> {
    pub fn new(start: usize, end: usize, style: T) -> Self {
        Self { start, end, style }
    }

    /// Number of characters covered.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `offset` falls inside this span.
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    /// Whether `other` lies entirely within this span.
    pub fn encloses<U>(&self, other: &Span<U>) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Whether the two spans share no character.
    pub fn is_disjoint<U>(&self, other: &Span<U>) -> bool {
        self.end <= other.start || other.end <= self.start
    }
}

/// A character style range.
pub type CharacterSpan = Span<CharacterStyle>;
/// A paragraph style range.
pub type ParagraphSpan = Span<ParagraphStyle>;

/// Plain text with character and paragraph style ranges.
///
/// Spans of each family are ordered by the point at which their element was
/// opened. Two spans are always either disjoint or nested.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RichTextDocument {
    text: String,
    character_spans: Vec<CharacterSpan>,
    paragraph_spans: Vec<ParagraphSpan>,
}

impl RichTextDocument {
    pub(crate) fn new(
        text: String,
        character_spans: Vec<CharacterSpan>,
        paragraph_spans: Vec<ParagraphSpan>,
    ) -> Self {
        Self {
            text,
            character_spans,
            paragraph_spans,
        }
    }

    /// A document with no text and no spans.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The plain text.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn character_spans(&self) -> &[CharacterSpan] {
        &self.character_spans
    }

    pub fn paragraph_spans(&self) -> &[ParagraphSpan] {
        &self.paragraph_spans
    }

    /// Length of the text in characters.
    pub fn len_chars(&self) -> usize {
        self.text.chars().count()
    }

    /// Whether the document has neither text nor spans.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.character_spans.is_empty() && self.paragraph_spans.is_empty()
    }

    /// The text covered by a span, or `None` if it is out of range.
    pub fn span_text<T>(&self, span: &Span<T>) -> Option<&str> {
        self.slice(span.start, span.end)
    }

    /// The text between two character offsets.
    pub fn slice(&self, start: usize, end: usize) -> Option<&str> {
        if start > end {
            return None;
        }
        let from = self.byte_offset(start)?;
        let to = self.byte_offset(end)?;
        self.text.get(from..to)
    }

    /// The effective character style at `offset`: every covering span merged
    /// in opening order.
    pub fn character_style_at(&self, offset: usize) -> CharacterStyle {
        self.character_spans
            .iter()
            .filter(|span| span.contains(offset))
            .fold(CharacterStyle::new(), |acc, span| acc.merged(&span.style))
    }

    /// The paragraph style covering `offset`, if any.
    pub fn paragraph_style_at(&self, offset: usize) -> Option<&ParagraphStyle> {
        self.paragraph_spans
            .iter()
            .find(|span| span.contains(offset))
            .map(|span| &span.style)
    }

    fn byte_offset(&self, chars: usize) -> Option<usize> {
        if chars == 0 {
            return Some(0);
        }
        match self.text.char_indices().nth(chars) {
            Some((idx, _)) => Some(idx),
            None if self.text.chars().count() == chars => Some(self.text.len()),
            None => None,
        }
    }
}

// Ensure documents can be shared across threads
static_assertions::assert_impl_all!(RichTextDocument: Send, Sync);
