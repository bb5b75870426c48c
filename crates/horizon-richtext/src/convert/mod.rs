//! Markup events to rich-text document.
//!
//! [`Converter`] is a [`MarkupSink`]: feed it open, close and text events,
//! then call [`Converter::finish`] to obtain the document. The usual entry
//! point is [`crate::convert`], which drives the markup reader for you.

mod element;
mod list;
mod stack;
mod text;

use horizon_richtext_style::parser::InlineStyle;
use horizon_richtext_style::style::{CharacterStyle, ParagraphStyle};
use horizon_richtext_style::types::TextDecoration;

use element::{ElementKind, heading_style};
use list::{ListContext, ListKind};
use stack::StyleStack;
use text::TextBuffer;

use crate::document::RichTextDocument;
use crate::error::{ConvertError, Result};
use crate::logging::targets;
use crate::markup::{Attributes, MarkupSink};
use crate::options::ConvertOptions;

/// Builds a [`RichTextDocument`] from a well-nested event stream.
///
/// # Example
///
/// ```
/// use horizon_richtext::convert::Converter;
/// use horizon_richtext::markup::{Attributes, MarkupSink};
///
/// let mut converter = Converter::new();
/// converter.on_open("b", &Attributes::new());
/// converter.on_text("bold");
/// converter.on_close("b");
///
/// let doc = converter.finish();
/// assert_eq!(doc.text(), "bold");
/// assert_eq!(doc.character_spans().len(), 1);
/// ```
#[derive(Debug)]
pub struct Converter {
    options: ConvertOptions,
    text: TextBuffer,
    styles: StyleStack,
    lists: Vec<ListContext>,
}

impl Converter {
    /// Create a converter with default options.
    pub fn new() -> Self {
        Self::with_options(ConvertOptions::default())
    }

    pub fn with_options(options: ConvertOptions) -> Self {
        Self {
            options,
            text: TextBuffer::new(),
            styles: StyleStack::new(),
            lists: Vec::new(),
        }
    }

    /// Assemble the document, falling back to an empty one on failure.
    ///
    /// Elements still open are discarded along with their spans.
    pub fn finish(self) -> RichTextDocument {
        match self.try_finish() {
            Ok(doc) => doc,
            Err(e) => {
                tracing::warn!(target: targets::DOCUMENT, "assembly failed, returning empty document: {}", e);
                RichTextDocument::empty()
            }
        }
    }

    /// Assemble the document, reporting failures.
    ///
    /// Fails if a finished span does not fit the text.
    pub fn try_finish(self) -> Result<RichTextDocument> {
        let (character_spans, paragraph_spans) = self.styles.finish();
        let text = self.text.into_string();
        let len = text.chars().count();

        let bounds = character_spans
            .iter()
            .map(|s| (s.start, s.end))
            .chain(paragraph_spans.iter().map(|s| (s.start, s.end)));
        for (start, end) in bounds {
            if start > end || end > len {
                return Err(ConvertError::span_out_of_bounds(start, end, len));
            }
        }

        tracing::debug!(
            target: targets::DOCUMENT,
            chars = len,
            character_spans = character_spans.len(),
            paragraph_spans = paragraph_spans.len(),
            "document assembled"
        );
        Ok(RichTextDocument::new(text, character_spans, paragraph_spans))
    }

    /// Shared open path of style-bearing elements.
    ///
    /// A pending paragraph style that will become active counts as the line
    /// break, so the margin break is skipped.
    fn start_element(
        &mut self,
        inline: InlineStyle,
        character: CharacterStyle,
        paragraph: ParagraphStyle,
        margin: usize,
    ) {
        let character = character.merged(&inline.character);
        let paragraph = paragraph.merged(&inline.paragraph);
        let pending_paragraph = (!paragraph.is_empty()).then_some(paragraph);

        if pending_paragraph.is_some() && !self.styles.paragraph_active() {
            self.text.mark_line_start();
        }
        if margin > 0 && !self.text.at_line_start() {
            self.text.push_char('\n');
            self.text.mark_line_start();
        }

        self.styles
            .push_frame(Some(character), pending_paragraph, self.text.len_chars());
    }

    fn end_element(&mut self) {
        if !self.styles.pop_frame(self.text.len_chars()) {
            tracing::trace!(target: targets::STACK, "close with no open frame");
        }
    }

    fn start_heading(&mut self, attributes: &Attributes, level: u8) {
        if !self.text.at_line_start() && !self.text.is_empty() {
            self.text.push_str("\n\n");
            self.text.mark_line_start();
        } else {
            self.text.push_char('\n');
        }
        self.start_element(
            parse_inline(attributes),
            heading_style(level),
            ParagraphStyle::new(),
            0,
        );
    }

    fn end_heading(&mut self) {
        self.end_element();
        self.text.mark_line_start();
        self.text.push_str("\n\n");
    }

    /// `<img src>` becomes one placeholder glyph in its own frame. Images
    /// without `src` are ignored.
    fn image(&mut self, attributes: &Attributes) {
        if !attributes.contains("src") {
            tracing::trace!(target: targets::CONVERT, "ignoring <img> without src");
            return;
        }
        let style = CharacterStyle::new().font_size(self.options.image_font_size);
        self.start_element(
            parse_inline(attributes),
            style,
            ParagraphStyle::new(),
            ElementKind::Image.margin(),
        );
        self.text.push_char(self.options.image_placeholder);
        self.end_element();
    }

    fn start_list(&mut self, attributes: &Attributes, kind: ListKind) {
        let inline = parse_inline(attributes);
        self.lists.push(ListContext::new(
            kind,
            attributes.get("type"),
            inline.list_style_type.as_deref(),
            attributes.get("start"),
        ));

        let indent = self.options.list_indent;
        self.start_element(
            inline,
            CharacterStyle::new(),
            ParagraphStyle::new().text_indent(indent.first_line, indent.rest),
            1,
        );
    }

    fn end_list(&mut self) {
        self.lists.pop();
        self.end_element();
    }

    fn start_list_item(&mut self, attributes: &Attributes) {
        self.start_element(
            parse_inline(attributes),
            CharacterStyle::new(),
            ParagraphStyle::new(),
            ElementKind::ListItem.margin(),
        );
        if let Some(list) = self.lists.last_mut() {
            let marker = list.next_marker();
            self.text.push_str(&marker);
        }
    }

    /// Character style an element applies on its own, before attributes.
    fn own_style(&self, kind: ElementKind, attributes: &Attributes) -> CharacterStyle {
        let options = &self.options;
        match kind {
            ElementKind::Strong => CharacterStyle::new().bold(),
            ElementKind::Underline => CharacterStyle::new().decoration(TextDecoration::Underline),
            ElementKind::Strikethrough => CharacterStyle::new().decoration(TextDecoration::LineThrough),
            ElementKind::Superscript => CharacterStyle::new()
                .font_size(options.script_font_size)
                .baseline_shift(options.superscript_shift),
            ElementKind::Subscript => CharacterStyle::new()
                .font_size(options.script_font_size)
                .baseline_shift(options.subscript_shift),
            ElementKind::Anchor if attributes.contains("href") => CharacterStyle::new()
                .color(options.link_color)
                .decoration(TextDecoration::Underline),
            _ => CharacterStyle::new(),
        }
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkupSink for Converter {
    fn on_open(&mut self, tag: &str, attributes: &Attributes) {
        let kind = ElementKind::from_tag(tag);
        match kind {
            ElementKind::LineBreak | ElementKind::Passthrough => {}
            ElementKind::Emphasis => {
                // Italic only: attributes are not read and no break is added.
                self.styles.push_frame(
                    Some(CharacterStyle::new().italic()),
                    None,
                    self.text.len_chars(),
                );
            }
            ElementKind::Blockquote => {
                let indent = self.options.blockquote_indent;
                self.start_element(
                    parse_inline(attributes),
                    CharacterStyle::new().italic(),
                    ParagraphStyle::new().text_indent(indent.first_line, indent.rest),
                    0,
                );
            }
            ElementKind::Heading(level) => self.start_heading(attributes, level),
            ElementKind::Image => self.image(attributes),
            ElementKind::OrderedList => self.start_list(attributes, ListKind::Ordered),
            ElementKind::UnorderedList => self.start_list(attributes, ListKind::Unordered),
            ElementKind::ListItem => self.start_list_item(attributes),
            ElementKind::Paragraph
            | ElementKind::Division
            | ElementKind::Span
            | ElementKind::Strong
            | ElementKind::Anchor
            | ElementKind::Underline
            | ElementKind::Strikethrough
            | ElementKind::Superscript
            | ElementKind::Subscript => {
                let own = self.own_style(kind, attributes);
                self.start_element(parse_inline(attributes), own, ParagraphStyle::new(), kind.margin());
            }
        }
    }

    fn on_close(&mut self, tag: &str) {
        match ElementKind::from_tag(tag) {
            ElementKind::LineBreak => self.text.push_char('\n'),
            // The image frame was closed when it opened.
            ElementKind::Image | ElementKind::Passthrough => {}
            ElementKind::Heading(_) => self.end_heading(),
            ElementKind::OrderedList | ElementKind::UnorderedList => self.end_list(),
            _ => self.end_element(),
        }
        tracing::trace!(target: targets::STACK, tag, depth = self.styles.depth(), "closed");
    }

    fn on_text(&mut self, text: &str) {
        self.text.append_run(text);
    }
}

fn parse_inline(attributes: &Attributes) -> InlineStyle {
    InlineStyle::parse(attributes.get("align"), attributes.get("style"))
}

// Ensure converters can move between threads
static_assertions::assert_impl_all!(Converter: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use horizon_richtext_style::types::{TextAlign, TextIndent};

    fn attrs(pairs: &[(&str, &str)]) -> Attributes {
        pairs.iter().copied().collect()
    }

    #[test]
    fn paragraph_at_document_start_breaks() {
        let mut c = Converter::new();
        c.on_open("p", &Attributes::new());
        c.on_text("hello");
        c.on_close("p");
        let doc = c.finish();
        assert_eq!(doc.text(), "\nhello");
        assert!(doc.paragraph_spans().is_empty());
    }

    #[test]
    fn aligned_paragraph_replaces_margin_break() {
        let mut c = Converter::new();
        c.on_text("a");
        c.on_open("p", &attrs(&[("align", "center")]));
        c.on_text("b");
        c.on_close("p");
        let doc = c.finish();
        assert_eq!(doc.text(), "ab");
        let span = &doc.paragraph_spans()[0];
        assert_eq!((span.start, span.end), (1, 2));
        assert_eq!(span.style.text_align, Some(TextAlign::Center));
    }

    #[test]
    fn emphasis_ignores_attributes() {
        let mut c = Converter::new();
        c.on_open("em", &attrs(&[("style", "color:red"), ("align", "center")]));
        c.on_text("x");
        c.on_close("em");
        let doc = c.finish();
        assert!(doc.paragraph_spans().is_empty());
        let style = doc.character_spans()[0].style;
        assert_eq!(style, CharacterStyle::new().italic());
    }

    #[test]
    fn blockquote_indents_and_pops() {
        let mut c = Converter::new();
        c.on_open("blockquote", &Attributes::new());
        c.on_text("q");
        c.on_close("blockquote");
        c.on_text("after");
        let doc = c.finish();
        let para = &doc.paragraph_spans()[0];
        assert_eq!(para.style.text_indent, Some(TextIndent::new(16.0, 16.0)));
        assert_eq!((para.start, para.end), (0, 1));
        assert_eq!(doc.character_spans()[0].end, 1);
    }

    #[test]
    fn anchor_without_href_has_no_style() {
        let mut c = Converter::new();
        c.on_open("a", &Attributes::new());
        c.on_text("x");
        c.on_close("a");
        assert!(c.finish().character_spans().is_empty());
    }

    #[test]
    fn image_without_src_is_ignored() {
        let mut c = Converter::new();
        c.on_open("img", &attrs(&[("alt", "x")]));
        c.on_close("img");
        let doc = c.finish();
        assert!(doc.is_empty());
    }

    #[test]
    fn custom_placeholder() {
        let mut c = Converter::with_options(ConvertOptions::default().with_image_placeholder('*'));
        c.on_text("a");
        c.on_open("img", &attrs(&[("src", "x.png")]));
        c.on_close("img");
        let doc = c.finish();
        assert_eq!(doc.text(), "a\n*");
        let span = &doc.character_spans()[0];
        assert_eq!((span.start, span.end), (2, 3));
        assert_eq!(span.style.font_size, Some(30.0));
    }

    #[test]
    fn break_does_not_touch_line_start() {
        let mut c = Converter::new();
        c.on_text("a");
        c.on_open("br", &Attributes::new());
        c.on_close("br");
        c.on_open("p", &Attributes::new());
        c.on_text("b");
        c.on_close("p");
        assert_eq!(c.finish().text(), "a\n\nb");
    }

    #[test]
    fn finish_is_infallible_for_sink_callers() {
        let drive = |c: &mut Converter| {
            c.on_open("b", &Attributes::new());
            c.on_text("open");
            c.on_open("i", &Attributes::new());
            c.on_text("closed");
            c.on_close("i");
        };

        let mut c = Converter::new();
        drive(&mut c);
        let doc: RichTextDocument = c.finish();
        assert_eq!(doc.text(), "openclosed");
        let spans: Vec<(usize, usize)> = doc.character_spans().iter().map(|s| (s.start, s.end)).collect();
        assert_eq!(spans, [(4, 10)]);

        let mut c = Converter::new();
        drive(&mut c);
        assert_eq!(c.try_finish(), Ok(doc));
    }
}
