//! Stack-disciplined span bookkeeping.
//!
//! Every style-bearing element pushes one [`ElementFrame`] when it opens and
//! pops it when it closes. A frame remembers which spans it opened; popping
//! closes exactly those, innermost first, so spans always nest.

use horizon_richtext_style::style::{CharacterStyle, ParagraphStyle};

use crate::document::{CharacterSpan, ParagraphSpan, Span};
use crate::logging::targets;

#[derive(Debug, Clone)]
struct OpenSpan<T> {
    start: usize,
    end: Option<usize>,
    style: T,
}

impl<T> OpenSpan<T> {
    fn new(start: usize, style: T) -> Self {
        Self {
            start,
            end: None,
            style,
        }
    }

    fn into_span(self) -> Option<Span<T>> {
        self.end.map(|end| Span::new(self.start, end, self.style))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SpanHandle {
    Character(usize),
    Paragraph(usize),
}

/// Bookkeeping for one open style-bearing element.
#[derive(Debug, Default)]
struct ElementFrame {
    spans: Vec<SpanHandle>,
    owns_paragraph: bool,
}

#[derive(Debug, Default)]
pub(crate) struct StyleStack {
    character: Vec<OpenSpan<CharacterStyle>>,
    paragraph: Vec<OpenSpan<ParagraphStyle>>,
    frames: Vec<ElementFrame>,
    paragraph_active: bool,
}

impl StyleStack {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Whether a paragraph span is currently open.
    pub(crate) fn paragraph_active(&self) -> bool {
        self.paragraph_active
    }

    /// Open a frame at `offset`.
    ///
    /// The paragraph style opens a span only if no paragraph span is active;
    /// otherwise it is dropped. An empty character style opens nothing.
    pub(crate) fn push_frame(
        &mut self,
        character: Option<CharacterStyle>,
        paragraph: Option<ParagraphStyle>,
        offset: usize,
    ) {
        let mut frame = ElementFrame::default();

        if let Some(style) = paragraph {
            if self.paragraph_active {
                tracing::trace!(target: targets::STACK, "paragraph style already active, dropping nested one");
            } else {
                frame.spans.push(SpanHandle::Paragraph(self.paragraph.len()));
                self.paragraph.push(OpenSpan::new(offset, style));
                frame.owns_paragraph = true;
                self.paragraph_active = true;
            }
        }

        if let Some(style) = character.filter(|style| !style.is_empty()) {
            frame.spans.push(SpanHandle::Character(self.character.len()));
            self.character.push(OpenSpan::new(offset, style));
        }

        self.frames.push(frame);
    }

    /// Close the top frame's spans at `offset`. Returns `false` if no frame
    /// was open.
    pub(crate) fn pop_frame(&mut self, offset: usize) -> bool {
        let Some(frame) = self.frames.pop() else {
            return false;
        };

        for handle in frame.spans.iter().rev() {
            let end = match *handle {
                SpanHandle::Character(idx) => self.character.get_mut(idx).map(|span| &mut span.end),
                SpanHandle::Paragraph(idx) => self.paragraph.get_mut(idx).map(|span| &mut span.end),
            };
            if let Some(end) = end {
                *end = Some(offset);
            }
        }

        if frame.owns_paragraph {
            self.paragraph_active = false;
        }
        true
    }

    /// Number of open frames.
    pub(crate) fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Finished spans of both families, in opening order.
    ///
    /// Spans of frames that were never popped are discarded.
    pub(crate) fn finish(self) -> (Vec<CharacterSpan>, Vec<ParagraphSpan>) {
        if !self.frames.is_empty() {
            tracing::debug!(
                target: targets::STACK,
                frames = self.frames.len(),
                "discarding spans of unclosed elements"
            );
        }

        let character = self.character.into_iter().filter_map(OpenSpan::into_span).collect();
        let paragraph = self.paragraph.into_iter().filter_map(OpenSpan::into_span).collect();
        (character, paragraph)
    }
}
