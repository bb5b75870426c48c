//! Tag balancing.
//!
//! Turns the raw tag sequence into a well-nested event stream: every open
//! delivered to the sink is matched by exactly one close.

use super::{Attributes, MarkupError, MarkupSink};
use crate::logging::targets;

/// Elements that never have content.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
    "source", "track", "wbr",
];

/// Elements that end an open `<p>`.
const BLOCK_ELEMENTS: &[&str] = &[
    "address", "article", "aside", "blockquote", "div", "dl", "fieldset", "figure", "footer",
    "form", "h1", "h2", "h3", "h4", "h5", "h6", "header", "hr", "li", "main", "nav", "ol", "p",
    "pre", "section", "table", "ul",
];

fn is_void(name: &str) -> bool {
    VOID_ELEMENTS.contains(&name)
}

fn is_block(name: &str) -> bool {
    BLOCK_ELEMENTS.contains(&name)
}

pub(crate) struct Balancer<'s, S: MarkupSink + ?Sized> {
    sink: &'s mut S,
    open: Vec<String>,
    max_depth: Option<usize>,
}

impl<'s, S: MarkupSink + ?Sized> Balancer<'s, S> {
    pub(crate) fn new(sink: &'s mut S, max_depth: Option<usize>) -> Self {
        Self {
            sink,
            open: Vec::new(),
            max_depth,
        }
    }

    pub(crate) fn start(
        &mut self,
        name: &str,
        attributes: &Attributes,
        self_closing: bool,
    ) -> Result<(), MarkupError> {
        if name == "li" {
            self.close_open_list_item();
        }
        if is_block(name) {
            self.close_open_paragraph();
        }

        if is_void(name) || self_closing {
            self.sink.on_open(name, attributes);
            self.sink.on_close(name);
            return Ok(());
        }

        if let Some(limit) = self.max_depth
            && self.open.len() >= limit
        {
            return Err(MarkupError::too_deep(limit));
        }
        self.open.push(name.to_string());
        self.sink.on_open(name, attributes);
        Ok(())
    }

    pub(crate) fn end(&mut self, name: &str) {
        match self.open.iter().rposition(|open| open == name) {
            Some(idx) => self.close_to(idx),
            None if name == "br" => {
                // `</br>` is read as a line break.
                self.sink.on_open(name, &Attributes::new());
                self.sink.on_close(name);
            }
            None => {
                tracing::trace!(target: targets::MARKUP, tag = name, "dropping unmatched close tag");
            }
        }
    }

    pub(crate) fn text(&mut self, text: &str) {
        if !text.is_empty() {
            self.sink.on_text(text);
        }
    }

    /// Close every element still open.
    pub(crate) fn finish(mut self) {
        if !self.open.is_empty() {
            tracing::trace!(target: targets::MARKUP, count = self.open.len(), "closing elements at end of input");
        }
        self.close_to(0);
    }

    /// Close the element at `idx` and everything opened after it.
    fn close_to(&mut self, idx: usize) {
        while self.open.len() > idx {
            if let Some(name) = self.open.pop() {
                self.sink.on_close(&name);
            }
        }
    }

    /// A new item ends the previous item of the same list.
    fn close_open_list_item(&mut self) {
        let found = self
            .open
            .iter()
            .rev()
            .take_while(|open| *open != "ol" && *open != "ul")
            .position(|open| open == "li");
        if let Some(from_top) = found {
            self.close_to(self.open.len() - 1 - from_top);
        }
    }

    /// A block element ends an open `<p>` that only has inline content above it.
    fn close_open_paragraph(&mut self) {
        let found = self
            .open
            .iter()
            .rev()
            .position(|open| open == "p" || is_block(open));
        if let Some(from_top) = found {
            let idx = self.open.len() - 1 - from_top;
            if self.open[idx] == "p" {
                self.close_to(idx);
            }
        }
    }
}
