//! Markup reading.
//!
//! [`read`] tokenizes an HTML fragment and feeds a [`MarkupSink`] with a
//! well-nested stream of open, close and text events. It is deliberately
//! lenient: it does not build a DOM, insert implied elements or report
//! syntax errors. The only repairs it makes are:
//!
//! - void elements (`<br>`, `<img>`, ...) and `<tag/>` are closed immediately
//! - `<li>` ends the previous item of the same list
//! - a block-level element ends an open `<p>`
//! - a close tag ends every element opened after its match
//! - an unmatched close tag is dropped, `</br>` excepted
//! - elements still open at the end of input are closed
//!
//! Tag and attribute names are lowercased before they reach the sink.

mod balance;
mod entity;
mod tokenizer;

use balance::Balancer;
use tokenizer::{Token, Tokenizer};

use crate::logging::targets;
use crate::options::MarkupOptions;

/// Receiver of markup events.
///
/// Opens and closes arrive well nested: every `on_open` is matched by one
/// `on_close` with the same tag, in stack order.
pub trait MarkupSink {
    /// An element was opened.
    fn on_open(&mut self, tag: &str, attributes: &Attributes);
    /// An element was closed.
    fn on_close(&mut self, tag: &str);
    /// A run of character data, with references already decoded.
    fn on_text(&mut self, text: &str);
}

/// Errors that stop the markup reader.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarkupError {
    /// More elements were open at once than the configured limit.
    #[error("Elements nested deeper than the limit of {limit}")]
    TooDeep { limit: usize },
}

impl MarkupError {
    pub fn too_deep(limit: usize) -> Self {
        Self::TooDeep { limit }
    }
}

/// Attributes of an element, in source order.
///
/// Names are stored lowercased; lookups ignore ASCII case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, String)>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an attribute unless one with the same name is already present.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into().to_ascii_lowercase();
        if !self.contains(&name) {
            self.entries.push((name, value.into()));
        }
    }

    /// Value of the named attribute.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = Self::new();
        for (name, value) in iter {
            attributes.insert(name, value);
        }
        attributes
    }
}

/// Read `html` and deliver its events to `sink`.
///
/// Fails only when `options` sets a nesting limit and the input exceeds it.
/// Events delivered before the failure are not retracted.
#[tracing::instrument(skip_all, target = "horizon_richtext::markup", level = "debug")]
pub fn read<S: MarkupSink + ?Sized>(
    html: &str,
    options: &MarkupOptions,
    sink: &mut S,
) -> Result<(), MarkupError> {
    let mut balancer = Balancer::new(sink, options.max_depth);

    for token in Tokenizer::new(html) {
        match token {
            Token::StartTag {
                name,
                attributes,
                self_closing,
            } => balancer.start(&name, &attributes, self_closing)?,
            Token::EndTag { name } => balancer.end(&name),
            Token::Text(text) => balancer.text(&text),
        }
    }

    balancer.finish();
    tracing::trace!(target: targets::MARKUP, "markup read");
    Ok(())
}
