use crate::types::{TextAlign, TextIndent};

use super::merge_if_set;

/// Paragraph-level style applied to a range of text.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParagraphStyle {
    pub text_align: Option<TextAlign>,
    pub text_indent: Option<TextIndent>,
}

impl ParagraphStyle {
    /// An empty style, every field unset.
    pub const fn new() -> Self {
        Self {
            text_align: None,
            text_indent: None,
        }
    }

    /// Whether no field is set.
    pub fn is_empty(&self) -> bool {
        self.text_align.is_none() && self.text_indent.is_none()
    }

    /// Merge another style into this one; fields set on `other` win.
    pub fn merge(&mut self, other: &ParagraphStyle) {
        merge_if_set!(self, other; text_align, text_indent);
    }

    /// Return a copy of `self` with `other` merged over it.
    pub fn merged(mut self, other: &ParagraphStyle) -> Self {
        self.merge(other);
        self
    }

    pub fn text_align(mut self, align: TextAlign) -> Self {
        self.text_align = Some(align);
        self
    }

    pub fn text_indent(mut self, first_line: f32, rest: f32) -> Self {
        self.text_indent = Some(TextIndent::new(first_line, rest));
        self
    }
}
