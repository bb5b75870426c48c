use crate::color::Color;
use crate::types::{BaselineShift, FontStyle, FontWeight, Shadow, TextDecoration};

use super::merge_if_set;

/// Character-level style applied to a range of text.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterStyle {
    pub font_weight: Option<FontWeight>,
    pub font_style: Option<FontStyle>,
    pub decoration: Option<TextDecoration>,
    /// Foreground color.
    pub color: Option<Color>,
    pub background: Option<Color>,
    /// Font size in points.
    pub font_size: Option<f32>,
    pub baseline_shift: Option<BaselineShift>,
    pub shadow: Option<Shadow>,
}

impl CharacterStyle {
    /// An empty style, every field unset.
    pub const fn new() -> Self {
        Self {
            font_weight: None,
            font_style: None,
            decoration: None,
            color: None,
            background: None,
            font_size: None,
            baseline_shift: None,
            shadow: None,
        }
    }

    /// Whether no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::new()
    }

    /// Merge another style into this one; fields set on `other` win.
    pub fn merge(&mut self, other: &CharacterStyle) {
        merge_if_set!(self, other;
            font_weight, font_style, decoration,
            color, background,
            font_size, baseline_shift, shadow,
        );
    }

    /// Return a copy of `self` with `other` merged over it.
    pub fn merged(mut self, other: &CharacterStyle) -> Self {
        self.merge(other);
        self
    }

    // Builder-style setters

    pub fn font_weight(mut self, weight: FontWeight) -> Self {
        self.font_weight = Some(weight);
        self
    }

    pub fn bold(self) -> Self {
        self.font_weight(FontWeight::BOLD)
    }

    pub fn italic(mut self) -> Self {
        self.font_style = Some(FontStyle::Italic);
        self
    }

    pub fn decoration(mut self, decoration: TextDecoration) -> Self {
        self.decoration = Some(decoration);
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn baseline_shift(mut self, shift: f32) -> Self {
        self.baseline_shift = Some(BaselineShift(shift));
        self
    }

    pub fn shadow(mut self, shadow: Shadow) -> Self {
        self.shadow = Some(shadow);
        self
    }
}
