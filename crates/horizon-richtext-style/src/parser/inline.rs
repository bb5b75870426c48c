use super::{TARGET, parse_declarations, parse_text_shadow};
use crate::Error;
use crate::color::resolve_color;
use crate::style::{CharacterStyle, ParagraphStyle};
use crate::types::{TextAlign, TextDecoration};

/// Styles read from an element's `align` and `style` attributes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InlineStyle {
    pub character: CharacterStyle,
    pub paragraph: ParagraphStyle,
    /// Raw `list-style-type` value, consumed by list elements only.
    pub list_style_type: Option<String>,
}

impl InlineStyle {
    /// Parse the `align` and `style` attribute values of one element.
    ///
    /// `align` is applied first, so a `text-align` declaration overrides it.
    /// Within `style`, later declarations override earlier ones. Values that
    /// cannot be parsed leave their field unset; this never fails.
    pub fn parse(align: Option<&str>, style: Option<&str>) -> Self {
        let mut inline = Self::default();

        if let Some(align) = align {
            inline.apply_text_align(align);
        }

        for decl in style.map(parse_declarations).unwrap_or_default() {
            match decl.name.as_str() {
                "text-align" => inline.apply_text_align(decl.value),
                "color" => inline.character.color = resolve_color(decl.value),
                "background" | "background-color" => {
                    inline.character.background = resolve_color(decl.value);
                }
                "text-decoration" => {
                    inline.character.decoration = Some(TextDecoration::from_css(decl.value));
                }
                "text-shadow" => inline.character.shadow = parse_text_shadow(decl.value),
                "list-style-type" => inline.list_style_type = Some(decl.value.to_string()),
                other => {
                    tracing::trace!(target: TARGET, property = other, "ignoring declaration");
                }
            }
        }

        inline
    }

    /// Whether neither style has any field set.
    pub fn is_empty(&self) -> bool {
        self.character.is_empty() && self.paragraph.is_empty()
    }

    fn apply_text_align(&mut self, value: &str) {
        match TextAlign::from_css(value) {
            Some(align) => self.paragraph.text_align = Some(align),
            None => {
                tracing::debug!(
                    target: TARGET,
                    "{}",
                    Error::invalid_value("text-align", format!("unknown alignment '{value}'"))
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    fn init_logging() {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .try_init();
    }

    #[test]
    fn align_attribute_only() {
        let inline = InlineStyle::parse(Some("center"), None);
        assert_eq!(inline.paragraph.text_align, Some(TextAlign::Center));
        assert!(inline.character.is_empty());
    }

    #[test]
    fn style_overrides_align_attribute() {
        let inline = InlineStyle::parse(Some("left"), Some("text-align: right"));
        assert_eq!(inline.paragraph.text_align, Some(TextAlign::End));
    }

    #[test]
    fn unknown_alignment_keeps_previous() {
        init_logging();
        let inline = InlineStyle::parse(Some("center"), Some("text-align: middle"));
        assert_eq!(inline.paragraph.text_align, Some(TextAlign::Center));
    }

    #[test]
    fn character_properties() {
        let inline = InlineStyle::parse(
            None,
            Some("color:#ff0000; Background-Color: blue; text-decoration: underline"),
        );
        assert_eq!(inline.character.color, Some(Color::RED));
        assert_eq!(inline.character.background, Some(Color::BLUE));
        assert_eq!(inline.character.decoration, Some(TextDecoration::Underline));
        assert!(inline.paragraph.is_empty());
    }

    #[test]
    fn later_declaration_wins() {
        let inline = InlineStyle::parse(None, Some("color: red; color: blue"));
        assert_eq!(inline.character.color, Some(Color::BLUE));
    }

    #[test]
    fn bad_color_is_unset() {
        init_logging();
        let inline = InlineStyle::parse(None, Some("color: rgb(300,0,0)"));
        assert_eq!(inline.character.color, None);
        assert!(inline.is_empty());
    }

    #[test]
    fn other_decoration_is_explicit_none() {
        let inline = InlineStyle::parse(None, Some("text-decoration: blink"));
        assert_eq!(inline.character.decoration, Some(TextDecoration::None));
    }

    #[test]
    fn list_style_type_is_kept_raw() {
        let inline = InlineStyle::parse(None, Some("list-style-type: lower-alpha"));
        assert_eq!(inline.list_style_type.as_deref(), Some("lower-alpha"));
        assert!(inline.is_empty());
    }

    #[test]
    fn shadow_declaration() {
        let inline = InlineStyle::parse(None, Some("text-shadow: 1px 1px 2px rgba(0,0,255,1)"));
        let shadow = inline.character.shadow.unwrap();
        assert_eq!(shadow.blur_radius, 2.0);
        assert_eq!(shadow.color, Some(Color::BLUE));
    }
}
