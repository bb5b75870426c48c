//! Color values and CSS color resolution.
//!
//! [`Color`] stores a packed `0xAARRGGBB` value: alpha first, whatever order
//! the source syntax used. [`resolve_color`] accepts the subset of CSS color
//! syntax that appears in inline `style` attributes:
//!
//! - hex: `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`
//! - functions: `rgb()`, `rgba()`, `hsl()`, `hsla()` (case-insensitive names)
//! - the CSS Level 3 extended color keywords
//!
//! # Example
//!
//! ```
//! use horizon_richtext_style::color::{resolve_color, Color};
//!
//! let c = resolve_color("#abc").unwrap();
//! assert_eq!((c.red(), c.green(), c.blue(), c.alpha()), (0xAA, 0xBB, 0xCC, 0xFF));
//!
//! let c = resolve_color("rgba(10,20,30,0.5)").unwrap();
//! assert_eq!(c, Color::from_rgba8(10, 20, 30, 127));
//!
//! assert_eq!(resolve_color("not-a-color"), None);
//! ```

mod function;
mod named;

use std::fmt;

use crate::{Error, Result};

pub use named::named_color;

pub(crate) const TARGET: &str = "horizon_richtext_style::color";

/// An 8-bit-per-channel color, packed as `0xAARRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color(u32);

impl Color {
    /// Create a color from a packed `0xAARRGGBB` value.
    #[inline]
    pub const fn from_argb(argb: u32) -> Self {
        Self(argb)
    }

    /// Create a color from 8-bit RGBA components.
    #[inline]
    pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Create an opaque color from 8-bit RGB components.
    #[inline]
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba8(r, g, b, 0xFF)
    }

    /// Create a color from HSL components.
    ///
    /// `hue` is in degrees (0-360), `saturation`, `lightness` and `alpha` are
    /// fractions (0-1). Returns `None` for out-of-range input.
    pub fn from_hsla(hue: f32, saturation: f32, lightness: f32, alpha: f32) -> Option<Self> {
        let in_unit = |v: f32| (0.0..=1.0).contains(&v);
        if !(0.0..=360.0).contains(&hue) || !in_unit(saturation) || !in_unit(lightness) || !in_unit(alpha) {
            return None;
        }

        let chroma = saturation * lightness.min(1.0 - lightness);
        let channel = |n: f32| {
            let k = (n + hue / 30.0) % 12.0;
            let v = lightness - chroma * (k - 3.0).min(9.0 - k).clamp(-1.0, 1.0);
            unit_to_u8(v)
        };

        Some(Self::from_rgba8(channel(0.0), channel(8.0), channel(4.0), unit_to_u8(alpha)))
    }

    /// The packed `0xAARRGGBB` value.
    #[inline]
    pub const fn to_argb(self) -> u32 {
        self.0
    }

    /// Red channel.
    #[inline]
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Green channel.
    #[inline]
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Blue channel.
    #[inline]
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Alpha channel.
    #[inline]
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Convert to an `[r, g, b, a]` array.
    #[inline]
    pub const fn to_rgba8(self) -> [u8; 4] {
        [self.red(), self.green(), self.blue(), self.alpha()]
    }

    /// Parse a CSS color value.
    ///
    /// Use [`resolve_color`] when a failure should simply mean "unset".
    pub fn parse(value: &str) -> Result<Self> {
        let trimmed = value.trim();
        let parsed = if let Some(hex) = trimmed.strip_prefix('#') {
            parse_hex(hex)
        } else if starts_with_ignore_case(trimmed, "rgb") || starts_with_ignore_case(trimmed, "hsl") {
            function::parse_color_function(trimmed)
        } else {
            named_color(trimmed)
        };
        parsed.ok_or_else(|| Error::invalid_color(value))
    }

    // Common colors
    pub const TRANSPARENT: Self = Self::from_argb(0x0000_0000);
    pub const BLACK: Self = Self::from_argb(0xFF00_0000);
    pub const WHITE: Self = Self::from_argb(0xFFFF_FFFF);
    pub const RED: Self = Self::from_argb(0xFFFF_0000);
    pub const GREEN: Self = Self::from_argb(0xFF00_8000);
    pub const BLUE: Self = Self::from_argb(0xFF00_00FF);
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:02x}{:02x}{:02x}{:02x}",
            self.red(),
            self.green(),
            self.blue(),
            self.alpha()
        )
    }
}

/// Resolve a CSS color value, returning `None` for anything unrecognized.
///
/// `None` is the "unspecified" sentinel: the field stays unset and inherits.
pub fn resolve_color(value: &str) -> Option<Color> {
    match Color::parse(value) {
        Ok(color) => Some(color),
        Err(e) => {
            tracing::debug!(target: TARGET, "{}", e);
            None
        }
    }
}

/// Parse the digits of a hex color (without the leading `#`).
///
/// Alpha comes last in the source (`#rgba`, `#rrggbbaa`) and is moved to the
/// front of the packed value.
fn parse_hex(hex: &str) -> Option<Color> {
    let hex = hex.trim();
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

    match hex.len() {
        3 => Some(Color::from_rgb8(nibble(0)?, nibble(1)?, nibble(2)?)),
        4 => Some(Color::from_rgba8(nibble(0)?, nibble(1)?, nibble(2)?, nibble(3)?)),
        6 => Some(Color::from_rgb8(byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(Color::from_rgba8(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
        _ => None,
    }
}

fn starts_with_ignore_case(value: &str, prefix: &str) -> bool {
    value
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

fn unit_to_u8(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}
