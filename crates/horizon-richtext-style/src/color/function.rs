//! `rgb()`/`rgba()`/`hsl()`/`hsla()` parsing on top of `cssparser`.

use cssparser::{ParseError as CssParseError, Parser, ParserInput, Token};

use super::Color;

type FnResult<'i, T> = std::result::Result<T, CssParseError<'i, ()>>;

/// Parse a functional color notation.
///
/// `rgb` and `rgba` accept either three or four arguments, as do `hsl` and
/// `hsla`. Trailing input after the closing parenthesis is an error.
pub(super) fn parse_color_function(value: &str) -> Option<Color> {
    let mut input = ParserInput::new(value);
    let mut parser = Parser::new(&mut input);

    parser
        .parse_entirely(|p| {
            let name = p.expect_function()?.clone();
            if name.eq_ignore_ascii_case("rgb") || name.eq_ignore_ascii_case("rgba") {
                p.parse_nested_block(parse_rgb_arguments)
            } else if name.eq_ignore_ascii_case("hsl") || name.eq_ignore_ascii_case("hsla") {
                p.parse_nested_block(parse_hsl_arguments)
            } else {
                Err(p.new_custom_error(()))
            }
        })
        .ok()
}

/// `r, g, b [, a]` with integer channels and a fractional alpha.
fn parse_rgb_arguments<'i>(p: &mut Parser<'i, '_>) -> FnResult<'i, Color> {
    let r = parse_channel(p)?;
    p.expect_comma()?;
    let g = parse_channel(p)?;
    p.expect_comma()?;
    let b = parse_channel(p)?;
    let a = if p.try_parse(|p| p.expect_comma()).is_ok() {
        // Truncate, not round: 0.5 becomes 127.
        (parse_alpha(p)? * 255.0) as u8
    } else {
        0xFF
    };
    Ok(Color::from_rgba8(r, g, b, a))
}

/// `h, s%, l% [, a]`.
fn parse_hsl_arguments<'i>(p: &mut Parser<'i, '_>) -> FnResult<'i, Color> {
    let hue = parse_number(p)?;
    p.expect_comma()?;
    let saturation = parse_fraction(p)?;
    p.expect_comma()?;
    let lightness = parse_fraction(p)?;
    let alpha = if p.try_parse(|p| p.expect_comma()).is_ok() {
        parse_alpha(p)?
    } else {
        1.0
    };
    Color::from_hsla(hue, saturation, lightness, alpha).ok_or_else(|| p.new_custom_error(()))
}

fn parse_channel<'i>(p: &mut Parser<'i, '_>) -> FnResult<'i, u8> {
    let token = p.next()?.clone();
    match token {
        Token::Number {
            int_value: Some(v), ..
        } => u8::try_from(v).map_err(|_| p.new_custom_error(())),
        _ => Err(p.new_custom_error(())),
    }
}

fn parse_number<'i>(p: &mut Parser<'i, '_>) -> FnResult<'i, f32> {
    let token = p.next()?.clone();
    match token {
        Token::Number { value, .. } => Ok(value),
        _ => Err(p.new_custom_error(())),
    }
}

/// A percentage, or a bare number read as a percentage.
fn parse_fraction<'i>(p: &mut Parser<'i, '_>) -> FnResult<'i, f32> {
    let token = p.next()?.clone();
    match token {
        Token::Percentage { unit_value, .. } => Ok(unit_value),
        Token::Number { value, .. } => Ok(value / 100.0),
        _ => Err(p.new_custom_error(())),
    }
}

fn parse_alpha<'i>(p: &mut Parser<'i, '_>) -> FnResult<'i, f32> {
    let token = p.next()?.clone();
    match token {
        Token::Number { value, .. } => Ok(value.clamp(0.0, 1.0)),
        Token::Percentage { unit_value, .. } => Ok(unit_value.clamp(0.0, 1.0)),
        _ => Err(p.new_custom_error(())),
    }
}
