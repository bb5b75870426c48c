use super::TARGET;
use crate::Error;
use crate::color::resolve_color;
use crate::types::Shadow;

/// Parse a `text-shadow` value.
///
/// Only the first shadow of a comma-separated list is used. Its `px` lengths
/// fill the horizontal offset, vertical offset and blur radius in that order;
/// any other token is read as the color, the last one winning. Returns `None`
/// for `none` and for an empty value.
pub fn parse_text_shadow(value: &str) -> Option<Shadow> {
    let value = value.trim();
    if value.is_empty() || value.eq_ignore_ascii_case("none") {
        return None;
    }

    let first = split_top_level(value, |c| c == ',').into_iter().next()?;

    let mut shadow = Shadow::default();
    let mut lengths = 0usize;
    for token in split_top_level(first, char::is_whitespace) {
        if let Some(number) = strip_px(token) {
            match number.parse::<f32>() {
                Ok(v) => {
                    match lengths {
                        0 => shadow.offset_x = v,
                        1 => shadow.offset_y = v,
                        2 => shadow.blur_radius = v,
                        _ => {}
                    }
                    lengths += 1;
                }
                Err(_) => {
                    tracing::debug!(
                        target: TARGET,
                        "{}",
                        Error::invalid_value("text-shadow", format!("bad length '{token}'"))
                    );
                }
            }
        } else {
            shadow.color = resolve_color(token);
        }
    }

    Some(shadow)
}

fn strip_px(token: &str) -> Option<&str> {
    let split = token.len().checked_sub(2)?;
    let (number, unit) = (token.get(..split)?, token.get(split..)?);
    unit.eq_ignore_ascii_case("px").then_some(number)
}

/// Split on `sep` outside parentheses, dropping empty pieces.
fn split_top_level(value: &str, sep: impl Fn(char) -> bool) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in value.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            c if depth == 0 && sep(c) => {
                pieces.push(&value[start..i]);
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }
    pieces.push(&value[start..]);

    pieces
        .into_iter()
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .collect()
}
