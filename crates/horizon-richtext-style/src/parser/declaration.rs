use std::sync::OnceLock;

use regex::Regex;

use super::TARGET;
use crate::Error;

static DECLARATION: OnceLock<Option<Regex>> = OnceLock::new();

/// `name: value`, with an optional trailing `!important` that is dropped.
const DECLARATION_PATTERN: &str = r"(?si)^\s*([a-z][a-z0-9-]*)\s*:\s*(.*?)\s*(?:!\s*important\s*)?$";

fn declaration_regex() -> Option<&'static Regex> {
    DECLARATION
        .get_or_init(|| match Regex::new(DECLARATION_PATTERN) {
            Ok(re) => Some(re),
            Err(e) => {
                tracing::warn!(target: TARGET, "declaration pattern failed to compile: {}", e);
                None
            }
        })
        .as_ref()
}

/// One `name: value` pair from a `style` attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration<'a> {
    /// Property name, lowercased.
    pub name: String,
    /// Trimmed value text.
    pub value: &'a str,
}

/// Split a `style` attribute into declarations, in source order.
///
/// Empty segments are skipped; segments without a `name:` prefix are logged
/// and skipped.
pub fn parse_declarations(style: &str) -> Vec<Declaration<'_>> {
    let Some(re) = declaration_regex() else {
        return Vec::new();
    };

    style
        .split(';')
        .filter(|segment| !segment.trim().is_empty())
        .filter_map(|segment| match re.captures(segment) {
            Some(caps) => {
                let name = caps.get(1)?.as_str().to_ascii_lowercase();
                let value = caps.get(2).map_or("", |m| m.as_str());
                Some(Declaration { name, value })
            }
            None => {
                tracing::debug!(target: TARGET, "{}", Error::malformed_declaration(segment.trim()));
                None
            }
        })
        .collect()
}
