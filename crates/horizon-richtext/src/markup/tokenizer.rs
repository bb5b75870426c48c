//! Tag and text tokenization.

use super::Attributes;
use super::entity::decode_entities;

/// Elements whose content is skipped entirely.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Token {
    StartTag {
        name: String,
        attributes: Attributes,
        self_closing: bool,
    },
    EndTag {
        name: String,
    },
    Text(String),
}

/// Splits markup into start tags, end tags and decoded text runs.
///
/// Comments, doctype declarations and processing instructions produce no
/// token. A `<` that does not begin a tag is text.
pub(crate) struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
    raw_text: Option<&'static str>,
}

impl<'a> Tokenizer<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            raw_text: None,
        }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Move past the first occurrence of `needle`, or to the end of input.
    fn skip_past(&mut self, needle: &str) {
        match self.rest().find(needle) {
            Some(idx) => self.pos += idx + needle.len(),
            None => self.pos = self.input.len(),
        }
    }

    /// Skip the content of a raw text element up to its end tag.
    fn skip_raw_text(&mut self, name: &str) {
        let rest = self.rest();
        let end = rest.match_indices("</").map(|(idx, _)| idx).find(|&idx| {
            let after = &rest[idx + 2..];
            after
                .get(..name.len())
                .is_some_and(|candidate| candidate.eq_ignore_ascii_case(name))
                && after[name.len()..]
                    .chars()
                    .next()
                    .is_none_or(|c| c == '>' || c == '/' || c.is_ascii_whitespace())
        });
        match end {
            Some(idx) => self.pos += idx,
            None => self.pos = self.input.len(),
        }
    }

    /// Read a text run up to the next `<` after the current position.
    fn read_text(&mut self) -> Token {
        let rest = self.rest();
        let first = rest.chars().next().map_or(0, char::len_utf8);
        let len = rest[first..].find('<').map_or(rest.len(), |idx| idx + first);
        self.pos += len;
        Token::Text(decode_entities(&rest[..len]).into_owned())
    }

    fn read_end_tag(&mut self) -> Token {
        // Past "</"
        let body = &self.rest()[2..];
        let name_len = body.find(is_name_end).unwrap_or(body.len());
        let name = body[..name_len].to_ascii_lowercase();
        self.skip_past(">");
        Token::EndTag { name }
    }

    fn read_start_tag(&mut self) -> Token {
        let body = &self.rest()[1..];
        let close = find_tag_close(body);
        let content = &body[..close.unwrap_or(body.len())];
        self.pos += 1 + close.map_or(body.len(), |idx| idx + 1);

        let trimmed = content.trim_end();
        let (content, self_closing) = match trimmed.strip_suffix('/') {
            Some(inner) => (inner, true),
            None => (trimmed, false),
        };

        let name_len = content.find(is_name_end).unwrap_or(content.len());
        let name = content[..name_len].to_ascii_lowercase();
        let attributes = parse_attributes(&content[name_len..]);

        if !self_closing {
            self.raw_text = RAW_TEXT_ELEMENTS.iter().copied().find(|raw| *raw == name);
        }

        Token::StartTag {
            name,
            attributes,
            self_closing,
        }
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            if let Some(name) = self.raw_text.take() {
                self.skip_raw_text(name);
            }

            let rest = self.rest();
            if rest.is_empty() {
                return None;
            }

            if !rest.starts_with('<') {
                return Some(self.read_text());
            }

            if rest.starts_with("<!--") {
                self.pos += 4;
                self.skip_past("-->");
                continue;
            }
            if rest.starts_with("<!") || rest.starts_with("<?") {
                self.skip_past(">");
                continue;
            }

            let mut after = rest[1..].chars();
            match after.next() {
                Some('/') if after.next().is_some_and(|c| c.is_ascii_alphabetic()) => {
                    return Some(self.read_end_tag());
                }
                Some(c) if c.is_ascii_alphabetic() => return Some(self.read_start_tag()),
                _ => return Some(self.read_text()),
            }
        }
    }
}

fn is_name_end(c: char) -> bool {
    c.is_ascii_whitespace() || c == '/' || c == '>'
}

/// Index of the `>` closing a tag, ignoring any inside quoted values.
fn find_tag_close(body: &str) -> Option<usize> {
    let mut quote = None;
    for (idx, c) in body.char_indices() {
        match (quote, c) {
            (None, '"' | '\'') => quote = Some(c),
            (Some(q), c) if c == q => quote = None,
            (None, '>') => return Some(idx),
            _ => {}
        }
    }
    None
}

/// Parse attributes from the text following a tag name.
///
/// Keys are lowercased. Values may be double-quoted, single-quoted or bare;
/// an attribute without `=` gets an empty value. The first occurrence of a
/// repeated key wins.
pub(crate) fn parse_attributes(attrs_str: &str) -> Attributes {
    let mut result = Attributes::new();
    let mut chars = attrs_str.chars().peekable();

    loop {
        // Skip whitespace and stray slashes
        while chars.next_if(|c| c.is_whitespace() || *c == '/').is_some() {}

        // Parse key
        let mut key = String::new();
        while let Some(c) = chars.next_if(|c| *c != '=' && *c != '/' && !c.is_whitespace()) {
            key.push(c.to_ascii_lowercase());
        }
        if key.is_empty() {
            // Either the end of input or a '=' with no key in front of it
            if chars.next().is_none() {
                break;
            }
            continue;
        }

        while chars.next_if(|c| c.is_whitespace()).is_some() {}

        if chars.next_if_eq(&'=').is_none() {
            result.insert(key, String::new());
            continue;
        }

        while chars.next_if(|c| c.is_whitespace()).is_some() {}

        let mut value = String::new();
        match chars.next_if(|c| *c == '"' || *c == '\'') {
            Some(quote) => {
                for c in chars.by_ref() {
                    if c == quote {
                        break;
                    }
                    value.push(c);
                }
            }
            None => {
                while let Some(c) = chars.next_if(|c| !c.is_whitespace()) {
                    value.push(c);
                }
            }
        }

        result.insert(key, decode_entities(&value).into_owned());
    }

    result
}
