//! Text accumulation and whitespace normalization.

/// The growing document text.
///
/// Character data goes through [`append_run`](Self::append_run), which
/// collapses whitespace. Breaks, list markers and placeholders are appended
/// verbatim with [`push_str`](Self::push_str) and [`push_char`](Self::push_char).
#[derive(Debug, Default)]
pub(crate) struct TextBuffer {
    text: String,
    len_chars: usize,
    at_line_start: bool,
}

impl TextBuffer {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Append a run of character data.
    ///
    /// `\n` and `\r` are dropped outright. Other ASCII whitespace becomes a
    /// single space unless the buffer already ends with one. Anything else
    /// is kept as is. Appending any character clears the line-start flag.
    pub(crate) fn append_run(&mut self, run: &str) {
        for c in run.chars() {
            match c {
                '\n' | '\r' => {}
                ' ' | '\t' | '\u{000C}' => {
                    if !self.text.ends_with(' ') {
                        self.push_char(' ');
                        self.at_line_start = false;
                    }
                }
                _ => {
                    self.push_char(c);
                    self.at_line_start = false;
                }
            }
        }
    }

    /// Append text without whitespace handling. Leaves the line-start flag alone.
    pub(crate) fn push_str(&mut self, s: &str) {
        self.text.push_str(s);
        self.len_chars += s.chars().count();
    }

    /// Append one character without whitespace handling. Leaves the
    /// line-start flag alone.
    pub(crate) fn push_char(&mut self, c: char) {
        self.text.push(c);
        self.len_chars += 1;
    }

    pub(crate) fn mark_line_start(&mut self) {
        self.at_line_start = true;
    }

    pub(crate) fn at_line_start(&self) -> bool {
        self.at_line_start
    }

    /// Current length in characters; the offset the next span starts at.
    pub(crate) fn len_chars(&self) -> usize {
        self.len_chars
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub(crate) fn into_string(self) -> String {
        self.text
    }
}
