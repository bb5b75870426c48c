//! List numbering.

/// Kind of an open list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ListKind {
    Ordered,
    Unordered,
}

/// State of one open `<ol>` or `<ul>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ListContext {
    kind: ListKind,
    marker_type: String,
    /// Zero-based offset from the `start` attribute.
    start: i64,
    /// Items emitted so far.
    count: i64,
}

impl ListContext {
    /// Marker type precedence: `type` attribute, then `list-style-type`, then
    /// `1` for ordered lists and `circle` for unordered ones.
    pub(crate) fn new(
        kind: ListKind,
        type_attr: Option<&str>,
        list_style_type: Option<&str>,
        start_attr: Option<&str>,
    ) -> Self {
        let default = match kind {
            ListKind::Ordered => "1",
            ListKind::Unordered => "circle",
        };
        let marker_type = type_attr.or(list_style_type).unwrap_or(default).trim().to_string();
        let start = start_attr
            .and_then(|s| s.trim().parse::<i32>().ok())
            .map_or(0, |s| i64::from(s) - 1);

        Self {
            kind,
            marker_type,
            start,
            count: 0,
        }
    }

    /// Marker for the next item; advances the count.
    pub(crate) fn next_marker(&mut self) -> String {
        let marker = self.marker(self.count);
        self.count += 1;
        marker
    }

    fn marker(&self, n: i64) -> String {
        match self.kind {
            ListKind::Ordered => {
                let t = self.marker_type.as_str();
                if t.eq_ignore_ascii_case("lower-alpha") || t == "a" {
                    format!("{}. ", alpha_label('a', n + self.start))
                } else if t.eq_ignore_ascii_case("upper-alpha") || t == "A" {
                    format!("{}. ", alpha_label('A', n + self.start))
                } else {
                    format!("{}. ", n + self.start + 1)
                }
            }
            ListKind::Unordered => {
                if self.marker_type.eq_ignore_ascii_case("square") {
                    "▪ ".to_string()
                } else {
                    "• ".to_string()
                }
            }
        }
    }
}

/// Letters bijective in base 26: 0 is `a`, 25 is `z`, 26 is `aa`.
///
/// Letters are computed from `first` and must fall within the first 256 code
/// points; anything outside that window is left out.
fn alpha_label(first: char, value: i64) -> String {
    const WINDOW: i64 = 256;
    let first = i64::from(u32::from(first));
    if first + 26 > WINDOW {
        return String::new();
    }

    let letter = |v: i64| {
        let code = first + v;
        (0..WINDOW)
            .contains(&code)
            .then(|| u32::try_from(code).ok().and_then(char::from_u32))
            .flatten()
    };

    let mut letters = Vec::new();
    let mut value = value;
    loop {
        if value < 26 {
            letters.extend(letter(value));
            break;
        }
        letters.extend(letter(value % 26));
        value = value / 26 - 1;
    }

    letters.iter().rev().collect()
}
