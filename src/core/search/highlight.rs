//! Explicit substring-span highlighter.
//!
//! Wraps the first occurrence of a query inside a matched term with
//! open/close tags, within a bounded window of the surrounding text.
//! Matching is case-insensitive over Unicode-lowercased text; the
//! span reported always refers to the original string.

/// Default open tag for a highlighted span
pub const HIGHLIGHT_OPEN: &str = "<em>";

/// Default close tag for a highlighted span
pub const HIGHLIGHT_CLOSE: &str = "</em>";

/// Default window width in characters
pub const DEFAULT_WIDTH: usize = 100;

/// Span highlighter with a bounded extraction window
#[derive(Debug, Clone)]
pub struct Highlighter {
    width: usize,
    open_tag: String,
    close_tag: String,
}

impl Highlighter {
    pub fn new(width: usize, open_tag: &str, close_tag: &str) -> Self {
        Self {
            width,
            open_tag: open_tag.to_string(),
            close_tag: close_tag.to_string(),
        }
    }

    /// Tag the first occurrence of `keyword` in `text`.
    ///
    /// Returns the window of up to `width` characters around the
    /// match with the matched span wrapped in the tags; text without
    /// a match comes back unchanged.
    pub fn execute(&self, text: &str, keyword: &str) -> String {
        let Some((start, end)) = find_span(text, keyword) else {
            return text.to_string();
        };

        let chars: Vec<char> = text.chars().collect();
        let total = chars.len();
        let span_len = end - start;

        let (win_start, win_end) = if total <= self.width {
            (0, total)
        } else {
            let before = self.width.saturating_sub(span_len) / 2;
            let win_start = start.saturating_sub(before);
            let win_end = (win_start + self.width).min(total).max(end);
            (win_start, win_end)
        };

        let mut out = String::with_capacity(text.len() + self.open_tag.len() + self.close_tag.len());
        out.extend(&chars[win_start..start]);
        out.push_str(&self.open_tag);
        out.extend(&chars[start..end]);
        out.push_str(&self.close_tag);
        out.extend(&chars[end..win_end]);
        out
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, HIGHLIGHT_OPEN, HIGHLIGHT_CLOSE)
    }
}

/// Find the first case-insensitive occurrence of `keyword` in `text`.
///
/// Returns the half-open character span `(start, end)` into `text`,
/// or `None` when the keyword does not occur (or is empty).
pub fn find_span(text: &str, keyword: &str) -> Option<(usize, usize)> {
    let (haystack, map) = normalize_map(text);
    let needle: Vec<char> = keyword.chars().flat_map(char::to_lowercase).collect();

    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }

    for start in 0..=(haystack.len() - needle.len()) {
        if haystack[start..start + needle.len()] == needle[..] {
            let original_start = map[start];
            let original_end = map[start + needle.len() - 1] + 1;
            return Some((original_start, original_end));
        }
    }
    None
}

/// Remove the default highlight tags (display-width computations)
pub fn strip_tags(text: &str) -> String {
    text.replace(HIGHLIGHT_OPEN, "").replace(HIGHLIGHT_CLOSE, "")
}

/// Lowercase `s` per character, keeping a map from each normalized
/// char back to the index of the original char it came from
/// (one-to-many expansions all point at their origin).
fn normalize_map(s: &str) -> (Vec<char>, Vec<usize>) {
    let mut chars = Vec::new();
    let mut map = Vec::new();
    for (i, ch) in s.chars().enumerate() {
        for lowered in ch.to_lowercase() {
            chars.push(lowered);
            map.push(i);
        }
    }
    (chars, map)
}
