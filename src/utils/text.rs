//! Text splitting primitives.
//!
//! Pattern rules handle whole lines; these helpers cover the few places where
//! a line has to be taken apart with bracket nesting in mind.

/// Split `input` on `separator`, ignoring separators nested inside
/// `<>`, `()` or `[]` and inside `"..."` or `'...'` literals. Pieces are
/// trimmed; empty input yields no pieces.
pub fn split_top_level(input: &str, separator: char) -> Vec<&str> {
    if input.trim().is_empty() {
        return Vec::new();
    }

    let mut pieces = Vec::new();
    let mut depth: i32 = 0;
    let mut start = 0;
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for (idx, ch) in input.char_indices() {
        if let Some(open) = quote {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == open {
                quote = None;
            }
            continue;
        }

        match ch {
            '"' | '\'' => quote = Some(ch),
            '<' | '(' | '[' => depth += 1,
            '>' | ')' | ']' => depth = (depth - 1).max(0),
            c if c == separator && depth == 0 => {
                pieces.push(input[start..idx].trim());
                start = idx + c.len_utf8();
            }
            _ => {}
        }
    }
    pieces.push(input[start..].trim());

    pieces
}

/// Split off the last whitespace-delimited word, outside any bracket nesting.
///
/// `"Dictionary<string, int> map"` gives `Some(("Dictionary<string, int>", "map"))`;
/// a single word gives `None`.
pub fn split_last_word(input: &str) -> Option<(&str, &str)> {
    let trimmed = input.trim();
    let mut depth: i32 = 0;
    let mut split_at = None;

    for (idx, ch) in trimmed.char_indices() {
        match ch {
            '<' | '(' | '[' => depth += 1,
            '>' | ')' | ']' => depth = (depth - 1).max(0),
            c if c.is_whitespace() && depth == 0 => split_at = Some(idx),
            _ => {}
        }
    }

    let idx = split_at?;
    let head = trimmed[..idx].trim_end();
    let tail = trimmed[idx..].trim_start();
    if head.is_empty() || tail.is_empty() {
        return None;
    }
    Some((head, tail))
}
