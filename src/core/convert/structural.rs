//! Depth-aware rewrites that a single pattern cannot express.

static_regex!(OPEN_BRACE_LINE, r"(?m)\n[ \t]*\{[ \t]*$");
static_regex!(
    NAMESPACE_BLOCK_HEADER,
    r"(?m)^[ \t]*namespace[ \t]+[^\s{]+[ \t]*\{[ \t]*$"
);
static_regex!(
    NAMESPACE_FILE_SCOPED,
    r"(?m)^[ \t]*namespace[ \t]+[\w.]+[ \t]*(?:\n|\z)"
);

/// Move every brace that sits alone on its line up to the end of the
/// previous line, as ` {`.
///
/// The scan resumes after each edit, so the pass is linear in the document
/// size. A brace on the first line of the document has nothing to join to
/// and stays where it is.
pub fn join_open_braces(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;

    while let Some(m) = OPEN_BRACE_LINE.find_at(text, cursor) {
        out.push_str(&text[cursor..m.start()]);
        out.push_str(" {");
        cursor = m.end();
    }
    out.push_str(&text[cursor..]);

    out
}

/// Remove the first `namespace X { ... }` wrapper, keeping its body as is.
///
/// The header line (newline included) and the matching closing brace are
/// deleted; every other byte survives, indentation included. Without a
/// block namespace, a file-scoped `namespace X` line is removed instead,
/// unless the next non-blank line opens a block. An unbalanced block is
/// left alone.
pub fn unwrap_namespace(text: &str) -> String {
    let Some(header) = NAMESPACE_BLOCK_HEADER.find(text) else {
        return remove_file_scoped_namespace(text);
    };

    let Some(close) = find_matching_brace(text, header.end()) else {
        return text.to_string();
    };

    let body_start = if text[header.end()..].starts_with('\n') {
        header.end() + 1
    } else {
        header.end()
    };

    let mut out = String::with_capacity(text.len());
    out.push_str(&text[..header.start()]);
    out.push_str(&text[body_start..close]);
    out.push_str(&text[close + 1..]);
    out
}

fn remove_file_scoped_namespace(text: &str) -> String {
    let Some(line) = NAMESPACE_FILE_SCOPED.find(text) else {
        return text.to_string();
    };

    // `namespace N` followed by a `{ // comment` line is a block the header
    // pattern could not see; removing only its first line would unbalance it.
    if text[line.end()..].trim_start().starts_with('{') {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    out.push_str(&text[..line.start()]);
    out.push_str(&text[line.end()..]);
    out
}

/// Find the brace closing a block whose opening brace ends just before `start`.
///
/// Depth starts at one. Every `{` at or after `start` increments it, every `}`
/// decrements it; the offset of the `}` that brings it to zero is returned.
/// Braces inside string literals and comments are counted like any other.
pub fn find_matching_brace(text: &str, start: usize) -> Option<usize> {
    let mut depth: usize = 1;

    for (offset, byte) in text.as_bytes().iter().enumerate().skip(start) {
        match byte {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(offset);
                }
            }
            _ => {}
        }
    }

    None
}
