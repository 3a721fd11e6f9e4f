//! Counted `for` loops to Swift ranges.
//!
//! Only two exact shapes are recognized: `i < end; i++` and `i >= end; i--`,
//! with the same loop variable in all three clauses. Everything else is left
//! as written for a human to convert.

use regex::Captures;

static_regex!(
    ASCENDING_LOOP,
    r"\bfor[ \t]*\([ \t]*[\w.\[\]<>?]+[ \t]+(\w+)[ \t]*=[ \t]*([^;\n]+?)[ \t]*;[ \t]*(\w+)[ \t]*<[ \t]*([^;=\n][^;\n]*?)[ \t]*;[ \t]*(\w+)\+\+[ \t]*\)"
);
static_regex!(
    DESCENDING_LOOP,
    r"\bfor[ \t]*\([ \t]*[\w.\[\]<>?]+[ \t]+(\w+)[ \t]*=[ \t]*([^;\n]+?)[ \t]*;[ \t]*(\w+)[ \t]*>=[ \t]*([^;\n]+?)[ \t]*;[ \t]*(\w+)--[ \t]*\)"
);

/// `for (int i = 0; i < n; i++)` → `for i in 0..<n` and
/// `for (int i = n; i >= 0; i--)` → `for i in (0...n).reversed()`.
pub fn convert_simple_for_loops(text: &str) -> String {
    let ascending = ASCENDING_LOOP.replace_all(text, |caps: &Captures| {
        match simple_bounds(caps) {
            Some((var, start, end)) => format!("for {} in {}..<{}", var, start, end),
            None => caps[0].to_string(),
        }
    });

    DESCENDING_LOOP
        .replace_all(&ascending, |caps: &Captures| match simple_bounds(caps) {
            Some((var, start, end)) => format!("for {} in ({}...{}).reversed()", var, end, start),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Loop variable, start and end when the captured loop is a plain counter.
fn simple_bounds<'t>(caps: &Captures<'t>) -> Option<(&'t str, &'t str, &'t str)> {
    let var = caps.get(1)?.as_str();
    let tested = caps.get(3)?.as_str();
    let stepped = caps.get(5)?.as_str();
    if var != tested || var != stepped {
        return None;
    }

    let start = caps.get(2)?.as_str();
    let end = caps.get(4)?.as_str();
    if [start, end].iter().any(|b| b.contains("&&") || b.contains("||")) {
        return None;
    }

    Some((var, start, end))
}
