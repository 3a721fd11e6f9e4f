//! Statement-level rewrites: locals, `if` headers, `else` placement.

use regex::Captures;

static_regex!(
    LOCAL_DECLARATION,
    r"(?m)^([ \t]*)(\[[^\]\n]*\]\]?|[\w.]+(?:<[^>\n]*>)?(?:\[\])?\??)[ \t]+(\w+)([ \t]*=[^\n]*)?$"
);
static_regex!(IF_BRACED, r"\bif[ \t]*\((.*)\)[ \t]+\{");
static_regex!(IF_UNBRACED, r"\bif[ \t]*\(([^\n]*)\)\n([ \t]+)([^\n]*)\n");
static_regex!(NEXT_LINE_ELSE, r"\}\n[ \t]*else\b");

/// First words that make a two-word line a statement, not a declaration.
const STATEMENT_KEYWORDS: &[&str] = &[
    "return", "throw", "else", "case", "goto", "yield", "await", "namespace",
];

/// Columns removed from a body line's indentation to place a closing brace.
const INDENT_WIDTH: usize = 4;

/// `Card card = deck.Draw()` → `let card = deck.Draw()`.
///
/// The declared type is dropped; Swift infers it.
pub fn convert_locals(text: &str) -> String {
    LOCAL_DECLARATION
        .replace_all(text, |caps: &Captures| {
            if STATEMENT_KEYWORDS.contains(&&caps[2]) {
                return caps[0].to_string();
            }
            format!(
                "{}let {}{}",
                &caps[1],
                &caps[3],
                caps.get(4).map_or("", |m| m.as_str())
            )
        })
        .into_owned()
}

/// Drop the parentheses around `if` conditions and brace single-statement bodies.
pub fn convert_if(text: &str) -> String {
    let braced = IF_BRACED.replace_all(text, "if ${1} {");

    IF_UNBRACED
        .replace_all(&braced, |caps: &Captures| {
            let indent = &caps[2];
            let close = closing_indent(indent);
            format!("if {} {{\n{}{}\n{}}}\n", &caps[1], indent, &caps[3], close)
        })
        .into_owned()
}

/// One level less than the body: a trailing tab counts as one level,
/// otherwise [`INDENT_WIDTH`] spaces. Never shallower than a single level.
fn closing_indent(body_indent: &str) -> &str {
    if body_indent.ends_with('\t') {
        return if body_indent.len() > 1 {
            &body_indent[..body_indent.len() - 1]
        } else {
            body_indent
        };
    }
    if body_indent.len() > INDENT_WIDTH {
        &body_indent[..body_indent.len() - INDENT_WIDTH]
    } else {
        body_indent
    }
}

/// `}` + newline + `else` → `} else`.
pub fn convert_next_line_else(text: &str) -> String {
    NEXT_LINE_ELSE.replace_all(text, "} else").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_declaration_drops_type() {
        assert_eq!(
            convert_locals("        Card card = deck.Draw()\n        Int count\n"),
            "        let card = deck.Draw()\n        let count\n"
        );
    }

    #[test]
    fn local_with_collection_type() {
        assert_eq!(convert_locals("    [Card] pile = [Card]()"), "    let pile = [Card]()");
    }

    #[test]
    fn return_and_throw_are_not_locals() {
        let input = "    return score\n    throw error\n";
        assert_eq!(convert_locals(input), input);
    }

    #[test]
    fn namespace_line_is_not_a_local() {
        assert_eq!(convert_locals("namespace Spider\n"), "namespace Spider\n");
    }

    #[test]
    fn assignments_and_declarations_untouched() {
        let input = "    Deck = Deck.Create(difficulty)\n    private var x: Int\n    self.score = score";
        assert_eq!(convert_locals(input), input);
    }

    #[test]
    fn braced_if_loses_parentheses() {
        assert_eq!(convert_if("if (x < 10) {"), "if x < 10 {");
        assert_eq!(
            convert_if("    } else if (a == b) {\n"),
            "    } else if a == b {\n"
        );
    }

    #[test]
    fn unbraced_if_gets_a_block() {
        let input = "        if (!twoStageCreate)\n            ShuffleAndCreateTableau()\n\n";
        assert_eq!(
            convert_if(input),
            "        if !twoStageCreate {\n            ShuffleAndCreateTableau()\n        }\n\n"
        );
    }

    #[test]
    fn unbraced_if_with_shallow_body_keeps_body_indent() {
        let input = "if (ready)\n  go()\n";
        assert_eq!(convert_if(input), "if ready {\n  go()\n  }\n");
    }

    #[test]
    fn unbraced_if_with_tab_indent_closes_one_tab_out() {
        assert_eq!(
            convert_if("\t\tif (x)\n\t\t\tfoo()\n"),
            "\t\tif x {\n\t\t\tfoo()\n\t\t}\n"
        );
    }

    #[test]
    fn else_joins_closing_brace() {
        let input = "    if a {\n        x()\n    }\n    else {\n        y()\n    }\n";
        assert_eq!(
            convert_next_line_else(input),
            "    if a {\n        x()\n    } else {\n        y()\n    }\n"
        );
    }

    #[test]
    fn else_if_joins_closing_brace() {
        assert_eq!(convert_next_line_else("}\n    else if b {"), "} else if b {");
    }

    #[test]
    fn elsewhere_identifier_not_joined() {
        let input = "}\nelsewhere()";
        assert_eq!(convert_next_line_else(input), input);
    }
}
