//! Lexical clean-up rules.
//!
//! Each rule is a whole-document substitution with no knowledge of structure.
//! They run before everything else so later patterns see simpler text:
//! no statement terminators, no region markers, Swift type names.

use regex::Captures;

static_regex!(STATEMENT_TERMINATOR, r"(?m);[ \t]*$");
static_regex!(REGION_MARKER, r"(?m)^[ \t]*#(?:end)?region\b[^\n]*(?:\n|\z)");
static_regex!(USING_DIRECTIVE, r"(?m)^[ \t]*using[ \t]+([^\n]*)(?:\n|\z)");
static_regex!(SELF_REFERENCE, r"\bthis\b([ \t]*\()?");
static_regex!(PRIMITIVE_TYPE, r"\b(int|string|bool|float|double)\b");
static_regex!(
    NESTED_LIST_TYPE,
    r"\b(?:List|IList)<(?:List|IList)<(\w+)>>"
);
static_regex!(LIST_ARRAY_TYPE, r"\b(?:List|IList)<(\w+)>\[\]");
static_regex!(LIST_TYPE, r"\b(?:List|IList)<(\w+)>");
static_regex!(
    DICTIONARY_TYPE,
    r"\b(?:Dictionary|IDictionary)<(\w+),[ \t]*(\w+)>"
);
static_regex!(DEBUG_ASSERT, r"\bDebug\.Assert\(");
static_regex!(NEW_KEYWORD, r"\bnew ");

/// `foo();` → `foo()`. Only a terminator at end of line is removed.
pub fn strip_statement_terminators(text: &str) -> String {
    STATEMENT_TERMINATOR.replace_all(text, "").into_owned()
}

/// Drop `#region` / `#endregion` lines, newline included.
pub fn strip_region_markers(text: &str) -> String {
    REGION_MARKER.replace_all(text, "").into_owned()
}

/// Drop `using System.Linq` style directive lines.
///
/// A `using (...)` statement is call-shaped and stays. This is a heuristic:
/// anything else after `using` on its own line is treated as a directive.
pub fn strip_using_directives(text: &str) -> String {
    USING_DIRECTIVE
        .replace_all(text, |caps: &Captures| {
            if caps[1].trim_start().starts_with('(') {
                caps[0].to_string()
            } else {
                String::new()
            }
        })
        .into_owned()
}

/// `this` → `self`, except constructor chaining (`: this(...)`).
pub fn convert_self_reference(text: &str) -> String {
    SELF_REFERENCE
        .replace_all(text, |caps: &Captures| {
            if caps.get(1).is_some() {
                caps[0].to_string()
            } else {
                "self".to_string()
            }
        })
        .into_owned()
}

/// Map the built-in primitive keywords to Swift type names.
///
/// `string` maps to `String`. Earlier versions of this tool emitted `Int`
/// for `string`; that mapping was a defect and is not reproduced.
pub fn convert_primitive_types(text: &str) -> String {
    PRIMITIVE_TYPE
        .replace_all(text, |caps: &Captures| swift_primitive(&caps[1]).to_string())
        .into_owned()
}

fn swift_primitive(keyword: &str) -> &str {
    match keyword {
        "int" => "Int",
        "string" => "String",
        "bool" => "Bool",
        "float" => "Float",
        "double" => "Double",
        other => other,
    }
}

/// `List<List<T>>` → `[[T]]`.
pub fn convert_nested_list_types(text: &str) -> String {
    NESTED_LIST_TYPE.replace_all(text, "[[${1}]]").into_owned()
}

/// `List<T>[]` → `[[T]]`.
pub fn convert_list_array_types(text: &str) -> String {
    LIST_ARRAY_TYPE.replace_all(text, "[[${1}]]").into_owned()
}

/// `List<T>` → `[T]`. Must run after the two nested forms.
pub fn convert_list_types(text: &str) -> String {
    LIST_TYPE.replace_all(text, "[${1}]").into_owned()
}

/// `Dictionary<K, V>` → `[K: V]`.
pub fn convert_dictionary_types(text: &str) -> String {
    DICTIONARY_TYPE.replace_all(text, "[${1}: ${2}]").into_owned()
}

/// `Debug.Assert(` → `assert(`.
pub fn convert_debug_assert(text: &str) -> String {
    DEBUG_ASSERT.replace_all(text, "assert(").into_owned()
}

/// `new Foo()` → `Foo()`.
pub fn strip_new_keyword(text: &str) -> String {
    NEW_KEYWORD.replace_all(text, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminators_removed_only_at_line_end() {
        let input = "int x = 5;\nfor (int i = 0; i < 3; i++)\nfoo();  \n";
        assert_eq!(
            strip_statement_terminators(input),
            "int x = 5\nfor (int i = 0; i < 3; i++)\nfoo()\n"
        );
    }

    #[test]
    fn region_lines_removed_entirely() {
        let input = "a\n    #region Fields\n    int x\n    #endregion\nb\n";
        assert_eq!(strip_region_markers(input), "a\n    int x\nb\n");
    }

    #[test]
    fn using_directives_removed_but_statements_kept() {
        let input = "using System;\nusing System.Linq\n    using (StringReader sr = StringReader(xml)) {\n";
        assert_eq!(
            strip_using_directives(input),
            "    using (StringReader sr = StringReader(xml)) {\n"
        );
    }

    #[test]
    fn using_directive_on_last_line_without_newline() {
        assert_eq!(strip_using_directives("class A\nusing Foo"), "class A\n");
    }

    #[test]
    fn this_becomes_self() {
        assert_eq!(
            convert_self_reference("this.score = score\nLoad(xr, this)"),
            "self.score = score\nLoad(xr, self)"
        );
    }

    #[test]
    fn constructor_chaining_this_is_kept() {
        assert_eq!(
            convert_self_reference("    : this(difficulty, events, false) {"),
            "    : this(difficulty, events, false) {"
        );
    }

    #[test]
    fn this_inside_identifier_is_not_touched() {
        assert_eq!(convert_self_reference("thisValue + isthis"), "thisValue + isthis");
    }

    #[test]
    fn primitives_mapped() {
        assert_eq!(
            convert_primitive_types("int a; bool b; float c; double d"),
            "Int a; Bool b; Float c; Double d"
        );
    }

    #[test]
    fn string_maps_to_swift_string_not_int() {
        assert_eq!(convert_primitive_types("string name"), "String name");
    }

    #[test]
    fn primitive_keywords_inside_identifiers_untouched() {
        assert_eq!(convert_primitive_types("interval stringify"), "interval stringify");
    }

    #[test]
    fn list_shapes_do_not_collide() {
        let text = "List<List<Card>> a\nIList<Card>[] b\nList<Card> c\nIList<IList<Card>> d";
        let text = convert_nested_list_types(text);
        let text = convert_list_array_types(&text);
        let text = convert_list_types(&text);
        assert_eq!(text, "[[Card]] a\n[[Card]] b\n[Card] c\n[[Card]] d");
    }

    #[test]
    fn dictionary_mapped() {
        assert_eq!(
            convert_dictionary_types("Dictionary<String, Int> counts"),
            "[String: Int] counts"
        );
    }

    #[test]
    fn debug_assert_mapped() {
        assert_eq!(convert_debug_assert("Debug.Assert(x > 0)"), "assert(x > 0)");
    }

    #[test]
    fn new_keyword_removed() {
        assert_eq!(
            strip_new_keyword("var s = new Stack<Move>()\nrenew x"),
            "var s = Stack<Move>()\nrenew x"
        );
    }
}
