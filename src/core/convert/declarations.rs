//! Member declaration rewrites.
//!
//! Rules run in a fixed order (const, field, property, constructor, method)
//! and each one only sees lines the previous ones left alone. Constants,
//! properties and methods are renamed to lowerCamelCase; the renames are
//! recorded so [`super::propagate`] can fix up references later.

use regex::{Captures, Regex};

use super::case::lower_camelcase;
use super::renames::Renames;
use crate::error::{Error, Result};
use crate::utils::text::{split_last_word, split_top_level};

/// A declared type after lexical mapping: `Int`, `Int?`, `Stack<Move>`,
/// `[[Card]]`, `[String: Int]`, `Int[]`, `System.TimeSpan`.
macro_rules! type_pattern {
    () => {
        r"(\[[^\]\n]*\]\]?|[\w.]+(?:<[^>\n]*>)?(?:\[\])?\??)"
    };
}

macro_rules! visibility_pattern {
    () => {
        r"(?:public|private|internal|protected)"
    };
}

static_regex!(
    CONST_FIELD,
    concat!(
        r"(?m)^([ \t]*)",
        visibility_pattern!(),
        r"[ \t]+(?:static[ \t]+)?const[ \t]+",
        type_pattern!(),
        r"[ \t]+(\w+)([ \t]*=[^\n]*)?$"
    )
);
static_regex!(
    FIELD,
    concat!(
        r"(?m)^([ \t]*)",
        visibility_pattern!(),
        r"[ \t]+((?:(?:static|readonly)[ \t]+)*)",
        type_pattern!(),
        r"[ \t]+(\w+)([ \t]*=[^\n]*)?$"
    )
);
static_regex!(
    PROPERTY,
    concat!(
        r"(?m)^([ \t]*)",
        visibility_pattern!(),
        r"[ \t]+((?:(?:static|override|virtual|abstract)[ \t]+)*)",
        type_pattern!(),
        r"[ \t]+(\w+)[ \t]*\{"
    )
);
static_regex!(
    AUTO_ACCESSORS,
    r"(?m)[ \t]*\{[ \t]*get;[ \t]*(?:(?:(?:private|protected|internal)[ \t]+)?set;[ \t]*)?\}[ \t]*$"
);
static_regex!(TYPE_DECLARATION, r"\b(?:class|struct)[ \t]+(\w+)");
static_regex!(
    METHOD,
    concat!(
        r"(?m)^([ \t]*)",
        visibility_pattern!(),
        r"[ \t]+((?:(?:override|static|virtual|abstract|sealed|async)[ \t]+)*)",
        type_pattern!(),
        r"[ \t]+(\w+)[ \t]*\(([^)\n]*)\)[ \t]*\{"
    )
);

/// Words that can sit where a member type would, but start a type declaration.
const TYPE_KEYWORDS: &[&str] = &["class", "struct", "interface", "enum", "delegate", "event"];

fn has_modifier(modifiers: &str, modifier: &str) -> bool {
    modifiers.split_whitespace().any(|m| m == modifier)
}

/// `public const int MaxScore = 10` → `let maxScore: Int = 10`.
pub fn convert_const_fields(text: &str, renames: &mut Renames) -> String {
    CONST_FIELD
        .replace_all(text, |caps: &Captures| {
            let name = &caps[3];
            let converted = lower_camelcase(name);
            renames.variables.record(name, converted.as_str());
            format!(
                "{}let {}: {}{}",
                &caps[1],
                converted,
                &caps[2],
                caps.get(4).map_or("", |m| m.as_str())
            )
        })
        .into_owned()
}

/// `private int elapsedSeconds` → `private var elapsedSeconds: Int`.
///
/// Field names are kept as declared and not recorded as renames.
pub fn convert_fields(text: &str) -> String {
    FIELD
        .replace_all(text, |caps: &Captures| {
            let ty = &caps[3];
            if TYPE_KEYWORDS.contains(&ty) {
                return caps[0].to_string();
            }

            let modifiers = &caps[2];
            let keyword = if has_modifier(modifiers, "readonly") {
                "let"
            } else {
                "var"
            };
            let storage = if has_modifier(modifiers, "static") {
                "static "
            } else {
                ""
            };

            format!(
                "{}private {}{} {}: {}{}",
                &caps[1],
                storage,
                keyword,
                &caps[4],
                ty,
                caps.get(5).map_or("", |m| m.as_str())
            )
        })
        .into_owned()
}

/// `public int Score {` → `var score: Int {`, then auto accessors are dropped.
pub fn convert_properties(text: &str, renames: &mut Renames) -> String {
    let converted = PROPERTY
        .replace_all(text, |caps: &Captures| {
            let ty = &caps[3];
            if TYPE_KEYWORDS.contains(&ty) {
                return caps[0].to_string();
            }

            let name = &caps[4];
            let converted = lower_camelcase(name);
            renames.variables.record(name, converted.as_str());

            let storage = if has_modifier(&caps[2], "static") {
                "static "
            } else {
                ""
            };
            format!("{}{}var {}: {} {{", &caps[1], storage, converted, ty)
        })
        .into_owned();

    strip_auto_accessors(&converted)
}

/// Remove a trailing `{ get; set; }` block, leaving a stored property.
pub fn strip_auto_accessors(text: &str) -> String {
    AUTO_ACCESSORS.replace_all(text, "").into_owned()
}

/// Names of every `class` / `struct` declared in the document, first-seen order.
pub fn declared_type_names(text: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for caps in TYPE_DECLARATION.captures_iter(text) {
        let name = caps[1].to_string();
        if !names.contains(&name) {
            names.push(name);
        }
    }
    names
}

/// `public GameBoard(Difficulty difficulty)` → `init(difficulty: Difficulty)`.
pub fn convert_constructors(text: &str) -> Result<String> {
    let mut content = text.to_string();

    for name in declared_type_names(text) {
        let pattern = format!(
            concat!(
                r"(?m)^([ \t]*)",
                visibility_pattern!(),
                r"[ \t]+{}[ \t]*\(([^)\n]*)\)"
            ),
            regex::escape(&name)
        );
        let re = Regex::new(&pattern).map_err(|e| {
            Error::internal_unexpected(format!("constructor pattern for '{}': {}", name, e))
        })?;

        content = re
            .replace_all(&content, |caps: &Captures| {
                format!("{}init({})", &caps[1], swap_params(&caps[2]))
            })
            .into_owned();
    }

    Ok(content)
}

/// `public override int Score(int bonus) {` → `override func score(bonus: Int) -> Int {`.
pub fn convert_methods(text: &str, renames: &mut Renames) -> String {
    METHOD
        .replace_all(text, |caps: &Captures| {
            let return_type = &caps[3];
            if TYPE_KEYWORDS.contains(&return_type) {
                return caps[0].to_string();
            }

            let name = &caps[4];
            let converted = lower_camelcase(name);
            renames.methods.record(name, converted.as_str());

            let modifiers = &caps[2];
            let mut prefix = String::new();
            if has_modifier(modifiers, "override") {
                prefix.push_str("override ");
            }
            if has_modifier(modifiers, "static") {
                prefix.push_str("static ");
            }

            let returns = if return_type == "void" {
                String::new()
            } else {
                format!(" -> {}", return_type)
            };

            format!(
                "{}{}func {}({}){} {{",
                &caps[1],
                prefix,
                converted,
                swap_params(&caps[5]),
                returns
            )
        })
        .into_owned()
}

/// `Int count, [Card] cards` → `count: Int, cards: [Card]`.
///
/// Default values are kept, `ref`/`out` become `inout`, `params` is dropped,
/// and a parameter without a separate type is passed through.
pub fn swap_params(params: &str) -> String {
    split_top_level(params, ',')
        .into_iter()
        .map(swap_param)
        .collect::<Vec<_>>()
        .join(", ")
}

fn swap_param(param: &str) -> String {
    let (declaration, default) = match param.split_once('=') {
        Some((decl, value)) => (decl.trim(), Some(value.trim())),
        None => (param.trim(), None),
    };

    let Some((ty, name)) = split_last_word(declaration) else {
        return param.trim().to_string();
    };

    let ty = match ty.split_once(char::is_whitespace) {
        Some(("ref" | "out", rest)) => format!("inout {}", rest.trim()),
        Some(("params" | "in", rest)) => rest.trim().to_string(),
        _ => ty.to_string(),
    };

    match default {
        Some(value) => format!("{}: {} = {}", name, ty, value),
        None => format!("{}: {}", name, ty),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn const_field_renamed_and_recorded() {
        let mut renames = Renames::default();
        let out = convert_const_fields("        public const Int NumPlayPiles = 10\n", &mut renames);
        assert_eq!(out, "        let numPlayPiles: Int = 10\n");
        assert_eq!(renames.variables.get("NumPlayPiles"), Some("numPlayPiles"));
    }

    #[test]
    fn const_field_without_initializer() {
        let mut renames = Renames::default();
        let out = convert_const_fields("private const String Title", &mut renames);
        assert_eq!(out, "let title: String");
    }

    #[test]
    fn static_const_field_renamed() {
        let mut renames = Renames::default();
        let out = convert_const_fields("    public static const Int MaxMoves = 3", &mut renames);
        assert_eq!(out, "    let maxMoves: Int = 3");
        assert_eq!(renames.variables.get("MaxMoves"), Some("maxMoves"));
    }

    #[test]
    fn field_keeps_its_name() {
        assert_eq!(
            convert_fields("    private Int elapsedSeconds\n    private object lockObj = object()"),
            "    private var elapsedSeconds: Int\n    private var lockObj: object = object()"
        );
    }

    #[test]
    fn field_modifiers() {
        assert_eq!(
            convert_fields("private static readonly [Card] Deck = [Card]()"),
            "private static let Deck: [Card] = [Card]()"
        );
    }

    #[test]
    fn field_rule_ignores_properties_and_methods() {
        let input = "public Int Score { get; set; }\npublic void Shuffle() {";
        assert_eq!(convert_fields(input), input);
    }

    #[test]
    fn auto_property_becomes_stored_var() {
        let mut renames = Renames::default();
        let out = convert_properties("    public Int Score { get; set; }\n", &mut renames);
        assert_eq!(out, "    var score: Int\n");
        assert_eq!(renames.variables.get("Score"), Some("score"));
    }

    #[test]
    fn property_with_accessor_body() {
        let mut renames = Renames::default();
        let out = convert_properties("public TimeSpan ElapsedTimeSpan {\n    get {", &mut renames);
        assert_eq!(out, "var elapsedTimeSpan: TimeSpan {\n    get {");
    }

    #[test]
    fn property_with_collection_types() {
        let mut renames = Renames::default();
        let out = convert_properties(
            "public [[Card]] PlayPiles { get; private set; }\npublic Stack<Move> SavedMoves { get; }",
            &mut renames,
        );
        assert_eq!(out, "var playPiles: [[Card]]\nvar savedMoves: Stack<Move>");
    }

    #[test]
    fn class_declaration_is_not_a_property() {
        let mut renames = Renames::default();
        let input = "public class GameBoard {\npublic static class Helpers {";
        assert_eq!(convert_properties(input, &mut renames), input);
        assert!(renames.variables.is_empty());
    }

    #[test]
    fn interface_and_enum_are_not_properties() {
        let mut renames = Renames::default();
        let input = "public interface IGameBoardEvents {\npublic enum Difficulty {";
        assert_eq!(convert_properties(input, &mut renames), input);
        assert!(renames.variables.is_empty());
    }

    #[test]
    fn string_default_with_comma_kept_whole() {
        assert_eq!(
            swap_params(r#"String b = "x,y", Int c"#),
            r#"b: String = "x,y", c: Int"#
        );
    }

    #[test]
    fn constructors_become_init() {
        let input = "public class GameBoard {\n    public GameBoard(Difficulty difficulty, Bool twoStage) {\n        x = GameBoard(y)\n";
        let out = convert_constructors(input).unwrap();
        assert_eq!(
            out,
            "public class GameBoard {\n    init(difficulty: Difficulty, twoStage: Bool) {\n        x = GameBoard(y)\n"
        );
    }

    #[test]
    fn constructors_without_classes_is_noop() {
        assert_eq!(convert_constructors("func a() {").unwrap(), "func a() {");
    }

    #[test]
    fn declared_type_names_are_unique() {
        let names = declared_type_names("class A {\n}\nstruct B {\n}\nclass A {");
        assert_eq!(names, vec!["A".to_string(), "B".to_string()]);
    }

    #[test]
    fn void_method_has_no_return_clause() {
        let mut renames = Renames::default();
        let out = convert_methods("    public void ShuffleAndDeal(Int seed) {", &mut renames);
        assert_eq!(out, "    func shuffleAndDeal(seed: Int) {");
        assert_eq!(renames.methods.get("ShuffleAndDeal"), Some("shuffleAndDeal"));
    }

    #[test]
    fn method_with_return_type_and_override() {
        let mut renames = Renames::default();
        let out = convert_methods(
            "public override String ToString() {\nprivate static Bool CanMove(Card card, [Card] pile) {",
            &mut renames,
        );
        assert_eq!(
            out,
            "override func toString() -> String {\nstatic func canMove(card: Card, pile: [Card]) -> Bool {"
        );
    }

    #[test]
    fn method_rule_leaves_statements() {
        let mut renames = Renames::default();
        let input = "if (x) {\nwhile (running) {";
        assert_eq!(convert_methods(input, &mut renames), input);
        assert!(renames.methods.is_empty());
    }

    #[test]
    fn swap_params_shapes() {
        assert_eq!(swap_params(""), "");
        assert_eq!(swap_params("Int a, Bool b"), "a: Int, b: Bool");
        assert_eq!(
            swap_params("[String: Int] counts, Int limit = 5"),
            "counts: [String: Int], limit: Int = 5"
        );
        assert_eq!(swap_params("ref Int total, out Bool ok"), "total: inout Int, ok: inout Bool");
        assert_eq!(swap_params("xml"), "xml");
    }
}
