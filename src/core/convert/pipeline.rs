//! The fixed, ordered rule table and the runner that applies it.

use serde::{Deserialize, Serialize};

use super::document::Document;
use super::renames::Renames;
use super::{declarations, lexical, loops, propagate, statements, structural};
use crate::config::ConversionOptions;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Lexical,
    Structural,
    Declarations,
    Statements,
    Loops,
    Propagation,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Lexical => "lexical",
            Stage::Structural => "structural",
            Stage::Declarations => "declarations",
            Stage::Statements => "statements",
            Stage::Loops => "loops",
            Stage::Propagation => "propagation",
        }
    }
}

/// When a rule is allowed to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Gate {
    Always,
    SimpleForLoops,
}

impl Gate {
    fn is_open(&self, options: &ConversionOptions) -> bool {
        match self {
            Gate::Always => true,
            Gate::SimpleForLoops => options.convert_simple_for_loops,
        }
    }
}

/// State shared by the rules of one run.
#[derive(Debug, Default)]
pub struct RuleContext {
    pub renames: Renames,
}

#[derive(Clone, Copy)]
pub enum Apply {
    /// Pure text rewrite.
    Text(fn(&str) -> String),
    /// Rewrite that reads or records renames, or can fail.
    Context(fn(&str, &mut RuleContext) -> Result<String>),
}

#[derive(Clone, Copy)]
pub struct Rule {
    pub id: &'static str,
    pub stage: Stage,
    pub gate: Gate,
    pub summary: &'static str,
    pub apply: Apply,
}

impl Rule {
    fn run(&self, text: &str, context: &mut RuleContext) -> Result<String> {
        match self.apply {
            Apply::Text(rewrite) => Ok(rewrite(text)),
            Apply::Context(rewrite) => rewrite(text, context),
        }
    }
}

/// Serializable view of a [`Rule`] for listing.
#[derive(Debug, Clone, Serialize)]
pub struct RuleInfo {
    pub id: &'static str,
    pub stage: Stage,
    pub gate: Gate,
    pub summary: &'static str,
}

impl From<&Rule> for RuleInfo {
    fn from(rule: &Rule) -> Self {
        Self {
            id: rule.id,
            stage: rule.stage,
            gate: rule.gate,
            summary: rule.summary,
        }
    }
}

fn const_fields(text: &str, context: &mut RuleContext) -> Result<String> {
    Ok(declarations::convert_const_fields(text, &mut context.renames))
}

fn properties(text: &str, context: &mut RuleContext) -> Result<String> {
    Ok(declarations::convert_properties(text, &mut context.renames))
}

fn constructors(text: &str, _context: &mut RuleContext) -> Result<String> {
    declarations::convert_constructors(text)
}

fn methods(text: &str, context: &mut RuleContext) -> Result<String> {
    Ok(declarations::convert_methods(text, &mut context.renames))
}

fn renames(text: &str, context: &mut RuleContext) -> Result<String> {
    propagate::apply_renames(text, &context.renames)
}

/// Every rule, in execution order.
pub const RULES: &[Rule] = &[
    Rule {
        id: "statement_terminators",
        stage: Stage::Lexical,
        gate: Gate::Always,
        summary: "Remove `;` at end of line",
        apply: Apply::Text(lexical::strip_statement_terminators),
    },
    Rule {
        id: "region_markers",
        stage: Stage::Lexical,
        gate: Gate::Always,
        summary: "Remove #region and #endregion lines",
        apply: Apply::Text(lexical::strip_region_markers),
    },
    Rule {
        id: "using_directives",
        stage: Stage::Lexical,
        gate: Gate::Always,
        summary: "Remove using directives, keep using (...) statements",
        apply: Apply::Text(lexical::strip_using_directives),
    },
    Rule {
        id: "self_reference",
        stage: Stage::Lexical,
        gate: Gate::Always,
        summary: "this -> self",
        apply: Apply::Text(lexical::convert_self_reference),
    },
    Rule {
        id: "primitive_types",
        stage: Stage::Lexical,
        gate: Gate::Always,
        summary: "int, string, bool, float, double -> Swift types",
        apply: Apply::Text(lexical::convert_primitive_types),
    },
    Rule {
        id: "nested_list_types",
        stage: Stage::Lexical,
        gate: Gate::Always,
        summary: "List<List<T>> -> [[T]]",
        apply: Apply::Text(lexical::convert_nested_list_types),
    },
    Rule {
        id: "list_array_types",
        stage: Stage::Lexical,
        gate: Gate::Always,
        summary: "List<T>[] -> [[T]]",
        apply: Apply::Text(lexical::convert_list_array_types),
    },
    Rule {
        id: "list_types",
        stage: Stage::Lexical,
        gate: Gate::Always,
        summary: "List<T> -> [T]",
        apply: Apply::Text(lexical::convert_list_types),
    },
    Rule {
        id: "dictionary_types",
        stage: Stage::Lexical,
        gate: Gate::Always,
        summary: "Dictionary<K, V> -> [K: V]",
        apply: Apply::Text(lexical::convert_dictionary_types),
    },
    Rule {
        id: "debug_assert",
        stage: Stage::Lexical,
        gate: Gate::Always,
        summary: "Debug.Assert( -> assert(",
        apply: Apply::Text(lexical::convert_debug_assert),
    },
    Rule {
        id: "new_keyword",
        stage: Stage::Lexical,
        gate: Gate::Always,
        summary: "Remove the new keyword",
        apply: Apply::Text(lexical::strip_new_keyword),
    },
    Rule {
        id: "open_braces",
        stage: Stage::Structural,
        gate: Gate::Always,
        summary: "Join braces on their own line to the previous line",
        apply: Apply::Text(structural::join_open_braces),
    },
    Rule {
        id: "namespace",
        stage: Stage::Structural,
        gate: Gate::Always,
        summary: "Unwrap the namespace block",
        apply: Apply::Text(structural::unwrap_namespace),
    },
    Rule {
        id: "const_fields",
        stage: Stage::Declarations,
        gate: Gate::Always,
        summary: "const fields -> let, renamed to lowerCamelCase",
        apply: Apply::Context(const_fields),
    },
    Rule {
        id: "fields",
        stage: Stage::Declarations,
        gate: Gate::Always,
        summary: "Fields -> private var name: Type",
        apply: Apply::Text(declarations::convert_fields),
    },
    Rule {
        id: "properties",
        stage: Stage::Declarations,
        gate: Gate::Always,
        summary: "Properties -> var, renamed to lowerCamelCase",
        apply: Apply::Context(properties),
    },
    Rule {
        id: "constructors",
        stage: Stage::Declarations,
        gate: Gate::Always,
        summary: "Constructors -> init(...)",
        apply: Apply::Context(constructors),
    },
    Rule {
        id: "methods",
        stage: Stage::Declarations,
        gate: Gate::Always,
        summary: "Methods -> func, renamed to lowerCamelCase",
        apply: Apply::Context(methods),
    },
    Rule {
        id: "locals",
        stage: Stage::Statements,
        gate: Gate::Always,
        summary: "Typed locals -> let",
        apply: Apply::Text(statements::convert_locals),
    },
    Rule {
        id: "if_statements",
        stage: Stage::Statements,
        gate: Gate::Always,
        summary: "Drop if parentheses, brace single-line bodies",
        apply: Apply::Text(statements::convert_if),
    },
    Rule {
        id: "else_placement",
        stage: Stage::Statements,
        gate: Gate::Always,
        summary: "Move else onto the closing brace line",
        apply: Apply::Text(statements::convert_next_line_else),
    },
    Rule {
        id: "simple_for_loops",
        stage: Stage::Loops,
        gate: Gate::SimpleForLoops,
        summary: "Counted for loops -> ranges",
        apply: Apply::Text(loops::convert_simple_for_loops),
    },
    Rule {
        id: "renames",
        stage: Stage::Propagation,
        gate: Gate::Always,
        summary: "Apply recorded renames to member accesses and calls",
        apply: Apply::Context(renames),
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleStatus {
    Changed,
    Unchanged,
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleOutcome {
    pub id: &'static str,
    pub stage: Stage,
    pub status: RuleStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PipelineRunSummary {
    pub total_rules: usize,
    pub changed: usize,
    pub unchanged: usize,
    pub skipped: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct PipelineRun {
    pub rules: Vec<RuleOutcome>,
    pub renames: Renames,
    pub summary: PipelineRunSummary,
}

/// Apply every rule in [`RULES`] order to `document`.
///
/// A failing rule aborts the run; the document then holds the output of the
/// rules before it and must not be written.
pub fn run(document: &mut Document, options: &ConversionOptions) -> Result<PipelineRun> {
    let mut context = RuleContext::default();
    let mut outcomes = Vec::with_capacity(RULES.len());
    let mut stage = None;

    for rule in RULES {
        if stage != Some(rule.stage) {
            log_status!("convert", "Stage {}", rule.stage.as_str());
            stage = Some(rule.stage);
        }

        let status = if !rule.gate.is_open(options) {
            RuleStatus::Skipped
        } else {
            let next = rule.run(document.as_str(), &mut context)?;
            if document.replace(next) {
                RuleStatus::Changed
            } else {
                RuleStatus::Unchanged
            }
        };

        outcomes.push(RuleOutcome {
            id: rule.id,
            stage: rule.stage,
            status,
        });
    }

    let summary = summarize(&outcomes);
    Ok(PipelineRun {
        rules: outcomes,
        renames: context.renames,
        summary,
    })
}

fn summarize(outcomes: &[RuleOutcome]) -> PipelineRunSummary {
    let count = |status: RuleStatus| outcomes.iter().filter(|o| o.status == status).count();
    PipelineRunSummary {
        total_rules: outcomes.len(),
        changed: count(RuleStatus::Changed),
        unchanged: count(RuleStatus::Unchanged),
        skipped: count(RuleStatus::Skipped),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_ids_are_unique() {
        let mut ids: Vec<&str> = RULES.iter().map(|r| r.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), RULES.len());
    }

    #[test]
    fn stages_run_in_order() {
        let stages: Vec<Stage> = RULES.iter().map(|r| r.stage).collect();
        let mut sorted = stages.clone();
        sorted.sort_by_key(|s| *s as u8);
        assert_eq!(stages, sorted);
    }

    #[test]
    fn nested_list_rules_precede_plain_list() {
        let position = |id: &str| RULES.iter().position(|r| r.id == id).unwrap();
        assert!(position("nested_list_types") < position("list_types"));
        assert!(position("list_array_types") < position("list_types"));
    }

    #[test]
    fn loop_rule_skipped_unless_enabled() {
        let mut doc = Document::new("for (int i = 0; i < 10; i++) {\n}\n");
        let result = run(&mut doc, &ConversionOptions::default()).unwrap();
        let loops = result.rules.iter().find(|o| o.id == "simple_for_loops").unwrap();
        assert_eq!(loops.status, RuleStatus::Skipped);
        assert_eq!(result.summary.skipped, 1);
        assert_eq!(result.summary.total_rules, RULES.len());
        assert!(doc.as_str().contains("for (Int i = 0; i < 10; i++) {"));
    }

    #[test]
    fn loop_rule_runs_when_enabled() {
        let mut doc = Document::new("for (int i = 0; i < 10; i++) {\n}\n");
        let options = ConversionOptions {
            convert_simple_for_loops: true,
        };
        let result = run(&mut doc, &options).unwrap();
        assert_eq!(result.summary.skipped, 0);
        assert_eq!(doc.as_str(), "for i in 0..<10 {\n}\n");
    }

    #[test]
    fn renames_collected_across_rules() {
        let mut doc = Document::new("public const int NumPlayPiles = 10;\n");
        let result = run(&mut doc, &ConversionOptions::default()).unwrap();
        assert_eq!(result.renames.variables.get("NumPlayPiles"), Some("numPlayPiles"));
        assert_eq!(doc.as_str(), "let numPlayPiles: Int = 10\n");
    }
}
