//! Rename tables collected while declarations are rewritten.

use indexmap::IndexMap;
use serde::Serialize;

/// Original identifier → converted identifier, in first-insertion order.
///
/// Re-recording a name replaces its converted value but keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RenameTable {
    entries: IndexMap<String, String>,
}

impl RenameTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, original: impl Into<String>, converted: impl Into<String>) {
        self.entries.insert(original.into(), converted.into());
    }

    pub fn get(&self, original: &str) -> Option<&str> {
        self.entries.get(original).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RenameKind {
    Variable,
    Method,
}

/// One applied rename, as reported after a conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenameEntry {
    pub kind: RenameKind,
    pub from: String,
    pub to: String,
}

impl RenameEntry {
    /// `Score -> score` for variables, `Shuffle() -> shuffle()` for methods.
    pub fn report_line(&self) -> String {
        match self.kind {
            RenameKind::Variable => format!("{} -> {}", self.from, self.to),
            RenameKind::Method => format!("{}() -> {}()", self.from, self.to),
        }
    }
}

/// The two tables owned by one conversion run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Renames {
    /// Fields, properties and constants.
    pub variables: RenameTable,
    pub methods: RenameTable,
}

impl Renames {
    /// Variables first, then methods, each in insertion order.
    pub fn entries(&self) -> Vec<RenameEntry> {
        let variables = self.variables.iter().map(|(from, to)| RenameEntry {
            kind: RenameKind::Variable,
            from: from.to_string(),
            to: to.to_string(),
        });
        let methods = self.methods.iter().map(|(from, to)| RenameEntry {
            kind: RenameKind::Method,
            from: from.to_string(),
            to: to.to_string(),
        });
        variables.chain(methods).collect()
    }

    pub fn report_lines(&self) -> Vec<String> {
        self.entries().iter().map(RenameEntry::report_line).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_write_wins_keeps_position() {
        let mut table = RenameTable::new();
        table.record("Score", "score");
        table.record("Deck", "deck");
        table.record("Score", "points");

        let entries: Vec<_> = table.iter().collect();
        assert_eq!(entries, vec![("Score", "points"), ("Deck", "deck")]);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn report_lines_mark_methods() {
        let mut renames = Renames::default();
        renames.methods.record("Shuffle", "shuffle");
        renames.variables.record("NumMoves", "numMoves");

        assert_eq!(
            renames.report_lines(),
            vec!["NumMoves -> numMoves".to_string(), "Shuffle() -> shuffle()".to_string()]
        );
    }

    #[test]
    fn serializes_as_plain_maps() {
        let mut renames = Renames::default();
        renames.variables.record("Score", "score");
        let json = serde_json::to_value(&renames).unwrap();
        assert_eq!(json["variables"]["Score"], "score");
        assert!(json["methods"].as_object().unwrap().is_empty());
    }
}
