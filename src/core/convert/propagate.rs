//! Replay recorded renames over the whole document.

use regex::{NoExpand, Regex};

use super::renames::Renames;
use crate::error::{Error, Result};

/// Update member accesses (`.Score`) and call sites (`Shuffle(`) to the
/// names their declarations were given.
///
/// Each entry is one global pass, variables first, then methods, in the
/// order they were recorded.
pub fn apply_renames(text: &str, renames: &Renames) -> Result<String> {
    let mut content = text.to_string();

    for (from, to) in renames.variables.iter() {
        if from == to {
            continue;
        }
        let re = compile(&format!(r"\.{}\b", regex::escape(from)), from)?;
        let replacement = format!(".{}", to);
        content = re.replace_all(&content, NoExpand(&replacement)).into_owned();
    }

    for (from, to) in renames.methods.iter() {
        if from == to {
            continue;
        }
        let re = compile(&format!(r"\b{}\(", regex::escape(from)), from)?;
        let replacement = format!("{}(", to);
        content = re.replace_all(&content, NoExpand(&replacement)).into_owned();
    }

    Ok(content)
}

fn compile(pattern: &str, name: &str) -> Result<Regex> {
    Regex::new(pattern)
        .map_err(|e| Error::internal_unexpected(format!("rename pattern for '{}': {}", name, e)))
}
