//! C# to Swift source conversion.
//!
//! A conversion is a fixed sequence of whole-document rewrites (see
//! [`pipeline::RULES`]). The output is a best-effort starting point for a
//! manual port, not compilable Swift.

use std::path::Path;

use serde::Serialize;

use crate::config::ConversionOptions;
use crate::error::Result;
use crate::utils::io;

macro_rules! static_regex {
    ($name:ident, $pattern:expr) => {
        static $name: ::std::sync::LazyLock<::regex::Regex> = ::std::sync::LazyLock::new(|| {
            ::regex::Regex::new($pattern).expect(concat!("invalid pattern ", stringify!($name)))
        });
    };
}

pub mod case;
pub mod declarations;
pub mod document;
pub mod lexical;
pub mod loops;
pub mod pipeline;
pub mod propagate;
pub mod renames;
pub mod statements;
pub mod structural;

pub use document::Document;
pub use pipeline::{PipelineRunSummary, RuleInfo, RuleOutcome, RuleStatus, Stage, RULES};
pub use renames::{RenameEntry, RenameKind, RenameTable, Renames};

/// Result of converting one document in memory.
#[derive(Debug, Clone, Serialize)]
pub struct Conversion {
    #[serde(skip)]
    pub output: String,
    pub renames: Renames,
    pub rules: Vec<RuleOutcome>,
    pub summary: PipelineRunSummary,
}

impl Conversion {
    /// `Score -> score` / `Shuffle() -> shuffle()`, one per applied rename.
    pub fn report_lines(&self) -> Vec<String> {
        self.renames.report_lines()
    }
}

/// Convert C# source text.
pub fn convert(source: &str, options: &ConversionOptions) -> Result<Conversion> {
    let mut document = Document::new(source);
    let run = pipeline::run(&mut document, options)?;

    Ok(Conversion {
        output: document.into_string(),
        renames: run.renames,
        rules: run.rules,
        summary: run.summary,
    })
}

/// Convert `input` and write the result to `output`.
///
/// Nothing is written unless every rule completed; the write itself is atomic.
pub fn convert_file(input: &Path, output: &Path, options: &ConversionOptions) -> Result<Conversion> {
    let source = io::read_source(input)?;
    log_status!("convert", "Converting {}", input.display());

    let conversion = convert(&source, options)?;

    io::write_file_atomic(
        output,
        &conversion.output,
        &format!("write {}", output.display()),
    )?;
    log_status!(
        "convert",
        "Wrote {} ({} renames)",
        output.display(),
        conversion.renames.entries().len()
    );

    Ok(conversion)
}

/// Listing of every rule in execution order.
pub fn rules() -> Vec<RuleInfo> {
    RULES.iter().map(RuleInfo::from).collect()
}
