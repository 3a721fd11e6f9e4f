use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use cs2swift::config::{self, OptionOverrides};
use cs2swift::log_status;
use cs2swift::convert::{self, PipelineRunSummary, RenameEntry, RuleOutcome};
use cs2swift::utils::{io, validation};

use crate::commands::{CmdResult, GlobalArgs};

#[derive(Args, Debug, Default)]
pub struct ConvertArgs {
    /// C# source file to convert
    pub file: Option<String>,

    /// Destination file (default: overwrite the input)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<String>,

    /// Rewrite simple counted for loops as range loops
    #[arg(long)]
    pub convert_simple_for_loops: bool,

    /// JSON options file
    #[arg(long, value_name = "FILE")]
    pub config: Option<String>,
}

#[derive(Serialize)]
#[serde(tag = "command")]
pub enum ConvertOutput {
    #[serde(rename = "convert")]
    Convert {
        input: String,
        output: String,
        convert_simple_for_loops: bool,
        renames: Vec<RenameEntry>,
        report: Vec<String>,
        rules: Vec<RuleOutcome>,
        summary: PipelineRunSummary,
    },
}

pub fn run(args: ConvertArgs, _global: &GlobalArgs) -> CmdResult<ConvertOutput> {
    let file = validation::require_argument(
        args.file,
        "file",
        "Usage: cs2swift convert <FILE> [--output <FILE>]",
    )?;
    let input = io::expand_path(&file);
    let output = resolve_output_path(&input, args.output.as_deref())?;

    let overrides = OptionOverrides {
        convert_simple_for_loops: args.convert_simple_for_loops.then_some(true),
    };
    let config_path = args.config.as_deref().map(io::expand_path);
    let options = config::resolve_options(config_path.as_deref(), overrides)?;

    let conversion = convert::convert_file(&input, &output, &options)?;
    for line in conversion.report_lines() {
        log_status!("renamed", "{}", line);
    }

    Ok((
        ConvertOutput::Convert {
            input: input.display().to_string(),
            output: output.display().to_string(),
            convert_simple_for_loops: options.convert_simple_for_loops,
            renames: conversion.renames.entries(),
            report: conversion.report_lines(),
            rules: conversion.rules,
            summary: conversion.summary,
        },
        0,
    ))
}

/// No `--output` writes back over the input. An explicitly empty one is an error.
fn resolve_output_path(input: &std::path::Path, output: Option<&str>) -> cs2swift::Result<PathBuf> {
    match output {
        None => Ok(input.to_path_buf()),
        Some(raw) => {
            let raw = validation::require_non_empty(
                raw,
                "output",
                "Output path must not be empty",
            )?;
            Ok(io::expand_path(raw))
        }
    }
}
