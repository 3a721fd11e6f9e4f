use clap::Args;
use serde::Serialize;

use cs2swift::convert::{self, RuleInfo};

use crate::commands::{CmdResult, GlobalArgs};

#[derive(Args, Debug, Default)]
pub struct RulesArgs {}

#[derive(Serialize)]
#[serde(tag = "command")]
pub enum RulesOutput {
    #[serde(rename = "rules")]
    List { rules: Vec<RuleInfo> },
}

pub fn run(_args: RulesArgs, _global: &GlobalArgs) -> CmdResult<RulesOutput> {
    Ok((
        RulesOutput::List {
            rules: convert::rules(),
        },
        0,
    ))
}
