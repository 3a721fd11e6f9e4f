pub type CmdResult<T> = cs2swift::Result<(T, i32)>;

pub(crate) struct GlobalArgs {}

pub mod convert;
pub mod rules;

/// Dispatch a command to its handler and map result to JSON.
macro_rules! dispatch {
    ($args:expr, $global:expr, $module:ident) => {
        crate::output::map_cmd_result_to_json($module::run($args, $global))
    };
}

pub(crate) fn run_json(
    command: crate::Commands,
    global: &GlobalArgs,
) -> (cs2swift::Result<serde_json::Value>, i32) {
    match command {
        crate::Commands::Convert(args) => dispatch!(args, global, convert),
        crate::Commands::Rules(args) => dispatch!(args, global, rules),
    }
}
