//! Best-effort C# to Swift source rewriting.
//!
//! [`convert::convert`] runs an ordered table of text rules over one source
//! document and returns the rewritten text together with the member renames
//! it applied.

/// Macro for prefixed status logging to stderr (only when stderr is a terminal).
///
/// Usage:
/// ```ignore
/// log_status!("convert", "Converting {}", path.display());
/// log_status!("convert", "Stage {}", stage.as_str());
/// ```
#[macro_export]
macro_rules! log_status {
    ($prefix:expr, $($arg:tt)*) => {
        if ::std::io::IsTerminal::is_terminal(&::std::io::stderr()) {
            eprintln!(concat!("[", $prefix, "] {}"), format_args!($($arg)*));
        }
    };
}

pub mod core;
pub mod utils;

// Re-export everything from core for ergonomic library use
// Users can write `cs2swift::convert` instead of `cs2swift::core::convert`
pub use core::*;
pub use utils::*;
