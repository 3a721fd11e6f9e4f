//! Generic utility primitives with zero conversion knowledge.
//!
//! - `io` - File I/O with consistent error handling
//! - `text` - Small text-splitting helpers shared by the rewrite rules
//! - `validation` - Input validation helpers

pub mod io;
pub mod text;
pub mod validation;
