//! Input validation primitives for command arguments.

use crate::error::{Error, Result};

/// Require a positional argument to be present.
///
/// Reported as `validation.missing_argument` with the argument name in details.
pub fn require_argument<T>(opt: Option<T>, name: &str, hint: &str) -> Result<T> {
    opt.ok_or_else(|| Error::validation_missing_argument(vec![name.to_string()]).with_hint(hint))
}

/// Require a string to be non-empty after trimming.
///
/// Returns a reference to the trimmed string on success.
pub fn require_non_empty<'a>(value: &'a str, field: &str, message: &str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(Error::validation_invalid_argument(field, message, None, None))
    } else {
        Ok(trimmed)
    }
}
