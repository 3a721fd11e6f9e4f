use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Error;
use crate::utils::io;
use crate::Result;

/// Options read once at the start of a conversion.
///
/// Loadable from a JSON file; CLI flags are layered on top with
/// [`ConversionOptions::with_overrides`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionOptions {
    /// Rewrite `for (int i = 0; i < n; i++)` style loops to range loops.
    #[serde(default)]
    pub convert_simple_for_loops: bool,
}

/// Flag values coming from the command line. `None` means "not given".
#[derive(Debug, Clone, Copy, Default)]
pub struct OptionOverrides {
    pub convert_simple_for_loops: Option<bool>,
}

impl ConversionOptions {
    pub fn with_overrides(mut self, overrides: OptionOverrides) -> Self {
        if let Some(enabled) = overrides.convert_simple_for_loops {
            self.convert_simple_for_loops = enabled;
        }
        self
    }
}

/// Parse options from JSON text. `source` names the origin for error details.
pub fn parse_options(content: &str, source: &str) -> Result<ConversionOptions> {
    serde_json::from_str(content).map_err(|e| Error::config_invalid_json(source, e))
}

/// Load options from a JSON config file.
pub fn load_options(path: &Path) -> Result<ConversionOptions> {
    if !path.exists() {
        return Err(Error::config_invalid_value(
            "config",
            Some(path.display().to_string()),
            "Config file does not exist",
        ));
    }

    let content = io::read_file(path, &format!("read {}", path.display()))?;
    parse_options(&content, &path.display().to_string())
}

/// Resolve the options for a run: optional config file, then CLI overrides.
pub fn resolve_options(
    config_path: Option<&Path>,
    overrides: OptionOverrides,
) -> Result<ConversionOptions> {
    let base = match config_path {
        Some(path) => load_options(path)?,
        None => ConversionOptions::default(),
    };
    Ok(base.with_overrides(overrides))
}
