//! Configuration warning value object.

use std::path::PathBuf;

/// Non-fatal problem found while loading a config file (e.g. an unknown key).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// The unknown key
    pub key: String,
    /// The file it was found in
    pub file: PathBuf,
    /// 1-indexed line number, if the key could be located
    pub line: Option<usize>,
    /// Closest known key, if any
    pub suggestion: Option<String>,
}
