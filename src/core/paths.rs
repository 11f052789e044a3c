//! Path conventions
//!
//! The audit always works on `<root>/samples/B.txt` and writes
//! `<root>/samples/tokens-audit.json` next to it.

use std::path::{Path, PathBuf};

/// Directory under the root holding the log samples
pub const SAMPLES_DIR: &str = "samples";

/// Sample file that gets audited
pub const INPUT_FILE: &str = "B.txt";

/// Output record written beside the input
pub const OUTPUT_FILE: &str = "tokens-audit.json";

/// Resolved locations for one audit run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditPaths {
    pub root: PathBuf,
    pub samples_dir: PathBuf,
    pub input: PathBuf,
    pub output: PathBuf,
}

impl AuditPaths {
    pub fn from_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let samples_dir = root.join(SAMPLES_DIR);
        let input = samples_dir.join(INPUT_FILE);
        let output = samples_dir.join(OUTPUT_FILE);
        Self {
            root,
            samples_dir,
            input,
            output,
        }
    }

    /// File name of the input, as shown in the report header
    pub fn input_name(&self) -> String {
        file_name(&self.input)
    }
}

/// Last path component, lossily converted
pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Canonicalize the root when possible, keeping the given path otherwise
pub fn resolve_root(root: &Path) -> PathBuf {
    root.canonicalize().unwrap_or_else(|_| root.to_path_buf())
}
