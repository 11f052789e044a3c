//! Token audit data model
//!
//! Every run produces the same shapes:
//! - `FrequencyTable`: token -> occurrence count
//! - `SortedReport`: entries ordered by count desc, token asc
//! - `AuditSummary`: what a successful run reports back to the CLI
//!
//! Failures are expressed as `AuditError`, never as panics.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::path::PathBuf;
use thiserror::Error;

/// A single entry of the output record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenCount {
    pub token: String,
    pub count: usize,
}

impl TokenCount {
    pub fn new(token: impl Into<String>, count: usize) -> Self {
        Self {
            token: token.into(),
            count,
        }
    }
}

impl Ord for TokenCount {
    /// Higher counts first, ties broken by ascending token
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .count
            .cmp(&self.count)
            .then_with(|| self.token.cmp(&other.token))
    }
}

impl PartialOrd for TokenCount {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Case-sensitive token occurrence counts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<String, usize>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `token`
    pub fn record(&mut self, token: &str) {
        if token.is_empty() {
            return;
        }
        match self.counts.get_mut(token) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(token.to_string(), 1);
            }
        }
    }

    /// Number of distinct tokens
    pub fn unique(&self) -> usize {
        self.counts.len()
    }

    /// Total number of token occurrences
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    #[allow(dead_code)]
    pub fn get(&self, token: &str) -> Option<usize> {
        self.counts.get(token).copied()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Consume the table into a deterministically ordered report
    pub fn into_sorted(self) -> SortedReport {
        let mut entries: Vec<TokenCount> = self
            .counts
            .into_iter()
            .map(|(token, count)| TokenCount::new(token, count))
            .collect();
        entries.sort();
        SortedReport { entries }
    }
}

/// Frequency table entries in report order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SortedReport {
    pub entries: Vec<TokenCount>,
}

impl SortedReport {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TokenCount> {
        self.entries.iter()
    }
}

/// Outcome of a successful audit run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditSummary {
    /// Distinct tokens found
    pub unique: usize,
    /// Token occurrences found
    pub total: usize,
    /// Where the output record was written
    pub output: PathBuf,
}

/// Terminal failures of an audit run
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("samples directory not found at {}", .path.display())]
    MissingDirectory { path: PathBuf },

    #[error("{} not found", .path.display())]
    MissingFile { path: PathBuf },

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AuditError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AuditError::Io {
            path: path.into(),
            source,
        }
    }

    /// Stable machine-readable code for diagnostics
    pub fn code(&self) -> &'static str {
        match self {
            AuditError::MissingDirectory { .. } => "MISSING_DIRECTORY",
            AuditError::MissingFile { .. } => "MISSING_FILE",
            AuditError::Io { .. } => "IO_ERROR",
        }
    }

    /// Process exit status for this failure
    pub fn exit_code(&self) -> i32 {
        1
    }
}
