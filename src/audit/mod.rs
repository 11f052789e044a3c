//! Audit module - The token audit pipeline
//!
//! Provides:
//! - ansi: SGR escape stripping
//! - tokenize: word token extraction
//! - counter: frequency aggregation
//! - report: path checks, listing output and the JSON record

pub mod ansi;
pub mod counter;
pub mod report;
pub mod tokenize;
