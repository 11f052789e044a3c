//! Core module - Shared data structures and utilities
//!
//! This module provides:
//! - Token audit model and error types
//! - Path conventions for the samples directory
//! - Lossy file reading
//! - Report and JSON rendering

pub mod file_reader;
pub mod model;
pub mod paths;
pub mod render;
