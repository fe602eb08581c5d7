//! Error types for the smoke harness
//!
//! Only hard failures live here: the server writing to its stderr is a
//! reported result, not an error (see [`crate::runner::SmokeReport`]).

use std::io;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the smoke harness
#[derive(Error, Debug)]
pub enum Error {
    // === Server Process Errors ===
    #[error("Failed to start MCP server '{path}': {source}")]
    SpawnFailed { path: String, source: io::Error },

    #[error("MCP server did not expose a stdin pipe")]
    StdinUnavailable,

    // === Configuration Errors ===
    #[error("Invalid configuration file: {0}")]
    ConfigParse(String),

    #[error("Failed to read file '{path}': {error}")]
    FileRead { path: String, error: String },

    // === IO Errors ===
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    // === Serialization Errors ===
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
