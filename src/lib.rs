//! Smoke-test harness for stdio MCP servers
//!
//! Sends one JSON-RPC `tools/call` request to a spawned MCP server process
//! and reports whatever comes back on its stdout and stderr.

pub mod common;
pub mod mcp;
pub mod runner;

// Re-export commonly used types for tests
pub use common::{Error, Result};
pub use mcp::ToolCallRequest;
pub use runner::SmokeReport;
