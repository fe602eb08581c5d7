//! MCP wire payload
//!
//! The request side of the stdio MCP transport: a JSON-RPC 2.0 envelope
//! carrying one `tools/call` invocation, framed as a single line of JSON.

pub mod types;

pub use types::{ToolCallParams, ToolCallRequest, UpdateVideoArguments};
