//! Request payload types for the `tools/call` envelope
//!
//! Field declaration order matches the wire order; serde_json serializes
//! struct fields in that order, which keeps the payload byte-identical
//! across runs.

use serde::{Deserialize, Serialize};

/// JSON-RPC protocol version sent in every request
pub const JSONRPC_VERSION: &str = "2.0";

/// Method name for invoking a tool on an MCP server
pub const METHOD_TOOLS_CALL: &str = "tools/call";

/// The tag-update tool exposed by the Vimeo MCP server
pub const TOOL_UPDATE_VIDEO: &str = "vimeo_update_video";

/// One JSON-RPC `tools/call` request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCallRequest {
    pub jsonrpc: String,
    pub method: String,
    pub params: ToolCallParams,
    pub id: u64,
}

/// Tool name plus its arguments
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCallParams {
    pub name: String,
    pub arguments: UpdateVideoArguments,
}

/// Arguments for the tag-update tool: the video and the full ordered tag
/// set that replaces whatever the video currently carries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateVideoArguments {
    pub video_id: String,
    pub tags: Vec<String>,
}

impl ToolCallRequest {
    /// Build the single request of a smoke run
    pub fn update_video(video_id: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            method: METHOD_TOOLS_CALL.to_string(),
            params: ToolCallParams {
                name: TOOL_UPDATE_VIDEO.to_string(),
                arguments: UpdateVideoArguments {
                    video_id: video_id.into(),
                    tags,
                },
            },
            id: 1,
        }
    }
}
