//! MCP Protocol Types
//!
//! Client-side message types for the Model Context Protocol as spoken by
//! the MoSPI statistics service. MCP is essentially JSON-RPC 2.0 with
//! specific method names and schemas; we only implement the subset the
//! data workflow needs (initialize + tools/call).

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON-RPC version string
pub const JSONRPC_VERSION: &str = "2.0";

/// MCP protocol version we speak
pub const MCP_PROTOCOL_VERSION: &str = "2024-11-05";

/// Name and version we report in the initialize handshake
pub const CLIENT_NAME: &str = "india-employment-tracker";
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Core Message Types
// ============================================================================

/// Outgoing request to the MCP server
#[derive(Debug, Clone, Serialize)]
pub struct McpRequest {
    pub jsonrpc: String,
    pub id: RequestId,
    pub method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

impl McpRequest {
    pub fn new(id: i64, method: impl Into<String>, params: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id: RequestId::Number(id),
            method: method.into(),
            params: Some(params),
        }
    }

    /// The initialize handshake request, always sent with id 1 on a fresh
    /// session.
    pub fn initialize() -> Self {
        Self::new(
            1,
            methods::INITIALIZE,
            serde_json::json!({
                "protocolVersion": MCP_PROTOCOL_VERSION,
                "capabilities": {},
                "clientInfo": { "name": CLIENT_NAME, "version": CLIENT_VERSION },
            }),
        )
    }

    /// A tools/call request for the given tool name and arguments.
    pub fn tool_call(id: i64, tool_name: &str, arguments: Value) -> Self {
        Self::new(
            id,
            methods::TOOLS_CALL,
            serde_json::json!({ "name": tool_name, "arguments": arguments }),
        )
    }
}

/// Response envelope from the MCP server
#[derive(Debug, Clone, Deserialize)]
pub struct McpResponse {
    #[allow(dead_code)]
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Option<RequestId>,
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub error: Option<McpErrorResponse>,
}

/// Request ID can be string or number
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum RequestId {
    String(String),
    Number(i64),
}

/// Error object embedded in a JSON-RPC response
#[derive(Debug, Clone, Deserialize)]
pub struct McpErrorResponse {
    pub code: i32,
    pub message: String,
    #[serde(default)]
    #[allow(dead_code)]
    pub data: Option<Value>,
}

// ============================================================================
// MCP Method Names
// ============================================================================

pub mod methods {
    pub const INITIALIZE: &str = "initialize";
    pub const TOOLS_CALL: &str = "tools/call";
}

// ============================================================================
// Tool Results
// ============================================================================

/// Result payload of a tools/call invocation.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolCallResult {
    #[serde(default)]
    pub content: Vec<ToolResultContent>,
    #[serde(rename = "structuredContent", default)]
    pub structured_content: Option<Value>,
    #[serde(rename = "isError", default)]
    pub is_error: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ToolResultContent {
    Text { text: String },
    // The MoSPI server only ever returns text content; anything else is
    // decoded but ignored.
    #[serde(other)]
    Unknown,
}

impl ToolCallResult {
    /// First text content block, if any. Tool errors carry their message here.
    pub fn first_text(&self) -> Option<&str> {
        self.content.iter().find_map(|c| match c {
            ToolResultContent::Text { text } => Some(text.as_str()),
            ToolResultContent::Unknown => None,
        })
    }

    /// Extract the structured payload of a tool result.
    ///
    /// The server returns data either in `structuredContent` or as JSON text
    /// in the first content block.
    pub fn extract_data(&self) -> Option<Value> {
        if let Some(structured) = &self.structured_content {
            return Some(structured.clone());
        }
        let text = self.first_text()?;
        serde_json::from_str(text).ok()
    }
}
