//! Line-oriented SSE payload extraction.
//!
//! The MoSPI server answers JSON-RPC POSTs with a `text/event-stream` body
//! of the form `event: message\ndata: {json}\n\n`. The first `data:` line
//! carries the JSON-RPC envelope. Parsing is kept pure so malformed bodies
//! can be exercised without a transport.

use super::protocol::McpResponse;
use super::McpError;
use serde_json::Value;

const DATA_PREFIX: &str = "data: ";

/// Extract the JSON-RPC result from a raw SSE body.
///
/// Returns the `result` payload of the first `data:` line. A body with no
/// `data:` line is a protocol error; an envelope carrying a JSON-RPC
/// `error` object surfaces as a session error with the remote's message.
pub fn parse_sse_result(raw: &str) -> Result<Value, McpError> {
    for line in raw.lines() {
        let json = match line.strip_prefix(DATA_PREFIX) {
            Some(json) => json,
            None => continue,
        };

        let envelope: McpResponse = serde_json::from_str(json)
            .map_err(|e| McpError::Protocol(format!("malformed data line: {}", e)))?;

        if let Some(err) = envelope.error {
            return Err(McpError::Session(format!(
                "MCP error {}: {}",
                err.code, err.message
            )));
        }

        return Ok(envelope.result.unwrap_or(Value::Null));
    }

    Err(McpError::Protocol(
        "no data line found in SSE response".to_string(),
    ))
}
