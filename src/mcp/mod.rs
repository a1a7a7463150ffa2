mod client;
mod pacer;
pub mod protocol;
pub mod sse;

pub use client::{McpClient, McpSettings, PlfsSource, MAX_PAGE_SIZE};
pub use pacer::{CallPacer, IntervalPacer, NoopPacer};

use thiserror::Error;

/// Errors from the MCP session client.
///
/// Transport and session failures are fatal for the current assembly step;
/// tool failures on a data query trigger the one-shot session reset before
/// propagating.
#[derive(Debug, Error)]
pub enum McpError {
    /// Non-success HTTP status from the remote.
    #[error("MCP request failed: HTTP {0}")]
    Transport(u16),

    /// Missing session identifier or a remote-reported envelope error.
    #[error("MCP session error: {0}")]
    Session(String),

    /// Malformed or missing streamed payload.
    #[error("MCP protocol error: {0}")]
    Protocol(String),

    /// The remote marked a tool result as an error.
    #[error("MCP tool error: {0}")]
    Tool(String),

    /// Connection-level client failure.
    #[error("MCP http error: {0}")]
    Http(#[from] reqwest::Error),
}
