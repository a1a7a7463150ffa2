//! PLFS Tracker Server Library
//!
//! This library exposes the internal modules for testing and potential reuse.

pub mod cache;
pub mod config;
pub mod dashboard;
pub mod mcp;
pub mod plfs;
pub mod server;

// Re-export commonly used types for convenience
pub use dashboard::{DashboardAssembler, DashboardData};
pub use mcp::{McpClient, McpError, McpSettings, PlfsSource};
pub use server::{run_server, RequestsLoggingLevel};
