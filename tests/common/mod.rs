//! Common test infrastructure.
//!
//! Provides the mock MoSPI MCP remote, canned record fixtures and the
//! test server harness. Tests import from this module only.
#![allow(dead_code)]

mod fixtures;
mod mock_mospi;
mod server;

pub use fixtures::*;
pub use mock_mospi::{
    MockMospi, ObservedCall, TOOL_FIELD_METADATA, TOOL_GET_DATA, TOOL_INDICATOR_CODES,
    TOOL_OVERVIEW,
};
pub use server::TestServer;
