//! Session-oriented client for the MoSPI MCP service.
//!
//! The remote enforces an ordered tool workflow per session: an overview
//! call, an indicator-code lookup and a field-metadata lookup must precede
//! any data query for a given (indicator, frequency) pair. The client
//! memoizes completed pairs on the session, paginates data queries, and on
//! a data-query failure discards the session and replays the whole
//! workflow exactly once before giving up.

use super::pacer::{CallPacer, IntervalPacer, NoopPacer};
use super::protocol::McpRequest;
use super::protocol::ToolCallResult;
use super::sse::parse_sse_result;
use super::McpError;
use crate::plfs::{PlfsDataResponse, PlfsFilters, PlfsRecord, DATASET};
use async_trait::async_trait;
use reqwest::header;
use serde_json::Value;
use std::collections::HashSet;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// Response header carrying the session identifier.
const SESSION_ID_HEADER: &str = "mcp-session-id";

/// Accept header value for SSE-or-JSON responses.
const ACCEPT_VALUE: &str = "text/event-stream, application/json";

/// Hard cap on records per data-query page.
pub const MAX_PAGE_SIZE: u32 = 500;

/// Tool names are an opaque contract with the MoSPI server.
mod tools {
    pub const OVERVIEW: &str = "1_know_about_mospi_api";
    pub const INDICATOR_CODES: &str = "2_get_indicator_specific_in_dataset";
    pub const FIELD_METADATA: &str = "3_get_fields_to_retrieve_data";
    pub const GET_DATA: &str = "4_get_data";
}

/// Connection settings for the MCP client.
#[derive(Debug, Clone)]
pub struct McpSettings {
    /// MCP endpoint URL.
    pub url: String,
    /// Minimum delay between consecutive calls on the shared session.
    pub call_interval: Duration,
    /// Per-request timeout.
    pub request_timeout: Duration,
    /// Records per data-query page, capped at [`MAX_PAGE_SIZE`].
    pub page_size: u32,
}

impl Default for McpSettings {
    fn default() -> Self {
        Self {
            url: "https://mcp.mospi.gov.in/".to_string(),
            call_interval: Duration::from_millis(1200),
            request_timeout: Duration::from_secs(30),
            page_size: MAX_PAGE_SIZE,
        }
    }
}

/// An established remote session.
///
/// Holds the server-issued identifier, the JSON-RPC id counter (the
/// handshake consumes id 1) and the set of (indicator, frequency) pairs
/// whose preparatory workflow has completed.
struct McpSession {
    session_id: String,
    next_id: i64,
    prepared: HashSet<(String, String)>,
}

/// Source of raw PLFS records. The seam between the wire client and the
/// dashboard assembler; tests substitute canned record sets.
#[async_trait]
pub trait PlfsSource: Send + Sync {
    /// Fetch every record matching the filters, across all result pages.
    async fn fetch_all_records(&self, filters: &PlfsFilters) -> Result<Vec<PlfsRecord>, McpError>;
}

/// MCP client holding one shared session behind an async mutex.
///
/// Callers may await multiple fetches together; the mutex plus the pacer
/// keep the wire strictly sequential, which is what the remote's rate
/// limiting expects.
pub struct McpClient {
    http: reqwest::Client,
    url: String,
    page_size: u32,
    pacer: Box<dyn CallPacer>,
    session: Mutex<Option<McpSession>>,
}

impl McpClient {
    pub fn new(settings: McpSettings) -> Result<Self, McpError> {
        let pacer = Box::new(IntervalPacer::new(settings.call_interval));
        Self::with_pacer(settings, pacer)
    }

    /// Build a client with an explicit pacer. Tests pass [`NoopPacer`] to
    /// run without wall-clock waits.
    pub fn with_pacer(
        settings: McpSettings,
        pacer: Box<dyn CallPacer>,
    ) -> Result<Self, McpError> {
        let http = reqwest::Client::builder()
            .timeout(settings.request_timeout)
            .build()?;

        Ok(Self {
            http,
            url: settings.url,
            page_size: settings.page_size.min(MAX_PAGE_SIZE),
            pacer,
            session: Mutex::new(None),
        })
    }

    /// Convenience constructor for tests: no pacing delays.
    pub fn unpaced(settings: McpSettings) -> Result<Self, McpError> {
        Self::with_pacer(settings, Box::new(NoopPacer))
    }

    /// Perform the initialize handshake and return a fresh session.
    ///
    /// The session id comes from the `mcp-session-id` response header; the
    /// SSE body is still consumed to surface embedded protocol errors.
    async fn init_session(&self) -> Result<McpSession, McpError> {
        self.pacer.pace().await;

        let response = self
            .http
            .post(&self.url)
            .header(header::ACCEPT, ACCEPT_VALUE)
            .json(&McpRequest::initialize())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(McpError::Transport(status.as_u16()));
        }

        let session_id = response
            .headers()
            .get(SESSION_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
            .ok_or_else(|| {
                McpError::Session("no mcp-session-id header in init response".to_string())
            })?;

        let body = response.text().await?;
        parse_sse_result(&body)?;

        debug!("established MCP session {}", session_id);

        Ok(McpSession {
            session_id,
            next_id: 2,
            prepared: HashSet::new(),
        })
    }

    /// Issue one tool call on the session.
    ///
    /// The request id is taken and incremented before the call goes out, so
    /// a failure mid-flight never reuses an id.
    async fn call_tool(
        &self,
        session: &mut McpSession,
        tool_name: &str,
        arguments: Value,
    ) -> Result<ToolCallResult, McpError> {
        self.pacer.pace().await;

        let id = session.next_id;
        session.next_id += 1;

        let response = self
            .http
            .post(&self.url)
            .header(header::ACCEPT, ACCEPT_VALUE)
            .header(SESSION_ID_HEADER, &session.session_id)
            .json(&McpRequest::tool_call(id, tool_name, arguments))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(McpError::Transport(status.as_u16()));
        }

        let body = response.text().await?;
        let result_value = parse_sse_result(&body)?;
        let result: ToolCallResult = serde_json::from_value(result_value)
            .map_err(|e| McpError::Protocol(format!("malformed tool result: {}", e)))?;

        if result.is_error == Some(true) {
            let text = result.first_text().unwrap_or("unknown MCP tool error");
            return Err(McpError::Tool(text.to_string()));
        }

        Ok(result)
    }

    /// Establish the session if needed and run the preparatory workflow for
    /// the filter's (indicator, frequency) pair unless already done.
    ///
    /// Workflow results are not consumed; the calls exist to satisfy the
    /// remote's session-state requirement before it serves data.
    async fn ensure_ready<'a>(
        &self,
        slot: &'a mut Option<McpSession>,
        filters: &PlfsFilters,
    ) -> Result<&'a mut McpSession, McpError> {
        let session = match slot {
            Some(session) => session,
            None => slot.insert(self.init_session().await?),
        };

        let pair = (
            filters.indicator_code.clone(),
            filters.frequency_code.clone(),
        );
        if !session.prepared.contains(&pair) {
            debug!(
                "running preparatory workflow for indicator {} / frequency {}",
                pair.0, pair.1
            );

            self.call_tool(session, tools::OVERVIEW, serde_json::json!({}))
                .await?;
            self.call_tool(
                session,
                tools::INDICATOR_CODES,
                serde_json::json!({
                    "dataset": DATASET,
                    "frequency_code": filters.frequency_code,
                }),
            )
            .await?;
            self.call_tool(
                session,
                tools::FIELD_METADATA,
                serde_json::json!({
                    "dataset": DATASET,
                    "indicator_code": filters.indicator_code,
                    "frequency_code": filters.frequency_code,
                }),
            )
            .await?;

            session.prepared.insert(pair);
        }

        Ok(session)
    }

    /// Fetch one page of data and decode its envelope.
    async fn fetch_page(
        &self,
        session: &mut McpSession,
        filters: &PlfsFilters,
        page: u32,
    ) -> Result<PlfsDataResponse, McpError> {
        let arguments = filters.to_tool_arguments(self.page_size, page);
        let result = self.call_tool(session, tools::GET_DATA, arguments).await?;

        let data = result
            .extract_data()
            .ok_or_else(|| McpError::Protocol("no data in MCP tool result".to_string()))?;
        let response: PlfsDataResponse = serde_json::from_value(data)
            .map_err(|e| McpError::Protocol(format!("malformed data response: {}", e)))?;

        if response.is_failure() {
            let msg = response.msg.unwrap_or_else(|| "no message".to_string());
            return Err(McpError::Tool(format!("PLFS data fetch failed: {}", msg)));
        }

        Ok(response)
    }

    /// Fetch every page for the filters, concatenating records in page
    /// order. A response without page metadata counts as a single page.
    async fn fetch_pages(
        &self,
        session: &mut McpSession,
        filters: &PlfsFilters,
    ) -> Result<Vec<PlfsRecord>, McpError> {
        let first = self.fetch_page(session, filters, 1).await?;
        let total_pages = first
            .meta_data
            .as_ref()
            .map(|m| m.total_pages)
            .unwrap_or(1)
            .max(1);

        let mut records = first.data;
        for page in 2..=total_pages {
            let next = self.fetch_page(session, filters, page).await?;
            records.extend(next.data);
        }

        Ok(records)
    }
}

#[async_trait]
impl PlfsSource for McpClient {
    async fn fetch_all_records(&self, filters: &PlfsFilters) -> Result<Vec<PlfsRecord>, McpError> {
        let mut slot = self.session.lock().await;

        // Workflow failures propagate immediately; only the data query gets
        // the reset-and-retry treatment.
        let session = self.ensure_ready(&mut slot, filters).await?;
        match self.fetch_pages(session, filters).await {
            Ok(records) => Ok(records),
            Err(err) => {
                warn!("data query failed ({}), resetting session and retrying once", err);
                *slot = None;
                let session = self.ensure_ready(&mut slot, filters).await?;
                self.fetch_pages(session, filters).await
            }
        }
    }
}
