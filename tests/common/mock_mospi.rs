//! Mock MoSPI MCP server.
//!
//! Speaks just enough of the session protocol for the client under test:
//! the initialize handshake with an `mcp-session-id` header, SSE-framed
//! JSON-RPC envelopes, and the four workflow tools. Tests configure canned
//! record pages per indicator and scripted tool failures, and inspect the
//! exact call sequence afterwards.

use axum::body::Body;
use axum::extract::State;
use axum::http::{header::HeaderMap, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

pub const TOOL_OVERVIEW: &str = "1_know_about_mospi_api";
pub const TOOL_INDICATOR_CODES: &str = "2_get_indicator_specific_in_dataset";
pub const TOOL_FIELD_METADATA: &str = "3_get_fields_to_retrieve_data";
pub const TOOL_GET_DATA: &str = "4_get_data";

/// One observed tools/call invocation.
#[derive(Debug, Clone)]
pub struct ObservedCall {
    pub session: String,
    pub tool: String,
    pub indicator: Option<String>,
    pub page: Option<u32>,
}

#[derive(Default)]
struct MockState {
    session_counter: AtomicUsize,
    sessions: Mutex<HashSet<String>>,
    calls: Mutex<Vec<ObservedCall>>,
    /// indicator code -> pages of raw records
    pages: Mutex<HashMap<String, Vec<Vec<Value>>>>,
    /// tool name -> number of upcoming calls to fail
    failures: Mutex<HashMap<String, usize>>,
    /// when false, data responses omit meta_data entirely
    include_meta: AtomicBool,
}

impl MockState {
    fn take_failure(&self, tool: &str) -> bool {
        let mut failures = self.failures.lock().unwrap();
        match failures.get_mut(tool) {
            Some(remaining) if *remaining > 0 => {
                *remaining -= 1;
                true
            }
            _ => false,
        }
    }
}

pub struct MockMospi {
    pub url: String,
    state: Arc<MockState>,
    task: tokio::task::JoinHandle<()>,
}

impl MockMospi {
    pub async fn spawn() -> Self {
        let state = Arc::new(MockState::default());
        state.include_meta.store(true, Ordering::SeqCst);

        let app = Router::new()
            .route("/", post(handle_rpc))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let task = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            url: format!("http://{}/", addr),
            state,
            task,
        }
    }

    /// Serve these records as a single page for the indicator.
    pub fn set_records(&self, indicator: &str, records: Vec<Value>) {
        self.set_pages(indicator, vec![records]);
    }

    /// Serve these record pages, in order, for the indicator.
    pub fn set_pages(&self, indicator: &str, pages: Vec<Vec<Value>>) {
        self.state
            .pages
            .lock()
            .unwrap()
            .insert(indicator.to_string(), pages);
    }

    /// Make the next `count` invocations of `tool` fail with a tool error.
    pub fn fail_next(&self, tool: &str, count: usize) {
        self.state
            .failures
            .lock()
            .unwrap()
            .insert(tool.to_string(), count);
    }

    /// Omit page metadata from data responses.
    pub fn omit_page_meta(&self) {
        self.state.include_meta.store(false, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<ObservedCall> {
        self.state.calls.lock().unwrap().clone()
    }

    pub fn tool_sequence(&self) -> Vec<String> {
        self.calls().into_iter().map(|c| c.tool).collect()
    }

    pub fn data_call_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| c.tool == TOOL_GET_DATA)
            .count()
    }

    pub fn session_count(&self) -> usize {
        self.state.session_counter.load(Ordering::SeqCst)
    }
}

impl Drop for MockMospi {
    fn drop(&mut self) {
        self.task.abort();
    }
}

fn sse_response(session_id: Option<&str>, envelope: &Value) -> Response<Body> {
    let body = format!("event: message\ndata: {}\n\n", envelope);
    let mut builder = Response::builder()
        .status(200)
        .header("content-type", "text/event-stream");
    if let Some(id) = session_id {
        builder = builder.header("mcp-session-id", id);
    }
    builder.body(Body::from(body)).unwrap()
}

async fn handle_rpc(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Json(request): Json<Value>,
) -> Response<Body> {
    let id = request["id"].clone();
    let method = request["method"].as_str().unwrap_or_default();

    match method {
        "initialize" => {
            let n = state.session_counter.fetch_add(1, Ordering::SeqCst) + 1;
            let session_id = format!("mock-session-{}", n);
            state.sessions.lock().unwrap().insert(session_id.clone());

            let envelope = json!({
                "jsonrpc": "2.0",
                "id": id,
                "result": {
                    "protocolVersion": "2024-11-05",
                    "capabilities": {"tools": {}},
                    "serverInfo": {"name": "mock-mospi", "version": "0.0.0"},
                },
            });
            sse_response(Some(&session_id), &envelope)
        }
        "tools/call" => {
            let session = headers
                .get("mcp-session-id")
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_string();

            if !state.sessions.lock().unwrap().contains(&session) {
                let envelope = json!({
                    "jsonrpc": "2.0",
                    "id": id,
                    "error": {"code": -32000, "message": "unknown or expired session"},
                });
                return sse_response(None, &envelope);
            }

            let tool = request["params"]["name"]
                .as_str()
                .unwrap_or_default()
                .to_string();
            let filters = &request["params"]["arguments"]["filters"];
            let indicator = filters["indicator_code"].as_str().map(str::to_string);
            let page = filters["page"].as_str().and_then(|p| p.parse().ok());

            state.calls.lock().unwrap().push(ObservedCall {
                session,
                tool: tool.clone(),
                indicator: indicator.clone(),
                page,
            });

            let result = if state.take_failure(&tool) {
                json!({
                    "content": [{"type": "text", "text": "simulated tool failure"}],
                    "isError": true,
                })
            } else if tool == TOOL_GET_DATA {
                data_result(&state, indicator.as_deref(), page.unwrap_or(1))
            } else {
                json!({"content": [{"type": "text", "text": "ok"}]})
            };

            let envelope = json!({"jsonrpc": "2.0", "id": id, "result": result});
            sse_response(None, &envelope)
        }
        _ => {
            let envelope = json!({
                "jsonrpc": "2.0",
                "id": id,
                "error": {"code": -32601, "message": format!("method not found: {}", method)},
            });
            sse_response(None, &envelope)
        }
    }
}

fn data_result(state: &MockState, indicator: Option<&str>, page: u32) -> Value {
    let pages = state.pages.lock().unwrap();
    let configured = indicator
        .and_then(|i| pages.get(i))
        .cloned()
        .unwrap_or_default();

    let total_pages = configured.len().max(1);
    let records = configured
        .get(page.saturating_sub(1) as usize)
        .cloned()
        .unwrap_or_default();
    let total_records: usize = configured.iter().map(|p| p.len()).sum();

    let mut payload = json!({
        "data": records,
        "msg": "success",
        "statusCode": true,
    });
    if state.include_meta.load(Ordering::SeqCst) {
        payload["meta_data"] = json!({
            "page": page,
            "totalPages": total_pages,
            "totalRecords": total_records,
            "recordPerPage": 500,
        });
    }

    json!({"content": [], "structuredContent": payload})
}
