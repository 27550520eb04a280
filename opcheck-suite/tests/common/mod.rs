//! In-process stand-in for the operation service
//!
//! Each test spawns its own server on 127.0.0.1:0. Operations report
//! PENDING for the first `settle_after` status reads, then the configured
//! outcome.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use opcheck_core::dto::operation::CreateOperation;
use serde_json::json;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Complete,
    Fail,
    /// Stay PENDING forever
    Never,
}

#[derive(Debug, Clone, Copy)]
pub struct StubConfig {
    pub settle_after: u32,
    pub outcome: Outcome,
    /// Status code returned by the create endpoint
    pub create_status: StatusCode,
}

impl Default for StubConfig {
    fn default() -> Self {
        Self {
            settle_after: 1,
            outcome: Outcome::Complete,
            create_status: StatusCode::OK,
        }
    }
}

#[derive(Debug, Default)]
struct Task {
    reads: u32,
}

pub struct StubState {
    config: StubConfig,
    tasks: Mutex<HashMap<String, Task>>,
    pub requests: Mutex<Vec<CreateOperation>>,
    pub auth_headers: Mutex<Vec<Option<String>>>,
}

impl StubState {
    fn new(config: StubConfig) -> Self {
        Self {
            config,
            tasks: Mutex::new(HashMap::new()),
            requests: Mutex::new(Vec::new()),
            auth_headers: Mutex::new(Vec::new()),
        }
    }

    fn record_auth(&self, headers: &HeaderMap) {
        let value = headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        self.auth_headers.lock().unwrap().push(value);
    }

    /// Number of status reads served for `task_id`
    pub fn reads(&self, task_id: &str) -> u32 {
        self.tasks
            .lock()
            .unwrap()
            .get(task_id)
            .map(|t| t.reads)
            .unwrap_or(0)
    }
}

pub struct StubServer {
    pub base_url: String,
    pub state: Arc<StubState>,
}

pub async fn spawn_stub(config: StubConfig) -> StubServer {
    let state = Arc::new(StubState::new(config));

    let app = Router::new()
        .route("/api/data", post(create_operation))
        .route("/api/result/{task_id}", get(get_result))
        .with_state(Arc::clone(&state));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    StubServer {
        base_url: format!("http://{}", addr),
        state,
    }
}

/// A URL nothing is listening on
pub async fn closed_port_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

async fn create_operation(
    State(state): State<Arc<StubState>>,
    headers: HeaderMap,
    Json(req): Json<CreateOperation>,
) -> Response {
    state.record_auth(&headers);
    state.requests.lock().unwrap().push(req);

    let config = state.config;
    if config.create_status != StatusCode::OK {
        return (
            config.create_status,
            Json(json!({ "error": "create rejected" })),
        )
            .into_response();
    }

    let task_id = uuid::Uuid::new_v4().to_string();
    state
        .tasks
        .lock()
        .unwrap()
        .insert(task_id.clone(), Task::default());

    Json(json!({ "success": true, "task_id": task_id })).into_response()
}

async fn get_result(
    State(state): State<Arc<StubState>>,
    headers: HeaderMap,
    Path(task_id): Path<String>,
) -> Response {
    state.record_auth(&headers);
    let config = state.config;

    let mut tasks = state.tasks.lock().unwrap();
    let Some(task) = tasks.get_mut(&task_id) else {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": format!("Task {} not found", task_id) })),
        )
            .into_response();
    };
    task.reads += 1;

    let body = if task.reads <= config.settle_after || config.outcome == Outcome::Never {
        json!({ "status": "PENDING", "task_id": task_id, "result": null, "error": null })
    } else if config.outcome == Outcome::Complete {
        json!({ "status": "COMPLETED", "task_id": task_id, "result": { "filed": true }, "error": null })
    } else {
        json!({ "status": "FAILED", "task_id": task_id, "result": null, "error": "portal rejected filing" })
    };

    Json(body).into_response()
}
