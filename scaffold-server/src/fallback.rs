//! Minimal service used when the agent framework is missing or failed to
//! build its own app.

use crate::{Service, config::ServiceConfig, layers};
use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;

/// Number of prompt characters echoed back by the placeholder `/run`.
pub const PROMPT_ECHO_LIMIT: usize = 200;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunRequest {
    #[serde(alias = "input")]
    pub prompt: String,
    #[serde(default)]
    pub metadata: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub adk: bool,
}

impl HealthStatus {
    pub fn ok(framework_available: bool) -> Self {
        Self { status: "ok".to_string(), adk: framework_available }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunResponse {
    pub status: &'static str,
    pub prompt: String,
    pub note: &'static str,
}

impl RunResponse {
    pub fn placeholder(req: &RunRequest, note: &'static str) -> Self {
        Self { status: "ok", prompt: req.prompt.chars().take(PROMPT_ECHO_LIMIT).collect(), note }
    }
}

/// How the fallback `/run` route answers a valid request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunMode {
    /// The framework is missing: 501 with a remediation message.
    Unavailable { remediation: String },
    /// The framework produced an error while building its app: 500 with the cause.
    Failed { cause: String },
    /// No agent is wired to the route yet: echo the prompt with an `ok` status.
    Placeholder,
}

impl RunMode {
    fn label(&self) -> &'static str {
        match self {
            Self::Unavailable { .. } => "unavailable",
            Self::Failed { .. } => "failed",
            Self::Placeholder => "placeholder",
        }
    }
}

#[derive(Clone)]
struct FallbackState {
    app_name: Arc<str>,
    framework_available: bool,
    run_mode: Arc<RunMode>,
}

pub(crate) type ApiError = (StatusCode, Json<ErrorDetail>);

pub(crate) fn api_error(status: StatusCode, detail: impl Into<String>) -> ApiError {
    (status, Json(ErrorDetail { detail: detail.into() }))
}

/// Structural rejection of a `/run` payload, before any availability check.
pub(crate) fn validation_error(rejection: JsonRejection) -> ApiError {
    api_error(rejection.status(), rejection.body_text())
}

/// Build the fallback service: `GET /health` and `POST /run` only.
pub fn fallback_service(config: &ServiceConfig, framework_available: bool, run_mode: RunMode) -> Service {
    let state = FallbackState {
        app_name: Arc::from(config.app_name.as_str()),
        framework_available,
        run_mode: Arc::new(run_mode),
    };

    let router = Router::new()
        .route("/health", get(health))
        .route("/run", post(run))
        .with_state(state);

    Service::new(
        config.app_name.clone(),
        layers::apply(router, &config.allow_origins, &config.security),
    )
}

async fn health(State(state): State<FallbackState>) -> Json<HealthStatus> {
    Json(HealthStatus::ok(state.framework_available))
}

async fn run(
    State(state): State<FallbackState>,
    payload: Result<Json<RunRequest>, JsonRejection>,
) -> Result<Json<RunResponse>, ApiError> {
    let Json(req) = payload.map_err(validation_error)?;

    let span = scaffold_telemetry::run_request_span(&state.app_name, state.run_mode.label());
    span.in_scope(|| match state.run_mode.as_ref() {
        RunMode::Unavailable { remediation } => {
            tracing::debug!("rejecting /run: agent framework unavailable");
            Err(api_error(StatusCode::NOT_IMPLEMENTED, remediation.clone()))
        }
        RunMode::Failed { cause } => {
            tracing::error!(%cause, "rejecting /run: agent app failed to build");
            Err(api_error(StatusCode::INTERNAL_SERVER_ERROR, cause.clone()))
        }
        RunMode::Placeholder => {
            tracing::info!(
                prompt_chars = req.prompt.chars().count(),
                metadata_keys = req.metadata.as_ref().map_or(0, Map::len),
                "placeholder /run invoked"
            );
            Ok(Json(RunResponse::placeholder(&req, "no agent is wired to this route yet")))
        }
    })
}
