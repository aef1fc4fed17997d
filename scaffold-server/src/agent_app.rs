//! App factory that serves the tools of in-process agent definitions.

use crate::{
    Service,
    capability::{AppFactory, FactoryError, FactoryOptions},
    config::SecurityConfig,
    fallback::{ApiError, HealthStatus, RunRequest, RunResponse, api_error, validation_error},
    layers,
};
use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::Html,
    routing::{get, post},
};
use scaffold_core::{AgentCard, AgentRegistry, InvocationToolContext, ScaffoldError};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashSet;
use std::path::Path as FsPath;
use std::sync::Arc;

pub const FRAMEWORK: &str = "scaffold-agents";

pub struct AgentAppFactory {
    registry: AgentRegistry,
    security: SecurityConfig,
}

impl AgentAppFactory {
    pub fn new(registry: AgentRegistry) -> Self {
        Self { registry, security: SecurityConfig::default() }
    }

    pub fn with_security(mut self, security: SecurityConfig) -> Self {
        self.security = security;
        self
    }

    /// Apps to serve: when the agents directory exists, only apps with a
    /// sub-directory of the same name.
    fn select_apps(&self, agents_dir: &FsPath) -> Result<AgentRegistry, FactoryError> {
        if !agents_dir.is_dir() {
            tracing::warn!(
                agents_dir = %agents_dir.display(),
                "agents directory not found, serving every registered app"
            );
            return Ok(self.registry.clone());
        }

        let read_err =
            |source: std::io::Error| FactoryError::AgentsDir { path: agents_dir.to_path_buf(), source };
        let mut present = HashSet::new();
        for entry in std::fs::read_dir(agents_dir).map_err(read_err)? {
            let entry = entry.map_err(read_err)?;
            if entry.file_type().map_err(read_err)?.is_dir() {
                present.insert(entry.file_name().to_string_lossy().into_owned());
            }
        }

        let selected = self.registry.clone().retain(|app| present.contains(app));
        if selected.is_empty() {
            tracing::warn!(agents_dir = %agents_dir.display(), "no registered app found in agents directory");
        }
        Ok(selected)
    }
}

impl AppFactory for AgentAppFactory {
    fn framework(&self) -> &str {
        FRAMEWORK
    }

    fn create_app(&self, options: FactoryOptions) -> Result<Service, FactoryError> {
        let registry = self.select_apps(&options.agents_dir)?;
        tracing::info!(apps = ?registry.list_apps(), web_ui = options.enable_web_ui, "serving agent apps");

        let state = AgentAppState { registry: Arc::new(registry) };
        let mut router = Router::new()
            .route("/health", get(health))
            .route("/list-apps", get(list_apps))
            .route("/apps/{app_name}", get(get_app))
            .route("/apps/{app_name}/tools/{tool_name}", post(call_tool))
            .route("/run", post(run));
        if options.enable_web_ui {
            router = router.route("/", get(index));
        }

        let router = layers::apply(router.with_state(state), &options.allow_origins, &self.security);
        Ok(Service::new(FRAMEWORK, router))
    }
}

#[derive(Clone)]
struct AgentAppState {
    registry: Arc<AgentRegistry>,
}

#[derive(Debug, Serialize)]
pub struct ToolCallResponse {
    pub app_name: String,
    pub tool: String,
    pub invocation_id: String,
    pub result: Value,
}

fn scaffold_error(err: ScaffoldError) -> ApiError {
    let status = match &err {
        ScaffoldError::NotFound(_) => StatusCode::NOT_FOUND,
        ScaffoldError::Tool(_) | ScaffoldError::Serde(_) => StatusCode::UNPROCESSABLE_ENTITY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    api_error(status, err.to_string())
}

async fn health() -> Json<HealthStatus> {
    Json(HealthStatus::ok(true))
}

async fn list_apps(State(state): State<AgentAppState>) -> Json<Vec<String>> {
    Json(state.registry.list_apps())
}

async fn get_app(
    State(state): State<AgentAppState>,
    Path(app_name): Path<String>,
) -> Result<Json<AgentCard>, ApiError> {
    let agent = state.registry.load_agent(&app_name).map_err(scaffold_error)?;
    Ok(Json(agent.card()))
}

async fn call_tool(
    State(state): State<AgentAppState>,
    Path((app_name, tool_name)): Path<(String, String)>,
    body: Bytes,
) -> Result<Json<ToolCallResponse>, ApiError> {
    let args: Value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body)
            .map_err(|e| api_error(StatusCode::BAD_REQUEST, format!("invalid JSON arguments: {e}")))?
    };

    let agent = state.registry.load_agent(&app_name).map_err(scaffold_error)?;
    let tool = state.registry.find_tool(&app_name, &tool_name).map_err(scaffold_error)?;

    let ctx = Arc::new(InvocationToolContext::new(agent.name()));
    let invocation_id = scaffold_core::ToolContext::invocation_id(ctx.as_ref()).to_string();
    let result = tool.execute(ctx, args).await.map_err(scaffold_error)?;

    Ok(Json(ToolCallResponse { app_name, tool: tool_name, invocation_id, result }))
}

async fn run(payload: Result<Json<RunRequest>, JsonRejection>) -> Result<Json<RunResponse>, ApiError> {
    let Json(req) = payload.map_err(validation_error)?;
    Ok(Json(RunResponse::placeholder(&req, "agents are served under /apps; call their tools there")))
}

async fn index(State(state): State<AgentAppState>) -> Html<String> {
    let mut items = String::new();
    for (app_name, agent) in state.registry.iter() {
        let tools: Vec<&str> = agent.tools().iter().map(|t| t.name()).collect();
        items.push_str(&format!(
            "<li><a href=\"/apps/{app}\">{app}</a> &mdash; {desc} <code>[{tools}]</code></li>\n",
            app = escape_html(app_name),
            desc = escape_html(agent.description()),
            tools = escape_html(&tools.join(", ")),
        ));
    }
    Html(format!(
        "<!doctype html>\n<html><head><title>{FRAMEWORK}</title></head>\n<body><h1>Agent apps</h1>\n<ul>\n{items}</ul></body></html>\n"
    ))
}

fn escape_html(raw: &str) -> String {
    raw.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;").replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<a & \"b\">"), "&lt;a &amp; &quot;b&quot;&gt;");
    }

    #[test]
    fn test_scaffold_error_statuses() {
        assert_eq!(scaffold_error(ScaffoldError::NotFound("x".into())).0, StatusCode::NOT_FOUND);
        assert_eq!(
            scaffold_error(ScaffoldError::Tool("x".into())).0,
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            scaffold_error(ScaffoldError::Config("x".into())).0,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
