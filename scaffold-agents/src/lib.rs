//! # scaffold-agents
//!
//! Toy tool agents served by the scaffolds. Each module defines one app:
//!
//! | App | Agent | Tools |
//! |---|---|---|
//! | `dad_joke_agent` | `dad_joke_agent` | `get_dad_joke` |
//! | `tool_agent` | `tool_agent` | `google_search` (model-side) |
//! | `movie-tool-agent` | `movie_recommender_agent` | `search_movies`, `recommend_similar` |
//! | `podcast_transcript_agent` | `podcast_transcript_agent` | sub-agents only |

pub mod dad_joke;
pub mod movies;
pub mod podcast;
pub mod search;

use scaffold_core::{AgentRegistry, Result};
use serde::Serialize;
use std::sync::Arc;

/// Envelope returned by the toy tools, mirroring what the model is told to
/// expect: `{"status": "success", "results": ...}` or
/// `{"status": "error", "error_message": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ToolResponse<T> {
    Success { results: T },
    Error { error_message: String },
}

impl<T: Serialize> ToolResponse<T> {
    pub fn from_result<E: std::fmt::Display>(result: std::result::Result<T, E>) -> Self {
        match result {
            Ok(results) => Self::Success { results },
            Err(e) => Self::Error { error_message: e.to_string() },
        }
    }

    pub fn into_value(self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Registry holding every toy app under its directory name.
pub fn builtin_registry() -> Result<AgentRegistry> {
    let mut registry = AgentRegistry::new();
    registry.register(dad_joke::APP_NAME, Arc::new(dad_joke::agent()?))?;
    registry.register(search::APP_NAME, Arc::new(search::agent()?))?;
    registry.register(movies::APP_NAME, Arc::new(movies::agent()?))?;
    registry.register(podcast::APP_NAME, Arc::new(podcast::agent()?))?;
    Ok(registry)
}
