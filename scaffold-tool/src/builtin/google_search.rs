use async_trait::async_trait;
use scaffold_core::{Result, ScaffoldError, Tool, ToolContext};
use serde_json::{Value, json};
use std::sync::Arc;

/// Search grounding that Gemini runs on its side of the request. Agents list
/// it so the model enables grounding; a local call means the request was
/// routed to the wrong place.
#[derive(Debug, Default, Clone, Copy)]
pub struct GoogleSearchTool;

impl GoogleSearchTool {
    pub const NAME: &'static str = "google_search";

    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Tool for GoogleSearchTool {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        "Grounds the answer in Google Search results (run by Gemini)."
    }

    fn is_builtin(&self) -> bool {
        true
    }

    fn parameters_schema(&self) -> Option<Value> {
        Some(json!({
            "type": "object",
            "properties": { "query": { "type": "string" } },
            "required": ["query"]
        }))
    }

    async fn execute(&self, ctx: Arc<dyn ToolContext>, _args: Value) -> Result<Value> {
        Err(ScaffoldError::Tool(format!(
            "{} runs inside the Gemini model and cannot be called locally (agent '{}')",
            Self::NAME,
            ctx.agent_name()
        )))
    }
}
