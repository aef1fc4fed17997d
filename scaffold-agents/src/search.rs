use scaffold_core::{AgentDefinition, ModelRef, Result};
use scaffold_tool::GoogleSearchTool;
use std::sync::Arc;

pub const APP_NAME: &str = "tool_agent";

pub fn agent() -> Result<AgentDefinition> {
    AgentDefinition::builder("tool_agent")
        .model(ModelRef::gemini("gemini-2.0-flash"))
        .description("Tool agent")
        .instruction(
            "You are a helpful agent who can use the following tools:\n\
             - google search",
        )
        .tool(Arc::new(GoogleSearchTool::new()))
        .build()
}
