//! `agents` and `call`: work with the built-in agents without a server.

use anyhow::Result;
use serde_json::Value;
use std::io::Write;

#[cfg(feature = "agent-runtime")]
pub fn list_agents(out: &mut impl Write) -> Result<()> {
    let registry = scaffold_agents::builtin_registry()?;
    for (app_name, agent) in registry.iter() {
        writeln!(out, "{app_name} ({}, {})", agent.name(), agent.model().model_id())?;
        for tool in agent.tools() {
            writeln!(out, "  - {}: {}", tool.name(), tool.description())?;
        }
        for sub_agent in agent.sub_agents() {
            writeln!(out, "  > {}: {}", sub_agent.name(), sub_agent.description())?;
        }
    }
    Ok(())
}

/// Execute `tool` of `app` with `args` (a JSON document, empty for none).
#[cfg(feature = "agent-runtime")]
pub async fn call_tool(app: &str, tool: &str, args: Option<&str>) -> Result<Value> {
    use anyhow::Context;
    use scaffold_core::{InvocationToolContext, ToolContext};
    use std::sync::Arc;

    let args: Value = match args {
        Some(raw) if !raw.trim().is_empty() => {
            serde_json::from_str(raw).context("tool arguments must be a JSON document")?
        }
        _ => Value::Null,
    };

    let registry = scaffold_agents::builtin_registry()?;
    let agent = registry.load_agent(app)?;
    let tool = registry.find_tool(app, tool)?;

    let ctx = Arc::new(InvocationToolContext::new(agent.name()));
    tracing::debug!(invocation_id = ctx.invocation_id(), tool = tool.name(), "calling tool");
    Ok(tool.execute(ctx, args).await?)
}

#[cfg(not(feature = "agent-runtime"))]
pub fn list_agents(_out: &mut impl Write) -> Result<()> {
    anyhow::bail!(not_built())
}

#[cfg(not(feature = "agent-runtime"))]
pub async fn call_tool(_app: &str, _tool: &str, _args: Option<&str>) -> Result<Value> {
    anyhow::bail!(not_built())
}

#[cfg(not(feature = "agent-runtime"))]
fn not_built() -> String {
    format!(
        "{} not installed; rebuild with `--features agent-runtime`",
        crate::serve::FRAMEWORK_PACKAGE
    )
}
