use crate::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &str;
    fn description(&self) -> &str;

    /// Tools handled inside the model (e.g. grounding search) are declared
    /// to the model but never executed locally.
    fn is_builtin(&self) -> bool {
        false
    }

    fn parameters_schema(&self) -> Option<Value> {
        None
    }

    async fn execute(&self, ctx: Arc<dyn ToolContext>, args: Value) -> Result<Value>;
}

pub trait ToolContext: Send + Sync {
    fn invocation_id(&self) -> &str;
    fn agent_name(&self) -> &str;
    fn function_call_id(&self) -> &str;
}

/// Context for a single tool call made outside a model turn, e.g. from the
/// HTTP tool route or the command line.
#[derive(Debug, Clone)]
pub struct InvocationToolContext {
    invocation_id: String,
    agent_name: String,
    function_call_id: String,
}

impl InvocationToolContext {
    pub fn new(agent_name: impl Into<String>) -> Self {
        Self {
            invocation_id: uuid::Uuid::new_v4().to_string(),
            agent_name: agent_name.into(),
            function_call_id: uuid::Uuid::new_v4().to_string(),
        }
    }
}

impl ToolContext for InvocationToolContext {
    fn invocation_id(&self) -> &str {
        &self.invocation_id
    }

    fn agent_name(&self) -> &str {
        &self.agent_name
    }

    fn function_call_id(&self) -> &str {
        &self.function_call_id
    }
}
