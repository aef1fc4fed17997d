use scaffold_core::{Result, ScaffoldError, Tool, ToolContext};
use async_trait::async_trait;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use tracing::Instrument;

type AsyncHandler = Box<
    dyn Fn(Arc<dyn ToolContext>, Value) -> Pin<Box<dyn Future<Output = Result<Value>> + Send>>
        + Send
        + Sync,
>;

pub struct FunctionTool {
    name: String,
    description: String,
    handler: AsyncHandler,
    parameters_schema: Option<Value>,
}

impl FunctionTool {
    pub fn new<F, Fut>(name: impl Into<String>, description: impl Into<String>, handler: F) -> Self
    where
        F: Fn(Arc<dyn ToolContext>, Value) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Value>> + Send + 'static,
    {
        Self {
            name: name.into(),
            description: description.into(),
            handler: Box::new(move |ctx, args| Box::pin(handler(ctx, args))),
            parameters_schema: None,
        }
    }

    pub fn with_parameters_schema<T: JsonSchema>(mut self) -> Self {
        self.parameters_schema = schema_value::<T>();
        self
    }
}

fn schema_value<T: JsonSchema>() -> Option<Value> {
    serde_json::to_value(schemars::schema_for!(T)).ok()
}

/// Deserialize tool arguments into a typed struct, treating a JSON `null`
/// (no arguments at all) as an empty object.
pub fn parse_args<T: DeserializeOwned>(tool_name: &str, args: Value) -> Result<T> {
    let args = if args.is_null() { Value::Object(Default::default()) } else { args };
    serde_json::from_value(args)
        .map_err(|e| ScaffoldError::Tool(format!("{tool_name}: invalid arguments: {e}")))
}

#[async_trait]
impl Tool for FunctionTool {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn parameters_schema(&self) -> Option<Value> {
        self.parameters_schema.clone()
    }

    async fn execute(&self, ctx: Arc<dyn ToolContext>, args: Value) -> Result<Value> {
        let span = scaffold_telemetry::tool_execute_span(&self.name);
        let result = (self.handler)(ctx, args).instrument(span).await;
        if let Err(e) = &result {
            tracing::debug!(tool.name = %self.name, error = %e, "tool returned an error");
        }
        result
    }
}
