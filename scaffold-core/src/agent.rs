use crate::{ModelRef, Result, ScaffoldError, Tool};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashSet;
use std::sync::Arc;

/// Static configuration of an LLM agent: everything the agent framework
/// needs to load it, nothing about how it runs.
pub struct AgentDefinition {
    name: String,
    description: String,
    model: ModelRef,
    instruction: String,
    tools: Vec<Arc<dyn Tool>>,
    output_schema: Option<Value>,
    output_key: Option<String>,
    sub_agents: Vec<Arc<AgentDefinition>>,
}

impl std::fmt::Debug for AgentDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AgentDefinition")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("model", &self.model.model_id())
            .field("tools_count", &self.tools.len())
            .field("sub_agents_count", &self.sub_agents.len())
            .finish()
    }
}

impl AgentDefinition {
    pub fn builder(name: impl Into<String>) -> AgentDefinitionBuilder {
        AgentDefinitionBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn model(&self) -> &ModelRef {
        &self.model
    }

    pub fn instruction(&self) -> &str {
        &self.instruction
    }

    pub fn tools(&self) -> &[Arc<dyn Tool>] {
        &self.tools
    }

    pub fn output_schema(&self) -> Option<&Value> {
        self.output_schema.as_ref()
    }

    pub fn output_key(&self) -> Option<&str> {
        self.output_key.as_deref()
    }

    pub fn sub_agents(&self) -> &[Arc<AgentDefinition>] {
        &self.sub_agents
    }

    pub fn find_tool(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.iter().find(|tool| tool.name() == name).cloned()
    }

    /// Public summary of the agent, suitable for listing endpoints.
    pub fn card(&self) -> AgentCard {
        AgentCard {
            name: self.name.clone(),
            description: self.description.clone(),
            model: self.model.clone(),
            tools: self
                .tools
                .iter()
                .map(|tool| ToolCard {
                    name: tool.name().to_string(),
                    description: tool.description().to_string(),
                    builtin: tool.is_builtin(),
                    parameters: tool.parameters_schema(),
                })
                .collect(),
            output_schema: self.output_schema.clone(),
            output_key: self.output_key.clone(),
            sub_agents: self.sub_agents.iter().map(|agent| agent.card()).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AgentCard {
    pub name: String,
    pub description: String,
    pub model: ModelRef,
    pub tools: Vec<ToolCard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_schema: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_key: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sub_agents: Vec<AgentCard>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolCard {
    pub name: String,
    pub description: String,
    pub builtin: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Value>,
}

pub struct AgentDefinitionBuilder {
    name: String,
    description: Option<String>,
    model: Option<ModelRef>,
    instruction: Option<String>,
    tools: Vec<Arc<dyn Tool>>,
    output_schema: Option<Value>,
    output_key: Option<String>,
    sub_agents: Vec<Arc<AgentDefinition>>,
}

impl AgentDefinitionBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            model: None,
            instruction: None,
            tools: Vec::new(),
            output_schema: None,
            output_key: None,
            sub_agents: Vec::new(),
        }
    }

    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    pub fn model(mut self, model: ModelRef) -> Self {
        self.model = Some(model);
        self
    }

    pub fn instruction(mut self, instruction: impl Into<String>) -> Self {
        self.instruction = Some(instruction.into());
        self
    }

    pub fn output_schema(mut self, schema: Value) -> Self {
        self.output_schema = Some(schema);
        self
    }

    pub fn output_key(mut self, key: impl Into<String>) -> Self {
        self.output_key = Some(key.into());
        self
    }

    pub fn tool(mut self, tool: Arc<dyn Tool>) -> Self {
        self.tools.push(tool);
        self
    }

    pub fn sub_agent(mut self, agent: Arc<AgentDefinition>) -> Self {
        self.sub_agents.push(agent);
        self
    }

    pub fn build(self) -> Result<AgentDefinition> {
        validate_agent_name(&self.name)?;

        let model = self
            .model
            .ok_or_else(|| ScaffoldError::Agent(format!("Agent '{}': model is required", self.name)))?;

        let mut seen = HashSet::new();
        for tool in &self.tools {
            if tool.is_builtin() && !matches!(model, ModelRef::Gemini { .. }) {
                return Err(ScaffoldError::Agent(format!(
                    "Agent '{}': built-in tool '{}' needs a Gemini model, got '{}'",
                    self.name,
                    tool.name(),
                    model.model_id()
                )));
            }
            if !seen.insert(tool.name().to_string()) {
                return Err(ScaffoldError::Agent(format!(
                    "Agent '{}': duplicate tool name '{}'",
                    self.name,
                    tool.name()
                )));
            }
        }

        let mut seen = HashSet::new();
        for agent in &self.sub_agents {
            if !seen.insert(agent.name().to_string()) {
                return Err(ScaffoldError::Agent(format!(
                    "Agent '{}': duplicate sub-agent '{}'",
                    self.name,
                    agent.name()
                )));
            }
        }

        Ok(AgentDefinition {
            name: self.name,
            description: self.description.unwrap_or_default(),
            model,
            instruction: self.instruction.unwrap_or_default(),
            tools: self.tools,
            output_schema: self.output_schema,
            output_key: self.output_key,
            sub_agents: self.sub_agents,
        })
    }
}

/// Agent names must be identifiers: ASCII letters, digits and underscores,
/// not starting with a digit.
fn validate_agent_name(name: &str) -> Result<()> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    };

    if valid {
        Ok(())
    } else {
        Err(ScaffoldError::Agent(format!(
            "Invalid agent name '{name}': use letters, digits and underscores only"
        )))
    }
}
