use crate::{AgentDefinition, Result, ScaffoldError, Tool};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Agent definitions keyed by app name.
///
/// App names follow the agents-directory convention (one directory per app),
/// so they may contain dashes even though agent names may not.
#[derive(Debug, Clone, Default)]
pub struct AgentRegistry {
    apps: BTreeMap<String, Arc<AgentDefinition>>,
}

impl AgentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `agent` under `app_name`. Returns an error if the app name
    /// is already taken.
    pub fn register(&mut self, app_name: impl Into<String>, agent: Arc<AgentDefinition>) -> Result<()> {
        let app_name = app_name.into();
        if app_name.trim().is_empty() {
            return Err(ScaffoldError::Config("App name must not be empty".to_string()));
        }
        if self.apps.contains_key(&app_name) {
            return Err(ScaffoldError::Config(format!("Duplicate app name: {app_name}")));
        }
        self.apps.insert(app_name, agent);
        Ok(())
    }

    pub fn load_agent(&self, app_name: &str) -> Result<Arc<AgentDefinition>> {
        self.apps.get(app_name).cloned().ok_or_else(|| {
            ScaffoldError::NotFound(format!(
                "App '{}' not found. Available apps: {:?}",
                app_name,
                self.list_apps()
            ))
        })
    }

    /// Resolve a tool of the root agent registered under `app_name`.
    pub fn find_tool(&self, app_name: &str, tool_name: &str) -> Result<Arc<dyn Tool>> {
        let agent = self.load_agent(app_name)?;
        agent.find_tool(tool_name).ok_or_else(|| {
            ScaffoldError::NotFound(format!(
                "Tool '{}' not found on agent '{}'",
                tool_name,
                agent.name()
            ))
        })
    }

    /// App names in sorted order.
    pub fn list_apps(&self) -> Vec<String> {
        self.apps.keys().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<AgentDefinition>)> {
        self.apps.iter().map(|(name, agent)| (name.as_str(), agent))
    }

    /// Keep only the apps for which `keep` returns true.
    pub fn retain(mut self, mut keep: impl FnMut(&str) -> bool) -> Self {
        self.apps.retain(|name, _| keep(name));
        self
    }

    pub fn len(&self) -> usize {
        self.apps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ModelRef;

    fn agent(name: &str) -> Arc<AgentDefinition> {
        Arc::new(
            AgentDefinition::builder(name)
                .model(ModelRef::gemini("gemini-2.0-flash"))
                .build()
                .unwrap(),
        )
    }

    #[test]
    fn test_register_and_load() {
        let mut registry = AgentRegistry::new();
        registry.register("movie-tool-agent", agent("movie_recommender_agent")).unwrap();
        registry.register("tool_agent", agent("tool_agent")).unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.list_apps(), vec!["movie-tool-agent", "tool_agent"]);
        assert_eq!(
            registry.load_agent("movie-tool-agent").unwrap().name(),
            "movie_recommender_agent"
        );
    }

    #[test]
    fn test_duplicate_app_rejected() {
        let mut registry = AgentRegistry::new();
        registry.register("app", agent("a")).unwrap();
        let err = registry.register("app", agent("b")).unwrap_err();
        assert!(matches!(err, ScaffoldError::Config(_)));
        assert!(registry.register("  ", agent("c")).is_err());
    }

    #[test]
    fn test_missing_app_and_tool() {
        let mut registry = AgentRegistry::new();
        registry.register("app", agent("a")).unwrap();

        let err = registry.load_agent("other").unwrap_err();
        assert!(matches!(err, ScaffoldError::NotFound(_)));
        assert!(err.to_string().contains("\"app\""));

        let err = registry.find_tool("app", "nope").err().unwrap();
        assert!(err.to_string().contains("Tool 'nope' not found on agent 'a'"));
    }

    #[test]
    fn test_retain() {
        let mut registry = AgentRegistry::new();
        registry.register("keep", agent("a")).unwrap();
        registry.register("drop", agent("b")).unwrap();

        let registry = registry.retain(|name| name == "keep");
        assert_eq!(registry.list_apps(), vec!["keep"]);
        assert!(!registry.is_empty());
    }
}
