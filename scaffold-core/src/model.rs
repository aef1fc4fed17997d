use serde::Serialize;

/// Reference to the model backing an agent.
///
/// Agents only carry the reference; invoking the model is the job of the
/// agent framework that loads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "provider", rename_all = "snake_case")]
pub enum ModelRef {
    /// A Gemini model addressed by its identifier, e.g. `gemini-2.0-flash`.
    Gemini { model: String },
    /// A model routed through LiteLLM, e.g. `openrouter/anthropic/claude-3-5-sonnet`.
    /// The API key is read from `api_key_env` when the agent is loaded.
    LiteLlm { model: String, api_key_env: String },
}

impl ModelRef {
    pub fn gemini(model: impl Into<String>) -> Self {
        Self::Gemini { model: model.into() }
    }

    pub fn lite_llm(model: impl Into<String>, api_key_env: impl Into<String>) -> Self {
        Self::LiteLlm { model: model.into(), api_key_env: api_key_env.into() }
    }

    pub fn model_id(&self) -> &str {
        match self {
            Self::Gemini { model } | Self::LiteLlm { model, .. } => model,
        }
    }

    /// Name of the environment variable holding the API key, if the
    /// provider needs one passed explicitly.
    pub fn api_key_env(&self) -> Option<&str> {
        match self {
            Self::Gemini { .. } => None,
            Self::LiteLlm { api_key_env, .. } => Some(api_key_env),
        }
    }
}
