use rand::Rng;
use rand::seq::IndexedRandom;
use scaffold_core::{AgentDefinition, ModelRef, Result};
use scaffold_tool::FunctionTool;
use serde_json::json;
use std::sync::Arc;

pub const APP_NAME: &str = "dad_joke_agent";

/// OpenRouter model routed through LiteLLM. Other working choices:
/// `openrouter/openai/gpt-4.1`.
pub const MODEL: &str = "openrouter/anthropic/claude-3-5-sonnet";
pub const API_KEY_ENV: &str = "OPEN_ROUTER_API_KEY";

pub const JOKES: [&str; 3] = [
    "Why don't skeletons fight each other? They don't have the guts.",
    "I used to play piano by ear, but now I use my hands.",
    "Why did the scarecrow win an award? Because he was outstanding in his field.",
];

pub fn pick_joke<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    JOKES.choose(rng).copied().unwrap_or(JOKES[0])
}

pub fn get_dad_joke_tool() -> FunctionTool {
    FunctionTool::new("get_dad_joke", "Returns a random dad joke.", |_ctx, _args| async {
        Ok(json!(pick_joke(&mut rand::rng())))
    })
}

pub fn agent() -> Result<AgentDefinition> {
    AgentDefinition::builder("dad_joke_agent")
        .model(ModelRef::lite_llm(MODEL, API_KEY_ENV))
        .description("Dad joke agent")
        .instruction(
            "You are a helpful assistant that can tell dad jokes.\n\
             Only use the tool `get_dad_joke` to tell jokes.",
        )
        .tool(Arc::new(get_dad_joke_tool()))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use scaffold_core::{InvocationToolContext, Tool};

    #[test]
    fn test_pick_joke_is_from_list() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            assert!(JOKES.contains(&pick_joke(&mut rng)));
        }
    }

    #[tokio::test]
    async fn test_tool_returns_a_joke() {
        let tool = get_dad_joke_tool();
        let ctx = Arc::new(InvocationToolContext::new("dad_joke_agent"));
        let joke = tool.execute(ctx, json!({})).await.unwrap();
        assert!(JOKES.contains(&joke.as_str().unwrap()));
    }

    #[test]
    fn test_agent_uses_routed_model() {
        let agent = agent().unwrap();
        assert_eq!(agent.model().model_id(), MODEL);
        assert_eq!(agent.model().api_key_env(), Some(API_KEY_ENV));
        assert_eq!(agent.tools().len(), 1);
    }
}
