//! Podcast transcript writer: a root agent that extracts topics from source
//! material, then writes a two-host episode transcript from them.

pub mod models;
mod prompt;

use schemars::JsonSchema;
use scaffold_core::{AgentDefinition, ModelRef, Result};
use serde_json::Value;
use std::sync::Arc;

pub use models::{PodcastSegment, PodcastSpeaker, PodcastTopics, PodcastTranscript, SpeakerLine};

pub const APP_NAME: &str = "podcast_transcript_agent";
pub const MODEL: &str = "gemini-2.5-flash";
pub const TOPICS_OUTPUT_KEY: &str = "podcast_topics";
pub const TRANSCRIPT_OUTPUT_KEY: &str = "podcast_episode_transcript";

fn output_schema<T: JsonSchema>() -> Result<Value> {
    Ok(serde_json::to_value(schemars::schema_for!(T))?)
}

pub fn topics_agent() -> Result<AgentDefinition> {
    AgentDefinition::builder("podcast_topics_agent")
        .model(ModelRef::gemini(MODEL))
        .description("Extracts podcast topics from provided input")
        .instruction(prompt::TOPIC_EXTRACTION_PROMPT)
        .output_schema(output_schema::<PodcastTopics>()?)
        .output_key(TOPICS_OUTPUT_KEY)
        .build()
}

pub fn transcript_writer_agent() -> Result<AgentDefinition> {
    AgentDefinition::builder("podcast_transcript_writer_agent")
        .model(ModelRef::gemini(MODEL))
        .description("Writes the podcast transcript based on the podcast plan")
        .instruction(prompt::PODCAST_TRANSCRIPT_WRITER_PROMPT)
        .output_schema(output_schema::<PodcastTranscript>()?)
        .output_key(TRANSCRIPT_OUTPUT_KEY)
        .build()
}

pub fn agent() -> Result<AgentDefinition> {
    AgentDefinition::builder("podcast_transcript_agent")
        .model(ModelRef::gemini(MODEL))
        .description("Turns source material into a podcast episode transcript")
        .instruction(prompt::ROOT_PROMPT)
        .sub_agent(Arc::new(topics_agent()?))
        .sub_agent(Arc::new(transcript_writer_agent()?))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_order_and_keys() {
        let root = agent().unwrap();
        let names: Vec<&str> = root.sub_agents().iter().map(|a| a.name()).collect();
        assert_eq!(names, vec!["podcast_topics_agent", "podcast_transcript_writer_agent"]);
        assert_eq!(root.sub_agents()[0].output_key(), Some(TOPICS_OUTPUT_KEY));
        assert_eq!(root.sub_agents()[1].output_key(), Some(TRANSCRIPT_OUTPUT_KEY));
    }

    #[test]
    fn test_writer_reads_topics_from_state() {
        let writer = transcript_writer_agent().unwrap();
        assert!(writer.instruction().contains(&format!("{{{TOPICS_OUTPUT_KEY}}}")));
    }

    #[test]
    fn test_output_schemas_describe_models() {
        let topics = topics_agent().unwrap();
        let schema = topics.output_schema().unwrap();
        assert!(schema["properties"]["main_topic"].is_object());

        let writer = transcript_writer_agent().unwrap();
        let schema = writer.output_schema().unwrap();
        assert!(schema["properties"]["segments"].is_object());
    }
}
