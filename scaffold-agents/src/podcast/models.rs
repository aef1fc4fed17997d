use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PodcastTopics {
    pub main_topic: String,
    pub sub_topics: Vec<String>,
    pub key_facts: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PodcastSpeaker {
    pub speaker_id: String,
    pub name: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SpeakerLine {
    pub speaker_id: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PodcastSegment {
    pub segment_title: String,
    pub lines: Vec<SpeakerLine>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PodcastTranscript {
    pub episode_title: String,
    pub speakers: Vec<PodcastSpeaker>,
    pub segments: Vec<PodcastSegment>,
}

impl PodcastTranscript {
    /// Speaker ids used in lines but never declared in `speakers`.
    pub fn undeclared_speakers(&self) -> Vec<&str> {
        let declared: HashSet<&str> = self.speakers.iter().map(|s| s.speaker_id.as_str()).collect();
        let mut missing: Vec<&str> = self
            .segments
            .iter()
            .flat_map(|segment| segment.lines.iter())
            .map(|line| line.speaker_id.as_str())
            .filter(|id| !declared.contains(id))
            .collect();
        missing.sort_unstable();
        missing.dedup();
        missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_transcript_from_model_output() {
        let transcript: PodcastTranscript = serde_json::from_value(json!({
            "episode_title": "Dreams and Wormholes",
            "speakers": [
                {"speaker_id": "host_1", "name": "Ada", "role": "host"},
                {"speaker_id": "host_2", "name": "Lin", "role": "co-host"}
            ],
            "segments": [{
                "segment_title": "Intro",
                "lines": [
                    {"speaker_id": "host_1", "text": "Welcome back."},
                    {"speaker_id": "guest", "text": "Glad to be here."},
                    {"speaker_id": "guest", "text": "Again."}
                ]
            }]
        }))
        .unwrap();

        assert_eq!(transcript.segments[0].lines.len(), 3);
        assert_eq!(transcript.undeclared_speakers(), vec!["guest"]);
    }
}
