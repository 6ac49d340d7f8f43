use gyan_schema::{Difficulty, QuizRequest};
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;

use crate::api::QuizEndpoint;

const DEFAULT_NUM_QUESTIONS: NonZeroU32 = NonZeroU32::new(5).unwrap();

/// Quiz requested by the `gyan-client` binary.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QuizConfig {
    /// TOML: `quiz.topic`. Default: `History`.
    #[serde(default = "default_topic")]
    pub topic: String,

    /// TOML: `quiz.num_questions`. Default: `5`. Zero is rejected at load time.
    #[serde(default = "default_num_questions")]
    pub num_questions: NonZeroU32,

    /// TOML: `quiz.difficulty`, one of `Easy`, `Medium`, `Hard`. Default: `Easy`.
    #[serde(default)]
    pub difficulty: Difficulty,

    /// Which quiz endpoint to call: `generate` or `new`.
    /// TOML: `quiz.endpoint`. Default: `generate`.
    #[serde(default)]
    pub endpoint: QuizEndpoint,
}

impl QuizConfig {
    pub fn request(&self) -> QuizRequest {
        QuizRequest::new(self.topic.clone(), self.num_questions, self.difficulty)
    }
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            topic: default_topic(),
            num_questions: default_num_questions(),
            difficulty: Difficulty::default(),
            endpoint: QuizEndpoint::default(),
        }
    }
}

fn default_topic() -> String {
    "History".to_string()
}

fn default_num_questions() -> NonZeroU32 {
    DEFAULT_NUM_QUESTIONS
}
