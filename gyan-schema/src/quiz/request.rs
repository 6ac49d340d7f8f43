use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;

/// Body of `/api/quiz/generate` and `/api/quiz/new`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizRequest {
    pub topic: String,
    pub num_questions: NonZeroU32,
    pub difficulty: Difficulty,
}

impl QuizRequest {
    pub fn new(topic: impl Into<String>, num_questions: NonZeroU32, difficulty: Difficulty) -> Self {
        Self {
            topic: topic.into(),
            num_questions,
            difficulty,
        }
    }
}

/// Difficulty level. Serialized exactly as `"Easy"`, `"Medium"`, `"Hard"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    #[serde(alias = "easy", alias = "EASY")]
    Easy,
    #[serde(alias = "medium", alias = "MEDIUM")]
    Medium,
    #[serde(alias = "hard", alias = "HARD")]
    Hard,
}

impl Difficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
