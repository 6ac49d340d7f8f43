use gyan_schema::QuizOutcome;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::MalformedResponse;

/// Quiz content decoded from the `Parts` string, kept exactly as the backend produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuizPayload(Value);

impl QuizPayload {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// Typed view: the question list, or the reason the generator refused the topic.
    pub fn outcome(&self) -> Result<QuizOutcome, MalformedResponse> {
        QuizOutcome::deserialize(&self.0).map_err(MalformedResponse::Quiz)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn outcome_reads_rejection() {
        let payload = QuizPayload::new(json!([{ "ok": false }, ["nope"]]));
        assert_eq!(
            payload.outcome().expect("valid outcome"),
            QuizOutcome::Rejected("nope".to_string())
        );
    }

    #[test]
    fn outcome_on_free_form_payload_is_malformed() {
        let payload = QuizPayload::new(json!({ "questions": [] }));
        assert!(matches!(payload.outcome(), Err(MalformedResponse::Quiz(_))));
    }
}
