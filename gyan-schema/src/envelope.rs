use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Outer JSON object every backend success response is wrapped in.
///
/// Only `data` is modeled; `status`, `message` and friends stay in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub data: T,

    #[serde(default, flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// `data` object of a quiz generation response.
///
/// Field names follow the model library's Go struct names verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[allow(non_snake_case)]
pub struct GenerateData {
    #[serde(default)]
    pub Candidates: Vec<Candidate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub PromptFeedback: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub UsageMetadata: Option<Value>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[allow(non_snake_case)]
pub struct Candidate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub Content: Option<CandidateContent>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub FinishReason: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub Index: Option<u32>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[allow(non_snake_case)]
pub struct CandidateContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub Parts: Option<Parts>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub Role: Option<String>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// JSON-encoded quiz content.
///
/// The backend forwards the model response as-is, so `Parts` shows up either as
/// one string or as an array of text segments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Parts {
    Text(String),
    Segments(Vec<String>),
}

impl Parts {
    /// Joined text ready for the second decode pass.
    pub fn text(&self) -> String {
        match self {
            Parts::Text(text) => text.clone(),
            Parts::Segments(segments) => segments.concat(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parts_accepts_string_and_segments() {
        let raw = r#"{
            "status": 200,
            "data": {
                "Candidates": [
                    { "Index": 0, "Content": { "Parts": ["[{\"ok\":", "true}]"], "Role": "model" } }
                ],
                "UsageMetadata": { "TotalTokenCount": 12 }
            }
        }"#;
        let envelope: ApiEnvelope<GenerateData> = serde_json::from_str(raw).expect("parse sample");
        let parts = envelope.data.Candidates[0]
            .Content
            .as_ref()
            .and_then(|content| content.Parts.as_ref())
            .expect("parts present");
        assert_eq!(parts.text(), r#"[{"ok":true}]"#);
        assert!(envelope.extra.contains_key("status"));

        let single: Parts = serde_json::from_str(r#""[1,2]""#).expect("parse string parts");
        assert_eq!(single, Parts::Text("[1,2]".to_string()));
    }

    #[test]
    fn missing_candidates_defaults_to_empty() {
        let envelope: ApiEnvelope<GenerateData> =
            serde_json::from_str(r#"{"data":{}}"#).expect("parse sample");
        assert!(envelope.data.Candidates.is_empty());
    }
}
