use serde::{Deserialize, Deserializer, Serialize, de::Error};
use serde_json::Value;

/// Typed view of a decoded quiz payload.
///
/// The generator answers with a two-element array: a status object followed by
/// either the questions or a list of reasons it refused the topic.
///
/// ```json
/// [ { "ok": true },  [ { "serial_number": "1", "question": "...", ... } ] ]
/// [ { "ok": false }, [ "The requested topic is inappropriate ..." ] ]
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizOutcome {
    Questions(Vec<Question>),
    Rejected(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    #[serde(deserialize_with = "deserialize_string_lax")]
    pub serial_number: String,
    pub question: String,
    pub options: Vec<String>,
    #[serde(rename = "correctAnswer")]
    pub correct_answer: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Deserialize)]
struct GenerationStatus {
    ok: bool,
}

impl<'de> Deserialize<'de> for QuizOutcome {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (status, body) = <(GenerationStatus, Value)>::deserialize(deserializer)?;

        if status.ok {
            Vec::<Question>::deserialize(body)
                .map(QuizOutcome::Questions)
                .map_err(D::Error::custom)
        } else {
            Vec::<String>::deserialize(body)
                .map(|reasons| QuizOutcome::Rejected(reasons.join(" ")))
                .map_err(D::Error::custom)
        }
    }
}

fn deserialize_string_lax<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Value::deserialize(deserializer)?;

    match v {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        _ => Err(D::Error::custom(
            "expected a string or a number for serial_number",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_questions() {
        let payload = json!([
            { "ok": true },
            [
                {
                    "serial_number": "1",
                    "question": "What is the capital of France?",
                    "options": ["Berlin", "Madrid", "Paris", "Rome"],
                    "correctAnswer": "Paris",
                    "description": "Paris is the capital of France."
                },
                {
                    "serial_number": 2,
                    "question": "Which element has the atomic number 1?",
                    "options": ["Helium", "Oxygen", "Hydrogen", "Carbon"],
                    "correctAnswer": "Hydrogen"
                }
            ]
        ]);

        let QuizOutcome::Questions(questions) =
            serde_json::from_value::<QuizOutcome>(payload).expect("parse outcome")
        else {
            panic!("expected questions");
        };
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].correct_answer, "Paris");
        assert_eq!(questions[1].serial_number, "2");
        assert!(questions[1].description.is_empty());
    }

    #[test]
    fn parses_rejection() {
        let payload = json!([
            { "ok": false },
            ["The requested topic is inappropriate or cannot be used to generate quiz questions."]
        ]);
        assert_eq!(
            serde_json::from_value::<QuizOutcome>(payload).expect("parse outcome"),
            QuizOutcome::Rejected(
                "The requested topic is inappropriate or cannot be used to generate quiz questions."
                    .to_string()
            )
        );
    }

    #[test]
    fn rejects_other_shapes() {
        assert!(serde_json::from_value::<QuizOutcome>(json!({ "ok": true })).is_err());
        assert!(serde_json::from_value::<QuizOutcome>(json!([{ "ok": true }, ["x"]])).is_err());
    }
}
