use gyan_schema::{ApiEnvelope, GenerateData, LoginSession};
use serde_json::Value;

use crate::api::QuizPayload;
use crate::error::MalformedResponse;
use crate::utils::logging::body_preview;

/// Two-stage decode of a quiz response.
///
/// Stage one reads the `{ "data": { "Candidates": [..] } }` envelope. Stage two parses the
/// first candidate's `Content.Parts` text, which is itself JSON.
pub fn unwrap_quiz_payload(body: &[u8]) -> Result<QuizPayload, MalformedResponse> {
    let envelope: ApiEnvelope<GenerateData> = serde_json::from_slice(body).map_err(|error| {
        tracing::debug!(%error, body = %body_preview(body), "Quiz envelope decode failed");
        MalformedResponse::Envelope(error)
    })?;

    let candidate = envelope
        .data
        .Candidates
        .first()
        .ok_or(MalformedResponse::EmptyCandidates)?;

    let parts = candidate
        .Content
        .as_ref()
        .and_then(|content| content.Parts.as_ref())
        .ok_or(MalformedResponse::MissingField("Content.Parts"))?;

    let text = parts.text();
    let value = serde_json::from_str::<Value>(&text).map_err(|error| {
        tracing::debug!(%error, parts = %body_preview(text.as_bytes()), "Parts decode failed");
        MalformedResponse::Parts(error)
    })?;

    Ok(QuizPayload::new(value))
}

/// Decodes a login response. An empty or absent `access_token` is malformed.
pub fn unwrap_login_session(body: &[u8]) -> Result<LoginSession, MalformedResponse> {
    let envelope: ApiEnvelope<LoginSession> =
        serde_json::from_slice(body).map_err(MalformedResponse::Envelope)?;

    if envelope.data.access_token.is_empty() {
        return Err(MalformedResponse::MissingField("access_token"));
    }

    Ok(envelope.data)
}
