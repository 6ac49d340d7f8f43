use reqwest::StatusCode;
use thiserror::Error as ThisError;

/// Failure of a single backend exchange.
#[derive(Debug, ThisError)]
pub enum ApiError {
    /// Transport-level failure (DNS, connect, timeouts, body read). Never retried.
    #[error("HTTP request error: {0}")]
    Network(#[from] reqwest::Error),

    /// Backend answered with a non-2xx status.
    ///
    /// `message` comes from the error body: the `errorMessage` or `body` field of a
    /// JSON body, or the raw text of anything else.
    #[error("Backend returned {status}: {message}")]
    Http { status: StatusCode, message: String },

    /// Backend answered 2xx but the body could not be unwrapped.
    #[error("Malformed response: {0}")]
    Malformed(#[from] MalformedResponse),
}

/// Which unwrap stage rejected a success body.
#[derive(Debug, ThisError)]
pub enum MalformedResponse {
    /// Outer body is not a `{ "data": ... }` envelope of the expected shape.
    #[error("envelope decode failed: {0}")]
    Envelope(#[source] serde_json::Error),

    #[error("missing field `{0}`")]
    MissingField(&'static str),

    #[error("`Candidates` is empty")]
    EmptyCandidates,

    /// `Parts` text is not valid JSON.
    #[error("`Parts` decode failed: {0}")]
    Parts(#[source] serde_json::Error),

    /// Decoded payload does not follow the `[{"ok": ..}, [..]]` quiz layout.
    #[error("quiz payload decode failed: {0}")]
    Quiz(#[source] serde_json::Error),
}

impl ApiError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            ApiError::Network(e) => e.status(),
            ApiError::Malformed(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_status_and_message() {
        let err = ApiError::Http {
            status: StatusCode::UNAUTHORIZED,
            message: "Wrong password".to_string(),
        };
        assert_eq!(err.to_string(), "Backend returned 401 Unauthorized: Wrong password");
        assert_eq!(err.status(), Some(StatusCode::UNAUTHORIZED));
    }

    #[test]
    fn malformed_stages_stay_distinct() {
        let err: ApiError = MalformedResponse::MissingField("access_token").into();
        assert!(matches!(
            err,
            ApiError::Malformed(MalformedResponse::MissingField("access_token"))
        ));
        assert_eq!(
            err.to_string(),
            "Malformed response: missing field `access_token`"
        );
        assert_eq!(err.status(), None);
    }
}
