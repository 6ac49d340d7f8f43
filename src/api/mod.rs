mod classify;
mod client;
mod endpoints;
mod payload;
mod token;
mod unwrap;

pub use classify::{UNKNOWN_JSON_ERROR, classify_error_response, error_message};
pub use client::QuizApiClient;
pub use endpoints::{ApiEndpoints, QuizEndpoint};
pub use payload::QuizPayload;
pub use token::AuthToken;
pub use unwrap::{unwrap_login_session, unwrap_quiz_payload};
