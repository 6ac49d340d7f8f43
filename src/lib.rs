pub mod api;
pub mod config;
pub mod error;
mod utils;

pub use api::{AuthToken, QuizApiClient, QuizEndpoint, QuizPayload};
pub use error::{ApiError, MalformedResponse};
pub use gyan_schema::{Difficulty, LoginCredentials, LoginSession, QuizOutcome, QuizRequest};
