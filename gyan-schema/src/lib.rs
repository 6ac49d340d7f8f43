pub mod envelope;
pub mod quiz;
pub mod users;

pub use envelope::{ApiEnvelope, Candidate, CandidateContent, GenerateData, Parts};
pub use quiz::{Difficulty, Question, QuizOutcome, QuizRequest};
pub use users::{LoginCredentials, LoginSession};
