mod outcome;
mod request;

pub use outcome::{Question, QuizOutcome};
pub use request::{Difficulty, QuizRequest};
