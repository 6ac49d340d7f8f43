mod api;

pub use api::{ApiError, MalformedResponse};
