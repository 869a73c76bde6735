pub mod request;
pub mod response;

pub use request::{AnswerSubmission, LoginRequest, QuestionFilters, RegisterRequest};
pub use response::{AnswerResult, Token};
