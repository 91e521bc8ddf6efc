//! Wire records exchanged with the Kambaz backend.
//!
//! Field names follow the backend's camelCase JSON with Mongo-style `_id`.
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON
//! roundtrip and schema validation. Unknown fields are ignored.

mod attempt;
mod question;
mod quiz;
mod user;

pub use attempt::{AttemptAnswer, AttemptPatch, AttemptSubmission, QuizAttempt, SubmittedAnswer};
pub use question::{AnswerValue, Question, QuestionKind};
pub use quiz::{Quiz, QuizPatch};
pub use user::{Credentials, NewUser, User};
