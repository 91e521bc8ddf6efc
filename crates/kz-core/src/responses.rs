//! CLI response types returned as JSON by `kambaz` commands.
//!
//! These structs define the shape of JSON output for commands like
//! `kambaz quiz list`, `kambaz quiz publish`, `kambaz attempt status` and
//! `kambaz auth status`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Quiz, User};
use crate::policy::Availability;

/// One row of `kambaz quiz list`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct QuizListing {
    pub quiz: Quiz,
    pub question_count: usize,
    pub availability: Availability,
    pub summary: String,
    /// Students only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_score: Option<f64>,
}

/// Response from `kambaz quiz publish` / `unpublish`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PublishResponse {
    pub quiz_id: String,
    pub published: bool,
    /// HTTP status returned by the backend; only `200` counts as success.
    pub status: u16,
}

/// Response from any `delete` command.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DeleteResponse {
    pub entity: String,
    pub id: String,
    pub deleted: bool,
}

/// Response from `kambaz attempt status`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct AttemptStatusResponse {
    pub quiz_id: String,
    pub published: bool,
    pub availability: Availability,
    pub attempts_taken: usize,
    pub attempt_limit: u32,
    pub can_take: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_score: Option<f64>,
}

/// Response from `kambaz auth status`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AuthStatusResponse {
    pub signed_in: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    pub server: String,
}
