use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::question::AnswerValue;

/// One graded answer inside a submitted attempt.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AttemptAnswer {
    pub question_id: String,
    pub answer: AnswerValue,
    #[serde(default)]
    pub is_correct: bool,
    #[serde(default)]
    pub points_earned: f64,
}

/// A scored submission of answers for a quiz by a student.
///
/// Created by the backend on submission and immutable after grading. The
/// backend enforces attempt limits; this client never does.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuizAttempt {
    #[serde(rename = "_id")]
    pub id: String,
    pub quiz: String,
    pub student: String,
    #[serde(default)]
    pub course: String,
    #[serde(default)]
    pub attempt_number: u32,
    pub started_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub answers: Vec<AttemptAnswer>,
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub total_points: f64,
    #[serde(default)]
    pub is_completed: bool,
}

impl QuizAttempt {
    /// Graded answer for `question_id`, if one was recorded.
    #[must_use]
    pub fn answer_for(&self, question_id: &str) -> Option<&AttemptAnswer> {
        self.answers.iter().find(|a| a.question_id == question_id)
    }
}

/// Ungraded answer sent to the backend on submission.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedAnswer {
    pub question_id: String,
    pub answer: AnswerValue,
}

/// Request body for `POST .../attempts`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AttemptSubmission {
    pub answers: Vec<SubmittedAnswer>,
}

/// Partial update for an incomplete attempt.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AttemptPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answers: Option<Vec<SubmittedAnswer>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_completed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_graded_attempt() {
        let json = r#"{
            "_id": "A1",
            "quiz": "Q1",
            "student": "U1",
            "course": "C1",
            "attemptNumber": 2,
            "startedAt": "2025-02-10T09:00:00.000Z",
            "submittedAt": "2025-02-10T09:12:00.000Z",
            "answers": [
                {"questionId": "q1", "answer": 1, "isCorrect": true, "pointsEarned": 2},
                {"questionId": "q2", "answer": "paris", "isCorrect": false, "pointsEarned": 0}
            ],
            "score": 2,
            "totalPoints": 5,
            "isCompleted": true
        }"#;
        let attempt: QuizAttempt = serde_json::from_str(json).unwrap();
        assert_eq!(attempt.attempt_number, 2);
        assert_eq!(attempt.score, 2.0);
        assert_eq!(attempt.total_points, 5.0);
        let q2 = attempt.answer_for("q2").unwrap();
        assert_eq!(q2.answer, AnswerValue::Text("paris".into()));
        assert!(attempt.answer_for("q3").is_none());
    }

    #[test]
    fn fractional_scores_parse() {
        let json = r#"{
            "_id": "A2",
            "quiz": "Q1",
            "student": "U1",
            "startedAt": "2025-02-10T09:00:00.000Z",
            "answers": [
                {"questionId": "q1", "answer": true, "isCorrect": true, "pointsEarned": 0.5}
            ],
            "score": 0.5,
            "totalPoints": 2.5
        }"#;
        let attempt: QuizAttempt = serde_json::from_str(json).unwrap();
        assert_eq!(attempt.score, 0.5);
        assert_eq!(attempt.total_points, 2.5);
        assert_eq!(attempt.answer_for("q1").unwrap().points_earned, 0.5);
    }

    #[test]
    fn submission_body_shape() {
        let body = AttemptSubmission {
            answers: vec![SubmittedAnswer {
                question_id: "q1".into(),
                answer: AnswerValue::Bool(true),
            }],
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"answers": [{"questionId": "q1", "answer": true}]})
        );
    }

    #[test]
    fn empty_patch_serializes_to_empty_object() {
        let value = serde_json::to_value(AttemptPatch::default()).unwrap();
        assert_eq!(value, serde_json::json!({}));
    }
}
