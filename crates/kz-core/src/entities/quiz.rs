use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{AssignmentGroup, QuizType, ShowCorrectAnswers};

/// Quiz configuration record. Owned by a course, mutated only by faculty,
/// visible to students once `published`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Quiz {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub course: String,
    pub quiz_type: QuizType,
    pub assignment_group: AssignmentGroup,
    pub shuffle_answers: bool,
    /// Minutes; `0` means untimed.
    pub time_limit: u32,
    pub multiple_attempts: bool,
    pub how_many_attempts: u32,
    /// `"Immediately"`, `"After Due Date"` or `"Never"`; free-form on the wire.
    pub show_correct_answers: String,
    pub access_code: String,
    pub one_question_at_a_time: bool,
    pub webcam_required: bool,
    pub lock_questions_after_answering: bool,
    /// Dates serialize as `null` when unset so a full-record PUT clears them.
    #[serde(deserialize_with = "crate::date_serde::lenient_option")]
    #[schemars(with = "Option<DateTime<Utc>>")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "crate::date_serde::lenient_option")]
    #[schemars(with = "Option<DateTime<Utc>>")]
    pub available_date: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "crate::date_serde::lenient_option")]
    #[schemars(with = "Option<DateTime<Utc>>")]
    pub until_date: Option<DateTime<Utc>>,
    pub published: bool,
    /// Sum of question points; may be fractional.
    pub points: f64,
}

impl Quiz {
    /// Whether students get a per-question breakdown after submitting.
    ///
    /// Any non-empty value other than `"Never"` reveals the breakdown.
    #[must_use]
    pub fn shows_correct_answers(&self) -> bool {
        let value = self.show_correct_answers.trim();
        !value.is_empty() && value != ShowCorrectAnswers::Never.as_str()
    }

    #[must_use]
    pub const fn has_time_limit(&self) -> bool {
        self.time_limit > 0
    }

    /// Countdown length in seconds, if the quiz is timed.
    #[must_use]
    pub fn time_limit_secs(&self) -> Option<u64> {
        self.has_time_limit().then(|| u64::from(self.time_limit) * 60)
    }

    /// Maximum number of attempts a student may submit.
    #[must_use]
    pub const fn attempt_limit(&self) -> u32 {
        if self.multiple_attempts {
            self.how_many_attempts
        } else {
            1
        }
    }

    /// Apply a partial edit from the details editor.
    pub fn apply(&mut self, patch: &QuizPatch) {
        if let Some(title) = &patch.title {
            self.title.clone_from(title);
        }
        if let Some(description) = &patch.description {
            self.description.clone_from(description);
        }
        if let Some(quiz_type) = patch.quiz_type {
            self.quiz_type = quiz_type;
        }
        if let Some(group) = patch.assignment_group {
            self.assignment_group = group;
        }
        if let Some(shuffle) = patch.shuffle_answers {
            self.shuffle_answers = shuffle;
        }
        if let Some(minutes) = patch.time_limit {
            self.time_limit = minutes;
        }
        if let Some(multiple) = patch.multiple_attempts {
            self.multiple_attempts = multiple;
        }
        if let Some(count) = patch.how_many_attempts {
            self.how_many_attempts = count;
        }
        if let Some(show) = patch.show_correct_answers {
            self.show_correct_answers = show.as_str().to_string();
        }
        if let Some(code) = &patch.access_code {
            self.access_code.clone_from(code);
        }
        if let Some(one_at_a_time) = patch.one_question_at_a_time {
            self.one_question_at_a_time = one_at_a_time;
        }
        if let Some(webcam) = patch.webcam_required {
            self.webcam_required = webcam;
        }
        if let Some(lock) = patch.lock_questions_after_answering {
            self.lock_questions_after_answering = lock;
        }
        if let Some(due) = patch.due_date {
            self.due_date = due;
        }
        if let Some(available) = patch.available_date {
            self.available_date = available;
        }
        if let Some(until) = patch.until_date {
            self.until_date = until;
        }
    }
}

/// Partial quiz edit. `None` leaves the field untouched; for dates,
/// `Some(None)` clears the date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub quiz_type: Option<QuizType>,
    pub assignment_group: Option<AssignmentGroup>,
    pub shuffle_answers: Option<bool>,
    pub time_limit: Option<u32>,
    pub multiple_attempts: Option<bool>,
    pub how_many_attempts: Option<u32>,
    pub show_correct_answers: Option<ShowCorrectAnswers>,
    pub access_code: Option<String>,
    pub one_question_at_a_time: Option<bool>,
    pub webcam_required: Option<bool>,
    pub lock_questions_after_answering: Option<bool>,
    pub due_date: Option<Option<DateTime<Utc>>>,
    pub available_date: Option<Option<DateTime<Utc>>>,
    pub until_date: Option<Option<DateTime<Utc>>>,
}

impl QuizPatch {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_backend_document() {
        let json = r#"{
            "_id": "Q101",
            "title": "Week 1",
            "course": "RS101",
            "quizType": "Practice Quiz",
            "assignmentGroup": "Exams",
            "timeLimit": 30,
            "multipleAttempts": true,
            "howManyAttempts": 3,
            "showCorrectAnswers": "Never",
            "oneQuestionAtATime": false,
            "dueDate": "2025-05-01",
            "availableDate": "",
            "published": true,
            "points": 12.5,
            "__v": 0
        }"#;
        let quiz: Quiz = serde_json::from_str(json).unwrap();
        assert_eq!(quiz.id, "Q101");
        assert_eq!(quiz.quiz_type, QuizType::PracticeQuiz);
        assert_eq!(quiz.assignment_group, AssignmentGroup::Exams);
        assert_eq!(quiz.time_limit_secs(), Some(1800));
        assert_eq!(quiz.attempt_limit(), 3);
        assert!(quiz.due_date.is_some());
        assert!(quiz.available_date.is_none());
        assert!(!quiz.shows_correct_answers());
        assert_eq!(quiz.points, 12.5);
    }

    #[test]
    fn serializes_camel_case_with_mongo_id() {
        let quiz = Quiz {
            id: "Q1".into(),
            one_question_at_a_time: true,
            how_many_attempts: 2,
            ..Quiz::default()
        };
        let value = serde_json::to_value(&quiz).unwrap();
        assert_eq!(value["_id"], "Q1");
        assert_eq!(value["oneQuestionAtATime"], true);
        assert_eq!(value["howManyAttempts"], 2);
        assert!(value["dueDate"].is_null());
        assert_eq!(value["points"], 0.0);
    }

    #[test]
    fn single_attempt_quiz_ignores_attempt_count() {
        let quiz = Quiz {
            multiple_attempts: false,
            how_many_attempts: 5,
            ..Quiz::default()
        };
        assert_eq!(quiz.attempt_limit(), 1);
    }

    #[test]
    fn blank_show_correct_answers_hides_breakdown() {
        let mut quiz = Quiz::default();
        assert!(!quiz.shows_correct_answers());
        quiz.show_correct_answers = "After Due Date".into();
        assert!(quiz.shows_correct_answers());
    }

    #[test]
    fn patch_touches_only_given_fields() {
        let mut quiz = Quiz {
            title: "Old".into(),
            time_limit: 20,
            shuffle_answers: true,
            ..Quiz::default()
        };
        quiz.apply(&QuizPatch {
            title: Some("New".into()),
            time_limit: Some(0),
            show_correct_answers: Some(ShowCorrectAnswers::Never),
            ..QuizPatch::default()
        });
        assert_eq!(quiz.title, "New");
        assert_eq!(quiz.time_limit, 0);
        assert!(quiz.shuffle_answers);
        assert_eq!(quiz.show_correct_answers, "Never");
    }

    #[test]
    fn patch_clears_dates() {
        let due: DateTime<Utc> = "2025-05-01T00:00:00Z".parse().unwrap();
        let mut quiz = Quiz {
            due_date: Some(due),
            available_date: Some(due),
            until_date: Some(due),
            ..Quiz::default()
        };
        quiz.apply(&QuizPatch {
            due_date: Some(None),
            available_date: Some(None),
            ..QuizPatch::default()
        });
        assert_eq!(quiz.due_date, None);
        assert_eq!(quiz.available_date, None);
        assert_eq!(quiz.until_date, Some(due));

        let value = serde_json::to_value(&quiz).unwrap();
        assert!(value.as_object().unwrap().contains_key("dueDate"));
        assert!(value["dueDate"].is_null());
    }

    #[test]
    fn empty_patch_is_detected() {
        assert!(QuizPatch::default().is_empty());
        assert!(
            !QuizPatch {
                webcam_required: Some(true),
                ..QuizPatch::default()
            }
            .is_empty()
        );
    }
}
