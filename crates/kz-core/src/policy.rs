//! Availability windows, attempt limits and list visibility.

use std::fmt;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Quiz, QuizAttempt};
use crate::enums::Role;

/// Where `now` falls relative to a quiz's date window.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "status", content = "until", rename_all = "snake_case")]
pub enum Availability {
    /// No window configured.
    Always,
    NotAvailableUntil(DateTime<Utc>),
    Available,
    Closed,
}

impl Availability {
    /// Whether a student may open the quiz right now.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Always | Self::Available)
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Always => f.write_str("Always available"),
            Self::NotAvailableUntil(date) => {
                write!(f, "Not available until {}", date.format("%Y-%m-%d"))
            }
            Self::Available => f.write_str("Available"),
            Self::Closed => f.write_str("Closed"),
        }
    }
}

/// Classify `now` against the quiz's available/until/due dates.
///
/// A window needs both an available date and a due date; with either missing
/// the quiz is always available.
#[must_use]
pub fn availability(quiz: &Quiz, now: DateTime<Utc>) -> Availability {
    let (Some(available), Some(due)) = (quiz.available_date, quiz.due_date) else {
        return Availability::Always;
    };
    if now < available {
        return Availability::NotAvailableUntil(available);
    }
    if quiz.until_date.is_some_and(|until| now > until) || now > due {
        return Availability::Closed;
    }
    Availability::Available
}

/// Whether another attempt fits under the quiz's attempt limit.
///
/// Advisory only; the backend enforces the limit.
#[must_use]
pub const fn can_take_quiz(quiz: &Quiz, attempts_taken: usize) -> bool {
    if quiz.multiple_attempts {
        attempts_taken < quiz.how_many_attempts as usize
    } else {
        attempts_taken == 0
    }
}

/// Whether a student may start a new attempt: published and under the limit.
#[must_use]
pub const fn student_can_start(quiz: &Quiz, attempts_taken: usize) -> bool {
    quiz.published && can_take_quiz(quiz, attempts_taken)
}

/// Quizzes `role` sees in a course listing. Students only see published ones.
#[must_use]
pub fn visible_to(role: Role, quizzes: Vec<Quiz>) -> Vec<Quiz> {
    if role == Role::Student {
        quizzes.into_iter().filter(|q| q.published).collect()
    } else {
        quizzes
    }
}

/// The most recent attempt in a list returned by the backend (newest first).
#[must_use]
pub fn latest_attempt(attempts: &[QuizAttempt]) -> Option<&QuizAttempt> {
    attempts.first()
}

/// One-line status summary shown under each quiz in a listing.
///
/// `latest_score` is only rendered for students; `None` shows `-`.
#[must_use]
pub fn summary_line(
    quiz: &Quiz,
    question_count: usize,
    role: Role,
    latest_score: Option<f64>,
    now: DateTime<Utc>,
) -> String {
    let due = quiz
        .due_date
        .map_or_else(|| "No due date".to_string(), |d| d.format("%Y-%m-%d").to_string());
    let mut line = format!(
        "{} | Due {due} | {} pts | {question_count} Questions",
        availability(quiz, now),
        quiz.points
    );
    if role == Role::Student {
        let score = latest_score.map_or_else(|| "-".to_string(), |s| s.to_string());
        line.push_str(&format!(" | Score {score} / {} pts", quiz.points));
    }
    line
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 15, 12, 0, 0).unwrap()
    }

    fn windowed(available: i64, until: Option<i64>, due: i64) -> Quiz {
        Quiz {
            available_date: Some(now() + Duration::days(available)),
            until_date: until.map(|d| now() + Duration::days(d)),
            due_date: Some(now() + Duration::days(due)),
            ..Quiz::default()
        }
    }

    #[test]
    fn missing_dates_are_always_available() {
        let quiz = Quiz {
            due_date: Some(now()),
            ..Quiz::default()
        };
        assert_eq!(availability(&quiz, now()), Availability::Always);
        assert_eq!(availability(&Quiz::default(), now()).to_string(), "Always available");
    }

    #[test]
    fn before_window_reports_open_date() {
        let quiz = windowed(2, None, 5);
        let status = availability(&quiz, now());
        assert_eq!(status, Availability::NotAvailableUntil(now() + Duration::days(2)));
        assert_eq!(status.to_string(), "Not available until 2025-03-17");
        assert!(!status.is_open());
    }

    #[rstest]
    #[case::inside(windowed(-1, Some(3), 2), Availability::Available)]
    #[case::past_until(windowed(-5, Some(-1), 2), Availability::Closed)]
    #[case::past_due(windowed(-5, None, -1), Availability::Closed)]
    fn window_classification(#[case] quiz: Quiz, #[case] expected: Availability) {
        assert_eq!(availability(&quiz, now()), expected);
    }

    #[rstest]
    #[case(false, 0, 0, true)]
    #[case(false, 0, 1, false)]
    #[case(true, 3, 2, true)]
    #[case(true, 3, 3, false)]
    fn attempt_limits(
        #[case] multiple: bool,
        #[case] how_many: u32,
        #[case] taken: usize,
        #[case] expected: bool,
    ) {
        let quiz = Quiz {
            multiple_attempts: multiple,
            how_many_attempts: how_many,
            published: true,
            ..Quiz::default()
        };
        assert_eq!(can_take_quiz(&quiz, taken), expected);
        assert_eq!(student_can_start(&quiz, taken), expected);
    }

    #[test]
    fn unpublished_quiz_cannot_be_started() {
        let quiz = Quiz::default();
        assert!(can_take_quiz(&quiz, 0));
        assert!(!student_can_start(&quiz, 0));
    }

    #[test]
    fn students_only_see_published() {
        let quizzes = vec![
            Quiz {
                id: "a".into(),
                published: true,
                ..Quiz::default()
            },
            Quiz {
                id: "b".into(),
                ..Quiz::default()
            },
        ];
        assert_eq!(visible_to(Role::Student, quizzes.clone()).len(), 1);
        assert_eq!(visible_to(Role::Faculty, quizzes).len(), 2);
    }

    #[test]
    fn summary_line_for_each_role() {
        let quiz = Quiz {
            points: 10.0,
            ..Quiz::default()
        };
        assert_eq!(
            summary_line(&quiz, 4, Role::Faculty, None, now()),
            "Always available | Due No due date | 10 pts | 4 Questions"
        );
        assert_eq!(
            summary_line(&quiz, 4, Role::Student, Some(7.0), now()),
            "Always available | Due No due date | 10 pts | 4 Questions | Score 7 / 10 pts"
        );
        assert!(summary_line(&quiz, 0, Role::Student, None, now()).ends_with("Score - / 10 pts"));

        let half = Quiz {
            points: 2.5,
            ..Quiz::default()
        };
        assert!(
            summary_line(&half, 1, Role::Student, Some(0.5), now())
                .ends_with("2.5 pts | 1 Questions | Score 0.5 / 2.5 pts")
        );
    }
}
