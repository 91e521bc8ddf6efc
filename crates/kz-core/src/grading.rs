//! Client-side scoring for the faculty preview flow.
//!
//! The backend grades real attempts. This duplicate exists only so faculty
//! can preview a quiz without creating an attempt, and it can drift from the
//! backend's rules if either side changes.
//!
//! Rules per variant:
//! - multiple-choice: selected index equals the stored index
//! - true-false: boolean equality
//! - fill-in-blank: lowercase-trimmed answer is one of the lowercase-trimmed
//!   accepted answers
//!
//! A missing answer, or one whose type does not fit the variant, is wrong.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{AnswerValue, Question, QuestionKind};

/// Percentage at or above which a result is shown as passing.
pub const PASSING_PERCENTAGE: u32 = 70;

/// Whether `answer` is correct for `question`.
#[must_use]
pub fn is_correct(question: &Question, answer: Option<&AnswerValue>) -> bool {
    let Some(answer) = answer else {
        return false;
    };
    match (&question.kind, answer) {
        (QuestionKind::MultipleChoice { correct_answer, .. }, AnswerValue::Index(selected)) => {
            i64::try_from(*correct_answer).is_ok_and(|expected| expected == *selected)
        }
        (QuestionKind::TrueFalse { correct_answer }, AnswerValue::Bool(given)) => {
            correct_answer == given
        }
        (QuestionKind::FillInBlank { possible_answers }, given) => {
            let normalized = normalize_text(&given.to_string());
            possible_answers
                .iter()
                .any(|accepted| normalize_text(accepted) == normalized)
        }
        _ => false,
    }
}

fn normalize_text(raw: &str) -> String {
    raw.to_lowercase().trim().to_string()
}

/// Round `score / total` to the nearest whole percent; `0` for an empty quiz.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn percentage(score: f64, total: f64) -> u32 {
    if total <= 0.0 || !total.is_finite() {
        return 0;
    }
    (score / total * 100.0).round().max(0.0) as u32
}

/// Round a point sum to two decimals, so `0.1 + 0.2` reads as `0.3`.
#[must_use]
pub fn round_points(points: f64) -> f64 {
    (points * 100.0).round() / 100.0
}

/// Letter grade for a percentage.
#[must_use]
pub const fn letter_grade(percentage: u32) -> char {
    match percentage {
        90.. => 'A',
        80..=89 => 'B',
        70..=79 => 'C',
        60..=69 => 'D',
        _ => 'F',
    }
}

/// Correctness of one question in a preview run.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct QuestionOutcome {
    pub question_id: String,
    pub is_correct: bool,
    pub points_earned: f64,
    pub points: f64,
}

/// Aggregate result of a preview run.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct PreviewScore {
    pub score: f64,
    pub total: f64,
    pub percentage: u32,
    pub letter_grade: char,
    pub outcomes: Vec<QuestionOutcome>,
}

impl PreviewScore {
    #[must_use]
    pub const fn passed(&self) -> bool {
        self.percentage >= PASSING_PERCENTAGE
    }

    #[must_use]
    pub fn outcome_for(&self, question_id: &str) -> Option<&QuestionOutcome> {
        self.outcomes.iter().find(|o| o.question_id == question_id)
    }
}

/// Score every question against the answer sheet.
///
/// Score is the sum of points over correct answers; total is the sum of all
/// question points.
#[must_use]
pub fn grade_preview(
    questions: &[Question],
    answers: &BTreeMap<String, AnswerValue>,
) -> PreviewScore {
    let mut score = 0.0;
    let mut total = 0.0;
    let outcomes = questions
        .iter()
        .map(|question| {
            let correct = is_correct(question, answers.get(&question.id));
            let earned = if correct { question.points } else { 0.0 };
            score += earned;
            total += question.points;
            QuestionOutcome {
                question_id: question.id.clone(),
                is_correct: correct,
                points_earned: earned,
                points: question.points,
            }
        })
        .collect::<Vec<_>>();

    let (score, total) = (round_points(score), round_points(total));
    let percentage = percentage(score, total);
    PreviewScore {
        score,
        total,
        percentage,
        letter_grade: letter_grade(percentage),
        outcomes,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn question(id: &str, points: f64, kind: QuestionKind) -> Question {
        Question {
            id: id.into(),
            quiz: "Q1".into(),
            course: "C1".into(),
            title: String::new(),
            prompt: String::new(),
            points,
            kind,
        }
    }

    #[test]
    fn mixed_quiz_scores_by_points() {
        let questions = vec![
            question(
                "mc",
                3.0,
                QuestionKind::MultipleChoice {
                    choices: vec!["a".into(), "b".into(), "c".into()],
                    correct_answer: 2,
                },
            ),
            question(
                "tf",
                1.0,
                QuestionKind::TrueFalse {
                    correct_answer: true,
                },
            ),
            question(
                "fib",
                2.0,
                QuestionKind::FillInBlank {
                    possible_answers: vec!["Four".into(), "4".into()],
                },
            ),
        ];
        let answers = BTreeMap::from([
            ("mc".to_string(), AnswerValue::Index(2)),
            ("tf".to_string(), AnswerValue::Bool(false)),
            ("fib".to_string(), AnswerValue::Text("  FOUR ".into())),
        ]);

        let result = grade_preview(&questions, &answers);
        assert_eq!(result.score, 5.0);
        assert_eq!(result.total, 6.0);
        assert_eq!(result.percentage, 83);
        assert_eq!(result.letter_grade, 'B');
        assert!(result.passed());
        assert!(!result.outcome_for("tf").unwrap().is_correct);
        assert_eq!(result.outcome_for("fib").unwrap().points_earned, 2.0);
    }

    #[test]
    fn missing_answers_are_wrong() {
        let questions = vec![question(
            "tf",
            1.0,
            QuestionKind::TrueFalse {
                correct_answer: false,
            },
        )];
        let result = grade_preview(&questions, &BTreeMap::new());
        assert_eq!(result.score, 0.0);
        assert_eq!(result.total, 1.0);
    }

    #[test]
    fn empty_quiz_is_zero_percent() {
        let result = grade_preview(&[], &BTreeMap::new());
        assert_eq!(result.percentage, 0);
        assert_eq!(result.letter_grade, 'F');
    }

    #[test]
    fn mismatched_answer_type_is_wrong() {
        let mc = question(
            "mc",
            1.0,
            QuestionKind::MultipleChoice {
                choices: vec!["true".into()],
                correct_answer: 0,
            },
        );
        assert!(!is_correct(&mc, Some(&AnswerValue::Bool(true))));
        assert!(!is_correct(&mc, Some(&AnswerValue::Text("0".into()))));
    }

    #[test]
    fn fill_in_blank_compares_text_rendering() {
        let fib = question(
            "fib",
            1.0,
            QuestionKind::FillInBlank {
                possible_answers: vec!["42".into(), " True".into()],
            },
        );
        assert!(is_correct(&fib, Some(&AnswerValue::Index(42))));
        assert!(is_correct(&fib, Some(&AnswerValue::Bool(true))));
    }

    #[test]
    fn fractional_points_sum_cleanly() {
        let key = QuestionKind::TrueFalse {
            correct_answer: true,
        };
        let questions = vec![
            question("a", 0.1, key.clone()),
            question("b", 0.2, key.clone()),
            question("c", 0.7, key),
        ];
        let answers = BTreeMap::from([
            ("a".to_string(), AnswerValue::Bool(true)),
            ("b".to_string(), AnswerValue::Bool(true)),
        ]);
        let result = grade_preview(&questions, &answers);
        assert_eq!(result.score, 0.3);
        assert_eq!(result.total, 1.0);
        assert_eq!(result.percentage, 30);
        assert_eq!(result.score.to_string(), "0.3");
    }
}
