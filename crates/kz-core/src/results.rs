//! Results page view model.
//!
//! Built either from a backend-graded [`QuizAttempt`] or from a local
//! [`PreviewScore`]. Students only get the per-question breakdown when the
//! quiz reveals correct answers; other roles always do.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{AnswerValue, Question, Quiz, QuizAttempt};
use crate::enums::Role;
use crate::grading::{self, PreviewScore, PASSING_PERCENTAGE};

pub const HIDDEN_ANSWERS_NOTICE: &str = "Correct answers are not shown for this quiz.";
pub const NOT_ANSWERED: &str = "Not Answered";

/// One question in the breakdown.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ResultRow {
    /// 1-based.
    pub index: usize,
    pub question_id: String,
    pub prompt: String,
    pub is_correct: bool,
    pub points_earned: f64,
    pub points: f64,
    pub answer: String,
    pub correct_answer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ResultsView {
    pub quiz_id: String,
    pub quiz_title: String,
    pub score: f64,
    pub total: f64,
    pub percentage: u32,
    pub letter_grade: char,
    pub passed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attempt_number: Option<u32>,
    /// Empty when the breakdown is withheld.
    pub rows: Vec<ResultRow>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

impl ResultsView {
    /// View of a graded attempt as seen by `viewer`.
    #[must_use]
    pub fn build(quiz: &Quiz, questions: &[Question], attempt: &QuizAttempt, viewer: Role) -> Self {
        let percentage = grading::percentage(attempt.score, attempt.total_points);
        let reveal = viewer != Role::Student || quiz.shows_correct_answers();

        let rows = if reveal {
            questions
                .iter()
                .enumerate()
                .map(|(i, question)| match attempt.answer_for(&question.id) {
                    Some(graded) => row(
                        i,
                        question,
                        Some(&graded.answer),
                        graded.is_correct,
                        graded.points_earned,
                    ),
                    None => row(i, question, None, false, 0.0),
                })
                .collect()
        } else {
            Vec::new()
        };

        Self {
            quiz_id: quiz.id.clone(),
            quiz_title: quiz.title.clone(),
            score: attempt.score,
            total: attempt.total_points,
            percentage,
            letter_grade: grading::letter_grade(percentage),
            passed: percentage >= PASSING_PERCENTAGE,
            attempt_number: Some(attempt.attempt_number),
            rows,
            notice: (!reveal).then(|| HIDDEN_ANSWERS_NOTICE.to_string()),
        }
    }

    /// View of a local preview run. Always includes the breakdown.
    #[must_use]
    pub fn from_preview(
        quiz: &Quiz,
        questions: &[Question],
        answers: &BTreeMap<String, AnswerValue>,
        score: &PreviewScore,
    ) -> Self {
        let rows = questions
            .iter()
            .enumerate()
            .map(|(i, question)| {
                let outcome = score.outcome_for(&question.id);
                row(
                    i,
                    question,
                    answers.get(&question.id),
                    outcome.is_some_and(|o| o.is_correct),
                    outcome.map_or(0.0, |o| o.points_earned),
                )
            })
            .collect();

        Self {
            quiz_id: quiz.id.clone(),
            quiz_title: quiz.title.clone(),
            score: score.score,
            total: score.total,
            percentage: score.percentage,
            letter_grade: score.letter_grade,
            passed: score.passed(),
            attempt_number: None,
            rows,
            notice: None,
        }
    }

    #[must_use]
    pub const fn shows_breakdown(&self) -> bool {
        self.notice.is_none()
    }

    /// `"7 / 10 (70%)"`.
    #[must_use]
    pub fn score_line(&self) -> String {
        format!("{} / {} ({}%)", self.score, self.total, self.percentage)
    }
}

fn row(
    index: usize,
    question: &Question,
    answer: Option<&AnswerValue>,
    is_correct: bool,
    points_earned: f64,
) -> ResultRow {
    ResultRow {
        index: index + 1,
        question_id: question.id.clone(),
        prompt: question.prompt.clone(),
        is_correct,
        points_earned,
        points: question.points,
        answer: answer.map_or_else(|| NOT_ANSWERED.to_string(), |a| question.answer_display(a)),
        correct_answer: question.correct_answer_display(),
    }
}
