//! Templates and editing rules for faculty authoring.
//!
//! New quizzes and questions get client-generated UUID v4 ids. Editing helpers
//! enforce the minimum choice/answer counts and keep the multiple-choice
//! answer key pointing at the same choice when earlier choices are removed.

use uuid::Uuid;

use crate::entities::{Question, QuestionKind, Quiz, QuizPatch};
use crate::enums::{AssignmentGroup, QuestionType, QuizType, ShowCorrectAnswers};
use crate::errors::CoreError;
use crate::grading;

/// Minutes used when a time limit is switched on without a value.
pub const DEFAULT_TIME_LIMIT: u32 = 20;

pub const MIN_CHOICES: usize = 2;
pub const MIN_POSSIBLE_ANSWERS: usize = 1;

#[must_use]
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// A fresh, unpublished quiz for `course`.
#[must_use]
pub fn new_quiz(course: &str) -> Quiz {
    Quiz {
        id: new_id(),
        title: "New Quiz".to_string(),
        course: course.to_string(),
        quiz_type: QuizType::GradedQuiz,
        assignment_group: AssignmentGroup::Quizzes,
        shuffle_answers: true,
        time_limit: DEFAULT_TIME_LIMIT,
        multiple_attempts: false,
        how_many_attempts: 1,
        show_correct_answers: ShowCorrectAnswers::Immediately.as_str().to_string(),
        one_question_at_a_time: true,
        published: false,
        points: 0.0,
        ..Quiz::default()
    }
}

/// Answer key template for a question variant.
#[must_use]
pub fn template_kind(question_type: QuestionType) -> QuestionKind {
    match question_type {
        QuestionType::MultipleChoice => QuestionKind::MultipleChoice {
            choices: (1..=4).map(|n| format!("Option {n}")).collect(),
            correct_answer: 0,
        },
        QuestionType::TrueFalse => QuestionKind::TrueFalse {
            correct_answer: false,
        },
        QuestionType::FillInBlank => QuestionKind::FillInBlank {
            possible_answers: vec![String::new()],
        },
    }
}

/// A new question of `question_type` attached to `quiz`.
#[must_use]
pub fn new_question(question_type: QuestionType, quiz: &str, course: &str) -> Question {
    Question {
        id: new_id(),
        quiz: quiz.to_string(),
        course: course.to_string(),
        title: "New Question".to_string(),
        prompt: "Enter your question here".to_string(),
        points: 1.0,
        kind: template_kind(question_type),
    }
}

/// Switch a question to another variant, replacing its answer key with the
/// template. No-op if the variant is unchanged.
pub fn change_type(question: &mut Question, question_type: QuestionType) {
    if question.question_type() != question_type {
        question.kind = template_kind(question_type);
    }
}

fn wrong_variant(question: &Question, expected: QuestionType) -> CoreError {
    CoreError::Validation(format!(
        "question '{}' is {}, not {expected}",
        question.id,
        question.question_type()
    ))
}

/// Append a choice.
///
/// # Errors
///
/// Returns [`CoreError::Validation`] for non multiple-choice questions.
pub fn add_choice(question: &mut Question, text: &str) -> Result<(), CoreError> {
    match &mut question.kind {
        QuestionKind::MultipleChoice { choices, .. } => {
            choices.push(text.to_string());
            Ok(())
        }
        _ => Err(wrong_variant(question, QuestionType::MultipleChoice)),
    }
}

/// Remove choice `index`, keeping the answer key on the same choice.
///
/// Removing the correct choice resets the key to the first choice.
///
/// # Errors
///
/// Returns [`CoreError::Validation`] for non multiple-choice questions, an
/// out-of-range index, or when only [`MIN_CHOICES`] remain.
pub fn remove_choice(question: &mut Question, index: usize) -> Result<(), CoreError> {
    let QuestionKind::MultipleChoice {
        choices,
        correct_answer,
    } = &mut question.kind
    else {
        return Err(wrong_variant(question, QuestionType::MultipleChoice));
    };
    if choices.len() <= MIN_CHOICES {
        return Err(CoreError::Validation(format!(
            "a multiple-choice question needs at least {MIN_CHOICES} choices"
        )));
    }
    if index >= choices.len() {
        return Err(CoreError::Validation(format!(
            "choice {} does not exist",
            index + 1
        )));
    }
    choices.remove(index);
    if *correct_answer == index {
        *correct_answer = 0;
    } else if *correct_answer > index {
        *correct_answer -= 1;
    }
    Ok(())
}

/// Append an accepted fill-in-blank answer.
///
/// # Errors
///
/// Returns [`CoreError::Validation`] for non fill-in-blank questions.
pub fn add_possible_answer(question: &mut Question, text: &str) -> Result<(), CoreError> {
    match &mut question.kind {
        QuestionKind::FillInBlank { possible_answers } => {
            possible_answers.push(text.to_string());
            Ok(())
        }
        _ => Err(wrong_variant(question, QuestionType::FillInBlank)),
    }
}

/// Remove accepted answer `index`.
///
/// # Errors
///
/// Returns [`CoreError::Validation`] for non fill-in-blank questions, an
/// out-of-range index, or when only one answer remains.
pub fn remove_possible_answer(question: &mut Question, index: usize) -> Result<(), CoreError> {
    let QuestionKind::FillInBlank { possible_answers } = &mut question.kind else {
        return Err(wrong_variant(question, QuestionType::FillInBlank));
    };
    if possible_answers.len() <= MIN_POSSIBLE_ANSWERS {
        return Err(CoreError::Validation(
            "a fill-in-blank question needs at least one accepted answer".to_string(),
        ));
    }
    if index >= possible_answers.len() {
        return Err(CoreError::Validation(format!(
            "answer {} does not exist",
            index + 1
        )));
    }
    possible_answers.remove(index);
    Ok(())
}

/// Check that a question can be saved.
///
/// # Errors
///
/// Returns [`CoreError::Validation`] when the multiple-choice key points at a
/// missing or blank choice, or a fill-in-blank question has no non-blank
/// accepted answer.
pub fn validate_question(question: &Question) -> Result<(), CoreError> {
    match &question.kind {
        QuestionKind::MultipleChoice {
            choices,
            correct_answer,
        } => {
            if choices.len() < MIN_CHOICES {
                return Err(CoreError::Validation(format!(
                    "a multiple-choice question needs at least {MIN_CHOICES} choices"
                )));
            }
            match choices.get(*correct_answer) {
                Some(choice) if !choice.trim().is_empty() => Ok(()),
                _ => Err(CoreError::Validation(
                    "select a non-empty correct choice".to_string(),
                )),
            }
        }
        QuestionKind::TrueFalse { .. } => Ok(()),
        QuestionKind::FillInBlank { possible_answers } => {
            if possible_answers.iter().any(|a| !a.trim().is_empty()) {
                Ok(())
            } else {
                Err(CoreError::Validation(
                    "add at least one accepted answer".to_string(),
                ))
            }
        }
    }
}

/// Sum of question points.
#[must_use]
pub fn total_points(questions: &[Question]) -> f64 {
    grading::round_points(questions.iter().map(|q| q.points).sum())
}

/// Turn the time limit on or off.
///
/// Enabling without explicit minutes uses [`DEFAULT_TIME_LIMIT`]; disabling
/// stores zero.
pub fn set_time_limit(patch: &mut QuizPatch, enabled: bool, minutes: Option<u32>) {
    patch.time_limit = Some(if enabled {
        match minutes {
            Some(m) if m > 0 => m,
            _ => DEFAULT_TIME_LIMIT,
        }
    } else {
        0
    });
}
