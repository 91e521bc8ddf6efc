use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::QuestionType;

/// A single answer as typed by a student: choice index, boolean, or text.
///
/// Multiple-choice uses `Index(-1)` for "no selection".
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(untagged)]
pub enum AnswerValue {
    Bool(bool),
    Index(i64),
    Text(String),
}

impl AnswerValue {
    pub const NO_CHOICE: Self = Self::Index(-1);

    /// Whether the value still holds a variant's untouched initial state.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Index(index) => *index < 0,
            Self::Text(text) => text.trim().is_empty(),
            Self::Bool(_) => false,
        }
    }
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Index(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

/// A quiz question: shared fields plus a variant-specific answer key.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub quiz: String,
    #[serde(default)]
    pub course: String,
    #[serde(default)]
    pub title: String,
    /// Prompt text shown to the student.
    #[serde(rename = "question", default)]
    pub prompt: String,
    /// May be fractional.
    #[serde(default)]
    pub points: f64,
    #[serde(flatten)]
    pub kind: QuestionKind,
}

/// Variant-specific answer key, discriminated by the wire `type` field.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "kebab-case", rename_all_fields = "camelCase")]
pub enum QuestionKind {
    MultipleChoice {
        #[serde(default)]
        choices: Vec<String>,
        /// Index into `choices`.
        #[serde(default)]
        correct_answer: usize,
    },
    TrueFalse {
        #[serde(default)]
        correct_answer: bool,
    },
    FillInBlank {
        /// Accepted answers, compared case-insensitively after trimming.
        #[serde(default)]
        possible_answers: Vec<String>,
    },
}

impl Question {
    #[must_use]
    pub const fn question_type(&self) -> QuestionType {
        match self.kind {
            QuestionKind::MultipleChoice { .. } => QuestionType::MultipleChoice,
            QuestionKind::TrueFalse { .. } => QuestionType::TrueFalse,
            QuestionKind::FillInBlank { .. } => QuestionType::FillInBlank,
        }
    }

    /// Value an answer sheet starts with before the student touches it.
    #[must_use]
    pub fn initial_answer(&self) -> AnswerValue {
        match self.kind {
            QuestionKind::MultipleChoice { .. } => AnswerValue::NO_CHOICE,
            QuestionKind::TrueFalse { .. } => AnswerValue::Bool(false),
            QuestionKind::FillInBlank { .. } => AnswerValue::Text(String::new()),
        }
    }

    /// Human-readable answer key for results pages.
    #[must_use]
    pub fn correct_answer_display(&self) -> String {
        match &self.kind {
            QuestionKind::MultipleChoice {
                choices,
                correct_answer,
            } => choices
                .get(*correct_answer)
                .cloned()
                .unwrap_or_else(|| "N/A".to_string()),
            QuestionKind::TrueFalse { correct_answer } => correct_answer.to_string(),
            QuestionKind::FillInBlank { possible_answers } => {
                if possible_answers.is_empty() {
                    "Any acceptable answer".to_string()
                } else {
                    possible_answers.join(" or ")
                }
            }
        }
    }

    /// Render a submitted answer; multiple-choice indexes become choice text.
    #[must_use]
    pub fn answer_display(&self, answer: &AnswerValue) -> String {
        match (&self.kind, answer) {
            (QuestionKind::MultipleChoice { choices, .. }, AnswerValue::Index(index)) => {
                usize::try_from(*index)
                    .ok()
                    .and_then(|i| choices.get(i))
                    .cloned()
                    .unwrap_or_else(|| "(no selection)".to_string())
            }
            _ => answer.to_string(),
        }
    }
}
