//! Configuration enums for quizzes, questions and users.
//!
//! Wire values follow the backend exactly: quiz types and assignment groups
//! are human-readable labels (`"Graded Quiz"`), question variants are
//! kebab-case (`"multiple-choice"`), roles are upper-case (`"FACULTY"`).
//!
//! Every enum also parses leniently from CLI input via [`FromStr`]: case is
//! ignored and `-`/`_` are treated as spaces, so `graded-quiz`, `GRADED_QUIZ`
//! and `Graded Quiz` are all accepted.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

fn normalize(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|ch| if ch == '-' || ch == '_' { ' ' } else { ch })
        .collect::<String>()
        .to_ascii_lowercase()
}

fn parse_label<T: Copy>(
    raw: &str,
    field: &str,
    all: &[T],
    label: fn(T) -> &'static str,
) -> Result<T, CoreError> {
    let wanted = normalize(raw);
    all.iter()
        .copied()
        .find(|candidate| normalize(label(*candidate)) == wanted)
        .ok_or_else(|| {
            let options = all.iter().map(|v| label(*v)).collect::<Vec<_>>().join(", ");
            CoreError::Validation(format!("invalid {field} '{raw}' (expected one of: {options})"))
        })
}

// ---------------------------------------------------------------------------
// QuizType
// ---------------------------------------------------------------------------

/// Kind of quiz, as configured by faculty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum QuizType {
    #[default]
    #[serde(rename = "Graded Quiz")]
    GradedQuiz,
    #[serde(rename = "Practice Quiz")]
    PracticeQuiz,
    #[serde(rename = "Graded Survey")]
    GradedSurvey,
    #[serde(rename = "Ungraded Survey")]
    UngradedSurvey,
}

impl QuizType {
    pub const ALL: [Self; 4] = [
        Self::GradedQuiz,
        Self::PracticeQuiz,
        Self::GradedSurvey,
        Self::UngradedSurvey,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GradedQuiz => "Graded Quiz",
            Self::PracticeQuiz => "Practice Quiz",
            Self::GradedSurvey => "Graded Survey",
            Self::UngradedSurvey => "Ungraded Survey",
        }
    }
}

impl fmt::Display for QuizType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuizType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label(s, "quiz type", &Self::ALL, Self::as_str)
    }
}

// ---------------------------------------------------------------------------
// AssignmentGroup
// ---------------------------------------------------------------------------

/// Gradebook group a quiz counts toward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum AssignmentGroup {
    #[default]
    Quizzes,
    Exams,
    Assignments,
    Project,
}

impl AssignmentGroup {
    pub const ALL: [Self; 4] = [Self::Quizzes, Self::Exams, Self::Assignments, Self::Project];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Quizzes => "Quizzes",
            Self::Exams => "Exams",
            Self::Assignments => "Assignments",
            Self::Project => "Project",
        }
    }
}

impl fmt::Display for AssignmentGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssignmentGroup {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label(s, "assignment group", &Self::ALL, Self::as_str)
    }
}

// ---------------------------------------------------------------------------
// ShowCorrectAnswers
// ---------------------------------------------------------------------------

/// Known values of a quiz's `showCorrectAnswers` setting.
///
/// The wire field is a free-form string; this enum is the set the authoring
/// commands offer. Visibility checks go through
/// [`Quiz::shows_correct_answers`](crate::entities::Quiz::shows_correct_answers)
/// so unknown strings keep working.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShowCorrectAnswers {
    Immediately,
    AfterDueDate,
    Never,
}

impl ShowCorrectAnswers {
    pub const ALL: [Self; 3] = [Self::Immediately, Self::AfterDueDate, Self::Never];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Immediately => "Immediately",
            Self::AfterDueDate => "After Due Date",
            Self::Never => "Never",
        }
    }
}

impl fmt::Display for ShowCorrectAnswers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShowCorrectAnswers {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label(s, "show correct answers", &Self::ALL, Self::as_str)
    }
}

// ---------------------------------------------------------------------------
// QuestionType
// ---------------------------------------------------------------------------

/// Question variant discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionType {
    MultipleChoice,
    TrueFalse,
    FillInBlank,
}

impl QuestionType {
    pub const ALL: [Self; 3] = [Self::MultipleChoice, Self::TrueFalse, Self::FillInBlank];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MultipleChoice => "multiple-choice",
            Self::TrueFalse => "true-false",
            Self::FillInBlank => "fill-in-blank",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestionType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "mc" => Ok(Self::MultipleChoice),
            "tf" => Ok(Self::TrueFalse),
            "fib" | "blank" => Ok(Self::FillInBlank),
            _ => parse_label(s, "question type", &Self::ALL, Self::as_str),
        }
    }
}

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Account role. Drives client-side gating of authoring and attempt flows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    #[default]
    Student,
    Faculty,
    Ta,
    Admin,
}

impl Role {
    pub const ALL: [Self; 4] = [Self::Student, Self::Faculty, Self::Ta, Self::Admin];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Student => "STUDENT",
            Self::Faculty => "FACULTY",
            Self::Ta => "TA",
            Self::Admin => "ADMIN",
        }
    }

    /// Quiz and question authoring, publishing and preview.
    #[must_use]
    pub const fn can_author(self) -> bool {
        matches!(self, Self::Faculty)
    }

    /// Taking graded attempts.
    #[must_use]
    pub const fn can_attempt(self) -> bool {
        matches!(self, Self::Student)
    }

    /// Require authoring rights for `action`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Forbidden`] for any role other than faculty.
    pub fn require_author(self, action: &str) -> Result<(), CoreError> {
        if self.can_author() {
            Ok(())
        } else {
            Err(CoreError::Forbidden {
                action: action.to_string(),
                required: Self::Faculty.as_str().to_string(),
            })
        }
    }

    /// Require student rights for `action`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Forbidden`] for any role other than student.
    pub fn require_student(self, action: &str) -> Result<(), CoreError> {
        if self.can_attempt() {
            Ok(())
        } else {
            Err(CoreError::Forbidden {
                action: action.to_string(),
                required: Self::Student.as_str().to_string(),
            })
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label(s, "role", &Self::ALL, Self::as_str)
    }
}
