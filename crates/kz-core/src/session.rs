//! Client state machine for taking (or previewing) a quiz.
//!
//! ```text
//! loading → error
//!         → ready → in_progress → submitted
//!                       ↑  │
//!                       └──┘ submit failed (error banner, no retry)
//! ```
//!
//! In progress, the session holds one answer per question id and, for timed
//! graded attempts, a countdown that forces submission when it reaches zero.
//! Navigation only changes which question is displayed.
//!
//! A preview session grades locally with [`crate::grading`] instead of
//! submitting, never runs a countdown, and can be reset after submission.

use std::collections::BTreeMap;
use std::fmt;

use crate::entities::{
    AnswerValue, AttemptSubmission, Question, QuestionKind, Quiz, QuizAttempt, SubmittedAnswer,
};
use crate::errors::CoreError;
use crate::grading::{self, PreviewScore};

// ---------------------------------------------------------------------------
// Phase
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttemptPhase {
    Loading,
    Error,
    Ready,
    InProgress,
    Submitted,
}

impl AttemptPhase {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Error => "error",
            Self::Ready => "ready",
            Self::InProgress => "in_progress",
            Self::Submitted => "submitted",
        }
    }
}

impl fmt::Display for AttemptPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Graded attempt against the backend, or local faculty preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionKind {
    Attempt,
    Preview,
}

/// How questions are laid out while in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    OneAtATime,
    AllAtOnce,
}

// ---------------------------------------------------------------------------
// Countdown
// ---------------------------------------------------------------------------

/// Whole-second countdown driven by an external one-second tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    remaining: u64,
}

impl Countdown {
    #[must_use]
    pub const fn new(seconds: u64) -> Self {
        Self { remaining: seconds }
    }

    #[must_use]
    pub const fn remaining(&self) -> u64 {
        self.remaining
    }

    #[must_use]
    pub const fn is_expired(&self) -> bool {
        self.remaining == 0
    }

    /// Advance one second. Returns `true` once the countdown has hit zero.
    pub const fn tick(&mut self) -> bool {
        self.remaining = self.remaining.saturating_sub(1);
        self.is_expired()
    }

    /// Under a minute left.
    #[must_use]
    pub const fn is_urgent(&self) -> bool {
        self.remaining < 60
    }
}

/// Render seconds as `MM:SS`, or `--:--` when there is no timer.
#[must_use]
pub fn format_time(seconds: Option<u64>) -> String {
    match seconds {
        None => "--:--".to_string(),
        Some(total) => format!("{:02}:{:02}", total / 60, total % 60),
    }
}

/// Result of advancing the countdown by one second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Untimed,
    Running(u64),
    Expired,
}

// ---------------------------------------------------------------------------
// AttemptSession
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct AttemptSession {
    kind: SessionKind,
    phase: AttemptPhase,
    quiz: Option<Quiz>,
    questions: Vec<Question>,
    answers: BTreeMap<String, AnswerValue>,
    current: usize,
    countdown: Option<Countdown>,
    error: Option<String>,
    result: Option<QuizAttempt>,
    preview: Option<PreviewScore>,
}

impl AttemptSession {
    /// A graded attempt, starting in `loading`.
    #[must_use]
    pub const fn attempt() -> Self {
        Self::with_kind(SessionKind::Attempt)
    }

    /// A faculty preview, starting in `loading`.
    #[must_use]
    pub const fn preview() -> Self {
        Self::with_kind(SessionKind::Preview)
    }

    const fn with_kind(kind: SessionKind) -> Self {
        Self {
            kind,
            phase: AttemptPhase::Loading,
            quiz: None,
            questions: Vec::new(),
            answers: BTreeMap::new(),
            current: 0,
            countdown: None,
            error: None,
            result: None,
            preview: None,
        }
    }

    fn transition_error(&self, to: AttemptPhase) -> CoreError {
        CoreError::InvalidTransition {
            entity_type: "attempt".to_string(),
            from: self.phase.to_string(),
            to: to.to_string(),
        }
    }

    fn expect_phase(&self, expected: AttemptPhase, to: AttemptPhase) -> Result<(), CoreError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(self.transition_error(to))
        }
    }

    // -- loading ------------------------------------------------------------

    /// Loading failed (network error, missing quiz).
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidTransition`] unless the session is loading.
    pub fn fail(&mut self, message: impl Into<String>) -> Result<(), CoreError> {
        self.expect_phase(AttemptPhase::Loading, AttemptPhase::Error)?;
        self.error = Some(message.into());
        self.phase = AttemptPhase::Error;
        Ok(())
    }

    /// Quiz and questions arrived.
    ///
    /// Graded attempts on unpublished quizzes, and quizzes without questions,
    /// land in `error` instead of `ready`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidTransition`] unless the session is loading.
    pub fn ready(&mut self, quiz: Quiz, questions: Vec<Question>) -> Result<(), CoreError> {
        self.expect_phase(AttemptPhase::Loading, AttemptPhase::Ready)?;

        let blocked = if self.kind == SessionKind::Attempt && !quiz.published {
            Some("This quiz is not available.")
        } else if questions.is_empty() {
            Some("No questions found for this quiz")
        } else {
            None
        };

        self.answers = initial_answers(&questions);
        self.quiz = Some(quiz);
        self.questions = questions;

        if let Some(message) = blocked {
            self.error = Some(message.to_string());
            self.phase = AttemptPhase::Error;
        } else {
            self.phase = AttemptPhase::Ready;
        }
        Ok(())
    }

    /// Begin answering. Starts the countdown for timed graded attempts.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidTransition`] unless the session is ready.
    pub fn start(&mut self) -> Result<(), CoreError> {
        self.expect_phase(AttemptPhase::Ready, AttemptPhase::InProgress)?;
        self.countdown = match self.kind {
            SessionKind::Attempt => self
                .quiz
                .as_ref()
                .and_then(Quiz::time_limit_secs)
                .map(Countdown::new),
            SessionKind::Preview => None,
        };
        self.current = 0;
        self.phase = AttemptPhase::InProgress;
        Ok(())
    }

    // -- answering ----------------------------------------------------------

    /// Record an answer for `question_id`.
    ///
    /// # Errors
    ///
    /// - [`CoreError::InvalidTransition`] unless in progress
    /// - [`CoreError::NotFound`] for an unknown question id
    /// - [`CoreError::Validation`] if the value does not fit the variant
    pub fn set_answer(&mut self, question_id: &str, value: AnswerValue) -> Result<(), CoreError> {
        self.expect_phase(AttemptPhase::InProgress, AttemptPhase::InProgress)?;
        let question = self
            .questions
            .iter()
            .find(|q| q.id == question_id)
            .ok_or_else(|| CoreError::NotFound {
                entity_type: "question".to_string(),
                id: question_id.to_string(),
            })?;
        check_answer_shape(question, &value)?;
        self.answers.insert(question_id.to_string(), value);
        Ok(())
    }

    /// Move to the next question. Returns `false` at the last one.
    pub fn next(&mut self) -> bool {
        if self.current + 1 < self.questions.len() {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Move to the previous question. Returns `false` at the first one.
    pub const fn prev(&mut self) -> bool {
        if self.current > 0 {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    /// Jump to a zero-based question index. Returns `false` if out of range.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index < self.questions.len() {
            self.current = index;
            true
        } else {
            false
        }
    }

    /// Advance the countdown by one second.
    ///
    /// [`TickOutcome::Expired`] means the caller must submit now.
    pub fn tick(&mut self) -> TickOutcome {
        if self.phase != AttemptPhase::InProgress {
            return TickOutcome::Untimed;
        }
        match self.countdown.as_mut() {
            None => TickOutcome::Untimed,
            Some(countdown) => {
                if countdown.tick() {
                    TickOutcome::Expired
                } else {
                    TickOutcome::Running(countdown.remaining())
                }
            }
        }
    }

    // -- submission ---------------------------------------------------------

    /// Every answer in question order, ready to send.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidTransition`] unless in progress.
    pub fn submission(&self) -> Result<AttemptSubmission, CoreError> {
        self.expect_phase(AttemptPhase::InProgress, AttemptPhase::Submitted)?;
        let answers = self
            .questions
            .iter()
            .map(|question| SubmittedAnswer {
                question_id: question.id.clone(),
                answer: self
                    .answers
                    .get(&question.id)
                    .cloned()
                    .unwrap_or_else(|| question.initial_answer()),
            })
            .collect();
        Ok(AttemptSubmission { answers })
    }

    /// The backend accepted and graded the submission.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidTransition`] unless in progress.
    pub fn submit_succeeded(&mut self, attempt: QuizAttempt) -> Result<(), CoreError> {
        self.expect_phase(AttemptPhase::InProgress, AttemptPhase::Submitted)?;
        self.result = Some(attempt);
        self.error = None;
        self.countdown = None;
        self.phase = AttemptPhase::Submitted;
        Ok(())
    }

    /// The submission request failed. The session stays in progress.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidTransition`] unless in progress.
    pub fn submit_failed(&mut self, message: impl Into<String>) -> Result<(), CoreError> {
        self.expect_phase(AttemptPhase::InProgress, AttemptPhase::InProgress)?;
        self.error = Some(message.into());
        Ok(())
    }

    /// Grade locally and finish a preview run.
    ///
    /// # Errors
    ///
    /// - [`CoreError::Validation`] for graded attempts, which must go through
    ///   the backend
    /// - [`CoreError::InvalidTransition`] unless in progress
    pub fn grade_preview(&mut self) -> Result<&PreviewScore, CoreError> {
        if self.kind != SessionKind::Preview {
            return Err(CoreError::Validation(
                "graded attempts are scored by the server".to_string(),
            ));
        }
        self.expect_phase(AttemptPhase::InProgress, AttemptPhase::Submitted)?;
        let score = grading::grade_preview(&self.questions, &self.answers);
        self.phase = AttemptPhase::Submitted;
        Ok(self.preview.insert(score))
    }

    /// Clear a finished preview back to fresh answers at question one.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidTransition`] unless this is a submitted
    /// preview.
    pub fn reset(&mut self) -> Result<(), CoreError> {
        if self.kind != SessionKind::Preview || self.phase != AttemptPhase::Submitted {
            return Err(self.transition_error(AttemptPhase::InProgress));
        }
        self.answers = initial_answers(&self.questions);
        self.preview = None;
        self.error = None;
        self.current = 0;
        self.phase = AttemptPhase::InProgress;
        Ok(())
    }

    // -- accessors ----------------------------------------------------------

    #[must_use]
    pub const fn kind(&self) -> SessionKind {
        self.kind
    }

    #[must_use]
    pub const fn phase(&self) -> AttemptPhase {
        self.phase
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub const fn quiz(&self) -> Option<&Quiz> {
        self.quiz.as_ref()
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub const fn answers(&self) -> &BTreeMap<String, AnswerValue> {
        &self.answers
    }

    #[must_use]
    pub fn answer_for(&self, question_id: &str) -> Option<&AnswerValue> {
        self.answers.get(question_id)
    }

    #[must_use]
    pub const fn result(&self) -> Option<&QuizAttempt> {
        self.result.as_ref()
    }

    #[must_use]
    pub const fn preview_score(&self) -> Option<&PreviewScore> {
        self.preview.as_ref()
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.current
    }

    /// 1-based position and question count, for progress display.
    #[must_use]
    pub fn position(&self) -> (usize, usize) {
        (self.current + 1, self.questions.len())
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.current + 1 >= self.questions.len()
    }

    #[must_use]
    pub fn display_mode(&self) -> DisplayMode {
        match &self.quiz {
            Some(quiz) if quiz.one_question_at_a_time => DisplayMode::OneAtATime,
            _ => DisplayMode::AllAtOnce,
        }
    }

    #[must_use]
    pub const fn countdown(&self) -> Option<Countdown> {
        self.countdown
    }

    /// Remaining time as `MM:SS`.
    #[must_use]
    pub fn time_left(&self) -> String {
        format_time(self.countdown.map(|c| c.remaining()))
    }
}

fn initial_answers(questions: &[Question]) -> BTreeMap<String, AnswerValue> {
    questions
        .iter()
        .map(|q| (q.id.clone(), q.initial_answer()))
        .collect()
}

fn check_answer_shape(question: &Question, value: &AnswerValue) -> Result<(), CoreError> {
    let fits = match (&question.kind, value) {
        (QuestionKind::MultipleChoice { choices, .. }, AnswerValue::Index(index)) => {
            *index == -1 || usize::try_from(*index).is_ok_and(|i| i < choices.len())
        }
        (QuestionKind::TrueFalse { .. }, AnswerValue::Bool(_))
        | (QuestionKind::FillInBlank { .. }, AnswerValue::Text(_)) => true,
        _ => false,
    };
    if fits {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "answer '{value}' does not fit {} question '{}'",
            question.question_type(),
            question.id
        )))
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    use super::*;

    fn quiz(published: bool, time_limit: u32) -> Quiz {
        Quiz {
            id: "Q1".into(),
            title: "Quiz".into(),
            course: "C1".into(),
            published,
            time_limit,
            one_question_at_a_time: true,
            ..Quiz::default()
        }
    }

    fn questions() -> Vec<Question> {
        vec![
            Question {
                id: "q1".into(),
                quiz: "Q1".into(),
                course: "C1".into(),
                title: String::new(),
                prompt: "Pick".into(),
                points: 2.0,
                kind: QuestionKind::MultipleChoice {
                    choices: vec!["a".into(), "b".into()],
                    correct_answer: 1,
                },
            },
            Question {
                id: "q2".into(),
                quiz: "Q1".into(),
                course: "C1".into(),
                title: String::new(),
                prompt: "Sky is blue".into(),
                points: 1.0,
                kind: QuestionKind::TrueFalse {
                    correct_answer: true,
                },
            },
        ]
    }

    fn attempt_result() -> QuizAttempt {
        QuizAttempt {
            id: "A1".into(),
            quiz: "Q1".into(),
            student: "U1".into(),
            course: "C1".into(),
            attempt_number: 1,
            started_at: Utc::now(),
            submitted_at: Some(Utc::now()),
            answers: vec![],
            score: 3.0,
            total_points: 3.0,
            is_completed: true,
        }
    }

    fn in_progress(time_limit: u32) -> AttemptSession {
        let mut session = AttemptSession::attempt();
        session.ready(quiz(true, time_limit), questions()).unwrap();
        session.start().unwrap();
        session
    }

    #[test]
    fn happy_path_reaches_submitted() {
        let mut session = AttemptSession::attempt();
        assert_eq!(session.phase(), AttemptPhase::Loading);
        session.ready(quiz(true, 0), questions()).unwrap();
        assert_eq!(session.phase(), AttemptPhase::Ready);
        session.start().unwrap();
        session.set_answer("q1", AnswerValue::Index(1)).unwrap();
        let body = session.submission().unwrap();
        assert_eq!(body.answers.len(), 2);
        assert_eq!(body.answers[0].answer, AnswerValue::Index(1));
        assert_eq!(body.answers[1].answer, AnswerValue::Bool(false));
        session.submit_succeeded(attempt_result()).unwrap();
        assert_eq!(session.phase(), AttemptPhase::Submitted);
        assert_eq!(session.result().unwrap().score, 3.0);
    }

    #[test]
    fn unpublished_quiz_is_an_error() {
        let mut session = AttemptSession::attempt();
        session.ready(quiz(false, 0), questions()).unwrap();
        assert_eq!(session.phase(), AttemptPhase::Error);
        assert_eq!(session.error(), Some("This quiz is not available."));
    }

    #[test]
    fn preview_ignores_publication() {
        let mut session = AttemptSession::preview();
        session.ready(quiz(false, 10), questions()).unwrap();
        assert_eq!(session.phase(), AttemptPhase::Ready);
        session.start().unwrap();
        assert!(session.countdown().is_none());
    }

    #[test]
    fn load_failure_is_terminal() {
        let mut session = AttemptSession::attempt();
        session.fail("network down").unwrap();
        assert_eq!(session.phase(), AttemptPhase::Error);
        assert!(session.start().is_err());
    }

    #[test]
    fn failed_submit_stays_in_progress() {
        let mut session = in_progress(0);
        session.submit_failed("request failed").unwrap();
        assert_eq!(session.phase(), AttemptPhase::InProgress);
        assert_eq!(session.error(), Some("request failed"));
        session.submit_succeeded(attempt_result()).unwrap();
        assert!(session.error().is_none());
    }

    #[test]
    fn navigation_is_bounded() {
        let mut session = in_progress(0);
        assert!(!session.prev());
        assert!(session.next());
        assert_eq!(session.position(), (2, 2));
        assert!(session.is_last());
        assert!(!session.next());
        assert!(session.prev());
        assert_eq!(session.current_question().unwrap().id, "q1");
        assert!(!session.go_to(5));
    }

    #[test]
    fn navigation_does_not_touch_answers() {
        let mut session = in_progress(0);
        session.set_answer("q2", AnswerValue::Bool(true)).unwrap();
        session.next();
        session.prev();
        assert_eq!(session.answer_for("q2"), Some(&AnswerValue::Bool(true)));
    }

    #[test]
    fn answer_shape_is_checked() {
        let mut session = in_progress(0);
        assert!(matches!(
            session.set_answer("q1", AnswerValue::Index(2)),
            Err(CoreError::Validation(_))
        ));
        assert!(matches!(
            session.set_answer("q2", AnswerValue::Text("yes".into())),
            Err(CoreError::Validation(_))
        ));
        assert!(matches!(
            session.set_answer("nope", AnswerValue::Bool(true)),
            Err(CoreError::NotFound { .. })
        ));
    }

    #[test]
    fn countdown_expires_at_zero() {
        let mut session = in_progress(1);
        assert_eq!(session.time_left(), "01:00");
        for _ in 0..59 {
            assert!(matches!(session.tick(), TickOutcome::Running(_)));
        }
        assert_eq!(session.time_left(), "00:01");
        assert!(session.countdown().unwrap().is_urgent());
        assert_eq!(session.tick(), TickOutcome::Expired);
    }

    #[test]
    fn untimed_quiz_never_expires() {
        let mut session = in_progress(0);
        assert_eq!(session.tick(), TickOutcome::Untimed);
        assert_eq!(session.time_left(), "--:--");
    }

    #[test]
    fn graded_attempts_cannot_grade_locally() {
        let mut session = in_progress(0);
        assert!(session.grade_preview().is_err());
    }

    #[test]
    fn preview_grades_and_resets() {
        let mut session = AttemptSession::preview();
        session.ready(quiz(true, 0), questions()).unwrap();
        session.start().unwrap();
        session.set_answer("q1", AnswerValue::Index(1)).unwrap();
        let score = session.grade_preview().unwrap().clone();
        assert_eq!(score.score, 2.0);
        assert_eq!(score.total, 3.0);
        assert_eq!(score.percentage, 67);
        assert_eq!(session.phase(), AttemptPhase::Submitted);

        session.reset().unwrap();
        assert_eq!(session.phase(), AttemptPhase::InProgress);
        assert_eq!(session.answer_for("q1"), Some(&AnswerValue::NO_CHOICE));
        assert!(session.preview_score().is_none());
    }

    #[test]
    fn format_time_pads() {
        assert_eq!(format_time(Some(605)), "10:05");
        assert_eq!(format_time(Some(0)), "00:00");
        assert_eq!(format_time(None), "--:--");
    }

    #[test]
    fn display_mode_follows_quiz() {
        let mut session = AttemptSession::attempt();
        let mut q = quiz(true, 0);
        q.one_question_at_a_time = false;
        session.ready(q, questions()).unwrap();
        assert_eq!(session.display_mode(), DisplayMode::AllAtOnce);
    }
}
