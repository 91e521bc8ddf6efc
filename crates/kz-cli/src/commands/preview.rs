//! `kambaz preview`: faculty run-through graded locally.
//!
//! Nothing is sent to the backend and there is no countdown. After each run
//! the results are printed and the preview can be reset and run again.

use std::io::Write;

use anyhow::Context;
use kz_core::results::ResultsView;
use kz_core::session::AttemptSession;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::PreviewArgs;
use crate::commands::attempt::{load_quiz, load_session};
use crate::commands::shared::parse::parse_answer_sheet;
use crate::commands::shared::runner::{self, Outcome};
use crate::context::AppContext;
use crate::output::results::output_results;

pub async fn handle(
    args: &PreviewArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.require_author("preview quizzes")?;
    let course = ctx.course(flags)?;

    let mut session = AttemptSession::preview();
    load_session(&mut session, load_quiz(ctx, &course, &args.quiz).await)?;
    session.start()?;

    if let Some(raw) = &args.answers {
        for (question_id, value) in parse_answer_sheet(raw)? {
            session.set_answer(&question_id, value)?;
        }
        let view = grade(&mut session)?;
        return output_results(&view, flags.format);
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut out = std::io::stderr();
    writeln!(
        out,
        "Preview of {}. Answers are graded locally and not recorded. Type :h for help.",
        session.quiz().map_or("quiz", |q| q.title.as_str())
    )?;

    loop {
        match runner::drive(&mut session, &mut lines, &mut out).await? {
            Outcome::Quit => return Ok(()),
            Outcome::Submit { .. } => {
                let view = grade(&mut session)?;
                output_results(&view, flags.format)?;
                if !ask_again(&mut lines, &mut out).await? {
                    return Ok(());
                }
                session.reset()?;
            }
        }
    }
}

/// Score the preview and build its always-revealed results view.
fn grade(session: &mut AttemptSession) -> anyhow::Result<ResultsView> {
    let score = session.grade_preview()?.clone();
    let quiz = session.quiz().context("quiz missing after grading")?;
    Ok(ResultsView::from_preview(
        quiz,
        session.questions(),
        session.answers(),
        &score,
    ))
}

async fn ask_again<R, W>(lines: &mut Lines<R>, out: &mut W) -> anyhow::Result<bool>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    write!(out, "Run the preview again? [y/N] ")?;
    out.flush()?;
    let answer = lines.next_line().await?.unwrap_or_default();
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}

#[cfg(test)]
mod tests {
    use kz_core::entities::{AnswerValue, Question, QuestionKind, Quiz};
    use kz_core::session::AttemptPhase;
    use pretty_assertions::assert_eq;

    use super::*;

    fn session() -> AttemptSession {
        let mut session = AttemptSession::preview();
        let questions = vec![
            Question {
                id: "q1".into(),
                quiz: "Q1".into(),
                course: "C1".into(),
                title: String::new(),
                prompt: "Rust is memory safe".into(),
                points: 3.0,
                kind: QuestionKind::TrueFalse {
                    correct_answer: true,
                },
            },
            Question {
                id: "q2".into(),
                quiz: "Q1".into(),
                course: "C1".into(),
                title: String::new(),
                prompt: "Name the borrow checker's language".into(),
                points: 1.0,
                kind: QuestionKind::FillInBlank {
                    possible_answers: vec!["Rust".into()],
                },
            },
        ];
        let quiz = Quiz {
            id: "Q1".into(),
            title: "Draft".into(),
            show_correct_answers: "Never".into(),
            ..Quiz::default()
        };
        session.ready(quiz, questions).expect("ready");
        session.start().expect("start");
        session
    }

    #[test]
    fn preview_always_reveals_breakdown() {
        let mut session = session();
        session.set_answer("q1", AnswerValue::Bool(true)).expect("answer");
        let view = grade(&mut session).expect("grade");
        assert_eq!(view.score, 3.0);
        assert_eq!(view.total, 4.0);
        assert_eq!(view.percentage, 75);
        assert!(view.shows_breakdown());
        assert_eq!(view.rows.len(), 2);
        assert_eq!(session.phase(), AttemptPhase::Submitted);
    }

    #[tokio::test]
    async fn ask_again_accepts_yes() {
        let input: &[u8] = b"Yes\n";
        let mut lines = input.lines();
        let mut out = Vec::new();
        assert!(ask_again(&mut lines, &mut out).await.expect("read"));

        let input: &[u8] = b"";
        let mut lines = input.lines();
        assert!(!ask_again(&mut lines, &mut out).await.expect("read"));
    }
}
