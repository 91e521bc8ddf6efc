use std::io::Write;

use anyhow::{Context, bail};
use chrono::{DateTime, Utc};
use kz_core::entities::{Quiz, QuizAttempt};
use kz_core::policy;
use kz_core::results::ResultsView;
use kz_core::session::AttemptSession;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_answer_sheet;
use crate::commands::shared::runner::{self, Outcome};
use crate::context::AppContext;
use crate::output::results::output_results;
use crate::progress::with_spinner;

/// Take a quiz: interactively, or by submitting a JSON answer sheet.
pub async fn run(
    quiz_id: &str,
    answers: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let user = ctx.require_student("take quizzes")?;
    let course = ctx.course(flags)?;
    let sheet = answers.map(parse_answer_sheet).transpose()?;

    let mut session = AttemptSession::attempt();
    let loaded = super::load_quiz(ctx, &course, quiz_id).await;
    if let Ok((quiz, _)) = &loaded
        && quiz.published
    {
        let attempts = ctx.client.list_attempts(&course, quiz_id, &user.id).await;
        check_can_start(quiz, attempts, Utc::now())?;
    }
    super::load_session(&mut session, loaded)?;
    session.start()?;

    let attempt = if let Some(sheet) = sheet {
        for (question_id, value) in sheet {
            session.set_answer(&question_id, value)?;
        }
        let attempt = submit(ctx, &course, quiz_id, &session).await?;
        session.submit_succeeded(attempt.clone())?;
        attempt
    } else {
        interactive(ctx, &course, quiz_id, &mut session).await?
    };

    let quiz = session.quiz().context("quiz missing after submission")?;
    let view = ResultsView::build(quiz, session.questions(), &attempt, user.role);
    output_results(&view, flags.format)
}

/// Refuse to start outside the availability window or past the attempt
/// limit. Advisory: a failed attempt lookup lets the student through.
fn check_can_start(
    quiz: &Quiz,
    attempts: Result<Vec<QuizAttempt>, kz_client::ClientError>,
    now: DateTime<Utc>,
) -> anyhow::Result<()> {
    let availability = policy::availability(quiz, now);
    if !availability.is_open() {
        bail!("{availability}");
    }
    let taken = super::attempts_or_none(attempts, &quiz.id).len();
    if !policy::can_take_quiz(quiz, taken) {
        bail!("no attempts left: {taken} of {} used", quiz.attempt_limit());
    }
    Ok(())
}

async fn interactive(
    ctx: &AppContext,
    course: &str,
    quiz_id: &str,
    session: &mut AttemptSession,
) -> anyhow::Result<QuizAttempt> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut out = std::io::stderr();

    if let Some(quiz) = session.quiz() {
        writeln!(
            out,
            "{}: {} questions, time limit {}. Type :h for help.",
            quiz.title,
            session.questions().len(),
            session.time_left()
        )?;
    }

    loop {
        match runner::drive(session, &mut lines, &mut out).await? {
            Outcome::Quit => bail!("attempt abandoned; nothing was submitted"),
            Outcome::Submit { expired } => match submit(ctx, course, quiz_id, session).await {
                Ok(attempt) => {
                    session.submit_succeeded(attempt.clone())?;
                    return Ok(attempt);
                }
                Err(error) => {
                    writeln!(out, "! request failed: {error:#}")?;
                    session.submit_failed(format!("{error:#}"))?;
                    if expired {
                        writeln!(out, "Time is up. Your answers are kept; type :s to try again.")?;
                    }
                }
            },
        }
    }
}

async fn submit(
    ctx: &AppContext,
    course: &str,
    quiz_id: &str,
    session: &AttemptSession,
) -> anyhow::Result<QuizAttempt> {
    let submission = session.submission()?;
    let attempt = with_spinner(
        "Submitting",
        ctx.client.submit_attempt(course, quiz_id, &submission),
    )
    .await?;
    tracing::info!(attempt = %attempt.id, score = attempt.score, "attempt submitted");
    Ok(attempt)
}
