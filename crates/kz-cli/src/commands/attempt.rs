mod latest;
mod list;
mod results;
mod status;
mod take;
mod update;

use anyhow::bail;
use kz_core::entities::{Question, Quiz, QuizAttempt};
use kz_core::session::{AttemptPhase, AttemptSession};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AttemptCommands;
use crate::context::AppContext;
use crate::progress::with_spinner;

/// Handle `kambaz attempt`.
pub async fn handle(
    action: &AttemptCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AttemptCommands::Take { quiz, answers } => {
            take::run(quiz, answers.as_deref(), ctx, flags).await
        }
        AttemptCommands::List { quiz, student } => {
            list::run(quiz, student.as_deref(), ctx, flags).await
        }
        AttemptCommands::Latest { quiz, student } => {
            latest::run(quiz, student.as_deref(), ctx, flags).await
        }
        AttemptCommands::Results {
            quiz,
            attempt,
            student,
        } => results::run(quiz, attempt.as_deref(), student.as_deref(), ctx, flags).await,
        AttemptCommands::Status { quiz } => status::run(quiz, ctx, flags).await,
        AttemptCommands::Update {
            quiz,
            id,
            answers,
            complete,
        } => update::run(quiz, id, answers.as_deref(), *complete, ctx, flags).await,
    }
}

/// Fetch a quiz and its questions.
pub async fn load_quiz(
    ctx: &AppContext,
    course: &str,
    quiz_id: &str,
) -> Result<(Quiz, Vec<Question>), kz_client::ClientError> {
    with_spinner("Loading quiz", async {
        let quiz = ctx.client.get_quiz(course, quiz_id).await?;
        let questions = ctx.client.list_questions(course, quiz_id).await?;
        Ok::<_, kz_client::ClientError>((quiz, questions))
    })
    .await
}

/// Attempts a student has taken, treating a failed lookup as none.
///
/// The backend answers 404 before the first attempt exists, and it still
/// enforces the attempt limit on submit.
pub fn attempts_or_none(
    loaded: Result<Vec<QuizAttempt>, kz_client::ClientError>,
    quiz_id: &str,
) -> Vec<QuizAttempt> {
    loaded.unwrap_or_else(|error| {
        tracing::warn!(%error, quiz = %quiz_id, "failed to load attempts, assuming none");
        Vec::new()
    })
}

/// Move a loading `session` to ready with the given quiz data, or fail with
/// the message the session ended up in.
pub fn load_session(
    session: &mut AttemptSession,
    loaded: Result<(Quiz, Vec<Question>), kz_client::ClientError>,
) -> anyhow::Result<()> {
    match loaded {
        Ok((quiz, questions)) => session.ready(quiz, questions)?,
        Err(error) => session.fail(format!("request failed: {error}"))?,
    }
    if session.phase() == AttemptPhase::Error {
        bail!("{}", session.error().unwrap_or("quiz could not be loaded"));
    }
    Ok(())
}
