use anyhow::bail;
use kz_core::policy;
use kz_core::results::ResultsView;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::results::output_results;
use crate::progress::with_spinner;

/// Results page for one attempt, defaulting to the latest.
///
/// Students see the per-question breakdown only when the quiz reveals
/// correct answers.
pub async fn run(
    quiz_id: &str,
    attempt_id: Option<&str>,
    student: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let viewer = ctx.role()?;
    let course = ctx.course(flags)?;
    let owner = ctx.attempt_owner(student)?;

    let (quiz, questions) = super::load_quiz(ctx, &course, quiz_id).await?;
    let attempts = with_spinner(
        "Loading attempts",
        ctx.client.list_attempts(&course, quiz_id, &owner),
    )
    .await?;

    let attempt = match attempt_id {
        Some(id) => attempts.iter().find(|a| a.id == id),
        None => policy::latest_attempt(&attempts),
    };
    let Some(attempt) = attempt else {
        match attempt_id {
            Some(id) => bail!("attempt '{id}' not found for this quiz"),
            None => bail!("No attempts found for this quiz."),
        }
    };

    let view = ResultsView::build(&quiz, &questions, attempt, viewer);
    output_results(&view, flags.format)
}
