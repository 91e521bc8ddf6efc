use crate::cli::GlobalFlags;
use crate::cli::subcommands::quiz::QuizFieldArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::with_spinner;

/// Fetch the quiz, apply the given settings, and save the whole record.
pub async fn run(
    id: &str,
    fields: &QuizFieldArgs,
    publish: bool,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.require_author("edit quizzes")?;
    let course = ctx.course(flags)?;
    let patch = fields.to_patch()?;
    if patch.is_empty() && !publish {
        anyhow::bail!("nothing to update; pass at least one setting or --publish");
    }

    let mut quiz = with_spinner("Loading quiz", ctx.client.get_quiz(&course, id)).await?;
    if !patch.is_empty() {
        quiz.apply(&patch);
        with_spinner("Saving quiz", ctx.client.update_quiz(&course, &quiz)).await?;
    }
    if publish {
        super::publish::ensure_published(ctx, &course, id).await?;
        quiz.published = true;
    }
    output(&quiz, flags.format)
}
