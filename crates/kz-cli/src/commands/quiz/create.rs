use kz_core::authoring;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::quiz::QuizFieldArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::with_spinner;

/// Create a quiz from the defaults plus any given settings.
pub async fn run(
    fields: &QuizFieldArgs,
    publish: bool,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.require_author("create quizzes")?;
    let course = ctx.course(flags)?;

    let mut quiz = authoring::new_quiz(&course);
    quiz.apply(&fields.to_patch()?);

    let mut created = with_spinner("Creating quiz", ctx.client.create_quiz(&course, &quiz)).await?;
    tracing::info!(quiz = %created.id, course = %course, "quiz created");

    if publish {
        super::publish::ensure_published(ctx, &course, &created.id).await?;
        created.published = true;
    }
    output(&created, flags.format)
}
