use kz_core::authoring;
use kz_core::enums::QuestionType;

use super::edit::{ListMode, apply_fields};
use crate::cli::GlobalFlags;
use crate::cli::subcommands::question::QuestionFieldArgs;
use crate::commands::shared::parse::parse_label;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::with_spinner;

/// Create a question from its variant template, then update quiz points.
pub async fn run(
    quiz: &str,
    question_type: &str,
    fields: &QuestionFieldArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.require_author("add questions")?;
    let course = ctx.course(flags)?;
    let question_type: QuestionType = parse_label(question_type, "--type")?;

    let mut question = authoring::new_question(question_type, quiz, &course);
    apply_fields(&mut question, fields, ListMode::Replace)?;
    authoring::validate_question(&question)?;

    let created = with_spinner(
        "Saving question",
        ctx.client.create_question(&course, quiz, &question),
    )
    .await?;
    let total = super::sync_quiz_points(ctx, &course, quiz).await?;
    tracing::info!(question = %created.id, quiz = %quiz, points = total, "question added");

    output(&created, flags.format)
}
