use kz_core::authoring;
use kz_core::enums::QuestionType;
use kz_core::errors::CoreError;

use super::edit::{ListMode, apply_fields, remove_positions};
use crate::cli::GlobalFlags;
use crate::cli::subcommands::question::QuestionFieldArgs;
use crate::commands::shared::parse::parse_label;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::with_spinner;

/// Everything `question update` can change.
pub struct Edits<'a> {
    pub question_type: Option<&'a str>,
    pub fields: &'a QuestionFieldArgs,
    pub remove_choice: &'a [usize],
    pub remove_answer: &'a [usize],
}

/// Edit a question in place, then update quiz points.
///
/// A type switch resets the answer key to the new variant's template before
/// the other edits apply.
pub async fn run(
    quiz: &str,
    id: &str,
    edits: &Edits<'_>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.require_author("edit questions")?;
    let course = ctx.course(flags)?;

    let questions =
        with_spinner("Loading questions", ctx.client.list_questions(&course, quiz)).await?;
    let mut question = questions
        .into_iter()
        .find(|q| q.id == id)
        .ok_or_else(|| CoreError::NotFound {
            entity_type: "question".to_string(),
            id: id.to_string(),
        })?;

    let list_mode = if let Some(raw) = edits.question_type {
        let question_type: QuestionType = parse_label(raw, "--type")?;
        let switched = question.question_type() != question_type;
        authoring::change_type(&mut question, question_type);
        if switched { ListMode::Replace } else { ListMode::Append }
    } else {
        ListMode::Append
    };

    remove_positions(&mut question, edits.remove_choice, edits.remove_answer)?;
    apply_fields(&mut question, edits.fields, list_mode)?;
    authoring::validate_question(&question)?;

    with_spinner(
        "Saving question",
        ctx.client.update_question(&course, quiz, &question),
    )
    .await?;
    super::sync_quiz_points(ctx, &course, quiz).await?;

    output(&question, flags.format)
}
