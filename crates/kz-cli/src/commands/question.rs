mod add;
mod delete;
mod edit;
mod list;
mod update;

use kz_core::authoring;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::QuestionCommands;
use crate::context::AppContext;
use crate::progress::with_spinner;

/// Handle `kambaz question`.
pub async fn handle(
    action: &QuestionCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        QuestionCommands::List { quiz } => list::run(quiz, ctx, flags).await,
        QuestionCommands::Add {
            quiz,
            question_type,
            fields,
        } => add::run(quiz, question_type, fields, ctx, flags).await,
        QuestionCommands::Update {
            quiz,
            id,
            question_type,
            fields,
            remove_choice,
            remove_answer,
        } => {
            let edits = update::Edits {
                question_type: question_type.as_deref(),
                fields,
                remove_choice,
                remove_answer,
            };
            update::run(quiz, id, &edits, ctx, flags).await
        }
        QuestionCommands::Delete { quiz, id } => delete::run(quiz, id, ctx, flags).await,
    }
}

/// Recompute the quiz's points from its questions and save it if they moved.
async fn sync_quiz_points(ctx: &AppContext, course: &str, quiz_id: &str) -> anyhow::Result<f64> {
    with_spinner("Updating quiz points", async {
        let questions = ctx.client.list_questions(course, quiz_id).await?;
        let mut quiz = ctx.client.get_quiz(course, quiz_id).await?;
        let total = authoring::total_points(&questions);
        if (quiz.points - total).abs() > f64::EPSILON {
            tracing::debug!(quiz = %quiz_id, from = quiz.points, to = total, "syncing quiz points");
            quiz.points = total;
            ctx.client.update_quiz(course, &quiz).await?;
        }
        Ok::<_, anyhow::Error>(total)
    })
    .await
}
