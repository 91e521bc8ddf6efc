use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output_rows;
use crate::progress::with_spinner;

/// Questions with their answer keys (faculty).
pub async fn run(quiz: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.require_author("view answer keys")?;
    let course = ctx.course(flags)?;
    let questions =
        with_spinner("Loading questions", ctx.client.list_questions(&course, quiz)).await?;

    let rows = questions
        .iter()
        .enumerate()
        .map(|(i, question)| {
            vec![
                (i + 1).to_string(),
                question.id.clone(),
                question.question_type().to_string(),
                question.points.to_string(),
                question.prompt.clone(),
                question.correct_answer_display(),
            ]
        })
        .collect::<Vec<_>>();
    output_rows(
        &questions,
        flags.format,
        &["#", "id", "type", "points", "question", "answer"],
        &rows,
    )
}
