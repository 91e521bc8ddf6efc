use kz_core::responses::DeleteResponse;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::with_spinner;

pub async fn run(
    quiz: &str,
    id: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.require_author("delete questions")?;
    let course = ctx.course(flags)?;
    with_spinner(
        "Deleting question",
        ctx.client.delete_question(&course, quiz, id),
    )
    .await?;
    super::sync_quiz_points(ctx, &course, quiz).await?;

    output(
        &DeleteResponse {
            entity: "question".to_string(),
            id: id.to_string(),
            deleted: true,
        },
        flags.format,
    )
}
