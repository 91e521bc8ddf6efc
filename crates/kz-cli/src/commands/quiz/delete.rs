use kz_core::responses::DeleteResponse;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::with_spinner;

pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.require_author("delete quizzes")?;
    let course = ctx.course(flags)?;
    with_spinner("Deleting quiz", ctx.client.delete_quiz(&course, id)).await?;
    output(
        &DeleteResponse {
            entity: "quiz".to_string(),
            id: id.to_string(),
            deleted: true,
        },
        flags.format,
    )
}
