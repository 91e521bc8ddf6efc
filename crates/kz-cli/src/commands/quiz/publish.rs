use anyhow::bail;
use kz_core::responses::PublishResponse;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::with_spinner;

const OK: u16 = 200;

/// Publish or unpublish. Only a `200` from the backend counts as success.
pub async fn run(
    id: &str,
    published: bool,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.require_author(if published {
        "publish quizzes"
    } else {
        "unpublish quizzes"
    })?;
    let course = ctx.course(flags)?;

    let status = if published {
        with_spinner("Publishing", ctx.client.publish_quiz(&course, id)).await?
    } else {
        with_spinner("Unpublishing", ctx.client.unpublish_quiz(&course, id)).await?
    };
    if status != OK {
        bail!("backend answered {status}; quiz '{id}' was not changed");
    }

    output(
        &PublishResponse {
            quiz_id: id.to_string(),
            published,
            status,
        },
        flags.format,
    )
}

/// The publish half of "save and publish".
pub async fn ensure_published(ctx: &AppContext, course: &str, id: &str) -> anyhow::Result<()> {
    let status = with_spinner("Publishing", ctx.client.publish_quiz(course, id)).await?;
    if status != OK {
        bail!("quiz saved, but publishing failed with status {status}");
    }
    Ok(())
}
