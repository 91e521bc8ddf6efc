use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output_rows;
use crate::progress::with_spinner;

/// The most recent attempt, or `null` when there is none.
pub async fn run(
    quiz: &str,
    student: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let course = ctx.course(flags)?;
    let owner = ctx.attempt_owner(student)?;

    let latest = with_spinner(
        "Loading latest attempt",
        ctx.client.latest_attempt(&course, quiz, &owner),
    )
    .await?;

    let rows = latest.iter().map(super::list::attempt_row).collect::<Vec<_>>();
    output_rows(&latest, flags.format, &super::list::HEADERS, &rows)
}
