use anyhow::bail;
use chrono::Utc;
use kz_core::entities::{AttemptPatch, SubmittedAnswer};

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_answer_sheet;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::with_spinner;

/// Patch an incomplete attempt's answers or mark it completed.
pub async fn run(
    quiz: &str,
    id: &str,
    answers: Option<&str>,
    complete: bool,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.require_student("update attempts")?;
    let course = ctx.course(flags)?;

    let patch = build_patch(answers, complete)?;
    let updated = with_spinner(
        "Updating attempt",
        ctx.client.update_attempt(&course, quiz, id, &patch),
    )
    .await?;
    output(&updated, flags.format)
}

fn build_patch(answers: Option<&str>, complete: bool) -> anyhow::Result<AttemptPatch> {
    let answers = answers
        .map(parse_answer_sheet)
        .transpose()?
        .map(|sheet| {
            sheet
                .into_iter()
                .map(|(question_id, answer)| SubmittedAnswer {
                    question_id,
                    answer,
                })
                .collect::<Vec<_>>()
        });
    if answers.is_none() && !complete {
        bail!("nothing to update; pass --answers or --complete");
    }
    Ok(AttemptPatch {
        answers,
        is_completed: complete.then_some(true),
        submitted_at: complete.then(Utc::now),
    })
}
