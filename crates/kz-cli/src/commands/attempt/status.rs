use chrono::Utc;
use kz_core::policy;
use kz_core::responses::AttemptStatusResponse;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::with_spinner;

/// Whether the signed-in student can start another attempt, and why not.
pub async fn run(quiz_id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let user = ctx.user()?;
    let course = ctx.course(flags)?;

    let (quiz, attempts) = with_spinner("Loading attempts", async {
        let quiz = ctx.client.get_quiz(&course, quiz_id).await?;
        let attempts = ctx.client.list_attempts(&course, quiz_id, &user.id).await;
        Ok::<_, kz_client::ClientError>((quiz, attempts))
    })
    .await?;
    let attempts = super::attempts_or_none(attempts, quiz_id);

    let availability = policy::availability(&quiz, Utc::now());
    let response = AttemptStatusResponse {
        quiz_id: quiz.id.clone(),
        published: quiz.published,
        availability,
        attempts_taken: attempts.len(),
        attempt_limit: quiz.attempt_limit(),
        can_take: availability.is_open() && policy::student_can_start(&quiz, attempts.len()),
        latest_score: policy::latest_attempt(&attempts).map(|a| a.score),
    };
    output(&response, flags.format)
}
