use chrono::Utc;
use kz_core::enums::Role;
use kz_core::policy;
use kz_core::responses::QuizListing;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output_rows;
use crate::progress::with_spinner;

/// Course quizzes with question counts, availability and, for students,
/// their latest score.
pub async fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let user = ctx.user()?;
    let course = ctx.course(flags)?;

    let quizzes = with_spinner("Loading quizzes", ctx.client.list_quizzes(&course)).await?;
    let mut quizzes = policy::visible_to(user.role, quizzes);
    quizzes.truncate(effective_limit(flags.limit, ctx.config.general.default_limit));

    let now = Utc::now();
    let mut listings = Vec::with_capacity(quizzes.len());
    for quiz in quizzes {
        let question_count = ctx.client.list_questions(&course, &quiz.id).await?.len();
        let latest_score = if user.role == Role::Student {
            match ctx.client.latest_attempt(&course, &quiz.id, &user.id).await {
                Ok(attempt) => attempt.map(|a| a.score),
                Err(error) => {
                    tracing::warn!(%error, quiz = %quiz.id, "failed to load latest attempt");
                    None
                }
            }
        } else {
            None
        };
        listings.push(QuizListing {
            availability: policy::availability(&quiz, now),
            summary: policy::summary_line(&quiz, question_count, user.role, latest_score, now),
            quiz,
            question_count,
            latest_score,
        });
    }

    let rows = listings
        .iter()
        .map(|listing| {
            vec![
                listing.quiz.id.clone(),
                listing.quiz.title.clone(),
                if listing.quiz.published { "published" } else { "draft" }.to_string(),
                listing.summary.clone(),
            ]
        })
        .collect::<Vec<_>>();
    output_rows(&listings, flags.format, &["id", "title", "status", "summary"], &rows)
}
