use kz_core::entities::QuizAttempt;
use kz_core::grading;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::{output_rows, yes_no};
use crate::progress::with_spinner;

pub const HEADERS: [&str; 6] = ["#", "id", "score", "percent", "submitted", "completed"];

/// Attempt history on a quiz, newest first.
pub async fn run(
    quiz: &str,
    student: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let course = ctx.course(flags)?;
    let owner = ctx.attempt_owner(student)?;

    let mut attempts = with_spinner(
        "Loading attempts",
        ctx.client.list_attempts(&course, quiz, &owner),
    )
    .await?;
    attempts.truncate(effective_limit(flags.limit, ctx.config.general.default_limit));

    let rows = attempts.iter().map(attempt_row).collect::<Vec<_>>();
    output_rows(&attempts, flags.format, &HEADERS, &rows)
}

pub fn attempt_row(attempt: &QuizAttempt) -> Vec<String> {
    vec![
        attempt.attempt_number.to_string(),
        attempt.id.clone(),
        format!("{} / {}", attempt.score, attempt.total_points),
        format!(
            "{}%",
            grading::percentage(attempt.score, attempt.total_points)
        ),
        attempt.submitted_at.map_or_else(
            || "-".to_string(),
            |at| at.format("%Y-%m-%d %H:%M").to_string(),
        ),
        yes_no(attempt.is_completed).to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn row_shows_score_and_percentage() {
        let attempt = QuizAttempt {
            id: "A1".into(),
            quiz: "Q1".into(),
            student: "U1".into(),
            course: "C1".into(),
            attempt_number: 2,
            started_at: Utc.with_ymd_and_hms(2025, 2, 11, 10, 0, 0).unwrap(),
            submitted_at: Some(Utc.with_ymd_and_hms(2025, 2, 11, 10, 12, 0).unwrap()),
            answers: Vec::new(),
            score: 2.0,
            total_points: 3.0,
            is_completed: true,
        };
        assert_eq!(
            attempt_row(&attempt),
            vec!["2", "A1", "2 / 3", "67%", "2025-02-11 10:12", "yes"]
        );
    }
}
