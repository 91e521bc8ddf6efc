use anyhow::bail;
use chrono::{DateTime, Utc};
use kz_core::entities::Quiz;
use kz_core::enums::Role;
use kz_core::policy::{self, Availability};
use kz_core::responses::QuizListing;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::{output_rows, yes_no};
use crate::progress::with_spinner;

/// Quiz details page.
pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let user = ctx.user()?;
    let course = ctx.course(flags)?;

    let (quiz, questions) = with_spinner("Loading quiz", async {
        let quiz = ctx.client.get_quiz(&course, id).await?;
        let questions = ctx.client.list_questions(&course, id).await?;
        Ok::<_, kz_client::ClientError>((quiz, questions))
    })
    .await?;
    if user.role == Role::Student && !quiz.published {
        bail!("This quiz is not available.");
    }

    let now = Utc::now();
    let latest_score = if user.role == Role::Student {
        ctx.client
            .latest_attempt(&course, id, &user.id)
            .await?
            .map(|a| a.score)
    } else {
        None
    };
    let listing = QuizListing {
        availability: policy::availability(&quiz, now),
        summary: policy::summary_line(&quiz, questions.len(), user.role, latest_score, now),
        question_count: questions.len(),
        latest_score,
        quiz,
    };

    let rows = detail_rows(&listing.quiz, listing.question_count, listing.availability);
    output_rows(&listing, flags.format, &["setting", "value"], &rows)
}

fn detail_rows(quiz: &Quiz, question_count: usize, availability: Availability) -> Vec<Vec<String>> {
    let date = |value: Option<DateTime<Utc>>| {
        value.map_or_else(|| "-".to_string(), |d| d.format("%Y-%m-%d %H:%M").to_string())
    };
    let time_limit = if quiz.has_time_limit() {
        format!("{} Minutes", quiz.time_limit)
    } else {
        "None".to_string()
    };
    let access_code = if quiz.access_code.is_empty() {
        "-".to_string()
    } else {
        quiz.access_code.clone()
    };

    [
        ("Title", quiz.title.clone()),
        ("Quiz Type", quiz.quiz_type.to_string()),
        ("Points", quiz.points.to_string()),
        ("Questions", question_count.to_string()),
        ("Assignment Group", quiz.assignment_group.to_string()),
        ("Shuffle Answers", yes_no(quiz.shuffle_answers).to_string()),
        ("Time Limit", time_limit),
        ("Multiple Attempts", yes_no(quiz.multiple_attempts).to_string()),
        ("How Many Attempts", quiz.attempt_limit().to_string()),
        ("Show Correct Answers", quiz.show_correct_answers.clone()),
        ("Access Code", access_code),
        ("One Question at a Time", yes_no(quiz.one_question_at_a_time).to_string()),
        ("Webcam Required", yes_no(quiz.webcam_required).to_string()),
        (
            "Lock Questions After Answering",
            yes_no(quiz.lock_questions_after_answering).to_string(),
        ),
        ("Due", date(quiz.due_date)),
        ("Available From", date(quiz.available_date)),
        ("Until", date(quiz.until_date)),
        ("Availability", availability.to_string()),
        ("Published", yes_no(quiz.published).to_string()),
    ]
    .into_iter()
    .map(|(key, value)| vec![key.to_string(), value])
    .collect()
}
