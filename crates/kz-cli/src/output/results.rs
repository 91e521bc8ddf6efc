//! Results page layout for `--format table`.

use kz_core::results::ResultsView;

use super::table::{TableOptions, render_entity_table};
use crate::cli::OutputFormat;

const HEADERS: [&str; 5] = ["#", "question", "result", "points", "answer"];

/// Print a results view in the requested format.
pub fn output_results(view: &ResultsView, format: OutputFormat) -> anyhow::Result<()> {
    if format == OutputFormat::Table {
        println!("{}", render_results(view, super::table_options()));
        return Ok(());
    }
    super::output(view, format)
}

/// Header block, then the breakdown table or the hidden-answers notice.
#[must_use]
pub fn render_results(view: &ResultsView, options: TableOptions) -> String {
    let mut lines = vec![view.quiz_title.clone()];
    if let Some(number) = view.attempt_number {
        lines.push(format!("Attempt {number}"));
    }
    lines.push(format!(
        "Score: {}  Grade: {}  {}",
        view.score_line(),
        view.letter_grade,
        if view.passed { "passed" } else { "failed" }
    ));
    lines.push(String::new());

    if let Some(notice) = &view.notice {
        lines.push(notice.clone());
        return lines.join("\n");
    }

    let rows = view
        .rows
        .iter()
        .map(|row| {
            let answer = if row.is_correct {
                row.answer.clone()
            } else {
                format!("{} (correct: {})", row.answer, row.correct_answer)
            };
            vec![
                row.index.to_string(),
                row.prompt.clone(),
                if row.is_correct { "correct" } else { "incorrect" }.to_string(),
                format!("{} / {}", row.points_earned, row.points),
                answer,
            ]
        })
        .collect::<Vec<_>>();
    lines.push(render_entity_table(&HEADERS, &rows, options));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use kz_core::results::{HIDDEN_ANSWERS_NOTICE, ResultRow, ResultsView};

    use super::*;

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    fn view(notice: Option<&str>) -> ResultsView {
        ResultsView {
            quiz_id: "Q1".into(),
            quiz_title: "Week 1".into(),
            score: 7.0,
            total: 10.0,
            percentage: 70,
            letter_grade: 'C',
            passed: true,
            attempt_number: Some(2),
            rows: if notice.is_some() {
                Vec::new()
            } else {
                vec![
                    ResultRow {
                        index: 1,
                        question_id: "q1".into(),
                        prompt: "Capital of France?".into(),
                        is_correct: true,
                        points_earned: 7.0,
                        points: 7.0,
                        answer: "Paris".into(),
                        correct_answer: "Paris".into(),
                    },
                    ResultRow {
                        index: 2,
                        question_id: "q2".into(),
                        prompt: "2 + 2".into(),
                        is_correct: false,
                        points_earned: 0.0,
                        points: 3.0,
                        answer: "Not Answered".into(),
                        correct_answer: "4 or four".into(),
                    },
                ]
            },
            notice: notice.map(str::to_string),
        }
    }

    #[test]
    fn breakdown_lists_each_question() {
        let out = render_results(&view(None), PLAIN);
        assert!(out.starts_with("Week 1\nAttempt 2\nScore: 7 / 10 (70%)  Grade: C  passed"));
        assert!(out.contains("Capital of France?"));
        assert!(out.contains("Not Answered (correct: 4 or four)"));
        assert!(out.contains("incorrect"));
    }

    #[test]
    fn hidden_breakdown_shows_notice_only() {
        let out = render_results(&view(Some(HIDDEN_ANSWERS_NOTICE)), PLAIN);
        assert!(out.ends_with(HIDDEN_ANSWERS_NOTICE));
        assert!(!out.contains("question"));
    }
}
