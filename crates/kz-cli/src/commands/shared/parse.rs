use std::collections::BTreeMap;
use std::fmt::Display;
use std::str::FromStr;

use anyhow::Context;
use chrono::{DateTime, Utc};
use kz_core::date_serde::parse_lenient;
use kz_core::entities::AnswerValue;

/// Parse a label-style enum value (`"Graded Quiz"`, `graded-quiz`, `mc`).
///
/// `flag` prefixes the error so users can tell which option was wrong.
pub fn parse_label<T>(raw: &str, flag: &str) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    raw.parse::<T>()
        .map_err(|error| anyhow::anyhow!("{flag}: {error}"))
}

/// Parse an optional label, keeping `None` as `None`.
pub fn parse_optional_label<T>(raw: Option<&str>, flag: &str) -> anyhow::Result<Option<T>>
where
    T: FromStr,
    T::Err: Display,
{
    raw.map(|raw| parse_label(raw, flag)).transpose()
}

/// Parse a date flag: `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM` or RFC 3339.
///
/// An absent flag is `None`. A blank value or `none` is `Some(None)`, which
/// clears the date.
pub fn parse_date(raw: Option<&str>, flag: &str) -> anyhow::Result<Option<Option<DateTime<Utc>>>> {
    raw.map(|raw| {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("none") {
            return Ok(None);
        }
        parse_lenient(trimmed).map(Some).ok_or_else(|| {
            anyhow::anyhow!("{flag}: invalid date '{raw}', expected YYYY-MM-DD or RFC 3339")
        })
    })
    .transpose()
}

/// Parse a JSON answer sheet keyed by question id. Values use the wire
/// encoding: 0-based choice index, boolean, or text.
pub fn parse_answer_sheet(raw: &str) -> anyhow::Result<BTreeMap<String, AnswerValue>> {
    serde_json::from_str(raw)
        .context("invalid --answers: expected a JSON object of questionId to answer")
}

#[cfg(test)]
mod tests {
    use kz_core::enums::{AssignmentGroup, QuestionType, QuizType};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_labels_leniently() {
        let quiz_type: QuizType =
            parse_label("practice-quiz", "--quiz-type").expect("should parse");
        assert_eq!(quiz_type, QuizType::PracticeQuiz);
        let kind: QuestionType = parse_label("tf", "--type").expect("should parse");
        assert_eq!(kind, QuestionType::TrueFalse);
    }

    #[test]
    fn errors_on_unknown_label() {
        let err = parse_label::<AssignmentGroup>("homework", "--group").expect_err("should fail");
        let message = err.to_string();
        assert!(message.starts_with("--group: "));
        assert!(message.contains("'homework'"));
    }

    #[test]
    fn optional_label_passes_none_through() {
        let group: Option<AssignmentGroup> =
            parse_optional_label(None, "--group").expect("none is fine");
        assert!(group.is_none());
    }

    #[test]
    fn parses_dates() {
        let due = parse_date(Some("2025-05-01"), "--due").expect("should parse");
        assert_eq!(
            due.flatten().map(|d| d.to_rfc3339()).as_deref(),
            Some("2025-05-01T00:00:00+00:00")
        );
        assert!(parse_date(Some("next week"), "--due").is_err());
        assert!(parse_date(None, "--due").expect("none is fine").is_none());
    }

    #[test]
    fn blank_or_none_date_clears() {
        assert_eq!(parse_date(Some(""), "--due").expect("blank clears"), Some(None));
        assert_eq!(parse_date(Some(" None "), "--until").expect("none clears"), Some(None));
    }

    #[test]
    fn parses_answer_sheet() {
        let sheet = parse_answer_sheet(r#"{"q1": 2, "q2": true, "q3": "Paris"}"#)
            .expect("should parse");
        assert_eq!(sheet["q1"], AnswerValue::Index(2));
        assert_eq!(sheet["q2"], AnswerValue::Bool(true));
        assert_eq!(sheet["q3"], AnswerValue::Text("Paris".into()));
        assert!(parse_answer_sheet("[1, 2]").is_err());
    }
}
