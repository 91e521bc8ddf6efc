use anyhow::bail;
use kz_core::entities::{AnswerValue, Question, QuestionKind};

/// Turn a typed line into an answer for `question`.
///
/// - multiple-choice: 1-based choice number, or the choice text
/// - true-false: `true`/`false`, `t`/`f`, `yes`/`no`
/// - fill-in-blank: the trimmed text
pub fn parse_answer(question: &Question, input: &str) -> anyhow::Result<AnswerValue> {
    let input = input.trim();
    match &question.kind {
        QuestionKind::MultipleChoice { choices, .. } => {
            if let Ok(number) = input.parse::<usize>() {
                if (1..=choices.len()).contains(&number) {
                    return Ok(AnswerValue::Index(i64::try_from(number - 1)?));
                }
                bail!("choose a number between 1 and {}", choices.len());
            }
            match choices
                .iter()
                .position(|choice| choice.trim().eq_ignore_ascii_case(input))
            {
                Some(index) => Ok(AnswerValue::Index(i64::try_from(index)?)),
                None => bail!("'{input}' is not one of the choices"),
            }
        }
        QuestionKind::TrueFalse { .. } => match input.to_ascii_lowercase().as_str() {
            "true" | "t" | "yes" | "y" => Ok(AnswerValue::Bool(true)),
            "false" | "f" | "no" | "n" => Ok(AnswerValue::Bool(false)),
            _ => bail!("answer true or false"),
        },
        QuestionKind::FillInBlank { .. } => Ok(AnswerValue::Text(input.to_string())),
    }
}
