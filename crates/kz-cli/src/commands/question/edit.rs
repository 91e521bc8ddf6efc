use anyhow::bail;
use kz_core::authoring;
use kz_core::entities::{Question, QuestionKind};

use crate::cli::subcommands::question::QuestionFieldArgs;

/// Whether `--choice` / `--answer` replace the template lists or append.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMode {
    Replace,
    Append,
}

/// Apply editor flags to `question`.
pub fn apply_fields(
    question: &mut Question,
    fields: &QuestionFieldArgs,
    mode: ListMode,
) -> anyhow::Result<()> {
    if let Some(title) = &fields.title {
        question.title.clone_from(title);
    }
    if let Some(prompt) = &fields.prompt {
        question.prompt.clone_from(prompt);
    }
    if let Some(points) = fields.points {
        if !points.is_finite() || points < 0.0 {
            bail!("--points: must be a non-negative number, got {points}");
        }
        question.points = points;
    }

    if !fields.choices.is_empty() {
        if mode == ListMode::Replace
            && let QuestionKind::MultipleChoice {
                choices,
                correct_answer,
            } = &mut question.kind
        {
            choices.clone_from(&fields.choices);
            *correct_answer = 0;
        } else {
            for choice in &fields.choices {
                authoring::add_choice(question, choice)?;
            }
        }
    }

    if !fields.answers.is_empty() {
        if mode == ListMode::Replace
            && let QuestionKind::FillInBlank { possible_answers } = &mut question.kind
        {
            possible_answers.clone_from(&fields.answers);
        } else {
            for answer in &fields.answers {
                authoring::add_possible_answer(question, answer)?;
            }
        }
    }

    if let Some(correct) = &fields.correct {
        set_correct(question, correct)?;
    }
    Ok(())
}

/// Remove choices or accepted answers by 1-based position.
///
/// Positions refer to the list before any removal.
pub fn remove_positions(
    question: &mut Question,
    choices: &[usize],
    answers: &[usize],
) -> anyhow::Result<()> {
    for index in descending_indexes(choices)? {
        authoring::remove_choice(question, index)?;
    }
    for index in descending_indexes(answers)? {
        authoring::remove_possible_answer(question, index)?;
    }
    Ok(())
}

fn descending_indexes(positions: &[usize]) -> anyhow::Result<Vec<usize>> {
    if positions.contains(&0) {
        bail!("positions start at 1");
    }
    let mut indexes = positions.iter().map(|p| p - 1).collect::<Vec<_>>();
    indexes.sort_unstable_by(|a, b| b.cmp(a));
    indexes.dedup();
    Ok(indexes)
}

fn set_correct(question: &mut Question, raw: &str) -> anyhow::Result<()> {
    let raw = raw.trim();
    match &mut question.kind {
        QuestionKind::MultipleChoice {
            choices,
            correct_answer,
        } => {
            let number: usize = raw
                .parse()
                .map_err(|_| anyhow::anyhow!("--correct: expected a choice number, got '{raw}'"))?;
            if number == 0 || number > choices.len() {
                bail!("--correct: choose a number between 1 and {}", choices.len());
            }
            *correct_answer = number - 1;
        }
        QuestionKind::TrueFalse { correct_answer } => {
            *correct_answer = match raw.to_ascii_lowercase().as_str() {
                "true" | "t" => true,
                "false" | "f" => false,
                _ => bail!("--correct: expected true or false, got '{raw}'"),
            };
        }
        QuestionKind::FillInBlank { .. } => {
            bail!("--correct does not apply to fill-in-blank questions; use --answer")
        }
    }
    Ok(())
}
