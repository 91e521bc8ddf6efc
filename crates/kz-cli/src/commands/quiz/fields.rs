use kz_core::authoring;
use kz_core::entities::QuizPatch;

use crate::cli::subcommands::quiz::QuizFieldArgs;
use crate::commands::shared::parse::{parse_date, parse_optional_label};

impl QuizFieldArgs {
    /// Convert flags into a partial quiz edit.
    pub fn to_patch(&self) -> anyhow::Result<QuizPatch> {
        let mut patch = QuizPatch {
            title: self.title.clone(),
            description: self.description.clone(),
            quiz_type: parse_optional_label(self.quiz_type.as_deref(), "--quiz-type")?,
            assignment_group: parse_optional_label(self.group.as_deref(), "--group")?,
            shuffle_answers: self.shuffle,
            multiple_attempts: self.multiple_attempts,
            how_many_attempts: self.attempts,
            show_correct_answers: parse_optional_label(
                self.show_answers.as_deref(),
                "--show-answers",
            )?,
            access_code: self.access_code.clone(),
            one_question_at_a_time: self.one_at_a_time,
            webcam_required: self.webcam,
            lock_questions_after_answering: self.lock_after_answering,
            due_date: parse_date(self.due.as_deref(), "--due")?,
            available_date: parse_date(self.available.as_deref(), "--available")?,
            until_date: parse_date(self.until.as_deref(), "--until")?,
            time_limit: None,
        };

        if self.untimed {
            authoring::set_time_limit(&mut patch, false, None);
        } else if self.timed || self.time_limit.is_some() {
            authoring::set_time_limit(&mut patch, true, self.time_limit);
        }

        if let Some(count) = patch.how_many_attempts
            && count == 0
        {
            anyhow::bail!("--attempts must be at least 1");
        }
        Ok(patch)
    }
}
