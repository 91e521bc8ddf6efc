use clap::{Args, Subcommand};

use crate::cli::subcommands::{AttemptCommands, AuthCommands, QuestionCommands, QuizCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Sign in, sign up, sign out.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Quizzes in a course.
    Quiz {
        #[command(subcommand)]
        action: QuizCommands,
    },
    /// Questions of a quiz (faculty).
    Question {
        #[command(subcommand)]
        action: QuestionCommands,
    },
    /// Take quizzes and review attempts.
    Attempt {
        #[command(subcommand)]
        action: AttemptCommands,
    },
    /// Run through a quiz locally without recording an attempt (faculty).
    Preview(PreviewArgs),
}

#[derive(Clone, Debug, Args)]
pub struct PreviewArgs {
    /// Quiz id.
    pub quiz: String,
    /// Grade a JSON answer sheet (`{"<questionId>": answer}`) instead of
    /// prompting.
    #[arg(long)]
    pub answers: Option<String>,
}
