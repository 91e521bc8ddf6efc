use clap::Subcommand;

/// Attempt commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AttemptCommands {
    /// Take a quiz interactively (students).
    Take {
        quiz: String,
        /// Submit a JSON answer sheet (`{"<questionId>": answer}`) without
        /// prompting.
        #[arg(long)]
        answers: Option<String>,
    },
    /// List attempts on a quiz, newest first.
    List {
        quiz: String,
        /// Student id (faculty); defaults to the signed-in user.
        #[arg(long)]
        student: Option<String>,
    },
    /// Show the latest attempt.
    Latest {
        quiz: String,
        #[arg(long)]
        student: Option<String>,
    },
    /// Show the results page for an attempt.
    Results {
        quiz: String,
        /// Attempt id; defaults to the latest.
        #[arg(long)]
        attempt: Option<String>,
        #[arg(long)]
        student: Option<String>,
    },
    /// Attempts used, attempts left, and whether the quiz is open.
    Status { quiz: String },
    /// Patch an incomplete attempt.
    Update {
        quiz: String,
        id: String,
        /// JSON answer sheet (`{"<questionId>": answer}`).
        #[arg(long)]
        answers: Option<String>,
        /// Mark the attempt completed and stamp the submission time.
        #[arg(long)]
        complete: bool,
    },
}
