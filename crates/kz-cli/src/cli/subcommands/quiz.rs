use clap::{Args, Subcommand};

/// Quiz commands.
#[derive(Clone, Debug, Subcommand)]
pub enum QuizCommands {
    /// List quizzes in the course.
    List,
    /// Show one quiz with its question count and availability.
    Get { id: String },
    /// Create a quiz with default settings (faculty).
    Create {
        #[command(flatten)]
        fields: QuizFieldArgs,
        /// Publish right after saving.
        #[arg(long)]
        publish: bool,
    },
    /// Edit quiz settings (faculty).
    Update {
        id: String,
        #[command(flatten)]
        fields: QuizFieldArgs,
        /// Publish right after saving.
        #[arg(long)]
        publish: bool,
    },
    /// Delete a quiz (faculty).
    Delete { id: String },
    /// Make a quiz visible to students (faculty).
    Publish { id: String },
    /// Hide a quiz from students (faculty).
    Unpublish { id: String },
}

/// Editable quiz settings. Omitted flags leave the value unchanged.
#[derive(Clone, Debug, Default, Args)]
pub struct QuizFieldArgs {
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    /// Graded Quiz, Practice Quiz, Graded Survey, Ungraded Survey.
    #[arg(long)]
    pub quiz_type: Option<String>,
    /// Quizzes, Exams, Assignments, Project.
    #[arg(long)]
    pub group: Option<String>,
    #[arg(long)]
    pub shuffle: Option<bool>,
    /// Time limit in minutes.
    #[arg(long, conflicts_with = "untimed")]
    pub time_limit: Option<u32>,
    /// Turn the time limit on (20 minutes unless --time-limit is given).
    #[arg(long, conflicts_with = "untimed")]
    pub timed: bool,
    /// Turn the time limit off.
    #[arg(long)]
    pub untimed: bool,
    #[arg(long)]
    pub multiple_attempts: Option<bool>,
    /// How many attempts when multiple attempts are allowed.
    #[arg(long)]
    pub attempts: Option<u32>,
    /// Immediately, After Due Date, Never.
    #[arg(long)]
    pub show_answers: Option<String>,
    #[arg(long)]
    pub access_code: Option<String>,
    #[arg(long)]
    pub one_at_a_time: Option<bool>,
    #[arg(long)]
    pub webcam: Option<bool>,
    #[arg(long)]
    pub lock_after_answering: Option<bool>,
    /// YYYY-MM-DD, YYYY-MM-DDTHH:MM or RFC 3339. `""` or `none` clears it.
    #[arg(long)]
    pub due: Option<String>,
    /// Same formats as `--due`.
    #[arg(long)]
    pub available: Option<String>,
    /// Same formats as `--due`.
    #[arg(long)]
    pub until: Option<String>,
}
