use clap::{Args, Subcommand};

/// Question authoring commands (faculty).
#[derive(Clone, Debug, Subcommand)]
pub enum QuestionCommands {
    /// List a quiz's questions with their answer keys.
    List { quiz: String },
    /// Add a question from the template for its type.
    Add {
        quiz: String,
        /// multiple-choice (mc), true-false (tf), fill-in-blank (fib).
        #[arg(long = "type", default_value = "multiple-choice")]
        question_type: String,
        #[command(flatten)]
        fields: QuestionFieldArgs,
    },
    /// Edit a question.
    Update {
        quiz: String,
        id: String,
        /// Switch variant; resets the answer key to the template.
        #[arg(long = "type")]
        question_type: Option<String>,
        #[command(flatten)]
        fields: QuestionFieldArgs,
        /// Remove the choice at this 1-based position.
        #[arg(long)]
        remove_choice: Vec<usize>,
        /// Remove the accepted answer at this 1-based position.
        #[arg(long)]
        remove_answer: Vec<usize>,
    },
    /// Delete a question.
    Delete { quiz: String, id: String },
}

#[derive(Clone, Debug, Default, Args)]
pub struct QuestionFieldArgs {
    #[arg(long)]
    pub title: Option<String>,
    /// Question text shown to students.
    #[arg(long)]
    pub prompt: Option<String>,
    /// May be fractional, e.g. `0.5`.
    #[arg(long)]
    pub points: Option<f64>,
    /// Multiple-choice option; repeat for each. Replaces the template on add,
    /// appends on update.
    #[arg(long = "choice")]
    pub choices: Vec<String>,
    /// Multiple-choice: 1-based choice number. True/false: true or false.
    #[arg(long)]
    pub correct: Option<String>,
    /// Fill-in-blank accepted answer; repeat for each. Replaces the template
    /// on add, appends on update.
    #[arg(long = "answer")]
    pub answers: Vec<String>,
}
