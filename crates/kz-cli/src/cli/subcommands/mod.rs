pub mod attempt;
pub mod auth;
pub mod question;
pub mod quiz;

pub use attempt::AttemptCommands;
pub use auth::AuthCommands;
pub use question::QuestionCommands;
pub use quiz::QuizCommands;
