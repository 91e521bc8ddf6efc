pub mod attempt;
pub mod auth;
pub mod dispatch;
pub mod preview;
pub mod question;
pub mod quiz;
pub mod shared;
