//! # kz-core
//!
//! Core types for the Kambaz quiz client.
//!
//! This crate provides the foundational types shared across all Kambaz crates:
//! - Wire records for quizzes, questions, attempts and users
//! - Configuration enums (quiz type, assignment group, question variant, role)
//! - The faculty preview scoring function
//! - The attempt-taking state machine with its countdown
//! - Availability and attempt-limit policy
//! - The results view model with role-gated visibility
//! - Authoring templates and editing helpers
//!
//! Nothing in here performs I/O. The backend grades attempts authoritatively;
//! [`grading`] only exists for the faculty preview flow.

pub mod authoring;
pub mod date_serde;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod grading;
pub mod policy;
pub mod responses;
pub mod results;
pub mod session;
