pub mod answer;
pub mod limit;
pub mod parse;
pub mod runner;
