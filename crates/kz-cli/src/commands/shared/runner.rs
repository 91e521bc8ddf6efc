//! Line-oriented driver for an in-progress attempt or preview.
//!
//! Reads commands and answers from `input` while a one-second interval
//! drives the countdown. Returns when the user submits, quits, closes the
//! input, or the countdown runs out.

use std::io::Write;
use std::time::Duration;

use anyhow::Context;
use kz_core::entities::{Question, QuestionKind};
use kz_core::session::{AttemptSession, DisplayMode, TickOutcome};
use tokio::io::{AsyncBufRead, Lines};
use tokio::time::{Instant, interval_at};

use super::answer::parse_answer;

const HELP: &str = "\
Type an answer and press enter. Commands:
  :n, :next       next question
  :p, :prev       previous question
  :g N            go to question N
  :l, :list       list all questions with your answers
  :t, :time       time remaining
  :s, :submit     submit
  :q, :quit       leave without submitting
  :h, :help       this help";

/// How the loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Submit now. `expired` when the countdown forced it.
    Submit { expired: bool },
    /// Leave without submitting.
    Quit,
}

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Next,
    Prev,
    GoTo(usize),
    List,
    Time,
    Submit,
    Quit,
    Help,
    Answer(String),
    Unknown(String),
}

/// Classify a typed line. A blank line moves on without answering.
#[must_use]
pub fn parse_command(line: &str) -> Command {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Command::Next;
    }
    let Some(rest) = trimmed.strip_prefix(':') else {
        return Command::Answer(trimmed.to_string());
    };
    let mut parts = rest.split_whitespace();
    match (parts.next().unwrap_or_default(), parts.next()) {
        ("n" | "next", None) => Command::Next,
        ("p" | "prev", None) => Command::Prev,
        ("g" | "goto", Some(n)) => n
            .parse::<usize>()
            .ok()
            .filter(|n| *n > 0)
            .map_or_else(|| Command::Unknown(trimmed.to_string()), Command::GoTo),
        ("l" | "list", None) => Command::List,
        ("t" | "time", None) => Command::Time,
        ("s" | "submit", None) => Command::Submit,
        ("q" | "quit", None) => Command::Quit,
        ("h" | "help", None) => Command::Help,
        _ => Command::Unknown(trimmed.to_string()),
    }
}

/// Drive `session` until it should be submitted or abandoned.
///
/// The session must be in progress. The countdown only ticks while it has
/// time left, so an expired attempt whose submission failed is not
/// resubmitted on its own.
pub async fn drive<R, W>(
    session: &mut AttemptSession,
    lines: &mut Lines<R>,
    out: &mut W,
) -> anyhow::Result<Outcome>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let period = Duration::from_secs(1);
    let mut ticker = interval_at(Instant::now() + period, period);

    if session.display_mode() == DisplayMode::AllAtOnce {
        write_list(session, out)?;
    }
    write_current(session, out)?;

    loop {
        write!(out, "> ")?;
        out.flush()?;

        let line = loop {
            let timed = session.countdown().is_some_and(|c| !c.is_expired());
            tokio::select! {
                line = lines.next_line() => break line.context("failed to read input")?,
                _ = ticker.tick(), if timed => match session.tick() {
                    TickOutcome::Expired => {
                        writeln!(out)?;
                        writeln!(out, "Time is up. Submitting your answers.")?;
                        return Ok(Outcome::Submit { expired: true });
                    }
                    TickOutcome::Running(left) if left == 60 => {
                        writeln!(out)?;
                        writeln!(out, "1 minute left.")?;
                        write!(out, "> ")?;
                        out.flush()?;
                    }
                    TickOutcome::Running(_) | TickOutcome::Untimed => {}
                },
            }
        };

        let Some(line) = line else {
            return Ok(Outcome::Quit);
        };

        match parse_command(&line) {
            Command::Next => {
                if session.next() {
                    write_current(session, out)?;
                } else {
                    writeln!(out, "This is the last question. Type :s to submit.")?;
                }
            }
            Command::Prev => {
                if session.prev() {
                    write_current(session, out)?;
                } else {
                    writeln!(out, "This is the first question.")?;
                }
            }
            Command::GoTo(number) => {
                if session.go_to(number - 1) {
                    write_current(session, out)?;
                } else {
                    writeln!(
                        out,
                        "There is no question {number}; this quiz has {}.",
                        session.questions().len()
                    )?;
                }
            }
            Command::List => write_list(session, out)?,
            Command::Time => writeln!(out, "Time left: {}", session.time_left())?,
            Command::Submit => return Ok(Outcome::Submit { expired: false }),
            Command::Quit => return Ok(Outcome::Quit),
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Unknown(raw) => writeln!(out, "Unknown command '{raw}'. Type :h for help.")?,
            Command::Answer(text) => record_answer(session, &text, out)?,
        }
    }
}

fn record_answer<W: Write>(
    session: &mut AttemptSession,
    text: &str,
    out: &mut W,
) -> anyhow::Result<()> {
    let Some(question) = session.current_question() else {
        return Ok(());
    };
    let id = question.id.clone();
    let parsed = parse_answer(question, text);
    match parsed.and_then(|value| session.set_answer(&id, value).map_err(anyhow::Error::from)) {
        Ok(()) => {
            if session.next() {
                write_current(session, out)?;
            } else {
                writeln!(out, "All questions visited. Type :s to submit or :l to review.")?;
            }
        }
        Err(error) => writeln!(out, "! {error}")?,
    }
    Ok(())
}

fn write_current<W: Write>(session: &AttemptSession, out: &mut W) -> std::io::Result<()> {
    let Some(question) = session.current_question() else {
        return Ok(());
    };
    let (position, count) = session.position();
    writeln!(out)?;
    write!(out, "Question {position} of {count} ({} pts)", question.points)?;
    if session.countdown().is_some() {
        write!(out, "  [{}]", session.time_left())?;
    }
    writeln!(out)?;
    if !question.title.trim().is_empty() {
        writeln!(out, "{}", question.title)?;
    }
    writeln!(out, "{}", question.prompt)?;
    write_options(question, out)?;
    if let Some(current) = session.answer_for(&question.id).filter(|a| !a.is_blank()) {
        writeln!(out, "Current answer: {}", question.answer_display(current))?;
    }
    if session.is_last() {
        writeln!(out, "Last question. Type :s to submit.")?;
    }
    Ok(())
}

fn write_options<W: Write>(question: &Question, out: &mut W) -> std::io::Result<()> {
    match &question.kind {
        QuestionKind::MultipleChoice { choices, .. } => {
            for (i, choice) in choices.iter().enumerate() {
                writeln!(out, "  {}) {choice}", i + 1)?;
            }
        }
        QuestionKind::TrueFalse { .. } => writeln!(out, "  true / false")?,
        QuestionKind::FillInBlank { .. } => writeln!(out, "  (type your answer)")?,
    }
    Ok(())
}

fn write_list<W: Write>(session: &AttemptSession, out: &mut W) -> std::io::Result<()> {
    writeln!(out)?;
    for (i, question) in session.questions().iter().enumerate() {
        let answer = session
            .answer_for(&question.id)
            .filter(|a| !a.is_blank())
            .map_or_else(|| "-".to_string(), |a| question.answer_display(a));
        let marker = if i == session.current_index() { '>' } else { ' ' };
        writeln!(out, "{marker}{:>3}. {}  [{answer}]", i + 1, question.prompt)?;
    }
    if session.countdown().is_some() {
        writeln!(out, "Time left: {}", session.time_left())?;
    }
    Ok(())
}
