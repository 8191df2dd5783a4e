//! Core data model types for interjudge.
//!
//! Verdicts, session states, and the transcript entries recorded while a
//! session runs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default number of reads a session accepts.
pub const DEFAULT_QUERY_LIMIT: u32 = 100;

/// The terminal outcome of a judge session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "reason")]
pub enum Verdict {
    Accepted,
    WrongAnswer(String),
}

impl Verdict {
    /// Process exit status the contest harness reads this verdict from.
    pub fn exit_code(&self) -> i32 {
        match self {
            Verdict::Accepted => 0,
            Verdict::WrongAnswer(_) => 1,
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }

    /// The rejection reason, if any.
    pub fn reason(&self) -> Option<&str> {
        match self {
            Verdict::Accepted => None,
            Verdict::WrongAnswer(reason) => Some(reason),
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Accepted => write!(f, "Accepted"),
            Verdict::WrongAnswer(reason) => write!(f, "WrongAnswer: {reason}"),
        }
    }
}

/// Lifecycle of a session. `Accepted` and `Rejected` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    Active,
    Accepted,
    Rejected,
}

/// Which way a transcript line travelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Judge to solution.
    Sent,
    /// Solution to judge.
    Received,
}

/// One line of the judge-solution conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exchange {
    pub direction: Direction,
    pub line: String,
}

/// Language of the feedback lines sent to the solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ja,
    En,
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::Ja => write!(f, "ja"),
            Locale::En => write!(f, "en"),
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ja" | "japanese" => Ok(Locale::Ja),
            "en" | "english" => Ok(Locale::En),
            other => Err(format!("unknown locale: {other}")),
        }
    }
}
