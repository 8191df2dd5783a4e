//! Judge session error types.
//!
//! Protocol violations by the solution-under-test are surfaced here so an
//! interactor can propagate them with `?`; [`crate::session::judge`] turns
//! them into a WrongAnswer verdict. Everything else is either a misuse of the
//! session or a fatal stream failure.

use thiserror::Error;

/// Errors that can occur while driving a judge session.
#[derive(Debug, Error)]
pub enum JudgeError {
    /// A read was requested after the query budget was spent.
    #[error("query limit exceeded (limit {limit})")]
    QueryLimitExceeded { limit: u32 },

    /// The solution closed its output before a verdict was reached.
    #[error("unexpected end of input")]
    UnexpectedEof,

    /// The query limit must be positive.
    #[error("invalid query limit: {0} (must be greater than 0)")]
    InvalidLimit(u32),

    /// `configure` was called after the first read.
    #[error("query limit can only be configured before the first read")]
    ConfigureAfterRead,

    /// The session already holds a verdict.
    #[error("session already finished")]
    SessionClosed,

    /// A message passed to `emit` would span more than one protocol line.
    #[error("message must be a single line: {0:?}")]
    MultiLineMessage(String),

    /// Problem parameters are inconsistent.
    #[error("invalid problem: {0}")]
    InvalidProblem(String),

    /// The judge-solution channel failed.
    #[error("stream failure: {0}")]
    Io(#[from] std::io::Error),
}

impl JudgeError {
    /// Returns `true` if the error was caused by the solution breaking the
    /// protocol, and should end the session as WrongAnswer.
    pub fn is_protocol_violation(&self) -> bool {
        matches!(
            self,
            JudgeError::QueryLimitExceeded { .. } | JudgeError::UnexpectedEof
        )
    }
}
