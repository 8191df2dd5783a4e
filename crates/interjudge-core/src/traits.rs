//! The seam between the judge session and problem-specific logic.

use std::io::{BufRead, Write};

use crate::error::JudgeError;
use crate::model::Verdict;
use crate::session::Session;

/// A problem-specific driving loop.
///
/// Implementations read the solution's lines with [`Session::receive`],
/// answer with [`Session::emit`], and finish with [`Session::accept`] or
/// [`Session::reject`]. Protocol errors from `receive` may be propagated
/// with `?`; [`crate::session::judge`] turns them into a WrongAnswer.
///
/// Input that cannot be interpreted as the expected domain value must be
/// rejected with a descriptive reason, never returned as an error.
pub trait Interactor {
    /// Short problem name used in logs and reports.
    fn name(&self) -> &str;

    /// Drive the session until a verdict is reached.
    fn interact<R: BufRead, W: Write>(
        &mut self,
        session: &mut Session<R, W>,
    ) -> Result<Verdict, JudgeError>;
}
