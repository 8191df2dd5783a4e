//! The judge session: line-oriented I/O with the solution-under-test, a
//! query budget, and exactly one terminal verdict.
//!
//! A session never exits the process. `accept` and `reject` hand a
//! [`Verdict`] back to the caller, and the binary decides the exit status.

use std::io::{BufRead, Write};

use crate::error::JudgeError;
use crate::model::{Direction, Exchange, SessionState, Verdict, DEFAULT_QUERY_LIMIT};
use crate::traits::Interactor;

/// One judge session over an input and an output stream.
///
/// The streams are owned for the whole lifetime of the session. In the
/// binary they are the locked stdin/stdout; in tests they are in-memory
/// buffers.
pub struct Session<R, W> {
    input: R,
    output: W,
    queries_used: u32,
    query_limit: u32,
    state: SessionState,
    verdict: Option<Verdict>,
    transcript: Vec<Exchange>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create an active session with the default query limit.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            queries_used: 0,
            query_limit: DEFAULT_QUERY_LIMIT,
            state: SessionState::Active,
            verdict: None,
            transcript: Vec::new(),
        }
    }

    /// Set the maximum number of reads for the rest of the session.
    ///
    /// Only allowed before the first read.
    pub fn configure(&mut self, limit: u32) -> Result<(), JudgeError> {
        self.ensure_active()?;
        if limit == 0 {
            return Err(JudgeError::InvalidLimit(limit));
        }
        if self.queries_used > 0 {
            return Err(JudgeError::ConfigureAfterRead);
        }
        self.query_limit = limit;
        tracing::debug!(limit, "query limit configured");
        Ok(())
    }

    /// Write one line to the solution and flush it immediately.
    ///
    /// `message` must not contain a line break; one call is one protocol
    /// line. A write or flush failure means the channel is gone and is
    /// returned as a fatal [`JudgeError::Io`].
    pub fn emit(&mut self, message: &str) -> Result<(), JudgeError> {
        self.ensure_active()?;
        if message.contains(['\n', '\r']) {
            return Err(JudgeError::MultiLineMessage(message.to_string()));
        }
        writeln!(self.output, "{message}")?;
        self.output.flush()?;
        tracing::debug!(line = message, "sent");
        self.transcript.push(Exchange {
            direction: Direction::Sent,
            line: message.to_string(),
        });
        Ok(())
    }

    /// Read one line from the solution, without its line terminator.
    ///
    /// Fails with [`JudgeError::QueryLimitExceeded`] before touching the
    /// stream once the budget is spent, and with
    /// [`JudgeError::UnexpectedEof`] when the solution closed its output.
    pub fn receive(&mut self) -> Result<String, JudgeError> {
        self.ensure_active()?;
        if self.queries_used >= self.query_limit {
            tracing::warn!(limit = self.query_limit, "query limit exceeded");
            return Err(JudgeError::QueryLimitExceeded {
                limit: self.query_limit,
            });
        }
        self.queries_used += 1;

        let mut buf = Vec::new();
        let read = self.input.read_until(b'\n', &mut buf)?;
        if read == 0 {
            tracing::warn!(queries_used = self.queries_used, "input closed");
            return Err(JudgeError::UnexpectedEof);
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        // Invalid UTF-8 is left for the interactor to reject as malformed input.
        let line = String::from_utf8_lossy(&buf).into_owned();

        tracing::debug!(query = self.queries_used, line = %line, "received");
        self.transcript.push(Exchange {
            direction: Direction::Received,
            line: line.clone(),
        });
        Ok(line)
    }

    /// End the session as Accepted.
    pub fn accept(&mut self) -> Verdict {
        self.conclude(Verdict::Accepted)
    }

    /// End the session as WrongAnswer with an operator-facing reason.
    pub fn reject(&mut self, reason: impl Into<String>) -> Verdict {
        self.conclude(Verdict::WrongAnswer(reason.into()))
    }

    /// Record `verdict` unless one already exists. Returns the verdict that
    /// holds for the session, which is always the first one.
    fn conclude(&mut self, verdict: Verdict) -> Verdict {
        if let Some(existing) = &self.verdict {
            tracing::warn!(
                ignored = %verdict,
                kept = %existing,
                "session already has a verdict"
            );
            return existing.clone();
        }
        self.state = match verdict {
            Verdict::Accepted => SessionState::Accepted,
            Verdict::WrongAnswer(_) => SessionState::Rejected,
        };
        tracing::info!(
            verdict = %verdict,
            queries_used = self.queries_used,
            query_limit = self.query_limit,
            "session finished"
        );
        self.verdict = Some(verdict.clone());
        verdict
    }

    fn ensure_active(&self) -> Result<(), JudgeError> {
        if self.state == SessionState::Active {
            Ok(())
        } else {
            Err(JudgeError::SessionClosed)
        }
    }

    pub fn queries_used(&self) -> u32 {
        self.queries_used
    }

    pub fn query_limit(&self) -> u32 {
        self.query_limit
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn verdict(&self) -> Option<&Verdict> {
        self.verdict.as_ref()
    }

    /// Every line sent and received so far, in order.
    pub fn transcript(&self) -> &[Exchange] {
        &self.transcript
    }

    /// Give back the underlying streams.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}

/// Run `interactor` against `session` and return the session's verdict.
///
/// Protocol violations raised inside the interactor (query limit, end of
/// input) become a WrongAnswer carrying the error message. Stream failures
/// and session misuse are returned as errors.
pub fn judge<R, W, I>(
    session: &mut Session<R, W>,
    interactor: &mut I,
) -> Result<Verdict, JudgeError>
where
    R: BufRead,
    W: Write,
    I: Interactor,
{
    tracing::info!(
        problem = interactor.name(),
        query_limit = session.query_limit(),
        "session started"
    );
    match interactor.interact(session) {
        Ok(verdict) => {
            if let Some(existing) = session.verdict().cloned() {
                return Ok(existing);
            }
            Ok(session.conclude(verdict))
        }
        Err(e) if e.is_protocol_violation() => Ok(session.reject(e.to_string())),
        Err(e) => Err(e),
    }
}
