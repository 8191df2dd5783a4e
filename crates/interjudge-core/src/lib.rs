//! interjudge-core — Judge session, verdicts, and the interactor seam.
//!
//! This crate holds the judge side of an interactive problem: a
//! query-bounded line exchange with the solution-under-test, the verdict it
//! ends in, and the example number guessing problem built on top of it.

pub mod config;
pub mod error;
pub mod guess;
pub mod model;
pub mod report;
pub mod session;
pub mod traits;

#[cfg(test)]
mod testing;

pub use error::JudgeError;
pub use model::{SessionState, Verdict};
pub use session::{judge, Session};
pub use traits::Interactor;
