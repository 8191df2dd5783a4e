//! Number guessing: the bundled example problem.
//!
//! The solution prints one integer per line. The judge answers whether the
//! hidden target is smaller or larger, and accepts once it is hit.

use std::cmp::Ordering;
use std::io::{BufRead, Write};

use crate::error::JudgeError;
use crate::model::{Locale, Verdict};
use crate::session::Session;
use crate::traits::Interactor;

/// Feedback lines sent to the solution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub smaller: String,
    pub larger: String,
    pub correct: String,
}

impl Feedback {
    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::Ja => Self {
                smaller: "もっと小さいです".into(),
                larger: "もっと大きいです".into(),
                correct: "正解です".into(),
            },
            Locale::En => Self {
                smaller: "smaller".into(),
                larger: "larger".into(),
                correct: "correct".into(),
            },
        }
    }
}

/// The hidden-number game over an inclusive range.
#[derive(Debug, Clone)]
pub struct GuessNumber {
    target: i64,
    min: i64,
    max: i64,
    feedback: Feedback,
}

impl GuessNumber {
    /// Create a game. Fails unless `min <= target <= max`.
    pub fn new(target: i64, min: i64, max: i64, locale: Locale) -> Result<Self, JudgeError> {
        if min > max {
            return Err(JudgeError::InvalidProblem(format!(
                "empty range [{min}, {max}]"
            )));
        }
        if !(min..=max).contains(&target) {
            return Err(JudgeError::InvalidProblem(format!(
                "target {target} outside range [{min}, {max}]"
            )));
        }
        Ok(Self {
            target,
            min,
            max,
            feedback: Feedback::for_locale(locale),
        })
    }

    pub fn with_feedback(mut self, feedback: Feedback) -> Self {
        self.feedback = feedback;
        self
    }

    pub fn target(&self) -> i64 {
        self.target
    }
}

impl Interactor for GuessNumber {
    fn name(&self) -> &str {
        "guess-number"
    }

    fn interact<R: BufRead, W: Write>(
        &mut self,
        session: &mut Session<R, W>,
    ) -> Result<Verdict, JudgeError> {
        loop {
            let line = session.receive()?;
            let guess = match line.trim().parse::<i64>() {
                Ok(g) => g,
                Err(_) => {
                    return Ok(session.reject(format!(
                        "invalid input: expected an integer, got '{line}'"
                    )));
                }
            };
            if !(self.min..=self.max).contains(&guess) {
                return Ok(session.reject(format!(
                    "guess {guess} out of range [{}, {}]",
                    self.min, self.max
                )));
            }

            match guess.cmp(&self.target) {
                Ordering::Greater => session.emit(&self.feedback.smaller)?,
                Ordering::Less => session.emit(&self.feedback.larger)?,
                Ordering::Equal => {
                    session.emit(&self.feedback.correct)?;
                    return Ok(session.accept());
                }
            }
        }
    }
}
