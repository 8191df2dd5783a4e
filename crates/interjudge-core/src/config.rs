//! Judge configuration loaded from TOML.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::JudgeError;
use crate::guess::{Feedback, GuessNumber};
use crate::model::{Locale, DEFAULT_QUERY_LIMIT};

/// File looked up in the current directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "interjudge.toml";

/// Top-level interjudge configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JudgeConfig {
    /// Maximum number of lines read from the solution.
    #[serde(default = "default_query_limit")]
    pub query_limit: u32,
    /// Parameters of the number guessing problem.
    #[serde(default)]
    pub guess: GuessConfig,
}

/// Parameters of the number guessing problem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuessConfig {
    #[serde(default = "default_target")]
    pub target: i64,
    #[serde(default = "default_min")]
    pub min: i64,
    #[serde(default = "default_max")]
    pub max: i64,
    /// Language of the feedback lines.
    #[serde(default)]
    pub locale: Locale,
    /// Overrides for individual feedback lines.
    #[serde(default)]
    pub smaller: Option<String>,
    #[serde(default)]
    pub larger: Option<String>,
    #[serde(default)]
    pub correct: Option<String>,
}

fn default_query_limit() -> u32 {
    DEFAULT_QUERY_LIMIT
}
fn default_target() -> i64 {
    42
}
fn default_min() -> i64 {
    1
}
fn default_max() -> i64 {
    100
}

impl Default for JudgeConfig {
    fn default() -> Self {
        Self {
            query_limit: default_query_limit(),
            guess: GuessConfig::default(),
        }
    }
}

impl Default for GuessConfig {
    fn default() -> Self {
        Self {
            target: default_target(),
            min: default_min(),
            max: default_max(),
            locale: Locale::default(),
            smaller: None,
            larger: None,
            correct: None,
        }
    }
}

impl JudgeConfig {
    /// Check the configuration for values a session cannot run with.
    ///
    /// Returns one message per problem; an empty list means valid.
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if self.query_limit == 0 {
            problems.push("query_limit must be greater than 0".to_string());
        }
        let g = &self.guess;
        if g.min > g.max {
            problems.push(format!(
                "guess.min ({}) is greater than guess.max ({})",
                g.min, g.max
            ));
        } else if !(g.min..=g.max).contains(&g.target) {
            problems.push(format!(
                "guess.target ({}) is outside [{}, {}]",
                g.target, g.min, g.max
            ));
        }
        for (key, value) in [
            ("smaller", &g.smaller),
            ("larger", &g.larger),
            ("correct", &g.correct),
        ] {
            if value
                .as_deref()
                .is_some_and(|v| v.trim().is_empty() || v.contains('\n'))
            {
                problems.push(format!("guess.{key} must be a single non-empty line"));
            }
        }
        problems
    }
}

impl GuessConfig {
    /// Build the problem described by this configuration.
    pub fn build(&self) -> Result<GuessNumber, JudgeError> {
        let mut feedback = Feedback::for_locale(self.locale);
        if let Some(s) = &self.smaller {
            feedback.smaller = s.clone();
        }
        if let Some(s) = &self.larger {
            feedback.larger = s.clone();
        }
        if let Some(s) = &self.correct {
            feedback.correct = s.clone();
        }
        let game = GuessNumber::new(self.target, self.min, self.max, self.locale)?;
        Ok(game.with_feedback(feedback))
    }
}

/// Load config from an explicit path, or from `interjudge.toml` in the
/// current directory if it exists, or fall back to defaults.
pub fn load_config_from(path: Option<&Path>) -> Result<JudgeConfig> {
    let config_path = match path {
        Some(p) if p.exists() => Some(p.to_path_buf()),
        Some(p) => anyhow::bail!("config file not found: {}", p.display()),
        None => {
            let local = PathBuf::from(DEFAULT_CONFIG_FILE);
            local.exists().then_some(local)
        }
    };

    match config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<JudgeConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))
        }
        None => Ok(JudgeConfig::default()),
    }
}
