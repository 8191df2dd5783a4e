//! Session reports with JSON persistence.
//!
//! A report is written for the judge operator after the verdict is known.
//! It is never shown to the solution-under-test.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{Exchange, Verdict};
use crate::session::Session;

/// Record of one finished judge session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// Name of the problem that was judged.
    pub problem: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub query_limit: u32,
    pub queries_used: u32,
    pub verdict: Verdict,
    /// Every line sent and received, in order.
    pub transcript: Vec<Exchange>,
    /// Wall-clock duration in milliseconds.
    pub duration_ms: u64,
}

impl SessionReport {
    /// Capture the current state of `session`, which should hold `verdict`.
    pub fn from_session<R, W>(
        session: &Session<R, W>,
        problem: &str,
        verdict: &Verdict,
        started_at: DateTime<Utc>,
    ) -> Self
    where
        R: std::io::BufRead,
        W: std::io::Write,
    {
        let finished_at = Utc::now();
        let duration_ms = (finished_at - started_at).num_milliseconds().max(0) as u64;
        Self {
            id: Uuid::new_v4(),
            problem: problem.to_string(),
            started_at,
            finished_at,
            query_limit: session.query_limit(),
            queries_used: session.queries_used(),
            verdict: verdict.clone(),
            transcript: session.transcript().to_vec(),
            duration_ms,
        }
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: SessionReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }
}
