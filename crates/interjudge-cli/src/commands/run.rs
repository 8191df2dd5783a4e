//! The `interjudge run` command.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};

use interjudge_core::config::load_config_from;
use interjudge_core::model::Locale;
use interjudge_core::report::SessionReport;
use interjudge_core::traits::Interactor;
use interjudge_core::{judge, Session, Verdict};

pub fn execute(
    config_path: Option<PathBuf>,
    limit: Option<u32>,
    target: Option<i64>,
    locale: Option<Locale>,
    report_path: Option<PathBuf>,
) -> Result<Verdict> {
    let mut config = load_config_from(config_path.as_deref())?;
    if let Some(limit) = limit {
        config.query_limit = limit;
    }
    if let Some(target) = target {
        config.guess.target = target;
    }
    if let Some(locale) = locale {
        config.guess.locale = locale;
    }

    let problems = config.validate();
    anyhow::ensure!(
        problems.is_empty(),
        "invalid configuration:\n  {}",
        problems.join("\n  ")
    );

    let mut game = config.guess.build()?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock());
    session.configure(config.query_limit)?;

    let started_at = chrono::Utc::now();
    let verdict = judge(&mut session, &mut game).context("judge session failed")?;

    if let Some(path) = &report_path {
        let report = SessionReport::from_session(&session, game.name(), &verdict, started_at);
        match report.save_json(path) {
            Ok(()) => tracing::info!("session report: {}", path.display()),
            // The verdict stands even if the report cannot be written.
            Err(e) => tracing::error!("failed to write session report: {e:#}"),
        }
    }

    Ok(verdict)
}

/// Print the operator-facing outcome to stderr and return the exit status.
pub fn report_verdict(verdict: &Verdict) -> i32 {
    if let Verdict::WrongAnswer(reason) = verdict {
        eprintln!("WrongAnswer: {reason}");
    }
    verdict.exit_code()
}
