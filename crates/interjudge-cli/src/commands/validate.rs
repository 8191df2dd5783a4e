//! The `interjudge validate` command.

use std::path::PathBuf;

use anyhow::Result;

use interjudge_core::config::{load_config_from, DEFAULT_CONFIG_FILE};

pub fn execute(config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;

    let source = match &config_path {
        Some(p) => p.display().to_string(),
        None if std::path::Path::new(DEFAULT_CONFIG_FILE).exists() => {
            DEFAULT_CONFIG_FILE.to_string()
        }
        None => "built-in defaults".to_string(),
    };
    println!("Config: {source}");
    println!(
        "  query_limit = {}, target = {} in [{}, {}], locale = {}",
        config.query_limit,
        config.guess.target,
        config.guess.min,
        config.guess.max,
        config.guess.locale
    );

    let problems = config.validate();
    for p in &problems {
        println!("  ERROR: {p}");
    }

    if problems.is_empty() {
        println!("Config valid.");
        Ok(())
    } else {
        anyhow::bail!("{} problem(s) found", problems.len())
    }
}
