//! The `interjudge init` command.

use anyhow::{Context, Result};

use interjudge_core::config::DEFAULT_CONFIG_FILE;

pub fn execute() -> Result<()> {
    let path = std::path::Path::new(DEFAULT_CONFIG_FILE);
    if path.exists() {
        println!("{DEFAULT_CONFIG_FILE} already exists, skipping.");
        return Ok(());
    }

    std::fs::write(path, SAMPLE_CONFIG)
        .with_context(|| format!("failed to write {DEFAULT_CONFIG_FILE}"))?;
    println!("Created {DEFAULT_CONFIG_FILE}");

    println!("\nNext steps:");
    println!("  1. Edit {DEFAULT_CONFIG_FILE} with the problem's limits");
    println!("  2. Run: interjudge validate");
    println!("  3. Wire `interjudge run` to the solution's stdin/stdout");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# interjudge configuration

# Maximum number of lines read from the solution.
query_limit = 100

[guess]
target = 42
min = 1
max = 100
# "ja" or "en"
locale = "ja"
# Override individual feedback lines:
# smaller = "もっと小さいです"
# larger = "もっと大きいです"
# correct = "正解です"
"#;
