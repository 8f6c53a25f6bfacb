//! The `zoro init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("zoro.toml").exists() {
        println!("zoro.toml already exists, skipping.");
    } else {
        std::fs::write("zoro.toml", SAMPLE_CONFIG)?;
        println!("Created zoro.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit zoro.toml to choose where your history is stored");
    println!("  2. Run: zoro import zoro_exam_history.json");
    println!("  3. Run: zoro stats");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# zoro configuration

# Where the exam history is stored. ${VAR} references are expanded.
data_dir = "${HOME}/.local/share/zoro"

# What to do if the stored history cannot be read: "fail" or "reset".
on_corrupt = "fail"

# strftime pattern for displayed dates ("Jan 10, 2024").
date_format = "%b %-d, %Y"
"#;
