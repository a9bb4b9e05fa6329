//! The `kerbquiz init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("kerbquiz.toml").exists() {
        println!("kerbquiz.toml already exists, skipping.");
    } else {
        std::fs::write("kerbquiz.toml", SAMPLE_CONFIG)?;
        println!("Created kerbquiz.toml");
    }

    println!("\nNext steps:");
    println!("  1. Run: kerbquiz import --kerbs kerbs.txt --quoteboard quoteboard.txt");
    println!("  2. Run: kerbquiz validate");
    println!("  3. Run: kerbquiz play");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# kerbquiz configuration

# Corpus produced by `kerbquiz import`
data_path = "data.json"

# Extra random terms mixed into each question's choices
decoy_count = 3

# Randomize quote order at the start of a session
shuffle_quotes = true

# Fixed seed for reproducible sessions (omit for a new game every time)
# seed = 42

# Oldest quoteboard section year kept by `kerbquiz import`
min_year = 2018
"#;
