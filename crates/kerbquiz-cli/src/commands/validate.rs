//! The `kerbquiz validate` command.

use std::path::PathBuf;

use anyhow::Result;

use kerbquiz_core::corpus::load_corpus;

pub fn execute(data: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    let config = super::settings(config_path, data, None, None)?;
    let corpus = load_corpus(&config.data_path)?;

    println!(
        "Corpus: {} ({} terms, {} playable quotes)",
        config.data_path.display(),
        corpus.vocabulary().len(),
        corpus.len()
    );
    for (topic, count) in corpus.topic_counts() {
        println!("  {topic}: {count}");
    }

    if corpus.dropped() == 0 {
        println!("Corpus valid.");
    } else {
        println!(
            "\nCorpus valid; {} quote(s) without any term will be skipped.",
            corpus.dropped()
        );
    }

    Ok(())
}
