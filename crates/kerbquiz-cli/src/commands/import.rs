//! The `kerbquiz import` command.

use std::path::PathBuf;

use anyhow::Result;

use kerbquiz_core::config::load_config_from;
use kerbquiz_import::{import_corpus, write_corpus, ImportOptions};

pub fn execute(
    kerbs: PathBuf,
    quoteboard: PathBuf,
    output: Option<PathBuf>,
    min_year: Option<u32>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let options = ImportOptions {
        min_year: min_year.unwrap_or(config.min_year),
    };
    let output = output.unwrap_or(config.data_path);

    let corpus = import_corpus(&kerbs, &quoteboard, &options)?;
    write_corpus(&output, &corpus)?;

    let quote_count: usize = corpus.quotes.iter().map(|g| g.quotes.len()).sum();
    println!(
        "Imported {} terms and {} quotes in {} sections to {}",
        corpus.kerberoi.len(),
        quote_count,
        corpus.quotes.len(),
        output.display()
    );

    Ok(())
}
