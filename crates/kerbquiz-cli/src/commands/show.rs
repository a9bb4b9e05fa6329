//! The `kerbquiz show` command.

use std::path::PathBuf;

use anyhow::Result;
use serde::Serialize;

use kerbquiz_core::corpus::load_corpus;
use kerbquiz_core::model::{BlankId, Segment};
use kerbquiz_core::{Question, QuizError};

use crate::render;

#[derive(Serialize)]
struct QuestionDump<'a> {
    index: usize,
    topic: &'a str,
    text: &'a str,
    segments: &'a [Segment],
    blanks: Vec<BlankDump<'a>>,
    tray: Vec<&'a str>,
}

#[derive(Serialize)]
struct BlankDump<'a> {
    id: BlankId,
    expected: &'a str,
}

pub fn execute(
    data: Option<PathBuf>,
    index: usize,
    seed: Option<u64>,
    decoys: Option<usize>,
    format: String,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = super::settings(config_path, data, seed, decoys)?;
    let corpus = load_corpus(&config.data_path)?;
    let mut rng = super::make_rng(config.seed);

    let quote = corpus
        .get(index)
        .cloned()
        .ok_or(QuizError::QuoteOutOfRange {
            index,
            len: corpus.len(),
        })?;
    let question = Question::new(
        quote,
        corpus.matcher(),
        corpus.vocabulary(),
        config.decoy_count,
        &mut rng,
    )?;

    match format.as_str() {
        "json" => {
            let dump = QuestionDump {
                index,
                topic: &question.quote().topic,
                text: &question.quote().text,
                segments: &question.segmented().segments,
                blanks: question
                    .segmented()
                    .blanks()
                    .into_iter()
                    .map(|(id, expected)| BlankDump { id, expected })
                    .collect(),
                tray: question
                    .store()
                    .tray()
                    .iter()
                    .map(|c| c.term.as_str())
                    .collect(),
            };
            println!("{}", serde_json::to_string_pretty(&dump)?);
        }
        "text" => {
            println!("Quote {} of {}", index + 1, corpus.len());
            println!("{}", render::question_view(&question, &question.judge()));
        }
        other => anyhow::bail!("unknown format: {other} (expected text or json)"),
    }

    Ok(())
}
