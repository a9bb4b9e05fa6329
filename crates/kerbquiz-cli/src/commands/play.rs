//! The `kerbquiz play` command.
//!
//! A line-oriented stand-in for drag and drop: each `move` names the
//! collection and index a candidate is dragged from and where it is dropped.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use rand::Rng;

use kerbquiz_core::corpus::load_corpus;
use kerbquiz_core::model::{BlankId, CollectionId, Location};
use kerbquiz_core::placement::{IgnoreReason, MoveOutcome};
use kerbquiz_core::Quiz;

use crate::render;

const HELP: &str = "\
Commands:
  move <from> <index> <to> [index]   drag a candidate (collections: tray, or a blank like 1.1)
  drop <from> <index>                release a candidate outside any target
  place <tray-index> <blank>         shorthand for: move tray <tray-index> <blank>
  back <blank>                       return a blank's candidate to the end of the tray
  show                               redraw the question with a status table
  reveal                             show the answers
  reset                              clear all placements
  next                               go to the next quote
  help                               this message
  quit                               leave";

/// One parsed line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayCommand {
    Move {
        origin: Location,
        dest: Option<Location>,
    },
    Show,
    Reveal,
    Reset,
    Next,
    Help,
    Quit,
}

fn parse_index(s: &str) -> Result<usize, String> {
    s.parse().map_err(|_| format!("not an index: {s}"))
}

pub fn parse_command(line: &str) -> Result<PlayCommand, String> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let Some((&verb, args)) = words.split_first() else {
        return Err("empty command".into());
    };

    match (verb.to_lowercase().as_str(), args) {
        ("move" | "mv", [from, index, to]) | ("move" | "mv", [from, index, to, _]) => {
            let dest_index = args.get(3).map(|s| parse_index(s)).transpose()?;
            Ok(PlayCommand::Move {
                origin: Location::new(from.parse()?, parse_index(index)?),
                dest: Some(Location::new(to.parse()?, dest_index.unwrap_or(0))),
            })
        }
        ("drop", [from, index]) => Ok(PlayCommand::Move {
            origin: Location::new(from.parse()?, parse_index(index)?),
            dest: None,
        }),
        ("place" | "p", [index, blank]) => Ok(PlayCommand::Move {
            origin: Location::tray(parse_index(index)?),
            dest: Some(Location::blank(blank.parse::<BlankId>()?)),
        }),
        ("back" | "b", [blank]) => Ok(PlayCommand::Move {
            origin: Location::blank(blank.parse::<BlankId>()?),
            dest: Some(Location::tray(usize::MAX)),
        }),
        ("show" | "s", []) => Ok(PlayCommand::Show),
        ("reveal", []) => Ok(PlayCommand::Reveal),
        ("reset", []) => Ok(PlayCommand::Reset),
        ("next" | "n", []) => Ok(PlayCommand::Next),
        ("help" | "h" | "?", []) => Ok(PlayCommand::Help),
        ("quit" | "q" | "exit", []) => Ok(PlayCommand::Quit),
        (other, _) => Err(format!("unknown or malformed command: {other} (try `help`)")),
    }
}

fn describe(outcome: MoveOutcome) -> String {
    match outcome {
        MoveOutcome::Reordered => "Reordered.".into(),
        MoveOutcome::Moved => "Moved.".into(),
        MoveOutcome::Swapped { .. } => "Swapped; the previous occupant went back.".into(),
        MoveOutcome::Ignored(reason) => match reason {
            IgnoreReason::NoDestination => "Dropped outside any target; nothing changed.".into(),
            IgnoreReason::UnknownCollection(CollectionId::Tray) => "Unknown collection.".into(),
            IgnoreReason::UnknownCollection(CollectionId::Blank(id)) => {
                format!("There is no blank {id}.")
            }
            IgnoreReason::EmptyOrigin { collection, index } => {
                format!("Nothing at {collection} {index}.")
            }
            IgnoreReason::SameBlank => "Already there.".into(),
        },
    }
}

fn print_question<R: Rng, W: Write>(quiz: &Quiz<R>, out: &mut W, table: bool) -> Result<()> {
    let judgment = quiz.judge();
    writeln!(
        out,
        "\nQuote {} of {} {}",
        quiz.index() + 1,
        quiz.corpus().len(),
        render::question_view(quiz.question(), &judgment)
    )?;
    if table {
        writeln!(out, "{}", render::status_table(quiz.question(), &judgment))?;
    }
    Ok(())
}

/// Drive a quiz from line-oriented input until `quit` or end of input.
pub fn run_session<R: Rng, I: BufRead, W: Write>(
    quiz: &mut Quiz<R>,
    input: I,
    out: &mut W,
) -> Result<()> {
    print_question(quiz, out, false)?;
    let mut announced = false;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                writeln!(out, "{e}")?;
                continue;
            }
        };

        match command {
            PlayCommand::Move { origin, dest } => {
                let outcome = quiz.apply_move(origin, dest);
                writeln!(out, "{}", describe(outcome))?;
                if !outcome.changed() {
                    continue;
                }
            }
            PlayCommand::Show => {
                print_question(quiz, out, true)?;
                continue;
            }
            PlayCommand::Reveal => quiz.reveal()?,
            PlayCommand::Reset => {
                quiz.reset()?;
                announced = false;
            }
            PlayCommand::Next => {
                quiz.next_quote()?;
                announced = false;
            }
            PlayCommand::Help => {
                writeln!(out, "{HELP}")?;
                continue;
            }
            PlayCommand::Quit => break,
        }

        print_question(quiz, out, false)?;
        if quiz.judge().complete && !announced {
            writeln!(out, "Complete! Type `next` for another quote.")?;
            announced = true;
        }
    }

    writeln!(out, "Bye.")?;
    Ok(())
}

pub fn execute(
    data: Option<PathBuf>,
    seed: Option<u64>,
    decoys: Option<usize>,
    no_shuffle: bool,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let mut config = super::settings(config_path, data, seed, decoys)?;
    if no_shuffle {
        config.shuffle_quotes = false;
    }

    let corpus = load_corpus(&config.data_path)?;
    let rng = super::make_rng(config.seed);
    let mut quiz = Quiz::new(corpus, config.quiz_options(), rng)?;

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    writeln!(stdout, "Type `help` for commands.")?;
    run_session(&mut quiz, stdin.lock(), &mut stdout)
}
