use std::{
    fs,
    io::{self, BufRead, Write},
    path::Path,
};

use anyhow::{Context, Result};
use clap::Parser as _;
use env_logger::Env;
use log::{debug, warn};
use vocalift_domain::WorkoutDraft;
use vocalift_parser::{Parser, Settings, Vocabulary, VocabularyData};

mod cli;
use cli::Cli;

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let custom_vocabulary = cli
        .vocabulary
        .as_deref()
        .map(load_vocabulary)
        .transpose()?;
    let vocabulary = custom_vocabulary.as_ref().unwrap_or(Vocabulary::builtin());
    let settings = cli
        .settings
        .as_deref()
        .map(load_settings)
        .transpose()?
        .unwrap_or_default();
    let parser = Parser::new(vocabulary, &settings);

    let mut stdout = io::stdout().lock();

    match cli.transcript {
        Some(transcript) => write_draft(&mut stdout, &parser.parse(&transcript), cli.pretty),
        None => run(io::stdin().lock(), &mut stdout, &parser, cli.pretty),
    }
}

/// Extends the built-in vocabulary by the vocabulary in `path`.
fn load_vocabulary(path: &Path) -> Result<Vocabulary> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read vocabulary from {}", path.display()))?;
    let data = serde_json::from_str::<VocabularyData>(&json)
        .with_context(|| format!("failed to parse vocabulary in {}", path.display()))?;
    let vocabulary = Vocabulary::try_from(VocabularyData::builtin().merge(data))
        .with_context(|| format!("invalid vocabulary in {}", path.display()))?;

    debug!(
        "loaded vocabulary with {} phrases from {}",
        vocabulary.phrases().len(),
        path.display()
    );

    Ok(vocabulary)
}

fn load_settings(path: &Path) -> Result<Settings> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read settings from {}", path.display()))?;
    Settings::from_json(&json).with_context(|| format!("invalid settings in {}", path.display()))
}

/// Parses every input line as the latest state of a growing transcript.
fn run<R: BufRead, W: Write>(input: R, output: &mut W, parser: &Parser, pretty: bool) -> Result<()> {
    for line in input.lines() {
        match line {
            Ok(transcript) => write_draft(output, &parser.parse(&transcript), pretty)?,
            Err(err) => warn!("skipping unreadable transcript: {err}"),
        }
    }

    Ok(())
}

fn write_draft<W: Write>(output: &mut W, draft: &WorkoutDraft, pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *output, draft)?;
    } else {
        serde_json::to_writer(&mut *output, draft)?;
    }
    writeln!(output)?;
    output.flush().context("failed to write output")
}
