use std::path::PathBuf;

use clap::Parser;

/// Turns spoken workout descriptions into structured exercises
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Transcript to parse (reads one transcript per line from stdin if omitted)
    pub transcript: Option<String>,

    /// JSON file with additional phrases, keyword families and categories
    #[arg(long)]
    pub vocabulary: Option<PathBuf>,

    /// JSON file with parser settings
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// Pretty-print the output
    #[arg(long)]
    pub pretty: bool,
}
