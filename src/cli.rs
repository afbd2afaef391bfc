use std::path::PathBuf;

use clap::Parser;

use crate::render::OutputMode;

#[derive(Parser, Debug)]
#[command(name = "style-guard")]
#[command(author, version, about = "Grade source files against their formatter output")]
#[command(long_about = "Runs each file through the formatter for its language, \
    diffs the result against the original and scores how closely they match.\n\n\
    Exit codes:\n  \
    0 - Run completed (style issues are reported, not failed)\n  \
    1 - Unexpected error\n  \
    2 - Configuration error")]
pub struct Cli {
    /// Files or directories to check
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Output mode: character, split, unified, score, json or html
    #[arg(short, long, value_name = "MODE")]
    pub output: Option<OutputMode>,

    /// Skip paths matching PATTERN (repeatable, shell wildcards)
    #[arg(short, long, value_name = "PATTERN")]
    pub ignore: Vec<String>,

    /// Path to configuration file (defaults to ./.style-guard.toml)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long, conflicts_with = "config")]
    pub no_config: bool,

    /// Print debug logs and full error chains
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the supported file extensions as JSON and exit
    #[arg(long)]
    pub extensions: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
