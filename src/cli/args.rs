//! Command line argument parsing for the jargon CLI using clap.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::analysis::synonym::MatcherConfig;

/// Jargon - recognizes technical terms in text and rewrites them to
/// canonical form
#[derive(Parser, Debug, Clone)]
#[command(name = "jargon")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct JargonArgs {
    /// Input file (default: stdin)
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Treat the input as HTML; markup passes through untouched
    #[arg(long)]
    pub html: bool,

    /// Synonym dictionary (JSON object of "phrase, phrase": "canonical")
    #[arg(short, long, value_name = "FILE", env = "JARGON_DICTIONARY")]
    pub dictionary: Option<PathBuf>,

    /// Fold case when matching phrases
    #[arg(long)]
    pub ignore_case: bool,

    /// Characters that are insignificant when matching phrases
    #[arg(long, value_name = "CHARS")]
    pub ignore: Option<String>,

    /// Filter to apply, in order; may be repeated (default: synonyms when a
    /// dictionary is given)
    #[arg(long = "filter", value_enum, value_name = "FILTER")]
    pub filters: Vec<FilterKind>,

    /// Print the number of tokens instead of the tokens
    #[arg(long)]
    pub count: bool,

    /// Write one token per line
    #[arg(long)]
    pub lines: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,
}

/// Filters selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FilterKind {
    /// Replace dictionary phrases with canonical terms
    Synonyms,
    /// Keep only canonical terms
    Lemmas,
    /// Keep the first occurrence of each token
    Distinct,
}

impl JargonArgs {
    /// Log filter for `env_logger`, from `-q` and the `-v` count.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "off";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Matcher settings: technical-term defaults unless `--ignore-case` or
    /// `--ignore` is given, in which case exactly those settings apply.
    pub fn matcher_config(&self) -> MatcherConfig {
        if !self.ignore_case && self.ignore.is_none() {
            return MatcherConfig::tech_terms();
        }
        MatcherConfig::default()
            .with_ignore_case(self.ignore_case)
            .ignore(self.ignore.iter().flat_map(|chars| chars.chars()))
    }

    /// The filters to apply, in order.
    pub fn filter_chain(&self) -> Vec<FilterKind> {
        if self.filters.is_empty() && self.dictionary.is_some() {
            return vec![FilterKind::Synonyms];
        }
        self.filters.clone()
    }
}
