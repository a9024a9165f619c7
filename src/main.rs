//! `pernorm` command-line interface.
//!
//! Reads a file (or stdin), normalizes it and prints the normalized text, its
//! sentences, its words or both levels of tokens.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use env_logger::Builder;
use log::LevelFilter;

use pernorm::{Normalizer, NormalizerConfig, Profile, Tokenizer};

#[derive(Parser, Debug)]
#[command(name = "pernorm")]
#[command(version)]
#[command(about = "Persian text normalizer and tokenizer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// JSON file with normalizer flags; missing flags keep their defaults
    #[arg(short, long, global = true, env = "PERNORM_CONFIG", conflicts_with = "profile")]
    config: Option<PathBuf>,

    /// Named preset: standard, conservative, characters_only, spacing_only
    #[arg(short, long, global = true)]
    profile: Option<String>,

    /// Tokenize the input as is, without normalizing it first
    #[arg(long, global = true)]
    no_normalize: bool,

    /// Print token lists as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the normalized text
    Normalize {
        /// Input file; stdin when omitted
        input: Option<PathBuf>,
    },
    /// Print one sentence per line
    Sentences { input: Option<PathBuf> },
    /// Print the words of each sentence, one per line
    Words { input: Option<PathBuf> },
    /// Print every sentence as a line of space-separated tokens
    Tokenize { input: Option<PathBuf> },
}

impl Commands {
    fn input(&self) -> Option<&PathBuf> {
        match self {
            Self::Normalize { input }
            | Self::Sentences { input }
            | Self::Words { input }
            | Self::Tokenize { input } => input.as_ref(),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    Builder::new()
        .filter_level(log_level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn config_for(cli: &Cli) -> Result<NormalizerConfig> {
    if let Some(path) = &cli.config {
        let json = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        return NormalizerConfig::from_json(&json)
            .with_context(|| format!("invalid config {}", path.display()));
    }
    match cli.profile.as_deref() {
        None => Ok(NormalizerConfig::default()),
        Some(name) => match Profile::by_name(name) {
            Some(profile) => Ok(profile.config()),
            None => bail!("unknown profile `{name}`"),
        },
    }
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
        }
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = config_for(&cli)?;
    let raw = read_input(cli.command.input())?;

    let text = if cli.no_normalize && !matches!(cli.command, Commands::Normalize { .. }) {
        raw
    } else {
        let normalizer = Normalizer::with_config(config)?;
        normalizer.cleanup(raw.as_str())?.into_owned()
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.command {
        Commands::Normalize { .. } => writeln!(out, "{text}")?,
        Commands::Sentences { .. } => {
            let sentences = Tokenizer::new()?.split_sentences(&text);
            if cli.json {
                serde_json::to_writer(&mut out, &sentences)?;
                writeln!(out)?;
            } else {
                for sentence in sentences {
                    writeln!(out, "{sentence}")?;
                }
            }
        }
        Commands::Words { .. } => {
            let tokens = Tokenizer::new()?.tokenize(&text);
            if cli.json {
                serde_json::to_writer(&mut out, &tokens.concat())?;
                writeln!(out)?;
            } else {
                for word in tokens.iter().flatten() {
                    writeln!(out, "{word}")?;
                }
            }
        }
        Commands::Tokenize { .. } => {
            let tokens = Tokenizer::new()?.tokenize(&text);
            if cli.json {
                serde_json::to_writer_pretty(&mut out, &tokens)?;
                writeln!(out)?;
            } else {
                for sentence in &tokens {
                    writeln!(out, "{}", sentence.join(" "))?;
                }
            }
        }
    }
    Ok(())
}
