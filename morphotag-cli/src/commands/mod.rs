//! CLI command implementations

use anyhow::Result;
use clap::{Parser, Subcommand};
use morphotag_engine::TokenizerKind;

use crate::output::OutputFormat;

pub mod generate_config;
pub mod tag;
pub mod tokenize;

/// Morphological tagging, lemmatization and tokenization
#[derive(Debug, Parser)]
#[command(name = "morphotag", version, about, long_about = None)]
pub struct Cli {
    /// Command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Tag and lemmatize text with a model
    Tag(tag::TagArgs),

    /// Split text into sentences and tokens without tagging
    Tokenize(tokenize::TokenizeArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Write a commented configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List built-in tokenizers
    Tokenizers,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Tag(args) => args.execute(),
            Commands::Tokenize(args) => args.execute(),
            Commands::List { subcommand } => {
                print!("{}", subcommand.render());
                Ok(())
            }
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

impl ListCommands {
    /// Text printed for this listing
    pub fn render(&self) -> String {
        let mut out = String::new();
        match self {
            ListCommands::Tokenizers => {
                out.push_str("Available tokenizers:\n");
                for kind in TokenizerKind::ALL {
                    let description = match kind {
                        TokenizerKind::Vertical => "one token per line, empty line ends a sentence",
                        TokenizerKind::Czech => "Czech rules and abbreviations",
                        TokenizerKind::English => "English rules, contractions and abbreviations",
                        TokenizerKind::Generic => "language-neutral rules",
                    };
                    out.push_str(&format!("  {:<10} {description}\n", kind.name()));
                }
            }
            ListCommands::Formats => {
                out.push_str("Available output formats:\n");
                for (format, description) in OutputFormat::ALL {
                    out.push_str(&format!("  {:<10} {description}\n", format.name()));
                }
            }
        }
        out
    }
}

/// Initialize logging based on verbosity level
pub(crate) fn init_logging(verbose: u8, quiet: bool) {
    let log_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    // Keeps an already installed logger
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init();
}
