//! Tag command implementation

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use morphotag_engine::{Input, TagOptions, Tagger, Token};
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use super::init_logging;
use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, Document, FileReader};
use crate::output::{OutputFormat, OutputFormatter};
use crate::progress::ProgressReporter;

/// Arguments for the tag command
#[derive(Debug, Args)]
pub struct TagArgs {
    /// Model file
    #[arg(short, long, value_name = "FILE", env = "MORPHOTAG_MODEL")]
    pub model: Option<PathBuf>,

    /// Input files or patterns (supports glob; stdin when absent)
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// How input documents are structured
    #[arg(long, value_enum, default_value = "text")]
    pub input_format: InputFormat,

    /// Group output by sentence
    #[arg(short, long)]
    pub sentences: bool,

    /// Send unknown words to the model's guesser
    #[arg(short, long)]
    pub guesser: bool,

    /// Output format (default: from config, else vertical)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Number of worker threads for multiple files (0 = all CPUs)
    #[arg(short, long, value_name = "N")]
    pub jobs: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Structure of input documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// Raw text, tokenized by the model's tokenizer
    Text,
    /// One token per line, empty line between sentences
    Vertical,
    /// JSON: a string of raw text, or an array of sentences as arrays of words
    Json,
}

impl InputFormat {
    /// Turn document text into tagger input
    pub fn parse(self, text: &str) -> Result<Input> {
        match self {
            InputFormat::Text => Ok(Input::raw(text)),
            InputFormat::Vertical => Ok(Input::from_vertical(text)),
            InputFormat::Json => {
                let value: serde_json::Value = serde_json::from_str(text)
                    .map_err(|e| CliError::InvalidInput(format!("malformed JSON: {e}")))?;
                Ok(Input::from_json(&value)?)
            }
        }
    }
}

/// Tagging results of one document, kept until its turn to be written
enum Tagged {
    Flat(Vec<Token>),
    Sentences(Vec<Vec<Token>>),
}

/// Settings resolved from arguments and the config file
struct Settings {
    model: PathBuf,
    guesser: bool,
    format: OutputFormat,
    pretty_json: bool,
    threads: usize,
}

impl TagArgs {
    /// Execute the tag command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);
        log::debug!("Arguments: {self:?}");

        let config = CliConfig::load_or_default(self.config.as_deref())?;
        let settings = self.settings(&config)?;

        let tagger = Tagger::load(&settings.model, settings.guesser)
            .with_context(|| format!("Failed to load model {}", settings.model.display()))?;
        let options = tagger.default_options();

        let mut formatter = settings
            .format
            .formatter(self.open_output()?, settings.pretty_json);

        if self.input.is_empty() {
            let document = Document {
                name: "<stdin>".to_string(),
                text: FileReader::read_stdin()?,
            };
            let mut tagger = tagger;
            self.stream_document(&mut tagger, &document, options, formatter.as_mut())?;
        } else {
            let files = resolve_patterns(&self.input)?;
            log::info!("Tagging {} file(s)", files.len());

            if files.len() == 1 {
                let document = FileReader::read_document(&files[0])?;
                let mut tagger = tagger;
                self.stream_document(&mut tagger, &document, options, formatter.as_mut())?;
            } else {
                self.tag_files(&tagger, &files, options, settings.threads, formatter.as_mut())?;
            }
        }

        formatter.finish()
    }

    fn settings(&self, config: &CliConfig) -> Result<Settings> {
        let model = self
            .model
            .clone()
            .or_else(|| config.tagger.model.clone())
            .ok_or_else(|| {
                CliError::ConfigError(
                    "no model given; use --model or set [tagger] model in the config file"
                        .to_string(),
                )
            })?;

        let format = match self.format {
            Some(format) => format,
            None => config.output.format.parse()?,
        };

        let threads = match self.jobs {
            Some(0) => num_cpus::get(),
            Some(n) => n,
            None => config.performance.threads(),
        };

        Ok(Settings {
            model,
            guesser: self.guesser || config.tagger.guesser,
            format,
            pretty_json: config.output.pretty_json,
            threads,
        })
    }

    fn open_output(&self) -> Result<Box<dyn Write + Send>> {
        Ok(match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(BufWriter::new(io::stdout())),
        })
    }

    /// Tag one document, writing tokens as they are produced
    fn stream_document(
        &self,
        tagger: &mut Tagger,
        document: &Document,
        options: TagOptions,
        formatter: &mut dyn OutputFormatter,
    ) -> Result<()> {
        let input = self.input_format.parse(&document.text)?;
        let context = || format!("Failed to tag {}", document.name);

        if self.sentences {
            for sentence in tagger.tag_sentences(input, options).with_context(context)? {
                formatter.format_sentence(&sentence.with_context(context)?)?;
            }
        } else {
            for token in tagger.tag(input, options).with_context(context)? {
                formatter.format_token(&token.with_context(context)?)?;
            }
        }
        formatter.end_document()
    }

    /// Tag documents in parallel, writing results in input order
    fn tag_files(
        &self,
        tagger: &Tagger,
        files: &[PathBuf],
        options: TagOptions,
        threads: usize,
        formatter: &mut dyn OutputFormatter,
    ) -> Result<()> {
        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .context("Failed to create worker pool")?;
        log::debug!("Using {} worker thread(s)", pool.current_num_threads());

        let results: Vec<Result<Tagged>> = pool.install(|| {
            files
                .par_iter()
                .map_init(
                    || tagger.fork(),
                    |worker, path| {
                        let result = self.tag_file(worker, path, options);
                        progress.file_completed(&path.display().to_string());
                        result
                    },
                )
                .collect()
        });
        progress.finish();

        for result in results {
            match result? {
                Tagged::Flat(tokens) => {
                    for token in &tokens {
                        formatter.format_token(token)?;
                    }
                }
                Tagged::Sentences(sentences) => {
                    for sentence in &sentences {
                        formatter.format_sentence(sentence)?;
                    }
                }
            }
            formatter.end_document()?;
        }
        Ok(())
    }

    fn tag_file(&self, tagger: &mut Tagger, path: &Path, options: TagOptions) -> Result<Tagged> {
        let document = FileReader::read_document(path)?;
        let input = self.input_format.parse(&document.text)?;
        let context = || format!("Failed to tag {}", document.name);

        let tagged = if self.sentences {
            Tagged::Sentences(
                tagger
                    .tag_sentences(input, options)
                    .and_then(|stream| stream.collect())
                    .with_context(context)?,
            )
        } else {
            Tagged::Flat(
                tagger
                    .tag(input, options)
                    .and_then(|stream| stream.collect())
                    .with_context(context)?,
            )
        };
        Ok(tagged)
    }
}
