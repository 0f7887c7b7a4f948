//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Model path written into the template
    #[arg(short, long, value_name = "FILE")]
    pub model: Option<PathBuf>,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        if self.output.exists() && !self.force {
            anyhow::bail!(
                "{} already exists; use --force to overwrite it",
                self.output.display()
            );
        }

        fs::write(&self.output, self.generate_template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("Configuration template written to {}", self.output.display());
        println!();
        println!("Use it with:");
        println!(
            "   morphotag tag -i input.txt --config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template(&self) -> String {
        let model = match &self.model {
            Some(path) => format!("model = {:?}", path.display().to_string()),
            None => "# model = \"models/czech-demo.toml\"".to_string(),
        };

        format!(
            r#"# morphotag configuration
#
# Command line flags take precedence over the values below.

[tagger]
# Model used when --model is not given
{model}

# Send unknown words to the model's guesser
guesser = false

[output]
# Default output format: "vertical", "inline" or "json"
format = "vertical"

# Indent JSON output
pretty_json = true

[performance]
# Worker threads when tagging several files (0 = number of CPUs)
worker_threads = 0
"#
        )
    }
}
