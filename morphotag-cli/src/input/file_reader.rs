//! File reading utilities

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// One input document with a display name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// File path, or `<stdin>`
    pub name: String,
    /// Full UTF-8 content
    pub text: String,
}

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Read all of standard input as UTF-8 text
    pub fn read_stdin() -> Result<String> {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read standard input")?;
        Ok(content)
    }

    /// Read a file into a named document
    pub fn read_document(path: &Path) -> Result<Document> {
        Ok(Document {
            name: path.display().to_string(),
            text: Self::read_text(path)?,
        })
    }
}
