//! Address text collection.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use crate::error::Result;

/// Where address text is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Positional command-line arguments
    Args(Vec<String>),
    /// A file with one address per line
    File(PathBuf),
    /// Standard input, one address per line
    Stdin,
}

impl InputSource {
    /// Read every candidate address from the source.
    pub fn collect(&self) -> Result<Vec<String>> {
        match self {
            InputSource::Args(args) => Ok(args
                .iter()
                .filter_map(|arg| clean_line(arg))
                .map(str::to_string)
                .collect()),
            InputSource::File(path) => {
                tracing::debug!(path = %path.display(), "reading addresses from file");
                let file = File::open(path)?;
                Ok(read_lines(BufReader::new(file))?)
            }
            InputSource::Stdin => {
                tracing::debug!("reading addresses from stdin");
                Ok(read_lines(io::stdin().lock())?)
            }
        }
    }
}

/// Read one candidate address per line.
///
/// Surrounding whitespace is trimmed; blank lines and `#` comments are
/// skipped.
pub fn read_lines<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if let Some(cleaned) = clean_line(&line) {
            lines.push(cleaned.to_string());
        }
    }
    Ok(lines)
}

fn clean_line(line: &str) -> Option<&str> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        None
    } else {
        Some(trimmed)
    }
}
