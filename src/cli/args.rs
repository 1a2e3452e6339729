//! Command-line argument definitions.

use clap::Parser;
use std::path::PathBuf;

use ipoctets_core::normalize_zone;

use super::{InputSource, OutputFormat};
use crate::error::{CoreError, Error, Result};

/// Show IP addresses as octets, nibbles and reverse-lookup names.
#[derive(Parser, Debug)]
#[command(name = "ipoctets")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Addresses to inspect (read from stdin if none are given)
    #[arg(value_name = "ADDRESS")]
    pub addresses: Vec<String>,

    /// Read addresses from a file, one per line ('-' for stdin)
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output format for stdout
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Add a DNS blocklist query name for this zone
    #[arg(long = "zone", value_name = "ZONE")]
    pub zone: Option<String>,

    /// Fail if any input is not an IPv4 or IPv6 address
    #[arg(long = "strict")]
    pub strict: bool,

    /// Enable verbose output
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Where address text comes from.
    ///
    /// Positional addresses win, then `--input`, then stdin.
    pub fn source(&self) -> InputSource {
        if !self.addresses.is_empty() {
            return InputSource::Args(self.addresses.clone());
        }
        match &self.input {
            Some(path) if path.as_os_str() != "-" => InputSource::File(path.clone()),
            _ => InputSource::Stdin,
        }
    }

    /// The `--zone` value with surrounding whitespace and dots stripped.
    ///
    /// Fails if a zone was given but nothing is left of it, regardless of
    /// what the inputs turn out to be.
    pub fn checked_zone(&self) -> Result<Option<&str>> {
        match self.zone.as_deref() {
            None => Ok(None),
            Some(zone) => normalize_zone(zone).map(Some).ok_or_else(|| {
                Error::Core(CoreError::InvalidZone {
                    zone: zone.to_string(),
                })
            }),
        }
    }

    /// Default log filter for the verbosity level.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
