//! ipoctets CLI entry point.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ipoctets::cli::{Args, OutputFormatter};
use ipoctets::record::AddressRecord;
use ipoctets::Error;

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Set up logging
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| args.log_level().into()),
        )
        .init();

    let zone = args.checked_zone()?;

    let source = args.source();
    let inputs = source
        .collect()
        .with_context(|| format!("Failed to read addresses from {source:?}"))?;
    tracing::info!(count = inputs.len(), "collected inputs");

    let mut records = Vec::with_capacity(inputs.len());
    let mut rejected = 0usize;

    for input in &inputs {
        match AddressRecord::from_input(input, zone)? {
            Some(record) => records.push(record),
            None => {
                tracing::warn!(input = %input, "not an IPv4 or IPv6 address, skipping");
                rejected += 1;
            }
        }
    }

    let formatter = OutputFormatter::new(args.format).with_dnsbl(zone.is_some());
    let mut stdout = io::stdout().lock();
    formatter
        .write(&records, &mut stdout)
        .context("Failed to write output")?;
    stdout.flush().context("Failed to write output")?;

    if args.strict && rejected > 0 {
        return Err(Error::Rejected { count: rejected }.into());
    }

    Ok(())
}
