//! Command-line interface module.
//!
//! This module handles:
//! - Argument parsing via clap
//! - Collecting address text from arguments, files and stdin
//! - Output formatting (table, CSV, JSON)

mod args;
mod input;
mod output;

pub use args::Args;
pub use input::{read_lines, InputSource};
pub use output::{OutputFormat, OutputFormatter};
