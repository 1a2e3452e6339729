//! ipoctets - Inspect IP addresses as octets, nibbles and reverse-lookup names.
//!
//! This library wires [`ipoctets_core`] into a command-line tool: it collects
//! address text from arguments, files or stdin, converts each entry into an
//! [`AddressRecord`](record::AddressRecord), and writes the records as a
//! table, CSV or JSON Lines.
//!
//! # Example
//!
//! ```
//! use ipoctets::cli::{OutputFormat, OutputFormatter};
//! use ipoctets::record::AddressRecord;
//!
//! let record = AddressRecord::from_input("192.168.1.1", None).unwrap().unwrap();
//! let mut out = Vec::new();
//! OutputFormatter::new(OutputFormat::Csv).write(&[record], &mut out).unwrap();
//! assert!(String::from_utf8(out).unwrap().contains("1.1.168.192.in-addr.arpa"));
//! ```

pub mod cli;
pub mod error;
pub mod record;

pub use error::{Error, Result};
