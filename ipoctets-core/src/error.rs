//! Error types for ipoctets-core.
//!
//! This module provides structured error types for all ipoctets-core operations:
//!
//! - [`enum@Error`] - Main error enum for checked construction and name building
//! - [`AddrParseError`] - Text that is neither an IPv4 nor an IPv6 address
//!
//! All errors implement `std::error::Error` and can be converted to `anyhow::Error`.

use thiserror::Error;

use crate::address::Family;

/// Main error type for ipoctets-core operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Text could not be interpreted as an address
    #[error(transparent)]
    Parse(#[from] AddrParseError),

    /// Byte buffer width does not match the address family
    #[error("{family}: invalid address length (expected {expected} bytes, got {actual})")]
    InvalidLength {
        family: Family,
        expected: usize,
        actual: usize,
    },

    /// Numeric address family tag is neither AF_INET nor AF_INET6
    #[error("Unsupported address family tag: {tag}")]
    UnsupportedFamily { tag: i32 },

    /// DNSBL zone is empty after trimming
    #[error("Invalid DNSBL zone: {zone:?}")]
    InvalidZone { zone: String },
}

/// Text matched neither the dotted-decimal IPv4 nor the colon-hex IPv6 grammar.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Not an IPv4 or IPv6 address: {input:?}")]
pub struct AddrParseError {
    /// The rejected input, verbatim.
    pub input: String,
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
