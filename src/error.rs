//! Error types for ipoctets.
//!
//! This module provides error types for the CLI layer, while re-exporting
//! core error types from ipoctets-core.

use thiserror::Error;

// Re-export core error types
pub use ipoctets_core::Error as CoreError;

/// Main error type for ipoctets operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Error from ipoctets-core (checked construction, zone validation)
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Inputs that were not addresses, reported in strict mode
    #[error("{count} input(s) were not IPv4 or IPv6 addresses")]
    Rejected { count: usize },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
