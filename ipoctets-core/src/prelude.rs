//! Convenient re-exports for common usage.
//!
//! # Example
//!
//! ```rust
//! use ipoctets_core::prelude::*;
//!
//! let addr: IpAddress = "10.0.0.1".parse().unwrap();
//! assert_eq!(addr.ptr_name(), "1.0.0.10.in-addr.arpa");
//! ```

// Address types
pub use crate::address::{parse, Family, IpAddress};

// Sequence types
pub use crate::format::{OctetStrings, Octets};

// Error types
pub use crate::error::{AddrParseError, Error, Result};
