//! # ipoctets-core
//!
//! Dual-stack IP address value with octet, nibble and reverse-lookup
//! conversions.
//!
//! This crate provides the address model behind ipoctets, without any CLI
//! or I/O. It can be used standalone wherever an IPv4/IPv6 address needs to
//! be turned into the label sequence of a reverse-DNS or DNS blocklist query.
//!
//! ## Quick Start
//!
//! ```rust
//! use ipoctets_core::prelude::*;
//!
//! let addr = parse("2001:db8::1").unwrap();
//! assert_eq!(addr.family(), Family::Ipv6);
//! assert_eq!(addr.to_text(), "2001:db8::1");
//!
//! let forward = addr.to_octet_strings();
//! assert_eq!(&forward[..4], ["2", "0", "0", "1"]);
//!
//! let reversed = addr.to_reversed_octet_strings();
//! assert_eq!(&reversed[..2], ["1", "0"]);
//! assert!(addr.ptr_name().ends_with(".8.b.d.0.1.0.0.2.ip6.arpa"));
//! ```
//!
//! ## Architecture
//!
//! ```text
//! +---------------------------------------------------------------------+
//! |                        ipoctets-core                                |
//! +---------------------------------------------------------------------+
//! |  address/    - IpAddress, Family, parse, AF_* tags                  |
//! |  format/     - Text rendering, decimal and nibble token sequences   |
//! |  reverse/    - in-addr.arpa / ip6.arpa / DNSBL query names          |
//! |  error/      - Error types                                          |
//! +---------------------------------------------------------------------+
//! ```
//!
//! ## Token Sequences
//!
//! | Operation | IPv4 | IPv6 |
//! |-----------|------|------|
//! | `to_octets` | 4 byte values | 16 byte values |
//! | `to_octet_strings` | 4 decimal tokens | 32 hex nibbles, high first |
//! | `to_reversed_octet_strings` | 4 decimal tokens, last byte first | 32 hex nibbles, last byte first, low first |

pub mod address;
pub mod error;
pub mod format;
pub mod prelude;
pub mod reverse;

// Re-export commonly used types at crate root for convenience
pub use address::{parse, Family, IpAddress, AF_INET, AF_INET6};
pub use error::{AddrParseError, Error, Result};
pub use format::{OctetStrings, Octets};
pub use reverse::{arpa_zone, normalize_zone, IN_ADDR_ARPA, IP6_ARPA};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
