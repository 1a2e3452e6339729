//! Formatting utilities for address values.
//!
//! Provides the family-specific renderings of raw address bytes:
//! - IPv4 addresses (4 bytes -> dotted-decimal string)
//! - IPv6 addresses (16 bytes -> RFC 5952 string)
//! - Decimal octet tokens and hex nibble tokens, forward and reversed
//!
//! [`IpAddress`](crate::IpAddress) picks the right function for its family;
//! these are exposed for callers that only hold raw buffers.

mod address;
mod octets;

pub use address::{format_address, format_ipv4, format_ipv6};
pub use octets::{
    decimal_octets, nibble_octets, reversed_decimal_octets, reversed_nibble_octets, OctetStrings,
    Octets,
};
