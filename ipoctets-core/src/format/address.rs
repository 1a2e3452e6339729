//! Textual address rendering.

use std::net::{Ipv4Addr, Ipv6Addr};

use crate::address::Family;

/// Format 4 bytes as an IPv4 address string in dotted-decimal notation.
///
/// # Example
///
/// ```
/// use ipoctets_core::format::format_ipv4;
///
/// assert_eq!(format_ipv4([192, 168, 1, 1]), "192.168.1.1");
/// assert_eq!(format_ipv4([10, 0, 0, 1]), "10.0.0.1");
/// ```
pub fn format_ipv4(bytes: [u8; 4]) -> String {
    Ipv4Addr::from(bytes).to_string()
}

/// Format 16 bytes as an IPv6 address string.
///
/// Uses the RFC 5952 canonical form: lowercase hex, leading zeros dropped,
/// the longest run of zero groups compressed to `::`. Only IPv4-mapped
/// addresses keep a dotted tail (`::ffff:192.0.2.1`); IPv4-compatible ones
/// are written as hex groups (`::102:304`), unlike glibc `inet_ntop`.
///
/// # Example
///
/// ```
/// use ipoctets_core::format::format_ipv6;
///
/// let bytes = [0x20, 0x01, 0x0d, 0xb8, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1];
/// assert_eq!(format_ipv6(bytes), "2001:db8::1");
/// ```
pub fn format_ipv6(bytes: [u8; 16]) -> String {
    Ipv6Addr::from(bytes).to_string()
}

/// Format a raw buffer according to `family`.
///
/// Returns `None` if the slice length does not match the family width.
///
/// # Example
///
/// ```
/// use ipoctets_core::format::format_address;
/// use ipoctets_core::Family;
///
/// assert_eq!(format_address(Family::Ipv4, &[8, 8, 4, 4]), Some("8.8.4.4".to_string()));
/// assert_eq!(format_address(Family::Ipv6, &[8, 8, 4, 4]), None);
/// ```
pub fn format_address(family: Family, bytes: &[u8]) -> Option<String> {
    match family {
        Family::Ipv4 => bytes.try_into().ok().map(format_ipv4),
        Family::Ipv6 => bytes.try_into().ok().map(format_ipv6),
    }
}
