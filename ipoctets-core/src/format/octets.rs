//! Octet and nibble token sequences.
//!
//! Forward sequences follow network byte order. Reversed sequences walk the
//! bytes last to first; for nibble sequences each byte also emits its low
//! nibble before its high nibble, which is the label order of an `ip6.arpa`
//! name. Decimal sequences have no nibble split, so reversal only affects
//! byte order.

use compact_str::{CompactString, ToCompactString};
use smallvec::SmallVec;

/// Raw byte values of an address, at most 16.
pub type Octets = SmallVec<[u8; 16]>;

/// Text tokens of an address, at most 32 (16 bytes x 2 nibbles).
pub type OctetStrings = SmallVec<[CompactString; 32]>;

const HEX_DIGITS: [&str; 16] = [
    "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "a", "b", "c", "d", "e", "f",
];

#[inline]
fn nibble(value: u8) -> CompactString {
    CompactString::const_new(HEX_DIGITS[(value & 0x0f) as usize])
}

#[inline]
fn high(byte: u8) -> u8 {
    (byte & 0xf0) >> 4
}

#[inline]
fn low(byte: u8) -> u8 {
    byte & 0x0f
}

/// One decimal token per byte, in network order.
///
/// ```
/// use ipoctets_core::format::decimal_octets;
///
/// assert_eq!(decimal_octets(&[192, 168, 1, 1]).as_slice(), ["192", "168", "1", "1"]);
/// ```
pub fn decimal_octets(bytes: &[u8]) -> OctetStrings {
    bytes.iter().map(|b| b.to_compact_string()).collect()
}

/// One decimal token per byte, last byte first.
pub fn reversed_decimal_octets(bytes: &[u8]) -> OctetStrings {
    bytes.iter().rev().map(|b| b.to_compact_string()).collect()
}

/// Two hex tokens per byte in network order, high nibble first.
///
/// ```
/// use ipoctets_core::format::nibble_octets;
///
/// assert_eq!(nibble_octets(&[0xab, 0x0c]).as_slice(), ["a", "b", "0", "c"]);
/// ```
pub fn nibble_octets(bytes: &[u8]) -> OctetStrings {
    let mut out = OctetStrings::with_capacity(bytes.len() * 2);
    for &byte in bytes {
        out.push(nibble(high(byte)));
        out.push(nibble(low(byte)));
    }
    out
}

/// Two hex tokens per byte, last byte first, low nibble first.
///
/// ```
/// use ipoctets_core::format::reversed_nibble_octets;
///
/// assert_eq!(reversed_nibble_octets(&[0xab, 0x0c]).as_slice(), ["c", "0", "b", "a"]);
/// ```
pub fn reversed_nibble_octets(bytes: &[u8]) -> OctetStrings {
    let mut out = OctetStrings::with_capacity(bytes.len() * 2);
    for &byte in bytes.iter().rev() {
        out.push(nibble(low(byte)));
        out.push(nibble(high(byte)));
    }
    out
}
