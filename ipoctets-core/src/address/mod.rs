//! The dual-stack address value.
//!
//! [`IpAddress`] holds either 4 or 16 bytes in network byte order. The width
//! is carried by the variant, so a value with a mismatched family and length
//! cannot be constructed. Every projection is a single `match` over the two
//! variants.

mod family;

pub use family::{Family, AF_INET, AF_INET6};

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use crate::error::{AddrParseError, Error, Result};
use crate::format::{
    decimal_octets, format_ipv4, format_ipv6, nibble_octets, reversed_decimal_octets,
    reversed_nibble_octets, OctetStrings, Octets,
};

/// An immutable IPv4 or IPv6 address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IpAddress {
    /// IPv4 address bytes, most significant first
    V4([u8; 4]),
    /// IPv6 address bytes, most significant first
    V6([u8; 16]),
}

/// Interpret `text` as an address, trying dotted-decimal IPv4 first and
/// colon-hex IPv6 second.
///
/// Returns `None` if neither grammar accepts the input. Only the exact
/// string is considered: surrounding whitespace, zone identifiers and
/// prefix lengths are rejected.
///
/// # Example
///
/// ```
/// use ipoctets_core::{parse, Family};
///
/// let addr = parse("192.168.1.1").unwrap();
/// assert_eq!(addr.family(), Family::Ipv4);
/// assert_eq!(addr.to_octets().as_slice(), [192, 168, 1, 1]);
///
/// assert!(parse("not-an-ip").is_none());
/// ```
pub fn parse(text: &str) -> Option<IpAddress> {
    if let Ok(v4) = Ipv4Addr::from_str(text) {
        return Some(IpAddress::V4(v4.octets()));
    }

    tracing::trace!(input = text, "not IPv4, trying IPv6");
    match Ipv6Addr::from_str(text) {
        Ok(v6) => Some(IpAddress::V6(v6.octets())),
        Err(_) => {
            tracing::trace!(input = text, "not an IP address");
            None
        }
    }
}

impl IpAddress {
    /// Build an address from a family tag and a buffer the caller has
    /// already sized for that family (e.g. one filled by a socket API).
    ///
    /// # Panics
    ///
    /// Panics if `bytes.len()` differs from [`Family::width`]. Use
    /// [`IpAddress::try_from_bytes`] when the width is not guaranteed.
    pub fn from_bytes(family: Family, bytes: &[u8]) -> Self {
        match Self::try_from_bytes(family, bytes) {
            Ok(addr) => addr,
            Err(e) => panic!("IpAddress::from_bytes: {e}"),
        }
    }

    /// Build an address from a family tag and a buffer of unchecked width.
    pub fn try_from_bytes(family: Family, bytes: &[u8]) -> Result<Self> {
        let invalid = || Error::InvalidLength {
            family,
            expected: family.width(),
            actual: bytes.len(),
        };

        match family {
            Family::Ipv4 => bytes.try_into().map(IpAddress::V4).map_err(|_| invalid()),
            Family::Ipv6 => bytes.try_into().map(IpAddress::V6).map_err(|_| invalid()),
        }
    }

    /// Build an address from a socket-layer family number (`AF_INET` or
    /// `AF_INET6`) and a raw buffer.
    pub fn from_af(tag: i32, bytes: &[u8]) -> Result<Self> {
        let family = Family::from_af(tag).ok_or(Error::UnsupportedFamily { tag })?;
        Self::try_from_bytes(family, bytes)
    }

    /// The address family.
    pub fn family(&self) -> Family {
        match self {
            IpAddress::V4(_) => Family::Ipv4,
            IpAddress::V6(_) => Family::Ipv6,
        }
    }

    /// The raw bytes in network order; 4 or 16 long.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            IpAddress::V4(b) => b.as_slice(),
            IpAddress::V6(b) => b.as_slice(),
        }
    }

    /// Canonical text: `d.d.d.d` for IPv4, RFC 5952 for IPv6.
    pub fn to_text(&self) -> String {
        match *self {
            IpAddress::V4(b) => format_ipv4(b),
            IpAddress::V6(b) => format_ipv6(b),
        }
    }

    /// Byte values in network order.
    pub fn to_octets(&self) -> Octets {
        Octets::from_slice(self.as_bytes())
    }

    /// Forward digit groups: decimal bytes for IPv4, high-then-low hex
    /// nibbles for IPv6.
    pub fn to_octet_strings(&self) -> OctetStrings {
        match self {
            IpAddress::V4(b) => decimal_octets(b),
            IpAddress::V6(b) => nibble_octets(b),
        }
    }

    /// Reverse-lookup digit groups: bytes last to first, and for IPv6 each
    /// byte low nibble first.
    ///
    /// ```
    /// use ipoctets_core::parse;
    ///
    /// let v4 = parse("192.168.1.1").unwrap();
    /// assert_eq!(v4.to_reversed_octet_strings().as_slice(), ["1", "1", "168", "192"]);
    ///
    /// let v6 = parse("ab00::1").unwrap();
    /// let rev = v6.to_reversed_octet_strings();
    /// assert_eq!(&rev[..2], ["1", "0"]);
    /// assert_eq!(&rev[30..], ["0", "a"]);
    /// ```
    pub fn to_reversed_octet_strings(&self) -> OctetStrings {
        match self {
            IpAddress::V4(b) => reversed_decimal_octets(b),
            IpAddress::V6(b) => reversed_nibble_octets(b),
        }
    }
}

impl fmt::Display for IpAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            IpAddress::V4(b) => fmt::Display::fmt(&Ipv4Addr::from(b), f),
            IpAddress::V6(b) => fmt::Display::fmt(&Ipv6Addr::from(b), f),
        }
    }
}

impl FromStr for IpAddress {
    type Err = AddrParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        parse(s).ok_or_else(|| AddrParseError {
            input: s.to_string(),
        })
    }
}

impl From<[u8; 4]> for IpAddress {
    fn from(bytes: [u8; 4]) -> Self {
        IpAddress::V4(bytes)
    }
}

impl From<[u8; 16]> for IpAddress {
    fn from(bytes: [u8; 16]) -> Self {
        IpAddress::V6(bytes)
    }
}

impl From<Ipv4Addr> for IpAddress {
    fn from(addr: Ipv4Addr) -> Self {
        IpAddress::V4(addr.octets())
    }
}

impl From<Ipv6Addr> for IpAddress {
    fn from(addr: Ipv6Addr) -> Self {
        IpAddress::V6(addr.octets())
    }
}

impl From<IpAddr> for IpAddress {
    fn from(addr: IpAddr) -> Self {
        match addr {
            IpAddr::V4(v4) => v4.into(),
            IpAddr::V6(v6) => v6.into(),
        }
    }
}

impl From<IpAddress> for IpAddr {
    fn from(addr: IpAddress) -> Self {
        match addr {
            IpAddress::V4(b) => IpAddr::V4(Ipv4Addr::from(b)),
            IpAddress::V6(b) => IpAddr::V6(Ipv6Addr::from(b)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC_V6: [u8; 16] = [
        0x20, 0x01, 0x0d, 0xb8, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1,
    ];

    // ========== parse tests ==========

    #[test]
    fn test_parse_ipv4() {
        let addr = parse("192.168.1.1").unwrap();
        assert_eq!(addr, IpAddress::V4([192, 168, 1, 1]));
        assert_eq!(addr.family(), Family::Ipv4);
    }

    #[test]
    fn test_parse_ipv6_compressed() {
        let addr = parse("::1").unwrap();
        assert_eq!(addr.family(), Family::Ipv6);
        let mut expected = [0u8; 16];
        expected[15] = 1;
        assert_eq!(addr.as_bytes(), expected);
    }

    #[test]
    fn test_parse_ipv6_full_form() {
        let addr = parse("2001:0db8:0000:0000:0000:0000:0000:0001").unwrap();
        assert_eq!(addr, IpAddress::V6(DOC_V6));
    }

    #[test]
    fn test_parse_ipv6_embedded_ipv4() {
        let addr = parse("::ffff:10.0.0.1").unwrap();
        assert_eq!(addr.family(), Family::Ipv6);
        assert_eq!(&addr.as_bytes()[10..], [0xff, 0xff, 10, 0, 0, 1]);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse("not-an-ip"), None);
        assert_eq!(parse(""), None);
        assert_eq!(parse("256.0.0.1"), None);
        assert_eq!(parse("1.2.3"), None);
        assert_eq!(parse("1.2.3.4.5"), None);
        assert_eq!(parse("2001:db8::1::2"), None);
        assert_eq!(parse("gggg::1"), None);
    }

    #[test]
    fn test_parse_rejects_decorations() {
        assert_eq!(parse(" 10.0.0.1"), None);
        assert_eq!(parse("10.0.0.1 "), None);
        assert_eq!(parse("10.0.0.0/8"), None);
        assert_eq!(parse("fe80::1%eth0"), None);
        assert_eq!(parse("[::1]"), None);
    }

    #[test]
    fn test_from_str() {
        let addr: IpAddress = "10.1.2.3".parse().unwrap();
        assert_eq!(addr, IpAddress::V4([10, 1, 2, 3]));

        let err = "bogus".parse::<IpAddress>().unwrap_err();
        assert_eq!(err.input, "bogus");
    }

    // ========== binary construction tests ==========

    #[test]
    fn test_from_bytes() {
        let addr = IpAddress::from_bytes(Family::Ipv4, &[127, 0, 0, 1]);
        assert_eq!(addr.to_text(), "127.0.0.1");

        let addr = IpAddress::from_bytes(Family::Ipv6, &DOC_V6);
        assert_eq!(addr.to_text(), "2001:db8::1");
    }

    #[test]
    #[should_panic(expected = "invalid address length")]
    fn test_from_bytes_wrong_width_panics() {
        IpAddress::from_bytes(Family::Ipv4, &DOC_V6);
    }

    #[test]
    fn test_try_from_bytes_wrong_width() {
        let err = IpAddress::try_from_bytes(Family::Ipv6, &[1, 2, 3, 4]).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidLength {
                family: Family::Ipv6,
                expected: 16,
                actual: 4,
            }
        );
    }

    #[test]
    fn test_from_af() {
        let addr = IpAddress::from_af(AF_INET, &[8, 8, 8, 8]).unwrap();
        assert_eq!(addr.family(), Family::Ipv4);

        let addr = IpAddress::from_af(AF_INET6, &DOC_V6).unwrap();
        assert_eq!(addr.family(), Family::Ipv6);

        assert_eq!(
            IpAddress::from_af(1, &[8, 8, 8, 8]),
            Err(Error::UnsupportedFamily { tag: 1 })
        );
    }

    // ========== projection tests ==========

    #[test]
    fn test_ipv4_projections() {
        let addr = parse("192.168.1.1").unwrap();
        assert_eq!(addr.to_octets().as_slice(), [192, 168, 1, 1]);
        assert_eq!(addr.to_octet_strings().as_slice(), ["192", "168", "1", "1"]);
        assert_eq!(
            addr.to_reversed_octet_strings().as_slice(),
            ["1", "1", "168", "192"]
        );
    }

    #[test]
    fn test_ipv6_projections() {
        let addr = parse("abcd::").unwrap();
        let octets = addr.to_octets();
        assert_eq!(octets.len(), 16);
        assert_eq!(&octets[..2], [0xab, 0xcd]);

        let forward = addr.to_octet_strings();
        assert_eq!(forward.len(), 32);
        assert_eq!(&forward[..4], ["a", "b", "c", "d"]);

        let reversed = addr.to_reversed_octet_strings();
        assert_eq!(reversed.len(), 32);
        assert_eq!(&reversed[28..], ["d", "c", "b", "a"]);
        assert!(reversed[..28].iter().all(|t| t == "0"));
    }

    #[test]
    fn test_ipv4_reversal_has_no_nibble_split() {
        // 0xAB = 171 stays one decimal token in both directions
        let addr = IpAddress::V4([171, 0, 0, 205]);
        assert_eq!(
            addr.to_reversed_octet_strings().as_slice(),
            ["205", "0", "0", "171"]
        );
    }

    #[test]
    fn test_display_matches_to_text() {
        for text in ["10.0.0.1", "::", "fe80::1", "2001:db8:0:0:1::", "::ffff:1.2.3.4"] {
            let addr = parse(text).unwrap();
            assert_eq!(addr.to_string(), addr.to_text());
            assert_eq!(addr.to_text(), text);
        }
    }

    #[test]
    fn test_compatible_ipv4_text_round_trips_as_hex() {
        let addr = parse("::1.2.3.4").unwrap();
        assert_eq!(&addr.as_bytes()[12..], [1, 2, 3, 4]);
        assert_eq!(addr.to_text(), "::102:304");
        assert_eq!(parse(&addr.to_text()), Some(addr));
    }

    #[test]
    fn test_display_honors_padding() {
        let addr = IpAddress::V4([1, 2, 3, 4]);
        assert_eq!(format!("{addr:>10}"), "   1.2.3.4");
    }

    // ========== std::net conversions ==========

    #[test]
    fn test_std_net_round_trip() {
        let std_addr: IpAddr = "2001:db8::1".parse().unwrap();
        let addr = IpAddress::from(std_addr);
        assert_eq!(addr, IpAddress::V6(DOC_V6));
        assert_eq!(IpAddr::from(addr), std_addr);

        let addr = IpAddress::from(Ipv4Addr::LOCALHOST);
        assert_eq!(addr, IpAddress::from([127, 0, 0, 1]));
    }

    #[test]
    fn test_is_send_sync_copy() {
        fn assert_traits<T: Send + Sync + Copy + 'static>() {}
        assert_traits::<IpAddress>();
    }
}
