//! Reverse-lookup query names.
//!
//! Builds the domain names used for PTR lookups (`in-addr.arpa`, `ip6.arpa`)
//! and for DNS blocklist queries, where the reversed digit groups of the
//! address are prepended to a zone:
//!
//! ```text
//! 192.0.2.10   -> 10.2.0.192.in-addr.arpa
//! 2001:db8::1  -> 1.0.0.0. ... .8.b.d.0.1.0.0.2.ip6.arpa
//! 192.0.2.10 + zen.example.org -> 10.2.0.192.zen.example.org
//! ```
//!
//! Names are returned without a trailing root dot. Nothing here performs a
//! lookup.

use crate::address::{Family, IpAddress};
use crate::error::{Error, Result};

/// PTR zone for IPv4 addresses.
pub const IN_ADDR_ARPA: &str = "in-addr.arpa";

/// PTR zone for IPv6 addresses.
pub const IP6_ARPA: &str = "ip6.arpa";

/// The PTR zone for a family.
pub const fn arpa_zone(family: Family) -> &'static str {
    match family {
        Family::Ipv4 => IN_ADDR_ARPA,
        Family::Ipv6 => IP6_ARPA,
    }
}

impl IpAddress {
    /// Reversed digit groups joined with `.`, without any zone.
    ///
    /// ```
    /// use ipoctets_core::parse;
    ///
    /// assert_eq!(parse("192.0.2.10").unwrap().reversed_labels(), "10.2.0.192");
    /// ```
    pub fn reversed_labels(&self) -> String {
        self.to_reversed_octet_strings().join(".")
    }

    /// The PTR query name for this address.
    ///
    /// ```
    /// use ipoctets_core::parse;
    ///
    /// assert_eq!(parse("127.0.0.1").unwrap().ptr_name(), "1.0.0.127.in-addr.arpa");
    /// ```
    pub fn ptr_name(&self) -> String {
        join_zone(&self.reversed_labels(), arpa_zone(self.family()))
    }

    /// The query name for this address in the DNS blocklist `zone`.
    ///
    /// Surrounding whitespace and dots are stripped from `zone`; an empty
    /// zone is rejected.
    pub fn dnsbl_name(&self, zone: &str) -> Result<String> {
        let trimmed = normalize_zone(zone).ok_or_else(|| Error::InvalidZone {
            zone: zone.to_string(),
        })?;
        Ok(join_zone(&self.reversed_labels(), trimmed))
    }
}

/// Strip whitespace and leading/trailing dots from a zone.
///
/// Returns `None` if nothing is left.
pub fn normalize_zone(zone: &str) -> Option<&str> {
    let trimmed = zone.trim().trim_matches('.');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

fn join_zone(labels: &str, zone: &str) -> String {
    let mut name = String::with_capacity(labels.len() + 1 + zone.len());
    name.push_str(labels);
    name.push('.');
    name.push_str(zone);
    name
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    #[test]
    fn test_ptr_name_ipv4() {
        let addr = parse("192.168.1.1").unwrap();
        assert_eq!(addr.ptr_name(), "1.1.168.192.in-addr.arpa");
    }

    #[test]
    fn test_ptr_name_ipv6_loopback() {
        let addr = parse("::1").unwrap();
        let expected = format!("1{}.ip6.arpa", ".0".repeat(31));
        assert_eq!(addr.ptr_name(), expected);
    }

    #[test]
    fn test_ptr_name_ipv6_rfc3596_example() {
        // RFC 3596 section 2.5
        let addr = parse("4321:0:1:2:3:4:567:89ab").unwrap();
        assert_eq!(
            addr.ptr_name(),
            "b.a.9.8.7.6.5.0.4.0.0.0.3.0.0.0.2.0.0.0.1.0.0.0.0.0.0.0.1.2.3.4.ip6.arpa"
        );
    }

    #[test]
    fn test_dnsbl_name() {
        let addr = parse("127.0.0.2").unwrap();
        assert_eq!(
            addr.dnsbl_name("zen.example.org").unwrap(),
            "2.0.0.127.zen.example.org"
        );
    }

    #[test]
    fn test_dnsbl_name_normalizes_zone() {
        let addr = parse("10.0.0.1").unwrap();
        assert_eq!(
            addr.dnsbl_name(" .bl.example.net. ").unwrap(),
            "1.0.0.10.bl.example.net"
        );
    }

    #[test]
    fn test_dnsbl_name_rejects_empty_zone() {
        let addr = parse("10.0.0.1").unwrap();
        for zone in ["", "   ", "...", " . "] {
            assert_eq!(
                addr.dnsbl_name(zone),
                Err(Error::InvalidZone {
                    zone: zone.to_string()
                })
            );
        }
    }

    #[test]
    fn test_arpa_zone() {
        assert_eq!(arpa_zone(Family::Ipv4), "in-addr.arpa");
        assert_eq!(arpa_zone(Family::Ipv6), "ip6.arpa");
    }
}
