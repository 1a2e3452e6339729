//! Fuzz target for address text parsing and every projection.
//!
//! Feeds arbitrary UTF-8 to the parser and, when it yields an address,
//! checks the invariants the reverse-lookup names depend on:
//!
//! - Width matches the family (4 or 16 bytes)
//! - Formatting and reparsing gives back the same bytes
//! - Reversed tokens are exactly the forward tokens in reverse order
//!
//! Raw bytes are also pushed through `from_af` to exercise checked
//! construction with arbitrary family tags and widths.

#![no_main]

use libfuzzer_sys::fuzz_target;
use ipoctets_core::{parse, IpAddress};

fn check(addr: IpAddress) {
    let octets = addr.to_octets();
    assert_eq!(octets.len(), addr.family().width());

    let reparsed = parse(&addr.to_text()).expect("formatted address must reparse");
    assert_eq!(reparsed, addr);

    let forward = addr.to_octet_strings();
    let reversed = addr.to_reversed_octet_strings();
    assert_eq!(forward.len(), reversed.len());

    // IPv4: byte reversal. IPv6: byte reversal plus per-byte nibble swap,
    // which together are a plain reversal of the nibble list.
    let mut expected = forward.clone();
    expected.reverse();
    assert_eq!(expected, reversed);

    let _ = addr.ptr_name();
}

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    if let Ok(text) = std::str::from_utf8(data) {
        if let Some(addr) = parse(text) {
            check(addr);
        }
    }

    // First byte selects the family tag, the rest is the buffer
    let tag = i32::from(data[0] % 32);
    if let Ok(addr) = IpAddress::from_af(tag, &data[1..]) {
        check(addr);
    }
});
