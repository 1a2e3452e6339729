//! Address family tag.

use std::fmt;

/// Socket-layer `AF_INET` value. Identical on every supported platform.
pub const AF_INET: i32 = 2;

/// Socket-layer `AF_INET6` value for the host platform.
#[cfg(any(target_os = "linux", target_os = "android"))]
pub const AF_INET6: i32 = 10;
#[cfg(any(target_os = "macos", target_os = "ios"))]
pub const AF_INET6: i32 = 30;
#[cfg(target_os = "freebsd")]
pub const AF_INET6: i32 = 28;
#[cfg(any(target_os = "openbsd", target_os = "netbsd"))]
pub const AF_INET6: i32 = 24;
#[cfg(windows)]
pub const AF_INET6: i32 = 23;
#[cfg(not(any(
    target_os = "linux",
    target_os = "android",
    target_os = "macos",
    target_os = "ios",
    target_os = "freebsd",
    target_os = "openbsd",
    target_os = "netbsd",
    windows
)))]
pub const AF_INET6: i32 = 10;

/// The family of an IP address, which fixes its byte width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// 4-byte address, dotted-decimal text
    Ipv4,
    /// 16-byte address, colon-hex text
    Ipv6,
}

impl Family {
    /// Number of bytes in an address of this family.
    pub const fn width(self) -> usize {
        match self {
            Family::Ipv4 => 4,
            Family::Ipv6 => 16,
        }
    }

    /// Resolve a socket-layer address family number (`AF_INET`/`AF_INET6`).
    ///
    /// Returns `None` for any other tag.
    pub fn from_af(tag: i32) -> Option<Self> {
        match tag {
            AF_INET => Some(Family::Ipv4),
            AF_INET6 => Some(Family::Ipv6),
            _ => None,
        }
    }

    /// The socket-layer address family number for this family.
    pub const fn af(self) -> i32 {
        match self {
            Family::Ipv4 => AF_INET,
            Family::Ipv6 => AF_INET6,
        }
    }

    /// Lowercase name, as used in CLI output.
    pub const fn name(self) -> &'static str {
        match self {
            Family::Ipv4 => "ipv4",
            Family::Ipv6 => "ipv6",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
