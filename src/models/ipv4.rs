//! IPv4 address and CIDR notation utilities.
//!
//! Provides [`SubnetSpec`] for a validated address/prefix pair, along with the
//! bit-level helpers the calculator is built on.

use crate::parsing::{parse_subnet, ParseError};
use serde::{Serialize, Serializer};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Mask bits for a prefix length already known to be `<= MAX_LENGTH`.
fn mask_bits(len: u8) -> u32 {
    u32::MAX
        .checked_shl(u32::from(MAX_LENGTH - len))
        .unwrap_or(0)
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use subnet_explain::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24), Some(0xFFFFFF00));
/// assert_eq!(get_cidr_mask(33), None);
/// ```
pub fn get_cidr_mask(len: u8) -> Option<u32> {
    (len <= MAX_LENGTH).then(|| mask_bits(len))
}

/// Prefix length of a dotted netmask, or `None` if its 1-bits are not one
/// unbroken run starting at the most significant bit.
pub fn mask_prefix_len(mask: Ipv4Addr) -> Option<u8> {
    let bits = u32::from(mask);
    if bits.leading_ones() + bits.trailing_zeros() == u32::from(MAX_LENGTH) {
        Some(bits.leading_ones() as u8)
    } else {
        None
    }
}

/// Number of addresses covered by a prefix of length `len`.
pub fn num_addresses(len: u8) -> Option<u64> {
    (len <= MAX_LENGTH).then(|| 1u64 << (MAX_LENGTH - len))
}

/// A validated IPv4 address with its prefix length.
///
/// Only constructed through [`SubnetSpec::new`] or by parsing, so the prefix
/// is always in `0..=32`.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct SubnetSpec {
    addr: Ipv4Addr,
    prefix: u8,
}

impl SubnetSpec {
    pub fn new(addr: Ipv4Addr, prefix: u8) -> Result<SubnetSpec, ParseError> {
        if prefix > MAX_LENGTH {
            return Err(ParseError::PrefixOutOfRange {
                token: prefix.to_string(),
            });
        }
        Ok(SubnetSpec { addr, prefix })
    }

    /// The address exactly as entered (host bits are kept).
    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    pub fn netmask(&self) -> Ipv4Addr {
        Ipv4Addr::from(mask_bits(self.prefix))
    }

    pub fn network(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.addr) & mask_bits(self.prefix))
    }

    pub fn broadcast(&self) -> Ipv4Addr {
        let mask = mask_bits(self.prefix);
        Ipv4Addr::from((u32::from(self.addr) & mask) | !mask)
    }

    /// The first address after this subnet.
    ///
    /// `None` when the subnet ends at 255.255.255.255; never wraps to 0.0.0.0.
    pub fn next_subnet(&self) -> Option<Ipv4Addr> {
        u32::from(self.broadcast()).checked_add(1).map(Ipv4Addr::from)
    }
}

impl FromStr for SubnetSpec {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_subnet(s)
    }
}

impl Serialize for SubnetSpec {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl std::fmt::Display for SubnetSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}
