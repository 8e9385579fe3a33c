//! Byte-by-byte binary view of how the network address is derived.

use super::ipv4::SubnetSpec;
use itertools::Itertools;
use serde::Serialize;
use std::net::Ipv4Addr;

/// Render a byte as an 8-character binary string.
pub fn byte_to_bin_str(value: u8) -> String {
    format!("{value:08b}")
}

/// Render an address as dotted binary, e.g. `11000000.00000000.00000010.00001010`.
pub fn ip_to_bin_str(addr: Ipv4Addr) -> String {
    addr.octets().iter().map(|o| byte_to_bin_str(*o)).join(".")
}

/// The one mask octet that is neither all 1s nor all 0s.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// 0-based octet index.
    pub index: usize,
    /// Number of 1-bits in the transition octet (1 to 7).
    pub ones: u8,
    /// Value of the mask octet.
    pub mask_octet: u8,
}

/// Locate the transition octet for a prefix length.
///
/// Prefixes that are a multiple of 8 (including /0 and /32) have none.
pub fn transition_octet(prefix: u8) -> Option<Transition> {
    let ones = prefix % 8;
    if ones == 0 || prefix > 32 {
        return None;
    }
    Some(Transition {
        index: usize::from(prefix / 8),
        ones,
        mask_octet: u8::MAX << (8 - ones),
    })
}

/// One row of the network-address calculation.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct OctetRow {
    pub index: usize,
    pub ip: u8,
    pub mask: u8,
    pub network: u8,
    pub ip_bits: String,
    pub mask_bits: String,
    pub network_bits: String,
    pub is_transition: bool,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct BinaryBreakdown {
    pub octets: Vec<OctetRow>,
    pub transition: Option<Transition>,
}

impl BinaryBreakdown {
    pub fn from_spec(spec: &SubnetSpec) -> BinaryBreakdown {
        let transition = transition_octet(spec.prefix());
        let ip = spec.addr().octets();
        let mask = spec.netmask().octets();

        let octets = ip
            .iter()
            .zip(mask.iter())
            .enumerate()
            .map(|(index, (&ip, &mask))| {
                let network = ip & mask;
                OctetRow {
                    index,
                    ip,
                    mask,
                    network,
                    ip_bits: byte_to_bin_str(ip),
                    mask_bits: byte_to_bin_str(mask),
                    network_bits: byte_to_bin_str(network),
                    is_transition: transition.is_some_and(|t| t.index == index),
                }
            })
            .collect();

        BinaryBreakdown { octets, transition }
    }

    /// The transition octet row, if the prefix has one.
    pub fn transition_row(&self) -> Option<&OctetRow> {
        self.octets.iter().find(|row| row.is_transition)
    }
}
