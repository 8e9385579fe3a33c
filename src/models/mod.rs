//! Domain models for subnet calculation.
//!
//! This module contains the core data structures used throughout the application:
//! - [`SubnetSpec`] - validated IPv4 address with prefix length
//! - [`SubnetFacts`] - network, broadcast, host range and counts derived from a spec
//! - [`BinaryBreakdown`] - per-octet binary view of the network calculation

mod breakdown;
mod facts;
mod ipv4;

// Re-export public types
pub use breakdown::{
    byte_to_bin_str, ip_to_bin_str, transition_octet, BinaryBreakdown, OctetRow, Transition,
};
pub use facts::SubnetFacts;
pub use ipv4::{get_cidr_mask, mask_prefix_len, num_addresses, SubnetSpec, MAX_LENGTH};
