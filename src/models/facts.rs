//! Derived subnet facts.

use super::ipv4::{num_addresses, SubnetSpec, MAX_LENGTH};
use serde::Serialize;
use std::net::Ipv4Addr;

/// Everything worth knowing about the subnet an address/prefix pair lives in.
///
/// Host range policy:
/// * `/0` to `/30` - network and broadcast are excluded, `usable = total - 2`.
/// * `/31` - point-to-point link (RFC 3021), both addresses are usable.
/// * `/32` - a single host; network, broadcast and the host are the same address.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetFacts {
    /// The address exactly as entered.
    pub address: Ipv4Addr,
    pub prefix: u8,
    pub netmask: Ipv4Addr,
    pub wildcard: Ipv4Addr,
    pub network: Ipv4Addr,
    pub broadcast: Ipv4Addr,
    pub first_host: Ipv4Addr,
    pub last_host: Ipv4Addr,
    /// `None` when the subnet ends at 255.255.255.255.
    pub next_subnet: Option<Ipv4Addr>,
    pub total_addresses: u64,
    pub usable_hosts: u64,
}

impl SubnetFacts {
    pub fn from_spec(spec: &SubnetSpec) -> SubnetFacts {
        let prefix = spec.prefix();
        let netmask = spec.netmask();
        let network = spec.network();
        let broadcast = spec.broadcast();
        let total_addresses = num_addresses(prefix).unwrap_or(1);

        let (first_host, last_host, usable_hosts) = match prefix {
            MAX_LENGTH => (network, broadcast, 1),
            31 => (network, broadcast, 2),
            _ => (
                Ipv4Addr::from(u32::from(network) + 1),
                Ipv4Addr::from(u32::from(broadcast) - 1),
                total_addresses - 2,
            ),
        };

        SubnetFacts {
            address: spec.addr(),
            prefix,
            netmask,
            wildcard: Ipv4Addr::from(!u32::from(netmask)),
            network,
            broadcast,
            first_host,
            last_host,
            next_subnet: spec.next_subnet(),
            total_addresses,
            usable_hosts,
        }
    }

    /// The subnet in normalized CIDR form (`network/prefix`).
    pub fn cidr(&self) -> String {
        format!("{}/{}", self.network, self.prefix)
    }

    /// True for /31 and /32, where no address is reserved for network or broadcast.
    pub fn is_point_to_point(&self) -> bool {
        self.prefix >= 31
    }
}

impl From<&SubnetSpec> for SubnetFacts {
    fn from(spec: &SubnetSpec) -> Self {
        SubnetFacts::from_spec(spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn facts(addr: [u8; 4], prefix: u8) -> SubnetFacts {
        let spec = SubnetSpec::new(Ipv4Addr::from(addr), prefix).unwrap();
        SubnetFacts::from_spec(&spec)
    }

    #[test]
    fn test_facts_slash_27() {
        let f = facts([192, 0, 2, 10], 27);
        assert_eq!(f.address, Ipv4Addr::new(192, 0, 2, 10));
        assert_eq!(f.netmask, Ipv4Addr::new(255, 255, 255, 224));
        assert_eq!(f.wildcard, Ipv4Addr::new(0, 0, 0, 31));
        assert_eq!(f.network, Ipv4Addr::new(192, 0, 2, 0));
        assert_eq!(f.broadcast, Ipv4Addr::new(192, 0, 2, 31));
        assert_eq!(f.first_host, Ipv4Addr::new(192, 0, 2, 1));
        assert_eq!(f.last_host, Ipv4Addr::new(192, 0, 2, 30));
        assert_eq!(f.next_subnet, Some(Ipv4Addr::new(192, 0, 2, 32)));
        assert_eq!(f.total_addresses, 32);
        assert_eq!(f.usable_hosts, 30);
        assert_eq!(f.cidr(), "192.0.2.0/27");
    }

    #[test]
    fn test_facts_slash_14() {
        let f = facts([59, 89, 212, 216], 14);
        assert_eq!(f.netmask, Ipv4Addr::new(255, 252, 0, 0));
        assert_eq!(f.network, Ipv4Addr::new(59, 88, 0, 0));
        assert_eq!(f.broadcast, Ipv4Addr::new(59, 91, 255, 255));
        assert_eq!(f.next_subnet, Some(Ipv4Addr::new(59, 92, 0, 0)));
        assert_eq!(f.total_addresses, 262_144);
        assert_eq!(f.usable_hosts, 262_142);
    }

    #[test]
    fn test_facts_slash_30() {
        let f = facts([10, 0, 0, 5], 30);
        assert_eq!(f.network, Ipv4Addr::new(10, 0, 0, 4));
        assert_eq!(f.first_host, Ipv4Addr::new(10, 0, 0, 5));
        assert_eq!(f.last_host, Ipv4Addr::new(10, 0, 0, 6));
        assert_eq!(f.broadcast, Ipv4Addr::new(10, 0, 0, 7));
        assert_eq!(f.usable_hosts, 2);
        assert!(!f.is_point_to_point());
    }

    #[test]
    fn test_facts_slash_31_point_to_point() {
        let f = facts([10, 0, 0, 0], 31);
        assert_eq!(f.network, Ipv4Addr::new(10, 0, 0, 0));
        assert_eq!(f.broadcast, Ipv4Addr::new(10, 0, 0, 1));
        assert_eq!(f.first_host, f.network);
        assert_eq!(f.last_host, f.broadcast);
        assert_eq!(f.total_addresses, 2);
        assert_eq!(f.usable_hosts, 2);
        assert_eq!(f.next_subnet, Some(Ipv4Addr::new(10, 0, 0, 2)));
        assert!(f.is_point_to_point());
    }

    #[test]
    fn test_facts_slash_32_single_host() {
        let f = facts([10, 0, 0, 0], 32);
        assert_eq!(f.network, Ipv4Addr::new(10, 0, 0, 0));
        assert_eq!(f.broadcast, f.network);
        assert_eq!(f.first_host, f.network);
        assert_eq!(f.last_host, f.network);
        assert_eq!(f.total_addresses, 1);
        assert_eq!(f.usable_hosts, 1);
        assert_eq!(f.next_subnet, Some(Ipv4Addr::new(10, 0, 0, 1)));
    }

    #[test]
    fn test_facts_slash_0_has_no_next_subnet() {
        let f = facts([0, 0, 0, 0], 0);
        assert_eq!(f.netmask, Ipv4Addr::new(0, 0, 0, 0));
        assert_eq!(f.network, Ipv4Addr::new(0, 0, 0, 0));
        assert_eq!(f.broadcast, Ipv4Addr::BROADCAST);
        assert_eq!(f.first_host, Ipv4Addr::new(0, 0, 0, 1));
        assert_eq!(f.last_host, Ipv4Addr::new(255, 255, 255, 254));
        assert_eq!(f.total_addresses, 4_294_967_296);
        assert_eq!(f.usable_hosts, 4_294_967_294);
        assert_eq!(f.next_subnet, None);
    }

    #[test]
    fn test_facts_last_slash_32_has_no_next_subnet() {
        let f = facts([255, 255, 255, 255], 32);
        assert_eq!(f.network, Ipv4Addr::BROADCAST);
        assert_eq!(f.usable_hosts, 1);
        assert_eq!(f.next_subnet, None);
    }

    #[test]
    fn test_facts_invariants_every_prefix() {
        for p in 0..=MAX_LENGTH {
            let f = facts([203, 0, 113, 77], p);
            let mask = u32::from(f.netmask);
            assert_eq!(f.total_addresses, 1u64 << (32 - p), "total /{p}");
            assert_eq!(u32::from(f.network) & mask, u32::from(f.network));
            assert_eq!(u32::from(f.broadcast), u32::from(f.network) | !mask);
            assert!(f.first_host <= f.last_host, "host range /{p}");
            assert!(f.network <= f.first_host && f.last_host <= f.broadcast);
        }
    }

    #[test]
    fn test_facts_from_spec_ref() {
        let spec = SubnetSpec::new(Ipv4Addr::new(192, 168, 1, 50), 24).unwrap();
        let facts = SubnetFacts::from(&spec);
        assert_eq!(facts, SubnetFacts::from_spec(&spec));
        assert_eq!(facts.next_subnet, spec.next_subnet());
    }

    #[test]
    fn test_facts_serialize() {
        let json = serde_json::to_value(facts([192, 0, 2, 10], 27)).unwrap();
        assert_eq!(json["network"], "192.0.2.0");
        assert_eq!(json["next_subnet"], "192.0.2.32");
        assert_eq!(json["usable_hosts"], 30);

        let json = serde_json::to_value(facts([1, 2, 3, 4], 0)).unwrap();
        assert!(json["next_subnet"].is_null());
    }
}
