use std::net::{Ipv4Addr, Ipv6Addr};

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde_json::json;

use crate::providers::{Field, field_table_provider, seeded_rng};

/// Organisationally unique identifier prefixed to every MAC address.
const MAC_OUI: [u8; 3] = [0x00, 0x16, 0x3e];
/// First segment of every generated IPv6 address.
const IPV6_PREFIX: u16 = 0x2001;

#[derive(Debug)]
pub struct Network {
    rng: ChaCha8Rng,
}

impl Network {
    pub const NAME: &'static str = "network";

    pub fn new(seed: Option<u64>) -> Self {
        Self {
            rng: seeded_rng(seed, Self::NAME),
        }
    }

    pub fn ip_v4(&mut self) -> String {
        Ipv4Addr::from(self.rng.random::<[u8; 4]>()).to_string()
    }

    /// Address in `2001::/16`, rendered in its canonical (compressed) form.
    pub fn ip_v6(&mut self) -> String {
        let tail: [u16; 7] = self.rng.random();
        Ipv6Addr::new(
            IPV6_PREFIX,
            tail[0],
            tail[1],
            tail[2],
            tail[3],
            tail[4],
            tail[5],
            tail[6],
        )
        .to_string()
    }

    pub fn mac_address(&mut self) -> String {
        let octets = [
            MAC_OUI[0],
            MAC_OUI[1],
            MAC_OUI[2],
            self.rng.random_range(0x00..=0x7f),
            self.rng.random(),
            self.rng.random(),
        ];
        octets
            .iter()
            .map(|octet| format!("{octet:02x}"))
            .collect::<Vec<_>>()
            .join(":")
    }
}

impl Default for Network {
    fn default() -> Self {
        Self::new(None)
    }
}

const FIELDS: &[Field<Network>] = &[
    Field::new("ip_v4", |p| Ok(json!(p.ip_v4()))),
    Field::new("ip_v6", |p| Ok(json!(p.ip_v6()))),
    Field::new("mac_address", |p| Ok(json!(p.mac_address()))),
];

field_table_provider!(Network, FIELDS);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addresses_parse_back() {
        let mut network = Network::new(Some(5));
        assert!(network.ip_v4().parse::<Ipv4Addr>().is_ok());
        let v6: Ipv6Addr = network.ip_v6().parse().expect("ipv6");
        assert_eq!(v6.segments()[0], IPV6_PREFIX);
        let mac = network.mac_address();
        assert!(mac.starts_with("00:16:3e:"));
        assert_eq!(mac.len(), 17);
    }
}
