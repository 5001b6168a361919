//! IPv4 subnet containment

use std::net::Ipv4Addr;
use std::str::FromStr;

use crate::error::AddressError;

/// Maximum IPv4 prefix length.
pub const MAX_PREFIX: u8 = 32;

/// An IPv4 network in CIDR form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ipv4Cidr {
    pub addr: Ipv4Addr,
    pub prefix: u8,
}

/// Convert a prefix length to a netmask.
pub fn netmask(prefix: u8) -> u32 {
    if prefix == 0 {
        0
    } else {
        u32::MAX << (MAX_PREFIX - prefix.min(MAX_PREFIX))
    }
}

impl Ipv4Cidr {
    /// Whether `ip` lies inside this network.
    pub fn contains(&self, ip: Ipv4Addr) -> bool {
        let mask = netmask(self.prefix);
        u32::from(ip) & mask == u32::from(self.addr) & mask
    }
}

impl FromStr for Ipv4Cidr {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AddressError::InvalidSubnet(s.to_string());

        let (addr, prefix) = s.trim().split_once('/').ok_or_else(invalid)?;
        let addr = addr.parse::<Ipv4Addr>().map_err(|_| invalid())?;
        let prefix = prefix.parse::<u8>().map_err(|_| invalid())?;
        if prefix > MAX_PREFIX {
            return Err(invalid());
        }

        Ok(Self { addr, prefix })
    }
}

/// Parse a dotted-quad IPv4 address.
pub fn parse_ip(ip: &str) -> Result<Ipv4Addr, AddressError> {
    ip.trim()
        .parse::<Ipv4Addr>()
        .map_err(|_| AddressError::InvalidAddress(ip.to_string()))
}

/// Whether `ip` lies inside `subnet` (CIDR notation).
#[allow(dead_code)]
pub fn contains(subnet: &str, ip: &str) -> Result<bool, AddressError> {
    let cidr = subnet.parse::<Ipv4Cidr>()?;
    let ip = parse_ip(ip)?;
    Ok(cidr.contains(ip))
}
