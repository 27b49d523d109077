//! Wire types for the address dump and the known-devices list
//!
//! Every field is defaulted so that a document which parses but misses a
//! field still produces a table, with blank cells where data is absent.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Root snapshot returned by the monitoring daemon
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dump {
    /// Reference "now" (unix seconds) for all age calculations
    #[serde(default)]
    pub curtime: Option<i64>,
    #[serde(default)]
    pub addresses: Vec<AddressRecord>,
}

/// One observed hardware address
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddressRecord {
    #[serde(default)]
    pub addr: String,
    /// Last time seen, unix seconds
    #[serde(default)]
    pub time: Option<i64>,
    /// Network-layer addresses seen with this hardware address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub addresses: Option<Vec<SubAddressRecord>>,
}

/// A network address seen in association with an [`AddressRecord`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubAddressRecord {
    #[serde(default)]
    pub addr: String,
    #[serde(default)]
    pub time: Option<i64>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub address_type: Option<i32>,
}

impl SubAddressRecord {
    pub fn family(&self) -> Option<AddressFamily> {
        self.address_type.map(AddressFamily::from)
    }
}

/// Static mapping from hardware address to a description
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnownDevice {
    #[serde(default)]
    pub addr: String,
    #[serde(default)]
    pub name: String,
}

/// Address family as reported in the `type` field (Linux socket constants)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddressFamily {
    Inet,
    Inet6,
    Packet,
    Other(i32),
}

impl AddressFamily {
    pub const INET: i32 = 2;
    pub const INET6: i32 = 10;
    pub const PACKET: i32 = 17;
}

impl From<i32> for AddressFamily {
    fn from(value: i32) -> Self {
        match value {
            Self::INET => AddressFamily::Inet,
            Self::INET6 => AddressFamily::Inet6,
            Self::PACKET => AddressFamily::Packet,
            other => AddressFamily::Other(other),
        }
    }
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressFamily::Inet => write!(f, "IPv4"),
            AddressFamily::Inet6 => write!(f, "IPv6"),
            AddressFamily::Packet => write!(f, "Ethernet"),
            AddressFamily::Other(n) => write!(f, "family {}", n),
        }
    }
}
