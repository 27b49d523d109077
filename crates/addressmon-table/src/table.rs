//! Sorting, known-device join and row formatting

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::age::age_between;
use crate::model::{AddressFamily, AddressRecord, Dump, KnownDevice, SubAddressRecord};

/// Column headers, in display order
pub const HEADERS: [&str; 4] = ["address", "age", "network address", "description"];

/// Description shown for addresses without a known device
pub const UNKNOWN_DEVICE: &str = "__UNKNOWN__";

/// Whether a row's address was found in the known-devices list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    Match,
    NoMatch,
}

impl MatchStatus {
    /// CSS background colour for the address cell
    pub fn background(&self) -> &'static str {
        match self {
            MatchStatus::Match => "PaleGreen",
            MatchStatus::NoMatch => "Salmon",
        }
    }
}

/// A subordinate network address with its age
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkAddress {
    pub addr: String,
    pub age: Option<String>,
    pub family: Option<AddressFamily>,
}

impl fmt::Display for NetworkAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.addr, self.age.as_deref().unwrap_or(""))
    }
}

/// One display row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    pub address: String,
    pub age: Option<String>,
    pub network_addresses: Vec<NetworkAddress>,
    pub description: String,
    pub status: MatchStatus,
}

impl TableRow {
    /// Network addresses as plain text, one per line
    pub fn network_address_text(&self) -> String {
        self.network_addresses
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",\n")
    }
}

/// The complete table, rows newest first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableView {
    pub rows: Vec<TableRow>,
}

impl TableView {
    pub fn headers(&self) -> [&'static str; 4] {
        HEADERS
    }

    pub fn matched_count(&self) -> usize {
        self.rows
            .iter()
            .filter(|r| r.status == MatchStatus::Match)
            .count()
    }
}

/// Options applied while building the table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableOptions {
    /// Only show network addresses of these `type` values; empty shows all
    #[serde(default)]
    pub network_address_types: Vec<i32>,
}

impl TableOptions {
    fn includes(&self, sub: &SubAddressRecord) -> bool {
        self.network_address_types.is_empty()
            || sub
                .address_type
                .is_some_and(|t| self.network_address_types.contains(&t))
    }
}

/// Look up a known device by hardware address, ignoring case
pub fn find_device<'a>(devices: &'a [KnownDevice], addr: &str) -> Option<&'a KnownDevice> {
    devices.iter().find(|d| d.addr.eq_ignore_ascii_case(addr))
}

/// Sort the dump newest first and join it against the known devices
pub fn build_table(dump: Dump, devices: &[KnownDevice], options: &TableOptions) -> TableView {
    let Dump {
        curtime,
        mut addresses,
    } = dump;

    addresses.sort_by(|a, b| b.time.cmp(&a.time));

    let rows = addresses
        .into_iter()
        .map(|record| build_row(record, curtime, devices, options))
        .collect();

    TableView { rows }
}

fn build_row(
    record: AddressRecord,
    curtime: Option<i64>,
    devices: &[KnownDevice],
    options: &TableOptions,
) -> TableRow {
    let device = find_device(devices, &record.addr);

    let mut subs = record.addresses.unwrap_or_default();
    subs.sort_by(|a, b| b.time.cmp(&a.time));

    let network_addresses = subs
        .into_iter()
        .filter(|sub| options.includes(sub))
        .map(|sub| NetworkAddress {
            age: age_between(curtime, sub.time),
            family: sub.family(),
            addr: sub.addr,
        })
        .collect();

    TableRow {
        age: age_between(curtime, record.time),
        network_addresses,
        description: device
            .map(|d| d.name.clone())
            .unwrap_or_else(|| UNKNOWN_DEVICE.to_string()),
        status: if device.is_some() {
            MatchStatus::Match
        } else {
            MatchStatus::NoMatch
        },
        address: record.addr,
    }
}
