//! Addressmon table - pure data model and join logic
//!
//! Turns an address dump and a list of known devices into a display-ready
//! table. Nothing in here performs I/O, so the same code runs in the
//! dashboard service and in the browser front end.

pub mod age;
pub mod model;
pub mod table;

pub use age::{age_between, age_string};
pub use model::{AddressFamily, AddressRecord, Dump, KnownDevice, SubAddressRecord};
pub use table::{
    build_table, find_device, MatchStatus, NetworkAddress, TableOptions, TableRow, TableView,
    HEADERS, UNKNOWN_DEVICE,
};
