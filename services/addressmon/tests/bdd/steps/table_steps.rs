//! BDD step definitions for age formatting and the address table

use addressmon_table::{
    age_string, build_table, AddressRecord, KnownDevice, MatchStatus, SubAddressRecord,
    TableOptions, TableRow,
};
use cucumber::{given, then, when};

use crate::world::AddressmonWorld;

fn row(world: &AddressmonWorld, index: usize) -> &TableRow {
    let table = world.table.as_ref().expect("table not built");
    table
        .rows
        .get(index - 1)
        .unwrap_or_else(|| panic!("no row {} in table of {}", index, table.rows.len()))
}

#[given(expr = "a dump with reference time {int}")]
fn dump_with_reference_time(world: &mut AddressmonWorld, curtime: i64) {
    world.dump.curtime = Some(curtime);
}

#[given(expr = "an observed address {string} last seen at {int}")]
fn observed_address(world: &mut AddressmonWorld, addr: String, time: i64) {
    world.dump.addresses.push(AddressRecord {
        addr,
        time: Some(time),
        addresses: None,
    });
}

#[given(expr = "the address {string} has network address {string} seen at {int}")]
fn network_address(world: &mut AddressmonWorld, addr: String, network: String, time: i64) {
    let record = world
        .dump
        .addresses
        .iter_mut()
        .find(|r| r.addr == addr)
        .expect("address not observed");
    record
        .addresses
        .get_or_insert_with(Vec::new)
        .push(SubAddressRecord {
            addr: network,
            time: Some(time),
            address_type: Some(2),
        });
}

#[given(expr = "a known device {string} named {string}")]
fn known_device(world: &mut AddressmonWorld, addr: String, name: String) {
    world.devices.push(KnownDevice { addr, name });
}

#[when(expr = "the age of {int} seconds is formatted")]
fn format_age(world: &mut AddressmonWorld, seconds: i64) {
    world.age = Some(age_string(seconds));
}

#[when("the table is built")]
fn table_is_built(world: &mut AddressmonWorld) {
    world.table = Some(build_table(
        world.dump.clone(),
        &world.devices,
        &TableOptions::default(),
    ));
}

#[then(expr = "the age should read {string}")]
fn age_should_read(world: &mut AddressmonWorld, expected: String) {
    assert_eq!(world.age.as_deref(), Some(expected.as_str()));
}

#[then(expr = "the table should have {int} row(s)")]
fn table_row_count(world: &mut AddressmonWorld, count: usize) {
    let table = world.table.as_ref().expect("table not built");
    assert_eq!(table.rows.len(), count);
}

#[then(expr = "row {int} should show address {string}")]
fn row_address(world: &mut AddressmonWorld, index: usize, expected: String) {
    assert_eq!(row(world, index).address, expected);
}

#[then(expr = "row {int} should have age {string}")]
fn row_age(world: &mut AddressmonWorld, index: usize, expected: String) {
    assert_eq!(row(world, index).age.as_deref(), Some(expected.as_str()));
}

#[then(expr = "row {int} should have description {string}")]
fn row_description(world: &mut AddressmonWorld, index: usize, expected: String) {
    assert_eq!(row(world, index).description, expected);
}

#[then(expr = "row {int} should be marked as a match")]
fn row_is_match(world: &mut AddressmonWorld, index: usize) {
    assert_eq!(row(world, index).status, MatchStatus::Match);
}

#[then(expr = "row {int} should be marked as no match")]
fn row_is_no_match(world: &mut AddressmonWorld, index: usize) {
    assert_eq!(row(world, index).status, MatchStatus::NoMatch);
}

#[then(expr = "row {int} should have no network addresses")]
fn row_without_network_addresses(world: &mut AddressmonWorld, index: usize) {
    assert!(row(world, index).network_addresses.is_empty());
}

#[then(expr = "row {int} should list network addresses {string}")]
fn row_network_addresses(world: &mut AddressmonWorld, index: usize, expected: String) {
    let listed: Vec<String> = row(world, index)
        .network_addresses
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(listed.join(", "), expected);
}
