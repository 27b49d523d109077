//! Address table component
//!
//! Mounted into the host page's `<table>`; fills in its head and body.

use addressmon_table::{TableRow, TableView};
use leptos::prelude::*;

use crate::api::load_table;
use crate::components::match_cell::MatchCell;

/// A successful load yields the table; a failure is logged and yields nothing
fn loaded(result: Result<TableView, String>) -> Option<TableView> {
    match result {
        Ok(table) => Some(table),
        Err(e) => {
            leptos::logging::error!("Error fetching data: {}", e);
            None
        }
    }
}

/// Loads the documents once and renders head and body of the joined table.
///
/// After a failed load neither the header row nor any body row is built.
#[component]
pub fn AddressTable() -> impl IntoView {
    let table = LocalResource::new(|| async move { loaded(load_table().await) });

    view! {
        <Suspense fallback=|| ()>
            {move || table.get().flatten().map(|data| view! { <TableContents table=data /> })}
        </Suspense>
    }
}

#[component]
fn TableContents(table: TableView) -> impl IntoView {
    let headers = table
        .headers()
        .into_iter()
        .map(|h| view! { <th style="padding: 0.5rem; text-align: left;">{h}</th> })
        .collect::<Vec<_>>();
    let rows = table
        .rows
        .into_iter()
        .map(|row| view! { <AddressRow row=row /> })
        .collect::<Vec<_>>();

    view! {
        <thead>
            <tr style="border-bottom: 2px solid #dee2e6;">{headers}</tr>
        </thead>
        <tbody id="address-body">{rows}</tbody>
    }
}

/// One table row: address, age, network addresses, description
#[component]
fn AddressRow(row: TableRow) -> impl IntoView {
    let network_addresses = row
        .network_addresses
        .iter()
        .enumerate()
        .map(|(i, n)| {
            let text = n.to_string();
            let family = n.family.map(|f| f.to_string());
            view! {
                {(i > 0).then(|| view! { "," <br /> })}
                <span title=family>{text}</span>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <tr style="border-bottom: 1px solid #dee2e6;">
            <MatchCell address=row.address status=row.status />
            <td style="padding: 0.5rem;">{row.age.unwrap_or_default()}</td>
            <td style="padding: 0.5rem;">{network_addresses}</td>
            <td style="padding: 0.5rem;">{row.description}</td>
        </tr>
    }
}
