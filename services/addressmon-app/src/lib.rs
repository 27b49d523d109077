//! Address Monitor - Leptos frontend
//!
//! Browser-side rendering of the address table. The host page provides the
//! table element; on every load the dump and the known-devices list are
//! fetched from the page's own origin and the table's head and body filled in.

pub mod api;
pub mod components;

pub use components::address_table::AddressTable;

/// Id of the table element in the host document
pub const TABLE_ID: &str = "addresses";

/// Entry point for the WASM client
#[cfg(all(feature = "csr", target_arch = "wasm32"))]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn mount() {
    use wasm_bindgen::JsCast;

    let table = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(TABLE_ID))
        .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok());

    match table {
        Some(table) => leptos::mount::mount_to(table, AddressTable).forget(),
        None => leptos::logging::error!("no table with id '{}' in the host document", TABLE_ID),
    }
}
