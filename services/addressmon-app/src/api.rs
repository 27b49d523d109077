//! Client-side fetch of the dump and known-devices documents

use addressmon_table::TableView;

/// Path of the address dump on the daemon
pub const DUMP_PATH: &str = "/dump/?dump";

/// Path of the static known-devices list
pub const KNOWN_DEVICES_PATH: &str = "/known_devs.json";

/// Known-devices path with the cache-busting version parameter
pub fn known_devices_path(now: u64) -> String {
    format!("{}?v={}", KNOWN_DEVICES_PATH, now)
}

/// Fetch the dump, then the known devices, and join them.
///
/// Outside a `csr` wasm32 build this yields an empty table.
pub async fn load_table() -> Result<TableView, String> {
    #[cfg(all(feature = "csr", target_arch = "wasm32"))]
    {
        use addressmon_table::{build_table, Dump, KnownDevice, TableOptions};

        let dump: Dump = fetch_json(DUMP_PATH).await?;
        let devices: Vec<KnownDevice> = fetch_json(&known_devices_path(unix_now())).await?;
        Ok(build_table(dump, &devices, &TableOptions::default()))
    }

    #[cfg(not(all(feature = "csr", target_arch = "wasm32")))]
    {
        Ok(TableView::default())
    }
}

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
fn unix_now() -> u64 {
    (js_sys::Date::now() / 1000.0) as u64
}

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
async fn fetch_json<T: serde::de::DeserializeOwned>(path: &str) -> Result<T, String> {
    let window = web_sys::window().ok_or("no window")?;
    let origin = window.location().origin().map_err(|e| format!("{:?}", e))?;
    let url = format!("{}{}", origin, path);

    let resp = gloo_net::http::Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("{}", e))?;

    if !resp.ok() {
        return Err(format!("GET {} returned status {}", url, resp.status()));
    }

    resp.json().await.map_err(|e| format!("{}", e))
}
