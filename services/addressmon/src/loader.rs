//! Retrieval of the address dump and known-devices list

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use addressmon_table::{build_table, Dump, KnownDevice, TableOptions, TableView};
use serde::de::DeserializeOwned;

use crate::config::SourceConfig;
use crate::io::HttpClient;
use crate::{AddressmonError, Result};

/// Current unix time in seconds
pub fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

/// Fetches both documents and joins them into a [`TableView`]
pub struct TableLoader {
    source: SourceConfig,
    options: TableOptions,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for TableLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TableLoader")
            .field("base_url", &self.source.base_url)
            .field("options", &self.options)
            .finish()
    }
}

impl TableLoader {
    pub fn new(source: SourceConfig, options: TableOptions, http: Arc<dyn HttpClient>) -> Self {
        tracing::debug!("Created TableLoader for {}", source.base_url);
        Self {
            source,
            options,
            http,
        }
    }

    pub fn dump_url(&self, now: u64) -> String {
        let url = join_url(&self.source.base_url, &self.source.dump_path);
        if self.source.cache_bust_dump {
            cache_bust(&url, now)
        } else {
            url
        }
    }

    pub fn known_devices_url(&self, now: u64) -> String {
        cache_bust(
            &join_url(&self.source.base_url, &self.source.known_devices_path),
            now,
        )
    }

    /// Load a fresh table, stamping cache-busting parameters with the current time
    pub async fn load(&self) -> Result<TableView> {
        self.load_at(unix_now()).await
    }

    /// Fetch the dump, then the known devices, then join them.
    ///
    /// Nothing is built unless both documents arrive and parse.
    pub async fn load_at(&self, now: u64) -> Result<TableView> {
        let dump: Dump = self.fetch_json(&self.dump_url(now), "dump").await?;
        tracing::debug!(
            "Dump has {} addresses, curtime={:?}",
            dump.addresses.len(),
            dump.curtime
        );

        let devices: Vec<KnownDevice> = self
            .fetch_json(&self.known_devices_url(now), "known devices")
            .await?;
        tracing::debug!("Loaded {} known devices", devices.len());

        let table = build_table(dump, &devices, &self.options);
        tracing::debug!(
            "Built table with {} rows, {} matched",
            table.rows.len(),
            table.matched_count()
        );
        Ok(table)
    }

    async fn fetch_json<T: DeserializeOwned>(
        &self,
        url: &str,
        document: &'static str,
    ) -> Result<T> {
        let response = self.http.get(url).await?;
        if !response.is_success() {
            return Err(AddressmonError::Status {
                url: url.to_string(),
                status: response.status,
            });
        }
        serde_json::from_str(&response.body)
            .map_err(|source| AddressmonError::Parse { document, source })
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

fn cache_bust(url: &str, now: u64) -> String {
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{}{}v={}", url, separator, now)
}
