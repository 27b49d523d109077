//! Load lifecycle: Idle -> Loading -> Rendered | Failed

use std::fmt;

use addressmon_table::TableView;

use crate::loader::TableLoader;

/// Phase of a single load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    Rendered,
    Failed,
}

impl fmt::Display for LoadState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadState::Idle => write!(f, "Idle"),
            LoadState::Loading => write!(f, "Loading"),
            LoadState::Rendered => write!(f, "Rendered"),
            LoadState::Failed => write!(f, "Failed"),
        }
    }
}

/// Holds the most recently rendered table and the state of the last load.
///
/// A failed load leaves the previous table in place.
#[derive(Debug)]
pub struct Session {
    state: LoadState,
    table: Option<TableView>,
    last_error: Option<String>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            state: LoadState::Idle,
            table: None,
            last_error: None,
        }
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn table(&self) -> Option<&TableView> {
        self.table.as_ref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Run one load. Errors are logged and never returned.
    pub async fn refresh(&mut self, loader: &TableLoader) -> LoadState {
        self.transition(LoadState::Loading);

        match loader.load().await {
            Ok(table) => {
                self.table = Some(table);
                self.last_error = None;
                self.transition(LoadState::Rendered);
            }
            Err(e) => {
                tracing::error!("Error fetching data: {}", e);
                self.last_error = Some(e.to_string());
                self.transition(LoadState::Failed);
            }
        }

        self.state
    }

    fn transition(&mut self, next: LoadState) {
        tracing::debug!("Load state {} -> {}", self.state, next);
        self.state = next;
    }
}
