//! BDD test world for addressmon

use std::sync::Arc;

use addressmon::session::Session;
use addressmon_table::{Dump, KnownDevice, TableView};
use cucumber::World;
use tokio::sync::RwLock;

/// Canned answer for one of the two documents
#[derive(Debug, Clone)]
pub enum Scripted {
    Body(String),
    Fail(String),
}

#[derive(Debug, Default, World)]
pub struct AddressmonWorld {
    // Documents
    pub dump: Dump,
    pub devices: Vec<KnownDevice>,

    // Pure table building
    pub table: Option<TableView>,
    pub age: Option<String>,

    // Scripted daemon
    pub dump_response: Option<Scripted>,
    pub devices_response: Option<Scripted>,
    pub requests: Arc<RwLock<Vec<String>>>,
    pub session: Session,

    // Dashboard
    pub dashboard_response_body: Option<String>,
}
