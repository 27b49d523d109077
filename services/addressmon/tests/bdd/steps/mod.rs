//! BDD step definitions for addressmon

pub mod dashboard_steps;
pub mod table_steps;
