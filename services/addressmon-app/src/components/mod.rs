//! UI components

pub mod address_table;
pub mod match_cell;
