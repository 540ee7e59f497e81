//! Command implementations for the draft valuation CLI

pub mod process_data;
