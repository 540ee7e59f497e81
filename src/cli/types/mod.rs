//! Type-safe wrappers and enums for draft valuation data.

pub mod position;
