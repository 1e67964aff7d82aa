//! Command implementations for the pool league scoring CLI

pub mod common;
pub mod lineup;
pub mod recompute;
pub mod summary;
