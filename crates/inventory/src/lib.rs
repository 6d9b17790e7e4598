//! Inventory domain module.
//!
//! Holds harvested and produced goods aggregated by product kind. Pure
//! in-memory bookkeeping (no IO, no storage).

pub mod stock;

pub use stock::Inventory;
