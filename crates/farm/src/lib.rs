//! Farm management: the single owner of every animal, crop, the inventory
//! and the profit/day counters.
//!
//! Callers drive the farm through [`FarmManager`]; entity-level failures are
//! returned as [`farmstead_core::FarmError`], except in batch operations
//! where they are collected into a [`BatchOutcome`] / [`DaySummary`].

pub mod config;
pub mod entity;
pub mod manager;
pub mod outcome;
pub mod report;

pub use config::FarmConfig;
pub use entity::Entity;
pub use manager::FarmManager;
pub use outcome::{BatchFailure, BatchOutcome, DaySummary};
pub use report::{AnimalReport, CropReport, FarmReport};
