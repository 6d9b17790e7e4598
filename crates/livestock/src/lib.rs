//! Livestock domain module.
//!
//! Animals are fed, lose food over simulated days and produce goods. Species
//! differ only by the constants and yield formula in their [`SpeciesProfile`].

pub mod animal;
pub mod species;

pub use animal::{Animal, HUNGRY_BELOW, MAX_LEVEL};
pub use species::{Species, SpeciesProfile, YieldFormula};
