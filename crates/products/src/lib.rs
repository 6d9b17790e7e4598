//! Products domain module.
//!
//! Sellable goods produced by animals and harvested from crops. Pure value
//! logic: pricing and partial sale, no IO.

pub mod product;

pub use product::{Product, ProductKind};
