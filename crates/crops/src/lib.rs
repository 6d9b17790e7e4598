//! Crops domain module.
//!
//! Crops accumulate growth (explicitly, or one step per watered day) until
//! they reach their maturity threshold, then are harvested exactly once.

pub mod crop;
pub mod kind;

pub use crop::{Crop, CropStage};
pub use kind::{CropKind, CropProfile};
