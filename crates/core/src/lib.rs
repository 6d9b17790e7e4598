//! `farmstead-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the livestock,
//! crop, product and farm crates (no IO, no presentation).

pub mod action;
pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use action::{ActionKind, ActionRecord};
pub use entity::{EntityMeta, FarmEntity};
pub use error::{FarmError, FarmResult, ensure_positive};
pub use id::{EntityId, IdGenerator};
pub use value_object::{Money, ValueObject};
