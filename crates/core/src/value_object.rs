//! Value objects: equality by value, not identity.
//!
//! A value object has no identity of its own. Two values with the same
//! attributes are interchangeable, which is what separates a [`Money`] amount
//! or a harvested product from an animal or a crop (entities, compared by id).

use serde::{Deserialize, Serialize};

/// Marker trait for value objects.
///
/// Value objects are immutable: "modifying" one means producing a new value.
/// The bounds keep them cheap to copy around, comparable and loggable.
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// struct Ration(u32);
///
/// impl ValueObject for Ration {}
///
/// assert_eq!(Ration(10), Ration(10));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

/// An amount of money in minor currency units (e.g. cents).
///
/// Displayed with two decimals: `Money::from_cents(30175)` renders `301.75`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u64);

impl ValueObject for Money {}

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub const fn cents(&self) -> u64 {
        self.0
    }

    /// `self * quantity`, or `None` on overflow.
    pub fn checked_mul(self, quantity: u32) -> Option<Money> {
        self.0.checked_mul(u64::from(quantity)).map(Money)
    }

    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    pub fn saturating_mul(self, quantity: u32) -> Money {
        Money(self.0.saturating_mul(u64::from(quantity)))
    }

    pub fn saturating_add(self, other: Money) -> Money {
        Money(self.0.saturating_add(other.0))
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}
