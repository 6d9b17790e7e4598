use core::str::FromStr;
use serde::{Deserialize, Serialize};

use farmstead_core::{FarmError, FarmResult, Money, ValueObject, ensure_positive};

/// The closed set of goods the farm can sell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductKind {
    Milk,
    Eggs,
    Wool,
    Grain,
    CornCobs,
    Vegetables,
}

impl ProductKind {
    pub const ALL: [ProductKind; 6] = [
        ProductKind::Milk,
        ProductKind::Eggs,
        ProductKind::Wool,
        ProductKind::Grain,
        ProductKind::CornCobs,
        ProductKind::Vegetables,
    ];

    /// Human readable name, as shown in reports and accepted by lookups.
    pub fn display_name(&self) -> &'static str {
        match self {
            ProductKind::Milk => "Milk",
            ProductKind::Eggs => "Eggs",
            ProductKind::Wool => "Wool",
            ProductKind::Grain => "Grain",
            ProductKind::CornCobs => "Corn Cobs",
            ProductKind::Vegetables => "Vegetables",
        }
    }

    /// Fixed unit price.
    pub fn price_per_unit(&self) -> Money {
        let cents = match self {
            ProductKind::Milk => 6035,
            ProductKind::Eggs => 295,
            ProductKind::Wool => 9500,
            ProductKind::Grain => 3500,
            ProductKind::CornCobs => 2572,
            ProductKind::Vegetables => 4554,
        };
        Money::from_cents(cents)
    }
}

impl core::fmt::Display for ProductKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ProductKind {
    type Err = FarmError;

    /// Case-insensitive; spaces, dashes and underscores are ignored, so
    /// "Corn Cobs", "corn-cobs" and "corncobs" all resolve to `CornCobs`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        ProductKind::ALL
            .into_iter()
            .find(|kind| normalize(kind.display_name()) == wanted)
            .ok_or_else(|| FarmError::not_found(format!("unknown product {:?}", s.trim())))
    }
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// A sellable quantity of one kind of good.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    kind: ProductKind,
    quantity: u32,
}

impl ValueObject for Product {}

impl Product {
    pub fn new(kind: ProductKind, quantity: u32) -> Self {
        Self { kind, quantity }
    }

    pub fn kind(&self) -> ProductKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.display_name()
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn price_per_unit(&self) -> Money {
        self.kind.price_per_unit()
    }

    pub fn is_empty(&self) -> bool {
        self.quantity == 0
    }

    /// Market value of the whole remaining quantity.
    pub fn total_value(&self) -> Money {
        self.price_per_unit().saturating_mul(self.quantity)
    }

    /// Merge another batch of the same kind into this one.
    pub fn absorb(&mut self, other: Product) -> FarmResult<()> {
        if other.kind != self.kind {
            return Err(FarmError::invalid_argument(format!(
                "cannot merge {} into {}",
                other.kind, self.kind
            )));
        }
        self.quantity = self
            .quantity
            .checked_add(other.quantity)
            .ok_or_else(|| FarmError::invalid_argument("product quantity overflow"))?;
        Ok(())
    }

    /// Sell part of the quantity, returning the revenue.
    ///
    /// Fails with `InvalidArgument` (leaving the quantity untouched) when
    /// `quantity <= 0` or more than is available is requested.
    pub fn sell(&mut self, quantity: i64) -> FarmResult<Money> {
        let quantity = ensure_positive(quantity, "sell quantity")?;
        if quantity > self.quantity {
            return Err(FarmError::invalid_argument(format!(
                "cannot sell {quantity} {}: only {} available",
                self.kind, self.quantity
            )));
        }
        let revenue = self
            .price_per_unit()
            .checked_mul(quantity)
            .ok_or_else(|| FarmError::invalid_argument("revenue overflow"))?;

        self.quantity -= quantity;
        tracing::debug!(product = %self.kind, sold = quantity, remaining = self.quantity, %revenue, "product sold");
        Ok(revenue)
    }
}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}: {} units @ K{} each",
            self.name(),
            self.quantity,
            self.price_per_unit()
        )
    }
}
