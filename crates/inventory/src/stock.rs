use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use farmstead_core::{FarmError, FarmResult, Money};
use farmstead_products::{Product, ProductKind};

/// Goods on hand, one record per product kind.
///
/// A kind has a record only while its quantity is positive: depositing an
/// empty batch is a no-op and selling the last unit removes the record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    stock: BTreeMap<ProductKind, Product>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, kind: ProductKind) -> Option<&Product> {
        self.stock.get(&kind)
    }

    /// Units on hand for `kind` (zero if there is no record).
    pub fn quantity_of(&self, kind: ProductKind) -> u32 {
        self.stock.get(&kind).map_or(0, Product::quantity)
    }

    /// All records, ordered by product kind.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.stock.values()
    }

    pub fn len(&self) -> usize {
        self.stock.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stock.is_empty()
    }

    /// Market value of everything on hand.
    pub fn total_value(&self) -> Money {
        self.stock
            .values()
            .fold(Money::ZERO, |acc, p| acc.saturating_add(p.total_value()))
    }

    /// Check that `product` could be deposited without overflowing its record.
    pub fn can_accept(&self, product: &Product) -> FarmResult<()> {
        let kind = product.kind();
        self.quantity_of(kind)
            .checked_add(product.quantity())
            .map(|_| ())
            .ok_or_else(|| FarmError::invalid_argument(format!("no room for more {kind}")))
    }

    /// Add a batch, merging it with any stock of the same kind.
    pub fn deposit(&mut self, product: Product) -> FarmResult<()> {
        if product.is_empty() {
            return Ok(());
        }
        let kind = product.kind();
        let added = product.quantity();
        match self.stock.get_mut(&kind) {
            Some(existing) => existing.absorb(product)?,
            None => {
                self.stock.insert(kind, product);
            }
        }
        tracing::debug!(product = %kind, added, on_hand = self.quantity_of(kind), "inventory deposit");
        Ok(())
    }

    /// Sell from the record for `kind`, dropping the record once it is empty.
    pub fn sell(&mut self, kind: ProductKind, quantity: i64) -> FarmResult<Money> {
        let product = self
            .stock
            .get_mut(&kind)
            .ok_or_else(|| FarmError::not_found(format!("no {kind} in inventory")))?;

        let revenue = product.sell(quantity)?;
        if product.is_empty() {
            self.stock.remove(&kind);
        }
        Ok(revenue)
    }
}
