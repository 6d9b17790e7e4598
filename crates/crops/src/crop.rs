use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use farmstead_core::{
    ActionKind, ActionRecord, EntityId, EntityMeta, FarmEntity, FarmError, FarmResult,
    ensure_positive,
};
use farmstead_products::Product;

use crate::kind::{CropKind, CropProfile};

/// Crop lifecycle: Growing -> ReadyToHarvest -> Harvested.
///
/// Harvesting is permanent; a harvested crop never grows again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CropStage {
    Growing,
    ReadyToHarvest,
    Harvested,
}

impl core::fmt::Display for CropStage {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            CropStage::Growing => "Growing",
            CropStage::ReadyToHarvest => "Ready to Harvest",
            CropStage::Harvested => "Harvested",
        })
    }
}

/// A planted crop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crop {
    meta: EntityMeta,
    kind: CropKind,
    growth: u32,
    watered_today: bool,
    harvested: bool,
}

impl Crop {
    pub fn new(id: EntityId, kind: CropKind, name: impl Into<String>) -> FarmResult<Self> {
        Ok(Self {
            meta: EntityMeta::new(id, name)?,
            kind,
            growth: 0,
            watered_today: false,
            harvested: false,
        })
    }

    pub fn kind(&self) -> CropKind {
        self.kind
    }

    pub fn profile(&self) -> &'static CropProfile {
        self.kind.profile()
    }

    pub fn growth(&self) -> u32 {
        self.growth
    }

    pub fn maturity(&self) -> u32 {
        self.profile().maturity
    }

    pub fn is_mature(&self) -> bool {
        self.growth >= self.maturity()
    }

    pub fn is_harvested(&self) -> bool {
        self.harvested
    }

    pub fn is_watered_today(&self) -> bool {
        self.watered_today
    }

    pub fn stage(&self) -> CropStage {
        if self.harvested {
            CropStage::Harvested
        } else if self.is_mature() {
            CropStage::ReadyToHarvest
        } else {
            CropStage::Growing
        }
    }

    fn ensure_not_harvested(&self) -> FarmResult<()> {
        if self.harvested {
            return Err(FarmError::already_harvested(format!(
                "{} has already been harvested",
                self.meta.name()
            )));
        }
        Ok(())
    }

    /// Advance growth by `days`.
    pub fn grow(&mut self, days: i64, at: DateTime<Utc>) -> FarmResult<()> {
        let days = ensure_positive(days, "growth days")?;
        self.ensure_not_harvested()?;

        self.growth = self.growth.saturating_add(days);
        self.meta.record(ActionKind::Grow, days, at);
        tracing::debug!(
            entity_id = %self.meta.id(),
            days,
            growth = self.growth,
            maturity = self.maturity(),
            "crop grew"
        );
        Ok(())
    }

    /// Water the crop for the current day. Watering twice in a day is a no-op.
    pub fn water(&mut self, at: DateTime<Utc>) -> FarmResult<()> {
        self.ensure_not_harvested()?;
        if self.watered_today {
            return Ok(());
        }
        self.watered_today = true;
        self.meta.record(ActionKind::Water, 1, at);
        Ok(())
    }

    /// End-of-day tick: a watered crop grows one step, then needs watering again.
    ///
    /// Returns whether the crop grew. Unwatered and harvested crops stay put.
    pub fn day_tick(&mut self, at: DateTime<Utc>) -> bool {
        if self.harvested || !self.watered_today {
            self.watered_today = false;
            return false;
        }
        self.watered_today = false;
        self.growth = self.growth.saturating_add(1);
        self.meta.record(ActionKind::Grow, 1, at);
        true
    }

    /// Check harvest preconditions without harvesting.
    pub fn check_can_harvest(&self) -> FarmResult<()> {
        self.ensure_not_harvested()?;
        if !self.is_mature() {
            return Err(FarmError::NotMature {
                growth: self.growth,
                maturity: self.maturity(),
            });
        }
        Ok(())
    }

    /// What a harvest would yield at the current growth, without harvesting.
    pub fn pending_harvest(&self) -> Product {
        let profile = self.profile();
        Product::new(profile.product, self.growth.saturating_mul(profile.units_per_growth))
    }

    /// Harvest a mature crop; yield is proportional to accumulated growth.
    pub fn harvest(&mut self, at: DateTime<Utc>) -> FarmResult<Product> {
        self.check_can_harvest()?;

        let profile = self.profile();
        let units = self.pending_harvest().quantity();
        self.harvested = true;
        self.meta.record(ActionKind::Harvest, units, at);

        tracing::debug!(
            entity_id = %self.meta.id(),
            product = %profile.product,
            units,
            "crop harvested"
        );
        Ok(Product::new(profile.product, units))
    }
}

impl FarmEntity for Crop {
    fn id(&self) -> EntityId {
        self.meta.id()
    }

    fn name(&self) -> &str {
        self.meta.name()
    }

    fn history(&self) -> &[ActionRecord] {
        self.meta.history()
    }

    fn status(&self) -> String {
        format!(
            "{} '{}' [ID: {}] - Growth: {}/{}, Status: {}",
            self.kind,
            self.meta.name(),
            self.meta.id(),
            self.growth,
            self.maturity(),
            self.stage()
        )
    }
}
