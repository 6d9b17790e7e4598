use chrono::{DateTime, Utc};

use farmstead_core::{
    ActionKind, ActionRecord, EntityId, EntityMeta, FarmEntity, FarmError, FarmResult,
    ensure_positive,
};
use farmstead_products::Product;

use crate::species::{Species, SpeciesProfile};

/// Upper bound of both `food_level` and `health`.
pub const MAX_LEVEL: u32 = 100;

/// An animal with `food_level` below this is hungry and gets auto-fed.
pub const HUNGRY_BELOW: u32 = 30;

const STARTING_FOOD: u32 = 50;
const STARTING_HEALTH: u32 = MAX_LEVEL;

/// Below this food level, each decay also costs health.
const LOW_FOOD: u32 = 20;
const LOW_FOOD_HEALTH_PENALTY: u32 = 10;

/// A farm animal.
///
/// `food_level` and `health` always stay within `0..=MAX_LEVEL`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Animal {
    meta: EntityMeta,
    species: Species,
    food_level: u32,
    health: u32,
    fed_today: u32,
    /// Day ticks left before the animal can produce again.
    recovering_days: u32,
}

impl Animal {
    pub fn new(id: EntityId, species: Species, name: impl Into<String>) -> FarmResult<Self> {
        Ok(Self {
            meta: EntityMeta::new(id, name)?,
            species,
            food_level: STARTING_FOOD,
            health: STARTING_HEALTH,
            fed_today: 0,
            recovering_days: 0,
        })
    }

    /// Build an animal with explicit levels (clamped into range).
    pub fn with_levels(
        id: EntityId,
        species: Species,
        name: impl Into<String>,
        food_level: u32,
        health: u32,
    ) -> FarmResult<Self> {
        let mut animal = Self::new(id, species, name)?;
        animal.food_level = food_level.min(MAX_LEVEL);
        animal.health = health.min(MAX_LEVEL);
        Ok(animal)
    }

    pub fn species(&self) -> Species {
        self.species
    }

    pub fn profile(&self) -> &'static SpeciesProfile {
        self.species.profile()
    }

    pub fn food_level(&self) -> u32 {
        self.food_level
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn fed_today(&self) -> u32 {
        self.fed_today
    }

    pub fn is_hungry(&self) -> bool {
        self.food_level < HUNGRY_BELOW
    }

    /// Whether the animal has recovered from its last yield (sheep regrowing wool).
    pub fn is_recovered(&self) -> bool {
        self.recovering_days == 0
    }

    pub fn make_sound(&self) -> &'static str {
        self.profile().sound
    }

    /// Feed `amount` units. Raises food by `amount` and health by half of it.
    pub fn feed(&mut self, amount: i64, at: DateTime<Utc>) -> FarmResult<()> {
        let amount = ensure_positive(amount, "feed amount")?;

        self.food_level = self.food_level.saturating_add(amount).min(MAX_LEVEL);
        self.health = self.health.saturating_add(amount / 2).min(MAX_LEVEL);
        self.fed_today = self.fed_today.saturating_add(amount);
        self.meta.record(ActionKind::Feed, amount, at);

        tracing::debug!(
            entity_id = %self.meta.id(),
            amount,
            food = self.food_level,
            health = self.health,
            "animal fed"
        );
        Ok(())
    }

    /// Lose `amount` food; a low food level afterwards also costs health.
    pub fn decay_food(&mut self, amount: u32) {
        self.food_level = self.food_level.saturating_sub(amount);
        if self.food_level < LOW_FOOD {
            self.health = self.health.saturating_sub(LOW_FOOD_HEALTH_PENALTY);
            tracing::debug!(
                entity_id = %self.meta.id(),
                food = self.food_level,
                health = self.health,
                "animal underfed, health dropped"
            );
        }
    }

    /// Start-of-day bookkeeping: clears the daily ration and advances recovery.
    pub fn day_tick(&mut self) {
        self.fed_today = 0;
        self.recovering_days = self.recovering_days.saturating_sub(1);
    }

    /// Check the species preconditions without producing anything.
    pub fn check_can_produce(&self) -> FarmResult<()> {
        let profile = self.profile();
        let name = self.meta.name();
        if self.health < profile.min_health {
            return Err(FarmError::unhealthy(format!(
                "{name} is too unhealthy to produce {} (health {}/{})",
                profile.product, self.health, profile.min_health
            )));
        }
        if self.food_level < profile.min_food {
            return Err(FarmError::insufficient(format!(
                "{name} needs more food to produce {} (food {}/{})",
                profile.product, self.food_level, profile.min_food
            )));
        }
        if !self.is_recovered() {
            return Err(FarmError::not_ready(format!(
                "{name} cannot produce {} for another {} day(s)",
                profile.product, self.recovering_days
            )));
        }
        Ok(())
    }

    /// What the next `produce` would yield at the current health, without producing it.
    pub fn pending_yield(&self) -> Product {
        let profile = self.profile();
        Product::new(profile.product, profile.yield_formula.units(self.health))
    }

    /// Produce the species' good. Quantity follows the species yield formula.
    pub fn produce(&mut self, at: DateTime<Utc>) -> FarmResult<Product> {
        self.check_can_produce()?;

        let profile = self.profile();
        let units = self.pending_yield().quantity();
        if let Some(days) = profile.regrowth_days {
            self.recovering_days = days;
        }
        self.meta.record(ActionKind::Produce, units, at);

        tracing::debug!(
            entity_id = %self.meta.id(),
            product = %profile.product,
            units,
            "animal produced"
        );
        Ok(Product::new(profile.product, units))
    }
}

impl FarmEntity for Animal {
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
            "{} {} (ID: {}) - Food: {}, Health: {}, Fed: {} units today",
            self.species,
            self.meta.name(),
            self.meta.id(),
            self.food_level,
            self.health,
            self.fed_today
        )
    }
}
