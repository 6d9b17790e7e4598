use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use farmstead_core::{
    EntityId, FarmEntity, FarmError, FarmResult, IdGenerator, Money, ensure_positive,
};
use farmstead_crops::{Crop, CropKind, CropStage};
use farmstead_inventory::Inventory;
use farmstead_livestock::{Animal, Species};
use farmstead_products::{Product, ProductKind};

use crate::config::FarmConfig;
use crate::entity::Entity;
use crate::outcome::{BatchOutcome, DaySummary};
use crate::report::{AnimalReport, CropReport, FarmReport};

/// Owner of all entities, the inventory and the profit/day counters.
///
/// Only the manager mutates `total_profit` and `current_day`. Single-owner,
/// synchronous: wrap it in a mutex if it ever needs to be shared.
#[derive(Debug, Clone)]
pub struct FarmManager {
    config: FarmConfig,
    ids: IdGenerator,
    entities: BTreeMap<EntityId, Entity>,
    inventory: Inventory,
    total_profit: Money,
    current_day: u32,
}

impl Default for FarmManager {
    fn default() -> Self {
        Self::with_config(FarmConfig::default())
    }
}

impl FarmManager {
    /// Create a farm after validating `config`.
    pub fn new(config: FarmConfig) -> FarmResult<Self> {
        config.validate()?;
        Ok(Self::with_config(config))
    }

    fn with_config(config: FarmConfig) -> Self {
        Self {
            config,
            ids: IdGenerator::new(),
            entities: BTreeMap::new(),
            inventory: Inventory::new(),
            total_profit: Money::ZERO,
            current_day: 1,
        }
    }

    pub fn name(&self) -> &str {
        &self.config.farm_name
    }

    pub fn config(&self) -> &FarmConfig {
        &self.config
    }

    pub fn current_day(&self) -> u32 {
        self.current_day
    }

    pub fn total_profit(&self) -> Money {
        self.total_profit
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(&id)
    }

    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.values()
    }

    pub fn animals(&self) -> impl Iterator<Item = &Animal> {
        self.entities.values().filter_map(Entity::as_animal)
    }

    pub fn crops(&self) -> impl Iterator<Item = &Crop> {
        self.entities.values().filter_map(Entity::as_crop)
    }

    // ---- registration -----------------------------------------------------

    pub fn add_animal(&mut self, species: Species, name: &str) -> FarmResult<EntityId> {
        let animal = Animal::new(self.ids.next_id()?, species, name)?;
        self.add_entity(animal)
    }

    pub fn add_crop(&mut self, kind: CropKind, name: &str) -> FarmResult<EntityId> {
        let crop = Crop::new(self.ids.next_id()?, kind, name)?;
        self.add_entity(crop)
    }

    /// Register an already constructed entity under its own id.
    pub fn add_entity(&mut self, entity: impl Into<Entity>) -> FarmResult<EntityId> {
        let entity = entity.into();
        let id = entity.id();
        if self.entities.contains_key(&id) {
            return Err(FarmError::conflict(format!("entity {id} is already registered")));
        }
        self.ids.observe(id);
        tracing::info!(entity_id = %id, name = entity.name(), status = %entity.status(), "entity added");
        self.entities.insert(id, entity);
        Ok(id)
    }

    // ---- lookup -----------------------------------------------------------

    /// First entity whose name matches, ignoring ASCII case.
    pub fn find_by_name(&self, name: &str) -> Option<EntityId> {
        let name = name.trim();
        self.entities
            .values()
            .find(|e| e.name().eq_ignore_ascii_case(name))
            .map(FarmEntity::id)
    }

    /// Resolve an id (`ENT0003`) or, failing that, an entity name.
    pub fn resolve(&self, key: &str) -> FarmResult<EntityId> {
        if let Ok(id) = key.parse::<EntityId>() {
            if self.entities.contains_key(&id) {
                return Ok(id);
            }
        }
        self.find_by_name(key)
            .ok_or_else(|| FarmError::not_found(format!("no entity {:?}", key.trim())))
    }

    fn animal_mut(&mut self, id: EntityId) -> FarmResult<&mut Animal> {
        animal_in(&mut self.entities, id)
    }

    fn crop_mut(&mut self, id: EntityId) -> FarmResult<&mut Crop> {
        crop_in(&mut self.entities, id)
    }

    // ---- single-entity operations ------------------------------------------

    pub fn feed_animal(&mut self, id: EntityId, amount: i64) -> FarmResult<()> {
        self.animal_mut(id)?.feed(amount, Utc::now())
    }

    /// Produce from one animal; the goods go to inventory and a copy is returned.
    pub fn produce_animal(&mut self, id: EntityId) -> FarmResult<Product> {
        let animal = animal_in(&mut self.entities, id)?;
        let product = produce_into(animal, &mut self.inventory, Utc::now())?;
        tracing::info!(entity_id = %id, product = %product.kind(), units = product.quantity(), "animal produce stored");
        Ok(product)
    }

    pub fn grow_crop(&mut self, id: EntityId, days: i64) -> FarmResult<()> {
        self.crop_mut(id)?.grow(days, Utc::now())
    }

    pub fn water_crop(&mut self, id: EntityId) -> FarmResult<()> {
        self.crop_mut(id)?.water(Utc::now())
    }

    /// Harvest one crop; the goods go to inventory and a copy is returned.
    pub fn harvest_crop(&mut self, id: EntityId) -> FarmResult<Product> {
        let crop = crop_in(&mut self.entities, id)?;
        let product = harvest_into(crop, &mut self.inventory, Utc::now())?;
        tracing::info!(entity_id = %id, product = %product.kind(), units = product.quantity(), "harvest stored");
        Ok(product)
    }

    /// Sell from inventory by product name and book the revenue as profit.
    pub fn sell_product(&mut self, product: &str, quantity: i64) -> FarmResult<Money> {
        let kind: ProductKind = product.parse()?;
        let revenue = self.inventory.sell(kind, quantity)?;
        self.total_profit = self.total_profit.saturating_add(revenue);
        tracing::info!(product = %kind, quantity, %revenue, total_profit = %self.total_profit, "product sold");
        Ok(revenue)
    }

    // ---- batch operations -------------------------------------------------

    fn for_each_animal(
        &mut self,
        operation: &'static str,
        mut op: impl FnMut(&mut Animal, &mut Inventory) -> FarmResult<()>,
    ) -> BatchOutcome {
        let mut outcome = BatchOutcome::default();
        for entity in self.entities.values_mut() {
            if let Entity::Animal(animal) = entity {
                match op(animal, &mut self.inventory) {
                    Ok(()) => outcome.success(animal.id()),
                    Err(e) => outcome.failure(operation, animal.id(), animal.name(), e),
                }
            }
        }
        outcome
    }

    /// Apply `op` to every crop in one of `stages`.
    fn for_each_crop(
        &mut self,
        operation: &'static str,
        stages: &[CropStage],
        mut op: impl FnMut(&mut Crop, &mut Inventory) -> FarmResult<()>,
    ) -> BatchOutcome {
        let mut outcome = BatchOutcome::default();
        for entity in self.entities.values_mut() {
            let Entity::Crop(crop) = entity else { continue };
            if !stages.contains(&crop.stage()) {
                continue;
            }
            match op(crop, &mut self.inventory) {
                Ok(()) => outcome.success(crop.id()),
                Err(e) => outcome.failure(operation, crop.id(), crop.name(), e),
            }
        }
        outcome
    }

    pub fn feed_all_animals(&mut self, amount: i64) -> FarmResult<BatchOutcome> {
        ensure_positive(amount, "feed amount")?;
        let now = Utc::now();
        Ok(self.for_each_animal("feed_all", |animal, _| animal.feed(amount, now)))
    }

    pub fn produce_from_all_animals(&mut self) -> BatchOutcome {
        let now = Utc::now();
        self.for_each_animal("produce_all", |animal, inventory| {
            produce_into(animal, inventory, now).map(drop)
        })
    }

    /// Grow every crop that has not been harvested yet.
    pub fn grow_all_crops(&mut self, days: i64) -> FarmResult<BatchOutcome> {
        ensure_positive(days, "growth days")?;
        let now = Utc::now();
        Ok(self.for_each_crop(
            "grow_all",
            &[CropStage::Growing, CropStage::ReadyToHarvest],
            |crop, _| crop.grow(days, now),
        ))
    }

    pub fn water_all_crops(&mut self) -> BatchOutcome {
        let now = Utc::now();
        self.for_each_crop(
            "water_all",
            &[CropStage::Growing, CropStage::ReadyToHarvest],
            |crop, _| crop.water(now),
        )
    }

    pub fn harvest_all_mature_crops(&mut self) -> BatchOutcome {
        let now = Utc::now();
        self.for_each_crop("harvest_all", &[CropStage::ReadyToHarvest], |crop, inventory| {
            harvest_into(crop, inventory, now).map(drop)
        })
    }

    /// Advance one day.
    ///
    /// Watered crops grow a step; every animal loses `daily_food_decay` food
    /// and recovers a day; hungry animals are then fed `auto_feed_ration`.
    /// Feeding failures are recorded in the summary, never returned.
    pub fn simulate_day(&mut self) -> DaySummary {
        let now = Utc::now();
        let mut summary = DaySummary {
            day: self.current_day,
            ..DaySummary::default()
        };
        self.current_day = self.current_day.saturating_add(1);

        let decay = self.config.daily_food_decay;
        let ration = i64::from(self.config.auto_feed_ration);

        for entity in self.entities.values_mut() {
            match entity {
                Entity::Crop(crop) => {
                    if crop.day_tick(now) {
                        summary.crops_grown.push(crop.id());
                    }
                }
                Entity::Animal(animal) => {
                    animal.day_tick();
                    animal.decay_food(decay);
                    if animal.is_hungry() {
                        match animal.feed(ration, now) {
                            Ok(()) => summary.auto_fed.success(animal.id()),
                            Err(e) => summary.auto_fed.failure("auto_feed", animal.id(), animal.name(), e),
                        }
                    }
                }
            }
        }

        tracing::info!(
            day = summary.day,
            crops_grown = summary.crops_grown.len(),
            auto_fed = summary.auto_fed.succeeded.len(),
            failures = summary.auto_fed.failures.len(),
            "day simulated"
        );
        summary
    }

    // ---- reporting --------------------------------------------------------

    /// Read-only snapshot of the whole farm.
    pub fn report(&self) -> FarmReport {
        let recent = self.config.recent_actions_in_report;
        FarmReport {
            farm_name: self.config.farm_name.clone(),
            day: self.current_day,
            total_profit: self.total_profit,
            animals: self
                .animals()
                .map(|a| AnimalReport {
                    id: a.id(),
                    name: a.name().to_string(),
                    species: a.species(),
                    status: a.status(),
                    sound: a.make_sound().to_string(),
                    food_level: a.food_level(),
                    health: a.health(),
                    recent_actions: a.recent_actions(recent).to_vec(),
                })
                .collect(),
            crops: self
                .crops()
                .map(|c| CropReport {
                    id: c.id(),
                    name: c.name().to_string(),
                    kind: c.kind(),
                    status: c.status(),
                    stage: c.stage(),
                    growth: c.growth(),
                    maturity: c.maturity(),
                    recent_actions: c.recent_actions(recent).to_vec(),
                })
                .collect(),
            inventory: self.inventory.products().cloned().collect(),
            inventory_value: self.inventory.total_value(),
        }
    }
}

fn animal_in(entities: &mut BTreeMap<EntityId, Entity>, id: EntityId) -> FarmResult<&mut Animal> {
    match entities.get_mut(&id) {
        Some(Entity::Animal(animal)) => Ok(animal),
        Some(Entity::Crop(_)) => Err(FarmError::wrong_type(id, "an animal")),
        None => Err(FarmError::not_found(format!("animal {id}"))),
    }
}

fn crop_in(entities: &mut BTreeMap<EntityId, Entity>, id: EntityId) -> FarmResult<&mut Crop> {
    match entities.get_mut(&id) {
        Some(Entity::Crop(crop)) => Ok(crop),
        Some(Entity::Animal(_)) => Err(FarmError::wrong_type(id, "a crop")),
        None => Err(FarmError::not_found(format!("crop {id}"))),
    }
}

/// Produce into `inventory`. The animal is left untouched unless the goods fit.
fn produce_into(
    animal: &mut Animal,
    inventory: &mut Inventory,
    at: DateTime<Utc>,
) -> FarmResult<Product> {
    animal.check_can_produce()?;
    inventory.can_accept(&animal.pending_yield())?;
    let product = animal.produce(at)?;
    inventory.deposit(product.clone())?;
    Ok(product)
}

/// Harvest into `inventory`. The crop is left untouched unless the goods fit.
fn harvest_into(
    crop: &mut Crop,
    inventory: &mut Inventory,
    at: DateTime<Utc>,
) -> FarmResult<Product> {
    crop.check_can_harvest()?;
    inventory.can_accept(&crop.pending_harvest())?;
    let product = crop.harvest(at)?;
    inventory.deposit(product.clone())?;
    Ok(product)
}

#[cfg(test)]
mod tests {
    use super::*;
    use farmstead_core::ActionKind;

    fn farm() -> FarmManager {
        FarmManager::default()
    }

    #[test]
    fn new_farm_starts_on_day_one_with_no_profit() {
        let farm = farm();
        assert_eq!(farm.current_day(), 1);
        assert_eq!(farm.total_profit(), Money::ZERO);
        assert_eq!(farm.name(), "BroadLay Farm");
        assert!(farm.inventory().is_empty());
    }

    #[test]
    fn new_rejects_invalid_config() {
        let config = FarmConfig {
            auto_feed_ration: 0,
            ..FarmConfig::default()
        };
        assert!(matches!(FarmManager::new(config), Err(FarmError::InvalidArgument(_))));
    }

    #[test]
    fn added_entities_get_distinct_ids() {
        let mut farm = farm();
        let a = farm.add_animal(Species::Cow, "Bessie").unwrap();
        let b = farm.add_crop(CropKind::Wheat, "W1").unwrap();
        let c = farm.add_animal(Species::Chicken, "Henny").unwrap();
        assert_eq!(a.to_string(), "ENT0001");
        assert_eq!(b.to_string(), "ENT0002");
        assert_eq!(c.to_string(), "ENT0003");
        assert_eq!(farm.animals().count(), 2);
        assert_eq!(farm.crops().count(), 1);
    }

    #[test]
    fn blank_names_are_rejected() {
        let mut farm = farm();
        assert!(matches!(
            farm.add_animal(Species::Sheep, " "),
            Err(FarmError::InvalidArgument(_))
        ));
        assert_eq!(farm.entities().count(), 0);
    }

    #[test]
    fn add_entity_rejects_duplicate_ids_and_advances_generator() {
        let mut farm = farm();
        let id = EntityId::from_raw(10);
        farm.add_entity(Animal::new(id, Species::Cow, "Imported").unwrap())
            .unwrap();

        let dup = Crop::new(id, CropKind::Corn, "Clash").unwrap();
        assert!(matches!(farm.add_entity(dup), Err(FarmError::Conflict(_))));

        let next = farm.add_crop(CropKind::Corn, "Fresh").unwrap();
        assert_eq!(next, EntityId::from_raw(11));
    }

    #[test]
    fn operations_on_unknown_ids_are_not_found() {
        let mut farm = farm();
        let ghost = EntityId::from_raw(99);
        assert!(matches!(farm.feed_animal(ghost, 5), Err(FarmError::NotFound(_))));
        assert!(matches!(farm.grow_crop(ghost, 1), Err(FarmError::NotFound(_))));
        assert!(matches!(farm.harvest_crop(ghost), Err(FarmError::NotFound(_))));
        assert!(matches!(farm.produce_animal(ghost), Err(FarmError::NotFound(_))));
    }

    #[test]
    fn operations_on_the_wrong_kind_are_rejected() {
        let mut farm = farm();
        let cow = farm.add_animal(Species::Cow, "Bessie").unwrap();
        let wheat = farm.add_crop(CropKind::Wheat, "W1").unwrap();

        assert_eq!(
            farm.feed_animal(wheat, 5).unwrap_err(),
            FarmError::wrong_type(wheat, "an animal")
        );
        assert_eq!(
            farm.harvest_crop(cow).unwrap_err(),
            FarmError::wrong_type(cow, "a crop")
        );
        assert!(matches!(farm.water_crop(cow), Err(FarmError::WrongType { .. })));
    }

    #[test]
    fn resolve_accepts_ids_and_names() {
        let mut farm = farm();
        let cow = farm.add_animal(Species::Cow, "Bessie").unwrap();
        assert_eq!(farm.resolve("ENT0001").unwrap(), cow);
        assert_eq!(farm.resolve("bessie").unwrap(), cow);
        assert!(matches!(farm.resolve("ENT0002"), Err(FarmError::NotFound(_))));
        assert!(matches!(farm.resolve("Daisy"), Err(FarmError::NotFound(_))));
    }

    #[test]
    fn harvest_goes_to_inventory_and_sale_books_profit() {
        let mut farm = farm();
        let corn = farm.add_crop(CropKind::Corn, "North").unwrap();
        farm.grow_crop(corn, 10).unwrap();

        let cobs = farm.harvest_crop(corn).unwrap();
        assert_eq!(cobs.quantity(), 30);
        assert_eq!(farm.inventory().quantity_of(ProductKind::CornCobs), 30);

        let revenue = farm.sell_product("Corn Cobs", 10).unwrap();
        assert_eq!(revenue, Money::from_cents(25720));
        assert_eq!(farm.total_profit(), revenue);
        assert_eq!(farm.inventory().quantity_of(ProductKind::CornCobs), 20);
    }

    #[test]
    fn selling_the_last_units_drops_the_record() {
        let mut farm = farm();
        let dolly = farm.add_animal(Species::Sheep, "Dolly").unwrap();
        farm.produce_animal(dolly).unwrap();

        farm.sell_product("wool", 1).unwrap();
        assert!(farm.inventory().get(ProductKind::Wool).is_none());
        assert!(matches!(farm.sell_product("wool", 1), Err(FarmError::NotFound(_))));
    }

    #[test]
    fn failed_sales_leave_profit_alone() {
        let mut farm = farm();
        assert!(matches!(farm.sell_product("Milk", 1), Err(FarmError::NotFound(_))));
        assert!(matches!(farm.sell_product("Cheese", 1), Err(FarmError::NotFound(_))));

        let cow = farm.add_animal(Species::Cow, "Bessie").unwrap();
        farm.produce_animal(cow).unwrap();
        assert!(matches!(farm.sell_product("Milk", 0), Err(FarmError::InvalidArgument(_))));
        assert!(matches!(farm.sell_product("Milk", 11), Err(FarmError::InvalidArgument(_))));
        assert_eq!(farm.total_profit(), Money::ZERO);
        assert_eq!(farm.inventory().quantity_of(ProductKind::Milk), 10);
    }

    #[test]
    fn feed_all_rejects_bad_amount_up_front() {
        let mut farm = farm();
        farm.add_animal(Species::Cow, "Bessie").unwrap();
        assert!(matches!(farm.feed_all_animals(0), Err(FarmError::InvalidArgument(_))));
        assert!(farm.animals().all(|a| a.history().is_empty()));
    }

    #[test]
    fn produce_all_records_failures_without_aborting() {
        let mut farm = farm();
        let sick = farm
            .add_entity(Animal::with_levels(EntityId::from_raw(1), Species::Cow, "Sick", 80, 10).unwrap())
            .unwrap();
        let hen = farm.add_animal(Species::Chicken, "Henny").unwrap();
        let crop = farm.add_crop(CropKind::Wheat, "W1").unwrap();

        let outcome = farm.produce_from_all_animals();
        assert_eq!(outcome.succeeded, vec![hen]);
        assert_eq!(outcome.failures.len(), 1);
        assert_eq!(outcome.failures[0].id, sick);
        assert!(matches!(outcome.failures[0].error, FarmError::Unhealthy(_)));
        assert!(!outcome.succeeded.contains(&crop));
        assert_eq!(farm.inventory().quantity_of(ProductKind::Eggs), 5);
    }

    #[test]
    fn harvest_all_only_touches_mature_crops() {
        let mut farm = farm();
        let veg = farm.add_crop(CropKind::Vegetables, "Patch").unwrap();
        let corn = farm.add_crop(CropKind::Corn, "North").unwrap();
        farm.grow_all_crops(5).unwrap();

        let outcome = farm.harvest_all_mature_crops();
        assert_eq!(outcome.succeeded, vec![veg]);
        assert!(outcome.is_clean());
        assert_eq!(farm.inventory().quantity_of(ProductKind::Vegetables), 20);

        let grown = farm.grow_all_crops(5).unwrap();
        assert_eq!(grown.succeeded, vec![corn]);
        assert_eq!(farm.harvest_all_mature_crops().succeeded, vec![corn]);
        assert_eq!(farm.harvest_all_mature_crops().attempted(), 0);
    }

    #[test]
    fn watered_crops_grow_during_the_day() {
        let mut farm = farm();
        let wet = farm.add_crop(CropKind::Wheat, "Wet").unwrap();
        let dry = farm.add_crop(CropKind::Wheat, "Dry").unwrap();
        farm.water_crop(wet).unwrap();

        let summary = farm.simulate_day();
        assert_eq!(summary.day, 1);
        assert_eq!(summary.crops_grown, vec![wet]);
        assert_eq!(farm.current_day(), 2);
        assert_eq!(farm.entity(wet).and_then(Entity::as_crop).unwrap().growth(), 1);
        assert_eq!(farm.entity(dry).and_then(Entity::as_crop).unwrap().growth(), 0);
    }

    #[test]
    fn simulate_day_decays_food_and_feeds_the_hungry() {
        let mut farm = farm();
        let cow = farm.add_animal(Species::Cow, "Bessie").unwrap();

        // 50 -> 40 -> 30: not hungry yet.
        farm.simulate_day();
        farm.simulate_day();
        let bessie = farm.entity(cow).and_then(Entity::as_animal).unwrap();
        assert_eq!(bessie.food_level(), 30);
        assert!(bessie.history().is_empty());

        // 30 -> 20: hungry, fed 10 -> 30.
        let summary = farm.simulate_day();
        assert_eq!(summary.auto_fed.succeeded, vec![cow]);
        let bessie = farm.entity(cow).and_then(Entity::as_animal).unwrap();
        assert_eq!(bessie.food_level(), 30);
        assert_eq!(bessie.history().last().unwrap().kind(), ActionKind::Feed);
        assert_eq!(farm.current_day(), 4);
    }

    #[test]
    fn report_does_not_mutate() {
        let mut farm = farm();
        let cow = farm.add_animal(Species::Cow, "Bessie").unwrap();
        farm.feed_animal(cow, 20).unwrap();
        farm.produce_animal(cow).unwrap();

        let before = format!("{farm:?}");
        let report = farm.report();
        assert_eq!(format!("{farm:?}"), before);

        assert_eq!(report.day, 1);
        assert_eq!(report.animals.len(), 1);
        assert_eq!(report.animals[0].sound, "Moooo!");
        assert_eq!(report.animals[0].recent_actions.len(), 2);
        assert_eq!(report.inventory, vec![Product::new(ProductKind::Milk, 10)]);
        assert_eq!(report.inventory_value, Money::from_cents(60350));
    }

    #[test]
    fn report_limits_recent_actions() {
        let mut farm = farm();
        let cow = farm.add_animal(Species::Cow, "Bessie").unwrap();
        for _ in 0..5 {
            farm.feed_animal(cow, 1).unwrap();
        }
        let report = farm.report();
        assert_eq!(report.animals[0].recent_actions.len(), 3);

        let text = report.to_string();
        assert!(text.contains("FARM REPORT: BroadLay Farm"));
        assert!(text.contains("Sound: Moooo!"));
        assert!(text.contains("Total Profit: K0.00"));

        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["animals"][0]["species"], "cow");
        assert_eq!(json["total_profit"], "0.00");
    }

    #[test]
    fn report_json_renders_money_like_the_text_report() {
        let mut farm = farm();
        let cow = farm.add_animal(Species::Cow, "Bessie").unwrap();
        farm.feed_animal(cow, 20).unwrap();
        farm.produce_animal(cow).unwrap();
        farm.sell_product("Milk", 5).unwrap();

        let report = farm.report();
        assert!(report.to_string().contains("Total Profit: K301.75"));
        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["total_profit"], "301.75");
        assert_eq!(json["inventory_value"], "301.75");
    }

    #[test]
    fn harvest_that_would_overflow_inventory_leaves_the_crop_unharvested() {
        let mut farm = farm();
        let a = farm.add_crop(CropKind::Wheat, "A").unwrap();
        let b = farm.add_crop(CropKind::Wheat, "B").unwrap();
        farm.grow_crop(a, i64::from(u32::MAX)).unwrap();
        farm.grow_crop(b, i64::from(u32::MAX)).unwrap();

        assert_eq!(farm.harvest_crop(a).unwrap().quantity(), u32::MAX);
        let err = farm.harvest_crop(b).unwrap_err();
        assert!(matches!(err, FarmError::InvalidArgument(_)));

        let crop_b = farm.entity(b).and_then(Entity::as_crop).unwrap();
        assert!(!crop_b.is_harvested());
        assert!(crop_b.history().iter().all(|r| r.kind() != ActionKind::Harvest));
        assert_eq!(farm.inventory().quantity_of(ProductKind::Grain), u32::MAX);

        let outcome = farm.harvest_all_mature_crops();
        assert_eq!(outcome.failures.len(), 1);
        assert_eq!(outcome.failures[0].id, b);
        assert!(!farm.entity(b).and_then(Entity::as_crop).unwrap().is_harvested());

        farm.sell_product("Grain", 1).unwrap();
        assert_eq!(farm.harvest_crop(b).unwrap_err().kind(), "invalid_argument");
        farm.sell_product("Grain", i64::from(u32::MAX - 1)).unwrap();
        assert_eq!(farm.harvest_crop(b).unwrap().quantity(), u32::MAX);
    }

    #[test]
    fn produce_that_would_overflow_inventory_leaves_the_animal_alone() {
        let mut farm = farm();
        let dolly = farm.add_animal(Species::Sheep, "Dolly").unwrap();
        farm.inventory
            .deposit(Product::new(ProductKind::Wool, u32::MAX))
            .unwrap();

        assert!(matches!(farm.produce_animal(dolly), Err(FarmError::InvalidArgument(_))));
        let outcome = farm.produce_from_all_animals();
        assert_eq!(outcome.failures.len(), 1);

        let sheep = farm.entity(dolly).and_then(Entity::as_animal).unwrap();
        assert!(sheep.is_recovered());
        assert!(sheep.history().is_empty());
        assert_eq!(farm.inventory().quantity_of(ProductKind::Wool), u32::MAX);
    }

    #[test]
    fn exhausted_id_space_is_a_conflict_not_a_panic() {
        let mut farm = farm();
        let last = EntityId::from_raw(u32::MAX);
        farm.add_entity(Animal::new(last, Species::Cow, "Last").unwrap())
            .unwrap();

        assert!(matches!(farm.add_crop(CropKind::Corn, "Next"), Err(FarmError::Conflict(_))));
        assert!(matches!(
            farm.add_animal(Species::Chicken, "Next"),
            Err(FarmError::Conflict(_))
        ));
        assert_eq!(farm.entities().count(), 1);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 128,
                ..ProptestConfig::default()
            })]

            /// Property: total profit never decreases, whatever is sold.
            #[test]
            fn total_profit_is_monotonic(
                sales in prop::collection::vec((0usize..6, -5i64..40), 1..30)
            ) {
                let mut farm = FarmManager::default();
                let cow = farm.add_animal(Species::Cow, "Bessie").unwrap();
                let hen = farm.add_animal(Species::Chicken, "Henny").unwrap();
                let wheat = farm.add_crop(CropKind::Wheat, "W1").unwrap();
                farm.produce_animal(cow).unwrap();
                farm.produce_animal(hen).unwrap();
                farm.grow_crop(wheat, 7).unwrap();
                farm.harvest_crop(wheat).unwrap();

                let mut last = farm.total_profit();
                for (k, qty) in sales {
                    let _ = farm.sell_product(ProductKind::ALL[k].display_name(), qty);
                    prop_assert!(farm.total_profit() >= last);
                    last = farm.total_profit();
                }
            }
        }
    }
}
