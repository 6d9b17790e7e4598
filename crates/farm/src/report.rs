//! Read-only farm snapshot, rendered as text or JSON.

use serde::Serialize;

use farmstead_core::{ActionRecord, EntityId, Money};
use farmstead_crops::{CropKind, CropStage};
use farmstead_livestock::Species;
use farmstead_products::Product;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnimalReport {
    pub id: EntityId,
    pub name: String,
    pub species: Species,
    pub status: String,
    pub sound: String,
    pub food_level: u32,
    pub health: u32,
    pub recent_actions: Vec<ActionRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CropReport {
    pub id: EntityId,
    pub name: String,
    pub kind: CropKind,
    pub status: String,
    pub stage: CropStage,
    pub growth: u32,
    pub maturity: u32,
    pub recent_actions: Vec<ActionRecord>,
}

/// Snapshot produced by [`crate::FarmManager::report`].
///
/// Money fields serialize as two-decimal strings (`"301.75"`), matching the text form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FarmReport {
    pub farm_name: String,
    pub day: u32,
    #[serde(serialize_with = "money_as_decimal")]
    pub total_profit: Money,
    pub animals: Vec<AnimalReport>,
    pub crops: Vec<CropReport>,
    pub inventory: Vec<Product>,
    #[serde(serialize_with = "money_as_decimal")]
    pub inventory_value: Money,
}

fn money_as_decimal<S: serde::Serializer>(money: &Money, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(money)
}

impl FarmReport {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn write_actions(f: &mut core::fmt::Formatter<'_>, actions: &[ActionRecord]) -> core::fmt::Result {
    if actions.is_empty() {
        return writeln!(f, "    Recent Actions: none");
    }
    writeln!(f, "    Recent Actions:")?;
    for action in actions {
        writeln!(f, "      * {action}")?;
    }
    Ok(())
}

impl core::fmt::Display for FarmReport {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "========== FARM REPORT: {} ==========", self.farm_name)?;
        writeln!(f, "Day: {}", self.day)?;
        writeln!(f, "Total Profit: K{}", self.total_profit)?;

        writeln!(f, "\nAnimals:")?;
        if self.animals.is_empty() {
            writeln!(f, "  (none)")?;
        }
        for animal in &self.animals {
            writeln!(f, "  - {}", animal.status)?;
            writeln!(f, "    Sound: {}", animal.sound)?;
            write_actions(f, &animal.recent_actions)?;
        }

        writeln!(f, "\nCrops:")?;
        if self.crops.is_empty() {
            writeln!(f, "  (none)")?;
        }
        for crop in &self.crops {
            writeln!(f, "  - {}", crop.status)?;
            write_actions(f, &crop.recent_actions)?;
        }

        writeln!(f, "\nInventory:")?;
        if self.inventory.is_empty() {
            writeln!(f, "  (empty)")?;
        }
        for product in &self.inventory {
            writeln!(f, "  - {product}")?;
        }
        write!(f, "Inventory value: K{}", self.inventory_value)
    }
}
