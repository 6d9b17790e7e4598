use core::str::FromStr;
use serde::{Deserialize, Serialize};

use farmstead_core::FarmError;
use farmstead_products::ProductKind;

/// How many units one successful `produce` yields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YieldFormula {
    /// `max(floor, health / divisor)`.
    HealthRatio { divisor: u32, floor: u32 },
    /// Same amount every time.
    Fixed(u32),
}

impl YieldFormula {
    pub fn units(&self, health: u32) -> u32 {
        match *self {
            YieldFormula::HealthRatio { divisor, floor } => (health / divisor).max(floor),
            YieldFormula::Fixed(n) => n,
        }
    }
}

/// Per-species constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeciesProfile {
    pub sound: &'static str,
    /// Producing requires `health >= min_health`.
    pub min_health: u32,
    /// Producing requires `food_level >= min_food`.
    pub min_food: u32,
    pub product: ProductKind,
    pub yield_formula: YieldFormula,
    /// Day ticks before the animal can produce again, if it needs to recover.
    pub regrowth_days: Option<u32>,
}

const COW: SpeciesProfile = SpeciesProfile {
    sound: "Moooo!",
    min_health: 30,
    min_food: 20,
    product: ProductKind::Milk,
    yield_formula: YieldFormula::HealthRatio { divisor: 10, floor: 0 },
    regrowth_days: None,
};

const CHICKEN: SpeciesProfile = SpeciesProfile {
    sound: "Cluck cluck!",
    min_health: 30,
    min_food: 15,
    product: ProductKind::Eggs,
    yield_formula: YieldFormula::HealthRatio { divisor: 20, floor: 1 },
    regrowth_days: None,
};

const SHEEP: SpeciesProfile = SpeciesProfile {
    sound: "Baaaa!",
    min_health: 30,
    min_food: 30,
    product: ProductKind::Wool,
    yield_formula: YieldFormula::Fixed(1),
    regrowth_days: Some(3),
};

/// The closed set of animal species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Cow,
    Chicken,
    Sheep,
}

impl Species {
    pub const ALL: [Species; 3] = [Species::Cow, Species::Chicken, Species::Sheep];

    pub fn profile(&self) -> &'static SpeciesProfile {
        match self {
            Species::Cow => &COW,
            Species::Chicken => &CHICKEN,
            Species::Sheep => &SHEEP,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Species::Cow => "Cow",
            Species::Chicken => "Chicken",
            Species::Sheep => "Sheep",
        }
    }
}

impl core::fmt::Display for Species {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Species {
    type Err = FarmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Species::ALL
            .into_iter()
            .find(|species| species.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| FarmError::invalid_argument(format!("unknown animal type {:?}", s.trim())))
    }
}
