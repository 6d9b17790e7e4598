use core::str::FromStr;
use serde::{Deserialize, Serialize};

use farmstead_core::FarmError;
use farmstead_products::ProductKind;

/// Per-kind constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropProfile {
    /// Growth needed before harvest is allowed.
    pub maturity: u32,
    pub product: ProductKind,
    /// Harvest yield is `growth * units_per_growth`.
    pub units_per_growth: u32,
}

const WHEAT: CropProfile = CropProfile {
    maturity: 7,
    product: ProductKind::Grain,
    units_per_growth: 5,
};

const CORN: CropProfile = CropProfile {
    maturity: 10,
    product: ProductKind::CornCobs,
    units_per_growth: 3,
};

const VEGETABLES: CropProfile = CropProfile {
    maturity: 5,
    product: ProductKind::Vegetables,
    units_per_growth: 4,
};

/// The closed set of crop kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CropKind {
    Wheat,
    Corn,
    Vegetables,
}

impl CropKind {
    pub const ALL: [CropKind; 3] = [CropKind::Wheat, CropKind::Corn, CropKind::Vegetables];

    pub fn profile(&self) -> &'static CropProfile {
        match self {
            CropKind::Wheat => &WHEAT,
            CropKind::Corn => &CORN,
            CropKind::Vegetables => &VEGETABLES,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CropKind::Wheat => "Wheat",
            CropKind::Corn => "Corn",
            CropKind::Vegetables => "Vegetables",
        }
    }
}

impl core::fmt::Display for CropKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CropKind {
    type Err = FarmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        // "vegetable" is accepted as well as the plural.
        if s.eq_ignore_ascii_case("vegetable") {
            return Ok(CropKind::Vegetables);
        }
        CropKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| FarmError::invalid_argument(format!("unknown crop type {s:?}")))
    }
}
