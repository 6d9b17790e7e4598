//! Farm configuration (defaults + environment overrides).

use serde::{Deserialize, Serialize};

use farmstead_core::{FarmError, FarmResult};

pub const ENV_NAME: &str = "FARMSTEAD_NAME";
pub const ENV_AUTO_FEED_RATION: &str = "FARMSTEAD_AUTO_FEED_RATION";
pub const ENV_DAILY_FOOD_DECAY: &str = "FARMSTEAD_DAILY_FOOD_DECAY";
pub const ENV_REPORT_RECENT_ACTIONS: &str = "FARMSTEAD_REPORT_RECENT_ACTIONS";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FarmConfig {
    pub farm_name: String,
    /// Units given to each hungry animal during `simulate_day`.
    pub auto_feed_ration: u32,
    /// Food every animal loses per simulated day.
    pub daily_food_decay: u32,
    /// How many of each entity's latest actions a report shows.
    pub recent_actions_in_report: usize,
}

impl Default for FarmConfig {
    fn default() -> Self {
        Self {
            farm_name: "BroadLay Farm".to_string(),
            auto_feed_ration: 10,
            daily_food_decay: 10,
            recent_actions_in_report: 3,
        }
    }
}

impl FarmConfig {
    /// Defaults overridden by `FARMSTEAD_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    ///
    /// Malformed values are ignored with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(name) = lookup(ENV_NAME).filter(|n| !n.trim().is_empty()) {
            config.farm_name = name.trim().to_string();
        }
        if let Some(v) = parse_var(&lookup, ENV_AUTO_FEED_RATION) {
            config.auto_feed_ration = v;
        }
        if let Some(v) = parse_var(&lookup, ENV_DAILY_FOOD_DECAY) {
            config.daily_food_decay = v;
        }
        if let Some(v) = parse_var(&lookup, ENV_REPORT_RECENT_ACTIONS) {
            config.recent_actions_in_report = v;
        }
        config
    }

    pub fn validate(&self) -> FarmResult<()> {
        if self.farm_name.trim().is_empty() {
            return Err(FarmError::invalid_argument("farm name cannot be empty"));
        }
        if self.auto_feed_ration == 0 {
            return Err(FarmError::invalid_argument("auto-feed ration must be greater than 0"));
        }
        Ok(())
    }
}

fn parse_var<T: core::str::FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse::<T>() {
        Ok(v) => Some(v),
        Err(_) => {
            tracing::warn!(key, value = %raw, "ignoring malformed configuration value; using default");
            None
        }
    }
}
