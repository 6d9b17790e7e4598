//! Action records: the append-only history attached to every farm entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What kind of operation an [`ActionRecord`] captures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Feed,
    Produce,
    Water,
    Grow,
    Harvest,
}

impl ActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::Feed => "Feed",
            ActionKind::Produce => "Produce",
            ActionKind::Water => "Water",
            ActionKind::Grow => "Grow",
            ActionKind::Harvest => "Harvest",
        }
    }
}

impl core::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable record of one past operation.
///
/// Once appended to an entity's history a record is never mutated or removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    kind: ActionKind,
    occurred_at: DateTime<Utc>,
    quantity: u32,
}

impl ActionRecord {
    pub fn new(kind: ActionKind, quantity: u32, occurred_at: DateTime<Utc>) -> Self {
        Self {
            kind,
            occurred_at,
            quantity,
        }
    }

    pub fn kind(&self) -> ActionKind {
        self.kind
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}

impl core::fmt::Display for ActionRecord {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "[{}] {} - Quantity: {}",
            self.occurred_at.format("%Y-%m-%d %H:%M"),
            self.kind,
            self.quantity
        )
    }
}
