//! Entity trait: identity + continuity across state changes.

use chrono::{DateTime, Utc};

use crate::action::{ActionKind, ActionRecord};
use crate::error::{FarmError, FarmResult};
use crate::id::EntityId;

/// Common interface of every farm entity (animals and crops).
pub trait FarmEntity {
    /// Returns the entity identifier.
    fn id(&self) -> EntityId;

    fn name(&self) -> &str;

    /// Full action history, oldest first.
    fn history(&self) -> &[ActionRecord];

    /// One-line human readable status.
    fn status(&self) -> String;

    /// The last `n` actions, oldest first.
    fn recent_actions(&self, n: usize) -> &[ActionRecord] {
        let history = self.history();
        &history[history.len().saturating_sub(n)..]
    }
}

/// Identity, name and action history shared by every entity variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityMeta {
    id: EntityId,
    name: String,
    history: Vec<ActionRecord>,
}

impl EntityMeta {
    pub fn new(id: EntityId, name: impl Into<String>) -> FarmResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(FarmError::invalid_argument("name cannot be empty"));
        }
        Ok(Self {
            id,
            name: name.trim().to_string(),
            history: Vec::new(),
        })
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn history(&self) -> &[ActionRecord] {
        &self.history
    }

    /// Append a record. The history is append-only; there is no removal.
    pub fn record(&mut self, kind: ActionKind, quantity: u32, at: DateTime<Utc>) {
        tracing::debug!(entity_id = %self.id, action = %kind, quantity, "action recorded");
        self.history.push(ActionRecord::new(kind, quantity, at));
    }
}
