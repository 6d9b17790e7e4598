//! Results of batch operations, which record per-entity failures instead of
//! aborting.

use serde::Serialize;

use farmstead_core::{EntityId, FarmError};

/// One entity that a batch operation could not process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchFailure {
    pub id: EntityId,
    pub name: String,
    #[serde(serialize_with = "error_as_string")]
    pub error: FarmError,
}

fn error_as_string<S: serde::Serializer>(error: &FarmError, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(error)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchOutcome {
    pub succeeded: Vec<EntityId>,
    pub failures: Vec<BatchFailure>,
}

impl BatchOutcome {
    pub fn success(&mut self, id: EntityId) {
        self.succeeded.push(id);
    }

    /// Record (and log) a failure; the batch carries on.
    pub fn failure(&mut self, operation: &'static str, id: EntityId, name: &str, error: FarmError) {
        tracing::warn!(operation, entity_id = %id, name, error = %error, "batch item failed");
        self.failures.push(BatchFailure {
            id,
            name: name.to_string(),
            error,
        });
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Entities the batch touched, successfully or not.
    pub fn attempted(&self) -> usize {
        self.succeeded.len() + self.failures.len()
    }
}

/// What happened during one `simulate_day`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DaySummary {
    /// The day that was simulated.
    pub day: u32,
    pub crops_grown: Vec<EntityId>,
    pub auto_fed: BatchOutcome,
}
