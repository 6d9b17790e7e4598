//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::{FarmError, FarmResult};

const ENTITY_PREFIX: &str = "ENT";

/// Identifier of a farm entity (animal or crop).
///
/// Rendered as `ENT0001`, `ENT0002`, ... Ids are handed out by an
/// [`IdGenerator`] and are never reused within that generator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(u32);

impl EntityId {
    /// Wrap a raw sequence number. Prefer [`IdGenerator::next_id`] outside tests.
    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u32 {
        self.0
    }
}

impl core::fmt::Display for EntityId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{ENTITY_PREFIX}{:04}", self.0)
    }
}

impl FromStr for EntityId {
    type Err = FarmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let digits = s
            .get(..ENTITY_PREFIX.len())
            .filter(|prefix| prefix.eq_ignore_ascii_case(ENTITY_PREFIX))
            .map(|_| &s[ENTITY_PREFIX.len()..])
            .ok_or_else(|| FarmError::invalid_argument(format!("EntityId: bad prefix in {s:?}")))?;
        let raw = digits
            .parse::<u32>()
            .map_err(|e| FarmError::invalid_argument(format!("EntityId: {e}")))?;
        Ok(Self(raw))
    }
}

/// Sequential id source owned by whoever creates entities.
///
/// Each generator starts from zero; independent farms never observe each
/// other's ids.
#[derive(Debug, Default, Clone)]
pub struct IdGenerator {
    last: u32,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next unused id, or `Conflict` once `u32::MAX` has been issued.
    pub fn next_id(&mut self) -> FarmResult<EntityId> {
        self.last = self
            .last
            .checked_add(1)
            .ok_or_else(|| FarmError::conflict("id space exhausted"))?;
        Ok(EntityId(self.last))
    }

    /// Make sure ids issued from now on do not collide with `id`.
    ///
    /// Used when an externally constructed entity is registered.
    pub fn observe(&mut self, id: EntityId) {
        self.last = self.last.max(id.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generator_issues_sequential_unique_ids() {
        let mut ids = IdGenerator::new();
        let a = ids.next_id().unwrap();
        let b = ids.next_id().unwrap();
        assert_ne!(a, b);
        assert_eq!(a.to_string(), "ENT0001");
        assert_eq!(b.to_string(), "ENT0002");
    }

    #[test]
    fn observe_skips_past_foreign_ids() {
        let mut ids = IdGenerator::new();
        ids.observe(EntityId::from_raw(41));
        assert_eq!(ids.next_id().unwrap(), EntityId::from_raw(42));

        ids.observe(EntityId::from_raw(3));
        assert_eq!(ids.next_id().unwrap(), EntityId::from_raw(43));
    }

    #[test]
    fn exhausted_generator_reports_conflict() {
        let mut ids = IdGenerator::new();
        ids.observe(EntityId::from_raw(u32::MAX));
        assert!(matches!(ids.next_id(), Err(FarmError::Conflict(_))));
        // Still exhausted; nothing wrapped around to ENT0000.
        assert!(matches!(ids.next_id(), Err(FarmError::Conflict(_))));
    }

    #[test]
    fn parses_display_form_case_insensitively() {
        assert_eq!("ENT0012".parse::<EntityId>().unwrap(), EntityId::from_raw(12));
        assert_eq!(" ent7 ".parse::<EntityId>().unwrap(), EntityId::from_raw(7));
        assert!("Bessie".parse::<EntityId>().is_err());
        assert!("ENTx".parse::<EntityId>().is_err());
    }
}
