//! Identifier sources used when the store creates a record.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use crate::domain::ExpenseId;

/// Produces candidate identifiers for new expenses.
///
/// Sources are not required to know about existing records; the reducer
/// redraws whenever a candidate is already taken.
pub trait IdSource: Send + Sync {
    fn next_id(&self) -> ExpenseId;
}

/// Random UUID v4 identifiers.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIds;

impl IdSource for UuidIds {
    fn next_id(&self) -> ExpenseId {
        ExpenseId::random()
    }
}

/// Monotonic `e<N>` identifiers, matching the shape of the demo seed.
#[derive(Debug)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl SequentialIds {
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl IdSource for SequentialIds {
    fn next_id(&self) -> ExpenseId {
        let value = self.next.fetch_add(1, Ordering::Relaxed);
        ExpenseId::new(format!("e{value}"))
    }
}

/// Configurable choice of identifier source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdScheme {
    #[default]
    Uuid,
    Sequential,
}

impl IdScheme {
    pub fn source(self) -> Box<dyn IdSource> {
        match self {
            IdScheme::Uuid => Box::new(UuidIds),
            IdScheme::Sequential => Box::new(SequentialIds::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_ids_are_monotonic() {
        let ids = SequentialIds::starting_at(7);
        assert_eq!(ids.next_id().as_str(), "e7");
        assert_eq!(ids.next_id().as_str(), "e8");
    }

    #[test]
    fn scheme_deserializes_from_lowercase() {
        let scheme: IdScheme = serde_json::from_str("\"sequential\"").unwrap();
        assert_eq!(scheme, IdScheme::Sequential);
    }
}
