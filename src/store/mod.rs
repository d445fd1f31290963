//! In-memory expense store driven by a pure reducer.

pub mod collection;
pub mod ids;
pub mod reducer;
pub mod seed;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::domain::{Expense, ExpenseData, ExpenseId, ExpensePatch};
use crate::errors::{ExpenseError, Result};

pub use collection::ExpenseCollection;
pub use ids::{IdScheme, IdSource, SequentialIds, UuidIds};
pub use reducer::{reduce, ExpenseAction};

/// How update and delete treat an id with no matching record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownIdPolicy {
    /// Leave the collection unchanged and report success.
    #[default]
    Ignore,
    /// Leave the collection unchanged and return `ExpenseError::ExpenseNotFound`.
    Reject,
}

/// Owns the current expense collection and applies actions to it.
pub struct ExpenseStore {
    state: ExpenseCollection,
    ids: Box<dyn IdSource>,
    unknown_ids: UnknownIdPolicy,
}

impl ExpenseStore {
    /// Creates a store from a seed list. Seeds must carry distinct ids.
    pub fn new(seed: Vec<Expense>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(seed.len());
        for expense in &seed {
            if !seen.insert(&expense.id) {
                return Err(ExpenseError::DuplicateId(expense.id.clone()));
            }
        }
        Ok(Self {
            state: ExpenseCollection::new(seed),
            ids: Box::new(UuidIds),
            unknown_ids: UnknownIdPolicy::default(),
        })
    }

    pub fn empty() -> Self {
        Self {
            state: ExpenseCollection::empty(),
            ids: Box::new(UuidIds),
            unknown_ids: UnknownIdPolicy::default(),
        }
    }

    /// Builds a store with the seed, id scheme and policy named by `config`.
    pub fn from_config(config: &Config) -> Result<Self> {
        let seed = if config.seed_demo_expenses {
            seed::demo_expenses()
        } else {
            Vec::new()
        };
        Ok(Self::new(seed)?
            .with_id_source(config.id_scheme.source())
            .with_unknown_id_policy(config.unknown_ids))
    }

    pub fn with_id_source(mut self, ids: Box<dyn IdSource>) -> Self {
        self.ids = ids;
        self
    }

    pub fn with_unknown_id_policy(mut self, policy: UnknownIdPolicy) -> Self {
        self.unknown_ids = policy;
        self
    }

    /// Current snapshot. Later dispatches do not alter the returned value.
    pub fn expenses(&self) -> ExpenseCollection {
        self.state.clone()
    }

    pub fn get(&self, id: &ExpenseId) -> Option<&Expense> {
        self.state.get(id)
    }

    pub fn len(&self) -> usize {
        self.state.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Applies `action`, replacing the current collection with the result.
    pub fn dispatch(&mut self, action: ExpenseAction) -> Result<()> {
        if let Some(id) = action.target() {
            if !self.state.contains(id) {
                match self.unknown_ids {
                    UnknownIdPolicy::Ignore => {
                        tracing::debug!(
                            action = action.kind(),
                            id = %id,
                            "no expense with id; ignoring"
                        );
                        return Ok(());
                    }
                    UnknownIdPolicy::Reject => {
                        tracing::warn!(
                            action = action.kind(),
                            id = %id,
                            "rejecting action for unknown expense"
                        );
                        return Err(ExpenseError::ExpenseNotFound(id.clone()));
                    }
                }
            }
        }
        tracing::debug!(action = action.kind(), "dispatching expense action");
        self.state = reduce(&self.state, action, self.ids.as_ref());
        Ok(())
    }

    /// Prepends a new expense and returns the id it was stored under.
    ///
    /// Same result as dispatching `ExpenseAction::Add`, with the id drawn
    /// here so the caller gets exactly the one inserted.
    pub fn add(&mut self, data: ExpenseData) -> ExpenseId {
        let id = reducer::fresh_id(&self.state, self.ids.as_ref());
        self.state = reducer::prepend(&self.state, Expense::new(id.clone(), data));
        tracing::info!(id = %id, "expense added");
        id
    }

    pub fn update(&mut self, id: &ExpenseId, patch: ExpensePatch) -> Result<()> {
        self.dispatch(ExpenseAction::Update {
            id: id.clone(),
            patch,
        })
    }

    pub fn delete(&mut self, id: &ExpenseId) -> Result<()> {
        self.dispatch(ExpenseAction::Delete(id.clone()))
    }
}

impl Default for ExpenseStore {
    fn default() -> Self {
        Self::empty()
    }
}
