use crate::domain::{Expense, ExpenseData, ExpenseId, ExpensePatch};

use super::collection::ExpenseCollection;
use super::ids::IdSource;

/// Every change the store understands.
#[derive(Debug, Clone, PartialEq)]
pub enum ExpenseAction {
    Add(ExpenseData),
    Update { id: ExpenseId, patch: ExpensePatch },
    Delete(ExpenseId),
}

impl ExpenseAction {
    /// Identifier the action targets, if it refers to an existing record.
    pub fn target(&self) -> Option<&ExpenseId> {
        match self {
            ExpenseAction::Add(_) => None,
            ExpenseAction::Update { id, .. } | ExpenseAction::Delete(id) => Some(id),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ExpenseAction::Add(_) => "add",
            ExpenseAction::Update { .. } => "update",
            ExpenseAction::Delete(_) => "delete",
        }
    }
}

/// Derives the next collection from `state` and `action`.
///
/// `state` is left untouched. Update and delete of an unknown id hand back
/// `state` itself.
pub fn reduce(
    state: &ExpenseCollection,
    action: ExpenseAction,
    ids: &dyn IdSource,
) -> ExpenseCollection {
    match action {
        ExpenseAction::Add(data) => {
            let id = fresh_id(state, ids);
            prepend(state, Expense::new(id, data))
        }
        ExpenseAction::Update { id, patch } => match state.position(&id) {
            Some(index) => state
                .iter()
                .enumerate()
                .map(|(i, expense)| {
                    if i == index {
                        expense.merged(&patch)
                    } else {
                        expense.clone()
                    }
                })
                .collect(),
            None => state.clone(),
        },
        ExpenseAction::Delete(id) => {
            if state.contains(&id) {
                state
                    .iter()
                    .filter(|expense| expense.id != id)
                    .cloned()
                    .collect()
            } else {
                state.clone()
            }
        }
    }
}

/// New collection with `expense` at index 0 followed by `state`.
pub(crate) fn prepend(state: &ExpenseCollection, expense: Expense) -> ExpenseCollection {
    let mut items = Vec::with_capacity(state.len() + 1);
    items.push(expense);
    items.extend(state.iter().cloned());
    ExpenseCollection::new(items)
}

/// Draws ids from `ids` until one is not used in `state`.
pub(crate) fn fresh_id(state: &ExpenseCollection, ids: &dyn IdSource) -> ExpenseId {
    loop {
        let candidate = ids.next_id();
        if !state.contains(&candidate) {
            return candidate;
        }
        tracing::debug!(id = %candidate, "generated id already in use; drawing another");
    }
}
