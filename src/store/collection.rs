use std::sync::Arc;

use crate::domain::{Expense, ExpenseId, Identifiable};

/// Immutable, cheaply clonable snapshot of the expense list.
///
/// The store never edits a snapshot in place: every change builds a new
/// collection, so a clone handed to a reader keeps its contents even after
/// later dispatches.
#[derive(Debug, Clone, Default)]
pub struct ExpenseCollection {
    items: Arc<Vec<Expense>>,
}

impl ExpenseCollection {
    pub fn new(items: Vec<Expense>) -> Self {
        Self {
            items: Arc::new(items),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Expense> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Expense] {
        self.items.as_slice()
    }

    pub fn first(&self) -> Option<&Expense> {
        self.items.first()
    }

    pub fn get(&self, id: &ExpenseId) -> Option<&Expense> {
        self.items.iter().find(|expense| expense.id() == id)
    }

    pub fn position(&self, id: &ExpenseId) -> Option<usize> {
        self.items.iter().position(|expense| expense.id() == id)
    }

    pub fn contains(&self, id: &ExpenseId) -> bool {
        self.position(id).is_some()
    }

    /// Sum of all amounts in the snapshot.
    pub fn total(&self) -> f64 {
        self.items.iter().map(|expense| expense.amount).sum()
    }

    /// True when both values point at the same underlying list.
    pub fn shares_storage_with(&self, other: &ExpenseCollection) -> bool {
        Arc::ptr_eq(&self.items, &other.items)
    }
}

impl PartialEq for ExpenseCollection {
    fn eq(&self, other: &Self) -> bool {
        self.shares_storage_with(other) || self.items == other.items
    }
}

impl From<Vec<Expense>> for ExpenseCollection {
    fn from(items: Vec<Expense>) -> Self {
        Self::new(items)
    }
}

impl FromIterator<Expense> for ExpenseCollection {
    fn from_iter<I: IntoIterator<Item = Expense>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ExpenseCollection {
    type Item = &'a Expense;
    type IntoIter = std::slice::Iter<'a, Expense>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
