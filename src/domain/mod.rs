//! Expense domain models shared by the form controller and the store.

pub mod common;
pub mod expense;

pub use common::{Displayable, Identifiable};
pub use expense::{Expense, ExpenseData, ExpenseId, ExpensePatch, DATE_FORMAT};
