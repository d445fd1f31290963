#![doc(test(attr(deny(warnings))))]

//! Expense Core provides the expense entry form controller and the in-memory
//! expense store behind a small expense-tracking screen, plus a demo shell
//! that drives both.
//!
//! ```
//! use expense_core::form::{ExpenseForm, FormField, SubmitOutcome};
//! use expense_core::store::ExpenseStore;
//!
//! let mut store = ExpenseStore::empty();
//! let mut form = ExpenseForm::new();
//! form.on_field_change(FormField::Amount, "45");
//! form.on_field_change(FormField::Date, "2025-04-05");
//! form.on_field_change(FormField::Description, "Coffee");
//!
//! let mut submitted = None;
//! assert_eq!(form.submit(|data| submitted = Some(data)), SubmitOutcome::Submitted);
//! if let Some(data) = submitted {
//!     store.add(data);
//! }
//! assert_eq!(store.len(), 1);
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod form;
pub mod store;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Expense Core tracing initialized.");
    });
}
