//! Expense entry form: raw field state plus submit-time validation.
//!
//! Fields hold exactly what the user typed. Editing a field marks it valid
//! again without re-checking it, so typing after a failed submit clears that
//! field's error indicator. All validation happens in [`ExpenseForm::submit`].

pub mod validation;

use std::fmt;

use crate::domain::{Expense, ExpenseData, ExpenseId, DATE_FORMAT};

pub use validation::{ValidationError, DATE_INPUT_MAX_LEN, MAX_AMOUNT};

/// Message shown while any field is flagged invalid.
pub const INVALID_FORM_MESSAGE: &str = "Please check your input values.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Amount,
    Date,
    Description,
}

impl FormField {
    pub const ALL: [FormField; 3] = [FormField::Amount, FormField::Date, FormField::Description];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Amount => "Amount",
            FormField::Date => "Date",
            FormField::Description => "Description",
        }
    }

    /// Parses a field key such as `amount` (case-insensitive).
    pub fn from_key(key: &str) -> Option<FormField> {
        match key.trim().to_ascii_lowercase().as_str() {
            "amount" => Some(FormField::Amount),
            "date" => Some(FormField::Date),
            "description" | "desc" => Some(FormField::Description),
            _ => None,
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldState {
    pub raw_value: String,
    pub is_valid: bool,
    error: Option<ValidationError>,
}

impl FieldState {
    fn new(raw_value: impl Into<String>) -> Self {
        Self {
            raw_value: raw_value.into(),
            is_valid: true,
            error: None,
        }
    }

    /// Reason the last submit rejected this field, if it did.
    pub fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }

    fn mark<T>(&mut self, result: &Result<T, ValidationError>) {
        self.error = result.as_ref().err().cloned();
        self.is_valid = self.error.is_none();
    }
}

/// Result of [`ExpenseForm::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Submitted,
    Invalid { fields: Vec<FormField> },
}

impl SubmitOutcome {
    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmitOutcome::Submitted)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseForm {
    amount: FieldState,
    date: FieldState,
    description: FieldState,
    editing: Option<ExpenseId>,
}

impl Default for ExpenseForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpenseForm {
    /// Blank form for a new expense.
    pub fn new() -> Self {
        Self {
            amount: FieldState::new(""),
            date: FieldState::new(""),
            description: FieldState::new(""),
            editing: None,
        }
    }

    /// Form pre-populated from an existing expense.
    pub fn for_edit(expense: &Expense) -> Self {
        Self {
            amount: FieldState::new(expense.amount.to_string()),
            date: FieldState::new(expense.date.format(DATE_FORMAT).to_string()),
            description: FieldState::new(expense.description.clone()),
            editing: Some(expense.id.clone()),
        }
    }

    /// Id of the expense being edited, `None` for a new expense.
    pub fn editing(&self) -> Option<&ExpenseId> {
        self.editing.as_ref()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.editing.is_some() {
            "Update"
        } else {
            "Add"
        }
    }

    pub fn field(&self, field: FormField) -> &FieldState {
        match field {
            FormField::Amount => &self.amount,
            FormField::Date => &self.date,
            FormField::Description => &self.description,
        }
    }

    fn field_mut(&mut self, field: FormField) -> &mut FieldState {
        match field {
            FormField::Amount => &mut self.amount,
            FormField::Date => &mut self.date,
            FormField::Description => &mut self.description,
        }
    }

    /// Stores the new text and optimistically marks the field valid.
    pub fn on_field_change(&mut self, field: FormField, text: impl Into<String>) {
        let state = self.field_mut(field);
        state.raw_value = text.into();
        state.is_valid = true;
        state.error = None;
    }

    /// True while any field carries a failed validation flag.
    pub fn is_invalid(&self) -> bool {
        FormField::ALL
            .iter()
            .any(|field| !self.field(*field).is_valid)
    }

    pub fn error_message(&self) -> Option<&'static str> {
        self.is_invalid().then_some(INVALID_FORM_MESSAGE)
    }

    /// Fields currently flagged invalid, in display order.
    pub fn invalid_fields(&self) -> Vec<FormField> {
        FormField::ALL
            .into_iter()
            .filter(|field| !self.field(*field).is_valid)
            .collect()
    }

    /// Validates all fields and hands the typed payload to `on_submit` when
    /// every field passes. Otherwise flags the failing fields and keeps every
    /// raw value.
    pub fn submit<F>(&mut self, on_submit: F) -> SubmitOutcome
    where
        F: FnOnce(ExpenseData),
    {
        let amount = validation::parse_amount(&self.amount.raw_value);
        let date = validation::parse_date(&self.date.raw_value);
        let description = validation::parse_description(&self.description.raw_value);

        match (amount, date, description) {
            (Ok(amount), Ok(date), Ok(description)) => {
                on_submit(ExpenseData {
                    description,
                    amount,
                    date,
                });
                SubmitOutcome::Submitted
            }
            (amount, date, description) => {
                self.amount.mark(&amount);
                self.date.mark(&date);
                self.description.mark(&description);
                let fields = self.invalid_fields();
                tracing::debug!(?fields, "expense form rejected");
                SubmitOutcome::Invalid { fields }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn field_change_touches_only_that_field() {
        let mut form = ExpenseForm::new();
        form.on_field_change(FormField::Amount, "12");
        assert_eq!(form.field(FormField::Amount).raw_value, "12");
        assert_eq!(form.field(FormField::Date).raw_value, "");
        assert_eq!(form.field(FormField::Description).raw_value, "");
    }

    #[test]
    fn edit_mode_prefills_fields() {
        let expense = Expense::new(
            "e1".into(),
            ExpenseData::new(
                "Groceries",
                650.0,
                NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
            ),
        );
        let form = ExpenseForm::for_edit(&expense);
        assert_eq!(form.field(FormField::Amount).raw_value, "650");
        assert_eq!(form.field(FormField::Date).raw_value, "2025-04-01");
        assert_eq!(form.field(FormField::Description).raw_value, "Groceries");
        assert_eq!(form.submit_label(), "Update");
        assert_eq!(form.editing().map(ExpenseId::as_str), Some("e1"));
    }

    #[test]
    fn rejected_field_keeps_reason_until_edited() {
        let mut form = ExpenseForm::new();
        form.on_field_change(FormField::Amount, "-1");
        form.on_field_change(FormField::Date, "2025-04-05");
        form.on_field_change(FormField::Description, "Coffee");
        form.submit(|_| panic!("must not emit"));

        let reason = form.field(FormField::Amount).error().unwrap();
        assert_eq!(reason.message, "Value must be greater than zero");

        form.on_field_change(FormField::Amount, "x");
        assert!(form.field(FormField::Amount).error().is_none());
        assert!(form.field(FormField::Amount).is_valid);
    }

    #[test]
    fn field_keys_parse_case_insensitively() {
        assert_eq!(FormField::from_key("Amount"), Some(FormField::Amount));
        assert_eq!(FormField::from_key("desc"), Some(FormField::Description));
        assert_eq!(FormField::from_key("category"), None);
    }
}
