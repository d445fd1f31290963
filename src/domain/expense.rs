use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Displayable, Identifiable};

/// Date layout shared by form input, display and serialization helpers.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Opaque identifier assigned by the store when an expense is created.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(String);

impl ExpenseId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Draws a random UUID v4 backed identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for ExpenseId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Validated payload produced by the expense form. Carries no identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseData {
    pub description: String,
    pub amount: f64,
    pub date: NaiveDate,
}

impl ExpenseData {
    pub fn new(description: impl Into<String>, amount: f64, date: NaiveDate) -> Self {
        Self {
            description: description.into(),
            amount,
            date,
        }
    }
}

/// Partial update applied over an existing expense. Absent fields are kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpensePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

impl ExpensePatch {
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_amount(mut self, amount: f64) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }
}

impl From<ExpenseData> for ExpensePatch {
    fn from(data: ExpenseData) -> Self {
        Self {
            description: Some(data.description),
            amount: Some(data.amount),
            date: Some(data.date),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub description: String,
    pub amount: f64,
    pub date: NaiveDate,
}

impl Expense {
    pub fn new(id: ExpenseId, data: ExpenseData) -> Self {
        Self {
            id,
            description: data.description,
            amount: data.amount,
            date: data.date,
        }
    }

    /// Returns a copy with the present patch fields merged over this record.
    pub fn merged(&self, patch: &ExpensePatch) -> Self {
        Self {
            id: self.id.clone(),
            description: patch
                .description
                .clone()
                .unwrap_or_else(|| self.description.clone()),
            amount: patch.amount.unwrap_or(self.amount),
            date: patch.date.unwrap_or(self.date),
        }
    }
}

impl Identifiable for Expense {
    fn id(&self) -> &ExpenseId {
        &self.id
    }
}

impl Displayable for Expense {
    fn display_label(&self) -> String {
        format!(
            "{} ({})",
            self.description,
            self.date.format(DATE_FORMAT)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn groceries() -> Expense {
        Expense::new(
            ExpenseId::from("e1"),
            ExpenseData::new(
                "Groceries",
                650.0,
                NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
            ),
        )
    }

    #[test]
    fn merge_keeps_fields_missing_from_patch() {
        let original = groceries();
        let merged = original.merged(&ExpensePatch::default().with_amount(700.0));
        assert_eq!(merged.id, original.id);
        assert_eq!(merged.amount, 700.0);
        assert_eq!(merged.description, "Groceries");
        assert_eq!(merged.date, original.date);
    }

    #[test]
    fn random_ids_differ() {
        assert_ne!(ExpenseId::random(), ExpenseId::random());
    }

    #[test]
    fn id_serializes_as_plain_string() {
        let json = serde_json::to_string(&groceries()).unwrap();
        assert!(json.contains("\"id\":\"e1\""), "unexpected json: {json}");
        assert!(json.contains("\"date\":\"2025-04-01\""));
    }
}
