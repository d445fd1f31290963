use chrono::NaiveDate;

use crate::domain::{Expense, ExpenseData, ExpenseId};

/// Sample expenses loaded when `seed_demo_expenses` is enabled.
pub fn demo_expenses() -> Vec<Expense> {
    [
        ("e1", "Groceries", 650.0, (2025, 4, 1)),
        ("e2", "Recharge", 199.0, (2025, 4, 3)),
    ]
    .into_iter()
    .filter_map(|(id, description, amount, (y, m, d))| {
        NaiveDate::from_ymd_opt(y, m, d).map(|date| {
            Expense::new(
                ExpenseId::from(id),
                ExpenseData::new(description, amount, date),
            )
        })
    })
    .collect()
}
