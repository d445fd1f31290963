use chrono::NaiveDate;
use expense_core::{
    config::Config,
    form::{ExpenseForm, FormField, SubmitOutcome},
    init,
    store::ExpenseStore,
};

#[test]
fn form_to_store_flow_matches_demo_example() {
    init();

    let mut store = ExpenseStore::from_config(&Config::default()).unwrap();
    assert_eq!(store.len(), 2);

    let mut form = ExpenseForm::new();
    form.on_field_change(FormField::Description, "Coffee");
    form.on_field_change(FormField::Amount, "45");
    form.on_field_change(FormField::Date, "2025-04-05");

    let mut submitted = None;
    assert_eq!(
        form.submit(|data| submitted = Some(data)),
        SubmitOutcome::Submitted
    );
    let id = store.add(submitted.expect("valid form emits"));

    let expenses = store.expenses();
    assert_eq!(expenses.len(), 3);
    let first = expenses.first().unwrap();
    assert_eq!(first.id, id);
    assert_eq!(first.description, "Coffee");
    assert_eq!(first.amount, 45.0);
    assert_eq!(first.date, NaiveDate::from_ymd_opt(2025, 4, 5).unwrap());
    assert_eq!(expenses.as_slice()[1].id.as_str(), "e1");
    assert_eq!(expenses.as_slice()[2].id.as_str(), "e2");
}
