use chrono::NaiveDate;
use expense_core::{
    domain::ExpenseData,
    form::{ExpenseForm, FormField, SubmitOutcome, INVALID_FORM_MESSAGE},
};

fn filled(amount: &str, date: &str, description: &str) -> ExpenseForm {
    let mut form = ExpenseForm::new();
    form.on_field_change(FormField::Amount, amount);
    form.on_field_change(FormField::Date, date);
    form.on_field_change(FormField::Description, description);
    form
}

fn submit(form: &mut ExpenseForm) -> (SubmitOutcome, Option<ExpenseData>) {
    let mut payload = None;
    let outcome = form.submit(|data| payload = Some(data));
    (outcome, payload)
}

#[test]
fn valid_input_emits_typed_payload() {
    let mut form = filled("45.75", "2025-04-05", "  Coffee ");
    let (outcome, payload) = submit(&mut form);

    assert_eq!(outcome, SubmitOutcome::Submitted);
    let data = payload.expect("payload must be emitted");
    assert_eq!(data.amount, 45.75);
    assert_eq!(data.date, NaiveDate::from_ymd_opt(2025, 4, 5).unwrap());
    assert_eq!(data.description, "Coffee");
    assert!(!form.is_invalid());
    assert!(FormField::ALL.iter().all(|f| form.field(*f).is_valid));
}

#[test]
fn bad_amounts_flag_amount_regardless_of_other_fields() {
    for amount in ["0", "-5", "abc", ""] {
        for (date, description) in [("2025-04-05", "Coffee"), ("2025-02-30", " ")] {
            let mut form = filled(amount, date, description);
            let (outcome, payload) = submit(&mut form);
            assert!(payload.is_none(), "emitted for amount {amount:?}");
            assert!(!outcome.is_submitted());
            assert!(!form.field(FormField::Amount).is_valid);
        }
    }
}

#[test]
fn impossible_dates_flag_only_the_date() {
    let mut form = filled("10", "2025-02-30", "Snacks");
    let (outcome, payload) = submit(&mut form);

    assert!(payload.is_none());
    assert_eq!(
        outcome,
        SubmitOutcome::Invalid {
            fields: vec![FormField::Date]
        }
    );
    assert!(form.field(FormField::Amount).is_valid);
    assert!(form.field(FormField::Description).is_valid);
}

#[test]
fn overlong_date_text_is_rejected() {
    for date in ["2025-04-055", " 2025-04-01", "2025-04-01\t", "2025-04-01 "] {
        let mut form = filled("10", date, "Snacks");
        let (_, payload) = submit(&mut form);
        assert!(payload.is_none(), "emitted for date {date:?}");
        assert!(!form.field(FormField::Date).is_valid);
    }
}

#[test]
fn ten_character_non_iso_dates_are_rejected() {
    for date in ["2025- 4- 1", "+2025-4-01", "2025-4- 01", "01-04-2025"] {
        let mut form = filled("10", date, "Snacks");
        let (outcome, payload) = submit(&mut form);
        assert!(payload.is_none(), "emitted for date {date:?}");
        assert_eq!(
            outcome,
            SubmitOutcome::Invalid {
                fields: vec![FormField::Date]
            }
        );
        assert_eq!(form.field(FormField::Date).raw_value, date);
    }
}

#[test]
fn amounts_above_cap_are_rejected() {
    let mut form = filled("1e300", "2025-04-05", "Yacht");
    let (_, payload) = submit(&mut form);
    assert!(payload.is_none());
    assert!(!form.field(FormField::Amount).is_valid);
}

#[test]
fn rejection_keeps_raw_values_and_sets_message() {
    let mut form = filled("-1", "not a date", "   ");
    let (outcome, _) = submit(&mut form);

    assert_eq!(
        outcome,
        SubmitOutcome::Invalid {
            fields: vec![FormField::Amount, FormField::Date, FormField::Description]
        }
    );
    assert_eq!(form.field(FormField::Amount).raw_value, "-1");
    assert_eq!(form.field(FormField::Date).raw_value, "not a date");
    assert_eq!(form.field(FormField::Description).raw_value, "   ");
    assert!(form.is_invalid());
    assert_eq!(form.error_message(), Some(INVALID_FORM_MESSAGE));
}

#[test]
fn typing_clears_error_without_revalidating() {
    let mut form = filled("abc", "2025-04-05", "Lunch");
    submit(&mut form);
    assert!(form.is_invalid());

    form.on_field_change(FormField::Amount, "still bad");
    assert!(form.field(FormField::Amount).is_valid);
    assert!(!form.is_invalid());
    assert!(form.error_message().is_none());

    let (outcome, _) = submit(&mut form);
    assert!(!outcome.is_submitted());
    assert!(!form.field(FormField::Amount).is_valid);
}

#[test]
fn fresh_form_starts_valid_and_empty() {
    let form = ExpenseForm::new();
    assert!(!form.is_invalid());
    assert_eq!(form.submit_label(), "Add");
    assert!(form.editing().is_none());
    assert!(FormField::ALL
        .iter()
        .all(|f| form.field(*f).raw_value.is_empty()));
}
