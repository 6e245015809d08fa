use daterange::form::{FormState, FormValues};
use daterange::picker::Field;

#[test]
fn test_set_field_value() {
    let mut form = FormState::new(FormValues::default());
    form.set_field_value(Field::Start, "2024-03-10");
    form.set_field_value(Field::End, "2024-03-12");

    assert_eq!(form.values().get(Field::Start), "2024-03-10");
    assert_eq!(form.values().get(Field::End), "2024-03-12");
    assert!(form.last_submitted().is_none());
}

#[test]
fn test_reset_restores_initial_values() {
    let initial = FormValues {
        start: "2024-01-01".to_string(),
        end: String::new(),
    };
    let mut form = FormState::new(initial.clone());
    form.set_field_value(Field::Start, "2024-02-02");
    form.reset();
    assert_eq!(form.values(), &initial);
}

#[test]
fn test_submit_records_values() {
    let mut form = FormState::new(FormValues::default());
    form.set_field_value(Field::Start, "2024-03-10");

    let submitted = form.submit();
    assert_eq!(submitted.start, "2024-03-10");
    assert_eq!(form.last_submitted(), Some(&submitted));

    // Later edits don't rewrite the recorded submission
    form.set_field_value(Field::Start, "");
    assert_eq!(form.last_submitted().map(|v| v.start.as_str()), Some("2024-03-10"));
}

#[test]
fn test_values_json() {
    let values = FormValues {
        start: "2024-03-10".to_string(),
        end: "2024-03-12".to_string(),
    };
    assert_eq!(values.to_json(), r#"{"start":"2024-03-10","end":"2024-03-12"}"#);

    let parsed: FormValues = serde_json::from_str(&values.to_json()).unwrap();
    assert_eq!(parsed, values);
}
