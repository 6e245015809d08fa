use chrono::NaiveDate;
use daterange::form::FormValues;
use daterange::picker::{
    Field, PickerController, PickerDefaults, PickerEnv, PickerMode, PickerState, PickerStore, PointerDocument,
    PointerPress, SelectedDate,
};
use daterange::utils::datetime::{ChronoDateMath, DEFAULT_DATE_FORMAT};
use ratatui::layout::Rect;
use std::rc::Rc;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn env() -> PickerEnv {
    let dates = ChronoDateMath::default().with_today(date(2025, 6, 10));
    PickerEnv::new(Rc::new(dates), DEFAULT_DATE_FORMAT)
}

fn controller(mode: PickerMode, document: &PointerDocument) -> PickerController {
    let defaults = PickerDefaults {
        month_count: 2,
        ..PickerDefaults::default()
    };
    PickerController::new(PickerStore::new(mode, defaults, env()), document)
}

/// Type `text` one character at a time, recording the focused input after each
fn type_text(controller: &mut PickerController, field: Field, text: &str) -> Vec<Field> {
    let mut typed = String::new();
    text.chars()
        .map(|c| {
            typed.push(c);
            controller.handle_change_text(field, typed.clone());
            controller.state().focused_field
        })
        .collect()
}

#[test]
fn test_initial_months_anchor_at_today() {
    let document = PointerDocument::new();
    let controller = controller(PickerMode::Range, &document);
    assert_eq!(controller.state().visible_month_starts, vec![date(2025, 6, 1), date(2025, 7, 1)]);
    assert_eq!(controller.first_month_date(), date(2025, 6, 1));
}

#[test]
fn test_typing_valid_start_advances_focus_once() {
    let document = PointerDocument::new();
    let mut controller = controller(PickerMode::Range, &document);
    controller.handle_focus_start();

    let focus_trail = type_text(&mut controller, Field::Start, "2024-03-10");

    let (last, before) = focus_trail.split_last().unwrap();
    assert!(before.iter().all(|field| *field == Field::Start));
    assert_eq!(*last, Field::End);

    let state = controller.store().snapshot();
    assert!(state.is_open);
    assert_eq!(state.selected_date.start, Some(date(2024, 3, 10)));
    assert_eq!(state.visible_month_starts, vec![date(2024, 3, 1), date(2024, 4, 1)]);

    // Nothing new happened, so nothing fires again
    assert!(!controller.settle());
    assert_eq!(controller.state().focused_field, Field::End);
}

#[test]
fn test_returning_to_start_does_not_readvance_without_change() {
    let document = PointerDocument::new();
    let mut controller = controller(PickerMode::Range, &document);
    controller.handle_focus_start();
    type_text(&mut controller, Field::Start, "2024-03-10");

    controller.handle_focus_start();
    assert_eq!(controller.state().focused_field, Field::Start);

    // Same text again leaves the date unchanged
    controller.handle_change_text(Field::Start, "2024-03-10");
    assert_eq!(controller.state().focused_field, Field::Start);

    controller.handle_change_text(Field::Start, "2024-03-11");
    assert_eq!(controller.state().focused_field, Field::End);
}

#[test]
fn test_invalid_start_text_does_not_advance() {
    let document = PointerDocument::new();
    let mut controller = controller(PickerMode::Range, &document);
    controller.handle_focus_start();

    let focus_trail = type_text(&mut controller, Field::Start, "2024-02-30");

    assert!(focus_trail.iter().all(|field| *field == Field::Start));
    assert_eq!(controller.state().selected_date.start, None);
    assert_eq!(controller.state().text(Field::Start), "2024-02-30");
}

#[test]
fn test_single_mode_never_advances() {
    let document = PointerDocument::new();
    let mut controller = controller(PickerMode::Single, &document);
    controller.handle_focus_start();

    let focus_trail = type_text(&mut controller, Field::Start, "2024-03-10");

    assert!(focus_trail.iter().all(|field| *field == Field::Start));
    assert_eq!(controller.state().selected_date.start, Some(date(2024, 3, 10)));
}

#[test]
fn test_preselected_start_is_the_baseline() {
    let document = PointerDocument::new();
    let defaults = PickerDefaults {
        selected_date: SelectedDate {
            start: Some(date(2024, 3, 10)),
            end: None,
        },
        ..PickerDefaults::default()
    };
    let mut state = PickerState::new(PickerMode::Range, defaults, vec![date(2024, 3, 1)]);
    state.text_value.start = "2024-03-10".to_string();
    let mut controller = PickerController::new(PickerStore::from_state(state, env()), &document);

    assert!(!controller.settle());
    assert_eq!(controller.state().focused_field, Field::Start);
}

#[test]
fn test_calendar_selection_flow() {
    let document = PointerDocument::new();
    let mut controller = controller(PickerMode::Range, &document);
    controller.handle_focus_start();

    assert_eq!(controller.handle_select_date(date(2025, 6, 3)), Field::Start);
    {
        let state = controller.state();
        assert!(state.is_open);
        assert_eq!(state.focused_field, Field::End);
        assert_eq!(state.text(Field::Start), "2025-06-03");
    }

    assert_eq!(controller.handle_select_date(date(2025, 7, 8)), Field::End);
    let state = controller.state();
    assert!(!state.is_open);
    assert_eq!(state.selected_date.end, Some(date(2025, 7, 8)));
    assert_eq!(state.text(Field::End), "2025-07-08");
}

#[test]
fn test_month_navigation_operations() {
    let document = PointerDocument::new();
    let mut controller = controller(PickerMode::Range, &document);

    controller.handle_go_to_next_month();
    assert_eq!(controller.first_month_date(), date(2025, 7, 1));
    controller.handle_go_to_prev_month();
    controller.handle_go_to_prev_month();
    assert_eq!(controller.first_month_date(), date(2025, 5, 1));

    let days = controller.month_days(date(2025, 5, 1));
    assert_eq!(days.len() % 7, 0);
    assert_eq!(controller.format(date(2025, 5, 1), "%m"), "05");
}

#[test]
fn test_outside_press_closes_popover() {
    let document = PointerDocument::new();
    let mut controller = controller(PickerMode::Range, &document);
    controller.regions().start_input.set(Rect::new(0, 0, 16, 3));
    controller.handle_focus_start();

    document.dispatch_press(PointerPress::new(2, 1));
    assert!(controller.state().is_open);

    document.dispatch_press(PointerPress::new(50, 20));
    assert!(!controller.state().is_open);
}

#[test]
fn test_dropping_controller_removes_listener() {
    let document = PointerDocument::new();
    let controller = controller(PickerMode::Range, &document);
    assert_eq!(document.listener_count(), 1);
    drop(controller);
    assert_eq!(document.listener_count(), 0);
}

#[test]
fn test_observe_form_resets_on_cleared_field() {
    let document = PointerDocument::new();
    let mut controller = controller(PickerMode::Range, &document);
    controller.handle_change_text(Field::Start, "2024-03-10");
    controller.handle_change_text(Field::End, "2024-03-12");

    let filled = FormValues {
        start: "2024-03-10".to_string(),
        end: "2024-03-12".to_string(),
    };
    assert!(!controller.observe_form(&filled));
    assert!(!controller.observe_form(&filled));

    let cleared = FormValues {
        start: String::new(),
        ..filled
    };
    assert!(controller.observe_form(&cleared));

    let state = controller.state();
    assert_eq!(state.text(Field::Start), "");
    assert_eq!(state.text(Field::End), "");
    assert_eq!(state.selected_date, SelectedDate::default());
}

#[test]
fn test_observe_form_empty_at_mount_resets() {
    let document = PointerDocument::new();
    let mut controller = controller(PickerMode::Range, &document);
    assert!(controller.observe_form(&FormValues::default()));
    assert_eq!(controller.state().text_value.end.as_deref(), Some(""));

    // Still empty, no change
    assert!(!controller.observe_form(&FormValues::default()));
}

#[test]
fn test_unreadable_end_text_takes_start_date() {
    let document = PointerDocument::new();
    let mut controller = controller(PickerMode::Range, &document);
    controller.handle_focus_start();
    type_text(&mut controller, Field::Start, "2024-03-10");
    controller.handle_change_text(Field::End, "2024-05-20".to_string());
    assert_eq!(controller.state().visible_month_starts, vec![date(2024, 5, 1), date(2024, 6, 1)]);

    controller.handle_change_text(Field::End, "garbage".to_string());
    let state = controller.store().snapshot();
    assert_eq!(state.text_value.end.as_deref(), Some("garbage"));
    assert_eq!(state.selected_date.end, Some(date(2024, 3, 10)));
    assert_eq!(state.visible_month_starts, vec![date(2024, 3, 1), date(2024, 4, 1)]);
    assert_eq!(state.focused_field, Field::End);
}
