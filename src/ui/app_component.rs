//! Root component: the host form holding the date picker field, the submit and
//! reset buttons, the status bar and the debug panel.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    Frame,
};

use crate::form::{FormState, FormValues};
use crate::picker::{
    click_outside::ListenerGuard, Field, Phase, PickerDefaults, PickerMode, PickerStore, PointerPress, TextValue,
};
use crate::ui::components::{DatePickerField, DebugPanel, FormButtons, StatusBar};
use crate::ui::core::{Action, AppContext, Component, EventType, FocusTarget};
use crate::ui::layout::LayoutManager;

/// One stop of the Tab focus cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FocusSlot {
    Input(Field),
    Submit,
    Reset,
}

pub struct AppComponent {
    context: AppContext,
    form: FormState,
    picker_field: DatePickerField,
    buttons: FormButtons,
    focus: FocusTarget,
    show_debug: bool,
    should_quit: bool,
    _press_log: ListenerGuard,
}

impl AppComponent {
    pub fn new(context: AppContext) -> Self {
        let form = FormState::new(FormValues::default());
        let values = form.values().clone();

        let defaults = PickerDefaults {
            text_value: TextValue {
                start: values.start.clone(),
                end: Some(values.end.clone()),
            },
            month_count: context.config.picker.month_count,
            ..PickerDefaults::default()
        };
        let store = PickerStore::new(context.config.picker.mode, defaults, context.picker_env());
        let mut picker_field = DatePickerField::new(store, &context.document);
        picker_field.observe_form(&values);

        let logger = context.logger.clone();
        let press_log = context.document.add_listener(Phase::Bubble, move |press| {
            logger.log(format!("Pointer press at column {}, row {}", press.column, press.row));
        });

        context.logger.log(format!(
            "Picker mounted: mode {:?}, {} month(s)",
            context.config.picker.mode, context.config.picker.month_count
        ));

        Self {
            context,
            form,
            picker_field,
            buttons: FormButtons::new(),
            focus: FocusTarget::Picker,
            show_debug: false,
            should_quit: false,
            _press_log: press_log,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn picker(&self) -> &DatePickerField {
        &self.picker_field
    }

    pub fn focus(&self) -> FocusTarget {
        self.focus
    }

    pub fn is_debug_visible(&self) -> bool {
        self.show_debug
    }

    /// Process one terminal event through the component hierarchy
    pub fn handle_event(&mut self, event: EventType) {
        let action = match event {
            EventType::Key(key) => self.handle_key_events(key),
            EventType::Mouse(mouse) if matches!(mouse.kind, MouseEventKind::Down(_)) => {
                self.handle_mouse(PointerPress::new(mouse.column, mouse.row))
            }
            EventType::Mouse(_) | EventType::Resize(_, _) | EventType::Tick | EventType::Other => Action::None,
        };

        self.update(action);

        // Host form changes flow back into the picker after every event
        let values = self.form.values().clone();
        self.picker_field.observe_form(&values);
    }

    fn route_key(&mut self, key: KeyEvent) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Action::Quit;
        }

        match key.code {
            KeyCode::F(2) => return Action::ToggleDebug,
            KeyCode::Tab => return Action::FocusNext,
            KeyCode::BackTab => return Action::FocusPrevious,
            _ => {}
        }

        match self.focus {
            FocusTarget::Picker if key.code == KeyCode::Enter => Action::SubmitForm,
            FocusTarget::Picker => self.picker_field.handle_key_events(key),
            FocusTarget::Submit | FocusTarget::Reset => self.buttons.handle_key_events(key),
            FocusTarget::Nothing => match key.code {
                KeyCode::Char('q') => Action::Quit,
                _ => Action::None,
            },
        }
    }

    fn route_press(&mut self, press: PointerPress) -> Action {
        // Capture listeners (outside-click detection) run before any component reacts
        self.context.document.dispatch_press(press);

        let action = self.picker_field.handle_mouse(press);
        if !action.is_none() {
            return action;
        }

        let action = self.buttons.handle_mouse(press);
        if !action.is_none() {
            let pressed = self.buttons.focus;
            self.set_focus(pressed);
            return action;
        }

        Action::Focus(FocusTarget::Nothing)
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::SetFieldValue { field, value } => {
                self.context
                    .logger
                    .log(format!("Field '{}' set to '{}'", field.name(), value));
                self.form.set_field_value(field, value);
                self.set_focus(FocusTarget::Picker);
            }
            Action::SubmitForm => {
                let submitted = self.form.submit();
                self.context.logger.log(format!("Submitted {}", submitted.to_json()));
                if self.focus == FocusTarget::Picker {
                    self.picker_field.controller_mut().handle_blur();
                }
            }
            Action::ResetForm => {
                self.form.reset();
                self.context.logger.log("Form reset".to_string());
            }
            Action::Focus(target) => self.set_focus(target),
            Action::FocusNext => self.cycle_focus(true),
            Action::FocusPrevious => self.cycle_focus(false),
            Action::ToggleDebug => self.show_debug = !self.show_debug,
            Action::Quit => self.should_quit = true,
            Action::None => {}
        }
    }

    fn set_focus(&mut self, target: FocusTarget) {
        if self.focus == target {
            return;
        }

        if self.focus == FocusTarget::Picker {
            self.picker_field.on_blur();
        }
        if target == FocusTarget::Picker {
            self.picker_field.on_focus();
        }

        self.focus = target;
        self.buttons.focus = target;
    }

    fn focus_slots(&self) -> Vec<FocusSlot> {
        let mut slots = vec![FocusSlot::Input(Field::Start)];
        if self.picker_field.controller().state().mode == PickerMode::Range {
            slots.push(FocusSlot::Input(Field::End));
        }
        slots.push(FocusSlot::Submit);
        slots.push(FocusSlot::Reset);
        slots
    }

    fn current_slot(&self) -> Option<FocusSlot> {
        match self.focus {
            FocusTarget::Picker => Some(FocusSlot::Input(self.picker_field.controller().state().focused_field)),
            FocusTarget::Submit => Some(FocusSlot::Submit),
            FocusTarget::Reset => Some(FocusSlot::Reset),
            FocusTarget::Nothing => None,
        }
    }

    fn cycle_focus(&mut self, forward: bool) {
        let slots = self.focus_slots();
        let next = match self.current_slot().and_then(|slot| slots.iter().position(|s| *s == slot)) {
            Some(index) if forward => slots[(index + 1) % slots.len()],
            Some(index) => slots[(index + slots.len() - 1) % slots.len()],
            None if forward => slots[0],
            None => slots[slots.len() - 1],
        };

        match next {
            FocusSlot::Input(field) => {
                self.set_focus(FocusTarget::Picker);
                self.picker_field.controller_mut().handle_focus(field);
            }
            FocusSlot::Submit => self.set_focus(FocusTarget::Submit),
            FocusSlot::Reset => self.set_focus(FocusTarget::Reset),
        }
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.route_key(key)
    }

    fn handle_mouse(&mut self, press: PointerPress) -> Action {
        self.route_press(press)
    }

    fn update(&mut self, action: Action) -> Action {
        self.apply(action);
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let areas = LayoutManager::form_layout(rect, self.picker_field.desired_height());

        let title = Paragraph::new("📅 Pick a date range")
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
        f.render_widget(title, areas.title);

        self.picker_field.render(f, areas.picker);
        self.buttons.render(f, areas.buttons);
        StatusBar::render(f, areas.status, self.form.last_submitted());

        if self.show_debug {
            DebugPanel::render(f, rect, &self.context.logger.get_logs());
        }
    }
}
