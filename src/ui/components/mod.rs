//! Reusable UI components

pub mod common;

// Component architecture
pub mod calendar_popover;
pub mod date_input;
pub mod date_picker_field;
pub mod debug_panel;
pub mod form_buttons;
pub mod month_grid;
pub mod status_bar;

// Component exports
pub use calendar_popover::{CalendarHit, CalendarPopover};
pub use date_input::DateInput;
pub use date_picker_field::DatePickerField;
pub use debug_panel::DebugPanel;
pub use form_buttons::FormButtons;
pub use month_grid::MonthGrid;
pub use status_bar::StatusBar;
