//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

pub const APP_NAME: &str = "daterange";
pub const CONFIG_FILE_NAME: &str = "daterange.toml";
pub const LOG_FILE_NAME: &str = "daterange.log";

// Picker limits
/// Largest number of months the popover may show
pub const MAX_MONTH_COUNT: usize = 12;

// Logging
/// Entries kept for the debug panel
pub const MAX_LOG_ENTRIES: usize = 500;

// Month grid labels
/// Pattern for each month grid title
pub const MONTH_TITLE_FORMAT: &str = "%m";
/// Pattern for each day cell
pub const DAY_CELL_FORMAT: &str = "%d";

// UI text
pub const TITLE_START_INPUT: &str = "Start";
pub const TITLE_END_INPUT: &str = "End";
pub const TITLE_DATE_INPUT: &str = "Date";
pub const BUTTON_PREV: &str = "prev";
pub const BUTTON_NEXT: &str = "next";
pub const BUTTON_SUBMIT: &str = "submit";
pub const BUTTON_RESET: &str = "reset";
pub const DIALOG_TITLE_DEBUG_LOGS: &str = "🔍 Debug Logs - Press F2 to close";
pub const STATUS_HINT: &str = "Tab: next field • Esc: close calendar • PgUp/PgDn: month • F2: logs • Ctrl-C: quit";

// UI Layout Constants
/// Height of a bordered single-line input or button
pub const INPUT_HEIGHT: u16 = 3;
/// Width of a date input box
pub const INPUT_WIDTH: u16 = 16;
/// Width of one day cell in the month grid
pub const DAY_CELL_WIDTH: u16 = 3;
/// Width of one month grid including its border
pub const MONTH_GRID_WIDTH: u16 = DAY_CELL_WIDTH * 7 + 2;
