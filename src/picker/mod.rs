//! Date picker core: state machine, month math, outside-click detection and the
//! controller that ties them together.
//!
//! # Module Components
//!
//! - [`state`] - The picker state record and its building blocks
//! - [`action`] - Every transition the state machine accepts
//! - [`reducer`] - The pure transition function
//! - [`months`] - Visible month starts and whole-week day enumeration
//! - [`store`] - The shared state+dispatch pair
//! - [`click_outside`] - Capture-phase pointer listener and region handles
//! - [`controller`] - Named operations and post-transition reactions
//!
//! Nothing here renders; the terminal components in [`crate::ui`] read the
//! state and forward gestures into the [`PickerController`].

pub mod action;
pub mod click_outside;
pub mod controller;
pub mod months;
pub mod reducer;
pub mod state;
pub mod store;

pub use action::PickerAction;
pub use click_outside::{ClickOutside, Phase, PointerDocument, PointerPress, RegionHandle};
pub use controller::{PickerController, PickerRegions};
pub use months::{calendar_days, month_starts, CalendarDay};
pub use reducer::{reduce, PickerEnv};
pub use state::{Field, PickerDefaults, PickerMode, PickerState, SelectedDate, TextValue};
pub use store::PickerStore;
