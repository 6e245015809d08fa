//! daterange - a terminal date range picker
//!
//! This library provides a date picker that edits either a single date or a
//! start/end range through text inputs and a multi-month calendar popover,
//! embedded in a small terminal form built with Ratatui.
//!
//! # Modules
//!
//! * [`config`] - Application configuration management
//! * [`form`] - The host form the picker reports its values to
//! * [`picker`] - Picker state machine, month math and outside-click detection
//! * [`ui`] - Terminal user interface components
//! * [`utils`] - Date arithmetic, formatting and strict parsing

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Host form values, reset and submission
pub mod form;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Date picker core, independent of any rendering
pub mod picker;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for date handling
pub mod utils;
