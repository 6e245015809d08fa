//! Utility modules for the daterange picker.
//!
//! # Available Utilities
//!
//! - [`datetime`] - The date-math collaborator: month and week boundaries, day
//!   enumeration, formatting and strict parsing

pub mod datetime;
