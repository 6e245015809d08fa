//! Core UI functionality for the daterange application.
//!
//! # Module Components
//!
//! - [`actions`] - App-level actions and the form focus target
//! - [`component`] - Base component trait and rendering abstractions
//! - [`context`] - Shared services: config, logger, pointer document, date math
//! - [`event_handler`] - Terminal event polling and classification
//!
//! # Architecture
//!
//! 1. **Components** implement the [`Component`] trait for consistent rendering
//! 2. **Actions** flow from components up to the app, which applies them to the form
//! 3. **Context** is built once and passed down explicitly
//! 4. **Events** are polled through the [`EventHandler`]

pub mod actions;
pub mod component;
pub mod context;
pub mod event_handler;

pub use actions::{Action, FocusTarget};
pub use component::Component;
pub use context::AppContext;
pub use event_handler::{EventHandler, EventType};
