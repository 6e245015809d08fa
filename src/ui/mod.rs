//! UI module for daterange
//!
//! This module handles the terminal form, the date picker components, rendering,
//! and user interactions.

pub mod app_component;
pub mod components;
pub mod core;
pub mod layout;
pub mod renderer;

pub use app_component::AppComponent;
pub use layout::LayoutManager;
pub use renderer::run_app;
