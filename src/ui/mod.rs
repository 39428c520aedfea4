//! UI module for todolist
//!
//! This module handles the todo entry screen: its components, state, and
//! the terminal event loop.

pub mod app_component;
pub mod components;
pub mod core;
pub mod renderer;

pub use app_component::AppComponent;
pub use renderer::run_app;
