//! Core UI functionality for todolist.
//!
//! This module contains the building blocks the screen is made of: the
//! widget state, the actions that drive it, the component abstraction, event
//! polling and background notification tasks.
//!
//! # Module Components
//!
//! - [`actions`] - Action definitions driving state transitions
//! - [`component`] - Base component trait and rendering abstractions
//! - [`event_handler`] - Terminal event polling
//! - [`state`] - The single explicit widget state
//! - [`task_manager`] - Background notification tasks
//!
//! # Architecture
//!
//! 1. **Components** implement the [`Component`] trait and turn keys into [`Action`]s
//! 2. **State** is only mutated on the UI loop while applying actions
//! 3. **Tasks** run notifications on the tokio runtime and report back through a channel

pub mod actions;
pub mod component;
pub mod event_handler;
pub mod state;
pub mod task_manager;

// Re-export core types for easier access from other modules
pub use actions::Action;
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
pub use state::{NotificationOutcome, Submission, SubmissionId, TodoState};
pub use task_manager::{TaskId, TaskManager};
