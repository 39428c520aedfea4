//! Constants used throughout the application
//!
//! This module centralizes UI text, default values, and other constants
//! to keep the widget's wording consistent between rendering and tests.

// UI Text
pub const APP_HEADING: &str = "TodoList";
pub const INPUT_LABEL: &str = "Todo";
pub const INPUT_PLACEHOLDER: &str = "Type here";
pub const ADD_BUTTON_LABEL: &str = "Add";
pub const TODO_LIST_TITLE: &str = "todo-list";
pub const KEY_HINTS: &str = "Enter: add  Ctrl+U: clear  Esc: quit";

// Error Messages
pub const ERROR_NOTIFICATION_FAILED: &str = "Oups";

// Notification defaults
pub const DEFAULT_NOTIFY_ENDPOINT: &str = "http://localhost:8000/todo";
pub const DEFAULT_NOTIFY_TIMEOUT_SECONDS: u64 = 5;
pub const MAX_NOTIFY_TIMEOUT_SECONDS: u64 = 300;

// Config / log file locations
pub const APP_DIR_NAME: &str = "todolist";
pub const LOCAL_CONFIG_FILE: &str = "todolist.toml";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const LOG_FILE_NAME: &str = "todolist.log";
pub const CONFIG_GENERATED: &str = "Configuration file generated";

// Timing
pub const TICK_RATE_MS: u64 = 100;
pub const RENDER_INTERVAL_MS: u64 = 16;
