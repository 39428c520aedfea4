//! todolist - a single-screen terminal todo entry widget
//!
//! Type a todo, press Enter to add it to the list. Every addition is
//! announced to a collaborator service with a best-effort HTTP `PUT`; if that
//! fails the screen shows a short error.
//!
//! # Modules
//!
//! * [`cli`] - Command line parsing
//! * [`config`] - Application configuration management
//! * [`notifier`] - Outbound notification transports
//! * [`ui`] - Terminal user interface components and event loop

/// Command line parsing
pub mod cli;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// File logging setup
pub mod logger;

/// Outbound "todo added" notifications
pub mod notifier;

/// Terminal user interface components and rendering
pub mod ui;
