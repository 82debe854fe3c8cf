//! tasklist - a small in-memory task list for the terminal
//!
//! Add, complete and remove short text items. Nothing is persisted; the
//! list lives as long as the process.
//!
//! # Modules
//!
//! * [`config`] - Application configuration management
//! * [`store`] - The task store and its validation rules
//! * [`ui`] - Terminal user interface components

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// In-memory task store
pub mod store;

/// Terminal user interface components and rendering
pub mod ui;

pub use store::{Task, TaskId, TaskStore, ValidationError};
