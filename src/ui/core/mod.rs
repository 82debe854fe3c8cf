//! Core UI functionality for tasklist.
//!
//! The building blocks every component shares:
//!
//! - [`actions`] - Action definitions and UI state transitions
//! - [`component`] - Base component trait and rendering abstractions
//! - [`event_handler`] - Keyboard/mouse input polling
//!
//! Components turn input events into [`Action`]s. The
//! [`AppComponent`](crate::ui::app_component::AppComponent) applies them to
//! the task store and re-renders.

pub mod actions;
pub mod component;
pub mod event_handler;

pub use actions::{Action, Focus};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
