//! Reusable UI components

pub mod logs_dialog;
pub mod status_bar;
pub mod task_input_component;
pub mod task_list_component;
pub mod task_list_item_component;

// Component exports
pub use logs_dialog::LogsDialog;
pub use status_bar::StatusBar;
pub use task_input_component::TaskInputComponent;
pub use task_list_component::TaskListComponent;
