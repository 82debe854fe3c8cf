//! Constants used throughout the application
//!
//! This module centralizes UI text, log messages and layout values.

// UI Text
pub const DEFAULT_HEADING: &str = "Minhas tasks";
pub const DEFAULT_PLACEHOLDER: &str = "Adicionar novo todo";
pub const EMPTY_LIST_TEXT: &str = "Nenhuma task por aqui";

// Validation Error Messages
pub const ERROR_TITLE_REQUIRED: &str = "título é obrigatório";

// Log Messages
pub const LOG_TASK_CREATED: &str = "Task: created";
pub const LOG_TASK_REJECTED: &str = "Task: rejected";
pub const LOG_TASK_TOGGLED: &str = "Task: toggled";
pub const LOG_TASK_REMOVED: &str = "Task: removed";
pub const LOG_TASK_MISSING: &str = "Task: ignoring action for unknown id";

// Config Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const CONFIG_FILE_NAME: &str = "tasklist.toml";
pub const APP_DIR_NAME: &str = "tasklist";
pub const LOG_FILE_NAME: &str = "tasklist.log";
/// Entries kept by the in-memory logger
pub const MAX_LOG_ENTRIES: usize = 500;
pub const DIALOG_TITLE_LOGS: &str = " Logs - Esc, G or q to close ";
pub const NO_LOGS_TEXT: &str = "No logs yet";

// UI Layout Constants
/// Height of the input form: heading, bordered input and error line
pub const INPUT_FORM_HEIGHT: u16 = 5;
/// Height of the status bar
pub const STATUS_BAR_HEIGHT: u16 = 1;
/// Columns reserved at the right of each row for the delete glyph
pub const DELETE_COLUMN_WIDTH: u16 = 4;
