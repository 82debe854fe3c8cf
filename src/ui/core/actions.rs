use crate::store::TaskId;

/// Which part of the view receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Input,
    List,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Task operations
    CreateTask(String),
    ToggleTask(TaskId),
    RemoveTask(TaskId),

    // Focus
    FocusInput,
    FocusList,

    // UI operations
    CycleIconTheme,
    ShowLogs(bool),

    // App control
    Quit,
    None,
}
