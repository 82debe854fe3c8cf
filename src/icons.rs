//! Icon service for managing different icon themes
//!
//! Glyphs for checkboxes, the submit control and the delete control,
//! in emoji, Unicode and ASCII flavours.

use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    Unicode,
    /// ASCII characters (maximum compatibility)
    #[default]
    Ascii,
}

/// Checkbox glyphs
#[derive(Debug, Clone)]
pub struct TaskStatusIcons {
    pub pending: &'static str,
    pub completed: &'static str,
}

/// Form and row control glyphs
#[derive(Debug, Clone)]
pub struct ControlIcons {
    pub add: &'static str,
    pub delete: &'static str,
    pub error: &'static str,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub task_status: TaskStatusIcons,
    pub controls: ControlIcons,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone, Default)]
pub struct IconService {
    current_theme: IconTheme,
}

impl IconService {
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    pub fn set_theme(&mut self, theme: IconTheme) {
        self.current_theme = theme;
    }

    /// Cycle to the next icon theme in the sequence: Ascii -> Unicode -> Emoji -> Ascii
    pub fn cycle_icon_theme(&mut self) {
        self.current_theme = match self.current_theme {
            IconTheme::Ascii => IconTheme::Unicode,
            IconTheme::Unicode => IconTheme::Emoji,
            IconTheme::Emoji => IconTheme::Ascii,
        };
    }

    /// Get the complete icon set for the current theme
    #[must_use]
    pub fn icons(&self) -> IconSet {
        match self.current_theme {
            IconTheme::Emoji => IconSet {
                task_status: TaskStatusIcons {
                    pending: "🔳",
                    completed: "✅",
                },
                controls: ControlIcons {
                    add: "➕",
                    delete: "🗑️",
                    error: "❌",
                },
            },
            IconTheme::Unicode => IconSet {
                task_status: TaskStatusIcons {
                    pending: "☐",
                    completed: "☑",
                },
                controls: ControlIcons {
                    add: "✚",
                    delete: "✗",
                    error: "⚠",
                },
            },
            IconTheme::Ascii => IconSet {
                task_status: TaskStatusIcons {
                    pending: "[ ]",
                    completed: "[X]",
                },
                controls: ControlIcons {
                    add: "[+]",
                    delete: "[-]",
                    error: "!",
                },
            },
        }
    }

    #[must_use]
    pub fn checkbox(&self, is_complete: bool) -> &'static str {
        let icons = self.icons();
        if is_complete {
            icons.task_status.completed
        } else {
            icons.task_status.pending
        }
    }

    #[must_use]
    pub fn add(&self) -> &'static str {
        self.icons().controls.add
    }

    #[must_use]
    pub fn delete(&self) -> &'static str {
        self.icons().controls.delete
    }

    #[must_use]
    pub fn error(&self) -> &'static str {
        self.icons().controls.error
    }
}
