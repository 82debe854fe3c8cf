//! Layout management and calculations

use crate::constants::{INPUT_FORM_HEIGHT, STATUS_BAR_HEIGHT};
use ratatui::layout::{Constraint, Layout, Rect};

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Split the screen into input form, task list and status bar
    #[must_use]
    pub fn main_layout(area: Rect) -> [Rect; 3] {
        Layout::vertical([
            Constraint::Length(INPUT_FORM_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .areas(area)
    }
}
