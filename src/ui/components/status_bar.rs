//! Status bar component

use crate::ui::core::Focus;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Text shown for the given focus and counts
    #[must_use]
    pub fn status_text(focus: Focus, completed: usize, total: usize) -> String {
        let hints = match focus {
            Focus::Input => "Enter: add • Tab: list • Esc: quit",
            Focus::List => "Space: toggle • d: delete • Tab: input • T: icons • G: logs • q: quit",
        };
        format!("{}/{} done • {}", completed, total, hints)
    }

    /// Render the status bar
    pub fn render(f: &mut Frame, area: Rect, focus: Focus, completed: usize, total: usize) {
        let status_color = if total > 0 && completed == total {
            Color::Green
        } else {
            Color::Gray
        };

        let status_bar = Paragraph::new(Self::status_text(focus, completed, total))
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}
