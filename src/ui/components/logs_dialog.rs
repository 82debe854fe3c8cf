//! Modal listing the in-memory log entries, newest first

use crate::constants::{DIALOG_TITLE_LOGS, NO_LOGS_TEXT};
use crate::ui::core::{actions::Action, Component};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

#[derive(Default)]
pub struct LogsDialog {
    visible: bool,
    logs: Vec<String>,
    scroll_offset: usize,
}

impl LogsDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn show(&mut self, logs: Vec<String>) {
        self.logs = logs;
        self.scroll_offset = 0;
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
        self.logs.clear();
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    fn scroll_down(&mut self) {
        if self.scroll_offset + 1 < self.logs.len() {
            self.scroll_offset += 1;
        }
    }

    fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Centered area covering 80% of `area`
    fn modal_area(area: Rect) -> Rect {
        let width = area.width.saturating_mul(8) / 10;
        let height = area.height.saturating_mul(8) / 10;
        Rect::new(
            area.x + (area.width - width) / 2,
            area.y + (area.height - height) / 2,
            width,
            height,
        )
    }
}

impl Component for LogsDialog {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc | KeyCode::Char('G') | KeyCode::Char('q') => Action::ShowLogs(false),
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll_down();
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll_up();
                Action::None
            }
            KeyCode::Home => {
                self.scroll_offset = 0;
                Action::None
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        if !self.visible {
            return;
        }

        let area = Self::modal_area(rect);
        f.render_widget(Clear, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(DIALOG_TITLE_LOGS)
            .style(Style::default().fg(Color::Cyan));

        let content = if self.logs.is_empty() {
            Paragraph::new(NO_LOGS_TEXT)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Gray))
        } else {
            let lines: Vec<Line> = self
                .logs
                .iter()
                .skip(self.scroll_offset)
                .map(|entry| Line::from(entry.clone()))
                .collect();
            Paragraph::new(lines).style(Style::default().fg(Color::White))
        };

        f.render_widget(content.block(block), area);
    }
}
