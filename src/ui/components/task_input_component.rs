//! Header form: heading, title input with submit glyph and the inline
//! validation message.

use crate::config::UiConfig;
use crate::icons::IconService;
use crate::ui::core::{actions::Action, Component};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Constraint, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

pub struct TaskInputComponent {
    buffer: String,
    heading: String,
    placeholder: String,
    error_message: Option<String>,
    icons: IconService,
    focused: bool,
    /// Bordered input area of the last render, used for mouse hit-testing
    input_area: Rect,
}

impl TaskInputComponent {
    pub fn new(config: &UiConfig) -> Self {
        Self {
            buffer: String::new(),
            heading: config.heading.clone(),
            placeholder: config.placeholder.clone(),
            error_message: None,
            icons: IconService::new(config.icon_theme),
            focused: true,
            input_area: Rect::default(),
        }
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    pub fn set_error(&mut self, error_message: Option<String>) {
        self.error_message = error_message;
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn set_icons(&mut self, icons: IconService) {
        self.icons = icons;
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    fn submit(&self) -> Action {
        Action::CreateTask(self.buffer.clone())
    }

    /// Columns covered by the submit glyph on the input's top border
    fn submit_columns(&self) -> (u16, u16) {
        let glyph_width = Span::raw(self.icons.add()).width() as u16 + 2;
        let end = self.input_area.right().saturating_sub(1);
        (end.saturating_sub(glyph_width), end)
    }
}

impl Component for TaskInputComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => {
                self.buffer.pop();
                Action::None
            }
            KeyCode::Tab | KeyCode::Down => Action::FocusList,
            KeyCode::Esc => {
                if self.buffer.is_empty() {
                    Action::Quit
                } else {
                    self.buffer.clear();
                    Action::None
                }
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.buffer.push(c);
                Action::None
            }
            _ => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Action::None;
        }
        if !self.input_area.contains(Position::new(mouse.column, mouse.row)) {
            return Action::None;
        }

        let (start, end) = self.submit_columns();
        if mouse.row == self.input_area.y && mouse.column >= start && mouse.column < end {
            self.submit()
        } else {
            Action::FocusInput
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let [heading_area, input_area, error_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(3), Constraint::Length(1)]).areas(rect);
        self.input_area = input_area;

        let heading = Paragraph::new(Line::from(Span::styled(
            self.heading.clone(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )));
        f.render_widget(heading, heading_area);

        let border_color = if self.focused { Color::Cyan } else { Color::Gray };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Nova task ")
            .title(Line::from(format!(" {} ", self.icons.add())).right_aligned())
            .style(Style::default().fg(border_color));

        // Keep the end of the buffer and the cursor inside the box
        let inner_width = input_area.width.saturating_sub(2) as usize;
        let cursor_width = usize::from(self.focused);
        let visible = visible_tail(&self.buffer, inner_width.saturating_sub(cursor_width));

        let content = if self.buffer.is_empty() && !self.focused {
            Line::from(Span::styled(self.placeholder.clone(), Style::default().fg(Color::DarkGray)))
        } else if self.buffer.is_empty() {
            Line::from(vec![
                Span::styled("█", Style::default().fg(Color::White)),
                Span::styled(self.placeholder.clone(), Style::default().fg(Color::DarkGray)),
            ])
        } else if self.focused {
            Line::from(vec![
                Span::styled(visible.to_string(), Style::default().fg(Color::White)),
                Span::styled("█", Style::default().fg(Color::White)),
            ])
        } else {
            Line::from(Span::styled(visible.to_string(), Style::default().fg(Color::White)))
        };
        f.render_widget(Paragraph::new(content).block(block), input_area);

        if let Some(message) = &self.error_message {
            let error = Paragraph::new(Line::from(vec![
                Span::styled(format!("{} ", self.icons.error()), Style::default().fg(Color::Red)),
                Span::styled(message.clone(), Style::default().fg(Color::Red)),
            ]));
            f.render_widget(error, error_area);
        }
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_blur(&mut self) {
        self.focused = false;
    }
}

/// Longest suffix of `text` that fits in `max` columns
fn visible_tail(text: &str, max: usize) -> &str {
    text.char_indices()
        .map(|(index, _)| &text[index..])
        .find(|tail| Span::raw(*tail).width() <= max)
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_tail_keeps_short_text() {
        assert_eq!(visible_tail("Buy milk", 20), "Buy milk");
    }

    #[test]
    fn test_visible_tail_drops_leading_text() {
        assert_eq!(visible_tail("abcdefghij", 4), "ghij");
    }

    #[test]
    fn test_visible_tail_zero_width() {
        assert_eq!(visible_tail("abc", 0), "");
    }
}
