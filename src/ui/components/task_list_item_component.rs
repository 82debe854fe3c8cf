use crate::constants::DELETE_COLUMN_WIDTH;
use crate::icons::IconService;
use crate::store::Task;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::ListItem,
};

const ELLIPSIS: &str = "…";

/// One row of the task list: checkbox, title and delete glyph
#[derive(Debug, Clone)]
pub struct TaskItem {
    pub task: Task,
    pub icons: IconService,
}

impl TaskItem {
    pub fn new(task: Task, icons: IconService) -> Self {
        Self { task, icons }
    }

    /// Columns taken by the checkbox glyph, counted from the row start
    pub fn checkbox_width(icons: &IconService) -> u16 {
        Span::raw(icons.checkbox(false)).width() as u16
    }

    /// Render into a row `width` columns wide, delete glyph flush right
    pub fn render(&self, selected: bool, width: u16) -> ListItem<'static> {
        let checkbox = self.icons.checkbox(self.task.is_complete);
        let delete = self.icons.delete();

        let checkbox_style = if self.task.is_complete {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::White)
        };

        let mut title_style = if self.task.is_complete {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::CROSSED_OUT)
        } else {
            Style::default().fg(Color::White)
        };
        if selected {
            title_style = title_style.fg(Color::Yellow).add_modifier(Modifier::BOLD);
        }

        let checkbox_width = Span::raw(checkbox).width();
        let title_room = (width as usize)
            .saturating_sub(checkbox_width + 1)
            .saturating_sub(DELETE_COLUMN_WIDTH as usize);
        let title = truncate(&self.task.title, title_room);
        let title_width = Span::raw(title.as_str()).width();

        let delete_width = Span::raw(delete).width();
        let padding = (width as usize)
            .saturating_sub(checkbox_width + 1 + title_width)
            .saturating_sub(delete_width);

        let line = Line::from(vec![
            Span::styled(checkbox, checkbox_style),
            Span::raw(" "),
            Span::styled(title, title_style),
            Span::raw(" ".repeat(padding)),
            Span::styled(delete, Style::default().fg(Color::Red)),
        ]);

        ListItem::new(line)
    }
}

/// Shorten `text` to at most `max` columns, marking the cut with an ellipsis
fn truncate(text: &str, max: usize) -> String {
    if Span::raw(text).width() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }

    let mut out = String::new();
    for c in text.chars() {
        let mut candidate = out.clone();
        candidate.push(c);
        if Span::raw(candidate.as_str()).width() + 1 > max {
            break;
        }
        out = candidate;
    }
    out.push_str(ELLIPSIS);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_keeps_short_text() {
        assert_eq!(truncate("Buy milk", 20), "Buy milk");
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        assert_eq!(truncate("Buy milk and bread", 8), "Buy mil…");
    }

    #[test]
    fn test_checkbox_width_ascii() {
        assert_eq!(TaskItem::checkbox_width(&IconService::default()), 3);
    }
}
