use crate::constants::{DELETE_COLUMN_WIDTH, EMPTY_LIST_TEXT};
use crate::icons::IconService;
use crate::store::Task;
use crate::ui::components::task_list_item_component::TaskItem;
use crate::ui::core::{actions::Action, Component};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, List, ListState, Paragraph},
    Frame,
};

pub struct TaskListComponent {
    pub tasks: Vec<Task>,
    pub selected_index: usize,
    pub list_state: ListState,
    pub icons: IconService,
    focused: bool,
    /// Inner area of the last render, used for mouse hit-testing
    inner_area: Rect,
}

impl Default for TaskListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskListComponent {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            selected_index: 0,
            list_state: ListState::default(),
            icons: IconService::default(),
            focused: false,
            inner_area: Rect::default(),
        }
    }

    pub fn update_data(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
        self.update_list_state();
    }

    pub fn set_icons(&mut self, icons: IconService) {
        self.icons = icons;
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.tasks.get(self.selected_index)
    }

    fn update_list_state(&mut self) {
        if self.tasks.is_empty() {
            self.selected_index = 0;
            self.list_state.select(None);
        } else {
            if self.selected_index >= self.tasks.len() {
                self.selected_index = self.tasks.len().saturating_sub(1);
            }
            self.list_state.select(Some(self.selected_index));
        }
    }

    fn select_next(&mut self) {
        if !self.tasks.is_empty() && self.selected_index + 1 < self.tasks.len() {
            self.selected_index += 1;
            self.update_list_state();
        }
    }

    fn select_previous(&mut self) -> Action {
        if self.selected_index == 0 {
            // Moving up past the first row returns to the input
            return Action::FocusInput;
        }
        self.selected_index -= 1;
        self.update_list_state();
        Action::None
    }

    /// Map a screen row to a task index, if it lands on a row
    fn row_at(&self, row: u16) -> Option<usize> {
        if row < self.inner_area.y || row >= self.inner_area.bottom() {
            return None;
        }
        let index = (row - self.inner_area.y) as usize + self.list_state.offset();
        (index < self.tasks.len()).then_some(index)
    }
}

impl Component for TaskListComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => self.select_previous(),
            KeyCode::Home | KeyCode::Char('g') => {
                self.selected_index = 0;
                self.update_list_state();
                Action::None
            }
            KeyCode::End => {
                self.selected_index = self.tasks.len().saturating_sub(1);
                self.update_list_state();
                Action::None
            }
            KeyCode::Char(' ') | KeyCode::Enter => match self.selected_task() {
                Some(task) => Action::ToggleTask(task.id),
                None => Action::None,
            },
            KeyCode::Char('d') | KeyCode::Delete => match self.selected_task() {
                Some(task) => Action::RemoveTask(task.id),
                None => Action::None,
            },
            KeyCode::Tab | KeyCode::Char('i') => Action::FocusInput,
            KeyCode::Char('T') => Action::CycleIconTheme,
            KeyCode::Char('G') => Action::ShowLogs(true),
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            _ => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Action::None;
        }
        if mouse.column < self.inner_area.x || mouse.column >= self.inner_area.right() {
            return Action::None;
        }
        let Some(index) = self.row_at(mouse.row) else {
            return Action::None;
        };

        self.selected_index = index;
        self.update_list_state();
        let id = self.tasks[index].id;

        let checkbox_end = self.inner_area.x + TaskItem::checkbox_width(&self.icons);
        let delete_start = self.inner_area.right().saturating_sub(DELETE_COLUMN_WIDTH);

        if mouse.column < checkbox_end {
            Action::ToggleTask(id)
        } else if mouse.column >= delete_start {
            Action::RemoveTask(id)
        } else {
            Action::FocusList
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let border_color = if self.focused { Color::Cyan } else { Color::Gray };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Tasks ")
            .style(Style::default().fg(border_color));

        self.inner_area = block.inner(rect);

        if self.tasks.is_empty() {
            let empty = Paragraph::new(EMPTY_LIST_TEXT)
                .block(block)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray));
            f.render_widget(empty, rect);
            return;
        }

        let width = self.inner_area.width;
        let items: Vec<_> = self
            .tasks
            .iter()
            .enumerate()
            .map(|(index, task)| {
                let selected = self.focused && index == self.selected_index;
                TaskItem::new(task.clone(), self.icons.clone()).render(selected, width)
            })
            .collect();

        let highlight = if self.focused {
            Style::default().bg(Color::Rgb(40, 40, 40)).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        let list = List::new(items).block(block).highlight_style(highlight);
        f.render_stateful_widget(list, rect, &mut self.list_state);
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_blur(&mut self) {
        self.focused = false;
    }
}
