use crate::config::Config;
use crate::constants::{LOG_TASK_CREATED, LOG_TASK_MISSING, LOG_TASK_REJECTED, LOG_TASK_REMOVED, LOG_TASK_TOGGLED};
use crate::icons::IconService;
use crate::logger::Logger;
use crate::store::TaskStore;
use crate::ui::components::{LogsDialog, StatusBar, TaskInputComponent, TaskListComponent};
use crate::ui::core::{
    actions::{Action, Focus},
    event_handler::EventType,
    Component,
};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use ratatui::{layout::Rect, Frame};

/// Application state separate from UI concerns
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub focus: Focus,
    /// Validation message shown under the input until the next successful submit
    pub error_message: Option<String>,
}

pub struct AppComponent {
    // Component composition
    input: TaskInputComponent,
    task_list: TaskListComponent,
    logs_dialog: LogsDialog,

    // Application state
    store: TaskStore,
    state: AppState,

    // Services
    icons: IconService,
    logger: Logger,

    mouse_enabled: bool,
    should_quit: bool,
}

impl AppComponent {
    pub fn new(store: TaskStore, config: &Config, logger: Logger) -> Self {
        let icons = IconService::new(config.ui.icon_theme);
        let mut task_list = TaskListComponent::new();
        task_list.set_icons(icons.clone());

        let mut app = Self {
            input: TaskInputComponent::new(&config.ui),
            task_list,
            logs_dialog: LogsDialog::new(),
            store,
            state: AppState::default(),
            icons,
            logger,
            mouse_enabled: config.ui.mouse_enabled,
            should_quit: false,
        };
        app.sync_component_data();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn input(&self) -> &TaskInputComponent {
        &self.input
    }

    pub fn task_list(&self) -> &TaskListComponent {
        &self.task_list
    }

    pub fn logs_dialog(&self) -> &LogsDialog {
        &self.logs_dialog
    }

    pub fn icons(&self) -> &IconService {
        &self.icons
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    /// Push the current store contents and messages into the components
    fn sync_component_data(&mut self) {
        self.task_list.update_data(self.store.tasks());
        self.input.set_error(self.state.error_message.clone());
    }

    fn set_focus(&mut self, focus: Focus) {
        self.state.focus = focus;
        match focus {
            Focus::Input => {
                self.task_list.on_blur();
                self.input.on_focus();
            }
            Focus::List => {
                self.input.on_blur();
                self.task_list.on_focus();
            }
        }
    }

    /// Route a key to the focused component
    fn route_key(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.logger.log("Global key: Ctrl+C - quitting application".to_string());
            return Action::Quit;
        }

        if self.logs_dialog.is_visible() {
            return self.logs_dialog.handle_key_events(key);
        }

        match self.state.focus {
            Focus::Input => self.input.handle_key_events(key),
            Focus::List => self.task_list.handle_key_events(key),
        }
    }

    fn route_mouse(&mut self, mouse: MouseEvent) -> Action {
        // Pointer motion never changes state
        if !self.mouse_enabled
            || self.logs_dialog.is_visible()
            || matches!(mouse.kind, MouseEventKind::Moved | MouseEventKind::Drag(_))
        {
            return Action::None;
        }

        match self.input.handle_mouse_events(mouse) {
            Action::None => self.task_list.handle_mouse_events(mouse),
            action => action,
        }
    }

    /// Apply an action to the store and view state
    pub fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::CreateTask(title) => match self.store.create(&title) {
                Ok(task) => {
                    self.logger
                        .log(format!("{} {} '{}'", LOG_TASK_CREATED, task.id, task.title));
                    self.input.clear();
                    self.state.error_message = None;
                    self.set_focus(Focus::Input);
                }
                Err(e) => {
                    self.logger.log(format!("{}: {}", LOG_TASK_REJECTED, e));
                    self.state.error_message = Some(e.to_string());
                }
            },
            Action::ToggleTask(id) => match self.store.toggle(id) {
                Some(is_complete) => {
                    self.logger
                        .log(format!("{} {} (complete: {})", LOG_TASK_TOGGLED, id, is_complete));
                }
                None => log::debug!("{} {}", LOG_TASK_MISSING, id),
            },
            Action::RemoveTask(id) => match self.store.remove(id) {
                Some(task) => {
                    self.logger
                        .log(format!("{} {} '{}'", LOG_TASK_REMOVED, task.id, task.title));
                }
                None => log::debug!("{} {}", LOG_TASK_MISSING, id),
            },
            Action::FocusInput => self.set_focus(Focus::Input),
            Action::FocusList => self.set_focus(Focus::List),
            Action::CycleIconTheme => {
                self.icons.cycle_icon_theme();
                self.logger
                    .log(format!("UI: icon theme set to {:?}", self.icons.theme()));
                self.input.set_icons(self.icons.clone());
                self.task_list.set_icons(self.icons.clone());
            }
            Action::ShowLogs(true) => {
                self.logs_dialog.show(self.logger.get_logs());
            }
            Action::ShowLogs(false) => self.logs_dialog.hide(),
            Action::Quit => {
                self.logger.log("App: quitting".to_string());
                self.should_quit = true;
            }
            Action::None => {}
        }

        self.sync_component_data();
        Action::None
    }

    /// Process an event through the component hierarchy
    ///
    /// Returns whether the screen needs to be redrawn.
    pub fn handle_event(&mut self, event_type: EventType) -> bool {
        let (action, needs_render) = match event_type {
            // Keys may edit component state without producing an action
            EventType::Key(key) => (self.route_key(key), true),
            EventType::Mouse(mouse) => {
                let action = self.route_mouse(mouse);
                let changed = action != Action::None;
                (action, changed)
            }
            EventType::Resize(_, _) => (Action::None, true),
            EventType::Tick | EventType::Other => (Action::None, false),
        };

        let action = self.update(action);
        self.handle_app_action(action);
        needs_render
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.route_key(key)
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        self.route_mouse(mouse)
    }

    fn update(&mut self, action: Action) -> Action {
        let action = self.input.update(action);
        self.task_list.update(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let [form_area, list_area, status_area] = LayoutManager::main_layout(rect);

        self.input.render(f, form_area);
        self.task_list.render(f, list_area);
        StatusBar::render(
            f,
            status_area,
            self.state.focus,
            self.store.completed_count(),
            self.store.len(),
        );

        self.logs_dialog.render(f, rect);
    }
}
