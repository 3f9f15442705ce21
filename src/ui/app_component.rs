use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::config::Config;
use crate::constants::{
    APP_TITLE, ERROR_SAVE_FAILED, SUCCESS_COMPLETED_CLEARED, SUCCESS_TASKS_CLEARED, SUCCESS_TASK_ADDED,
    SUCCESS_TASK_COMPLETED,
};
use crate::logger::Logger;
use crate::service::TaskService;
use crate::tasks::Theme;
use crate::ui::components::{
    CompletedListComponent, DialogComponent, FooterComponent, ParticleLayer, StatusBar, TaskInputComponent,
    TaskListComponent,
};
use crate::ui::core::{
    actions::{Action, DialogType, Focus},
    event_handler::EventType,
    Component,
};
use crate::ui::layout::LayoutManager;
use crate::ui::theme::Palette;

/// Root of the component tree. Owns the task service and all UI-local state.
pub struct AppComponent {
    // Component composition
    input: TaskInputComponent,
    task_list: TaskListComponent,
    completed: CompletedListComponent,
    footer: FooterComponent,
    status_bar: StatusBar,
    particles: ParticleLayer,
    dialog: DialogComponent,

    // Services
    service: TaskService,
    logger: Logger,

    // Simple UI state
    focus: Focus,
    palette: Palette,
    should_quit: bool,
}

impl AppComponent {
    pub fn new(service: TaskService, config: &Config, logger: Logger) -> Self {
        let mut dialog = DialogComponent::new();
        dialog.set_logger(logger.clone());

        let mut app = Self {
            input: TaskInputComponent::new(),
            task_list: TaskListComponent::new(),
            completed: CompletedListComponent::new(
                config.ui.show_completed,
                &config.display.completed_time_format,
            ),
            footer: FooterComponent::new(&config.display.date_format, &config.display.time_format),
            status_bar: StatusBar::new(),
            particles: ParticleLayer::new(&config.particles),
            dialog,
            service,
            logger,
            focus: Focus::Input,
            palette: Palette::default(),
            should_quit: false,
        };
        app.apply_theme(app.service.store().theme());
        app.sync_component_data();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn service(&self) -> &TaskService {
        &self.service
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_bar.message()
    }

    /// Push the store snapshot into the components that display it
    fn sync_component_data(&mut self) {
        let store = self.service.store();
        self.task_list.update_data(store.tasks().to_vec());
        self.completed.update_data(store.completed_tasks().to_vec());
    }

    fn apply_theme(&mut self, theme: Theme) {
        self.palette = Palette::for_theme(theme);
        self.particles.set_colors(self.palette.particle, self.palette.background);
        self.footer.set_theme(theme);
    }

    fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        match focus {
            Focus::Input => {
                self.task_list.on_blur();
                self.input.on_focus();
            }
            Focus::TaskList => {
                self.input.on_blur();
                self.task_list.on_focus();
            }
        }
    }

    /// Keys that work whenever the task list has focus
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.logger.log("Global key: quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('?') => Action::ShowDialog(DialogType::Help),
            KeyCode::Char('G') => Action::ShowDialog(DialogType::Logs),
            KeyCode::Char('c') => Action::ToggleCompleted,
            KeyCode::Char('X') => Action::ClearActive,
            KeyCode::Char('C') => Action::ClearCompleted,
            KeyCode::Char('t') => Action::CycleTheme,
            KeyCode::Char('1') => Action::SetTheme(Theme::Dark),
            KeyCode::Char('2') => Action::SetTheme(Theme::Light),
            KeyCode::Char('3') => Action::SetTheme(Theme::Navy),
            _ => Action::None,
        }
    }

    fn route_key(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.logger.log("Global key: Ctrl+C - quitting application".to_string());
            return Action::Quit;
        }

        // Dialog has priority when visible
        if self.dialog.is_visible() {
            return self.dialog.handle_key_events(key);
        }

        match self.focus {
            Focus::Input => self.input.handle_key_events(key),
            Focus::TaskList => {
                let action = self.task_list.handle_key_events(key);
                if action == Action::None {
                    self.handle_global_key(key)
                } else {
                    action
                }
            }
        }
    }

    /// Report the outcome of a task service call on the status line
    fn report(&mut self, result: anyhow::Result<bool>, success: &str) {
        let now = Instant::now();
        match result {
            Ok(true) => self.status_bar.set_message(success, now),
            Ok(false) => {}
            Err(e) => {
                self.logger.log(format!("Save failed: {:#}", e));
                self.status_bar.set_error(ERROR_SAVE_FAILED, now);
            }
        }
    }

    pub async fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::AddTask(text) => {
                let result = self.service.add_task(&text).await;
                self.report(result, SUCCESS_TASK_ADDED);
            }
            Action::CompleteTask(id) => {
                let result = self.service.complete_task(id).await;
                self.report(result, SUCCESS_TASK_COMPLETED);
            }
            Action::CyclePriority(id) => {
                if let Err(e) = self.service.cycle_priority(id).await {
                    self.report(Err(e), "");
                }
            }
            Action::ClearActive => {
                let result = self.service.clear_active().await;
                self.report(result, SUCCESS_TASKS_CLEARED);
            }
            Action::ClearCompleted => {
                let result = self.service.clear_completed().await;
                self.report(result, SUCCESS_COMPLETED_CLEARED);
            }
            Action::SetTheme(theme) => self.change_theme(theme).await,
            Action::CycleTheme => self.change_theme(self.service.store().theme().next()).await,
            Action::ToggleCompleted => self.completed.toggle(),
            Action::Focus(focus) => self.set_focus(focus),
            Action::ShowDialog(dialog_type) => self.dialog.show(dialog_type),
            Action::HideDialog => self.dialog.hide(),
            Action::Quit => {
                self.should_quit = true;
                return Action::Quit;
            }
            Action::None => return Action::None,
        }

        self.sync_component_data();
        Action::None
    }

    async fn change_theme(&mut self, theme: Theme) {
        if theme == self.service.store().theme() {
            return;
        }
        let result = self.service.set_theme(theme).await;
        self.report(result, &format!("Theme: {theme}"));
        self.apply_theme(theme);
        self.particles.theme_changed();
    }

    /// Advance the timers. Returns true when the screen needs redrawing.
    pub fn tick(&mut self, now: Instant) -> bool {
        let clock_changed = self.footer.tick(now);
        let status_expired = self.status_bar.tick(now);
        self.particles.tick(now);
        clock_changed || status_expired || self.particles.is_visible()
    }

    /// Handle one event. Returns true when the screen needs redrawing.
    pub async fn handle_event(&mut self, event_type: EventType) -> anyhow::Result<bool> {
        let action = match event_type {
            EventType::Key(key) => self.route_key(key),
            EventType::Resize(_, _) => return Ok(true),
            EventType::Tick(now) => return Ok(self.tick(now.into_std())),
            EventType::Other => return Ok(false),
        };

        self.handle_app_action(action).await;
        Ok(true)
    }

    pub fn render(&mut self, f: &mut Frame, rect: Rect) {
        let palette = self.palette;

        f.render_widget(Block::default().style(palette.base()), rect);
        // Bubbles go underneath everything else
        f.render_widget(&self.particles, rect);

        let areas = LayoutManager::main_layout(rect, self.completed.height());

        let header = Paragraph::new(APP_TITLE)
            .alignment(Alignment::Center)
            .style(Style::default().fg(palette.header).add_modifier(Modifier::BOLD))
            .block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .border_style(Style::default().fg(palette.muted)),
            );
        f.render_widget(header, areas.header);

        self.input.render(f, areas.input, &palette);
        self.task_list.render(f, areas.tasks, &palette);
        self.completed.render(f, areas.completed, &palette);
        self.status_bar.render(f, areas.status, self.focus, &palette);
        self.footer.render(f, areas.footer, &palette);

        // Render dialog on top if visible
        if self.dialog.is_visible() {
            self.dialog.render(f, rect, &palette);
        }
    }
}
