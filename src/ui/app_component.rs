use crate::constants::{APP_HEADING, KEY_HINTS};
use crate::notifier::Notifier;
use crate::ui::components::{AddButton, TodoInputComponent, TodoListComponent};
use crate::ui::core::{
    actions::Action,
    event_handler::EventType,
    state::{NotificationOutcome, TodoState},
    task_manager::TaskManager,
    Component,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    Frame,
};
use std::sync::Arc;
use tokio::sync::mpsc;

/// The todo entry screen: heading, input, Add control, error line and list
pub struct AppComponent {
    // Component composition
    input: TodoInputComponent,
    add_button: AddButton,
    todo_list: TodoListComponent,

    // Application state
    state: TodoState,

    // Services
    notifier: Arc<dyn Notifier>,
    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,

    should_quit: bool,
}

impl AppComponent {
    pub fn new(notifier: Arc<dyn Notifier>, ignore_stale_failures: bool) -> Self {
        let (task_manager, background_action_rx) = TaskManager::new();

        let mut app = Self {
            input: TodoInputComponent::new(),
            add_button: AddButton::new(),
            todo_list: TodoListComponent::new(),
            state: TodoState::new(ignore_stale_failures),
            notifier,
            task_manager,
            background_action_rx,
            should_quit: false,
        };
        app.sync_component_data();
        app
    }

    pub fn state(&self) -> &TodoState {
        &self.state
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Whether the Add control is currently enabled
    pub fn is_submit_enabled(&self) -> bool {
        self.add_button.is_enabled()
    }

    /// Get the number of in-flight notifications
    pub fn active_task_count(&self) -> usize {
        self.task_manager.task_count()
    }

    /// Update all components with current state
    fn sync_component_data(&mut self) {
        self.input.set_value(self.state.current_value());
        self.add_button.set_enabled(self.state.can_submit());
        self.todo_list.update_data(self.state.entries());
    }

    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => Action::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
            _ => Action::None,
        }
    }

    /// Apply an action to the widget state
    pub fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::Quit => {
                log::info!("Quit requested");
                self.should_quit = true;
                Action::None
            }
            Action::InputChanged(text) => {
                self.state.update_current_value(text);
                Action::None
            }
            Action::Submit => {
                // Enter on a blank input is the disabled button being pressed
                if let Some(submission) = self.state.submit() {
                    log::info!("Todo #{} added: '{}'", submission.id, submission.value);
                    self.task_manager
                        .spawn_notification(Arc::clone(&self.notifier), submission);
                }
                Action::None
            }
            Action::NotificationSucceeded(id) => {
                self.state
                    .record_notification_outcome(id, NotificationOutcome::Succeeded);
                Action::None
            }
            Action::NotificationFailed { id, reason } => {
                self.state
                    .record_notification_outcome(id, NotificationOutcome::Failed(reason));
                Action::None
            }
            Action::None => Action::None,
        }
    }

    /// Drain outcomes reported by background notifications
    pub fn process_background_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();

        while let Ok(action) = self.background_action_rx.try_recv() {
            log::debug!("Background: Received action {:?}", action);
            actions.push(action);
        }

        let finished = self.task_manager.cleanup_finished_tasks();
        if !finished.is_empty() {
            log::trace!("Background: Cleaned up {} finished tasks", finished.len());
        }

        actions
    }

    /// Wait for the next background outcome and apply it
    pub async fn apply_next_background_action(&mut self) -> Option<Action> {
        let action = self.background_action_rx.recv().await?;
        self.handle_app_action(action.clone());
        self.task_manager.cleanup_finished_tasks();
        self.sync_component_data();
        Some(action)
    }

    /// Apply every background outcome that is already available
    pub fn apply_background_actions(&mut self) -> bool {
        let actions = self.process_background_actions();
        let changed = !actions.is_empty();
        for action in actions {
            self.handle_app_action(action);
        }
        self.sync_component_data();
        changed
    }

    /// Process an event through the component hierarchy
    pub fn handle_event(&mut self, event_type: EventType) -> anyhow::Result<()> {
        let action = match event_type {
            EventType::Key(key) => {
                let global_action = self.handle_global_key(key);
                if matches!(global_action, Action::None) {
                    self.input.handle_key_events(key)
                } else {
                    global_action
                }
            }
            EventType::Paste(text) => self.input.insert_str(&text),
            EventType::Resize(_, _) | EventType::Tick | EventType::Other => Action::None,
        };

        let action = self.update(action);
        self.handle_app_action(action);

        // Update component data after any changes
        self.sync_component_data();

        Ok(())
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        // This shouldn't be called directly - use handle_event instead
        self.handle_global_key(key)
    }

    fn update(&mut self, action: Action) -> Action {
        self.input.update(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let chunks = Layout::vertical([
            Constraint::Length(1), // Heading
            Constraint::Length(3), // Input
            Constraint::Length(1), // Add button
            Constraint::Length(1), // Error line
            Constraint::Min(3),    // Todo list
            Constraint::Length(1), // Key hints
        ])
        .split(rect);

        let heading = Paragraph::new(APP_HEADING).style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
        f.render_widget(heading, chunks[0]);

        self.input.render(f, chunks[1]);
        self.add_button.render(f, chunks[2]);

        // An empty message renders nothing visible
        let error = Paragraph::new(self.state.error_message()).style(Style::default().fg(Color::Red));
        f.render_widget(error, chunks[3]);

        self.todo_list.render(f, chunks[4]);

        let hints = Paragraph::new(KEY_HINTS).style(Style::default().fg(Color::DarkGray));
        f.render_widget(hints, chunks[5]);
    }
}
