use crate::support::RecordingNotifier;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, layout::Position, style::Color, Terminal};
use std::sync::Arc;
use std::time::Duration;
use todolist::ui::core::{Component, EventType};
use todolist::ui::AppComponent;

const WIDTH: u16 = 40;
const HEIGHT: u16 = 16;

fn draw(app: &mut AppComponent) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    terminal.draw(|f| app.render(f, f.area())).unwrap();
    terminal
}

fn screen_lines(terminal: &Terminal<TestBackend>) -> Vec<String> {
    let buffer = terminal.backend().buffer();
    (0..HEIGHT)
        .map(|y| (0..WIDTH).map(|x| buffer[(x, y)].symbol()).collect::<String>())
        .collect()
}

fn screen_text(terminal: &Terminal<TestBackend>) -> String {
    screen_lines(terminal).join("\n")
}

fn submit(app: &mut AppComponent, text: &str) {
    for c in text.chars() {
        app.handle_event(EventType::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)))
            .unwrap();
    }
    app.handle_event(EventType::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)))
        .unwrap();
}

#[tokio::test]
async fn test_renders_heading_label_placeholder_and_button() {
    let mut app = AppComponent::new(Arc::new(RecordingNotifier::succeeding()), true);
    let terminal = draw(&mut app);
    let text = screen_text(&terminal);

    assert!(text.contains("TodoList"));
    assert!(text.contains("Todo"));
    assert!(text.contains("Type here"));
    assert!(text.contains("[ Add ]"));
    assert!(text.contains("todo-list (0)"));
    assert!(!text.contains("Oups"));
}

#[tokio::test]
async fn test_add_button_style_tracks_enabled_state() {
    let mut app = AppComponent::new(Arc::new(RecordingNotifier::succeeding()), true);

    // Button row sits under the heading and the three-line input box
    let terminal = draw(&mut app);
    assert_eq!(terminal.backend().buffer()[(2, 4)].fg, Color::DarkGray);

    app.handle_event(EventType::Key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE)))
        .unwrap();
    let terminal = draw(&mut app);
    assert_eq!(terminal.backend().buffer()[(2, 4)].bg, Color::Green);
}

#[tokio::test]
async fn test_entries_render_in_append_order_including_duplicates() {
    let notifier = RecordingNotifier::succeeding();
    let mut app = AppComponent::new(Arc::new(notifier), true);

    submit(&mut app, "Write tests");
    submit(&mut app, "Ship it");
    submit(&mut app, "Write tests");

    let terminal = draw(&mut app);
    let lines = screen_lines(&terminal);
    let rows: Vec<usize> = ["Write tests", "Ship it"]
        .iter()
        .map(|item| lines.iter().position(|line| line.contains(item)).unwrap())
        .collect();
    assert!(rows[0] < rows[1]);
    assert_eq!(lines.iter().filter(|line| line.contains("Write tests")).count(), 2);
    assert!(screen_text(&terminal).contains("todo-list (3)"));
    // Input was cleared, so the placeholder is back
    assert!(screen_text(&terminal).contains("Type here"));
}

#[tokio::test]
async fn test_error_literal_visible_after_failed_notification() {
    let mut app = AppComponent::new(Arc::new(RecordingNotifier::failing()), true);
    submit(&mut app, "Write tests");

    assert!(!screen_text(&draw(&mut app)).contains("Oups"));

    tokio::time::timeout(Duration::from_secs(5), app.apply_next_background_action())
        .await
        .unwrap();
    let text = screen_text(&draw(&mut app));
    assert!(text.contains("Oups"));
    assert!(text.contains("Write tests"));
}

#[tokio::test]
async fn test_long_input_scrolls_to_keep_cursor_visible() {
    let mut app = AppComponent::new(Arc::new(RecordingNotifier::succeeding()), true);
    let long = format!("{}TAILEND", "a".repeat(60));
    app.handle_event(EventType::Paste(long.clone())).unwrap();

    // Input text sits on row 2, inside the box borders
    let mut terminal = draw(&mut app);
    let input_row = &screen_lines(&terminal)[2];
    assert!(input_row.contains("TAILEND"), "tail not visible: {:?}", input_row);
    assert_eq!(
        terminal.get_cursor_position().unwrap(),
        Position::new(WIDTH - 2, 2)
    );

    // Jumping home scrolls back to the start
    app.handle_event(EventType::Key(KeyEvent::new(KeyCode::Home, KeyModifiers::NONE)))
        .unwrap();
    let mut terminal = draw(&mut app);
    let input_row = &screen_lines(&terminal)[2];
    assert!(input_row.starts_with("│aaa"));
    assert!(!input_row.contains("TAILEND"));
    assert_eq!(terminal.get_cursor_position().unwrap(), Position::new(1, 2));
    assert_eq!(app.state().current_value(), long);
}
