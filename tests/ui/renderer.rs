use crate::support::RecordingNotifier;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::Duration;
use todolist::ui::core::EventType;
use todolist::ui::renderer::{handle_loop_event, TerminalRestore};
use todolist::ui::AppComponent;

fn key_event(c: char) -> EventType {
    EventType::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
}

#[tokio::test]
async fn test_outcomes_are_applied_while_keys_keep_arriving() {
    let mut app = AppComponent::new(Arc::new(RecordingNotifier::failing()), true);

    for c in "Write tests".chars() {
        handle_loop_event(&mut app, key_event(c)).unwrap();
    }
    handle_loop_event(&mut app, EventType::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))).unwrap();

    // Let the notification task run to completion
    tokio::time::sleep(Duration::from_millis(20)).await;

    // No tick in between, only more typing
    assert!(handle_loop_event(&mut app, key_event('x')).unwrap());
    assert_eq!(app.state().error_message(), "Oups");
    assert_eq!(app.state().current_value(), "x");
}

#[tokio::test]
async fn test_tick_without_outcomes_needs_no_render() {
    let mut app = AppComponent::new(Arc::new(RecordingNotifier::succeeding()), true);
    assert!(!handle_loop_event(&mut app, EventType::Tick).unwrap());
    assert!(handle_loop_event(&mut app, EventType::Resize(80, 24)).unwrap());
}

#[test]
fn test_terminal_restore_writes_reset_sequences_on_drop() {
    let mut out = Vec::new();
    {
        let _restore = TerminalRestore::new(&mut out);
    }
    let written = String::from_utf8(out).unwrap();

    assert!(written.contains("\x1b[?1049l"), "alternate screen not left: {:?}", written);
    assert!(written.contains("\x1b[?2004l"), "bracketed paste not disabled: {:?}", written);
    assert!(written.contains("\x1b[?25h"), "cursor not shown: {:?}", written);
}
