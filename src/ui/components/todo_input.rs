//! Labelled single-line text input bound to the widget's current value.
//!
//! The component never owns the value: every edit is emitted as
//! [`Action::InputChanged`] carrying the full new text, and the app feeds the
//! authoritative value back through [`TodoInputComponent::set_value`].

use crate::constants::{INPUT_LABEL, INPUT_PLACEHOLDER};
use crate::ui::core::{actions::Action, Component};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub struct TodoInputComponent {
    value: String,
    /// Cursor position counted in chars
    cursor_position: usize,
    /// First char shown when the value is wider than the field
    scroll_offset: usize,
}

impl Default for TodoInputComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoInputComponent {
    pub fn new() -> Self {
        Self {
            value: String::new(),
            cursor_position: 0,
            scroll_offset: 0,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    /// Mirror the authoritative value, keeping the cursor inside it
    pub fn set_value(&mut self, value: &str) {
        if self.value != value {
            self.value = value.to_string();
        }
        self.cursor_position = self.cursor_position.min(self.char_count());
    }

    /// Shift the visible window so the cursor stays inside `width` columns
    fn scroll_to_cursor(&mut self, width: usize) {
        if self.cursor_position < self.scroll_offset {
            self.scroll_offset = self.cursor_position;
        } else if self.cursor_position >= self.scroll_offset + width {
            self.scroll_offset = self.cursor_position + 1 - width;
        }
        // Don't leave blank columns on the right once text is deleted
        let max_offset = (self.char_count() + 1).saturating_sub(width);
        self.scroll_offset = self.scroll_offset.min(max_offset);
    }

    fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map(|(offset, _)| offset)
            .unwrap_or(self.value.len())
    }

    /// Insert text at the cursor. Line breaks are dropped since the field is single-line.
    pub fn insert_str(&mut self, text: &str) -> Action {
        let cleaned: String = text.chars().filter(|c| *c != '\n' && *c != '\r').collect();
        if cleaned.is_empty() {
            return Action::None;
        }

        let mut new_value = self.value.clone();
        new_value.insert_str(self.byte_offset(self.cursor_position), &cleaned);
        self.cursor_position += cleaned.chars().count();
        Action::InputChanged(new_value)
    }

    fn delete_before_cursor(&mut self) -> Action {
        if self.cursor_position == 0 {
            return Action::None;
        }
        let mut new_value = self.value.clone();
        new_value.remove(self.byte_offset(self.cursor_position - 1));
        self.cursor_position -= 1;
        Action::InputChanged(new_value)
    }

    fn delete_at_cursor(&mut self) -> Action {
        if self.cursor_position >= self.char_count() {
            return Action::None;
        }
        let mut new_value = self.value.clone();
        new_value.remove(self.byte_offset(self.cursor_position));
        Action::InputChanged(new_value)
    }
}

impl Component for TodoInputComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('u') => {
                    self.cursor_position = 0;
                    Action::InputChanged(String::new())
                }
                _ => Action::None,
            };
        }

        match key.code {
            KeyCode::Enter => Action::Submit,
            KeyCode::Char(c) => {
                let mut buf = [0u8; 4];
                self.insert_str(c.encode_utf8(&mut buf))
            }
            KeyCode::Backspace => self.delete_before_cursor(),
            KeyCode::Delete => self.delete_at_cursor(),
            KeyCode::Left => {
                self.cursor_position = self.cursor_position.saturating_sub(1);
                Action::None
            }
            KeyCode::Right => {
                self.cursor_position = (self.cursor_position + 1).min(self.char_count());
                Action::None
            }
            KeyCode::Home => {
                self.cursor_position = 0;
                Action::None
            }
            KeyCode::End => {
                self.cursor_position = self.char_count();
                Action::None
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(INPUT_LABEL)
            .style(Style::default().fg(Color::Gray));

        let inner_width = rect.width.saturating_sub(2) as usize;
        self.scroll_to_cursor(inner_width.max(1));

        let paragraph = if self.value.is_empty() {
            Paragraph::new(INPUT_PLACEHOLDER).style(
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )
        } else {
            let visible: String = self.value.chars().skip(self.scroll_offset).take(inner_width).collect();
            Paragraph::new(visible).style(Style::default().fg(Color::White))
        };

        f.render_widget(paragraph.block(block), rect);

        if inner_width > 0 {
            let cursor_x = (self.cursor_position - self.scroll_offset) as u16;
            f.set_cursor_position((rect.x + 1 + cursor_x, rect.y + 1));
        }
    }
}
