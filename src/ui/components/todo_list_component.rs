use crate::constants::TODO_LIST_TITLE;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

/// Ordered list of every entry, newest at the bottom
pub struct TodoListComponent {
    pub entries: Vec<String>,
    pub list_state: ListState,
}

impl Default for TodoListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoListComponent {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            list_state: ListState::default(),
        }
    }

    pub fn update_data(&mut self, entries: &[String]) {
        if self.entries.len() != entries.len() {
            self.entries = entries.to_vec();
            // Keep the newest entry in view
            self.list_state
                .select(if self.entries.is_empty() { None } else { Some(self.entries.len() - 1) });
        }
    }

    pub fn render(&mut self, f: &mut Frame, rect: Rect) {
        // Duplicates are distinct rows: position plus text identify an item
        let items: Vec<ListItem> = self
            .entries
            .iter()
            .map(|entry| ListItem::new(Line::from(Span::raw(entry.as_str()))))
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("{} ({})", TODO_LIST_TITLE, self.entries.len())),
            )
            .style(Style::default().fg(Color::White));

        f.render_stateful_widget(list, rect, &mut self.list_state);
    }
}
