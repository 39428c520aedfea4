//! Add control, rendered disabled while the input is blank

use crate::constants::ADD_BUTTON_LABEL;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    Frame,
};

#[derive(Debug, Default)]
pub struct AddButton {
    enabled: bool,
}

impl AddButton {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn style(&self) -> Style {
        if self.enabled {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
        }
    }

    pub fn render(&self, f: &mut Frame, rect: Rect) {
        let button = Paragraph::new(format!("[ {} ]", ADD_BUTTON_LABEL))
            .style(self.style())
            .alignment(Alignment::Left);
        f.render_widget(button, rect);
    }
}
