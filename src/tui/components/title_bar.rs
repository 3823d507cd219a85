//! # TitleBar Component
//!
//! Top status bar: application name plus the current status message
//! (catalog size, "Loading bulbasaur...", the selected entry).
//!
//! Stateless: it receives everything as props and renders a single line.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar {
    pub status_message: String,
    /// Dims the status while a fetch is in flight.
    pub is_loading: bool,
}

impl TitleBar {
    pub fn new(status_message: String, is_loading: bool) -> Self {
        Self {
            status_message,
            is_loading,
        }
    }

    fn line(&self) -> Line<'_> {
        let status_style = if self.is_loading {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };
        let mut spans = vec![Span::styled(
            "Pokédex",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )];
        if !self.status_message.is_empty() {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(self.status_message.as_str(), status_style));
        }
        Line::from(spans)
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(self.line(), area);
    }
}
