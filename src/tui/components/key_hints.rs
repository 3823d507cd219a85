//! Bottom line listing the key bindings.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

const HINTS: &[(&str, &str)] = &[
    ("↑↓", "move"),
    ("Enter", "select/toggle"),
    ("←→", "collapse/expand"),
    ("q", "quit"),
];

pub struct KeyHints;

impl Component for KeyHints {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let key_style = Style::default().fg(Color::Cyan);
        let text_style = Style::default().fg(Color::DarkGray);
        let spans: Vec<Span> = HINTS
            .iter()
            .flat_map(|(key, action)| {
                [
                    Span::styled(format!(" {key} "), key_style),
                    Span::styled(format!("{action} "), text_style),
                ]
            })
            .collect();
        frame.render_widget(Line::from(spans), area);
    }
}
