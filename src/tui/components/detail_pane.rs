//! # Detail Pane Component
//!
//! Stateless render of `core::state::DetailPane`. The pane is rebuilt from
//! scratch every frame, so "clear and write" is just whatever the current
//! `DetailPane` value says.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::api::DetailRecord;
use crate::core::state::DetailPane;
use crate::tui::component::Component;

pub struct DetailView<'a> {
    pane: &'a DetailPane,
}

impl<'a> DetailView<'a> {
    pub fn new(pane: &'a DetailPane) -> Self {
        Self { pane }
    }
}

impl Component for DetailView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let paragraph = Paragraph::new(detail_text(self.pane))
            .block(Block::bordered().title(" Details "))
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }
}

fn field(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{label}: "),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(value),
    ])
}

fn record_lines(record: &DetailRecord) -> Vec<Line<'static>> {
    let base_experience = record
        .base_experience
        .map_or_else(|| "unknown".to_string(), |xp| xp.to_string());

    let mut lines = vec![
        field("Name", record.name.clone()),
        field("ID", record.id.to_string()),
        field("Height", record.height.to_string()),
        field("Weight", record.weight.to_string()),
        field("Base XP", base_experience),
        field("Types", record.types.join(", ")),
        field("Abilities", record.abilities.join(", ")),
        Line::from(Span::styled(
            "Stats:",
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];
    lines.extend(
        record
            .stats
            .iter()
            .map(|stat| Line::from(format!("  {}: {}", stat.name, stat.value))),
    );
    lines
}

/// The text the pane shows for `pane`.
pub fn detail_text(pane: &DetailPane) -> Text<'static> {
    match pane {
        DetailPane::Empty => Text::from(Line::from(Span::styled(
            "Select a Pokémon from the list",
            Style::default().fg(Color::DarkGray),
        ))),
        DetailPane::Loading { name } => Text::from(format!("Loading {name}...")),
        DetailPane::Loaded(record) => Text::from(record_lines(record)),
        DetailPane::Failed { error, .. } => {
            let style = Style::default().fg(Color::Red);
            Text::from(Line::from(vec![
                Span::styled("Error: ", style.add_modifier(Modifier::BOLD)),
                Span::styled(error.to_string(), style),
            ]))
        }
    }
}
