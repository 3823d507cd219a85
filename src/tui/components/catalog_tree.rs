//! # Catalog Tree Component
//!
//! The left pane: group headers and their entries as a scrolling list.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `CatalogTreeState` lives in `TuiState` (cursor, scroll offset)
//! - `CatalogTreeView` is created each frame with borrowed rows and state
//!
//! The state only moves the cursor. Activation, collapse and expand are
//! emitted as `TreeEvent`s carrying the row index; the event loop turns them
//! into core actions.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, ListState};

use crate::core::tree::TreeRow;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Events emitted by the tree, each carrying the current row index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeEvent {
    Activate(usize),
    Collapse(usize),
    Expand(usize),
}

/// Persistent state for the tree pane.
pub struct CatalogTreeState {
    pub list_state: ListState,
    /// Number of visible rows. Synced from the core tree before events are handled.
    row_count: usize,
    /// Rows that fit in the pane, updated on every render.
    page_size: usize,
}

impl Default for CatalogTreeState {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogTreeState {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            list_state,
            row_count: 0,
            page_size: 10,
        }
    }

    pub fn selected(&self) -> usize {
        self.list_state.selected().unwrap_or(0)
    }

    /// Moves the cursor to `index`, clamped to the visible rows.
    pub fn select(&mut self, index: usize) {
        let clamped = index.min(self.row_count.saturating_sub(1));
        self.list_state.select(Some(clamped));
    }

    pub fn set_row_count(&mut self, row_count: usize) {
        self.row_count = row_count;
        self.select(self.selected());
    }
}

impl EventHandler for CatalogTreeState {
    type Event = TreeEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<TreeEvent> {
        if self.row_count == 0 {
            return None;
        }
        let current = self.selected();
        match event {
            TuiEvent::CursorUp => self.select(current.saturating_sub(1)),
            TuiEvent::CursorDown => self.select(current + 1),
            TuiEvent::PageUp => self.select(current.saturating_sub(self.page_size)),
            TuiEvent::PageDown => self.select(current + self.page_size),
            TuiEvent::Home => self.select(0),
            TuiEvent::End => self.select(self.row_count - 1),
            TuiEvent::Activate => return Some(TreeEvent::Activate(current)),
            TuiEvent::Collapse => return Some(TreeEvent::Collapse(current)),
            TuiEvent::Expand => return Some(TreeEvent::Expand(current)),
            _ => {}
        }
        None
    }
}

/// Transient render wrapper for the tree pane.
pub struct CatalogTreeView<'a> {
    rows: &'a [TreeRow<'a>],
    state: &'a mut CatalogTreeState,
}

impl<'a> CatalogTreeView<'a> {
    pub fn new(rows: &'a [TreeRow<'a>], state: &'a mut CatalogTreeState) -> Self {
        Self { rows, state }
    }
}

fn row_item(row: &TreeRow<'_>) -> ListItem<'static> {
    match row {
        TreeRow::Header {
            key,
            expanded,
            count,
            ..
        } => {
            let marker = if *expanded { "▾ " } else { "▸ " };
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{marker}{key}"),
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!(" ({count})"), Style::default().fg(Color::DarkGray)),
            ]))
        }
        TreeRow::Leaf { entry, .. } => ListItem::new(format!("    {}", entry.name)),
    }
}

impl Component for CatalogTreeView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.page_size = area.height.saturating_sub(2).max(1) as usize;

        let items: Vec<ListItem> = self.rows.iter().map(row_item).collect();
        let list = List::new(items)
            .block(
                Block::bordered()
                    .title(" Pokémons ")
                    .title_style(Style::default().fg(Color::Green)),
            )
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}
