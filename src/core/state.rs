//! # Application State
//!
//! Core state for the browser. No TUI types here; presentation state (cursor,
//! scroll) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── tree: CatalogTree              // grouped catalog + expansion flags
//! ├── detail: DetailPane             // the one shared view background work feeds
//! ├── status_message: String         // title bar text
//! ├── stale_policy: StalePolicy      // what to do with superseded results
//! ├── current: Option<FetchTicket>   // ticket of the latest selection
//! └── next_ticket: u64
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs,
//! which only ever runs on the UI loop.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::api::{ApiError, DetailRecord};
use crate::core::tree::CatalogTree;

/// Identifies one detail fetch. Issued in increasing order per selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FetchTicket(pub u64);

/// How a detail result is treated when a newer selection was made while it
/// was in flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum StalePolicy {
    /// Drop results whose ticket is not the latest selection's.
    #[default]
    Discard,
    /// Render every result as it arrives; the last one drained wins.
    LastWriteWins,
}

/// Contents of the detail pane.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DetailPane {
    #[default]
    Empty,
    Loading {
        name: String,
    },
    Loaded(DetailRecord),
    Failed {
        name: String,
        error: ApiError,
    },
}

pub struct App {
    pub tree: CatalogTree,
    pub detail: DetailPane,
    pub status_message: String,
    pub stale_policy: StalePolicy,
    pub current: Option<FetchTicket>,
    next_ticket: u64,
}

impl App {
    pub fn new(tree: CatalogTree, stale_policy: StalePolicy) -> Self {
        let status_message = catalog_summary(&tree);
        Self {
            tree,
            detail: DetailPane::Empty,
            status_message,
            stale_policy,
            current: None,
            next_ticket: 0,
        }
    }

    /// Issues the ticket for a new selection and makes it current.
    pub fn issue_ticket(&mut self) -> FetchTicket {
        self.next_ticket += 1;
        let ticket = FetchTicket(self.next_ticket);
        self.current = Some(ticket);
        ticket
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.detail, DetailPane::Loading { .. })
    }
}

/// Default status line: how much of the catalog is loaded.
fn catalog_summary(tree: &CatalogTree) -> String {
    format!(
        "{} Pokémon in {} groups",
        tree.entry_count(),
        tree.group_count()
    )
}
