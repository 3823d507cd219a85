//! # Actions
//!
//! Everything that can happen in the browser becomes an `Action`.
//! User activates a leaf? That's `Action::SelectEntry(entry)`.
//! A background fetch finishes? That's `Action::DetailLoaded { .. }`.
//!
//! `update()` applies an action to the state and returns the `Effect` the
//! caller has to carry out. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info, warn};

use crate::api::{ApiError, DetailRecord, ListEntry};
use crate::core::state::{App, DetailPane, FetchTicket, StalePolicy};

#[derive(Debug)]
pub enum Action {
    /// Expand or collapse a group header.
    ToggleGroup(usize),
    SetGroupExpanded { group: usize, expanded: bool },
    /// A leaf was activated.
    SelectEntry(ListEntry),
    /// A background detail fetch finished.
    DetailLoaded {
        ticket: FetchTicket,
        entry: ListEntry,
        result: Result<DetailRecord, ApiError>,
    },
    Quit,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Start the detail fetch for `entry`, tagged with `ticket`.
    FetchDetail { ticket: FetchTicket, entry: ListEntry },
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::ToggleGroup(group) => {
            app.tree.toggle(group);
            Effect::None
        }
        Action::SetGroupExpanded { group, expanded } => {
            app.tree.set_expanded(group, expanded);
            Effect::None
        }
        Action::SelectEntry(entry) => {
            let ticket = app.issue_ticket();
            info!("Selected {} ({:?})", entry.name, ticket);
            app.detail = DetailPane::Loading {
                name: entry.name.clone(),
            };
            app.status_message = format!("Loading {}...", entry.name);
            Effect::FetchDetail { ticket, entry }
        }
        Action::DetailLoaded {
            ticket,
            entry,
            result,
        } => {
            let is_current = app.current == Some(ticket);
            if !is_current && app.stale_policy == StalePolicy::Discard {
                debug!(
                    "Discarding stale detail for {} ({:?}, current {:?})",
                    entry.name, ticket, app.current
                );
                return Effect::None;
            }
            if !is_current {
                warn!(
                    "Rendering superseded detail for {} ({:?}, current {:?})",
                    entry.name, ticket, app.current
                );
            }

            match result {
                Ok(record) => {
                    app.status_message = format!("{} (#{})", record.name, record.id);
                    app.detail = DetailPane::Loaded(record);
                }
                Err(error) => {
                    info!("Detail fetch for {} failed: {}", entry.name, error);
                    app.status_message = format!("Failed to load {}", entry.name);
                    app.detail = DetailPane::Failed {
                        name: entry.name,
                        error,
                    };
                }
            }
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
