//! # Selection Coordinator
//!
//! Turns tree activations into state changes and background fetches, and
//! brings fetch results back onto the UI loop.
//!
//! ```text
//!   UI loop                                   tokio worker
//!   ───────                                   ────────────
//!   activate(row)
//!     └─ update(SelectEntry)  → pane = Loading
//!     └─ spawn_fetch(ticket) ───────────────▶ api.fetch_detail(locator)
//!                                                  │
//!   drain(rx)  ◀──── Action::DetailLoaded ─────────┘  (tx.send only)
//!     └─ update(DetailLoaded) → pane = Loaded | Failed
//! ```
//!
//! Background tasks never touch `App`. They only send an action through the
//! unbounded channel; the UI loop is the single consumer and the only writer
//! of the detail pane.

use std::sync::Arc;

use log::{debug, info, warn};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};

use crate::api::{ListEntry, PokeApi};
use crate::core::action::{Action, Effect, update};
use crate::core::state::{App, FetchTicket};
use crate::core::tree::TreeRow;

/// The action a tree row produces when activated: headers toggle, leaves select.
pub fn selection_action(row: &TreeRow<'_>) -> Action {
    match row.reference() {
        Some(entry) => Action::SelectEntry(entry.clone()),
        None => Action::ToggleGroup(row.group()),
    }
}

pub struct Coordinator {
    api: Arc<dyn PokeApi>,
    tx: UnboundedSender<Action>,
}

impl Coordinator {
    pub fn new(api: Arc<dyn PokeApi>, tx: UnboundedSender<Action>) -> Self {
        Self { api, tx }
    }

    /// Applies `action` and carries out the effect it asks for.
    ///
    /// Must be called from the UI loop.
    pub fn dispatch(&self, app: &mut App, action: Action) -> Effect {
        let effect = update(app, action);
        if let Effect::FetchDetail { ticket, entry } = &effect {
            self.spawn_fetch(*ticket, entry.clone());
        }
        effect
    }

    /// Activates the visible row at `index`. Out-of-range rows do nothing.
    pub fn activate(&self, app: &mut App, index: usize) -> Effect {
        let Some(action) = app.tree.row(index).as_ref().map(selection_action) else {
            return Effect::None;
        };
        self.dispatch(app, action)
    }

    /// Applies every queued result without blocking. Returns how many were applied.
    pub fn drain(&self, app: &mut App, rx: &mut UnboundedReceiver<Action>) -> usize {
        let mut applied = 0;
        while let Ok(action) = rx.try_recv() {
            debug!("Event loop received: {:?}", action);
            self.dispatch(app, action);
            applied += 1;
        }
        applied
    }

    fn spawn_fetch(&self, ticket: FetchTicket, entry: ListEntry) {
        info!("Spawning detail fetch for {} ({:?})", entry.name, ticket);
        let api = self.api.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = api.fetch_detail(&entry.locator).await;
            if tx
                .send(Action::DetailLoaded {
                    ticket,
                    entry,
                    result,
                })
                .is_err()
            {
                warn!("Failed to deliver detail for {:?}: receiver dropped", ticket);
            }
        });
    }
}
