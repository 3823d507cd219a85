//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::oneshot;

use crate::api::{ApiError, DetailRecord, ListEntry, PokeApi, Stat};
use crate::core::group::group;
use crate::core::state::{App, StalePolicy};
use crate::core::tree::CatalogTree;

/// Holds a scripted detail response back until released.
pub struct Gate(oneshot::Sender<()>);

impl Gate {
    pub fn release(self) {
        let _ = self.0.send(());
    }
}

struct Scripted {
    result: Result<DetailRecord, ApiError>,
    gate: Option<oneshot::Receiver<()>>,
}

/// A [`PokeApi`] whose answers are set up by the test.
///
/// Each scripted locator answers once. Unscripted locators fail with a
/// network error, the same way an unreachable host would.
pub struct ScriptedApi {
    catalog: Result<Vec<ListEntry>, ApiError>,
    details: Mutex<HashMap<String, Scripted>>,
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self::with_catalog(Ok(test_entries()))
    }

    pub fn with_catalog(catalog: Result<Vec<ListEntry>, ApiError>) -> Self {
        Self {
            catalog,
            details: Mutex::new(HashMap::new()),
        }
    }

    /// Answers `locator` immediately.
    pub fn respond(&self, locator: &str, result: Result<DetailRecord, ApiError>) {
        self.script(locator, result, None);
    }

    /// Answers `locator` only once the returned gate is released.
    pub fn gated(&self, locator: &str, result: Result<DetailRecord, ApiError>) -> Gate {
        let (tx, rx) = oneshot::channel();
        self.script(locator, result, Some(rx));
        Gate(tx)
    }

    fn script(
        &self,
        locator: &str,
        result: Result<DetailRecord, ApiError>,
        gate: Option<oneshot::Receiver<()>>,
    ) {
        self.details
            .lock()
            .unwrap()
            .insert(locator.to_string(), Scripted { result, gate });
    }
}

#[async_trait]
impl PokeApi for ScriptedApi {
    async fn fetch_catalog(&self) -> Result<Vec<ListEntry>, ApiError> {
        self.catalog.clone()
    }

    async fn fetch_detail(&self, locator: &str) -> Result<DetailRecord, ApiError> {
        let scripted = self.details.lock().unwrap().remove(locator);
        let Some(scripted) = scripted else {
            return Err(ApiError::Network(format!("no route to {locator}")));
        };
        if let Some(gate) = scripted.gate {
            let _ = gate.await;
        }
        scripted.result
    }
}

/// Entry whose locator is `mock://<name>`.
pub fn test_entry(name: &str) -> ListEntry {
    ListEntry::new(name, format!("mock://{name}"))
}

/// Four entries in three groups: B, P (two members), S.
pub fn test_entries() -> Vec<ListEntry> {
    ["pikachu", "squirtle", "Pidgey", "bulbasaur"]
        .iter()
        .map(|name| test_entry(name))
        .collect()
}

pub fn record(name: &str, id: u32) -> DetailRecord {
    DetailRecord {
        name: name.to_string(),
        id,
        height: 7,
        weight: 69,
        base_experience: Some(64),
        types: vec!["grass".to_string(), "poison".to_string()],
        abilities: vec!["overgrow".to_string()],
        stats: vec![
            Stat {
                name: "hp".to_string(),
                value: 45,
            },
            Stat {
                name: "speed".to_string(),
                value: 45,
            },
        ],
    }
}

/// Creates an App over [`test_entries`] with the default stale policy.
pub fn test_app() -> App {
    App::new(
        CatalogTree::new(group(test_entries()).groups),
        StalePolicy::default(),
    )
}

/// Every cell of a `TestBackend` terminal, one line per row.
pub fn buffer_text(terminal: &ratatui::Terminal<ratatui::backend::TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}
