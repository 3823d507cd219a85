//! # TUI Components
//!
//! ## Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: app name and status message
//! - `DetailView`: the detail pane for the current `DetailPane` value
//! - `KeyHints`: key binding footer
//!
//! ## Stateful Components (Event-Driven)
//!
//! - `CatalogTreeState` / `CatalogTreeView`: cursor over the grouped catalog,
//!   emitting `TreeEvent`s
//!
//! Each component file holds its state, events, rendering and tests.

pub mod catalog_tree;
pub mod detail_pane;
pub mod key_hints;
mod title_bar;

pub use catalog_tree::{CatalogTreeState, CatalogTreeView, TreeEvent};
pub use detail_pane::DetailView;
pub use key_hints::KeyHints;
pub use title_bar::TitleBar;
