//! # Core Application Logic
//!
//! Catalog grouping, the browsable tree, and the selection state machine.
//! Nothing here knows about ratatui or crossterm.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • Coordinator (fetch)  │
//!                    └───────────┬─────────────┘
//!                                │
//!                   ┌────────────┴────────────┐
//!                   ▼                         ▼
//!            ┌────────────┐            ┌────────────┐
//!            │    TUI     │            │    API     │
//!            │  Adapter   │            │  (reqwest) │
//!            │ (ratatui)  │            │            │
//!            └────────────┘            └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`group`]: alphabetic bucketing of the catalog
//! - [`tree`]: expandable tree rows over the groups
//! - [`state`]: the `App` struct, all application state in one place
//! - [`action`]: the `Action` enum and the `update()` reducer
//! - [`coordinator`]: spawns detail fetches and routes results back
//! - [`catalog`]: startup loading
//! - [`config`]: settings and their override hierarchy

pub mod action;
pub mod catalog;
pub mod config;
pub mod coordinator;
pub mod group;
pub mod state;
pub mod tree;
