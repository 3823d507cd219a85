//! # TUI Adapter
//!
//! The ratatui-specific layer. Owns the terminal, renders the UI, and
//! translates keyboard events into core actions.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Update Path
//!
//! The event loop is the UI-owning context. Each iteration it:
//!
//! 1. draws, if anything changed since the last frame;
//! 2. waits briefly for terminal input and handles every pending event;
//! 3. drains the action channel that background detail fetches report into.
//!
//! Step 3 is the only way fetch results reach `App`, so the detail pane is
//! written from exactly one thread.

mod component;
pub mod components;
pub mod event;
mod ui;

use std::io;
use std::sync::Arc;
use std::time::Duration;

use log::{debug, info};
use tokio::sync::mpsc;

use crate::api::PokeApi;
use crate::core::action::{Action, Effect};
use crate::core::coordinator::Coordinator;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{CatalogTreeState, TreeEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Poll timeout while a fetch is in flight, so its result shows up promptly.
const BUSY_POLL: Duration = Duration::from_millis(50);
const IDLE_POLL: Duration = Duration::from_millis(250);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub tree: CatalogTreeState,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            tree: CatalogTreeState::new(),
        }
    }
}

/// Restores the terminal however `run` exits.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        ratatui::restore();
        info!("Terminal restored");
    }
}

/// Runs the browser until the user quits.
///
/// Must be called from inside a tokio runtime: detail fetches are spawned on it.
pub fn run(mut app: App, api: Arc<dyn PokeApi>) -> io::Result<()> {
    // Channel for actions from background tasks
    let (tx, mut rx) = mpsc::unbounded_channel();
    let coordinator = Coordinator::new(api, tx);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::try_init()?;
    let _terminal_guard = TerminalGuard;
    info!("Entering UI loop");

    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let timeout = if app.is_loading() { BUSY_POLL } else { IDLE_POLL };

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        let mut next = poll_event_timeout(timeout)?;
        while let Some(event) = next {
            needs_redraw = true;
            if handle_event(&mut app, &mut tui, &coordinator, event) == Effect::Quit {
                should_quit = true;
                break;
            }
            next = poll_event_immediate()?;
        }

        if should_quit {
            break;
        }

        // Results from background fetches
        if coordinator.drain(&mut app, &mut rx) > 0 {
            needs_redraw = true;
        }
    }

    info!("Quit requested, leaving UI loop");
    Ok(())
}

/// Routes one terminal event. Returns the effect of any core action it caused.
fn handle_event(
    app: &mut App,
    tui: &mut TuiState,
    coordinator: &Coordinator,
    event: TuiEvent,
) -> Effect {
    match event {
        // Resize just needs a redraw
        TuiEvent::Resize => Effect::None,
        TuiEvent::Quit | TuiEvent::ForceQuit => coordinator.dispatch(app, Action::Quit),
        _ => {
            tui.tree.set_row_count(app.tree.row_count());
            let Some(tree_event) = tui.tree.handle_event(&event) else {
                return Effect::None;
            };
            debug!("Tree event: {:?}", tree_event);
            match tree_event {
                TreeEvent::Activate(row) => coordinator.activate(app, row),
                TreeEvent::Collapse(row) => {
                    let Some(group) = app.tree.row(row).map(|r| r.group()) else {
                        return Effect::None;
                    };
                    let effect = coordinator.dispatch(
                        app,
                        Action::SetGroupExpanded {
                            group,
                            expanded: false,
                        },
                    );
                    // keep the cursor on the group that just folded up
                    tui.tree.set_row_count(app.tree.row_count());
                    if let Some(header) = app.tree.header_row(group) {
                        tui.tree.select(header);
                    }
                    effect
                }
                TreeEvent::Expand(row) => {
                    let Some(group) = app.tree.row(row).map(|r| r.group()) else {
                        return Effect::None;
                    };
                    coordinator.dispatch(
                        app,
                        Action::SetGroupExpanded {
                            group,
                            expanded: true,
                        },
                    )
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::DetailPane;
    use crate::test_support::{ScriptedApi, record, test_app};

    fn harness(api: ScriptedApi) -> (App, TuiState, Coordinator, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut tui = TuiState::new();
        let app = test_app();
        tui.tree.set_row_count(app.tree.row_count());
        (app, tui, Coordinator::new(Arc::new(api), tx), rx)
    }

    #[tokio::test]
    async fn test_quit_keys_quit() {
        let (mut app, mut tui, coordinator, _rx) = harness(ScriptedApi::new());
        assert_eq!(
            handle_event(&mut app, &mut tui, &coordinator, TuiEvent::Quit),
            Effect::Quit
        );
        assert_eq!(
            handle_event(&mut app, &mut tui, &coordinator, TuiEvent::ForceQuit),
            Effect::Quit
        );
    }

    #[tokio::test]
    async fn test_enter_on_header_toggles_group() {
        let (mut app, mut tui, coordinator, _rx) = harness(ScriptedApi::new());
        handle_event(&mut app, &mut tui, &coordinator, TuiEvent::Activate);
        assert!(!app.tree.is_expanded(0));
        handle_event(&mut app, &mut tui, &coordinator, TuiEvent::Activate);
        assert!(app.tree.is_expanded(0));
        assert_eq!(app.detail, DetailPane::Empty);
    }

    #[tokio::test]
    async fn test_enter_on_leaf_loads_detail() {
        let api = ScriptedApi::new();
        api.respond("mock://bulbasaur", Ok(record("bulbasaur", 1)));
        let (mut app, mut tui, coordinator, mut rx) = harness(api);

        handle_event(&mut app, &mut tui, &coordinator, TuiEvent::CursorDown);
        let effect = handle_event(&mut app, &mut tui, &coordinator, TuiEvent::Activate);
        assert!(matches!(effect, Effect::FetchDetail { .. }));
        assert!(app.is_loading());

        let action = rx.recv().await.unwrap();
        coordinator.dispatch(&mut app, action);
        assert_eq!(app.detail, DetailPane::Loaded(record("bulbasaur", 1)));
    }

    #[tokio::test]
    async fn test_collapse_from_leaf_moves_cursor_to_header() {
        let (mut app, mut tui, coordinator, _rx) = harness(ScriptedApi::new());
        // rows: B, bulbasaur, P, Pidgey, pikachu, S, squirtle
        tui.tree.select(4);
        handle_event(&mut app, &mut tui, &coordinator, TuiEvent::Collapse);
        assert!(!app.tree.is_expanded(1));
        assert_eq!(tui.tree.selected(), 2);

        handle_event(&mut app, &mut tui, &coordinator, TuiEvent::Expand);
        assert!(app.tree.is_expanded(1));
    }

    #[tokio::test]
    async fn test_resize_is_noop() {
        let (mut app, mut tui, coordinator, _rx) = harness(ScriptedApi::new());
        assert_eq!(
            handle_event(&mut app, &mut tui, &coordinator, TuiEvent::Resize),
            Effect::None
        );
    }
}
