use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{CatalogTreeView, DetailView, KeyHints, TitleBar};

/// Title bar on top, key hints at the bottom, tree and detail side by side
/// (1:2) in between.
pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Fill, Length, Min};
    let [title_area, main_area, hints_area] =
        Layout::vertical([Length(1), Min(0), Length(1)]).areas(frame.area());
    let [tree_area, detail_area] = Layout::horizontal([Fill(1), Fill(2)]).areas(main_area);

    TitleBar::new(app.status_message.clone(), app.is_loading()).render(frame, title_area);

    let rows = app.tree.rows();
    tui.tree.set_row_count(rows.len());
    CatalogTreeView::new(&rows, &mut tui.tree).render(frame, tree_area);

    DetailView::new(&app.detail).render(frame, detail_area);

    KeyHints.render(frame, hints_area);
}
