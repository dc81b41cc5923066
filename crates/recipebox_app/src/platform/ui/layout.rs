use ratatui::layout::{Constraint, Layout, Rect};

/// Header (search + filter row), card list, help line.
pub(crate) fn split(area: Rect) -> (Rect, Rect, Rect) {
    let [header, cards, help] = Layout::vertical([
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(area);
    (header, cards, help)
}
