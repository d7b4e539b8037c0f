//! Dashboard layout
//!
//! Splits the terminal into the fixed dashboard regions: header, overview
//! cards, the spending/goals pair, the transaction register, and the status
//! bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Computed layout regions for the dashboard
pub struct AppLayout {
    pub header: Rect,
    pub cards: Rect,
    pub spending: Rect,
    pub goals: Rect,
    pub register: Rect,
    pub status_bar: Rect,
}

impl AppLayout {
    /// Compute the layout for the full terminal area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),  // header
                Constraint::Length(5),  // overview cards
                Constraint::Min(8),     // spending + goals
                Constraint::Length(8),  // register
                Constraint::Length(1),  // status bar
            ])
            .split(area);

        let middle = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(vertical[2]);

        Self {
            header: vertical[0],
            cards: vertical[1],
            spending: middle[0],
            goals: middle[1],
            register: vertical[3],
            status_bar: vertical[4],
        }
    }
}

/// A rect of the given size centered within `area`, clamped to fit
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}
