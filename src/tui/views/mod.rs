//! TUI views module
//!
//! The dashboard is a single page: header, overview cards, the spending and
//! goals panels side by side, the recent-transactions register, and the
//! status bar, with modal dialogs rendered on top.

pub mod goals;
pub mod overview;
pub mod register;
pub mod spending;
pub mod status_bar;

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    // Header
    let header = Line::from(vec![
        Span::styled(
            " Personal Finance Tracker",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  —  {}", app.user.name),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(header), layout.header);

    overview::render(frame, app, layout.cards);
    spending::render(frame, app, layout.spending);
    goals::render(frame, app, layout.goals);
    register::render(frame, app, layout.register);
    status_bar::render(frame, app, layout.status_bar);

    // Render dialog if active
    match app.active_dialog {
        ActiveDialog::AddTransaction => dialogs::transaction::render(frame, app),
        ActiveDialog::AddGoal => dialogs::goal::render(frame, app),
        ActiveDialog::None => {}
    }
}
