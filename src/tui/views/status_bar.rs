//! Status bar
//!
//! Shows the most recent status message, or the key hints when there is
//! nothing to report.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let line = if let Some(message) = &app.status_message {
        Line::from(Span::styled(
            format!(" {}", message),
            Style::default().fg(Color::Yellow),
        ))
    } else {
        Line::from(Span::styled(
            " a: add transaction  g: add goal  x: export  q: quit",
            Style::default().fg(Color::DarkGray),
        ))
    };

    frame.render_widget(Paragraph::new(line), area);
}
