//! Spending breakdown panel
//!
//! Terminal rendition of the spending chart: one bar per expense category,
//! colored with the category's display color, with its total and share of
//! overall spending.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::App;

/// Render the spending breakdown panel
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Spending Overview ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let breakdown = app.ledger.breakdown();

    if breakdown.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "No expenses to display",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                "Add some transactions to see your spending breakdown",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .centered();
        frame.render_widget(empty, inner);
        return;
    }

    let symbol = &app.settings.currency_symbol;
    let bar_width = (inner.width.saturating_sub(30)).max(10) as usize;

    let mut lines = Vec::new();
    for share in &breakdown {
        let color = hex_color(share.category.color());
        let filled = ((share.percentage / 100.0) * bar_width as f64).round() as usize;
        let filled = filled.min(bar_width);

        lines.push(Line::from(vec![
            Span::raw(format!("{} ", share.category.icon())),
            Span::styled(
                format!("{:<14}", share.category.name()),
                Style::default().fg(Color::White),
            ),
            Span::styled("█".repeat(filled), Style::default().fg(color)),
            Span::styled("░".repeat(bar_width - filled), Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!(" {:>5.1}%", share.percentage),
                Style::default().fg(color),
            ),
            Span::styled(
                format!("  {}", share.total.format_with_symbol(symbol)),
                Style::default().fg(Color::Gray),
            ),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Convert a "#RRGGBB" hex string to a terminal color
fn hex_color(hex: &str) -> Color {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 {
        return Color::Gray;
    }
    match (
        u8::from_str_radix(&hex[0..2], 16),
        u8::from_str_radix(&hex[2..4], 16),
        u8::from_str_radix(&hex[4..6], 16),
    ) {
        (Ok(r), Ok(g), Ok(b)) => Color::Rgb(r, g, b),
        _ => Color::Gray,
    }
}
