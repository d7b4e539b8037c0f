//! Savings goals panel
//!
//! One row per goal: icon, name, saved/target, monthly target caption, and a
//! progress bar capped at 100%.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::App;

/// Render the goals panel
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Savings Goals ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let goals = app.ledger.goals();

    if goals.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "No savings goals yet",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                "Press 'g' to add your first goal",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .centered();
        frame.render_widget(empty, inner);
        return;
    }

    let symbol = &app.settings.currency_symbol;
    let bar_width = (inner.width.saturating_sub(6)).max(10) as usize;

    let mut lines = Vec::new();
    for goal in goals {
        let progress = goal.progress();
        let percent = (progress * 100.0).round() as u32;
        let filled = ((progress * bar_width as f64).round() as usize).min(bar_width);

        let progress_color = if goal.is_complete() {
            Color::Green
        } else {
            Color::Blue
        };

        lines.push(Line::from(vec![
            Span::raw(format!("{} ", goal.icon())),
            Span::styled(goal.name.clone(), Style::default().fg(Color::White)),
            Span::styled(
                format!(
                    "  {} / {}",
                    goal.saved.format_with_symbol(symbol),
                    goal.target_amount.format_with_symbol(symbol)
                ),
                Style::default().fg(Color::Gray),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled("█".repeat(filled), Style::default().fg(progress_color)),
            Span::styled(
                "░".repeat(bar_width - filled),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!(
                "  {}% complete · {}/month",
                percent,
                goal.monthly_target.format_with_symbol(symbol)
            ),
            Style::default().fg(Color::DarkGray),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
