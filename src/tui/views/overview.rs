//! Overview cards
//!
//! The three dashboard cards: total balance, income, and expenses. The
//! balance is green when non-negative and red when overspent.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::App;

/// Render the overview cards
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let summary = app.ledger.summary();
    let symbol = &app.settings.currency_symbol;

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let balance_color = if summary.balance.is_negative() {
        Color::Red
    } else {
        Color::Green
    };

    render_card(
        frame,
        columns[0],
        "Total Balance",
        summary.balance.format_with_symbol(symbol),
        balance_color,
    );
    render_card(
        frame,
        columns[1],
        "Income",
        summary.total_income.format_with_symbol(symbol),
        Color::Green,
    );
    render_card(
        frame,
        columns[2],
        "Expenses",
        summary.total_expenses.format_with_symbol(symbol),
        Color::Red,
    );
}

fn render_card(frame: &mut Frame, area: Rect, title: &str, value: String, color: Color) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let text = Paragraph::new(Line::from(Span::styled(
        value,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )))
    .block(block)
    .centered();

    frame.render_widget(text, area);
}
