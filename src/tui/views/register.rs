//! Recent transactions register
//!
//! Lists the most recent transactions newest first, with category icon,
//! note, date, and a signed amount colored by kind.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::TransactionKind;
use crate::tui::app::App;

/// Render the recent-transactions register
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Recent Transactions ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let recent = app
        .ledger
        .recent_transactions(app.settings.recent_transaction_count);

    if recent.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "No transactions yet",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                "Press 'a' to add your first income or expense",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .centered();
        frame.render_widget(empty, inner);
        return;
    }

    let symbol = &app.settings.currency_symbol;

    let mut lines = Vec::new();
    for txn in recent {
        let (sign, color) = match txn.kind() {
            TransactionKind::Income => ("+", Color::Green),
            TransactionKind::Expense => ("-", Color::Red),
        };

        let note = if txn.note.is_empty() {
            String::new()
        } else {
            format!(" · {}", txn.note)
        };

        lines.push(Line::from(vec![
            Span::styled(
                format!("{} ", txn.date.format(&app.settings.date_format)),
                Style::default().fg(Color::DarkGray),
            ),
            Span::raw(format!("{} ", txn.category.icon())),
            Span::styled(
                format!("{:<14}", txn.category.name()),
                Style::default().fg(Color::White),
            ),
            Span::styled(
                format!("{}{}", sign, txn.amount.format_with_symbol(symbol)),
                Style::default().fg(color),
            ),
            Span::styled(note, Style::default().fg(Color::Gray)),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
