//! Transaction entry dialog
//!
//! Modal form for recording a transaction: kind toggle, amount, category
//! picker, optional note, and date. Mirrors the field order of the add
//! transaction form the dashboard opens from its action button.

use chrono::{Local, NaiveDate};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::{Category, Money, TransactionDraft, TransactionKind};
use crate::tui::app::App;
use crate::tui::layout::centered_rect;
use crate::tui::widgets::input::TextInput;

/// Which field is currently focused in the transaction form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransactionField {
    #[default]
    Kind,
    Amount,
    Category,
    Note,
    Date,
}

impl TransactionField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Kind => Self::Amount,
            Self::Amount => Self::Category,
            Self::Category => Self::Note,
            Self::Note => Self::Date,
            Self::Date => Self::Kind,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Kind => Self::Date,
            Self::Amount => Self::Kind,
            Self::Category => Self::Amount,
            Self::Note => Self::Category,
            Self::Date => Self::Note,
        }
    }
}

/// State for the transaction form dialog
#[derive(Debug, Clone)]
pub struct TransactionFormState {
    /// Currently focused field
    pub focused_field: TransactionField,

    /// Selected transaction kind
    pub kind: TransactionKind,

    /// Index into the category set for the selected kind
    pub category_index: usize,

    /// Amount input
    pub amount_input: TextInput,

    /// Note input
    pub note_input: TextInput,

    /// Date input
    pub date_input: TextInput,

    /// Error message to display
    pub error_message: Option<String>,
}

impl Default for TransactionFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionFormState {
    /// Create a new form state with default values
    pub fn new() -> Self {
        let today = Local::now().date_naive();
        let mut state = Self {
            focused_field: TransactionField::Kind,
            kind: TransactionKind::Expense,
            category_index: 0,
            amount_input: TextInput::new().label("Amount").placeholder("0.00"),
            note_input: TextInput::new().label("Note").placeholder("Add a note..."),
            date_input: TextInput::new()
                .label("Date")
                .placeholder("YYYY-MM-DD")
                .content(today.format("%Y-%m-%d").to_string()),
            error_message: None,
        };
        state.update_focus();
        state
    }

    /// The currently selected category
    pub fn selected_category(&self) -> Category {
        let set = Category::for_kind(self.kind);
        set[self.category_index % set.len()]
    }

    /// Toggle between expense and income; resets the category selection
    /// since each kind has its own set
    pub fn toggle_kind(&mut self) {
        self.kind = match self.kind {
            TransactionKind::Expense => TransactionKind::Income,
            TransactionKind::Income => TransactionKind::Expense,
        };
        self.category_index = 0;
    }

    /// Move the category selection
    pub fn cycle_category(&mut self, forward: bool) {
        let len = Category::for_kind(self.kind).len();
        if forward {
            self.category_index = (self.category_index + 1) % len;
        } else {
            self.category_index = (self.category_index + len - 1) % len;
        }
    }

    /// Move to the next field
    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
        self.update_focus();
    }

    /// Move to the previous field
    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
        self.update_focus();
    }

    /// Update which input has focus
    fn update_focus(&mut self) {
        self.amount_input.focused = self.focused_field == TransactionField::Amount;
        self.note_input.focused = self.focused_field == TransactionField::Note;
        self.date_input.focused = self.focused_field == TransactionField::Date;
    }

    /// The text input for the focused field, if it is one
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            TransactionField::Amount => Some(&mut self.amount_input),
            TransactionField::Note => Some(&mut self.note_input),
            TransactionField::Date => Some(&mut self.date_input),
            TransactionField::Kind | TransactionField::Category => None,
        }
    }

    /// Validate the form and build a draft
    pub fn build_draft(&self) -> Result<TransactionDraft, String> {
        let amount = Money::parse(self.amount_input.value())
            .map_err(|_| format!("Invalid amount: {}", self.amount_input.value()))?;
        if amount.is_negative() {
            return Err("Amount cannot be negative".to_string());
        }
        if amount.is_zero() {
            return Err("Amount is required".to_string());
        }

        let date = NaiveDate::parse_from_str(self.date_input.value(), "%Y-%m-%d")
            .map_err(|_| format!("Invalid date: {}", self.date_input.value()))?;

        Ok(TransactionDraft::with_note(
            self.selected_category(),
            amount,
            date,
            self.note_input.value().trim(),
        ))
    }
}

/// Render the transaction form dialog
pub fn render(frame: &mut Frame, app: &App) {
    let state = &app.transaction_form;
    let area = centered_rect(46, 14, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Add Transaction ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // kind
            Constraint::Length(1),
            Constraint::Length(1), // amount
            Constraint::Length(1),
            Constraint::Length(1), // category
            Constraint::Length(1),
            Constraint::Length(1), // note
            Constraint::Length(1),
            Constraint::Length(1), // date
            Constraint::Length(1),
            Constraint::Length(1), // error / hint
        ])
        .split(inner);

    // Kind toggle, styled like a radio group
    let kind_style = |selected: bool, color: Color| {
        if selected {
            Style::default().fg(color).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    };
    let kind_label = if state.focused_field == TransactionField::Kind {
        Span::styled("Type", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
    } else {
        Span::styled("Type", Style::default().fg(Color::Cyan))
    };
    let radio = |selected: bool| if selected { "(•)" } else { "( )" };
    let kind_line = Line::from(vec![
        kind_label,
        Span::raw(": "),
        Span::styled(
            format!("{} Expense", radio(state.kind == TransactionKind::Expense)),
            kind_style(state.kind == TransactionKind::Expense, Color::Red),
        ),
        Span::raw("   "),
        Span::styled(
            format!("{} Income", radio(state.kind == TransactionKind::Income)),
            kind_style(state.kind == TransactionKind::Income, Color::Green),
        ),
    ]);
    frame.render_widget(Paragraph::new(kind_line), rows[0]);

    frame.render_widget(&state.amount_input, rows[2]);

    // Category picker
    let category = state.selected_category();
    let category_label = if state.focused_field == TransactionField::Category {
        Span::styled(
            "Category",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled("Category", Style::default().fg(Color::Cyan))
    };
    let category_line = Line::from(vec![
        category_label,
        Span::raw(": "),
        Span::raw("< "),
        Span::raw(category.icon()),
        Span::raw(" "),
        Span::styled(category.name(), Style::default().fg(Color::White)),
        Span::raw(" >"),
    ]);
    frame.render_widget(Paragraph::new(category_line), rows[4]);

    frame.render_widget(&state.note_input, rows[6]);
    frame.render_widget(&state.date_input, rows[8]);

    // Error message or key hints
    let footer = if let Some(error) = &state.error_message {
        Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red),
        ))
    } else {
        Line::from(Span::styled(
            "Tab: next field  ←/→: change  Enter: save  Esc: cancel",
            Style::default().fg(Color::DarkGray),
        ))
    };
    frame.render_widget(Paragraph::new(footer), rows[10]);
}
