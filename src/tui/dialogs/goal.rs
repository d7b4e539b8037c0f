//! Goal creation dialog
//!
//! Modal form for creating a savings goal: name, target amount, and target
//! months, with a live preview of the monthly saving the target implies.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::{GoalDraft, Money};
use crate::tui::app::App;
use crate::tui::layout::centered_rect;
use crate::tui::widgets::input::TextInput;

/// Which field is currently focused in the goal form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GoalField {
    #[default]
    Name,
    TargetAmount,
    TargetMonths,
}

impl GoalField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::TargetAmount,
            Self::TargetAmount => Self::TargetMonths,
            Self::TargetMonths => Self::Name,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Name => Self::TargetMonths,
            Self::TargetAmount => Self::Name,
            Self::TargetMonths => Self::TargetAmount,
        }
    }
}

/// State for the goal form dialog
#[derive(Debug, Clone)]
pub struct GoalFormState {
    /// Currently focused field
    pub focused_field: GoalField,

    /// Name input
    pub name_input: TextInput,

    /// Target amount input
    pub amount_input: TextInput,

    /// Target months input
    pub months_input: TextInput,

    /// Error message to display
    pub error_message: Option<String>,
}

impl Default for GoalFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl GoalFormState {
    /// Create a new form state
    pub fn new() -> Self {
        let mut state = Self {
            focused_field: GoalField::Name,
            name_input: TextInput::new()
                .label("Name")
                .placeholder("e.g., Buy a motorcycle"),
            amount_input: TextInput::new().label("Target").placeholder("50000"),
            months_input: TextInput::new().label("Months").placeholder("12"),
            error_message: None,
        };
        state.update_focus();
        state
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
        self.name_input.focused = self.focused_field == GoalField::Name;
        self.amount_input.focused = self.focused_field == GoalField::TargetAmount;
        self.months_input.focused = self.focused_field == GoalField::TargetMonths;
    }

    /// The text input for the focused field
    pub fn focused_input(&mut self) -> &mut TextInput {
        match self.focused_field {
            GoalField::Name => &mut self.name_input,
            GoalField::TargetAmount => &mut self.amount_input,
            GoalField::TargetMonths => &mut self.months_input,
        }
    }

    /// Monthly saving preview for the current inputs, if they parse
    pub fn monthly_preview(&self) -> Option<Money> {
        let amount = Money::parse(self.amount_input.value()).ok()?;
        let months: u32 = self.months_input.value().trim().parse().ok()?;
        if months == 0 || !amount.is_positive() {
            return None;
        }
        Some(GoalDraft::new("preview", amount, months).monthly_target())
    }

    /// Validate the form and build a draft
    pub fn build_draft(&self) -> Result<GoalDraft, String> {
        let name = self.name_input.value().trim();
        if name.is_empty() {
            return Err("Goal name is required".to_string());
        }

        let amount = Money::parse(self.amount_input.value())
            .map_err(|_| format!("Invalid target amount: {}", self.amount_input.value()))?;
        if !amount.is_positive() {
            return Err("Target amount must be positive".to_string());
        }

        let months: u32 = self
            .months_input
            .value()
            .trim()
            .parse()
            .map_err(|_| format!("Invalid months: {}", self.months_input.value()))?;
        if months == 0 {
            return Err("Target months must be at least 1".to_string());
        }

        Ok(GoalDraft::new(name, amount, months))
    }
}

/// Render the goal form dialog
pub fn render(frame: &mut Frame, app: &App) {
    let state = &app.goal_form;
    let area = centered_rect(46, 11, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Create New Goal ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // name
            Constraint::Length(1),
            Constraint::Length(1), // target
            Constraint::Length(1),
            Constraint::Length(1), // months
            Constraint::Length(1),
            Constraint::Length(1), // preview
            Constraint::Length(1),
            Constraint::Length(1), // error / hint
        ])
        .split(inner);

    frame.render_widget(&state.name_input, rows[0]);
    frame.render_widget(&state.amount_input, rows[2]);
    frame.render_widget(&state.months_input, rows[4]);

    // Live monthly-saving preview, like the original form footer
    if let Some(monthly) = state.monthly_preview() {
        let preview = Line::from(vec![
            Span::styled("You'll need to save ", Style::default().fg(Color::Blue)),
            Span::styled(
                monthly.format_with_symbol(&app.settings.currency_symbol),
                Style::default().fg(Color::Blue).add_modifier(ratatui::style::Modifier::BOLD),
            ),
            Span::styled(" per month", Style::default().fg(Color::Blue)),
        ]);
        frame.render_widget(Paragraph::new(preview), rows[6]);
    }

    let footer = if let Some(error) = &state.error_message {
        Line::from(Span::styled(error.clone(), Style::default().fg(Color::Red)))
    } else {
        Line::from(Span::styled(
            "Tab: next field  Enter: create  Esc: cancel",
            Style::default().fg(Color::DarkGray),
        ))
    };
    frame.render_widget(Paragraph::new(footer), rows[8]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_navigation_wraps() {
        assert_eq!(GoalField::TargetMonths.next(), GoalField::Name);
        assert_eq!(GoalField::Name.prev(), GoalField::TargetMonths);
    }

    #[test]
    fn test_monthly_preview() {
        let mut state = GoalFormState::new();
        assert!(state.monthly_preview().is_none());

        state.amount_input = TextInput::new().content("600");
        state.months_input = TextInput::new().content("6");
        assert_eq!(state.monthly_preview(), Some(Money::from_baht(100)));
    }

    #[test]
    fn test_build_draft_happy_path() {
        let mut state = GoalFormState::new();
        state.name_input = TextInput::new().content("Motorcycle");
        state.amount_input = TextInput::new().content("50000");
        state.months_input = TextInput::new().content("12");

        let draft = state.build_draft().unwrap();
        assert_eq!(draft.name, "Motorcycle");
        assert_eq!(draft.target_amount, Money::from_baht(50000));
        assert_eq!(draft.target_months, 12);
    }

    #[test]
    fn test_build_draft_rejects_bad_input() {
        let mut state = GoalFormState::new();
        state.amount_input = TextInput::new().content("600");
        state.months_input = TextInput::new().content("6");
        assert!(state.build_draft().is_err()); // missing name

        state.name_input = TextInput::new().content("Trip");
        state.months_input = TextInput::new().content("0");
        assert!(state.build_draft().is_err());

        state.months_input = TextInput::new().content("six");
        assert!(state.build_draft().is_err());
    }
}
