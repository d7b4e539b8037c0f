//! Event handling logic
//!
//! Routes key events to the dashboard or to whichever dialog is open.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{ActiveDialog, App};
use super::dialogs::transaction::TransactionField;
use super::event::Event;

/// Handle a terminal event
pub fn handle_event(app: &mut App, event: Event) {
    let key = match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => key,
        _ => return,
    };

    match app.active_dialog {
        ActiveDialog::None => handle_dashboard_key(app, key),
        ActiveDialog::AddTransaction => handle_transaction_form_key(app, key),
        ActiveDialog::AddGoal => handle_goal_form_key(app, key),
    }
}

/// Keys on the dashboard itself
fn handle_dashboard_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.should_quit = true;
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
        }
        KeyCode::Char('a') => {
            app.open_transaction_form();
        }
        KeyCode::Char('g') => {
            app.open_goal_form();
        }
        KeyCode::Char('x') => {
            app.export_session();
        }
        _ => {}
    }
}

/// Keys while the transaction form is open
fn handle_transaction_form_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
        }
        KeyCode::Enter => {
            app.submit_transaction_form();
        }
        KeyCode::Tab | KeyCode::Down => {
            app.transaction_form.next_field();
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.transaction_form.prev_field();
        }
        KeyCode::Left | KeyCode::Right => match app.transaction_form.focused_field {
            TransactionField::Kind => app.transaction_form.toggle_kind(),
            TransactionField::Category => app
                .transaction_form
                .cycle_category(key.code == KeyCode::Right),
            _ => {
                if let Some(input) = app.transaction_form.focused_input() {
                    if key.code == KeyCode::Left {
                        input.move_left();
                    } else {
                        input.move_right();
                    }
                }
            }
        },
        KeyCode::Backspace => {
            if let Some(input) = app.transaction_form.focused_input() {
                input.backspace();
            }
        }
        KeyCode::Char(' ') if app.transaction_form.focused_field == TransactionField::Kind => {
            app.transaction_form.toggle_kind();
        }
        KeyCode::Char(c) => {
            if let Some(input) = app.transaction_form.focused_input() {
                input.insert(c);
            }
        }
        _ => {}
    }

    // Typing clears a stale validation error
    if app.active_dialog == ActiveDialog::AddTransaction
        && !matches!(key.code, KeyCode::Enter)
    {
        app.transaction_form.error_message = None;
    }
}

/// Keys while the goal form is open
fn handle_goal_form_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
        }
        KeyCode::Enter => {
            app.submit_goal_form();
        }
        KeyCode::Tab | KeyCode::Down => {
            app.goal_form.next_field();
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.goal_form.prev_field();
        }
        KeyCode::Left => {
            app.goal_form.focused_input().move_left();
        }
        KeyCode::Right => {
            app.goal_form.focused_input().move_right();
        }
        KeyCode::Backspace => {
            app.goal_form.focused_input().backspace();
        }
        KeyCode::Char(c) => {
            app.goal_form.focused_input().insert(c);
        }
        _ => {}
    }

    if app.active_dialog == ActiveDialog::AddGoal && !matches!(key.code, KeyCode::Enter) {
        app.goal_form.error_message = None;
    }
}
