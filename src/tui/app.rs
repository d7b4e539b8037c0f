//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events:
//! the signed-in user, the session ledger, and the modal form states. The
//! ledger is created empty when the dashboard opens and discarded when it
//! closes; only the audit trail and explicit exports outlive the session.

use crate::audit::{EntityType, Operation};
use crate::config::settings::Settings;
use crate::export::export_session;
use crate::ledger::Ledger;
use crate::models::User;
use crate::storage::Storage;

use super::dialogs::goal::GoalFormState;
use super::dialogs::transaction::TransactionFormState;

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    AddTransaction,
    AddGoal,
}

/// Main application state
pub struct App<'a> {
    /// The storage layer (audit log and export paths)
    pub storage: &'a Storage,

    /// Application settings
    pub settings: &'a Settings,

    /// The signed-in user
    pub user: User,

    /// The session ledger
    pub ledger: Ledger,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Transaction form state
    pub transaction_form: TransactionFormState,

    /// Goal form state
    pub goal_form: GoalFormState,

    /// Status message to display
    pub status_message: Option<String>,
}

impl<'a> App<'a> {
    /// Create a new App instance with an empty session ledger
    pub fn new(storage: &'a Storage, settings: &'a Settings, user: User) -> Self {
        Self {
            storage,
            settings,
            user,
            ledger: Ledger::new(),
            should_quit: false,
            active_dialog: ActiveDialog::None,
            transaction_form: TransactionFormState::new(),
            goal_form: GoalFormState::new(),
            status_message: None,
        }
    }

    /// Whether a dialog is open
    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    /// Open the add-transaction dialog with a fresh form
    pub fn open_transaction_form(&mut self) {
        self.transaction_form = TransactionFormState::new();
        self.active_dialog = ActiveDialog::AddTransaction;
        self.status_message = None;
    }

    /// Open the add-goal dialog with a fresh form
    pub fn open_goal_form(&mut self) {
        self.goal_form = GoalFormState::new();
        self.active_dialog = ActiveDialog::AddGoal;
        self.status_message = None;
    }

    /// Close any open dialog without saving
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Submit the transaction form; on success the dialog closes
    pub fn submit_transaction_form(&mut self) {
        let draft = match self.transaction_form.build_draft() {
            Ok(draft) => draft,
            Err(message) => {
                self.transaction_form.error_message = Some(message);
                return;
            }
        };

        match self.ledger.record_transaction(draft) {
            Ok(txn) => {
                let id = txn.id.to_string();
                let detail = txn.to_string();
                self.status_message = Some(format!("Recorded {}", detail));
                if let Err(e) = self.storage.log_event(
                    Operation::Create,
                    EntityType::Transaction,
                    id,
                    Some(detail),
                ) {
                    self.status_message = Some(format!("Recorded, but audit log failed: {}", e));
                }
                self.close_dialog();
            }
            Err(e) => {
                self.transaction_form.error_message = Some(e.to_string());
            }
        }
    }

    /// Submit the goal form; on success the dialog closes
    pub fn submit_goal_form(&mut self) {
        let draft = match self.goal_form.build_draft() {
            Ok(draft) => draft,
            Err(message) => {
                self.goal_form.error_message = Some(message);
                return;
            }
        };

        match self.ledger.add_goal(draft) {
            Ok(goal) => {
                let id = goal.id.to_string();
                let name = goal.name.clone();
                self.status_message = Some(format!("Created goal '{}'", name));
                if let Err(e) =
                    self.storage
                        .log_event(Operation::Create, EntityType::Goal, id, Some(name))
                {
                    self.status_message = Some(format!("Created, but audit log failed: {}", e));
                }
                self.close_dialog();
            }
            Err(e) => {
                self.goal_form.error_message = Some(e.to_string());
            }
        }
    }

    /// Export the session ledger to the export directory
    pub fn export_session(&mut self) {
        match export_session(
            self.storage.paths(),
            self.ledger.transactions(),
            self.ledger.goals(),
        ) {
            Ok(written) => {
                self.status_message = Some(format!(
                    "Exported {} files to {}",
                    written.len(),
                    self.storage.paths().export_dir().display()
                ));
                let _ = self.storage.log_event(
                    Operation::Export,
                    EntityType::Ledger,
                    self.user.id.to_string(),
                    Some(format!("{} transactions", self.ledger.transactions().len())),
                );
            }
            Err(e) => {
                self.status_message = Some(format!("Export failed: {}", e));
            }
        }
    }
}
