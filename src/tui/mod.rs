//! Interactive dashboard
//!
//! A single-page terminal UI: overview cards, spending breakdown, savings
//! goals, and recent transactions, with modal forms for recording
//! transactions and creating goals. This is the UI layer over the session
//! ledger; all business logic lives in `ledger`.

pub mod app;
pub mod dialogs;
pub mod event;
pub mod handler;
pub mod layout;
pub mod terminal;
pub mod views;
pub mod widgets;

pub use terminal::run_tui;
