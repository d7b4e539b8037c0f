//! satang - Terminal-based personal finance tracker with savings goals
//!
//! This library provides the core functionality for the satang application:
//! an income/expense ledger with proportional income-to-goal allocation,
//! behind a terminal dashboard.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, transactions, categories, goals, users)
//! - `ledger`: The session ledger, allocation engine, and aggregation
//! - `storage`: JSON file storage for accounts and sessions
//! - `services`: Business logic layer (authentication)
//! - `audit`: Audit logging system
//! - `export`: CSV/JSON session snapshots
//! - `cli`: Command-line handlers
//! - `tui`: The interactive dashboard
//!
//! Transactions and goals live in memory for one dashboard session; only
//! authentication state (the account store and the session file) persists
//! across runs.

pub mod audit;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod ledger;
pub mod models;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::{SatangError, SatangResult};
