//! CLI command handlers
//!
//! Bridges clap argument parsing with the service layer.

pub mod auth;

pub use auth::{handle_login, handle_logout, handle_signup, handle_whoami, LoginArgs, SignupArgs};
