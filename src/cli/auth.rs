//! Auth CLI commands
//!
//! Implements signup, login, logout, and whoami. Passwords can be supplied
//! via flag for scripting; otherwise they are prompted without echo.

use clap::Args;

use crate::error::SatangResult;
use crate::services::AuthService;
use crate::storage::Storage;

/// Arguments for `satang signup`
#[derive(Args)]
pub struct SignupArgs {
    /// Display name
    pub name: String,

    /// Email address
    pub email: String,

    /// Password (prompted if not given)
    #[arg(short, long)]
    pub password: Option<String>,
}

/// Arguments for `satang login`
#[derive(Args)]
pub struct LoginArgs {
    /// Email address
    pub email: String,

    /// Password (prompted if not given)
    #[arg(short, long)]
    pub password: Option<String>,
}

/// Handle `satang signup`
pub fn handle_signup(storage: &Storage, args: SignupArgs) -> SatangResult<()> {
    let password = read_password(args.password)?;
    let service = AuthService::new(storage);
    let user = service.signup(&args.name, &args.email, password)?;

    println!("Welcome, {}!", user.name);
    println!("You are now signed in as {}.", user.email);
    Ok(())
}

/// Handle `satang login`
pub fn handle_login(storage: &Storage, args: LoginArgs) -> SatangResult<()> {
    let password = read_password(args.password)?;
    let service = AuthService::new(storage);
    let user = service.login(&args.email, password)?;

    println!("Signed in as {}.", user.email);
    println!("Run 'satang' to open the dashboard.");
    Ok(())
}

/// Handle `satang logout`
pub fn handle_logout(storage: &Storage) -> SatangResult<()> {
    let service = AuthService::new(storage);
    if service.logout()? {
        println!("Signed out.");
    } else {
        println!("No one is signed in.");
    }
    Ok(())
}

/// Handle `satang whoami`
pub fn handle_whoami(storage: &Storage) -> SatangResult<()> {
    let service = AuthService::new(storage);
    match service.current_user()? {
        Some(user) => println!("{}", user),
        None => println!("Not signed in. Run 'satang login' or 'satang signup'."),
    }
    Ok(())
}

/// Take the password from the flag, or prompt for it without echo
fn read_password(flag: Option<String>) -> SatangResult<String> {
    match flag {
        Some(password) => Ok(password),
        None => rpassword::prompt_password("Password: ")
            .map_err(|e| crate::error::SatangError::Io(format!("Failed to read password: {}", e))),
    }
}
