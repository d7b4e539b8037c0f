use anyhow::Result;
use clap::{Parser, Subcommand};

use satang::cli::{handle_login, handle_logout, handle_signup, handle_whoami, LoginArgs, SignupArgs};
use satang::config::{paths::SatangPaths, settings::Settings};
use satang::services::AuthService;
use satang::storage::Storage;

#[derive(Parser)]
#[command(
    name = "satang",
    version,
    about = "Terminal-based personal finance tracker with savings goals",
    long_about = "satang tracks income and expenses, lets you set savings \
                  goals, and proportionally allocates every recorded income \
                  across them. Sign up once, then run 'satang' to open the \
                  dashboard."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive dashboard
    #[command(alias = "ui")]
    Tui,

    /// Create an account and sign in
    Signup(SignupArgs),

    /// Sign in to an existing account
    Login(LoginArgs),

    /// Sign out
    Logout,

    /// Show the signed-in user
    Whoami,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = SatangPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Signup(args)) => {
            handle_signup(&storage, args)?;
        }
        Some(Commands::Login(args)) => {
            handle_login(&storage, args)?;
        }
        Some(Commands::Logout) => {
            handle_logout(&storage)?;
        }
        Some(Commands::Whoami) => {
            handle_whoami(&storage)?;
        }
        Some(Commands::Config) => {
            println!("satang Configuration");
            println!("====================");
            println!("Config directory: {}", paths.config_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Export directory: {}", paths.export_dir().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Register size:   {}", settings.recent_transaction_count);
        }
        Some(Commands::Tui) | None => {
            let auth = AuthService::new(&storage);
            match auth.current_user()? {
                Some(user) => {
                    satang::tui::run_tui(&storage, &settings, user)?;
                }
                None => {
                    println!("Not signed in.");
                    println!();
                    println!("Run 'satang signup <name> <email>' to create an account,");
                    println!("or 'satang login <email>' if you already have one.");
                }
            }
        }
    }

    Ok(())
}
