//! `rezidans` — the Şengel Residence management CLI.
//!
//! Administrators import the accounting report, browse balances and
//! send WhatsApp payment reminders; residents check their own unit's
//! balance. All data lives in one hosted JSON document.

mod commands;
mod config;

use clap::{Parser, Subcommand};

use rezidans_core::ServiceError;

/// Residence management CLI.
#[derive(Parser, Debug)]
#[command(name = "rezidans", about = "Şengel Residence management client")]
struct Cli {
    /// Path to client config file (default: ~/.rezidans/config.toml).
    #[arg(long = "config", global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Configure the hosted store connection.
    Setup {
        /// The bin (document) id.
        #[arg(long = "bin-id")]
        bin_id: Option<String>,
        /// Read credential.
        #[arg(long = "access-key")]
        access_key: Option<String>,
        /// Write credential.
        #[arg(long = "master-key")]
        master_key: Option<String>,
        /// Base URL of the bin API.
        #[arg(long = "base-url")]
        base_url: Option<String>,
        /// Show the current configuration instead of setting.
        #[arg(long)]
        show: bool,
    },

    /// Login as administrator or resident (unit number or short code).
    Login {
        /// `admin`, an account code (131.001.035) or a short code (35).
        #[arg(long)]
        user: Option<String>,
        /// Password (not recommended — use interactive prompt).
        #[arg(long)]
        password: Option<String>,
    },

    /// Logout — clear the persisted session.
    Logout,

    /// Show the current session.
    Whoami,

    /// Import an accounting report (admin).
    Import {
        /// Path to the pasted/saved report file.
        file: String,
        /// Skip confirmation.
        #[arg(long = "yes", short = 'y')]
        yes: bool,
    },

    /// List residents with balances (admin).
    List {
        /// Filter by name or account code.
        #[arg(long)]
        search: Option<String>,
        /// Output JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Show ledger totals and top debtors (admin).
    Stats {
        /// How many debtors to list.
        #[arg(long, default_value = "5")]
        top: usize,
    },

    /// Show a balance card (own unit, or any unit for admin).
    Balance {
        /// Account code (admin only).
        id: Option<String>,
    },

    /// Build a WhatsApp payment reminder link (admin).
    Remind {
        /// Account code.
        id: String,
        /// Save this phone number to the resident first.
        #[arg(long)]
        phone: Option<String>,
    },

    /// Set a resident's phone number (admin).
    Phone {
        /// Account code.
        id: String,
        /// The phone number, any common local format.
        number: String,
    },

    /// Change a password (own, or any unit's for admin).
    Passwd {
        /// Account code (admin only).
        id: Option<String>,
    },

    /// Show version.
    Version,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config_path = cli
        .config
        .map(std::path::PathBuf::from)
        .unwrap_or_else(config::ClientConfig::default_path);

    if let Err(err) = run(cli.command, &config_path) {
        // Domain errors carry a stable machine-readable code.
        match err.downcast_ref::<ServiceError>() {
            Some(service) => eprintln!("error[{}]: {}", service.error_code(), service),
            None => eprintln!("error: {:#}", err),
        }
        std::process::exit(1);
    }
}

fn run(command: Commands, config_path: &std::path::Path) -> anyhow::Result<()> {
    match command {
        Commands::Setup {
            bin_id,
            access_key,
            master_key,
            base_url,
            show,
        } => {
            if show {
                commands::setup::show(&config_path)?;
            } else {
                commands::setup::set(
                    bin_id.as_deref(),
                    access_key.as_deref(),
                    master_key.as_deref(),
                    base_url.as_deref(),
                    &config_path,
                )?;
            }
        }

        Commands::Login { user, password } => {
            let identifier = match user {
                Some(u) => u,
                None => {
                    eprint!("Unit number (or admin): ");
                    let mut s = String::new();
                    std::io::stdin().read_line(&mut s)?;
                    s.trim().to_string()
                }
            };
            let password = match password {
                Some(p) => p,
                None => rpassword::prompt_password("Password: ")?,
            };
            commands::login::login(&identifier, &password, &config_path)?;
        }

        Commands::Logout => {
            commands::login::logout(&config_path)?;
        }

        Commands::Whoami => {
            commands::login::whoami(&config_path)?;
        }

        Commands::Import { file, yes } => {
            commands::import::import(&file, yes, &config_path)?;
        }

        Commands::List { search, json } => {
            commands::list::list(search.as_deref(), json, &config_path)?;
        }

        Commands::Stats { top } => {
            commands::stats::overview(top, &config_path)?;
        }

        Commands::Balance { id } => {
            commands::balance::show(id.as_deref(), &config_path)?;
        }

        Commands::Remind { id, phone } => {
            commands::notify::remind(&id, phone.as_deref(), &config_path)?;
        }

        Commands::Phone { id, number } => {
            commands::passwd::set_phone(&id, &number, &config_path)?;
        }

        Commands::Passwd { id } => {
            commands::passwd::passwd(id.as_deref(), &config_path)?;
        }

        Commands::Version => {
            println!("rezidans cli v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
