use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod cli;

#[derive(Parser)]
#[command(name = "paycred", about = "Resolve payment API credentials from configuration")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve and validate a credential (JSON to stdout)
    Resolve {
        /// Config file (.toml or .json); defaults to $PAYCRED_CONFIG or ./paycred.toml
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// API username (uses the first account in file order if omitted)
        #[arg(short, long)]
        username: Option<String>,
        /// Output a single field value instead of JSON
        #[arg(short, long)]
        field: Option<String>,
    },

    /// List configured accounts and their credential kind
    Accounts {
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Show global (non-account) settings
    Settings {
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Fill in defaults for missing connection settings
        #[arg(long)]
        with_defaults: bool,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Resolve {
            config,
            username,
            field,
        } => cli::commands::cmd_resolve(config.as_deref(), username.as_deref(), field.as_deref()),
        Commands::Accounts { config } => cli::commands::cmd_accounts(config.as_deref()),
        Commands::Settings {
            config,
            with_defaults,
        } => cli::commands::cmd_settings(config.as_deref(), *with_defaults),
    };

    if let Err(e) = result {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}
