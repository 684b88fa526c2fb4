use anyhow::Result;
use clap::{Parser, Subcommand};
use invert_infrastructure::ConfigService;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "invert")]
#[command(about = "invert - draw lotto picks from the numbers you never marked", long_about = None)]
struct Cli {
    /// Use this config file instead of the platform default
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Mark games and draw recommendations from the unmarked numbers
    Draw(commands::draw::DrawArgs),
    /// Inspect or edit the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Print the configuration file location
    Path,
    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Change draw settings
    Set(commands::config::SetArgs),
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let service = match cli.config {
        Some(path) => ConfigService::with_path(path),
        None => ConfigService::new(),
    };

    match cli.command {
        Commands::Draw(args) => {
            commands::draw::run(&service, &args, &mut std::io::stdout().lock())?
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show(&service)?,
            ConfigAction::Path => commands::config::path(&service)?,
            ConfigAction::Init { force } => commands::config::init(&service, force)?,
            ConfigAction::Set(args) => commands::config::set(&service, &args)?,
        },
    }

    Ok(())
}
