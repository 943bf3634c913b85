use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use kursdb::core::log::init_logging;
use std::path::PathBuf;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Args)]
struct RangeArgs {
    /// First date of the range (YYYY-MM-DD)
    #[arg(long)]
    start: String,

    /// Last date of the range, inclusive (YYYY-MM-DD)
    #[arg(long)]
    end: String,

    /// Comma-separated currency codes to include (e.g. USD,JPY)
    #[arg(long, value_delimiter = ',')]
    currencies: Vec<String>,

    /// Include every currency published in the fetched tables
    #[arg(long, conflicts_with = "currencies")]
    all: bool,
}

impl From<RangeArgs> for kursdb::RangeRequest {
    fn from(args: RangeArgs) -> kursdb::RangeRequest {
        kursdb::RangeRequest {
            start: args.start,
            end: args.end,
            currencies: args.currencies,
            all: args.all,
        }
    }
}

impl From<Commands> for kursdb::AppCommand {
    fn from(cmd: Commands) -> kursdb::AppCommand {
        match cmd {
            Commands::Show(range) => kursdb::AppCommand::Show(range.into()),
            Commands::Export { range, output } => kursdb::AppCommand::Export {
                request: range.into(),
                output,
            },
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Fetch a date range and display the rate tables
    Show(RangeArgs),
    /// Fetch a date range and export the rate tables as a spreadsheet
    Export {
        #[command(flatten)]
        range: RangeArgs,

        /// Output path; defaults to the configured fixed filename
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => setup(),
        Some(cmd) => kursdb::run_command(cmd.into(), cli.config_path.as_deref()).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}

fn setup() -> anyhow::Result<()> {
    use anyhow::Context;

    let path = kursdb::core::config::AppConfig::default_config_path()?;

    if path.exists() {
        anyhow::bail!("Configuration file already exists at {}", path.display());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let default_config = r#"---
provider:
  base_url: "https://kurs-kmk-api-production.up.railway.app"

export:
  filename: "kurs-pajak.xlsx"
"#;

    std::fs::write(&path, default_config)
        .with_context(|| format!("Failed to write config file to {}", path.display()))?;

    tracing::info!("Created default configuration at {}", path.display());
    Ok(())
}
