pub mod cli;
pub mod core;
pub mod providers;

use crate::cli::ui;
use crate::core::config::AppConfig;
use crate::core::dates;
use crate::core::session::Session;
use crate::providers::KursPajakProvider;
use anyhow::Result;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Date range and currency selection shared by the `show` and `export`
/// commands.
#[derive(Debug, Clone)]
pub struct RangeRequest {
    pub start: String,
    pub end: String,
    pub currencies: Vec<String>,
    pub all: bool,
}

pub enum AppCommand {
    Show(RangeRequest),
    Export {
        request: RangeRequest,
        output: Option<PathBuf>,
    },
}

impl AppCommand {
    fn request(&self) -> &RangeRequest {
        match self {
            AppCommand::Show(request) => request,
            AppCommand::Export { request, .. } => request,
        }
    }
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("Kurs database starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let provider = KursPajakProvider::new(&config.provider.base_url);

    // Both dates must parse before any retrieval begins.
    let request = command.request();
    let start = dates::parse_date(&request.start)?;
    let end = dates::parse_date(&request.end)?;
    let requested = dates::expand_range(start, end);

    let pb = ui::new_progress_bar(requested.len() as u64, true);
    pb.set_message("Fetching rate tables...");

    let mut session = Session::new();
    session.load(&provider, requested, &|| pb.inc(1)).await;
    pb.finish_and_clear();

    for (date, reason) in session.rates.failures() {
        warn!("No rate table for {date}: {reason}");
    }

    if request.all {
        session
            .selection
            .select_all(session.rates.available_currencies().iter().map(String::as_str));
    } else {
        for code in &request.currencies {
            session.selection.toggle(code, true);
        }
    }

    match command {
        AppCommand::Show(_) => cli::rates::run(&session),
        AppCommand::Export { output, .. } => {
            let output = output.unwrap_or_else(|| PathBuf::from(&config.export.filename));
            cli::export::run(&session, &output)
        }
    }
}
