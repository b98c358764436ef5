use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod column;
mod controller;
mod demo;
mod domain;
mod grid;
mod hops;
mod model;
mod sort;
mod ui;

use controller::Controller;
use domain::{MeshtabError, TableConfig};
use model::{Model, Status};
use ui::TableUI;

/// A tui based mesh network node table viewer.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Event poll timeout in milliseconds
    #[arg(long, default_value_t = 100)]
    poll_time: u64,

    /// Write logs to this file (stdout belongs to the tui)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    match run() {
        Err(e) => {
            ratatui::restore();
            eprintln!("Error: {:?}", e);
            ExitCode::FAILURE
        }
        Ok(_) => {
            ratatui::restore();
            ExitCode::SUCCESS
        }
    }
}

fn init_logging(log_file: &Option<PathBuf>) -> Result<(), MeshtabError> {
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = File::create(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("meshtab=info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(ErrorLayer::default())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Arc::new(file))
                .with_ansi(false),
        )
        .try_init()
        .map_err(|e| MeshtabError::LoggingFailed(e.to_string()))?;
    Ok(())
}

fn run() -> Result<(), MeshtabError> {
    let args = Args::parse();
    init_logging(&args.log_file)?;
    info!("Starting meshtab!");

    let (columns, rows) = demo::node_table()?;
    let mut model = Model::new(columns, rows)?;

    let cfg = TableConfig {
        event_poll_time: args.poll_time,
    };
    let ui = TableUI::new();
    let controller = Controller::new(&cfg);

    let mut terminal = ratatui::init();

    while model.status != Status::QUITTING {
        // Render the current view
        terminal.draw(|f| ui.draw(&model, f))?;

        // Handle events and map to a Message
        if let Some(message) = controller.handle_event(&model)? {
            model.update(message)?;
        }
    }

    Ok(())
}
