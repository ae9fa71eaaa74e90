//! CLI entrypoint for Quote Manager
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use quote_application::{
    KeyValueStore, MemoryKeyValueStore, NoSyncLogger, PersistentStore, QuoteBook, SyncLogger,
    SyncQuotesUseCase,
};
use quote_infrastructure::{
    ConfigLoader, FileConfig, FileKeyValueStore, HttpQuoteSource, JsonlSyncLogger,
};
use quote_presentation::{ActionHandler, Cli, QuoteShell};
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const HISTORY_FILE: &str = "shell_history.txt";

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(ExitCode::SUCCESS);
    }

    // === Configuration ===
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    config.validate().context("Invalid configuration")?;

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = init_logging(cli.verbose, config.logging.file.as_deref());

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    info!("Starting Quote Manager");

    // === Dependency Injection ===
    let storage_dir = config.storage_dir();
    debug!("Storage directory: {}", storage_dir.display());

    let durable: Arc<dyn KeyValueStore> = Arc::new(FileKeyValueStore::new(&storage_dir));
    let session: Arc<dyn KeyValueStore> = Arc::new(MemoryKeyValueStore::new());
    let book = Arc::new(QuoteBook::open(PersistentStore::new(durable, session)));

    let sync = Arc::new(
        SyncQuotesUseCase::new(book.clone(), Arc::new(remote_source(&config)?))
            .with_logger(sync_logger(&config)),
    );

    let handler = ActionHandler::new(book, sync).with_progress(!cli.quiet);

    match cli.command.and_then(|command| command.into_action()) {
        Some(action) => {
            let response = handler.handle(action).await;
            if response.success {
                println!("{}", response.message);
                Ok(ExitCode::SUCCESS)
            } else {
                eprintln!("{}", response.message);
                Ok(ExitCode::FAILURE)
            }
        }
        None => {
            let shell = QuoteShell::new(handler, config.sync_params())
                .with_history(storage_dir.join(HISTORY_FILE));
            shell.run().await.context("Shell terminated")?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Initialize tracing from the verbosity count.
///
/// `RUST_LOG` takes precedence over `-v`. When `file` is set, logs go there
/// instead of stderr.
fn init_logging(verbose: u8, file: Option<&Path>) -> Option<WorkerGuard> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let target = file.and_then(|path| {
        let name = path.file_name()?;
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        Some((dir.to_path_buf(), name.to_os_string()))
    });

    match target {
        Some((dir, name)) => {
            let (writer, guard) =
                tracing_appender::non_blocking(tracing_appender::rolling::never(dir, name));
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
            None
        }
    }
}

fn remote_source(config: &FileConfig) -> Result<HttpQuoteSource> {
    HttpQuoteSource::new(
        config.sync.endpoint.clone(),
        config.sync.limit,
        Duration::from_secs(config.sync.timeout_seconds),
    )
    .context("Failed to create HTTP client")
}

fn sync_logger(config: &FileConfig) -> Arc<dyn SyncLogger> {
    match config
        .logging
        .sync_log
        .as_ref()
        .and_then(JsonlSyncLogger::new)
    {
        Some(logger) => {
            info!("Sync events logged to {}", logger.path().display());
            Arc::new(logger)
        }
        None => Arc::new(NoSyncLogger),
    }
}
