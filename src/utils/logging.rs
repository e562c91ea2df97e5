//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the CourtDesk client.

use tracing::{info, warn, error, debug};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use crate::config::LoggingConfig;
use crate::utils::errors::{CourtDeskError, Result};

/// Initialize logging based on configuration
///
/// The returned guard flushes the file writer when dropped, so the caller
/// must keep it alive for the lifetime of the program.
pub fn init_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    let file_appender = tracing_appender::rolling::daily(&config.directory, &config.file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .map_err(|e| CourtDeskError::Config(format!("Invalid log filter: {}", e)))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::fmt::layer().with_ansi(false).with_writer(non_blocking))
        .try_init()
        .map_err(|e| CourtDeskError::Config(format!("Logging already initialized: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log an outgoing API request
pub fn log_api_request(method: &str, path: &str) {
    debug!(method = method, path = path, "API request");
}

/// Log a completed API request
pub fn log_api_response(method: &str, path: &str, status: u16, duration_ms: u64) {
    if status < 400 {
        debug!(
            method = method,
            path = path,
            status = status,
            duration_ms = duration_ms,
            "API request completed"
        );
    } else {
        warn!(
            method = method,
            path = path,
            status = status,
            duration_ms = duration_ms,
            "API request returned an error status"
        );
    }
}

/// Log API errors with context
pub fn log_api_error(api: &str, error: &str, context: Option<&str>) {
    error!(
        api = api,
        error = error,
        context = context,
        "API error occurred"
    );
}

/// Log one run of the collection view pipeline
pub fn log_pipeline_run(entity: &str, input: usize, output: usize, duration_us: u64) {
    debug!(
        entity = entity,
        input = input,
        output = output,
        duration_us = duration_us,
        "Collection view recomputed"
    );
}

/// Log a requested status change
pub fn log_status_change(entity: &str, id: i64, from: &str, to: &str) {
    info!(
        entity = entity,
        id = id,
        from = from,
        to = to,
        "Status change requested"
    );
}

/// Log a finished export
pub fn log_export(report: &str, rows: usize, destination: &str) {
    info!(
        report = report,
        rows = rows,
        destination = destination,
        "Report exported"
    );
}
