use matchday_core::Config;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// File-only logging: the alternate screen owns stdout, so everything
/// goes through a non-blocking appender next to the results database.
pub fn init(config: &Config) -> std::io::Result<WorkerGuard> {
    let log_dir = Path::new(&config.database_path)
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(log_dir)?;

    let file_appender = tracing_appender::rolling::never(log_dir, "matchday.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let file_layer = fmt::layer().with_target(false).with_writer(non_blocking).with_ansi(false);

    tracing_subscriber::registry().with(filter).with(file_layer).init();

    Ok(guard)
}
