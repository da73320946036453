use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Sets up the logging configuration for the application.
///
/// This function initializes `tracing_subscriber` with two layers:
/// 1. A layer that logs to stdout (console).
/// 2. A layer that logs to a daily rotating file in the `logs/` directory.
///
/// Log levels are controlled by the `RUST_LOG` environment variable.
/// If `RUST_LOG` is not set, it defaults to `info` for all crates,
/// and `debug` for the roster crates.
pub fn setup_logging() {
    let file_appender = tracing_appender::rolling::daily("logs", "roster.log");
    let (non_blocking_file, guard_file) = tracing_appender::non_blocking(file_appender);

    let console_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_thread_ids(true)
        .with_target(true);

    let file_layer = fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false)
        .with_thread_ids(true)
        .with_target(true);

    let default_filter = "info,roster=debug,tower_http=debug";

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .init();

    // The guard flushes the file writer on drop; it has to live as long as the process.
    std::mem::forget(guard_file);
}
