use tracing_appender::non_blocking::WorkerGuard;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_log::LogTracer;
use tracing_subscriber::{filter::LevelFilter, prelude::*};

/// Keeps the log writer alive.
///
/// Logs written after this value is dropped may be lost, so binaries hold it until they exit.
pub struct Telemetry {
    _guard: WorkerGuard,
}

/// Installs the global subscriber: bunyan JSON lines on a non-blocking stdout writer, with
/// `log` records forwarded into `tracing`.
pub fn init_tracing(app_name: &str, verbose: bool) -> anyhow::Result<Telemetry> {
    LogTracer::init()?;

    let (non_blocking_writer, guard) = tracing_appender::non_blocking(std::io::stdout());
    let bunyan_formatting_layer =
        BunyanFormattingLayer::new(app_name.to_owned(), non_blocking_writer);

    tracing_subscriber::registry()
        .with(level_for(verbose))
        .with(JsonStorageLayer)
        .with(bunyan_formatting_layer)
        .try_init()?;

    Ok(Telemetry { _guard: guard })
}

fn level_for(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::INFO
    } else {
        LevelFilter::WARN
    }
}
