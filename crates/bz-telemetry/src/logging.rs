use tracing_subscriber::{EnvFilter, fmt};

/// How `bz` writes its diagnostics. Both go to stderr so stdout stays free
/// for command output such as `bz compress --json`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// `RUST_LOG` wins over the configured `[general] log_level`.
fn filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Install the global subscriber. Only the first call takes effect.
pub fn init(format: LogFormat, service_name: &str, log_level: &str) {
    let builder = fmt()
        .with_env_filter(filter(log_level))
        .with_target(true)
        .with_writer(std::io::stderr);

    let installed = match format {
        LogFormat::Pretty => builder.try_init().is_ok(),
        LogFormat::Json => builder
            .json()
            .with_file(true)
            .with_line_number(true)
            .try_init()
            .is_ok(),
    };

    if installed {
        tracing::debug!(service = service_name, ?format, "diagnostics enabled");
    }
}

pub fn init_logging(service_name: &str, log_level: &str) {
    init(LogFormat::Pretty, service_name, log_level);
}

/// One JSON object per event, for piping `bz` into log collectors.
pub fn init_logging_json(service_name: &str, log_level: &str) {
    init(LogFormat::Json, service_name, log_level);
}
