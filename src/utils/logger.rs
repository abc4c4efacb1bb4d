use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// `RUST_LOG` wins over the configured level; `--verbose` lifts the crate
/// to debug and lets dependencies log at info.
fn filter_directive(level: &str, verbose: bool) -> String {
    if verbose {
        "crm_toolkit=debug,info".to_string()
    } else {
        format!("crm_toolkit={}", level)
    }
}

fn env_filter(level: &str, verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(level, verbose)))
}

/// Compact, human-readable lines on stderr so stdout stays parseable.
pub fn init_cli_logger(level: &str, verbose: bool) {
    tracing_subscriber::registry()
        .with(env_filter(level, verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

/// One JSON object per event, for services embedding the route gate.
pub fn init_json_logger(level: &str, verbose: bool) {
    tracing_subscriber::registry()
        .with(env_filter(level, verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .json(),
        )
        .init();
}
