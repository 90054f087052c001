use netblocks_domain::Config;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Logs go to stderr so `lookup` output on stdout stays parseable.
/// `RUST_LOG` wins over `logging.level` when set.
pub fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.to_lowercase()));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_level(true)
        .init();

    debug!("Logging initialized at level: {}", config.logging.level);
    info!(
        endpoint = %config.resolver.endpoint,
        timeout_secs = ?config.resolver.request_timeout_secs,
        "Configuration loaded"
    );
}
