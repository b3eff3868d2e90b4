use super::SystemConfig;

/// Installs the global `fmt` subscriber.
///
/// `RUST_LOG` wins over the configured filter when it is set. Calling this a
/// second time is a no-op.
pub fn setup_tracing(config: &SystemConfig) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .compact()
        .try_init();
}
