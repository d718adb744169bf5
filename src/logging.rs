use env_logger::Env;

/// Installs the env_logger backend. `RUST_LOG` wins over `default_level`.
/// Safe to call more than once; later calls are no-ops.
pub fn init(default_level: &str) {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(default_level))
        .format_timestamp_millis()
        .try_init();
}
