use tracing_subscriber::{filter::LevelFilter, EnvFilter};

/// Init diagnostics on stderr, filtered by `RUST_LOG` and defaulting to `WARN`.
///
/// Timestamps and targets are left out; stdout is reserved for the generated string.
pub fn init() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .compact()
        .without_time()
        .with_target(false)
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init();
}
