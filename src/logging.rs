use tracing_subscriber::{fmt, EnvFilter};

/// Install the global subscriber.
///
/// Reads `RUST_LOG` (e.g. `RUST_LOG=catering_desk=debug`) and falls back to `info`.
/// Output goes to stderr so tables printed on stdout stay clean.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Verbose subscriber for tests; safe to call more than once.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
