use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber.
///
/// Verbosity comes from `RUST_LOG` (for example `RUST_LOG=orderflow=debug`) and
/// defaults to `warn`. Output goes to stderr so stdout only carries results.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
