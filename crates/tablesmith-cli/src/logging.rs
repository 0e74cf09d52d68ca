use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber.
///
/// Logs go to stderr so that `inspect` output on stdout stays machine
/// readable. The filter comes from `RUST_LOG` and defaults to `info`.
pub fn init(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    // Already installed, e.g. when embedded in another binary.
    if let Err(err) = result {
        tracing::debug!(error = %err, "tracing subscriber not installed");
    }
}
