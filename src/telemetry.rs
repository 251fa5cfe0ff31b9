use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing for the CLI.
///
/// - With `debug` set, forces `smssend=debug` regardless of the environment.
/// - Otherwise reads `RUST_LOG` for level directives, defaulting to "warn".
/// - Formats compactly to stderr, so diagnostics never mix with piped output.
///
/// Safe to call multiple times; subsequent calls are no-ops.
pub fn init(debug: bool) {
    let filter = if debug {
        EnvFilter::new("smssend=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let fmt_layer = fmt::layer()
        .with_target(false)
        .without_time()
        .compact()
        .with_writer(std::io::stderr);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
