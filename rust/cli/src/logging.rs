use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset.
fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "info,tictactoe_engine=debug,tictactoe_cli=debug"
    } else {
        "warn"
    }
}

/// Initialize logging for the application.
///
/// Log lines go to stderr so they never mix with board output on stdout.
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
