use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Install the stderr log subscriber.
///
/// `verbose` forces debug output; otherwise `RUST_LOG` applies, defaulting
/// to warnings only so the MOTD stays clean at shell start-up.
pub fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
