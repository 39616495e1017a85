use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber; stdout is reserved for results.
pub fn init(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::new("webhook_notify=warn"),
        1 => EnvFilter::new("webhook_notify=info,warn"),
        _ => EnvFilter::new("webhook_notify=debug,info"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
