use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::DEFAULT_LOG_FILTER;

pub fn init_tracing() {

    // RUST_LOG wins over the built-in filter
    let log_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());

    tracing_subscriber::registry()
        .with(EnvFilter::new(&log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

}
