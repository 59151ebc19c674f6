use anyhow::Result;
use tracing_subscriber::EnvFilter;
use weather_api::config::{self, Config};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;

    init_tracing(&config);
    config.print_summary();

    weather_api::server::run(config).await
}

/// Initializes the global tracing subscriber.
///
/// Log level comes from `RUST_LOG` when set, otherwise from the configured
/// default. `LOG_FORMAT=json` switches to newline-delimited JSON output for
/// log collectors.
fn init_tracing(config: &Config) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    if config.log_format == "json" {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
