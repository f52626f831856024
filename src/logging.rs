use credit_burn_config::Config;
use eyre::{
    Context as _,
    Result,
};
use tracing_subscriber::{
    fmt,
    prelude::*,
    EnvFilter,
};

/// Environment variable holding an `EnvFilter` directive, e.g. `credit_burn_dashboard=trace`.
const LOG_ENV: &str = "CREDIT_BURN_REPORT_LOG";

/// Level used when `CREDIT_BURN_REPORT_LOG` is unset.
fn default_level(config: &Config) -> &'static str {
    if config.verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Logs go to stderr so that stdout carries nothing but the report.
pub fn init_logging(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level(config)));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(tracing_error::ErrorLayer::default())
        .try_init()
        .context("Failed to initialize tracing subscriber")
}
