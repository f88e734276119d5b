use crate::config::Config;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,holocron_services=debug,tower_http=debug"))
}

pub fn init_tracing(config: &Config) -> anyhow::Result<()> {
    if config.is_local() {
        // Local development: Pretty printing
        tracing_subscriber::registry()
            .with(filter())
            .with(tracing_subscriber::fmt::layer())
            .try_init()?;
    } else {
        // Production: one JSON object per line
        tracing_subscriber::registry()
            .with(filter())
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()?;
    }

    Ok(())
}
