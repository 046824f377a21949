//! Platform services: frame sleeping, logging setup and randomness.

use std::time::Duration;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing_error::ErrorLayer;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter};

use crate::error::GameError;
use crate::formatter::CustomFormatter;

pub fn sleep(duration: Duration) {
    spin_sleep::sleep(duration);
}

/// Installs the global tracing subscriber. `RUST_LOG` overrides the default `info` filter.
pub fn init_logging() -> Result<(), GameError> {
    let subscriber = tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(true).event_format(CustomFormatter))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(ErrorLayer::default());

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| GameError::Logging(e.to_string()))
}

/// Returns a seeded RNG, or one seeded from the operating system when `seed` is `None`.
pub fn rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    }
}
