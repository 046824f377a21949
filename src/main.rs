#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(coverage_nightly, coverage(off))]

use anyhow::Context;
use clap::Parser;
use flappy_dot::app::App;
use flappy_dot::config::Config;
use flappy_dot::constants::LOOP_TIME;
use flappy_dot::platform;
use tracing::info;

/// The main entry point of the application.
///
/// Parses the configuration, sets up logging, initializes SDL and the game, and
/// then runs frames until the game asks to exit.
pub fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    platform::init_logging().context("Could not initialize logging")?;

    let mut app = App::new(&config).context("Could not start Flappy Dot")?;

    info!(loop_time = ?LOOP_TIME, "Starting game loop");
    while app.run() {}

    info!("Game loop finished");
    Ok(())
}
