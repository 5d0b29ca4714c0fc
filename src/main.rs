use anyhow::{Context, Result};
use tracing::info;

use career_quest::app::App;
use career_quest::config::GameConfig;
use career_quest::constants::LOOP_TIME;
use career_quest::logging::setup_logging;

pub fn main() -> Result<()> {
    setup_logging();

    let config = GameConfig::load().context("Failed to load configuration")?;
    info!(
        width = config.width,
        height = config.height,
        level_cap = config.level_cap,
        seed = ?config.seed,
        "Starting game loop ({:.3}ms)",
        LOOP_TIME.as_secs_f32() * 1000.0
    );

    let mut app = App::new(&config).context("Failed to start session")?;
    while app.run() {}

    let summary = app.summary();
    info!(
        frames = summary.frames,
        level = summary.level,
        defeated = summary.enemies_defeated,
        completed = summary.completed,
        "Session finished"
    );

    Ok(())
}
