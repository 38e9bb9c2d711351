use fortune_shared::WheelController;
use tracing::{debug, info};

use crate::config::HostSettings;
use crate::games::backend_wheel_game::run_session;
use crate::level_manager::LevelManager;

mod config;
mod error;
mod games;
mod level_manager;
mod logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::from_path(".env").ok();
    logging::setup();

    let settings = HostSettings::from_env()?;
    info!(
        "Starting wheel session: {} turns, {} cycles, {:?} frames{}",
        settings.wheel.turns,
        settings.wheel.cycles,
        settings.frame,
        if settings.realtime { "" } else { " (simulated)" }
    );

    let levels = LevelManager::new();
    let mut controller = WheelController::new(settings.wheel.clone(), Box::new(levels.clone()))
        .map_err(error::Error::from)?;

    let summary = run_session(&mut controller, &settings, &mut std::io::stdout()).await;
    debug!("Final wheel state: {}", serde_json::to_string(controller.state())?);

    info!(
        "Session finished on level {} after {} spins, total {}",
        levels.current_level(),
        summary.spins,
        summary.winnings_text
    );
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
