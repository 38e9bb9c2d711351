use std::io::Write;

use fortune_shared::{TickEvent, WheelController};
use serde::Serialize;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, trace};

use crate::config::HostSettings;

/// What the host saw over one session
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct SessionSummary {
    pub spins: u32,
    pub total_winnings: u64,
    pub winnings_text: String,
    pub frames: u64,
    pub simulated_seconds: f32,
}

/// Drives the wheel one frame at a time until the level manager has been
/// told to move on. The spin button is pressed whenever it is enabled.
pub async fn run_session<W: Write>(
    controller: &mut WheelController,
    settings: &HostSettings,
    display: &mut W,
) -> SessionSummary {
    let delta_time = settings.frame.as_secs_f32();
    let mut interval = settings.realtime.then(|| {
        let mut interval = tokio::time::interval(settings.frame);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        interval
    });

    let mut summary = SessionSummary {
        spins: 0,
        total_winnings: 0,
        winnings_text: controller.winnings_text(),
        frames: 0,
        simulated_seconds: 0.0,
    };
    render(controller, display);

    loop {
        if let Some(interval) = interval.as_mut() {
            interval.tick().await;
        }

        if controller.is_spin_enabled() {
            match controller.spin() {
                Ok(()) => debug!("Spin {} started", summary.spins + 1),
                Err(e) => debug!("Spin ignored: {}", e),
            }
        }

        let event = controller.tick(delta_time);
        summary.frames += 1;
        summary.simulated_seconds += delta_time;

        match event {
            TickEvent::Spinning { angle } => trace!("angle {:.2}", angle),
            TickEvent::SpinFinished(outcome) => {
                summary.spins += 1;
                info!(
                    "🎡 Spin {} landed on sector {} for {}",
                    summary.spins, outcome.sector, outcome.prize
                );
                render(controller, display);
            }
            TickEvent::GameOver => break,
            TickEvent::Idle => {}
        }
    }

    summary.total_winnings = controller.state().total_winnings;
    summary.winnings_text = controller.winnings_text();
    summary
}

fn render<W: Write>(controller: &WheelController, display: &mut W) {
    if let Err(e) = writeln!(
        display,
        "Turns: {}  Winnings: {}  Angle: {:.1}",
        controller.turns_text(),
        controller.winnings_text(),
        controller.current_angle()
    ) {
        debug!("Display write failed: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level_manager::{LevelManager, LAST_LEVEL};
    use fortune_shared::WheelConfig;
    use std::time::Duration;

    fn simulated(turns: u32) -> HostSettings {
        HostSettings {
            wheel: WheelConfig {
                turns,
                max_spin_time: 1.0,
                game_over_sleep: 0.5,
                seed: Some(3),
                ..WheelConfig::default()
            },
            frame: Duration::from_millis(10),
            realtime: false,
        }
    }

    #[tokio::test]
    async fn test_session_uses_every_turn() {
        let settings = simulated(3);
        let levels = LevelManager::new();
        let mut controller =
            WheelController::new(settings.wheel.clone(), Box::new(levels.clone())).unwrap();
        let mut display = Vec::new();

        let summary = run_session(&mut controller, &settings, &mut display).await;

        assert_eq!(summary.spins, 3);
        assert_eq!(levels.current_level(), LAST_LEVEL);
        assert_eq!(controller.state().remaining_turns, 0);
        assert_eq!(summary.total_winnings, controller.state().total_winnings);
        assert!(summary.simulated_seconds >= 0.5);

        let lines = String::from_utf8(display).unwrap();
        assert_eq!(lines.lines().count(), 4);
        assert!(lines.lines().last().unwrap().starts_with("Turns: 0  Winnings: $"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_realtime_session_finishes() {
        let settings = HostSettings { realtime: true, ..simulated(1) };
        let levels = LevelManager::new();
        let mut controller =
            WheelController::new(settings.wheel.clone(), Box::new(levels.clone())).unwrap();

        let summary = run_session(&mut controller, &settings, &mut std::io::sink()).await;

        assert_eq!(summary.spins, 1);
        assert_eq!(levels.current_level(), LAST_LEVEL);
    }
}
