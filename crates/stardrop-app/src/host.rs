//! Logging host — implements the engine capability trait by logging
//! each call instead of driving sprites, and keeps counters so a
//! scripted session can be summarized (and asserted on).

use glam::Vec2;

use stardrop_core::enums::PlayerVisualState;
use stardrop_core::state::HazardSpec;
use stardrop_round::host::HostEngine;

#[derive(Debug, Default)]
pub struct LoggingHost {
    pub last_score: i32,
    pub hazards_instantiated: u32,
    pub paused: bool,
}

impl HostEngine for LoggingHost {
    fn display_score(&mut self, value: i32) {
        self.last_score = value;
        log::info!("score display -> {value}");
    }

    fn set_collectible_active(&mut self, collectible_id: u32, active: bool, position: Option<Vec2>) {
        match position {
            Some(p) => log::debug!("collectible {collectible_id} active={active} at ({}, {})", p.x, p.y),
            None => log::debug!("collectible {collectible_id} active={active}"),
        }
    }

    fn instantiate_hazard(&mut self, spec: HazardSpec) {
        self.hazards_instantiated += 1;
        let json = serde_json::to_string(&spec).unwrap_or_default();
        log::info!("hazard spawned: {json}");
    }

    fn pause_simulation(&mut self) {
        self.paused = true;
        log::info!("simulation paused");
    }

    fn set_player_visual_state(&mut self, state: PlayerVisualState) {
        log::info!("player visual state -> {state:?}");
    }
}
