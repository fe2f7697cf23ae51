//! Static scene layout handed to the host engine at world setup.
//!
//! The engine owns physics and rendering; this module only describes
//! where everything starts, so the round logic and the engine agree on
//! the playfield.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::RoundConfig;
use crate::constants::*;

/// A static platform. `scale` widens the base sprite; the ground slab
/// uses 2.0 to span the full playfield width.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlatformDef {
    pub position: Vec2,
    pub scale: f32,
}

/// Everything the host needs to build the initial scene.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenePlan {
    /// Downward gravity (pixels/s²).
    pub gravity_y: f32,
    pub player_start: Vec2,
    pub player_bounce: f32,
    pub platforms: Vec<PlatformDef>,
    /// Initial collectible drop positions, one per slot, in id order.
    pub collectible_spawns: Vec<Vec2>,
    pub score_text_pos: Vec2,
}

/// Build the default scene: a ground slab plus three floating ledges,
/// with collectibles strung across the top of the screen.
pub fn default_scene(config: &RoundConfig) -> ScenePlan {
    let collectible_spawns = (0..config.collectible_count)
        .map(|i| Vec2::new(config.collectible_spawn_x(i), COLLECTIBLE_SPAWN_Y))
        .collect();

    ScenePlan {
        gravity_y: GRAVITY_Y,
        player_start: Vec2::new(PLAYER_START.0, PLAYER_START.1),
        player_bounce: PLAYER_BOUNCE,
        platforms: vec![
            PlatformDef {
                position: Vec2::new(400.0, 568.0),
                scale: 2.0,
            },
            PlatformDef {
                position: Vec2::new(600.0, 400.0),
                scale: 1.0,
            },
            PlatformDef {
                position: Vec2::new(50.0, 250.0),
                scale: 1.0,
            },
            PlatformDef {
                position: Vec2::new(750.0, 220.0),
                scale: 1.0,
            },
        ],
        collectible_spawns,
        score_text_pos: Vec2::new(SCORE_TEXT_POS.0, SCORE_TEXT_POS.1),
    }
}
