//! Round configuration and startup validation.
//!
//! Mis-configuration is the only error surface in the round logic:
//! every runtime operation is total over well-formed state, so bad
//! values are rejected once, before a round ever starts.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;

/// Errors raised by [`RoundConfig::validate`].
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("collectible_count must be at least 1")]
    ZeroCollectibles,
    #[error("reward must be positive, got {0}")]
    NonPositiveReward(i32),
    #[error("world dimensions must be positive and finite, got {width}x{height}")]
    BadWorldBounds { width: f32, height: f32 },
    #[error("hazard_max_launch_speed must be non-negative and finite, got {0}")]
    BadHazardSpeed(f32),
}

/// Tunable parameters for a round.
///
/// [`Default`] mirrors the classic 800x600 twelve-star layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundConfig {
    /// Number of collectibles laid out at round start.
    pub collectible_count: u32,
    /// Score awarded per collectible.
    pub reward: i32,
    /// Playfield width in pixels.
    pub world_width: f32,
    /// Playfield height in pixels.
    pub world_height: f32,
    /// X position of the first collectible column.
    pub collectible_origin_x: f32,
    /// Horizontal spacing between collectible columns.
    pub collectible_step_x: f32,
    /// Y position hazards spawn at.
    pub hazard_spawn_y: f32,
    /// Maximum horizontal launch speed of a hazard, either direction.
    pub hazard_max_launch_speed: f32,
    /// Initial downward speed of a hazard.
    pub hazard_drop_speed: f32,
    /// RNG seed for hazard launch velocities. Same seed = same spawns.
    pub seed: u64,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            collectible_count: COLLECTIBLE_COUNT,
            reward: COLLECTIBLE_REWARD,
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            collectible_origin_x: COLLECTIBLE_ORIGIN_X,
            collectible_step_x: COLLECTIBLE_STEP_X,
            hazard_spawn_y: HAZARD_SPAWN_Y,
            hazard_max_launch_speed: HAZARD_MAX_LAUNCH_SPEED,
            hazard_drop_speed: HAZARD_DROP_SPEED,
            seed: 42,
        }
    }
}

impl RoundConfig {
    /// Reject malformed values with a descriptive error.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.collectible_count == 0 {
            return Err(ConfigError::ZeroCollectibles);
        }
        if self.reward <= 0 {
            return Err(ConfigError::NonPositiveReward(self.reward));
        }
        let width_ok = self.world_width > 0.0 && self.world_width.is_finite();
        let height_ok = self.world_height > 0.0 && self.world_height.is_finite();
        if !width_ok || !height_ok {
            return Err(ConfigError::BadWorldBounds {
                width: self.world_width,
                height: self.world_height,
            });
        }
        if !(self.hazard_max_launch_speed >= 0.0 && self.hazard_max_launch_speed.is_finite()) {
            return Err(ConfigError::BadHazardSpeed(self.hazard_max_launch_speed));
        }
        Ok(())
    }

    /// Horizontal midpoint of the playfield.
    pub fn midpoint_x(&self) -> f32 {
        self.world_width / 2.0
    }

    /// Spawn x position of collectible slot `index`.
    pub fn collectible_spawn_x(&self, index: u32) -> f32 {
        self.collectible_origin_x + index as f32 * self.collectible_step_x
    }
}
