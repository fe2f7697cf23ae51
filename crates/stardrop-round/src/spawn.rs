//! Hazard spawn policy — where and how fast a new hazard launches.

use glam::Vec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use stardrop_core::config::RoundConfig;
use stardrop_core::state::HazardSpec;

/// Compute spawn parameters for a hazard triggered at `player_x`.
///
/// The hazard drops in from the top of the screen on the half of the
/// playfield opposite the player, with a random horizontal launch
/// speed in either direction. A player standing exactly on the
/// midpoint counts as the far half, so the hazard lands near.
pub fn hazard_spec(rng: &mut ChaCha8Rng, player_x: f32, config: &RoundConfig) -> HazardSpec {
    let midpoint = config.midpoint_x();
    let x = if player_x < midpoint {
        rng.gen_range(midpoint..=config.world_width)
    } else {
        rng.gen_range(0.0..=midpoint)
    };

    let max = config.hazard_max_launch_speed;
    let vx = rng.gen_range(-max..=max);

    HazardSpec {
        position: Vec2::new(x, config.hazard_spawn_y),
        velocity: Vec2::new(vx, config.hazard_drop_speed),
    }
}
