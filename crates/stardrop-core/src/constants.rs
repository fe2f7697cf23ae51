//! Round tuning parameters and playfield layout constants.
//!
//! Values mirror the 800x600 arcade layout the host engine renders.
//! The engine's Y axis points down; y = 0 is the top of the screen.

/// Playfield width in pixels.
pub const WORLD_WIDTH: f32 = 800.0;

/// Playfield height in pixels.
pub const WORLD_HEIGHT: f32 = 600.0;

/// Horizontal midpoint of the playfield. Hazards launch on the half
/// opposite this line from the player.
pub const WORLD_MIDPOINT_X: f32 = WORLD_WIDTH / 2.0;

// --- Collectibles ---

/// Number of collectibles laid out per round.
pub const COLLECTIBLE_COUNT: u32 = 12;

/// Score awarded per collectible.
pub const COLLECTIBLE_REWARD: i32 = 10;

/// X position of the first collectible column.
pub const COLLECTIBLE_ORIGIN_X: f32 = 12.0;

/// Horizontal spacing between collectible columns.
pub const COLLECTIBLE_STEP_X: f32 = 70.0;

/// Y position collectibles (re)spawn at; they fall onto the platforms
/// below from here.
pub const COLLECTIBLE_SPAWN_Y: f32 = 0.0;

/// Vertical restitution range for freshly dropped collectibles
/// (min, max) — the host rolls a value per collectible.
pub const COLLECTIBLE_BOUNCE_RANGE: (f32, f32) = (0.4, 0.8);

// --- Hazards ---

/// Y position hazards spawn at, just below the top edge.
pub const HAZARD_SPAWN_Y: f32 = 16.0;

/// Maximum horizontal launch speed of a hazard, either direction.
pub const HAZARD_MAX_LAUNCH_SPEED: f32 = 200.0;

/// Initial downward speed of a hazard.
pub const HAZARD_DROP_SPEED: f32 = 20.0;

/// Hazards reflect off world bounds without losing speed.
pub const HAZARD_BOUNCE: f32 = 1.0;

// --- Player ---

/// Horizontal run speed (pixels/s).
pub const PLAYER_MOVE_SPEED: f32 = 160.0;

/// Jump impulse (negative = up).
pub const PLAYER_JUMP_SPEED: f32 = -330.0;

/// Restitution applied to the player sprite.
pub const PLAYER_BOUNCE: f32 = 0.2;

/// Player spawn position.
pub const PLAYER_START: (f32, f32) = (100.0, 450.0);

// --- World physics (forwarded to the host engine) ---

/// Downward gravity (pixels/s²).
pub const GRAVITY_Y: f32 = 300.0;

// --- HUD ---

/// Top-left corner of the score text.
pub const SCORE_TEXT_POS: (f32, f32) = (16.0, 16.0);
