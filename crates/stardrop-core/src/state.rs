//! Round state and the read-only view sent to display layers.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::RoundPhase;

/// Mutable per-round bookkeeping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Round {
    pub score: i32,
    pub collectibles_remaining: u32,
    pub phase: RoundPhase,
}

impl Round {
    /// Fresh round: zero score, full collectible set, active.
    pub fn new(collectible_count: u32) -> Self {
        Self {
            score: 0,
            collectibles_remaining: collectible_count,
            phase: RoundPhase::Active,
        }
    }

    pub fn is_active(&self) -> bool {
        self.phase == RoundPhase::Active
    }
}

/// A collectible slot tracked by the round logic.
///
/// `spawn_x` is fixed for the life of the session; respawns reuse the
/// column with y reset to the top of the screen.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Collectible {
    pub spawn_x: f32,
    pub active: bool,
}

/// Spawn parameters for a hazard. The host instantiates (or reuses)
/// an entity from this.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HazardSpec {
    pub position: Vec2,
    pub velocity: Vec2,
}

/// Read-only view of the round for HUD and debug display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub score: i32,
    pub phase: RoundPhase,
    pub collectibles_remaining: u32,
    pub hazards_spawned: u32,
}
