//! Commands emitted by the round logic for the host engine to execute.
//!
//! Commands are the only way the round logic reaches the engine: it
//! never holds sprite handles or engine state directly. The host
//! drains and executes them in order before its next physics step.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::PlayerVisualState;
use crate::state::HazardSpec;

/// All possible instructions to the host engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum HostCommand {
    /// Update the on-screen score text.
    DisplayScore { value: i32 },
    /// Toggle a collectible's visibility and collision participation.
    /// `position` is set when the collectible should also be moved
    /// (bulk respawns drop the set from the top of the screen).
    SetCollectibleActive {
        collectible_id: u32,
        active: bool,
        position: Option<Vec2>,
    },
    /// Create a hazard entity with the given position and velocity.
    SpawnHazard { spec: HazardSpec },
    /// Halt physics stepping.
    PauseSimulation,
    /// Swap the player sprite's visual state.
    SetPlayerVisualState { state: PlayerVisualState },
}
