//! Events delivered by the host engine to the round logic.
//!
//! The host translates its engine-specific collision callbacks into
//! these two domain events; nothing engine-specific crosses this
//! boundary.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A collision event surfaced by the host engine.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EngineEvent {
    /// The player overlapped an active collectible.
    CollectibleOverlap {
        collectible_id: u32,
        /// Player sprite position at the moment of overlap. Drives the
        /// hazard spawn side when this was the last collectible.
        player_position: Vec2,
    },
    /// The player touched a hazard.
    HazardContact,
}
