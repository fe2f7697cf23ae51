//! Enumeration types used throughout the round logic.

use serde::{Deserialize, Serialize};

/// Round lifecycle phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Collection and hazard events are processed normally.
    #[default]
    Active,
    /// The player touched a hazard. Terminal until an external reset.
    Ended,
}

/// Visual state the host should apply to the player sprite.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerVisualState {
    #[default]
    Normal,
    /// Tinted + idle animation after a hazard contact.
    Hit,
}
