//! Host engine capability interface.
//!
//! The round logic only ever reaches the engine through this trait;
//! `apply_commands` is the outbound half of the adapter that keeps
//! engine-specific types out of the domain.

use glam::Vec2;

use stardrop_core::commands::HostCommand;
use stardrop_core::enums::PlayerVisualState;
use stardrop_core::state::HazardSpec;

/// Capabilities the host engine exposes to the round logic.
pub trait HostEngine {
    /// Update the on-screen score text.
    fn display_score(&mut self, value: i32);

    /// Toggle a collectible's visibility and collision participation,
    /// optionally moving it first.
    fn set_collectible_active(&mut self, collectible_id: u32, active: bool, position: Option<Vec2>);

    /// Create (or reuse) a hazard entity from the spec.
    fn instantiate_hazard(&mut self, spec: HazardSpec);

    /// Halt physics stepping.
    fn pause_simulation(&mut self);

    /// Swap the player sprite's visual state.
    fn set_player_visual_state(&mut self, state: PlayerVisualState);
}

/// Execute a batch of drained commands against a host engine, in order.
pub fn apply_commands<H: HostEngine>(host: &mut H, commands: Vec<HostCommand>) {
    for command in commands {
        match command {
            HostCommand::DisplayScore { value } => host.display_score(value),
            HostCommand::SetCollectibleActive {
                collectible_id,
                active,
                position,
            } => host.set_collectible_active(collectible_id, active, position),
            HostCommand::SpawnHazard { spec } => host.instantiate_hazard(spec),
            HostCommand::PauseSimulation => host.pause_simulation(),
            HostCommand::SetPlayerVisualState { state } => host.set_player_visual_state(state),
        }
    }
}
