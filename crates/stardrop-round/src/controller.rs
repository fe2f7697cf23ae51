//! Round controller — the heart of the game logic.
//!
//! Processes engine events, updates score and collectible state, and
//! queues commands for the host engine. All operations are synchronous
//! and total: the host delivers events one at a time from its frame
//! callback, so there is no concurrent mutation to guard against.

use glam::Vec2;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use stardrop_core::commands::HostCommand;
use stardrop_core::config::{ConfigError, RoundConfig};
use stardrop_core::constants::COLLECTIBLE_SPAWN_Y;
use stardrop_core::enums::{PlayerVisualState, RoundPhase};
use stardrop_core::events::EngineEvent;
use stardrop_core::state::{Collectible, Round, RoundSnapshot};

use crate::spawn;

/// Owns all round state. One instance per play session; the host's
/// frame driver holds it and forwards collision events.
pub struct RoundController {
    config: RoundConfig,
    round: Round,
    collectibles: Vec<Collectible>,
    hazards_spawned: u32,
    rng: ChaCha8Rng,
    command_queue: Vec<HostCommand>,
}

impl RoundController {
    /// Create a controller for a fresh round. Rejecting a malformed
    /// config here is the only fallible operation in the crate.
    pub fn new(config: RoundConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let collectibles = (0..config.collectible_count)
            .map(|i| Collectible {
                spawn_x: config.collectible_spawn_x(i),
                active: true,
            })
            .collect();
        let round = Round::new(config.collectible_count);
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Ok(Self {
            config,
            round,
            collectibles,
            hazards_spawned: 0,
            rng,
            command_queue: Vec::new(),
        })
    }

    /// Feed one engine event through the round logic.
    pub fn handle_event(&mut self, event: EngineEvent) {
        match event {
            EngineEvent::CollectibleOverlap {
                collectible_id,
                player_position,
            } => self.on_collectible_reached(collectible_id, player_position),
            EngineEvent::HazardContact => self.on_hazard_contact(),
        }
    }

    /// Drain the commands queued since the last call. The host executes
    /// them in order before its next physics step.
    pub fn drain_commands(&mut self) -> Vec<HostCommand> {
        std::mem::take(&mut self.command_queue)
    }

    /// Current score.
    pub fn score(&self) -> i32 {
        self.round.score
    }

    /// Current round phase.
    pub fn phase(&self) -> RoundPhase {
        self.round.phase
    }

    /// Number of collectibles still active.
    pub fn collectibles_remaining(&self) -> u32 {
        self.round.collectibles_remaining
    }

    /// Total hazards spawned this session. Hazards outlive respawn
    /// cycles, so this only ever grows.
    pub fn hazards_spawned(&self) -> u32 {
        self.hazards_spawned
    }

    /// Read-only view for HUD and debug display.
    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot {
            score: self.round.score,
            phase: self.round.phase,
            collectibles_remaining: self.round.collectibles_remaining,
            hazards_spawned: self.hazards_spawned,
        }
    }

    /// Start a new round: zero score, every collectible reactivated,
    /// player visuals restored. Re-enters `Active` from any phase.
    /// Reactivation here never triggers a hazard spawn.
    pub fn reset(&mut self) {
        self.round = Round::new(self.config.collectible_count);
        self.reactivate_collectibles();
        self.command_queue
            .push(HostCommand::DisplayScore { value: 0 });
        self.command_queue.push(HostCommand::SetPlayerVisualState {
            state: PlayerVisualState::Normal,
        });
    }

    /// A collectible was reached: deactivate it, award the reward, and
    /// respawn-and-escalate if it was the last one. No-op once the
    /// round has ended, or if the collectible is already inactive
    /// (double overlap within one frame).
    fn on_collectible_reached(&mut self, collectible_id: u32, player_position: Vec2) {
        if !self.round.is_active() {
            return;
        }
        let Some(collectible) = self.collectibles.get_mut(collectible_id as usize) else {
            return;
        };
        if !collectible.active {
            return;
        }

        collectible.active = false;
        self.round.collectibles_remaining -= 1;
        self.round.score += self.config.reward;

        self.command_queue.push(HostCommand::SetCollectibleActive {
            collectible_id,
            active: false,
            position: None,
        });
        self.command_queue.push(HostCommand::DisplayScore {
            value: self.round.score,
        });

        debug_assert_eq!(
            self.round.collectibles_remaining,
            self.collectibles.iter().filter(|c| c.active).count() as u32,
            "remaining counter out of sync with slot state"
        );

        if self.round.collectibles_remaining == 0 {
            self.respawn_and_escalate(player_position);
        }
    }

    /// The set is exhausted: bring every collectible back and launch a
    /// hazard on the far side of the playfield from the player.
    fn respawn_and_escalate(&mut self, player_position: Vec2) {
        self.reactivate_collectibles();
        let spec = spawn::hazard_spec(&mut self.rng, player_position.x, &self.config);
        self.hazards_spawned += 1;
        self.command_queue.push(HostCommand::SpawnHazard { spec });
    }

    /// Hazard contact ends the round: pause the simulation and flag
    /// the player sprite. Terminal until `reset`.
    fn on_hazard_contact(&mut self) {
        if !self.round.is_active() {
            return;
        }
        self.round.phase = RoundPhase::Ended;
        self.command_queue.push(HostCommand::PauseSimulation);
        self.command_queue.push(HostCommand::SetPlayerVisualState {
            state: PlayerVisualState::Hit,
        });
    }

    /// Reactivate every collectible slot at its spawn column, dropping
    /// from the top of the screen. Idempotent over partial state.
    fn reactivate_collectibles(&mut self) {
        for (id, collectible) in self.collectibles.iter_mut().enumerate() {
            collectible.active = true;
            self.command_queue.push(HostCommand::SetCollectibleActive {
                collectible_id: id as u32,
                active: true,
                position: Some(Vec2::new(collectible.spawn_x, COLLECTIBLE_SPAWN_Y)),
            });
        }
        self.round.collectibles_remaining = self.config.collectible_count;
    }
}
