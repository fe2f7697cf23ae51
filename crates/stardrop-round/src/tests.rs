//! Tests for the round controller: scoring, respawn escalation, spawn
//! side policy, terminal round behavior, and command dispatch.

use glam::Vec2;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use stardrop_core::commands::HostCommand;
use stardrop_core::config::{ConfigError, RoundConfig};
use stardrop_core::constants::{HAZARD_DROP_SPEED, HAZARD_SPAWN_Y, WORLD_MIDPOINT_X, WORLD_WIDTH};
use stardrop_core::enums::{PlayerVisualState, RoundPhase};
use stardrop_core::events::EngineEvent;
use stardrop_core::state::HazardSpec;

use crate::controller::RoundController;
use crate::host::{apply_commands, HostEngine};
use crate::spawn;

fn controller() -> RoundController {
    RoundController::new(RoundConfig::default()).expect("default config is valid")
}

fn collect(controller: &mut RoundController, id: u32, player_x: f32) {
    controller.handle_event(EngineEvent::CollectibleOverlap {
        collectible_id: id,
        player_position: Vec2::new(player_x, 450.0),
    });
}

// ---- Configuration ----

#[test]
fn test_construction_rejects_bad_config() {
    let bad = RoundConfig {
        collectible_count: 0,
        ..Default::default()
    };
    assert!(matches!(
        RoundController::new(bad),
        Err(ConfigError::ZeroCollectibles)
    ));

    let bad = RoundConfig {
        reward: -10,
        ..Default::default()
    };
    assert!(matches!(
        RoundController::new(bad),
        Err(ConfigError::NonPositiveReward(-10))
    ));
}

// ---- Scoring ----

#[test]
fn test_score_accumulates_by_reward() {
    let mut controller = controller();
    for id in 0..5 {
        collect(&mut controller, id, 100.0);
    }
    assert_eq!(controller.score(), 50);
    assert_eq!(controller.collectibles_remaining(), 7);
    assert_eq!(controller.hazards_spawned(), 0);
}

#[test]
fn test_double_overlap_same_collectible_scores_once() {
    let mut controller = controller();
    collect(&mut controller, 3, 100.0);
    collect(&mut controller, 3, 100.0);
    assert_eq!(controller.score(), 10);
    assert_eq!(controller.collectibles_remaining(), 11);
}

#[test]
fn test_unknown_collectible_id_is_ignored() {
    let mut controller = controller();
    collect(&mut controller, 99, 100.0);
    assert_eq!(controller.score(), 0);
    assert_eq!(controller.collectibles_remaining(), 12);
    assert!(controller.drain_commands().is_empty());
}

#[test]
fn test_score_display_tracks_every_collection() {
    let mut controller = controller();
    collect(&mut controller, 0, 100.0);
    collect(&mut controller, 1, 100.0);

    let displays: Vec<i32> = controller
        .drain_commands()
        .into_iter()
        .filter_map(|c| match c {
            HostCommand::DisplayScore { value } => Some(value),
            _ => None,
        })
        .collect();
    assert_eq!(displays, vec![10, 20]);
}

// ---- Respawn and escalation ----

#[test]
fn test_exhausting_set_triggers_single_respawn() {
    let mut controller = controller();
    for id in 0..12 {
        collect(&mut controller, id, 100.0);
    }

    assert_eq!(controller.score(), 120);
    assert_eq!(controller.collectibles_remaining(), 12);
    assert_eq!(controller.hazards_spawned(), 1);

    let commands = controller.drain_commands();
    let spawns = commands
        .iter()
        .filter(|c| matches!(c, HostCommand::SpawnHazard { .. }))
        .count();
    assert_eq!(spawns, 1, "exactly one hazard per exhausted set");

    // Every slot is reactivated at its column, dropped from the top.
    let reactivations: Vec<_> = commands
        .iter()
        .filter_map(|c| match c {
            HostCommand::SetCollectibleActive {
                active: true,
                position: Some(p),
                ..
            } => Some(*p),
            _ => None,
        })
        .collect();
    assert_eq!(reactivations.len(), 12);
    assert!(reactivations.iter().all(|p| p.y == 0.0));
}

#[test]
fn test_escalation_policy_fires_every_cycle() {
    let mut controller = controller();
    for cycle in 1..=3 {
        for id in 0..12 {
            collect(&mut controller, id, 100.0);
        }
        assert_eq!(controller.hazards_spawned(), cycle);
    }
    assert_eq!(controller.score(), 360);
}

#[test]
fn test_partial_collection_never_escalates() {
    let mut controller = controller();
    for id in 0..11 {
        collect(&mut controller, id, 100.0);
    }
    assert_eq!(controller.collectibles_remaining(), 1);
    assert_eq!(controller.hazards_spawned(), 0);
    assert!(!controller
        .drain_commands()
        .iter()
        .any(|c| matches!(c, HostCommand::SpawnHazard { .. })));
}

// ---- Spawn side policy ----

#[test]
fn test_hazard_spawns_opposite_player() {
    let config = RoundConfig::default();
    for seed in 0..64 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let spec = spawn::hazard_spec(&mut rng, 100.0, &config);
        assert!(
            spec.position.x >= WORLD_MIDPOINT_X && spec.position.x <= WORLD_WIDTH,
            "player on left half, hazard at x={}",
            spec.position.x
        );

        let spec = spawn::hazard_spec(&mut rng, 700.0, &config);
        assert!(
            spec.position.x >= 0.0 && spec.position.x <= WORLD_MIDPOINT_X,
            "player on right half, hazard at x={}",
            spec.position.x
        );
    }
}

#[test]
fn test_hazard_launch_velocity_bounds() {
    let config = RoundConfig::default();
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for _ in 0..256 {
        let spec = spawn::hazard_spec(&mut rng, 100.0, &config);
        assert_eq!(spec.position.y, HAZARD_SPAWN_Y);
        assert_eq!(spec.velocity.y, HAZARD_DROP_SPEED);
        assert!(spec.velocity.x.abs() <= config.hazard_max_launch_speed);
    }
}

#[test]
fn test_player_on_midpoint_counts_as_far_half() {
    let config = RoundConfig::default();
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    for _ in 0..64 {
        let spec = spawn::hazard_spec(&mut rng, WORLD_MIDPOINT_X, &config);
        assert!(spec.position.x <= WORLD_MIDPOINT_X);
    }
}

#[test]
fn test_scenario_full_sweep_spawns_far_side() {
    // Player reaches all 12 one by one, standing at x=100 for the
    // last: score 120, one hazard on the right half.
    let mut controller = controller();
    for id in 0..12 {
        collect(&mut controller, id, 100.0);
    }
    assert_eq!(controller.score(), 120);

    let spec = controller
        .drain_commands()
        .into_iter()
        .find_map(|c| match c {
            HostCommand::SpawnHazard { spec } => Some(spec),
            _ => None,
        })
        .expect("hazard spawned");
    assert!(spec.position.x >= WORLD_MIDPOINT_X);
}

// ---- Determinism ----

#[test]
fn test_same_seed_same_hazards() {
    let mut a = controller();
    let mut b = controller();
    for id in 0..12 {
        collect(&mut a, id, 100.0);
        collect(&mut b, id, 100.0);
    }

    let specs = |cmds: Vec<HostCommand>| -> Vec<HazardSpec> {
        cmds.into_iter()
            .filter_map(|c| match c {
                HostCommand::SpawnHazard { spec } => Some(spec),
                _ => None,
            })
            .collect()
    };
    let specs_a = specs(a.drain_commands());
    let specs_b = specs(b.drain_commands());
    assert_eq!(specs_a, specs_b, "same seed must produce the same spawn");

    let json_a = serde_json::to_string(&specs_a).unwrap();
    let json_b = serde_json::to_string(&specs_b).unwrap();
    assert_eq!(json_a, json_b);
}

// ---- Terminal round behavior ----

#[test]
fn test_hazard_contact_ends_round() {
    let mut controller = controller();
    collect(&mut controller, 0, 100.0);
    controller.drain_commands();

    controller.handle_event(EngineEvent::HazardContact);
    assert_eq!(controller.phase(), RoundPhase::Ended);

    let commands = controller.drain_commands();
    assert_eq!(
        commands,
        vec![
            HostCommand::PauseSimulation,
            HostCommand::SetPlayerVisualState {
                state: PlayerVisualState::Hit,
            },
        ]
    );
}

#[test]
fn test_events_after_round_end_are_noops() {
    let mut controller = controller();
    controller.handle_event(EngineEvent::HazardContact);
    controller.drain_commands();

    collect(&mut controller, 0, 100.0);
    controller.handle_event(EngineEvent::HazardContact);

    assert_eq!(controller.score(), 0);
    assert_eq!(controller.collectibles_remaining(), 12);
    assert!(controller.drain_commands().is_empty());
}

#[test]
fn test_reset_reenters_active_without_spawning() {
    let mut controller = controller();
    for id in 0..3 {
        collect(&mut controller, id, 100.0);
    }
    controller.handle_event(EngineEvent::HazardContact);
    controller.drain_commands();

    controller.reset();
    assert_eq!(controller.phase(), RoundPhase::Active);
    assert_eq!(controller.score(), 0);
    assert_eq!(controller.collectibles_remaining(), 12);
    // Hazards persist across resets; the count is per session.
    assert_eq!(controller.hazards_spawned(), 0);

    let commands = controller.drain_commands();
    assert!(!commands
        .iter()
        .any(|c| matches!(c, HostCommand::SpawnHazard { .. })));
    assert!(commands
        .contains(&HostCommand::DisplayScore { value: 0 }));
    assert!(commands.contains(&HostCommand::SetPlayerVisualState {
        state: PlayerVisualState::Normal,
    }));

    // Collection works again after the reset.
    collect(&mut controller, 5, 100.0);
    assert_eq!(controller.score(), 10);
}

#[test]
fn test_snapshot_reflects_state() {
    let mut controller = controller();
    for id in 0..12 {
        collect(&mut controller, id, 500.0);
    }
    controller.handle_event(EngineEvent::HazardContact);

    let snapshot = controller.snapshot();
    assert_eq!(snapshot.score, 120);
    assert_eq!(snapshot.phase, RoundPhase::Ended);
    assert_eq!(snapshot.collectibles_remaining, 12);
    assert_eq!(snapshot.hazards_spawned, 1);
}

// ---- Host dispatch ----

#[derive(Default)]
struct RecordingHost {
    score_values: Vec<i32>,
    deactivated: Vec<u32>,
    reactivated: Vec<(u32, Vec2)>,
    hazards: Vec<HazardSpec>,
    paused: bool,
    visual_states: Vec<PlayerVisualState>,
}

impl HostEngine for RecordingHost {
    fn display_score(&mut self, value: i32) {
        self.score_values.push(value);
    }

    fn set_collectible_active(&mut self, collectible_id: u32, active: bool, position: Option<Vec2>) {
        if active {
            self.reactivated
                .push((collectible_id, position.unwrap_or_default()));
        } else {
            self.deactivated.push(collectible_id);
        }
    }

    fn instantiate_hazard(&mut self, spec: HazardSpec) {
        self.hazards.push(spec);
    }

    fn pause_simulation(&mut self) {
        self.paused = true;
    }

    fn set_player_visual_state(&mut self, state: PlayerVisualState) {
        self.visual_states.push(state);
    }
}

#[test]
fn test_commands_dispatch_to_host_capabilities() {
    let mut controller = controller();
    let mut host = RecordingHost::default();

    for id in 0..12 {
        collect(&mut controller, id, 100.0);
        apply_commands(&mut host, controller.drain_commands());
    }
    controller.handle_event(EngineEvent::HazardContact);
    apply_commands(&mut host, controller.drain_commands());

    assert_eq!(host.score_values.last(), Some(&120));
    assert_eq!(host.deactivated.len(), 12);
    assert_eq!(host.reactivated.len(), 12);
    assert_eq!(host.hazards.len(), 1);
    assert!(host.paused);
    assert_eq!(host.visual_states, vec![PlayerVisualState::Hit]);
}
