//! Scripted demo session for the STARDROP round logic.
//!
//! Walks the canonical arc without an engine attached: the player
//! sweeps up all twelve collectibles (triggering the respawn and the
//! first hazard), then runs into the hazard, ending the round. Every
//! command the controller emits is applied to a logging host.

use glam::Vec2;

use stardrop_app::host::LoggingHost;
use stardrop_core::config::RoundConfig;
use stardrop_core::events::EngineEvent;
use stardrop_core::layout;
use stardrop_round::host::apply_commands;
use stardrop_round::RoundController;

fn main() {
    env_logger::init();

    let config = RoundConfig::default();
    let scene = layout::default_scene(&config);
    log::info!(
        "scene: {} platforms, {} collectibles, player at ({}, {})",
        scene.platforms.len(),
        scene.collectible_spawns.len(),
        scene.player_start.x,
        scene.player_start.y
    );

    let mut controller = RoundController::new(config).expect("default round config is valid");
    let mut host = LoggingHost::default();

    // The player walks right along the bottom, reaching each column.
    for (id, spawn) in scene.collectible_spawns.iter().enumerate() {
        controller.handle_event(EngineEvent::CollectibleOverlap {
            collectible_id: id as u32,
            player_position: Vec2::new(spawn.x, scene.player_start.y),
        });
        apply_commands(&mut host, controller.drain_commands());
    }

    // The freshly spawned hazard finds the player.
    controller.handle_event(EngineEvent::HazardContact);
    apply_commands(&mut host, controller.drain_commands());

    let snapshot = controller.snapshot();
    log::info!(
        "session over: {}",
        serde_json::to_string(&snapshot).unwrap_or_default()
    );
}
