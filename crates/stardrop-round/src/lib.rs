//! Round controller for STARDROP.
//!
//! `RoundController` owns score and collectible/hazard bookkeeping,
//! consumes the two domain events the host engine surfaces, and queues
//! `HostCommand`s for the host to execute. Completely headless (no
//! engine dependency), enabling deterministic testing.

pub mod controller;
pub mod host;
pub mod spawn;

pub use controller::RoundController;
pub use stardrop_core as core;

#[cfg(test)]
mod tests;
