//! Headless demo shell for the STARDROP round logic.
//!
//! Stands in for a real engine integration: implements the host
//! capability trait by logging, and scripts a full play session.

pub mod host;

pub use stardrop_core as core;
