//! Core types and definitions for the STARDROP round logic.
//!
//! This crate defines the vocabulary shared across the other crates:
//! host commands, engine events, round state, configuration, tuning
//! constants, and the static scene layout. It has no dependency on
//! any game engine or runtime framework.

pub mod commands;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod layout;
pub mod state;
