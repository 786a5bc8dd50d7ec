//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod state;
pub mod tick;

pub use state::{GamePhase, GameState, Lane, Threat, ThreatTier};
pub use tick::{TickInput, level_for_score, spawn_interval_ticks, tick};
