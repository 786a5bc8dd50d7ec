//! CyberDefender - a lane-defense arcade game about cybersecurity habits
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, defense, difficulty, game over)
//! - `facts`: Cybersecurity tip deck shown after successful defenses
//! - `settings`: Presentation preferences persisted in LocalStorage

pub mod facts;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz; the game is DOM-rendered)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Number of lanes threats can spawn in
    pub const LANE_COUNT: usize = 3;
    /// Total unresolved threats that end the run
    pub const OVERLOAD_LIMIT: usize = 5;

    /// Ticks between spawns at level 1 (2 seconds; divided by level)
    pub const BASE_SPAWN_INTERVAL_TICKS: u32 = 120;

    /// Highest difficulty level
    pub const LEVEL_CAP: u32 = 5;
    /// Score per level step
    pub const LEVEL_SCORE_STEP: u32 = 10;

    /// Chance of a shield power-up on a successful defense
    pub const SHIELD_CHANCE: f32 = 0.1;
    /// Shield power-up duration in ticks (5 seconds)
    pub const SHIELD_DURATION_TICKS: u32 = 300;
}
