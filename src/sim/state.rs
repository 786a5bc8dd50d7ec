//! Game state and core simulation types
//!
//! The shell renders from read-only snapshots of `GameState` and mutates it
//! only through `tick` commands.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Tutorial overlay is up; the spawn clock is suspended
    Tutorial,
    /// Active gameplay
    Playing,
    /// Run ended (network overloaded)
    GameOver,
}

/// One of the three columns threats appear in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lane {
    Left,
    Center,
    Right,
}

impl Lane {
    /// All lanes, in display order
    pub const ALL: [Lane; LANE_COUNT] = [Lane::Left, Lane::Center, Lane::Right];

    /// Column index in display order
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Lane::Left => 0,
            Lane::Center => 1,
            Lane::Right => 2,
        }
    }

    /// Lane for a column index; rejects anything outside the board
    pub fn from_index(index: usize) -> Option<Lane> {
        Lane::ALL.get(index).copied()
    }
}

/// Threat category, determining point value and appearance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThreatTier {
    /// Port scan / reconnaissance probe
    Probe,
    /// Exploit attempt
    Exploit,
    /// Active breach
    Breach,
}

impl ThreatTier {
    /// The fixed tier set; nothing else exists at runtime
    pub const ALL: [ThreatTier; 3] = [ThreatTier::Probe, ThreatTier::Exploit, ThreatTier::Breach];

    /// Score awarded when the threat is cleared
    #[inline]
    pub fn points(self) -> u32 {
        match self {
            ThreatTier::Probe => 1,
            ThreatTier::Exploit => 2,
            ThreatTier::Breach => 3,
        }
    }

    /// Display glyph
    pub fn symbol(self) -> &'static str {
        match self {
            ThreatTier::Probe => "▲",
            ThreatTier::Exploit => "◆",
            ThreatTier::Breach => "★",
        }
    }

    /// CSS class suffix used by the shell
    pub fn style(self) -> &'static str {
        match self {
            ThreatTier::Probe => "probe",
            ThreatTier::Exploit => "exploit",
            ThreatTier::Breach => "breach",
        }
    }
}

/// A spawned hostile entity. Immutable once created; a lane defense removes
/// threats whole, it never mutates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Threat {
    /// Unique, creation-ordered id
    pub id: u32,
    pub lane: Lane,
    pub tier: ThreatTier,
}

/// Complete game state (deterministic)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG driving spawn, tier, tip, and shield rolls
    pub(crate) rng: Pcg32,
    /// Current phase
    pub phase: GamePhase,
    /// Cumulative score; only ever increases
    pub score: u32,
    /// Difficulty level in [1, LEVEL_CAP], derived from score
    pub level: u32,
    /// Unresolved threats across all lanes, in spawn order
    pub threats: Vec<Threat>,
    /// Ticks until the shield power-up expires (0 = inactive)
    pub shield_ticks: u32,
    /// Index into the tip deck, set on each successful defense
    pub fact_index: Option<usize>,
    /// Ticks until the next spawn while playing
    pub(crate) spawn_countdown: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Next entity id
    next_id: u32,
}

impl GameState {
    /// Create a new game state with the given seed, starting at the tutorial
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Tutorial,
            score: 0,
            level: 1,
            threats: Vec::new(),
            shield_ticks: 0,
            fact_index: None,
            spawn_countdown: BASE_SPAWN_INTERVAL_TICKS,
            time_ticks: 0,
            next_id: 1,
        }
    }

    /// Allocate a new entity id
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Restore initial values. No partial reset: score, level, threats,
    /// shield, tip, and the spawn clock all return to their starting state.
    /// The tutorial is shown once per session, so a reset re-enters Playing
    /// unless the tutorial was never dismissed. The RNG stream continues,
    /// keeping the whole session deterministic from its startup seed.
    pub fn reset(&mut self) {
        self.score = 0;
        self.level = 1;
        self.threats.clear();
        self.shield_ticks = 0;
        self.fact_index = None;
        self.spawn_countdown = BASE_SPAWN_INTERVAL_TICKS;
        self.time_ticks = 0;
        self.next_id = 1;
        if self.phase != GamePhase::Tutorial {
            self.phase = GamePhase::Playing;
        }
    }

    /// Threats currently in a lane, in spawn order
    pub fn threats_in_lane(&self, lane: Lane) -> impl Iterator<Item = &Threat> + '_ {
        self.threats.iter().filter(move |t| t.lane == lane)
    }

    /// Number of unresolved threats in a lane
    pub fn lane_count(&self, lane: Lane) -> usize {
        self.threats_in_lane(lane).count()
    }

    /// Whether the shield power-up is active
    #[inline]
    pub fn shield_active(&self) -> bool {
        self.shield_ticks > 0
    }

    /// Whether the run has ended
    #[inline]
    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Tip chosen by the last successful defense, if any
    pub fn fact(&self) -> Option<&'static str> {
        self.fact_index.map(|i| crate::facts::FACTS[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lane_from_index() {
        assert_eq!(Lane::from_index(0), Some(Lane::Left));
        assert_eq!(Lane::from_index(1), Some(Lane::Center));
        assert_eq!(Lane::from_index(2), Some(Lane::Right));
        assert_eq!(Lane::from_index(3), None);
        for lane in Lane::ALL {
            assert_eq!(Lane::from_index(lane.index()), Some(lane));
        }
    }

    #[test]
    fn test_tier_points() {
        assert_eq!(ThreatTier::Probe.points(), 1);
        assert_eq!(ThreatTier::Exploit.points(), 2);
        assert_eq!(ThreatTier::Breach.points(), 3);
    }

    #[test]
    fn test_new_state_initial_values() {
        let state = GameState::new(7);
        assert_eq!(state.phase, GamePhase::Tutorial);
        assert_eq!(state.score, 0);
        assert_eq!(state.level, 1);
        assert!(state.threats.is_empty());
        assert!(!state.shield_active());
        assert!(state.fact().is_none());
        assert!(!state.is_over());
    }

    #[test]
    fn test_lane_snapshot_filters() {
        let mut state = GameState::new(7);
        for (lane, tier) in [
            (Lane::Left, ThreatTier::Probe),
            (Lane::Center, ThreatTier::Breach),
            (Lane::Left, ThreatTier::Exploit),
        ] {
            let id = state.next_entity_id();
            state.threats.push(Threat { id, lane, tier });
        }

        assert_eq!(state.lane_count(Lane::Left), 2);
        assert_eq!(state.lane_count(Lane::Center), 1);
        assert_eq!(state.lane_count(Lane::Right), 0);

        let left: Vec<_> = state.threats_in_lane(Lane::Left).collect();
        assert_eq!(left[0].tier, ThreatTier::Probe);
        assert_eq!(left[1].tier, ThreatTier::Exploit);
        assert!(left[0].id < left[1].id);
    }

    #[test]
    fn test_entity_ids_are_creation_ordered() {
        let mut state = GameState::new(7);
        let a = state.next_entity_id();
        let b = state.next_entity_id();
        assert!(b > a);
    }
}
