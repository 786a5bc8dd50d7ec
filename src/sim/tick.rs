//! Fixed timestep simulation tick
//!
//! Every gameplay transition happens here in a fixed order: commands, timers,
//! then the overload check. The shell drives `tick` from a fixed-timestep
//! accumulator, so a lane defense and the overload check never interleave
//! mid-update.

use rand::Rng;

use super::state::{GamePhase, GameState, Lane, Threat, ThreatTier};
use crate::consts::*;
use crate::facts;

/// Commands for a single tick. One-shot flags; the shell clears them after
/// each processed step.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Clear the chosen lane (shield button / number key)
    pub defend: Option<Lane>,
    /// Leave the tutorial and start the spawn clock
    pub dismiss_tutorial: bool,
    /// Restore the initial state
    pub reset: bool,
}

/// Difficulty level for a cumulative score
#[inline]
pub fn level_for_score(score: u32) -> u32 {
    (1 + score / LEVEL_SCORE_STEP).min(LEVEL_CAP)
}

/// Ticks between spawns at a given level
#[inline]
pub fn spawn_interval_ticks(level: u32) -> u32 {
    BASE_SPAWN_INTERVAL_TICKS / level.max(1)
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) {
    if input.reset {
        state.reset();
        return;
    }

    if input.dismiss_tutorial && state.phase == GamePhase::Tutorial {
        state.phase = GamePhase::Playing;
        state.spawn_countdown = spawn_interval_ticks(state.level);
    }

    // The spawn clock, defenses, and scoring run only while playing
    if state.phase != GamePhase::Playing {
        return;
    }

    state.time_ticks += 1;

    if let Some(lane) = input.defend {
        defend(state, lane);
    }

    // Shield expires on its own, no player action required
    state.shield_ticks = state.shield_ticks.saturating_sub(1);

    // Spawn clock: one threat per interval, interval shrinking with level
    state.spawn_countdown = state.spawn_countdown.saturating_sub(1);
    if state.spawn_countdown == 0 {
        spawn_threat(state);
        state.spawn_countdown = spawn_interval_ticks(state.level);

        // Overload check: the threat collection only ever grows here
        if state.threats.len() >= OVERLOAD_LIMIT {
            state.phase = GamePhase::GameOver;
            state.shield_ticks = 0;
        }
    }
}

/// Clear every threat in `lane` at once, scoring their point values.
/// Defending an empty lane is a no-op, not an error: no score change, no
/// tip refresh, no shield roll.
fn defend(state: &mut GameState, lane: Lane) {
    if state.lane_count(lane) == 0 {
        return;
    }

    let points: u32 = state.threats_in_lane(lane).map(|t| t.tier.points()).sum();
    state.score += points;
    state.threats.retain(|t| t.lane != lane);

    // Fresh tip on every successful defense
    state.fact_index = Some(state.rng.random_range(0..facts::FACTS.len()));

    // A re-roll while the shield is already up restarts the countdown
    if state.rng.random::<f32>() < SHIELD_CHANCE {
        state.shield_ticks = SHIELD_DURATION_TICKS;
    }

    // Level is a pure function of score; a level change restarts the spawn
    // clock at the new cadence
    let level = level_for_score(state.score);
    if level != state.level {
        state.level = level;
        state.spawn_countdown = spawn_interval_ticks(level);
    }
}

/// Synthesize one threat with lane and tier drawn uniformly from the seeded
/// RNG and append it. Always succeeds; grows the collection by exactly one.
fn spawn_threat(state: &mut GameState) {
    let lane = Lane::ALL[state.rng.random_range(0..Lane::ALL.len())];
    let tier = ThreatTier::ALL[state.rng.random_range(0..ThreatTier::ALL.len())];
    let id = state.next_entity_id();
    state.threats.push(Threat { id, lane, tier });
}
