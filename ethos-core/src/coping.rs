//! Coping Potential Estimator — objective situational capacity.
//!
//! Coping potential is the appraisal-theory notion of how much capacity an
//! agent *actually* has in its current situation (Lazarus & Folkman, 1984),
//! distinct from the subjective dominance axis: a terrified agent at full
//! strength still has high coping potential.
//!
//! Scale [0, 100]: up to 60 points from vitality, ±20 from local headcount
//! advantage, penalties for impairing statuses. A missing agent appraises
//! to the neutral 50.

use serde::{Deserialize, Serialize};

/// Neutral coping value used when no subject is available.
pub const NEUTRAL_COPING: f32 = 50.0;

/// A read-only snapshot of the agent's current situation, supplied by the
/// hosting simulation each query.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Situation {
    /// Current vitality.
    pub hp: f32,
    /// Maximum vitality.
    pub max_hp: f32,
    /// Friendly agents present in the same locale.
    pub allies: u32,
    /// Hostile agents present in the same locale.
    pub enemies: u32,
    /// Total occupants of the locale (including the agent itself).
    pub occupants: u32,
    /// Whether the agent is currently fighting.
    pub in_combat: bool,
    /// Blinded status.
    pub blind: bool,
    /// Poisoned status.
    pub poisoned: bool,
    /// Sleeping status.
    pub asleep: bool,
    /// Cursed status.
    pub cursed: bool,
}

impl Default for Situation {
    fn default() -> Self {
        Self {
            hp: 100.0,
            max_hp: 100.0,
            allies: 0,
            enemies: 0,
            occupants: 1,
            in_combat: false,
            blind: false,
            poisoned: false,
            asleep: false,
            cursed: false,
        }
    }
}

/// Compute the objective coping potential for a situation.
///
/// `None` (no subject) appraises to [`NEUTRAL_COPING`].
#[must_use]
pub fn coping_potential(situation: Option<&Situation>) -> f32 {
    let Some(s) = situation else {
        return NEUTRAL_COPING;
    };

    let hp_ratio = if s.max_hp > 0.0 {
        (s.hp / s.max_hp).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let mut coping = hp_ratio * 60.0;

    // Headcount advantage: 5 points per individual, capped at ±4.
    let advantage = (i64::from(s.allies) - i64::from(s.enemies)).clamp(-4, 4) as f32;
    coping += advantage * 5.0;

    if s.blind {
        coping -= 10.0;
    }
    if s.poisoned {
        coping -= 10.0;
    }
    if s.asleep {
        coping -= 20.0;
    }
    if s.cursed {
        coping -= 5.0;
    }

    coping.clamp(0.0, 100.0)
}
