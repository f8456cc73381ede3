//! Contextual Modulation Layer — turning the raw projection into the
//! effective decision signal.
//!
//! The raw 4D vector says how the agent *feels*; the effective vector says
//! how it should *act* here and now. Four adjustments apply, in order:
//! coping shifts dominance, environment intensity multiplies arousal,
//! remembered relationship shifts affiliation, and the anticipated outcome
//! shifts valence. A final pass clamps every axis to [-100, 100] and
//! floors arousal at 0.

use serde::{Deserialize, Serialize};

use crate::coping::Situation;
use crate::types::Axes4;

/// Remembered relationship with the interaction target, supplied by the
/// hosting simulation's relationship memory. Both channels [0, 100];
/// the 50/50 default is affiliation-neutral.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Relation {
    /// Remembered trust toward the target.
    pub trust: f32,
    /// Remembered friendship toward the target.
    pub friendship: f32,
}

impl Default for Relation {
    fn default() -> Self {
        Self {
            trust: 50.0,
            friendship: 50.0,
        }
    }
}

/// The momentary 4D decision state returned to collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Decision4D {
    /// Unmodulated projection of the emotion state.
    pub raw: Axes4,
    /// Context-adjusted signal, clamped with arousal floored at 0.
    pub effective: Axes4,
    /// Objective coping potential used during modulation.
    pub coping: f32,
    /// False when the subject had no AI data — all axes are zero.
    pub valid: bool,
}

impl Decision4D {
    /// The state returned for a subject without AI data.
    #[must_use]
    pub fn invalid() -> Self {
        Self {
            raw: Axes4::ZERO,
            effective: Axes4::ZERO,
            coping: crate::coping::NEUTRAL_COPING,
            valid: false,
        }
    }
}

/// Environment intensity in [0, 1]: combat contributes 0.40, crowding
/// contributes 0.05 per occupant beyond 2 (capped at 0.30).
#[must_use]
fn environment_intensity(situation: &Situation) -> f32 {
    let combat = if situation.in_combat { 0.40 } else { 0.0 };
    let crowd = (0.05 * situation.occupants.saturating_sub(2) as f32).min(0.30);
    (combat + crowd).min(1.0)
}

/// Apply contextual modulation to a raw 4D vector.
///
/// `forecast` is the external anticipated-outcome signal; its valence
/// contribution is clamped to ±10 regardless of magnitude.
#[must_use]
pub fn modulate(
    raw: Axes4,
    coping: f32,
    situation: &Situation,
    relation: &Relation,
    forecast: f32,
) -> Axes4 {
    let mut out = raw;

    // Coping shifts perceived control: ±20 before the final clamp.
    out.dominance += (coping - 50.0) * 0.4;

    // Environment multiplies activation: multiplier in [1.0, 1.5].
    out.arousal *= 1.0 + environment_intensity(situation) * 0.5;

    // Relationship memory shifts relational orientation: ±15.
    out.affiliation += ((relation.trust + relation.friendship) - 100.0) * 0.15;

    // Anticipated outcome shifts evaluation: ±10.
    out.valence += (forecast * 0.10).clamp(-10.0, 10.0);

    out.clamped_effective()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(valence: f32, arousal: f32, dominance: f32, affiliation: f32) -> Axes4 {
        Axes4 {
            valence,
            arousal,
            dominance,
            affiliation,
        }
    }

    #[test]
    fn neutral_coping_leaves_dominance_unchanged() {
        let out = modulate(
            raw(0.0, 10.0, 30.0, 0.0),
            50.0,
            &Situation::default(),
            &Relation::default(),
            0.0,
        );
        assert!((out.dominance - 30.0).abs() < f32::EPSILON);
    }

    #[test]
    fn full_coping_shifts_dominance_by_twenty() {
        let out = modulate(
            raw(0.0, 0.0, 0.0, 0.0),
            100.0,
            &Situation::default(),
            &Relation::default(),
            0.0,
        );
        assert!((out.dominance - 20.0).abs() < f32::EPSILON);
    }

    #[test]
    fn combat_and_crowd_scale_arousal() {
        let situation = Situation {
            in_combat: true,
            occupants: 8, // crowd term = 0.05 * 6 = 0.30 (capped)
            ..Situation::default()
        };
        // intensity = 0.40 + 0.30 = 0.70 → multiplier 1.35
        let out = modulate(
            raw(0.0, 40.0, 0.0, 0.0),
            50.0,
            &situation,
            &Relation::default(),
            0.0,
        );
        assert!((out.arousal - 54.0).abs() < 1e-4);
    }

    #[test]
    fn arousal_multiplier_never_exceeds_band() {
        let situation = Situation {
            in_combat: true,
            occupants: 100,
            ..Situation::default()
        };
        let out = modulate(
            raw(0.0, 100.0, 0.0, 0.0),
            50.0,
            &situation,
            &Relation::default(),
            0.0,
        );
        // 100 * 1.35 pre-clamp, held to the band ceiling.
        assert!((out.arousal - 100.0).abs() < f32::EPSILON);
    }

    #[test]
    fn remembered_relation_shifts_affiliation() {
        let friendly = Relation {
            trust: 100.0,
            friendship: 100.0,
        };
        let out = modulate(
            raw(0.0, 0.0, 0.0, 0.0),
            50.0,
            &Situation::default(),
            &friendly,
            0.0,
        );
        assert!((out.affiliation - 15.0).abs() < f32::EPSILON);

        let stranger = Relation {
            trust: 0.0,
            friendship: 0.0,
        };
        let out = modulate(
            raw(0.0, 0.0, 0.0, 0.0),
            50.0,
            &Situation::default(),
            &stranger,
            0.0,
        );
        assert!((out.affiliation + 15.0).abs() < f32::EPSILON);
    }

    #[test]
    fn forecast_contribution_is_clamped() {
        let out = modulate(
            raw(0.0, 0.0, 0.0, 0.0),
            50.0,
            &Situation::default(),
            &Relation::default(),
            1_000_000.0,
        );
        assert!((out.valence - 10.0).abs() < f32::EPSILON);
    }

    #[test]
    fn arousal_is_floored_at_zero() {
        let out = modulate(
            raw(0.0, -50.0, 0.0, 0.0),
            50.0,
            &Situation::default(),
            &Relation::default(),
            0.0,
        );
        assert_eq!(out.arousal, 0.0);
    }
}
