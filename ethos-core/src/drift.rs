//! Personal Drift — the bounded per-agent deviation from a profile matrix.
//!
//! Repeated experiences nudge an agent's projection weights away from its
//! fixed personality matrix, within a tight envelope: each cell is bounded
//! to ±max(0.2·|baseline|, 0.01), where the baseline is the corresponding
//! profile weight. The envelope keeps a lifetime of learning from ever
//! overwhelming the personality.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::emotion::{CHANNEL_COUNT, Emotion};
use crate::profiles::ProfileMatrix;
use crate::types::Axis;

/// Per-agent 4×20 perturbation matrix, zeroed at agent creation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PersonalDrift {
    cells: [[f32; CHANNEL_COUNT]; 4],
}

/// The drift envelope for one baseline weight.
#[must_use]
fn bound_for(baseline: f32) -> f32 {
    (0.2 * baseline.abs()).max(0.01)
}

impl PersonalDrift {
    /// A zero drift matrix — a freshly created agent.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: [[0.0; CHANNEL_COUNT]; 4],
        }
    }

    /// The raw drift value for one cell.
    #[must_use]
    pub fn get(&self, axis: Axis, emotion: Emotion) -> f32 {
        self.cells[axis.index()][emotion.index()]
    }

    /// Accumulate a learning delta into one cell, clamped to the envelope
    /// of the given profile's baseline weight.
    pub fn nudge(&mut self, axis: Axis, emotion: Emotion, delta: f32, profile: &ProfileMatrix) {
        let baseline = profile.row(axis)[emotion.index()];
        let bound = bound_for(baseline);
        let cell = &mut self.cells[axis.index()][emotion.index()];
        *cell = (*cell + delta).clamp(-bound, bound);
    }

    /// The drift row for one axis, re-clamped against the profile baseline.
    ///
    /// Stored cells can exceed their envelope through floating-point creep
    /// or stale agent data; that is a diagnostic, not a failure — the value
    /// is hard-clamped before use.
    #[must_use]
    pub fn bounded_row(&self, axis: Axis, profile: &ProfileMatrix) -> [f32; CHANNEL_COUNT] {
        let baseline_row = profile.row(axis);
        let mut row = self.cells[axis.index()];
        for (col, value) in row.iter_mut().enumerate() {
            let bound = bound_for(baseline_row[col]);
            if value.abs() > bound {
                warn!(
                    axis = ?axis,
                    channel = col,
                    value = *value,
                    bound,
                    "drift cell exceeds its envelope; clamping"
                );
                *value = value.clamp(-bound, bound);
            }
        }
        row
    }
}

impl Default for PersonalDrift {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiles::PersonalityProfile;

    #[test]
    fn fresh_drift_is_zero() {
        let drift = PersonalDrift::new();
        for axis in Axis::ALL {
            for emotion in Emotion::ALL {
                assert_eq!(drift.get(axis, emotion), 0.0);
            }
        }
    }

    #[test]
    fn nudge_respects_envelope() {
        let profile = PersonalityProfile::Neutral.matrix();
        let mut drift = PersonalDrift::new();

        // Neutral valence weight for happiness is 1.0 → bound = 0.2.
        for _ in 0..100 {
            drift.nudge(Axis::Valence, Emotion::Happiness, 0.05, profile);
        }
        assert!((drift.get(Axis::Valence, Emotion::Happiness) - 0.2).abs() < 1e-6);

        for _ in 0..100 {
            drift.nudge(Axis::Valence, Emotion::Happiness, -0.05, profile);
        }
        assert!((drift.get(Axis::Valence, Emotion::Happiness) + 0.2).abs() < 1e-6);
    }

    #[test]
    fn tiny_baseline_still_gets_minimum_envelope() {
        // Neutral loyalty→arousal weight is 0.0 → bound floor of 0.01.
        let profile = PersonalityProfile::Neutral.matrix();
        let mut drift = PersonalDrift::new();
        drift.nudge(Axis::Arousal, Emotion::Loyalty, 1.0, profile);
        assert!((drift.get(Axis::Arousal, Emotion::Loyalty) - 0.01).abs() < 1e-6);
    }

    #[test]
    fn bounded_row_clamps_creep() {
        let profile = PersonalityProfile::Neutral.matrix();
        let mut drift = PersonalDrift::new();
        // Force a cell past its envelope the way corrupt save data would.
        drift.cells[0][0] = 5.0;

        let row = drift.bounded_row(Axis::Valence, profile);
        assert!((row[0] - 0.2).abs() < 1e-6);
    }
}
