//! Projection Engine — collapsing 20 emotion channels onto 4 decision axes.
//!
//! Each axis is an L1-normalized weighted sum: dividing by the sum of
//! absolute weights guarantees the output range regardless of how many
//! channels are simultaneously extreme. A zero-norm row projects to 0 by
//! definition, never NaN.

use crate::drift::PersonalDrift;
use crate::emotion::{CHANNEL_COUNT, EmotionVector};
use crate::profiles::ProfileMatrix;
use crate::types::{Axes4, Axis};

/// Project one weight row against an emotion state.
///
/// Result = (Σ rowᵢ·Eᵢ) / (Σ|rowᵢ|), clamped to [-100, 100]. With channels
/// in [0, 100] the quotient already sits inside the band; the clamp is a
/// contract, not an expectation.
#[must_use]
pub fn project_axis(row: &[f32; CHANNEL_COUNT], emotions: &EmotionVector) -> f32 {
    let channels = emotions.channels();
    let mut dot = 0.0_f32;
    let mut l1 = 0.0_f32;
    for (weight, value) in row.iter().zip(channels.iter()) {
        dot += weight * value;
        l1 += weight.abs();
    }
    if l1 < f32::EPSILON {
        return 0.0;
    }
    (dot / l1).clamp(-100.0, 100.0)
}

/// Compute the raw 4D decision vector for one agent.
///
/// The effective weight row for each axis is the profile row plus the
/// agent's (envelope-clamped) drift row. Pure: identical inputs always
/// produce identical output.
#[must_use]
pub fn compute_raw(
    profile: &ProfileMatrix,
    drift: &PersonalDrift,
    emotions: &EmotionVector,
) -> Axes4 {
    let mut out = [0.0_f32; 4];
    for axis in Axis::ALL {
        let baseline = profile.row(axis);
        let drift_row = drift.bounded_row(axis, profile);
        let mut effective = *baseline;
        for (cell, d) in effective.iter_mut().zip(drift_row.iter()) {
            *cell += d;
        }
        out[axis.index()] = project_axis(&effective, emotions);
    }
    Axes4 {
        valence: out[0],
        arousal: out[1],
        dominance: out[2],
        affiliation: out[3],
    }
}
