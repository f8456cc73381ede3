//! Profile Matrix Table — the eight fixed personality weight matrices.
//!
//! Each personality profile owns one immutable 4×20 matrix: one row per
//! decision axis (valence, arousal, dominance, affiliation), one column per
//! emotion channel in [`Emotion::ALL`](crate::emotion::Emotion::ALL) order.
//! The tables are global read-only configuration, constructed at compile
//! time and shared without synchronization.
//!
//! The literal weights are behavioral contract: two builds must project the
//! same emotion state to the same axes.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::emotion::CHANNEL_COUNT;
use crate::types::Axis;

/// A 4×20 personality-to-axis weight matrix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileMatrix {
    /// Rows in [`Axis::ALL`] order; columns in `Emotion::ALL` order.
    pub rows: [[f32; CHANNEL_COUNT]; 4],
}

impl ProfileMatrix {
    /// The weight row for one decision axis.
    #[must_use]
    pub fn row(&self, axis: Axis) -> &[f32; CHANNEL_COUNT] {
        &self.rows[axis.index()]
    }
}

/// The eight personality profiles, each bound to one matrix in [`PROFILES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PersonalityProfile {
    /// Even-keeled baseline weighting.
    Neutral,
    /// Anger and hate feed arousal and dominance.
    Aggressive,
    /// Fear-forward; threat drives activation, control collapses under it.
    Defensive,
    /// Flattened weighting — nothing dominates.
    Balanced,
    /// Amplified valence swings; shame and compassion cut deep.
    Sensitive,
    /// Pride and courage carry control; fear barely registers.
    Confident,
    /// Acquisition reads as positive; envy activates.
    Greedy,
    /// Bonds dominate every axis; betrayal channels cut hardest.
    Loyal,
}

impl PersonalityProfile {
    /// All profiles in table order.
    pub const ALL: [Self; 8] = [
        Self::Neutral,
        Self::Aggressive,
        Self::Defensive,
        Self::Balanced,
        Self::Sensitive,
        Self::Confident,
        Self::Greedy,
        Self::Loyal,
    ];

    /// The profile's position in [`PROFILES`].
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Look up a profile by table index.
    ///
    /// Out-of-range indices fall back to `Neutral` rather than failing —
    /// stale profile numbers in agent data must not break projection.
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or(Self::Neutral)
    }

    /// This profile's weight matrix.
    #[must_use]
    pub fn matrix(self) -> &'static ProfileMatrix {
        &PROFILES[self.index()]
    }
}

impl fmt::Display for PersonalityProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Neutral => "neutral",
            Self::Aggressive => "aggressive",
            Self::Defensive => "defensive",
            Self::Balanced => "balanced",
            Self::Sensitive => "sensitive",
            Self::Confident => "confident",
            Self::Greedy => "greedy",
            Self::Loyal => "loyal",
        };
        write!(f, "{name}")
    }
}

// ---------------------------------------------------------------------------
// The matrices
// ---------------------------------------------------------------------------
//
// Column order (see `Emotion::ALL`):
//   hap   sad   ang   fea   dis   sur   tru   fri   lov   hat
//   env   gre   pri   sha   com   loy   cou   hop   des   cur
//
// Row order: valence, arousal, dominance, affiliation.

/// The eight profile matrices, indexed by [`PersonalityProfile::index`].
pub static PROFILES: [ProfileMatrix; 8] = [
    // Neutral
    ProfileMatrix {
        rows: [
            [
                1.00, -1.00, -0.60, -0.70, -0.50, 0.10, 0.40, 0.50, 0.80, -0.90,
                -0.40, -0.20, 0.30, -0.60, 0.40, 0.30, 0.30, 0.70, -1.00, 0.20,
            ],
            [
                0.30, -0.40, 0.90, 0.80, 0.30, 0.90, -0.20, 0.10, 0.40, 0.70,
                0.40, 0.30, 0.20, 0.30, 0.10, 0.00, 0.50, 0.20, -0.50, 0.60,
            ],
            [
                0.20, -0.50, 0.60, -0.90, 0.10, -0.20, 0.10, 0.10, 0.10, 0.40,
                -0.20, 0.20, 0.80, -0.80, 0.00, 0.10, 0.90, 0.30, -0.70, 0.10,
            ],
            [
                0.30, -0.20, -0.70, -0.30, -0.60, 0.00, 0.90, 1.00, 0.90, -1.00,
                -0.50, -0.40, -0.10, -0.20, 0.80, 0.90, 0.10, 0.20, -0.40, 0.20,
            ],
        ],
    },
    // Aggressive
    ProfileMatrix {
        rows: [
            [
                0.80, -0.90, -0.20, -0.80, -0.40, 0.10, 0.20, 0.30, 0.50, -0.40,
                -0.20, 0.00, 0.50, -0.70, 0.10, 0.20, 0.50, 0.50, -1.00, 0.20,
            ],
            [
                0.30, -0.30, 1.20, 0.90, 0.40, 0.90, -0.20, 0.00, 0.30, 1.00,
                0.50, 0.40, 0.40, 0.40, 0.00, 0.00, 0.80, 0.20, -0.30, 0.50,
            ],
            [
                0.30, -0.50, 1.00, -0.60, 0.20, -0.10, 0.10, 0.00, 0.00, 0.80,
                0.00, 0.30, 1.00, -0.90, -0.10, 0.00, 1.10, 0.30, -0.60, 0.10,
            ],
            [
                0.20, -0.20, -0.40, -0.40, -0.50, 0.00, 0.60, 0.70, 0.60, -0.80,
                -0.40, -0.30, 0.00, -0.20, 0.40, 0.70, 0.20, 0.10, -0.40, 0.10,
            ],
        ],
    },
    // Defensive
    ProfileMatrix {
        rows: [
            [
                0.90, -1.00, -0.70, -0.50, -0.50, 0.00, 0.60, 0.60, 0.80, -0.90,
                -0.40, -0.20, 0.20, -0.60, 0.40, 0.40, 0.20, 0.70, -1.00, 0.10,
            ],
            [
                0.20, -0.30, 0.70, 1.20, 0.40, 1.00, -0.30, 0.00, 0.30, 0.60,
                0.30, 0.20, 0.10, 0.40, 0.10, 0.00, 0.30, 0.10, -0.40, 0.50,
            ],
            [
                0.20, -0.60, 0.40, -1.20, 0.00, -0.30, 0.20, 0.20, 0.10, 0.30,
                -0.30, 0.10, 0.60, -0.90, 0.00, 0.20, 0.70, 0.30, -0.80, 0.00,
            ],
            [
                0.30, -0.20, -0.60, -0.20, -0.60, 0.00, 1.00, 1.00, 0.90, -1.00,
                -0.50, -0.40, -0.10, -0.10, 0.80, 1.00, 0.10, 0.20, -0.40, 0.10,
            ],
        ],
    },
    // Balanced
    ProfileMatrix {
        rows: [
            [
                0.80, -0.80, -0.50, -0.50, -0.40, 0.10, 0.40, 0.40, 0.60, -0.70,
                -0.30, -0.20, 0.30, -0.50, 0.40, 0.30, 0.30, 0.50, -0.80, 0.20,
            ],
            [
                0.30, -0.30, 0.70, 0.70, 0.30, 0.70, -0.10, 0.10, 0.30, 0.50,
                0.30, 0.20, 0.20, 0.30, 0.10, 0.00, 0.40, 0.20, -0.40, 0.50,
            ],
            [
                0.20, -0.40, 0.50, -0.70, 0.10, -0.10, 0.10, 0.10, 0.10, 0.30,
                -0.20, 0.20, 0.60, -0.60, 0.00, 0.10, 0.70, 0.30, -0.50, 0.10,
            ],
            [
                0.30, -0.20, -0.50, -0.30, -0.40, 0.00, 0.70, 0.80, 0.70, -0.80,
                -0.40, -0.30, 0.00, -0.20, 0.60, 0.70, 0.10, 0.20, -0.30, 0.20,
            ],
        ],
    },
    // Sensitive
    ProfileMatrix {
        rows: [
            [
                1.20, -1.30, -0.70, -0.80, -0.60, 0.20, 0.50, 0.60, 1.00, -1.00,
                -0.50, -0.30, 0.30, -1.00, 0.70, 0.40, 0.20, 0.90, -1.30, 0.30,
            ],
            [
                0.40, -0.50, 1.00, 1.00, 0.50, 1.10, -0.20, 0.20, 0.60, 0.80,
                0.50, 0.30, 0.20, 0.60, 0.30, 0.10, 0.40, 0.30, -0.60, 0.70,
            ],
            [
                0.20, -0.70, 0.50, -1.00, 0.00, -0.30, 0.10, 0.10, 0.10, 0.30,
                -0.30, 0.10, 0.60, -1.10, 0.00, 0.10, 0.60, 0.30, -0.90, 0.10,
            ],
            [
                0.40, -0.30, -0.80, -0.40, -0.70, 0.10, 1.00, 1.10, 1.20, -1.10,
                -0.60, -0.40, -0.10, -0.30, 1.10, 0.90, 0.10, 0.30, -0.50, 0.30,
            ],
        ],
    },
    // Confident
    ProfileMatrix {
        rows: [
            [
                1.00, -0.80, -0.40, -0.40, -0.40, 0.10, 0.40, 0.50, 0.70, -0.70,
                -0.30, -0.10, 0.60, -0.50, 0.30, 0.30, 0.50, 0.80, -0.80, 0.30,
            ],
            [
                0.40, -0.30, 0.80, 0.50, 0.30, 0.80, -0.10, 0.10, 0.40, 0.60,
                0.30, 0.30, 0.40, 0.20, 0.10, 0.00, 0.70, 0.30, -0.30, 0.60,
            ],
            [
                0.40, -0.40, 0.70, -0.50, 0.10, -0.10, 0.20, 0.10, 0.10, 0.40,
                -0.10, 0.20, 1.20, -0.60, 0.00, 0.10, 1.20, 0.50, -0.50, 0.20,
            ],
            [
                0.30, -0.20, -0.50, -0.20, -0.50, 0.00, 0.80, 0.90, 0.80, -0.90,
                -0.40, -0.30, 0.10, -0.10, 0.60, 0.80, 0.30, 0.20, -0.30, 0.20,
            ],
        ],
    },
    // Greedy
    ProfileMatrix {
        rows: [
            [
                0.90, -0.90, -0.50, -0.60, -0.40, 0.10, 0.20, 0.30, 0.50, -0.70,
                -0.10, 0.60, 0.40, -0.50, 0.10, 0.10, 0.30, 0.60, -0.90, 0.30,
            ],
            [
                0.30, -0.30, 0.80, 0.80, 0.30, 0.90, -0.20, 0.00, 0.30, 0.60,
                0.70, 0.80, 0.30, 0.30, 0.00, 0.00, 0.40, 0.30, -0.40, 0.70,
            ],
            [
                0.20, -0.50, 0.60, -0.80, 0.10, -0.20, 0.00, 0.00, 0.00, 0.40,
                0.10, 0.70, 0.90, -0.70, -0.10, 0.00, 0.80, 0.30, -0.60, 0.20,
            ],
            [
                0.20, -0.20, -0.60, -0.30, -0.50, 0.00, 0.50, 0.60, 0.50, -0.80,
                -0.20, 0.00, -0.10, -0.20, 0.30, 0.40, 0.10, 0.10, -0.30, 0.20,
            ],
        ],
    },
    // Loyal
    ProfileMatrix {
        rows: [
            [
                1.00, -1.00, -0.60, -0.60, -0.50, 0.10, 0.70, 0.90, 1.00, -1.00,
                -0.50, -0.30, 0.30, -0.70, 0.60, 0.90, 0.40, 0.70, -1.00, 0.20,
            ],
            [
                0.30, -0.40, 0.90, 0.80, 0.30, 0.80, -0.20, 0.20, 0.50, 0.80,
                0.40, 0.20, 0.20, 0.40, 0.20, 0.20, 0.60, 0.20, -0.50, 0.50,
            ],
            [
                0.20, -0.50, 0.60, -0.80, 0.10, -0.20, 0.20, 0.20, 0.20, 0.40,
                -0.20, 0.10, 0.70, -0.80, 0.00, 0.30, 1.00, 0.30, -0.70, 0.10,
            ],
            [
                0.40, -0.20, -0.70, -0.30, -0.60, 0.00, 1.20, 1.30, 1.20, -1.20,
                -0.60, -0.40, -0.10, -0.20, 0.90, 1.30, 0.20, 0.20, -0.40, 0.20,
            ],
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_profile_resolves_a_matrix() {
        for profile in PersonalityProfile::ALL {
            let matrix = profile.matrix();
            assert_eq!(matrix.rows.len(), 4);
        }
    }

    #[test]
    fn weights_are_finite_and_modest() {
        for matrix in &PROFILES {
            for row in &matrix.rows {
                for &weight in row {
                    assert!(weight.is_finite());
                    assert!(weight.abs() <= 2.0, "weight {weight} out of expected band");
                }
            }
        }
    }

    #[test]
    fn no_axis_row_has_zero_norm() {
        // A zero-L1 row would make projection degenerate to a constant 0.
        for matrix in &PROFILES {
            for row in &matrix.rows {
                let l1: f32 = row.iter().map(|w| w.abs()).sum();
                assert!(l1 > 0.0);
            }
        }
    }

    #[test]
    fn out_of_range_index_falls_back_to_neutral() {
        assert_eq!(PersonalityProfile::from_index(3), PersonalityProfile::Balanced);
        assert_eq!(PersonalityProfile::from_index(8), PersonalityProfile::Neutral);
        assert_eq!(PersonalityProfile::from_index(usize::MAX), PersonalityProfile::Neutral);
    }
}
