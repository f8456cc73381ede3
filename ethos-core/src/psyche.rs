//! The per-agent aggregate of everything the moral subsystem owns.
//!
//! A [`Psyche`] is the "has AI data" capability: any entity can exist in
//! the world, but only entities carrying a `Psyche` are projected, judged,
//! and taught. Engine entry points take `Option<&Psyche>` and degrade to
//! neutral defaults for everything else — the check is a capability test,
//! not a type hierarchy.

use serde::{Deserialize, Serialize};

use crate::drift::PersonalDrift;
use crate::emotion::EmotionVector;
use crate::memory::MemoryRings;
use crate::profiles::PersonalityProfile;
use crate::types::{AlignmentBand, Axes4, BondKind, EntityId, EntityKind, EntityRef};

/// Per-agent moral and affective state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Psyche {
    /// The owning entity.
    pub entity: EntityRef,
    /// Display name, used in diagnostics only.
    pub name: String,
    /// Fixed personality profile (selects the projection matrix).
    pub profile: PersonalityProfile,
    /// The 20-channel emotion store.
    pub emotions: EmotionVector,
    /// Learned deviation from the profile matrix.
    pub drift: PersonalDrift,
    /// Passive and active interaction memory.
    pub memory: MemoryRings,
    /// Moral alignment [-1000, 1000].
    alignment: i32,
    /// Personal moral reputation [0, 100].
    reputation: f32,
    /// Genetic emotional-intelligence trait [0, 100]. Dampens
    /// susceptibility to group and leader influence.
    pub emotional_intelligence: f32,
    /// Experience level, used for leader influence gaps.
    pub level: u32,
    /// This agent's master, if it serves one.
    pub master: Option<EntityId>,
    /// Agents following this one.
    pub followers: Vec<EntityId>,
}

impl Psyche {
    /// Create a fresh agent mind: neutral emotions, zero drift, empty
    /// memory, alignment 0, reputation 50.
    #[must_use]
    pub fn new(name: impl Into<String>, profile: PersonalityProfile) -> Self {
        Self {
            entity: EntityRef {
                kind: EntityKind::Npc,
                id: EntityId::new(),
            },
            name: name.into(),
            profile,
            emotions: EmotionVector::new(),
            drift: PersonalDrift::new(),
            memory: MemoryRings::new(),
            alignment: 0,
            reputation: 50.0,
            emotional_intelligence: 50.0,
            level: 1,
            master: None,
            followers: Vec::new(),
        }
    }

    /// Current moral alignment.
    #[must_use]
    pub fn alignment(&self) -> i32 {
        self.alignment
    }

    /// Set alignment, clamped to [-1000, 1000].
    pub fn set_alignment(&mut self, value: i32) {
        self.alignment = value.clamp(-1000, 1000);
    }

    /// Shift alignment by a signed delta, clamped to [-1000, 1000].
    pub fn adjust_alignment(&mut self, delta: i32) {
        self.alignment = (self.alignment + delta).clamp(-1000, 1000);
    }

    /// Coarse alignment band.
    #[must_use]
    pub fn band(&self) -> AlignmentBand {
        AlignmentBand::from_value(self.alignment)
    }

    /// Current personal reputation.
    #[must_use]
    pub fn reputation(&self) -> f32 {
        self.reputation
    }

    /// Shift reputation by a signed delta, clamped to [0, 100].
    pub fn adjust_reputation(&mut self, delta: f32) {
        self.reputation = (self.reputation + delta).clamp(0.0, 100.0);
    }

    /// The command-hierarchy bond toward `other`, if any.
    #[must_use]
    pub fn bond_with(&self, other: EntityId) -> Option<BondKind> {
        if self.master == Some(other) {
            Some(BondKind::Master)
        } else if self.followers.contains(&other) {
            Some(BondKind::Follower)
        } else {
            None
        }
    }

    /// This agent's raw 4D projection at its current emotion state.
    #[must_use]
    pub fn raw_projection(&self) -> Axes4 {
        crate::projection::compute_raw(self.profile.matrix(), &self.drift, &self.emotions)
    }
}
