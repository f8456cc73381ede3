//! Emotion Store — the per-agent vector of 20 bounded affect channels.
//!
//! Every channel is a scalar clamped to [0, 100]. Gameplay events push
//! channels around continuously; moral feedback (see `feedback`) pushes
//! them around discretely; the store itself guarantees the bounds hold
//! after every public operation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;

/// Number of emotion channels.
pub const CHANNEL_COUNT: usize = 20;

/// The 20 named emotion channels, in fixed matrix-column order.
///
/// The order is load-bearing: profile matrices (see `profiles`) and drift
/// matrices index their columns by this enum's `index()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Emotion {
    /// Joy, contentment.
    Happiness,
    /// Grief, loss.
    Sadness,
    /// Hostile activation.
    Anger,
    /// Threat response.
    Fear,
    /// Revulsion.
    Disgust,
    /// Violated expectation.
    Surprise,
    /// Confidence in others.
    Trust,
    /// Warmth toward peers.
    Friendship,
    /// Deep attachment.
    Love,
    /// Deep aversion.
    Hate,
    /// Resentment of others' fortune.
    Envy,
    /// Acquisitive drive.
    Greed,
    /// Self-regard.
    Pride,
    /// Self-condemnation.
    Shame,
    /// Concern for others' suffering.
    Compassion,
    /// Commitment to one's own.
    Loyalty,
    /// Willingness to face danger.
    Courage,
    /// Positive expectation.
    Hope,
    /// Collapse of expectation.
    Despair,
    /// Drive to explore.
    Curiosity,
}

impl Emotion {
    /// All channels in matrix-column order.
    pub const ALL: [Self; CHANNEL_COUNT] = [
        Self::Happiness,
        Self::Sadness,
        Self::Anger,
        Self::Fear,
        Self::Disgust,
        Self::Surprise,
        Self::Trust,
        Self::Friendship,
        Self::Love,
        Self::Hate,
        Self::Envy,
        Self::Greed,
        Self::Pride,
        Self::Shame,
        Self::Compassion,
        Self::Loyalty,
        Self::Courage,
        Self::Hope,
        Self::Despair,
        Self::Curiosity,
    ];

    /// Matrix column index of this channel.
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Happiness => "happiness",
            Self::Sadness => "sadness",
            Self::Anger => "anger",
            Self::Fear => "fear",
            Self::Disgust => "disgust",
            Self::Surprise => "surprise",
            Self::Trust => "trust",
            Self::Friendship => "friendship",
            Self::Love => "love",
            Self::Hate => "hate",
            Self::Envy => "envy",
            Self::Greed => "greed",
            Self::Pride => "pride",
            Self::Shame => "shame",
            Self::Compassion => "compassion",
            Self::Loyalty => "loyalty",
            Self::Courage => "courage",
            Self::Hope => "hope",
            Self::Despair => "despair",
            Self::Curiosity => "curiosity",
        };
        write!(f, "{name}")
    }
}

/// The per-agent affective state: 20 channels, each in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmotionVector {
    channels: [f32; CHANNEL_COUNT],
}

impl EmotionVector {
    /// A fully neutral state — every channel at 0.
    #[must_use]
    pub fn new() -> Self {
        Self {
            channels: [0.0; CHANNEL_COUNT],
        }
    }

    /// Build from raw channel values, clamping each to [0, 100].
    #[must_use]
    pub fn from_channels(raw: [f32; CHANNEL_COUNT]) -> Self {
        let mut channels = raw;
        for value in &mut channels {
            *value = value.clamp(0.0, 100.0);
        }
        Self { channels }
    }

    /// Current value of one channel.
    #[must_use]
    pub fn get(&self, emotion: Emotion) -> f32 {
        self.channels[emotion.index()]
    }

    /// Set one channel, clamping to [0, 100].
    pub fn set(&mut self, emotion: Emotion, value: f32) {
        self.channels[emotion.index()] = value.clamp(0.0, 100.0);
    }

    /// Shift one channel by a signed delta, clamping to [0, 100].
    pub fn adjust(&mut self, emotion: Emotion, delta: f32) {
        let idx = emotion.index();
        self.channels[idx] = (self.channels[idx] + delta).clamp(0.0, 100.0);
    }

    /// The raw channel array, in matrix-column order.
    #[must_use]
    pub fn channels(&self) -> &[f32; CHANNEL_COUNT] {
        &self.channels
    }

    /// An immutable copy of the current state, for memory snapshots and
    /// regret computation.
    #[must_use]
    pub fn snapshot(&self) -> Self {
        *self
    }

    /// Move every channel a fraction of the way toward a rest state.
    ///
    /// `rate` is the per-call fraction in [0, 1]; typical tick-cadence
    /// values are small (0.01–0.05).
    pub fn decay_toward(&mut self, rest: &Self, rate: f32) {
        let rate = rate.clamp(0.0, 1.0);
        for (value, target) in self.channels.iter_mut().zip(rest.channels.iter()) {
            *value = (*value + (target - *value) * rate).clamp(0.0, 100.0);
        }
    }
}

impl Default for EmotionVector {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Emotion> for EmotionVector {
    type Output = f32;

    fn index(&self, emotion: Emotion) -> &f32 {
        &self.channels[emotion.index()]
    }
}
