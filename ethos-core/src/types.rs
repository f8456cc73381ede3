//! Core type definitions for the ETHOS moral reasoning system.
//!
//! All types are serializable; everything numeric carries its bound in the
//! constructor rather than trusting callers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Identity Types
// ---------------------------------------------------------------------------

/// Unique identifier for any entity (NPC, player, object) in the game world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub Uuid);

impl EntityId {
    /// Create a new random entity ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a social group (party, faction, warband).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupId(pub Uuid);

impl GroupId {
    /// Create a new random group ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for GroupId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What sort of entity a reference points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    /// A player-controlled character.
    Player,
    /// A non-player character.
    Npc,
    /// An inanimate object (a trap, a shrine, a dropped item).
    Object,
}

/// A typed reference to an entity — the kind disambiguates ID namespaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityRef {
    /// What kind of entity this points at.
    pub kind: EntityKind,
    /// The entity's unique ID.
    pub id: EntityId,
}

impl EntityRef {
    /// Reference an NPC by ID.
    #[must_use]
    pub fn npc(id: EntityId) -> Self {
        Self {
            kind: EntityKind::Npc,
            id,
        }
    }

    /// Reference a player by ID.
    #[must_use]
    pub fn player(id: EntityId) -> Self {
        Self {
            kind: EntityKind::Player,
            id,
        }
    }
}

// ---------------------------------------------------------------------------
// Time
// ---------------------------------------------------------------------------

/// In-game timestamp measured in game-seconds since world creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SimTime {
    /// Game seconds (monotonically increasing).
    pub secs: u64,
    /// Corresponding real-world wall-clock time (for diagnostics).
    pub real_time: DateTime<Utc>,
}

impl SimTime {
    /// Create a new timestamp at the current wall-clock time.
    #[must_use]
    pub fn now(secs: u64) -> Self {
        Self {
            secs,
            real_time: Utc::now(),
        }
    }

    /// Game-seconds elapsed since `other` (saturating at zero).
    #[must_use]
    pub fn secs_since(&self, other: &Self) -> u64 {
        self.secs.saturating_sub(other.secs)
    }

    /// Game-minutes elapsed since `other`.
    #[must_use]
    pub fn mins_since(&self, other: &Self) -> u64 {
        self.secs_since(other) / 60
    }
}

// ---------------------------------------------------------------------------
// Actions
// ---------------------------------------------------------------------------

/// The kinds of agent actions the moral subsystem understands.
///
/// This enumeration is stable — collaborating systems match on it and the
/// scenario templates key off it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    /// No action / unknown — never judged.
    None,
    /// Physical aggression against another entity.
    Attack,
    /// Taking another entity's property.
    Steal,
    /// Giving aid without expectation of return.
    Help,
    /// Restoring another entity's vitality.
    Heal,
    /// Voluntary exchange of goods — never judged.
    Trade,
    /// Deliberately misleading another entity.
    Deceive,
    /// Accepting harm to oneself for another's benefit.
    SacrificeSelf,
    /// Leaving a group member in danger.
    AbandonAlly,
    /// Turning on a trusting ally.
    Betray,
    /// Protecting another entity from aggression.
    Defend,
}

impl ActionKind {
    /// Whether this kind harms its target under the scenario templates.
    #[must_use]
    pub fn is_harmful(self) -> bool {
        matches!(
            self,
            Self::Attack | Self::Steal | Self::Deceive | Self::AbandonAlly | Self::Betray
        )
    }

    /// Whether this kind benefits its target under the scenario templates.
    #[must_use]
    pub fn is_benevolent(self) -> bool {
        matches!(
            self,
            Self::Help | Self::Heal | Self::SacrificeSelf | Self::Defend
        )
    }

    /// Whether the moral subsystem judges this kind at all.
    #[must_use]
    pub fn is_judged(self) -> bool {
        !matches!(self, Self::None | Self::Trade)
    }

    /// The memory-ring match key this action records under.
    #[must_use]
    pub fn interaction(self) -> InteractionKind {
        match self {
            Self::Attack | Self::Defend => InteractionKind::Combat,
            Self::Help | Self::Heal | Self::SacrificeSelf => InteractionKind::Assistance,
            Self::Steal | Self::Trade => InteractionKind::Commerce,
            Self::Deceive | Self::Betray => InteractionKind::Deception,
            Self::None | Self::AbandonAlly => InteractionKind::Social,
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "none",
            Self::Attack => "attack",
            Self::Steal => "steal",
            Self::Help => "help",
            Self::Heal => "heal",
            Self::Trade => "trade",
            Self::Deceive => "deceive",
            Self::SacrificeSelf => "sacrifice-self",
            Self::AbandonAlly => "abandon-ally",
            Self::Betray => "betray",
            Self::Defend => "defend",
        };
        write!(f, "{name}")
    }
}

/// Coarse interaction category used as the memory-ring match key.
///
/// Deliberately coarser than [`ActionKind`]: the back-fill correlation
/// (see `memory`) matches on this, while the precise action kind lives in
/// the moral annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InteractionKind {
    /// Fighting, defending, being attacked.
    Combat,
    /// Helping, healing, being rescued.
    Assistance,
    /// Trading, stealing, property transfer.
    Commerce,
    /// Lies, betrayal, broken trust.
    Deception,
    /// Everything else — greetings, abandonment, idle contact.
    Social,
}

// ---------------------------------------------------------------------------
// Alignment
// ---------------------------------------------------------------------------

/// Coarse moral alignment band derived from the numeric alignment value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlignmentBand {
    /// Alignment >= 350.
    Good,
    /// Alignment in (-350, 350).
    Neutral,
    /// Alignment <= -350.
    Evil,
}

impl AlignmentBand {
    /// Classify a numeric alignment ([-1000, 1000]) into a band.
    #[must_use]
    pub fn from_value(alignment: i32) -> Self {
        if alignment >= 350 {
            Self::Good
        } else if alignment <= -350 {
            Self::Evil
        } else {
            Self::Neutral
        }
    }

    /// Whether the value sits deep inside the good band.
    #[must_use]
    pub fn is_strongly_good(alignment: i32) -> bool {
        alignment >= 700
    }

    /// Whether the value sits deep inside the evil band.
    #[must_use]
    pub fn is_strongly_evil(alignment: i32) -> bool {
        alignment <= -700
    }
}

// ---------------------------------------------------------------------------
// Decision Axes
// ---------------------------------------------------------------------------

/// The four decision axes: valence, arousal, dominance, affiliation.
///
/// Mehrabian's PAD space extended with an affiliation axis for relational
/// orientation. Each axis ranges [-100, 100]; arousal is additionally
/// floored at 0 in effective states.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Axes4 {
    /// Positive–negative evaluation of the current situation.
    pub valence: f32,
    /// Activation level.
    pub arousal: f32,
    /// Perceived control.
    pub dominance: f32,
    /// Relational orientation toward the interaction target.
    pub affiliation: f32,
}

impl Axes4 {
    /// The all-zero axis vector.
    pub const ZERO: Self = Self {
        valence: 0.0,
        arousal: 0.0,
        dominance: 0.0,
        affiliation: 0.0,
    };

    /// Create an axis vector, clamping every component to [-100, 100].
    #[must_use]
    pub fn new(valence: f32, arousal: f32, dominance: f32, affiliation: f32) -> Self {
        Self {
            valence: valence.clamp(-100.0, 100.0),
            arousal: arousal.clamp(-100.0, 100.0),
            dominance: dominance.clamp(-100.0, 100.0),
            affiliation: affiliation.clamp(-100.0, 100.0),
        }
    }

    /// Clamp all components to [-100, 100] and floor arousal at 0.
    #[must_use]
    pub fn clamped_effective(self) -> Self {
        Self {
            valence: self.valence.clamp(-100.0, 100.0),
            arousal: self.arousal.clamp(0.0, 100.0),
            dominance: self.dominance.clamp(-100.0, 100.0),
            affiliation: self.affiliation.clamp(-100.0, 100.0),
        }
    }
}

impl Default for Axes4 {
    fn default() -> Self {
        Self::ZERO
    }
}

/// One of the four decision axes, by index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Positive–negative evaluation.
    Valence,
    /// Activation level.
    Arousal,
    /// Perceived control.
    Dominance,
    /// Relational orientation.
    Affiliation,
}

impl Axis {
    /// All four axes in matrix-row order.
    pub const ALL: [Self; 4] = [Self::Valence, Self::Arousal, Self::Dominance, Self::Affiliation];

    /// Matrix row index of this axis.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Valence => 0,
            Self::Arousal => 1,
            Self::Dominance => 2,
            Self::Affiliation => 3,
        }
    }
}

// ---------------------------------------------------------------------------
// Judgment primitives
// ---------------------------------------------------------------------------

/// The verdict attached to a judged action.
///
/// A memory slot's verdict field is `Option<Verdict>` — `None` means
/// "not yet judged", which the back-fill correlation relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// The actor was found blameless.
    Innocent,
    /// The actor was found blameworthy.
    Guilty,
}

/// How foreseeable the harmful outcome was to the actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Foreseeability {
    /// The outcome could not have been anticipated.
    None,
    /// The outcome was conceivable but unlikely.
    Low,
    /// The outcome was plainly predictable.
    High,
}

/// The actor's mental state toward the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MentalState {
    /// No particular mental state established.
    None,
    /// The actor meant for the outcome to happen.
    Intend,
    /// The actor knew the risk and disregarded it.
    Reckless,
    /// The actor failed to notice a risk they should have.
    Negligent,
}

/// A bond between two agents in a command hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BondKind {
    /// The target is this agent's master.
    Master,
    /// The target is this agent's follower.
    Follower,
}
