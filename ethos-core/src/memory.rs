//! Memory System — two bounded rings of interaction snapshots with moral
//! annotations.
//!
//! Every agent carries two fixed-capacity rings: the passive ring records
//! what was done *to* the agent, the active ring what the agent did
//! itself. Writing past capacity overwrites the oldest slot — agents have
//! short, vivid memories, not archives.
//!
//! Retrieval is recency-tiered rather than curve-decayed: an interaction
//! under five minutes old carries full weight, then 80/60/40 at the
//! 15/30/60-minute marks, and anything older is excluded outright. Major
//! events count double.
//!
//! Moral annotations are back-filled after the fact: once a judgment
//! exists for a completed action, the ring is searched backward for the
//! freshest still-unjudged slot of the same interaction kind no older than
//! 60 seconds. This is a temporal correlation, not a join key — under
//! near-simultaneous same-kind actions it can stamp the wrong slot. An
//! explicit correlation id minted at action initiation would close that
//! hole; the heuristic is kept deliberately.

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::emotion::EmotionVector;
use crate::types::{ActionKind, EntityRef, InteractionKind, SimTime, Verdict};

/// Fixed capacity of each memory ring.
pub const RING_CAPACITY: usize = 10;

/// Maximum age (game-seconds) a slot may have and still receive a
/// back-filled judgment.
pub const BACKFILL_WINDOW_SECS: u64 = 60;

/// The moral annotation stamped onto a memory slot once its action has
/// been judged. `verdict: None` marks a slot as not yet judged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoralAnnotation {
    /// The precise action that was judged.
    pub action: ActionKind,
    /// Tri-state verdict: `None` = unjudged, else innocent/guilty.
    pub verdict: Option<Verdict>,
    /// Blameworthiness score of the judgment [0, 100].
    pub blameworthiness: f32,
    /// Severity of the harm involved [0, 100].
    pub severity: f32,
    /// Regret felt after the judgment's feedback [0, 100].
    pub regret: f32,
}

impl Default for MoralAnnotation {
    fn default() -> Self {
        Self {
            action: ActionKind::None,
            verdict: None,
            blameworthiness: 0.0,
            severity: 0.0,
            regret: 0.0,
        }
    }
}

/// One recorded interaction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MemorySlot {
    /// Who the interaction was with.
    pub entity: EntityRef,
    /// Coarse category — the back-fill match key.
    pub interaction: InteractionKind,
    /// Whether this was a major event (doubles recall weight).
    pub major: bool,
    /// When the interaction happened.
    pub timestamp: SimTime,
    /// The agent's full emotion state at the moment of recording.
    pub emotions: EmotionVector,
    /// Back-filled moral annotation.
    pub annotation: MoralAnnotation,
}

impl MemorySlot {
    /// Create an unannotated slot.
    #[must_use]
    pub fn new(
        entity: EntityRef,
        interaction: InteractionKind,
        major: bool,
        timestamp: SimTime,
        emotions: EmotionVector,
    ) -> Self {
        Self {
            entity,
            interaction,
            major,
            timestamp,
            emotions,
            annotation: MoralAnnotation::default(),
        }
    }
}

/// Recency weight for a slot of the given age, or `None` when the slot is
/// too old to matter.
#[must_use]
pub fn recency_weight(age_secs: u64, major: bool) -> Option<f32> {
    let base = match age_secs {
        0..300 => 100.0,
        300..900 => 80.0,
        900..1800 => 60.0,
        1800..3600 => 40.0,
        _ => return None,
    };
    Some(if major { base * 2.0 } else { base })
}

/// A fixed-capacity overwrite-oldest ring of memory slots.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryRing {
    slots: Vec<MemorySlot>,
    next: usize,
}

impl MemoryRing {
    /// An empty ring.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of occupied slots (at most [`RING_CAPACITY`]).
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the ring holds no memories.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Record a slot, overwriting the oldest entry once full.
    pub fn record(&mut self, slot: MemorySlot) {
        if self.slots.len() < RING_CAPACITY {
            self.slots.push(slot);
        } else {
            self.slots[self.next] = slot;
        }
        self.next = (self.next + 1) % RING_CAPACITY;
    }

    /// Iterate slots in storage order (not age order).
    pub fn iter(&self) -> impl Iterator<Item = &MemorySlot> {
        self.slots.iter()
    }

    /// Iterate slots newest-first.
    pub fn iter_newest_first(&self) -> impl Iterator<Item = &MemorySlot> {
        let len = self.slots.len();
        (0..len).map(move |k| {
            // `next` points at the oldest slot once the ring is full; the
            // newest is one position behind it, modulo capacity.
            let idx = (self.next + len - 1 - k) % len.max(1);
            &self.slots[idx]
        })
    }

    /// The recency-weighted recall of this ring at `now`: every slot still
    /// inside the one-hour horizon, paired with its tier weight.
    #[must_use]
    pub fn recalled(&self, now: &SimTime) -> Vec<(&MemorySlot, f32)> {
        self.slots
            .iter()
            .filter_map(|slot| {
                let age = now.secs_since(&slot.timestamp);
                recency_weight(age, slot.major).map(|w| (slot, w))
            })
            .collect()
    }

    /// The highest-weighted slot still inside the recall horizon.
    #[must_use]
    pub fn strongest(&self, now: &SimTime) -> Option<&MemorySlot> {
        self.recalled(now)
            .into_iter()
            .max_by_key(|(_, weight)| OrderedFloat(*weight))
            .map(|(slot, _)| slot)
    }

    /// Back-fill a judgment onto the freshest matching slot.
    ///
    /// Walks backward (newest first) for a slot with the same interaction
    /// kind, an unjudged verdict, and age at most
    /// [`BACKFILL_WINDOW_SECS`]. Returns whether a slot was stamped.
    pub fn annotate_latest(
        &mut self,
        interaction: InteractionKind,
        annotation: MoralAnnotation,
        now: &SimTime,
    ) -> bool {
        let len = self.slots.len();
        for k in 0..len {
            let idx = (self.next + len - 1 - k) % len;
            let slot = &mut self.slots[idx];
            if slot.interaction != interaction || slot.annotation.verdict.is_some() {
                continue;
            }
            if now.secs_since(&slot.timestamp) > BACKFILL_WINDOW_SECS {
                // Slots only get older from here; nothing fresher remains.
                break;
            }
            slot.annotation = annotation;
            return true;
        }
        false
    }
}

/// The two per-agent rings: experienced and self-initiated interactions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryRings {
    /// What was done to the agent.
    pub passive: MemoryRing,
    /// What the agent did.
    pub active: MemoryRing,
}

impl MemoryRings {
    /// Two empty rings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}
