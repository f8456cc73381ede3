//! Learned Bias & Avoidance — memory shaping the next decision.
//!
//! Agents do not reason about past judgments; they *feel* them. A scan of
//! the memory rings turns annotated slots into a signed bias on the next
//! cost evaluation: guilty memories push away from repeating the action,
//! innocent ones pull toward it. Passive memories (things done to the
//! agent) carry full weight; active ones (its own deeds) carry 30% —
//! what was suffered teaches harder than what was done.
//!
//! A cluster of recent guilt, or of intense regret, trips a stronger
//! response: learned avoidance, which gates the action with a flat
//! penalty in the cost evaluator.

use crate::emotion::Emotion;
use crate::memory::{MemoryRing, MemoryRings};
use crate::types::{ActionKind, SimTime, Verdict};

/// Weight multiplier applied to the active (self-initiated) ring.
const ACTIVE_RING_WEIGHT: f32 = 0.3;

/// Window for avoidance detection, in game-seconds (30 minutes).
const AVOIDANCE_WINDOW_SECS: u64 = 1800;

/// Signed contribution of one annotated memory.
fn contribution(slot_verdict: Verdict, blameworthiness: f32, severity: f32, regret: f32, happiness: f32) -> f32 {
    match slot_verdict {
        Verdict::Guilty => {
            let mut c = -blameworthiness;
            if regret > 50.0 {
                c *= 1.25;
            }
            if severity > 60.0 {
                c *= 1.25;
            }
            c
        }
        Verdict::Innocent => {
            let mut c = 30.0;
            if regret < 20.0 {
                c *= 1.2;
            }
            if happiness > 60.0 {
                c *= 1.2;
            }
            c
        }
    }
}

fn accumulate(ring: &MemoryRing, ring_weight: f32, kind: ActionKind, now: &SimTime) -> (f32, f32) {
    let mut weighted = 0.0;
    let mut total = 0.0;
    for (slot, recency) in ring.recalled(now) {
        if slot.annotation.action != kind {
            continue;
        }
        let Some(verdict) = slot.annotation.verdict else {
            continue;
        };
        let weight = recency * ring_weight;
        weighted += weight
            * contribution(
                verdict,
                slot.annotation.blameworthiness,
                slot.annotation.severity,
                slot.annotation.regret,
                slot.emotions.get(Emotion::Happiness),
            );
        total += weight;
    }
    (weighted, total)
}

/// The learned bias toward/away from an action kind, in [-100, 100].
///
/// A recency-weighted average over both rings within the one-hour recall
/// horizon. No relevant memories ⇒ 0.
#[must_use]
pub fn action_bias(memory: &MemoryRings, kind: ActionKind, now: &SimTime) -> f32 {
    let (passive_sum, passive_weight) = accumulate(&memory.passive, 1.0, kind, now);
    let (active_sum, active_weight) = accumulate(&memory.active, ACTIVE_RING_WEIGHT, kind, now);

    let total = passive_weight + active_weight;
    if total <= 0.0 {
        return 0.0;
    }
    ((passive_sum + active_sum) / total).clamp(-100.0, 100.0)
}

/// Whether the agent has learned to avoid an action kind outright.
///
/// True when, within the last 30 minutes, either (a) at least two guilty
/// judgments for the kind with no innocent ones, or (b) at least three
/// memories of the kind with regret above 70.
#[must_use]
pub fn has_learned_avoidance(memory: &MemoryRings, kind: ActionKind, now: &SimTime) -> bool {
    let mut guilty = 0_u32;
    let mut innocent = 0_u32;
    let mut high_regret = 0_u32;

    for ring in [&memory.passive, &memory.active] {
        for slot in ring.iter() {
            if slot.annotation.action != kind
                || now.secs_since(&slot.timestamp) > AVOIDANCE_WINDOW_SECS
            {
                continue;
            }
            match slot.annotation.verdict {
                Some(Verdict::Guilty) => guilty += 1,
                Some(Verdict::Innocent) => innocent += 1,
                None => {}
            }
            if slot.annotation.regret > 70.0 {
                high_regret += 1;
            }
        }
    }

    (guilty >= 2 && innocent == 0) || high_regret >= 3
}
