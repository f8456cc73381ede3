//! Feedback — a judgment flowing back into the agent.
//!
//! Once an action is judged, the verdict lands three ways: alignment
//! moves, personal reputation moves, and the emotion store takes the
//! brunt. The emotional deltas feed the regret signal recorded into
//! memory, which in turn drives the learned bias — this module closes
//! the learning loop.

use tracing::debug;

use crate::emotion::{Emotion, EmotionVector};
use crate::psyche::Psyche;
use crate::rules::MoralJudgment;
use crate::types::AlignmentBand;

/// What one feedback application did, for memory annotation and tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeedbackOutcome {
    /// Regret felt [0, 100], from the emotional deltas.
    pub regret: f32,
    /// Shame change (signed).
    pub shame_delta: f32,
    /// Alignment change (signed).
    pub alignment_delta: i32,
}

/// Regret from before/after emotion snapshots:
/// clamp(2·Δshame + Δdisgust + Δhappiness_drop/2, 0, 100).
///
/// Only increases in shame/disgust and decreases in happiness count;
/// a judgment that made the agent feel *better* carries no regret.
#[must_use]
pub fn regret_from_snapshots(before: &EmotionVector, after: &EmotionVector) -> f32 {
    let shame_rise = (after.get(Emotion::Shame) - before.get(Emotion::Shame)).max(0.0);
    let disgust_rise = (after.get(Emotion::Disgust) - before.get(Emotion::Disgust)).max(0.0);
    let happiness_drop = (before.get(Emotion::Happiness) - after.get(Emotion::Happiness)).max(0.0);
    (2.0 * shame_rise + disgust_rise + happiness_drop / 2.0).clamp(0.0, 100.0)
}

/// Apply alignment feedback only — the shared piece used for every member
/// of a group during collective recording.
pub fn apply_alignment(actor: &mut Psyche, judgment: &MoralJudgment) -> i32 {
    let delta = if judgment.guilty {
        -((judgment.blameworthiness / 10.0) as i32)
    } else if judgment.responsibility > 50.0 {
        (judgment.responsibility / 20.0) as i32
    } else {
        0
    };
    actor.adjust_alignment(delta);
    delta
}

/// Apply personal reputation feedback.
///
/// Guilt burnishes an evil agent's name and stains everyone else's;
/// innocent high-responsibility acts raise a good agent's standing.
pub fn apply_reputation(actor: &mut Psyche, judgment: &MoralJudgment) {
    if judgment.guilty {
        match actor.band() {
            AlignmentBand::Evil => actor.adjust_reputation(judgment.blameworthiness / 20.0),
            AlignmentBand::Good | AlignmentBand::Neutral => {
                actor.adjust_reputation(-judgment.blameworthiness / 10.0);
            }
        }
    } else if judgment.responsibility > 50.0 && actor.band() == AlignmentBand::Good {
        actor.adjust_reputation(judgment.responsibility / 20.0);
    }
}

/// Apply the full feedback pipeline: alignment, reputation, emotions.
///
/// `harmed_loved_one` marks harm that landed on someone the actor is
/// bonded to or remembers as a close friend.
pub fn apply(actor: &mut Psyche, judgment: &MoralJudgment, harmed_loved_one: bool) -> FeedbackOutcome {
    let before = actor.emotions.snapshot();
    let band = actor.band();

    let alignment_delta = apply_alignment(actor, judgment);
    apply_reputation(actor, judgment);

    if judgment.guilty {
        // Conscience scales with alignment: good actors feel guilt half
        // again as hard, evil actors barely at all.
        let conscience = match band {
            AlignmentBand::Good => 1.5,
            AlignmentBand::Neutral => 1.0,
            AlignmentBand::Evil => 0.4,
        };
        actor
            .emotions
            .adjust(Emotion::Shame, (judgment.blameworthiness / 5.0) * conscience);

        if judgment.blameworthiness > 70.0 {
            actor.emotions.adjust(Emotion::Disgust, 10.0);
        }
        actor
            .emotions
            .adjust(Emotion::Happiness, -judgment.blameworthiness / 10.0);
        if harmed_loved_one {
            actor.emotions.adjust(Emotion::Sadness, 10.0);
        }
        if band == AlignmentBand::Good {
            actor.emotions.adjust(Emotion::Pride, -5.0);
        }
    } else if judgment.responsibility > 50.0 {
        actor
            .emotions
            .adjust(Emotion::Pride, judgment.responsibility / 10.0);
        actor
            .emotions
            .adjust(Emotion::Happiness, judgment.responsibility / 20.0);
        actor
            .emotions
            .adjust(Emotion::Shame, -judgment.responsibility / 10.0);
    }

    if judgment.flags.vicarious {
        actor.emotions.adjust(Emotion::Shame, 5.0);
        actor.emotions.adjust(Emotion::Anger, 3.0);
    }

    let after = actor.emotions.snapshot();
    let regret = regret_from_snapshots(&before, &after);
    let shame_delta = after.get(Emotion::Shame) - before.get(Emotion::Shame);

    debug!(
        actor = %actor.name,
        action = %judgment.action,
        guilty = judgment.guilty,
        alignment_delta,
        regret,
        "moral feedback applied"
    );

    FeedbackOutcome {
        regret,
        shame_delta,
        alignment_delta,
    }
}
