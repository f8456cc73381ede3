//! Moral Cost Evaluator — a judgment becomes a signed planning scalar.
//!
//! Negative cost is aversion, positive cost is attraction. Guilt costs
//! its blameworthiness, scaled by conscience (alignment band) and the
//! actor's current emotional makeup; innocence pays a per-kind baseline
//! scaled by alignment and the relevant virtues. Learned bias is folded
//! in, a detected learned avoidance gates with a flat penalty, and group
//! dynamics may adjust the total.
//!
//! The dissent check inside the group fold re-enters this evaluator to
//! get the actor's *individual* cost. The re-entrant call passes
//! `include_group = false` — that explicit capability flag, handed one
//! level down, is what breaks the mutual recursion between the evaluator
//! and the dissent check. Do not replace it with an implicit guard.

use crate::emotion::Emotion;
use crate::group::{self, GroupContext};
use crate::learning;
use crate::psyche::Psyche;
use crate::rules::{self, MoralJudgment};
use crate::scenario::{self, TargetProfile};
use crate::types::{ActionKind, AlignmentBand, SimTime};

/// Hard bounds on the returned cost.
pub const COST_MIN: f32 = -200.0;
/// Upper bound on the returned cost.
pub const COST_MAX: f32 = 150.0;

/// Flat penalty applied when the actor has learned to avoid the action.
const AVOIDANCE_PENALTY: f32 = 50.0;

/// Innocent baseline attraction by action kind.
fn innocent_baseline(kind: ActionKind) -> f32 {
    match kind {
        ActionKind::Help | ActionKind::Heal => 30.0,
        ActionKind::SacrificeSelf => 50.0,
        ActionKind::Defend => 20.0,
        _ => 0.0,
    }
}

/// Cost of a guilty judgment before learning and group effects.
fn guilty_cost(actor: &Psyche, judgment: &MoralJudgment) -> f32 {
    let mut cost = -judgment.blameworthiness;

    // Conscience: good actors double the aversion, evil actors halve it.
    match actor.band() {
        AlignmentBand::Good => cost *= 2.0,
        AlignmentBand::Evil => cost *= 0.5,
        AlignmentBand::Neutral => {}
    }

    let emotions = &actor.emotions;
    if emotions.get(Emotion::Shame) > 50.0 {
        cost *= 1.25;
    }
    if emotions.get(Emotion::Compassion) > 60.0 {
        cost *= 1.25;
    }
    if emotions.get(Emotion::Pride) > 70.0 {
        cost *= 0.8;
    }
    if emotions.get(Emotion::Anger) > 80.0 {
        cost *= 0.6;
    }
    if emotions.get(Emotion::Disgust) > 60.0
        && matches!(judgment.action, ActionKind::Betray | ActionKind::Deceive)
    {
        cost *= 1.3;
    }

    cost
}

/// Attraction of an innocent judgment before learning and group effects.
fn innocent_reward(actor: &Psyche, kind: ActionKind) -> f32 {
    let mut reward = innocent_baseline(kind);
    if reward == 0.0 {
        return 0.0;
    }

    if actor.band() == AlignmentBand::Good {
        reward *= 1.5;
    }

    let emotions = &actor.emotions;
    match kind {
        ActionKind::Help | ActionKind::Heal => {
            if emotions.get(Emotion::Compassion) > 60.0 {
                reward *= 1.2;
            }
            if emotions.get(Emotion::Love) > 60.0 {
                reward *= 1.1;
            }
        }
        ActionKind::Defend => {
            if emotions.get(Emotion::Loyalty) > 60.0 {
                reward *= 1.2;
            }
            if emotions.get(Emotion::Courage) > 60.0 {
                reward *= 1.1;
            }
        }
        ActionKind::SacrificeSelf => {
            if emotions.get(Emotion::Courage) > 60.0 {
                reward *= 1.2;
            }
            if emotions.get(Emotion::Love) > 60.0 {
                reward *= 1.1;
            }
        }
        _ => {}
    }

    reward
}

/// Evaluate the anticipated moral cost of an action, in
/// [[`COST_MIN`], [`COST_MAX`]].
///
/// `include_group` is the recursion-break capability: external callers
/// pass `true` (group dynamics fold in when a context is supplied); the
/// dissent check's internal re-entry passes `false`.
#[must_use]
pub fn evaluate_action_cost(
    actor: &Psyche,
    target: &TargetProfile,
    kind: ActionKind,
    group: Option<&GroupContext<'_>>,
    include_group: bool,
    now: &SimTime,
) -> f32 {
    let built = scenario::build_scenario(actor, target, kind);
    let judgment = rules::evaluate(&built);

    let mut cost = if judgment.guilty {
        guilty_cost(actor, &judgment)
    } else {
        innocent_reward(actor, kind)
    };

    cost += learning::action_bias(&actor.memory, kind, now);
    if learning::has_learned_avoidance(&actor.memory, kind, now) {
        cost -= AVOIDANCE_PENALTY;
    }

    if include_group && kind.is_judged() {
        if let Some(ctx) = group {
            let pressure = group::peer_pressure(actor, kind, ctx, now);

            // The actor's own conscience, with the group's voice muted.
            let individual = evaluate_action_cost(actor, target, kind, group, false, now);
            cost += fold_pressure(actor, kind, individual, pressure, now) - individual;

            if kind.is_harmful() {
                if let Some(target_reputation) = ctx.target_group_reputation {
                    cost -= group::intergroup_modifier(
                        ctx.group.reputation.score,
                        target_reputation,
                    );
                }
            }
        }
    }

    cost.clamp(COST_MIN, COST_MAX)
}

/// Fold peer pressure into an individual cost.
///
/// When the actor dissents from the group's push, the applied pressure is
/// exactly half the unadjusted value; otherwise it applies in full.
#[must_use]
pub fn fold_pressure(
    actor: &Psyche,
    kind: ActionKind,
    individual: f32,
    pressure: f32,
    now: &SimTime,
) -> f32 {
    if group::should_dissent(actor, kind, individual, individual + pressure, now) {
        individual + pressure * 0.5
    } else {
        individual + pressure
    }
}
