//! Group Moral Dynamics — peer pressure, leader influence, dissent, and
//! collective reputation.
//!
//! Groups bend individual conscience. Members project an alignment-based
//! stance on a contemplated action; the leader's influence scales with
//! rank gap, follower loyalty, and the group's standing; and the whole is
//! amplified as the group grows. A member whose own conscience diverges
//! hard enough dissents, halving the pressure applied to them.
//!
//! Collective actions move a shared [`GroupReputation`], which in turn
//! modulates how costly aggression against *other* groups feels —
//! respected groups show restraint, disreputable ones learn predation.

use serde::{Deserialize, Serialize};

use crate::emotion::Emotion;
use crate::learning;
use crate::psyche::Psyche;
use crate::rules::MoralJudgment;
use crate::types::{ActionKind, AlignmentBand, EntityId, GroupId, SimTime};

/// Collective moral standing of a group.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroupReputation {
    /// Moral reputation [0, 100].
    pub score: f32,
    /// Cumulative guilty collective acts.
    pub guilty_acts: u32,
    /// Cumulative high-responsibility innocent acts.
    pub good_acts: u32,
    /// When the group last acted collectively.
    pub last_action: Option<SimTime>,
}

impl GroupReputation {
    /// Seed a new group's reputation from its leader's alignment:
    /// 70 for a strongly good leader, 30 for a strongly evil one,
    /// 50 otherwise.
    #[must_use]
    pub fn new(leader_alignment: i32) -> Self {
        let score = if AlignmentBand::is_strongly_good(leader_alignment) {
            70.0
        } else if AlignmentBand::is_strongly_evil(leader_alignment) {
            30.0
        } else {
            50.0
        };
        Self {
            score,
            guilty_acts: 0,
            good_acts: 0,
            last_action: None,
        }
    }

    /// Fold one collective judgment into the reputation.
    ///
    /// Guilt always costs; past five cumulative guilty acts the group is
    /// notorious and each one costs extra. Sustained good behavior earns
    /// a mirrored bonus.
    pub fn record_outcome(&mut self, judgment: &MoralJudgment, now: SimTime) {
        if judgment.guilty {
            self.guilty_acts += 1;
            let mut penalty = judgment.blameworthiness / 10.0;
            if self.guilty_acts > 5 {
                penalty += 5.0;
            }
            self.score -= penalty;
        } else if judgment.responsibility > 50.0 {
            self.good_acts += 1;
            let mut bonus = judgment.responsibility / 20.0;
            if self.good_acts > 5 {
                bonus += 5.0;
            }
            self.score += bonus;
        }
        self.score = self.score.clamp(0.0, 100.0);
        self.last_action = Some(now);
    }

    /// This reputation's display tier.
    #[must_use]
    pub fn tier(&self) -> StandingTier {
        StandingTier::from_score(self.score)
    }
}

/// Display tiers for group standing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StandingTier {
    /// Score > 80: a byword for honor.
    Revered,
    /// Score > 60: trusted by outsiders.
    Respected,
    /// Score > 40: no particular name.
    Unremarkable,
    /// Score > 20: watched with suspicion.
    Distrusted,
    /// Score <= 20: attacked or shunned on sight.
    Reviled,
}

impl StandingTier {
    /// Classify a reputation score into a tier.
    #[must_use]
    pub fn from_score(score: f32) -> Self {
        match score {
            s if s > 80.0 => Self::Revered,
            s if s > 60.0 => Self::Respected,
            s if s > 40.0 => Self::Unremarkable,
            s if s > 20.0 => Self::Distrusted,
            _ => Self::Reviled,
        }
    }
}

/// A social group: identity, leadership, shared reputation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    /// Unique group ID.
    pub id: GroupId,
    /// Display name.
    pub name: String,
    /// The leading member.
    pub leader: EntityId,
    /// Shared moral standing.
    pub reputation: GroupReputation,
}

impl Group {
    /// Form a new group under a leader.
    #[must_use]
    pub fn new(name: impl Into<String>, leader: EntityId, leader_alignment: i32) -> Self {
        Self {
            id: GroupId::new(),
            name: name.into(),
            leader,
            reputation: GroupReputation::new(leader_alignment),
        }
    }
}

/// Everything the cost evaluator needs to fold group dynamics in.
///
/// Borrowed per evaluation; `members` lists every member with AI data,
/// including the actor and the leader.
#[derive(Debug, Clone, Copy)]
pub struct GroupContext<'a> {
    /// The acting member's group.
    pub group: &'a Group,
    /// The group's leader.
    pub leader: &'a Psyche,
    /// All members carrying AI data.
    pub members: &'a [&'a Psyche],
    /// Reputation of the target's group, when the action crosses group
    /// lines.
    pub target_group_reputation: Option<f32>,
}

/// Signed ±1 action direction: harmful acts read negative for good-aligned
/// judges, benevolent acts positive. Unjudged categories carry no
/// direction.
fn action_direction(kind: ActionKind) -> Option<f32> {
    if kind.is_harmful() {
        Some(-1.0)
    } else if kind.is_benevolent() {
        Some(1.0)
    } else {
        None
    }
}

/// One member's stance on a contemplated action, roughly ±20 plus trait
/// and experience adjustments.
fn member_stance(member: &Psyche, kind: ActionKind, now: &SimTime) -> f32 {
    let Some(direction) = action_direction(kind) else {
        return 0.0;
    };
    let align_factor = (member.alignment() as f32 / 500.0).clamp(-1.0, 1.0);
    let mut stance = 20.0 * direction * align_factor;

    if member.emotions.get(Emotion::Loyalty) > 70.0 {
        stance *= 1.5;
    }
    if kind.is_harmful() && member.emotions.get(Emotion::Compassion) > 70.0 {
        stance -= 10.0;
    }
    if kind == ActionKind::Defend && member.emotions.get(Emotion::Courage) > 70.0 {
        stance += 5.0;
    }

    stance + learning::action_bias(&member.memory, kind, now) / 3.0
}

/// The leader's pull on one follower for one action, clamped to ±50.
///
/// Magnitude comes from the level gap (0–20) and loyalty-based
/// susceptibility (−10 to +15), dampened above 80 emotional intelligence
/// and amplified below 30, scaled by the group's reputation. The sign
/// comes from the leader's alignment against the action category.
#[must_use]
pub fn leader_influence(
    follower: &Psyche,
    leader: &Psyche,
    group_reputation: f32,
    kind: ActionKind,
) -> f32 {
    if follower.entity.id == leader.entity.id {
        return 0.0;
    }
    let Some(direction) = action_direction(kind) else {
        return 0.0;
    };

    let level_gap = ((i64::from(leader.level) - i64::from(follower.level)) * 2).clamp(0, 20) as f32;
    let loyalty = follower.emotions.get(Emotion::Loyalty);
    let susceptibility = if loyalty > 70.0 {
        15.0
    } else if loyalty < 30.0 {
        -10.0
    } else {
        5.0
    };

    let mut magnitude = level_gap + susceptibility;
    let ei = follower.emotional_intelligence;
    if ei > 80.0 {
        magnitude *= 0.5;
    } else if ei < 30.0 {
        magnitude *= 1.5;
    }
    if group_reputation > 70.0 {
        magnitude *= 1.2;
    } else if group_reputation < 30.0 {
        magnitude *= 0.8;
    }

    let align_factor = (leader.alignment() as f32 / 500.0).clamp(-1.0, 1.0);
    (magnitude * direction * align_factor).clamp(-50.0, 50.0)
}

/// Peer pressure on the actor for one contemplated action, in
/// [-100, 100].
///
/// The average stance of non-self members, folded with the leader's
/// influence at half weight, then amplified by group size (+10% at three
/// members, +20% at five).
#[must_use]
pub fn peer_pressure(
    actor: &Psyche,
    kind: ActionKind,
    ctx: &GroupContext<'_>,
    now: &SimTime,
) -> f32 {
    let stances: Vec<f32> = ctx
        .members
        .iter()
        .filter(|m| m.entity.id != actor.entity.id)
        .map(|m| member_stance(m, kind, now))
        .collect();
    if stances.is_empty() {
        return 0.0;
    }
    let avg = stances.iter().sum::<f32>() / stances.len() as f32;

    let leader = leader_influence(actor, ctx.leader, ctx.group.reputation.score, kind);

    let size = ctx.members.len();
    let size_mult = if size >= 5 {
        1.2
    } else if size >= 3 {
        1.1
    } else {
        1.0
    };

    ((avg + leader * 0.5) * size_mult).clamp(-100.0, 100.0)
}

/// Whether the actor dissents from the group's push.
///
/// Conscientious objection: own cost strongly aversive (< -60) while the
/// group-adjusted cost is attractive (> 20), and the actor has the
/// backbone for it — deep compassion with strong good alignment, a
/// learned avoidance of the action, or high emotional intelligence.
/// Alternatively, a disloyal member splits whenever the divergence is
/// large. Dissent halves the applied peer pressure.
#[must_use]
pub fn should_dissent(
    actor: &Psyche,
    kind: ActionKind,
    individual_cost: f32,
    group_cost: f32,
    now: &SimTime,
) -> bool {
    let has_backbone = (actor.emotions.get(Emotion::Compassion) > 70.0 && actor.alignment() > 500)
        || learning::has_learned_avoidance(&actor.memory, kind, now)
        || actor.emotional_intelligence > 80.0;
    let conscience_split = individual_cost < -60.0 && group_cost > 20.0 && has_backbone;

    let disloyal_split = actor.emotions.get(Emotion::Loyalty) < 30.0
        && (individual_cost - group_cost).abs() > 80.0;

    conscience_split || disloyal_split
}

/// Restraint modifier for acting against another group, clamped to ±50.
///
/// Positive values mean restraint earned by standing: the cost evaluator
/// subtracts this from the cost of harmful cross-group actions. High own
/// reputation adds up to +10, low subtracts up to 15, mutual high
/// standing adds a flat +20 (suppressing good-vs-good conflict), low
/// standing facing high adds -10 (predation), and the raw reputation
/// difference contributes proportionally.
#[must_use]
pub fn intergroup_modifier(own_reputation: f32, target_reputation: f32) -> f32 {
    let own = own_reputation.clamp(0.0, 100.0);
    let target = target_reputation.clamp(0.0, 100.0);

    let mut modifier = 0.0;
    if own > 70.0 {
        modifier += (own - 70.0) / 3.0; // up to +10
    }
    if own < 30.0 {
        modifier -= (30.0 - own) / 2.0; // up to -15
    }
    if own > 70.0 && target > 70.0 {
        modifier += 20.0;
    }
    if own < 30.0 && target > 70.0 {
        modifier -= 10.0;
    }
    modifier += (own - target) * 0.1;

    modifier.clamp(-50.0, 50.0)
}
