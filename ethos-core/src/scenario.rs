//! Moral Scenario Builder — mapping an action to a predicate bag.
//!
//! Judgment never looks at the world directly; it looks at a
//! [`MoralScenario`], a bag of causal/intentional predicates describing
//! one action instance. Each action kind has a deterministic baseline
//! template; the actor's traits then adjust carefulness, monitoring,
//! recklessness, and severity.

use serde::{Deserialize, Serialize};

use crate::emotion::Emotion;
use crate::psyche::Psyche;
use crate::types::{
    ActionKind, AlignmentBand, BondKind, EntityRef, Foreseeability, MentalState,
};

/// What the judging side needs to know about the action's target.
///
/// The target is any entity — it need not carry a `Psyche`. Vitality and
/// alignment come from the hosting simulation's character records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetProfile {
    /// The target entity.
    pub entity: EntityRef,
    /// Display name, used in diagnostics only.
    pub name: String,
    /// The target's moral alignment [-1000, 1000].
    pub alignment: i32,
    /// The target's maximum vitality; harm severity scales from it.
    pub max_vitality: f32,
}

/// The predicate bag describing one action instance under judgment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoralScenario {
    /// The action being judged.
    pub action: ActionKind,
    /// The actor's conduct directly produced the harm.
    pub produce_harm: bool,
    /// The conduct was a necessary condition of the harm.
    pub necessary_for_harm: bool,
    /// The conduct was a sufficient condition of the harm.
    pub sufficient_for_harm: bool,
    /// The actor's mental state toward the outcome.
    pub mental_state: MentalState,
    /// The actor had a plan covering this action.
    pub plan_known: bool,
    /// That plan included the harm.
    pub plan_includes_harm: bool,
    /// The harm unfolded as the plan foresaw.
    pub harm_as_planned: bool,
    /// How predictable the outcome was.
    pub foreseeability: Foreseeability,
    /// The actor exercised due care.
    pub careful: bool,
    /// The actor was actively monitoring the outcome.
    pub monitor: bool,
    /// The proximate cause lay outside the actor.
    pub external_cause: bool,
    /// The actor stood to gain from the outcome.
    pub benefits_protagonist: bool,
    /// The actor was physically compelled.
    pub external_force: bool,
    /// A third factor contributed to the harm.
    pub intervening_contribution: bool,
    /// That third factor was foreseen by the actor.
    pub foreseen_intervention: bool,
    /// Subordinates, not the actor, caused the harm.
    pub others_caused_harm: bool,
    /// The actor outranks the actual perpetrator.
    pub outranks_perpetrator: bool,
    /// The actor had effective control over the perpetrator.
    pub controls_perpetrator: bool,
    /// The action achieved a legitimate goal.
    pub achieves_goal: bool,
    /// That goal outweighed the harm done.
    pub goal_outweighs_harm: bool,
    /// A less harmful route to the goal existed.
    pub less_harmful_alternative: bool,
    /// Magnitude of the harm [0, 100].
    pub severity: f32,
    /// Benefit conferred on the target [0, 100].
    pub victim_benefit: f32,
}

impl MoralScenario {
    /// An all-clear scenario for the given action: no harm, no intent,
    /// nothing to judge.
    #[must_use]
    pub fn blank(action: ActionKind) -> Self {
        Self {
            action,
            produce_harm: false,
            necessary_for_harm: false,
            sufficient_for_harm: false,
            mental_state: MentalState::None,
            plan_known: false,
            plan_includes_harm: false,
            harm_as_planned: false,
            foreseeability: Foreseeability::None,
            careful: false,
            monitor: false,
            external_cause: false,
            benefits_protagonist: false,
            external_force: false,
            intervening_contribution: false,
            foreseen_intervention: false,
            others_caused_harm: false,
            outranks_perpetrator: false,
            controls_perpetrator: false,
            achieves_goal: false,
            goal_outweighs_harm: false,
            less_harmful_alternative: false,
            severity: 0.0,
            victim_benefit: 0.0,
        }
    }
}

/// Whether an attack across these two alignments is auto-justified.
///
/// Good-vs-evil and evil-vs-good aggression carries its own
/// justification: aligned factions fight each other without accruing
/// guilt.
#[must_use]
fn cross_alignment(actor: AlignmentBand, target: AlignmentBand) -> bool {
    matches!(
        (actor, target),
        (AlignmentBand::Good, AlignmentBand::Evil) | (AlignmentBand::Evil, AlignmentBand::Good)
    )
}

/// Baseline predicate template for one action kind.
fn baseline(actor: &Psyche, target: &TargetProfile, kind: ActionKind) -> MoralScenario {
    let mut s = MoralScenario::blank(kind);
    match kind {
        ActionKind::Attack => {
            s.produce_harm = true;
            s.sufficient_for_harm = true;
            s.plan_known = true;
            s.plan_includes_harm = true;
            s.harm_as_planned = true;
            s.mental_state = MentalState::Intend;
            s.foreseeability = Foreseeability::High;
            s.severity = (target.max_vitality / 10.0).clamp(0.0, 100.0);
            if cross_alignment(actor.band(), AlignmentBand::from_value(target.alignment)) {
                s.achieves_goal = true;
                s.goal_outweighs_harm = true;
                s.less_harmful_alternative = false;
            }
        }
        ActionKind::Steal => {
            s.produce_harm = true;
            s.plan_known = true;
            s.plan_includes_harm = true;
            s.harm_as_planned = true;
            s.mental_state = MentalState::Intend;
            s.foreseeability = Foreseeability::High;
            s.benefits_protagonist = true;
            s.severity = 20.0;
        }
        ActionKind::Help => {
            s.achieves_goal = true;
            s.goal_outweighs_harm = true;
            s.victim_benefit = 30.0;
        }
        ActionKind::Heal => {
            s.achieves_goal = true;
            s.goal_outweighs_harm = true;
            s.victim_benefit = 40.0;
        }
        ActionKind::Deceive => {
            s.produce_harm = true;
            s.mental_state = MentalState::Intend;
            s.foreseeability = Foreseeability::High;
            s.benefits_protagonist = true;
            s.severity = 15.0;
        }
        ActionKind::Betray => {
            s.produce_harm = true;
            s.sufficient_for_harm = true;
            s.plan_known = true;
            s.plan_includes_harm = true;
            s.harm_as_planned = true;
            s.mental_state = MentalState::Intend;
            s.foreseeability = Foreseeability::High;
            s.benefits_protagonist = true;
            s.severity = 50.0;
        }
        ActionKind::AbandonAlly => {
            // Harm by omission: the danger was there to see, the actor
            // simply walked away from it.
            s.produce_harm = true;
            s.mental_state = MentalState::Negligent;
            s.foreseeability = Foreseeability::Low;
            s.severity = 30.0;
        }
        ActionKind::Defend => {
            // Harms the aggressor, but protection is its own
            // justification.
            s.produce_harm = true;
            s.sufficient_for_harm = true;
            s.mental_state = MentalState::Intend;
            s.foreseeability = Foreseeability::High;
            s.achieves_goal = true;
            s.goal_outweighs_harm = true;
            s.severity = 20.0;
        }
        ActionKind::SacrificeSelf => {
            s.achieves_goal = true;
            s.goal_outweighs_harm = true;
            s.victim_benefit = 50.0;
        }
        ActionKind::None | ActionKind::Trade => {}
    }
    s
}

/// Build the full scenario for one action: baseline template plus actor
/// trait adjustments.
#[must_use]
pub fn build_scenario(actor: &Psyche, target: &TargetProfile, kind: ActionKind) -> MoralScenario {
    let mut s = baseline(actor, target, kind);

    let anger = actor.emotions.get(Emotion::Anger);
    let fear = actor.emotions.get(Emotion::Fear);
    let compassion = actor.emotions.get(Emotion::Compassion);
    let ei = actor.emotional_intelligence;

    // Carefulness: self-aware agents are careful, fear sharpens attention,
    // anger erodes it.
    s.careful = (ei + fear / 5.0 - anger / 5.0) > 50.0;

    // Monitoring: high emotional intelligence or high compassion keeps
    // the actor watching the outcome.
    s.monitor = ei > 70.0 || compassion > 70.0;

    // Rage overrides deliberation.
    if anger > 80.0 {
        s.mental_state = MentalState::Reckless;
    }

    // Compassionate actors register harm as heavier.
    if compassion > 60.0 {
        s.severity *= 1.2;
    }

    // Raising a hand against one's own master or follower doubles the
    // weight of the act.
    if kind == ActionKind::Attack
        && matches!(
            actor.bond_with(target.entity.id),
            Some(BondKind::Master | BondKind::Follower)
        )
    {
        s.severity *= 2.0;
    }

    s.severity = s.severity.clamp(0.0, 100.0);
    s
}
