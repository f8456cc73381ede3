//! Moral Rule Engine — the boolean derivation chain over a scenario.
//!
//! Implements the staged causation → intention → responsibility → blame
//! model of Shultz, Schleifer & Daley's work on naive theories of moral
//! judgment: causation is established first, the actor's mental state is
//! classified, responsibility requires voluntary foreseeable causation
//! with no intervening cause, and blame requires responsibility minus
//! justification with harm exceeding benefit. Vicarious responsibility
//! routes blame up a command hierarchy.
//!
//! The engine is pure: same scenario in, same judgment out.

use serde::{Deserialize, Serialize};

use crate::scenario::MoralScenario;
use crate::types::{ActionKind, Foreseeability, MentalState};

/// Intermediate flags derived during rule evaluation, kept on the
/// judgment for diagnostics and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JudgmentFlags {
    /// The actor caused the harm.
    pub cause: bool,
    /// The outcome was foreseeable at all.
    pub foreseeable: bool,
    /// Direct or planned intention.
    pub strong_intend: bool,
    /// Conscious disregard of a known risk.
    pub reckless: bool,
    /// Failure to notice a knowable risk.
    pub negligent: bool,
    /// Intention, strong or inferred.
    pub intend: bool,
    /// No intent, no recklessness, no negligence.
    pub accident: bool,
    /// The actor acted under no external compulsion.
    pub voluntary: bool,
    /// An unforeseen third factor broke the causal chain.
    pub intervening_cause: bool,
    /// Full responsibility established.
    pub responsible: bool,
    /// Responsibility through a controlled subordinate.
    pub vicarious: bool,
    /// The act was justified by its goal.
    pub justified: bool,
    /// Blameworthy for one's own act.
    pub blameworthy: bool,
    /// Blameworthy for a subordinate's act.
    pub vicarious_blame: bool,
}

/// The result of judging one action.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoralJudgment {
    /// The judged action.
    pub action: ActionKind,
    /// Guilty of blameworthy conduct, directly or vicariously.
    pub guilty: bool,
    /// Responsibility score [0, 100].
    pub responsibility: f32,
    /// Blameworthiness score [0, 100].
    pub blameworthiness: f32,
    /// Harm severity carried over from the scenario [0, 100].
    pub severity: f32,
    /// Component flags for diagnostics.
    pub flags: JudgmentFlags,
}

/// Evaluate the rule chain over one scenario.
#[must_use]
pub fn evaluate(s: &MoralScenario) -> MoralJudgment {
    let cause = s.produce_harm || s.necessary_for_harm || s.sufficient_for_harm;
    let foreseeable = s.foreseeability != Foreseeability::None;

    let strong_intend = s.mental_state == MentalState::Intend
        || (s.plan_known && s.plan_includes_harm && s.harm_as_planned);
    let reckless = s.mental_state == MentalState::Reckless
        || (!s.careful && !strong_intend && s.foreseeability == Foreseeability::High);
    let negligent = s.mental_state == MentalState::Negligent
        || (!s.careful && !strong_intend && s.foreseeability == Foreseeability::Low);
    let weak_intend = (!s.external_cause || s.monitor || s.benefits_protagonist)
        && !reckless
        && !negligent;
    let intend = strong_intend || weak_intend;

    let accident = !intend && !reckless && !negligent;
    let voluntary = !s.external_force;
    let intervening_cause = s.intervening_contribution && !s.foreseen_intervention;

    let responsible = cause && !accident && voluntary && foreseeable && !intervening_cause;
    let vicarious = s.others_caused_harm && s.outranks_perpetrator && s.controls_perpetrator;
    let justified = s.achieves_goal && s.goal_outweighs_harm && !s.less_harmful_alternative;

    let harm_exceeds_benefit = s.severity > s.victim_benefit;
    let blameworthy = responsible && !justified && harm_exceeds_benefit;
    let vicarious_blame = vicarious && !justified && harm_exceeds_benefit;
    let guilty = blameworthy || vicarious_blame;

    let pts = |flag: bool| if flag { 1.0_f32 } else { 0.0 };
    let responsibility = 25.0 * pts(cause) + 50.0 * pts(responsible) + 25.0 * pts(intend);
    let blameworthiness =
        40.0 * pts(responsible) + 30.0 * pts(!justified) + (3.0 * s.severity).min(30.0);

    MoralJudgment {
        action: s.action,
        guilty,
        responsibility,
        blameworthiness,
        severity: s.severity,
        flags: JudgmentFlags {
            cause,
            foreseeable,
            strong_intend,
            reckless,
            negligent,
            intend,
            accident,
            voluntary,
            intervening_cause,
            responsible,
            vicarious,
            justified,
            blameworthy,
            vicarious_blame,
        },
    }
}
