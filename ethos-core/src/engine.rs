//! The engine facade — what the hosting simulation calls.
//!
//! Three operations cover the public contract: a pure 4D state query, a
//! pure cost forecast, and the side-effecting post-action pipeline
//! (judge → feedback → memory). Collective actions get their own entry
//! point so a whole group shares one judgment.
//!
//! Every entry point degrades to a neutral default instead of failing:
//! no subject means a zero vector, neutral coping, zero cost.

use tracing::debug;

use crate::config::EthosConfig;
use crate::coping::{self, Situation};
use crate::cost;
use crate::emotion::EmotionVector;
use crate::feedback;
use crate::group::{Group, GroupContext};
use crate::memory::{MemorySlot, MoralAnnotation};
use crate::modulation::{self, Decision4D, Relation};
use crate::profiles::PersonalityProfile;
use crate::psyche::Psyche;
use crate::rules::{self, MoralJudgment};
use crate::scenario::{self, TargetProfile};
use crate::types::{ActionKind, Axes4, EntityId, SimTime, Verdict};

/// Diagnostic record of one 4D state query.
#[derive(Debug, Clone, PartialEq)]
pub struct StateTrace {
    /// The queried agent.
    pub agent: EntityId,
    /// The agent's personality profile.
    pub profile: PersonalityProfile,
    /// Target name, when the query had a target.
    pub target: Option<String>,
    /// Raw projection.
    pub raw: Axes4,
    /// Modulated signal.
    pub effective: Axes4,
    /// Coping potential used.
    pub coping: f32,
}

/// The moral engine: configuration plus the public operations.
///
/// Stateless beyond its configuration — all agent state lives in the
/// callers' [`Psyche`] values, so one engine serves every agent in the
/// world.
#[derive(Debug, Clone, Default)]
pub struct MoralEngine {
    config: EthosConfig,
}

impl MoralEngine {
    /// Create an engine with the given configuration.
    #[must_use]
    pub fn new(config: EthosConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &EthosConfig {
        &self.config
    }

    /// Compute the momentary 4D decision state for an agent.
    ///
    /// Pure query. A missing agent (or a disabled subsystem) yields the
    /// invalid all-zero state rather than an error.
    #[must_use]
    pub fn emotion_4d_state(
        &self,
        agent: Option<&Psyche>,
        situation: Option<&Situation>,
        relation: &Relation,
        forecast: f32,
        target_name: Option<&str>,
    ) -> Decision4D {
        if !self.config.general.enabled {
            return Decision4D::invalid();
        }
        let Some(agent) = agent else {
            return Decision4D::invalid();
        };

        let raw = agent.raw_projection();
        let coping = coping::coping_potential(situation);
        let default_situation = Situation::default();
        let effective = modulation::modulate(
            raw,
            coping,
            situation.unwrap_or(&default_situation),
            relation,
            forecast,
        );

        if self.config.trace.state_traces {
            let trace = StateTrace {
                agent: agent.entity.id,
                profile: agent.profile,
                target: target_name.map(str::to_string),
                raw,
                effective,
                coping,
            };
            debug!(
                agent = %agent.name,
                profile = %trace.profile,
                target = trace.target.as_deref().unwrap_or("-"),
                valence = trace.effective.valence,
                arousal = trace.effective.arousal,
                dominance = trace.effective.dominance,
                affiliation = trace.effective.affiliation,
                coping = trace.coping,
                "4d state"
            );
        }

        Decision4D {
            raw,
            effective,
            coping,
            valid: true,
        }
    }

    /// Forecast the moral cost of an action before acting.
    ///
    /// Pure query; folds group dynamics in by default when a context is
    /// supplied (configurable). A missing actor costs 0.
    #[must_use]
    pub fn evaluate_action_cost(
        &self,
        actor: Option<&Psyche>,
        target: &TargetProfile,
        kind: ActionKind,
        group: Option<&GroupContext<'_>>,
        now: &SimTime,
    ) -> i32 {
        if !self.config.general.enabled {
            return 0;
        }
        let Some(actor) = actor else {
            return 0;
        };
        let include_group = self.config.group.enabled;
        cost::evaluate_action_cost(actor, target, kind, group, include_group, now).round() as i32
    }

    /// Record a completed action: judge it, feed the verdict back into
    /// the actor, and write annotated memory for actor and (optionally)
    /// victim.
    ///
    /// Returns the judgment, or `None` when the kind is never judged.
    pub fn record_completed_action(
        &self,
        actor: &mut Psyche,
        victim: Option<&mut Psyche>,
        target: &TargetProfile,
        kind: ActionKind,
        relation: Option<&Relation>,
        now: &SimTime,
    ) -> Option<MoralJudgment> {
        if !self.config.general.enabled || !kind.is_judged() {
            return None;
        }

        let built = scenario::build_scenario(actor, target, kind);
        let judgment = rules::evaluate(&built);

        let harmed_loved_one = judgment.guilty
            && (actor.bond_with(target.entity.id).is_some()
                || relation.is_some_and(|r| r.friendship > 70.0));

        let outcome = feedback::apply(actor, &judgment, harmed_loved_one);

        let verdict = if judgment.guilty {
            Verdict::Guilty
        } else {
            Verdict::Innocent
        };
        let annotation = MoralAnnotation {
            action: kind,
            verdict: Some(verdict),
            blameworthiness: judgment.blameworthiness,
            severity: judgment.severity,
            regret: outcome.regret,
        };
        let major = judgment.guilty || judgment.severity >= 50.0;

        let interaction = kind.interaction();
        actor.memory.active.record(MemorySlot::new(
            target.entity,
            interaction,
            major,
            *now,
            actor.emotions.snapshot(),
        ));
        actor.memory.active.annotate_latest(interaction, annotation, now);

        if let Some(victim) = victim {
            victim.memory.passive.record(MemorySlot::new(
                actor.entity,
                interaction,
                major,
                *now,
                victim.emotions.snapshot(),
            ));
            victim.memory.passive.annotate_latest(interaction, annotation, now);
        }

        Some(judgment)
    }

    /// Record a collective action: one judgment, applied to every
    /// member's memory and alignment. The leader additionally takes the
    /// personal reputation update, and the group's shared reputation
    /// moves.
    pub fn record_collective_action(
        &self,
        group: &mut Group,
        members: &mut [&mut Psyche],
        target: &TargetProfile,
        kind: ActionKind,
        now: &SimTime,
    ) -> Option<MoralJudgment> {
        if !self.config.general.enabled || !kind.is_judged() || members.is_empty() {
            return None;
        }

        // Judge from the leader's perspective; fall back to the first
        // member when the leader is not among those present.
        let judgment = {
            let actor: &Psyche = members
                .iter()
                .find(|m| m.entity.id == group.leader)
                .map_or(&*members[0], |m| &**m);
            rules::evaluate(&scenario::build_scenario(actor, target, kind))
        };

        let verdict = if judgment.guilty {
            Verdict::Guilty
        } else {
            Verdict::Innocent
        };
        let annotation = MoralAnnotation {
            action: kind,
            verdict: Some(verdict),
            blameworthiness: judgment.blameworthiness,
            severity: judgment.severity,
            regret: 0.0,
        };
        let major = judgment.guilty || judgment.severity >= 50.0;
        let interaction = kind.interaction();

        for member in members.iter_mut() {
            feedback::apply_alignment(member, &judgment);
            member.memory.active.record(MemorySlot::new(
                target.entity,
                interaction,
                major,
                *now,
                member.emotions.snapshot(),
            ));
            member.memory.active.annotate_latest(interaction, annotation, now);

            if member.entity.id == group.leader {
                feedback::apply_reputation(member, &judgment);
            }
        }

        group.reputation.record_outcome(&judgment, *now);

        debug!(
            group = %group.name,
            action = %kind,
            guilty = judgment.guilty,
            reputation = group.reputation.score,
            "collective action recorded"
        );

        Some(judgment)
    }

    /// Relax an agent's emotions one step toward the neutral rest state.
    ///
    /// Tick-cadence housekeeping; the rate comes from configuration.
    pub fn relax_emotions(&self, actor: &mut Psyche) {
        let rest = EmotionVector::new();
        actor.emotions.decay_toward(&rest, self.config.emotion.decay_rate);
    }
}
