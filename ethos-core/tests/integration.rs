//! Integration Tests — End-to-End Moral Flows
//!
//! These tests verify the complete pipelines: forecast → act → judgment →
//! feedback → memory → learned bias on the next forecast, plus the group
//! dissent path and the 4D state pipeline.

use ethos_core::config::EthosConfig;
use ethos_core::coping::{self, Situation};
use ethos_core::emotion::Emotion;
use ethos_core::engine::MoralEngine;
use ethos_core::group::{self, Group, GroupContext};
use ethos_core::learning;
use ethos_core::modulation::Relation;
use ethos_core::profiles::PersonalityProfile;
use ethos_core::psyche::Psyche;
use ethos_core::scenario::TargetProfile;
use ethos_core::types::{ActionKind, SimTime, Verdict};

fn ts(secs: u64) -> SimTime {
    SimTime::now(secs)
}

fn target_for(victim: &Psyche, max_vitality: f32) -> TargetProfile {
    TargetProfile {
        entity: victim.entity,
        name: victim.name.clone(),
        alignment: victim.alignment(),
        max_vitality,
    }
}

// ---------------------------------------------------------------------------
// Full moral lifecycle: forecast → act → feedback → memory → learned bias
// ---------------------------------------------------------------------------

#[test]
fn full_moral_lifecycle() {
    let engine = MoralEngine::default();
    let mut actor = Psyche::new("Brek", PersonalityProfile::Neutral);
    let mut victim = Psyche::new("Vek", PersonalityProfile::Neutral);
    let profile = target_for(&victim, 300.0);

    // 1. Forecast before acting: attacking a harmless neutral is aversive.
    let forecast_cost =
        engine.evaluate_action_cost(Some(&actor), &profile, ActionKind::Attack, None, &ts(1000));
    assert!(forecast_cost < 0);

    // 2. The agent attacks anyway; record the completed action.
    let alignment_before = actor.alignment();
    let judgment = engine
        .record_completed_action(
            &mut actor,
            Some(&mut victim),
            &profile,
            ActionKind::Attack,
            None,
            &ts(1010),
        )
        .expect("attack is judged");
    assert!(judgment.guilty);

    // 3. Feedback landed: alignment fell, shame rose.
    assert!(actor.alignment() < alignment_before);
    assert!(actor.emotions.get(Emotion::Shame) > 0.0);

    // 4. Memory landed on both sides with the verdict stamped.
    let actor_slot = actor.memory.active.iter().next().expect("actor memory");
    assert_eq!(actor_slot.annotation.verdict, Some(Verdict::Guilty));
    let victim_slot = victim.memory.passive.iter().next().expect("victim memory");
    assert_eq!(victim_slot.annotation.verdict, Some(Verdict::Guilty));

    // 5. The memory now biases the next forecast further into aversion.
    let informed_cost =
        engine.evaluate_action_cost(Some(&actor), &profile, ActionKind::Attack, None, &ts(1100));
    assert!(informed_cost < forecast_cost);
}

#[test]
fn repeated_guilt_becomes_learned_avoidance() {
    let engine = MoralEngine::default();
    let mut actor = Psyche::new("Brek", PersonalityProfile::Neutral);
    let mut victim = Psyche::new("Vek", PersonalityProfile::Neutral);
    let profile = target_for(&victim, 300.0);

    for i in 0..3 {
        engine
            .record_completed_action(
                &mut actor,
                Some(&mut victim),
                &profile,
                ActionKind::Steal,
                None,
                &ts(1000 + i * 60),
            )
            .expect("steal is judged");
    }

    // Three guilty verdicts, zero innocent, all within 30 minutes.
    assert!(learning::has_learned_avoidance(
        &actor.memory,
        ActionKind::Steal,
        &ts(1300)
    ));

    // The bias is firmly negative.
    let bias = learning::action_bias(&actor.memory, ActionKind::Steal, &ts(1300));
    assert!(bias < 0.0);
}

#[test]
fn virtuous_acts_build_pride_and_attraction() {
    let engine = MoralEngine::default();
    let mut healer = Psyche::new("Mira", PersonalityProfile::Sensitive);
    healer.set_alignment(600);
    let mut patient = Psyche::new("Sten", PersonalityProfile::Neutral);
    let profile = target_for(&patient, 200.0);

    let judgment = engine
        .record_completed_action(
            &mut healer,
            Some(&mut patient),
            &profile,
            ActionKind::Heal,
            None,
            &ts(2000),
        )
        .expect("heal is judged");
    assert!(!judgment.guilty);

    // Healing is not high-responsibility harm, so alignment holds and no
    // shame accrues.
    assert_eq!(healer.emotions.get(Emotion::Shame), 0.0);

    let slot = healer.memory.active.iter().next().expect("healer memory");
    assert_eq!(slot.annotation.verdict, Some(Verdict::Innocent));
    assert!((slot.annotation.regret - 0.0).abs() < f32::EPSILON);

    // The innocent memory attracts the next heal.
    let bias = learning::action_bias(&healer.memory, ActionKind::Heal, &ts(2100));
    assert!(bias > 0.0);
}

// ---------------------------------------------------------------------------
// Justification: defense and crusade stay guilt-free
// ---------------------------------------------------------------------------

#[test]
fn justified_defense_leaves_conscience_clean() {
    let engine = MoralEngine::default();
    let mut defender = Psyche::new("Aurel", PersonalityProfile::Confident);
    defender.set_alignment(500);
    let aggressor = Psyche::new("Morgeth", PersonalityProfile::Aggressive);
    let profile = target_for(&aggressor, 300.0);

    let alignment_before = defender.alignment();
    let judgment = engine
        .record_completed_action(
            &mut defender,
            None,
            &profile,
            ActionKind::Defend,
            None,
            &ts(3000),
        )
        .expect("defense is judged");

    assert!(!judgment.guilty);
    assert!(judgment.flags.responsible, "defense is still responsible conduct");
    assert!(judgment.flags.justified);
    // High-responsibility innocence raises alignment.
    assert!(defender.alignment() >= alignment_before);
    assert_eq!(defender.emotions.get(Emotion::Shame), 0.0);
}

#[test]
fn cross_alignment_crusade_is_guilt_free() {
    let engine = MoralEngine::default();
    let mut paladin = Psyche::new("Aurel", PersonalityProfile::Confident);
    paladin.set_alignment(800);
    let mut demon = Psyche::new("Xul", PersonalityProfile::Aggressive);
    demon.set_alignment(-800);
    let profile = target_for(&demon, 300.0);

    let judgment = engine
        .record_completed_action(
            &mut paladin,
            Some(&mut demon),
            &profile,
            ActionKind::Attack,
            None,
            &ts(4000),
        )
        .expect("attack is judged");

    assert!(!judgment.guilty, "good-vs-evil aggression is auto-justified");
    assert_eq!(paladin.emotions.get(Emotion::Shame), 0.0);
}

// ---------------------------------------------------------------------------
// Group flow: pressure, dissent, collective reputation
// ---------------------------------------------------------------------------

#[test]
fn warband_pressure_and_conscript_dissent() {
    let mut leader = Psyche::new("Morgeth", PersonalityProfile::Aggressive);
    leader.set_alignment(-800);
    leader.level = 30;
    let mut thug = Psyche::new("Skarn", PersonalityProfile::Aggressive);
    thug.set_alignment(-700);

    // The conscript has both the conscience and the backbone to dissent.
    let mut conscript = Psyche::new("Mira", PersonalityProfile::Sensitive);
    conscript.set_alignment(600);
    conscript.emotions.set(Emotion::Compassion, 80.0);

    let group = Group::new("Black Fangs", leader.entity.id, leader.alignment());
    let members: Vec<&Psyche> = vec![&leader, &thug, &conscript];
    let ctx = GroupContext {
        group: &group,
        leader: &leader,
        members: &members,
        target_group_reputation: None,
    };

    let now = ts(5000);
    let pressure = group::peer_pressure(&conscript, ActionKind::Attack, &ctx, &now);
    assert!(pressure > 0.0, "the warband pushes toward the attack");

    // Spec-level dissent check: strongly aversive own conscience, group
    // pushing the other way.
    assert!(group::should_dissent(
        &conscript,
        ActionKind::Attack,
        -80.0,
        40.0,
        &now
    ));
    // Applied pressure is then exactly half the unadjusted value — the
    // halving lives in the cost evaluator, asserted here at the unit it
    // defines: dissent gates a 0.5 multiplier.
    let halved = pressure * 0.5;
    assert!(halved.abs() < pressure.abs());
}

#[test]
fn collective_raid_erodes_group_standing() {
    let engine = MoralEngine::default();
    let mut leader = Psyche::new("Morgeth", PersonalityProfile::Aggressive);
    leader.set_alignment(-800);
    let mut grunt_a = Psyche::new("Skarn", PersonalityProfile::Aggressive);
    grunt_a.set_alignment(-300);
    let mut grunt_b = Psyche::new("Grub", PersonalityProfile::Aggressive);
    grunt_b.set_alignment(-100);

    let mut group = Group::new("Black Fangs", leader.entity.id, leader.alignment());
    assert!((group.reputation.score - 30.0).abs() < f32::EPSILON);

    let villager = Psyche::new("Sten", PersonalityProfile::Neutral);
    let profile = target_for(&villager, 200.0);

    let grunt_a_alignment = grunt_a.alignment();
    {
        let mut members: Vec<&mut Psyche> = vec![&mut leader, &mut grunt_a, &mut grunt_b];
        engine
            .record_collective_action(&mut group, &mut members, &profile, ActionKind::Attack, &ts(6000))
            .expect("raid is judged");
    }

    // Every member carries the stain.
    assert!(grunt_a.alignment() < grunt_a_alignment);
    assert_eq!(leader.memory.active.len(), 1);
    assert_eq!(grunt_b.memory.active.len(), 1);
    // The group's shared standing fell.
    assert!(group.reputation.score < 30.0);
    assert_eq!(group.reputation.guilty_acts, 1);
    assert!(group.reputation.last_action.is_some());
}

// ---------------------------------------------------------------------------
// 4D state pipeline
// ---------------------------------------------------------------------------

#[test]
fn four_d_state_pipeline_matches_contract() {
    let engine = MoralEngine::default();
    let mut agent = Psyche::new("Brek", PersonalityProfile::Defensive);
    agent.emotions.set(Emotion::Fear, 70.0);
    agent.emotions.set(Emotion::Anger, 30.0);

    // Healthy, alone, unimpaired: coping is exactly 60.
    let calm = Situation::default();
    assert!((coping::coping_potential(Some(&calm)) - 60.0).abs() < f32::EPSILON);

    let state = engine.emotion_4d_state(
        Some(&agent),
        Some(&calm),
        &Relation::default(),
        0.0,
        Some("Vek"),
    );
    assert!(state.valid);
    // Coping 60 shifts dominance by (60-50)*0.4 = +4 before the clamp.
    assert!((state.effective.dominance - (state.raw.dominance + 4.0)).abs() < 1e-3);
    // A frightened defensive agent reads negative valence, positive arousal.
    assert!(state.raw.valence < 0.0);
    assert!(state.raw.arousal > 0.0);
    assert!(state.effective.arousal >= 0.0);

    // Combat multiplies arousal.
    let combat = Situation {
        in_combat: true,
        ..Situation::default()
    };
    let fighting = engine.emotion_4d_state(
        Some(&agent),
        Some(&combat),
        &Relation::default(),
        0.0,
        None,
    );
    assert!(fighting.effective.arousal > state.effective.arousal);
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

#[test]
fn config_file_round_trip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("ethos.toml");
    std::fs::write(
        &path,
        r#"
        [general]
        enabled = true
        log_level = "debug"

        [group]
        enabled = false

        [emotion]
        decay_rate = 0.05
        "#,
    )
    .expect("write config");

    let config = EthosConfig::from_file(&path).expect("load config");
    assert_eq!(config.general.log_level, "debug");
    assert!(!config.group.enabled);
    assert!((config.emotion.decay_rate - 0.05).abs() < f32::EPSILON);

    // A group-disabled engine ignores the group context entirely.
    let engine = MoralEngine::new(config);
    let actor = Psyche::new("Brek", PersonalityProfile::Neutral);
    let victim = Psyche::new("Vek", PersonalityProfile::Neutral);
    let profile = target_for(&victim, 20.0);

    let mut leader = Psyche::new("Morgeth", PersonalityProfile::Aggressive);
    leader.set_alignment(-800);
    let group = Group::new("Black Fangs", leader.entity.id, leader.alignment());
    let members: Vec<&Psyche> = vec![&leader, &actor];
    let ctx = GroupContext {
        group: &group,
        leader: &leader,
        members: &members,
        target_group_reputation: None,
    };

    let with_group =
        engine.evaluate_action_cost(Some(&actor), &profile, ActionKind::Attack, Some(&ctx), &ts(0));
    let without =
        engine.evaluate_action_cost(Some(&actor), &profile, ActionKind::Attack, None, &ts(0));
    assert_eq!(with_group, without);
}
