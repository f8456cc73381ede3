//! ETHOS Benchmark Suite
//!
//! CI-enforced performance targets:
//!   projection_4d ................... < 5μs
//!   scenario_and_judgment ........... < 10μs
//!   cost_eval_solo .................. < 20μs
//!   cost_eval_with_6_member_group ... < 100μs
//!   record_completed_action ......... < 50μs

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use ethos_core::emotion::Emotion;
use ethos_core::engine::MoralEngine;
use ethos_core::group::{Group, GroupContext};
use ethos_core::modulation::Relation;
use ethos_core::profiles::PersonalityProfile;
use ethos_core::psyche::Psyche;
use ethos_core::rules;
use ethos_core::scenario::{self, TargetProfile};
use ethos_core::types::{ActionKind, SimTime};
use ethos_core::{coping::Situation, cost};

fn busy_agent(name: &str, alignment: i32) -> Psyche {
    let mut psyche = Psyche::new(name, PersonalityProfile::Sensitive);
    psyche.set_alignment(alignment);
    psyche.emotions.set(Emotion::Anger, 40.0);
    psyche.emotions.set(Emotion::Fear, 55.0);
    psyche.emotions.set(Emotion::Compassion, 65.0);
    psyche.emotions.set(Emotion::Shame, 30.0);
    psyche.emotions.set(Emotion::Loyalty, 75.0);
    psyche
}

fn victim_profile(target: &Psyche) -> TargetProfile {
    TargetProfile {
        entity: target.entity,
        name: target.name.clone(),
        alignment: target.alignment(),
        max_vitality: 450.0,
    }
}

/// Benchmark: full 4D state query (target: < 5μs for the projection).
fn bench_projection(c: &mut Criterion) {
    let engine = MoralEngine::default();
    let agent = busy_agent("Brek", 200);
    let situation = Situation {
        in_combat: true,
        occupants: 6,
        allies: 2,
        enemies: 3,
        ..Situation::default()
    };

    c.bench_function("projection_4d", |b| {
        b.iter(|| {
            let state = engine.emotion_4d_state(
                black_box(Some(&agent)),
                black_box(Some(&situation)),
                &Relation::default(),
                black_box(12.0),
                None,
            );
            black_box(state);
        });
    });
}

/// Benchmark: scenario construction + rule evaluation (target: < 10μs).
fn bench_judgment(c: &mut Criterion) {
    let actor = busy_agent("Brek", 200);
    let victim = busy_agent("Vek", -100);
    let profile = victim_profile(&victim);

    c.bench_function("scenario_and_judgment", |b| {
        b.iter(|| {
            let built =
                scenario::build_scenario(black_box(&actor), black_box(&profile), ActionKind::Attack);
            black_box(rules::evaluate(&built));
        });
    });
}

/// Benchmark: cost evaluation without a group (target: < 20μs).
fn bench_cost_solo(c: &mut Criterion) {
    let actor = busy_agent("Brek", 200);
    let victim = busy_agent("Vek", -100);
    let profile = victim_profile(&victim);
    let now = SimTime::now(10_000);

    c.bench_function("cost_eval_solo", |b| {
        b.iter(|| {
            black_box(cost::evaluate_action_cost(
                black_box(&actor),
                black_box(&profile),
                ActionKind::Attack,
                None,
                true,
                &now,
            ));
        });
    });
}

/// Benchmark: cost evaluation with a 6-member group (target: < 100μs).
fn bench_cost_with_group(c: &mut Criterion) {
    let mut leader = busy_agent("Morgeth", -800);
    leader.level = 30;
    let members_owned: Vec<Psyche> = (0..5)
        .map(|i| busy_agent(&format!("member{i}"), -400 + i * 100))
        .collect();
    let actor = busy_agent("Brek", 300);
    let victim = busy_agent("Vek", 0);
    let profile = victim_profile(&victim);

    let group = Group::new("Black Fangs", leader.entity.id, leader.alignment());
    let mut members: Vec<&Psyche> = vec![&leader, &actor];
    members.extend(members_owned.iter());
    let ctx = GroupContext {
        group: &group,
        leader: &leader,
        members: &members,
        target_group_reputation: Some(65.0),
    };
    let now = SimTime::now(10_000);

    c.bench_function("cost_eval_with_6_member_group", |b| {
        b.iter(|| {
            black_box(cost::evaluate_action_cost(
                black_box(&actor),
                black_box(&profile),
                ActionKind::Attack,
                Some(&ctx),
                true,
                &now,
            ));
        });
    });
}

/// Benchmark: the full post-action pipeline (target: < 50μs).
fn bench_record_action(c: &mut Criterion) {
    let engine = MoralEngine::default();
    let actor_template = busy_agent("Brek", 200);
    let victim_template = busy_agent("Vek", -100);
    let profile = victim_profile(&victim_template);
    let now = SimTime::now(10_000);

    c.bench_function("record_completed_action", |b| {
        b.iter(|| {
            let mut actor = actor_template.clone();
            let mut victim = victim_template.clone();
            black_box(engine.record_completed_action(
                &mut actor,
                Some(&mut victim),
                &profile,
                ActionKind::Attack,
                None,
                &now,
            ));
        });
    });
}

criterion_group!(
    benches,
    bench_projection,
    bench_judgment,
    bench_cost_solo,
    bench_cost_with_group,
    bench_record_action
);
criterion_main!(benches);
