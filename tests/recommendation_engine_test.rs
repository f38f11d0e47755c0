// ABOUTME: Tests for profile building and recommendation assembly end to end
// ABOUTME: Covers primary plan selection, conditional plans, ordering, and the outcome facade
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Arete Training Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use arete_engine::config::AssessmentConfig;
use arete_engine::intelligence::{AssessmentEngine, RecommendationEngine};
use arete_engine::models::{
    AssessmentAnswers, CommitmentLevel, ExperienceLevel, Goal, RecommendationCategory, Sport,
    TrainingHours,
};

fn engine() -> RecommendationEngine {
    RecommendationEngine::with_config(AssessmentConfig::default())
}

fn answers(sport: Sport, goals: Vec<Goal>, hours: Option<TrainingHours>) -> AssessmentAnswers {
    let mut a = AssessmentAnswers::new(sport);
    a.goals = goals;
    a.training_hours = hours;
    a
}

#[test]
fn every_goal_maps_to_its_primary_plan() {
    let e = engine();
    let cases = [
        (Goal::Skills, "skill_mastery", RecommendationCategory::Technical),
        (Goal::Comeback, "injury_recovery", RecommendationCategory::Recovery),
        (Goal::Compete, "competition_prep", RecommendationCategory::Tactical),
        (Goal::Pro, "pro_development", RecommendationCategory::Tactical),
        (Goal::Fitness, "skill_mastery", RecommendationCategory::Technical),
        (Goal::Consistency, "skill_mastery", RecommendationCategory::Technical),
        (Goal::Fun, "skill_mastery", RecommendationCategory::Technical),
    ];

    for (goal, expected_id, expected_category) in cases {
        let a = answers(Sport::Tennis, vec![goal], Some(TrainingHours::H4To7));
        let profile = e.build_profile(&a);
        let recommendations = e.assemble(&a, &profile);
        assert_eq!(recommendations[0].id, expected_id, "{goal:?}");
        assert_eq!(recommendations[0].category, expected_category, "{goal:?}");
    }
}

#[test]
fn assembly_always_returns_one_to_three_plans() {
    let e = engine();
    let goal_sets: [Vec<Goal>; 4] = [
        vec![],
        vec![Goal::Skills],
        vec![Goal::Pro, Goal::Comeback, Goal::Skills],
        vec![Goal::Fun, Goal::Fitness],
    ];
    let hour_options = [None, Some(TrainingHours::H0To3), Some(TrainingHours::H25Plus)];
    let challenge_counts = [0usize, 3];

    for goals in &goal_sets {
        for hours in hour_options {
            for count in challenge_counts {
                let mut a = answers(Sport::Soccer, goals.clone(), hours);
                a.mental_challenges = (0..count).map(|i| format!("challenge-{i}")).collect();
                let profile = e.build_profile(&a);
                let recommendations = e.assemble(&a, &profile);
                assert!((1..=3).contains(&recommendations.len()));
            }
        }
    }
}

#[test]
fn pro_with_mental_load_and_extreme_volume_yields_the_full_ordered_set() {
    let e = engine();
    let mut a = answers(Sport::Basketball, vec![Goal::Pro], Some(TrainingHours::H25Plus));
    a.level = Some(ExperienceLevel::SemiPro);
    a.mental_challenges = vec!["pressure".into(), "nerves".into(), "focus".into()];

    let profile = e.build_profile(&a);
    assert_eq!(profile.commitment_level, CommitmentLevel::Extreme);

    let ids: Vec<String> = e
        .assemble(&a, &profile)
        .into_iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(ids, vec!["pro_development", "mental_training", "recovery_protocol"]);
}

#[test]
fn skills_only_low_commitment_yields_exactly_one_plan() {
    let e = engine();
    let a = answers(Sport::Tennis, vec![Goal::Skills], Some(TrainingHours::H0To3));
    let profile = e.build_profile(&a);
    let recommendations = e.assemble(&a, &profile);
    assert_eq!(recommendations.len(), 1);
    assert_eq!(recommendations[0].category, RecommendationCategory::Technical);
}

#[test]
fn mental_plan_requires_more_than_the_configured_trigger() {
    let e = engine();
    let mut a = answers(Sport::Tennis, vec![Goal::Skills], Some(TrainingHours::H0To3));
    a.mental_challenges = vec!["a".into(), "b".into()];
    let profile = e.build_profile(&a);
    assert_eq!(e.assemble(&a, &profile).len(), 1);

    a.mental_challenges.push("c".into());
    assert_eq!(e.assemble(&a, &profile).len(), 2);
    assert_eq!(e.assemble(&a, &profile)[1].id, "mental_training");
}

#[test]
fn unanswered_hours_default_to_medium_commitment_without_recovery_plan() {
    let e = engine();
    let a = answers(Sport::Tennis, vec![Goal::Skills], None);
    let profile = e.build_profile(&a);
    assert_eq!(profile.commitment_level, CommitmentLevel::Medium);
    assert_eq!(e.assemble(&a, &profile).len(), 1);
}

#[test]
fn secondary_focuses_keep_descending_priority_order() {
    let e = engine();
    let a = answers(
        Sport::Waterpolo,
        vec![Goal::Fun, Goal::Compete, Goal::Comeback, Goal::Fitness],
        Some(TrainingHours::H8To12),
    );
    let profile = e.build_profile(&a);
    assert_eq!(profile.primary_focus, Some(Goal::Comeback));
    assert_eq!(
        profile.secondary_focuses,
        vec![Goal::Compete, Goal::Fitness, Goal::Fun]
    );
}

#[test]
fn facade_outcome_ties_profile_plans_and_exercises_together() {
    let mut a = answers(Sport::Tennis, vec![Goal::Skills], Some(TrainingHours::H13To18));
    a.level = Some(ExperienceLevel::College);

    let outcome = AssessmentEngine::with_config(AssessmentConfig::default()).evaluate(&a);

    assert_eq!(outcome.profile.primary_focus, Some(Goal::Skills));
    // High commitment appends the recovery plan after the primary.
    let ids: Vec<&str> = outcome.recommendations.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["skill_mastery", "recovery_protocol"]);
    assert_eq!(outcome.exercises.len(), 3);
    assert!(outcome.exercises[0].name.contains("Federer"));
}
