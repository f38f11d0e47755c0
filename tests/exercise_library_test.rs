// ABOUTME: Tests for exercise library selection across sports and goals
// ABOUTME: Verifies the exactly-three guarantee and goal-driven blending rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Arete Training Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use arete_engine::intelligence::exercises_for_profile;
use arete_engine::models::{Goal, Sport};

const DRILL_SPORTS: [Sport; 5] = [
    Sport::Tennis,
    Sport::Basketball,
    Sport::Soccer,
    Sport::Waterpolo,
    Sport::Football,
];

fn all_goals() -> Vec<Option<Goal>> {
    vec![
        None,
        Some(Goal::Compete),
        Some(Goal::Fitness),
        Some(Goal::Skills),
        Some(Goal::Consistency),
        Some(Goal::Comeback),
        Some(Goal::Pro),
        Some(Goal::Fun),
    ]
}

#[test]
fn every_sport_goal_combination_yields_exactly_three() {
    let mut sports: Vec<Sport> = DRILL_SPORTS.to_vec();
    sports.extend([
        Sport::Golf,
        Sport::Swimming,
        Sport::Baseball,
        Sport::Other("ultimate frisbee".into()),
    ]);

    for sport in &sports {
        for goal in all_goals() {
            let exercises = exercises_for_profile(sport, goal);
            assert_eq!(exercises.len(), 3, "{sport:?} / {goal:?}");
        }
    }
}

#[test]
fn skills_goal_returns_three_sport_drills() {
    for sport in DRILL_SPORTS {
        let exercises = exercises_for_profile(&sport, Some(Goal::Skills));
        // Sport drills all carry an elite insight and metrics.
        for exercise in &exercises {
            assert!(exercise.elite_insight.is_some(), "{}", exercise.name);
            assert!(!exercise.metrics.is_empty(), "{}", exercise.name);
        }
        assert!(!exercises[0].name.contains("Visualization"));
    }
}

#[test]
fn compete_and_pro_goals_blend_in_visualization() {
    for goal in [Goal::Compete, Goal::Pro] {
        let exercises = exercises_for_profile(&Sport::Waterpolo, Some(goal));
        assert!(exercises[2].name.contains("Visualization"), "{goal:?}");
    }
}

#[test]
fn comeback_goal_blends_in_the_recovery_protocol() {
    let exercises = exercises_for_profile(&Sport::Football, Some(Goal::Comeback));
    assert!(exercises[2].name.contains("Recovery System"));
}

#[test]
fn default_goals_blend_in_pressure_training() {
    for goal in [None, Some(Goal::Fitness), Some(Goal::Consistency), Some(Goal::Fun)] {
        let exercises = exercises_for_profile(&Sport::Tennis, goal);
        assert!(exercises[2].name.contains("Consequence"), "{goal:?}");
    }
}

#[test]
fn unknown_sport_gets_the_universal_protocol_set() {
    let exercises = exercises_for_profile(&Sport::Other("handball".into()), Some(Goal::Pro));
    let names: Vec<&str> = exercises.iter().map(|e| e.name.as_str()).collect();
    assert!(names[0].contains("Visualization"));
    assert!(names[1].contains("Consequence"));
    assert!(names[2].contains("Recovery System"));
}
