// ABOUTME: Tests for the segment classifier scoring, thresholds, and confidence bounds
// ABOUTME: Covers monotonicity, idempotence, and the canonical elite and beginner scenarios
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Arete Training Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use arete_engine::config::ClassifierConfig;
use arete_engine::intelligence::SegmentClassifier;
use arete_engine::models::{
    AssessmentAnswers, CompetitionFrequency, ExperienceLevel, Goal, ProgressTracking, Segment,
    Sport, TrainingHours,
};

fn classifier() -> SegmentClassifier {
    SegmentClassifier::with_config(ClassifierConfig::default())
}

fn base_answers() -> AssessmentAnswers {
    AssessmentAnswers::new(Sport::Tennis)
}

const ALL_LEVELS: [ExperienceLevel; 7] = [
    ExperienceLevel::JustStartingOut,
    ExperienceLevel::Recreational,
    ExperienceLevel::SeriousHobbyist,
    ExperienceLevel::HighSchool,
    ExperienceLevel::College,
    ExperienceLevel::SemiPro,
    ExperienceLevel::Professional,
];

#[test]
fn score_is_monotonic_in_level() {
    let classifier = classifier();
    let mut previous = None;
    for level in ALL_LEVELS {
        let mut answers = base_answers();
        answers.level = Some(level);
        let (score, _) = classifier.score(&answers);
        if let Some(prev) = previous {
            assert!(score > prev, "level {level:?} did not raise the score");
        }
        previous = Some(score);
    }
}

#[test]
fn classification_is_idempotent() {
    let classifier = classifier();
    let mut answers = base_answers();
    answers.level = Some(ExperienceLevel::College);
    answers.training_hours = Some(TrainingHours::H13To18);
    answers.goals = vec![Goal::Compete, Goal::Skills];
    answers.compete = Some(CompetitionFrequency::Regularly);

    let first = classifier.classify(&answers);
    let second = classifier.classify(&answers);
    assert_eq!(first.segment, second.segment);
    assert_eq!(first.confidence, second.confidence);
    assert_eq!(first.reasoning, second.reasoning);
}

#[test]
fn canonical_elite_scenario() {
    let mut answers = base_answers();
    answers.level = Some(ExperienceLevel::Professional);
    answers.training_hours = Some(TrainingHours::H25Plus);
    answers.goals = vec![Goal::Pro];
    answers.compete = Some(CompetitionFrequency::Regularly);
    answers.progress_tracking = Some(ProgressTracking::Clear);

    let result = classifier().classify(&answers);
    assert_eq!(result.segment, Segment::Elite);
    assert_eq!(result.confidence, 100);
}

#[test]
fn canonical_beginner_scenario_scores_zero() {
    let mut answers = base_answers();
    answers.level = Some(ExperienceLevel::JustStartingOut);
    answers.training_hours = Some(TrainingHours::H0To3);
    answers.goals = vec![Goal::Fun];
    answers.compete = Some(CompetitionFrequency::Casual);
    answers.progress_tracking = Some(ProgressTracking::None);

    let classifier = classifier();
    let (score, _) = classifier.score(&answers);
    assert_eq!(score, 0);

    let result = classifier.classify(&answers);
    assert_eq!(result.segment, Segment::Beginner);
    assert_eq!(result.confidence, 85);
}

#[test]
fn confidence_stays_within_bounds_across_the_answer_grid() {
    let classifier = classifier();
    let hours = [
        None,
        Some(TrainingHours::H0To3),
        Some(TrainingHours::H8To12),
        Some(TrainingHours::H19To25),
        Some(TrainingHours::H25Plus),
    ];
    let goal_sets: [Vec<Goal>; 3] = [vec![], vec![Goal::Skills], vec![Goal::Pro, Goal::Compete]];

    for level in ALL_LEVELS {
        for h in hours {
            for goals in &goal_sets {
                let mut answers = base_answers();
                answers.level = Some(level);
                answers.training_hours = h;
                answers.goals = goals.clone();
                let result = classifier.classify(&answers);
                assert!(result.confidence <= 100);
                assert!(matches!(
                    result.segment,
                    Segment::Beginner | Segment::Intermediate | Segment::Advanced | Segment::Elite
                ));
            }
        }
    }
}

#[test]
fn segment_boundaries_sit_at_the_configured_thresholds() {
    let classifier = classifier();

    // College (4*10) + 0-3 hours (0) + tracking (+5) = 45, the advanced floor.
    let mut answers = base_answers();
    answers.level = Some(ExperienceLevel::College);
    answers.training_hours = Some(TrainingHours::H0To3);
    answers.progress_tracking = Some(ProgressTracking::Clear);
    let (score, _) = classifier.score(&answers);
    assert_eq!(score, 45);
    assert_eq!(classifier.classify(&answers).segment, Segment::Advanced);

    // Serious hobbyist (2*10) = 20, the intermediate floor.
    let mut answers = base_answers();
    answers.level = Some(ExperienceLevel::SeriousHobbyist);
    let (score, _) = classifier.score(&answers);
    assert_eq!(score, 20);
    assert_eq!(classifier.classify(&answers).segment, Segment::Intermediate);
}

#[test]
fn weights_drive_the_score() {
    let config = ClassifierConfig {
        level_weight: 1,
        hours_weight: 0,
        ..ClassifierConfig::default()
    };
    let light = SegmentClassifier::with_config(config);

    let mut answers = base_answers();
    answers.level = Some(ExperienceLevel::Professional);
    answers.training_hours = Some(TrainingHours::H25Plus);

    let (score, _) = light.score(&answers);
    assert_eq!(score, 6);
    assert_eq!(light.classify(&answers).segment, Segment::Beginner);
}
