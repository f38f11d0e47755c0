// ABOUTME: Tests that the answer record round-trips the original form payload strings
// ABOUTME: Deserializes a realistic submission and checks serialized outcome labels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Arete Training Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use arete_engine::config::AssessmentConfig;
use arete_engine::intelligence::AssessmentEngine;
use arete_engine::models::{
    AssessmentAnswers, CompetitionFrequency, ConfusionFrequency, ExperienceLevel, Goal,
    ProgressTracking, ReadingHabits, Sport, TrainingHours, WillingnessToPay,
};

fn sample_payload() -> serde_json::Value {
    serde_json::json!({
        "id": "0a51bd55-9f0b-4a3e-8f19-3c2cfbcdd7a1",
        "submitted_at": "2025-03-14T18:25:43Z",
        "sport": "tennis",
        "level": "Serious hobbyist",
        "training_hours": "8-12 hours",
        "goals": ["compete", "skills"],
        "progress_tracking": "clear",
        "frustrations": ["plateau"],
        "confusion_frequency": "sometimes",
        "tracking_methods": ["app"],
        "compete": "occasionally",
        "mental_challenges": ["pressure"],
        "mental_strategies": ["routine"],
        "advice_sources": ["coach", "youtube"],
        "reading_habits": "regularly",
        "willingness_to_pay": "10-25"
    })
}

#[test]
fn form_payload_deserializes_with_original_strings() {
    let answers: AssessmentAnswers = serde_json::from_value(sample_payload()).unwrap();

    assert_eq!(answers.sport, Sport::Tennis);
    assert_eq!(answers.level, Some(ExperienceLevel::SeriousHobbyist));
    assert_eq!(answers.training_hours, Some(TrainingHours::H8To12));
    assert_eq!(answers.goals, vec![Goal::Compete, Goal::Skills]);
    assert_eq!(answers.progress_tracking, Some(ProgressTracking::Clear));
    assert_eq!(answers.confusion_frequency, Some(ConfusionFrequency::Sometimes));
    assert_eq!(answers.compete, Some(CompetitionFrequency::Occasionally));
    assert_eq!(answers.reading_habits, Some(ReadingHabits::Regularly));
    assert_eq!(answers.willingness_to_pay, Some(WillingnessToPay::TenToTwentyFive));
}

#[test]
fn answers_round_trip_through_json() {
    let answers: AssessmentAnswers = serde_json::from_value(sample_payload()).unwrap();
    let encoded = serde_json::to_string(&answers).unwrap();
    let decoded: AssessmentAnswers = serde_json::from_str(&encoded).unwrap();
    assert_eq!(answers, decoded);

    // Wire strings survive serialization unchanged.
    let value: serde_json::Value = serde_json::from_str(&encoded).unwrap();
    assert_eq!(value["training_hours"], "8-12 hours");
    assert_eq!(value["level"], "Serious hobbyist");
    assert_eq!(value["compete"], "occasionally");
    assert_eq!(value["willingness_to_pay"], "10-25");
}

#[test]
fn serialized_outcome_uses_lowercase_labels() {
    let answers: AssessmentAnswers = serde_json::from_value(sample_payload()).unwrap();
    let outcome = AssessmentEngine::with_config(AssessmentConfig::default()).evaluate(&answers);

    let value = serde_json::to_value(&outcome).unwrap();
    assert_eq!(value["profile"]["segment"], "advanced");
    assert_eq!(value["recommendations"][0]["category"], "tactical");
    assert_eq!(value["profile"]["personalization"]["content_style"], "text-heavy");
}
