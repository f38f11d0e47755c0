// ABOUTME: Assessment intelligence: classification, personalization, and plan assembly
// ABOUTME: AssessmentEngine is the single entry point tying the submodules together
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Arete Training Intelligence

//! Rule-based athlete intelligence.
//!
//! A questionnaire submission flows through three stages: the
//! [`SegmentClassifier`] scores it into a skill segment, the
//! personalization rules derive presentation settings, and the
//! [`RecommendationEngine`] assembles a training plan from the template
//! catalog and exercise library. [`AssessmentEngine`] runs the whole
//! pipeline.

pub mod adaptive_flow;
pub mod exercise_library;
pub mod frustration;
pub mod patterns;
pub mod personalization;
pub mod recommendation_engine;
pub mod segment_classifier;
pub mod sport_profiles;
pub mod templates;

pub use adaptive_flow::{question_flow_adjustments, FlowAdjustments};
pub use exercise_library::exercises_for_profile;
pub use frustration::{categorize_frustration, FrustrationAnalysis, FrustrationCategory};
pub use patterns::{identify_response_patterns, ResponsePattern};
pub use recommendation_engine::RecommendationEngine;
pub use segment_classifier::SegmentClassifier;
pub use sport_profiles::{profile_for, sport_context, SportContext, SportProfile};

use crate::config::AssessmentConfig;
use crate::models::{AssessmentAnswers, AthleteProfile, Exercise, TrainingRecommendation};
use serde::{Deserialize, Serialize};

/// Everything derived from one submission
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssessmentOutcome {
    /// Derived athlete profile
    pub profile: AthleteProfile,
    /// Assembled training recommendations, 1 to 3
    pub recommendations: Vec<TrainingRecommendation>,
    /// Exactly three exercises for the sport and primary goal
    pub exercises: Vec<Exercise>,
    /// Immediate action plan
    pub next_steps: Vec<String>,
    /// Expected horizon for initial results
    pub timeline: String,
}

/// Runs the full assessment pipeline for a submission
#[derive(Debug, Clone, Default)]
pub struct AssessmentEngine {
    engine: RecommendationEngine,
}

impl AssessmentEngine {
    /// Create an engine using the global configuration
    pub fn new() -> Self {
        Self {
            engine: RecommendationEngine::new(),
        }
    }

    /// Create an engine with custom configuration
    pub fn with_config(config: AssessmentConfig) -> Self {
        Self {
            engine: RecommendationEngine::with_config(config),
        }
    }

    /// Evaluate a submission end to end
    pub fn evaluate(&self, answers: &AssessmentAnswers) -> AssessmentOutcome {
        let profile = self.engine.build_profile(answers);
        let recommendations = self.engine.assemble(answers, &profile);
        let exercises = exercises_for_profile(&answers.sport, profile.primary_focus);

        AssessmentOutcome {
            profile,
            recommendations,
            exercises,
            next_steps: vec![
                "Start with primary recommendation".into(),
                "Track metrics weekly".into(),
                "Adjust based on progress".into(),
            ],
            timeline: "12-16 weeks for initial results".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Goal, Sport, TrainingHours};

    #[test]
    fn outcome_is_complete_for_a_minimal_submission() {
        let outcome = AssessmentEngine::with_config(AssessmentConfig::default())
            .evaluate(&AssessmentAnswers::new(Sport::Tennis));

        assert!(!outcome.recommendations.is_empty());
        assert_eq!(outcome.exercises.len(), 3);
        assert_eq!(outcome.next_steps.len(), 3);
        assert!(outcome.timeline.contains("12-16 weeks"));
    }

    #[test]
    fn exercises_follow_the_primary_goal() {
        let mut answers = AssessmentAnswers::new(Sport::Basketball);
        answers.goals = vec![Goal::Comeback];
        answers.training_hours = Some(TrainingHours::H4To7);

        let outcome =
            AssessmentEngine::with_config(AssessmentConfig::default()).evaluate(&answers);
        assert!(outcome.exercises[2].name.contains("Recovery System"));
    }
}
