// ABOUTME: Builds the athlete profile and assembles training recommendations from templates
// ABOUTME: Selection rules are driven by goal priorities and assembly config, not hard-coded
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Arete Training Intelligence

use crate::config::AssessmentConfig;
use crate::intelligence::{personalization, templates, SegmentClassifier};
use crate::models::{
    AssessmentAnswers, AthleteProfile, CommitmentLevel, Goal, TrainingRecommendation,
};

/// Assembles a profile and recommendation set for one submission
///
/// Recommendations are selected from a fixed template catalog: one
/// primary plan keyed by the highest-priority goal, plus conditional
/// mental and recovery plans. There is always at least one and at most
/// `max_recommendations`.
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    config: AssessmentConfig,
    classifier: SegmentClassifier,
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RecommendationEngine {
    /// Create an engine using the global configuration
    pub fn new() -> Self {
        Self::with_config(AssessmentConfig::global().clone())
    }

    /// Create an engine with custom configuration
    pub fn with_config(config: AssessmentConfig) -> Self {
        let classifier = SegmentClassifier::with_config(config.classifier);
        Self { config, classifier }
    }

    /// Derive the full athlete profile for a submission
    pub fn build_profile(&self, answers: &AssessmentAnswers) -> AthleteProfile {
        let assessment = self.classifier.classify(answers);
        let personalization = personalization::select(answers, assessment.segment);

        let mut sorted_goals = answers.goals.clone();
        sorted_goals
            .sort_by_key(|goal| std::cmp::Reverse(self.config.goal_priorities.priority(*goal)));

        let mut goals = sorted_goals.into_iter();
        let primary_focus = goals.next();
        let secondary_focuses: Vec<Goal> = goals.collect();

        AthleteProfile {
            segment: assessment.segment,
            confidence: assessment.confidence,
            sport: answers.sport.clone(),
            level: answers.level,
            commitment_level: CommitmentLevel::from_hours(answers.training_hours),
            primary_focus,
            secondary_focuses,
            needs_injury_support: answers.has_goal(Goal::Comeback),
            personalization,
        }
    }

    /// Assemble 1 to `max_recommendations` training recommendations
    pub fn assemble(
        &self,
        answers: &AssessmentAnswers,
        profile: &AthleteProfile,
    ) -> Vec<TrainingRecommendation> {
        let mut recommendations = vec![self.primary_recommendation(profile)];

        if answers.mental_challenges.len() > self.config.recommendation.mental_challenge_trigger {
            recommendations.push(templates::mental_training());
        }

        if profile.commitment_level.needs_recovery_protocol() {
            recommendations.push(templates::recovery_protocol());
        }

        recommendations.truncate(self.config.recommendation.max_recommendations);

        tracing::info!(
            count = recommendations.len(),
            primary = %recommendations[0].id,
            segment = %profile.segment,
            "assembled training recommendations"
        );

        recommendations
    }

    /// Primary plan keyed by the highest-priority goal
    ///
    /// Goals without a dedicated plan (fitness, consistency, fun) and
    /// goal-less submissions fall back to the skill mastery foundation
    /// plan, so assembly never returns empty.
    fn primary_recommendation(&self, profile: &AthleteProfile) -> TrainingRecommendation {
        match profile.primary_focus {
            Some(Goal::Comeback) => templates::injury_recovery(),
            Some(Goal::Compete) => templates::competition_prep(),
            Some(Goal::Pro) => templates::pro_development(),
            Some(Goal::Skills | Goal::Fitness | Goal::Consistency | Goal::Fun) | None => {
                templates::skill_mastery(profile)
            }
        }
    }
}
