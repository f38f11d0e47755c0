// ABOUTME: Additive-scoring classifier mapping questionnaire answers to a skill segment
// ABOUTME: Weights and thresholds come from AssessmentConfig, not hard-coded constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Arete Training Intelligence

use crate::config::{AssessmentConfig, ClassifierConfig};
use crate::models::{
    AssessmentAnswers, CompetitionFrequency, ExperienceLevel, Goal, ProgressTracking, Segment,
    SegmentAssessment, TrainingHours,
};

/// Classifies a submission into one of four ordinal segments
///
/// The scoring is a weighted additive heuristic: level and training-hours
/// ordinals are multiplied by configured weights, and flat bonuses are
/// added for ambition signals (pro/compete goals, competition habit,
/// tracking sophistication). The total is thresholded into a segment.
///
/// Every lookup has a zero-point fallback, so classification is total
/// over the input domain: it never fails, and identical inputs always
/// produce identical output.
#[derive(Debug, Clone)]
pub struct SegmentClassifier {
    config: ClassifierConfig,
}

impl Default for SegmentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl SegmentClassifier {
    /// Create a classifier using the global configuration
    pub fn new() -> Self {
        Self {
            config: AssessmentConfig::global().classifier,
        }
    }

    /// Create a classifier with custom scoring configuration
    pub fn with_config(config: ClassifierConfig) -> Self {
        Self { config }
    }

    /// Classify a submission
    pub fn classify(&self, answers: &AssessmentAnswers) -> SegmentAssessment {
        let (score, reasoning) = self.score(answers);
        let (segment, confidence) = self.threshold(score);

        tracing::debug!(
            score,
            segment = %segment,
            confidence,
            "classified assessment submission"
        );

        SegmentAssessment {
            segment,
            confidence,
            reasoning,
        }
    }

    /// Raw additive score for a submission, with per-contribution reasoning
    pub fn score(&self, answers: &AssessmentAnswers) -> (u32, Vec<String>) {
        let mut score = 0;
        let mut reasoning = Vec::new();

        let level_ordinal = answers.level.map_or(0, ExperienceLevel::ordinal);
        score += level_ordinal * self.config.level_weight;
        reasoning.push(format!(
            "Level: {} ({}/{})",
            answers.level.map_or("not answered", ExperienceLevel::label),
            level_ordinal,
            ExperienceLevel::MAX_ORDINAL
        ));

        let hours_ordinal = answers.training_hours.map_or(0, TrainingHours::ordinal);
        score += hours_ordinal * self.config.hours_weight;
        reasoning.push(format!(
            "Training volume: {} ({}/{})",
            answers
                .training_hours
                .map_or("not answered", TrainingHours::label),
            hours_ordinal,
            TrainingHours::MAX_ORDINAL
        ));

        if answers.has_goal(Goal::Pro) {
            score += self.config.pro_goal_bonus;
            reasoning.push(format!(
                "Aspiring professional (+{})",
                self.config.pro_goal_bonus
            ));
        }
        if answers.has_goal(Goal::Compete) {
            score += self.config.compete_goal_bonus;
            reasoning.push(format!(
                "Competition focused (+{})",
                self.config.compete_goal_bonus
            ));
        }

        match answers.compete {
            Some(CompetitionFrequency::Regularly) => {
                score += self.config.regular_competition_bonus;
                reasoning.push(format!(
                    "Competes regularly (+{})",
                    self.config.regular_competition_bonus
                ));
            }
            Some(CompetitionFrequency::Occasionally) => {
                score += self.config.occasional_competition_bonus;
                reasoning.push(format!(
                    "Competes occasionally (+{})",
                    self.config.occasional_competition_bonus
                ));
            }
            _ => {}
        }

        if answers.progress_tracking == Some(ProgressTracking::Clear) {
            score += self.config.tracking_bonus;
            reasoning.push(format!("Advanced tracking (+{})", self.config.tracking_bonus));
        }

        (score, reasoning)
    }

    /// Map a score to a segment and its clamped confidence
    fn threshold(&self, score: u32) -> (Segment, u8) {
        let thresholds = &self.config.thresholds;
        let ceilings = &self.config.confidence_ceilings;

        if score >= thresholds.elite {
            (Segment::Elite, clamp_confidence(score, ceilings.elite))
        } else if score >= thresholds.advanced {
            (Segment::Advanced, clamp_confidence(score, ceilings.advanced))
        } else if score >= thresholds.intermediate {
            (
                Segment::Intermediate,
                clamp_confidence(score, ceilings.intermediate),
            )
        } else {
            // Low scores are strong beginner evidence, so confidence runs
            // inverse to the score here.
            let inverse = 100u32.saturating_sub(score);
            (Segment::Beginner, clamp_confidence(inverse, ceilings.beginner))
        }
    }
}

fn clamp_confidence(value: u32, ceiling: u8) -> u8 {
    u8::try_from(value.min(u32::from(ceiling))).unwrap_or(u8::MAX)
}
