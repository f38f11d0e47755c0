// ABOUTME: Assessment engine configuration replacing magic scoring numbers
// ABOUTME: Type-safe, environment-overridable weights, thresholds, and assembly rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Arete Training Intelligence

use crate::models::Goal;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Two related values are in the wrong order
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// A weight or priority table is inconsistent
    #[error("Invalid weights: {0}")]
    InvalidWeights(&'static str),

    /// A single value is outside its legal domain
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),

    /// An environment override could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Segment score thresholds
///
/// A submission's additive score is compared against these in descending
/// order; the first threshold met wins.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SegmentThresholds {
    /// Minimum score for the elite segment
    pub elite: u32,
    /// Minimum score for the advanced segment
    pub advanced: u32,
    /// Minimum score for the intermediate segment
    pub intermediate: u32,
}

impl Default for SegmentThresholds {
    fn default() -> Self {
        Self {
            elite: 70,
            advanced: 45,
            intermediate: 20,
        }
    }
}

/// Per-segment confidence clamp ceilings
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConfidenceCeilings {
    /// Ceiling for elite confidence
    pub elite: u8,
    /// Ceiling for advanced confidence
    pub advanced: u8,
    /// Ceiling for intermediate confidence
    pub intermediate: u8,
    /// Ceiling for beginner confidence
    pub beginner: u8,
}

impl Default for ConfidenceCeilings {
    fn default() -> Self {
        Self {
            elite: 100,
            advanced: 95,
            intermediate: 90,
            beginner: 85,
        }
    }
}

/// Segment classifier scoring weights
///
/// Level and hours ordinals are multiplied by their weights; everything
/// else is a flat bonus added when the answer matches.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClassifierConfig {
    /// Multiplier for the level ordinal (0-6)
    pub level_weight: u32,
    /// Multiplier for the training-hours ordinal (0-5)
    pub hours_weight: u32,
    /// Bonus when the pro goal is selected
    pub pro_goal_bonus: u32,
    /// Bonus when the compete goal is selected
    pub compete_goal_bonus: u32,
    /// Bonus for competing regularly
    pub regular_competition_bonus: u32,
    /// Bonus for competing occasionally
    pub occasional_competition_bonus: u32,
    /// Bonus for clear, metric-based progress tracking
    pub tracking_bonus: u32,
    /// Score thresholds separating the four segments
    pub thresholds: SegmentThresholds,
    /// Per-segment confidence clamp ceilings
    pub confidence_ceilings: ConfidenceCeilings,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            level_weight: 10,
            hours_weight: 8,
            pro_goal_bonus: 10,
            compete_goal_bonus: 5,
            regular_competition_bonus: 8,
            occasional_competition_bonus: 4,
            tracking_bonus: 5,
            thresholds: SegmentThresholds::default(),
            confidence_ceilings: ConfidenceCeilings::default(),
        }
    }
}

/// Numeric priority per goal, used to pick the primary focus
///
/// Higher wins. Distinct values keep the primary-focus selection stable
/// across submissions with identical goal sets.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct GoalPriorities {
    /// Turn pro / reach D1
    pub pro: u8,
    /// Return from injury
    pub comeback: u8,
    /// Compete at a higher level
    pub compete: u8,
    /// Master specific skills
    pub skills: u8,
    /// Overall fitness
    pub fitness: u8,
    /// Consistent habits
    pub consistency: u8,
    /// Enjoyment
    pub fun: u8,
}

impl GoalPriorities {
    /// Priority of one goal
    pub fn priority(&self, goal: Goal) -> u8 {
        match goal {
            Goal::Pro => self.pro,
            Goal::Comeback => self.comeback,
            Goal::Compete => self.compete,
            Goal::Skills => self.skills,
            Goal::Fitness => self.fitness,
            Goal::Consistency => self.consistency,
            Goal::Fun => self.fun,
        }
    }
}

impl Default for GoalPriorities {
    fn default() -> Self {
        Self {
            pro: 10,
            comeback: 9,
            compete: 8,
            skills: 7,
            fitness: 6,
            consistency: 5,
            fun: 4,
        }
    }
}

/// Recommendation assembly rules
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecommendationRules {
    /// Append the mental-training template when more than this many
    /// mental challenges were selected
    pub mental_challenge_trigger: usize,
    /// Hard cap on assembled recommendations
    pub max_recommendations: usize,
}

impl Default for RecommendationRules {
    fn default() -> Self {
        Self {
            mental_challenge_trigger: 2,
            max_recommendations: 3,
        }
    }
}

/// Complete engine configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AssessmentConfig {
    /// Segment classifier weights and thresholds
    pub classifier: ClassifierConfig,
    /// Goal priority table
    pub goal_priorities: GoalPriorities,
    /// Recommendation assembly rules
    pub recommendation: RecommendationRules,
}

/// Global configuration singleton
static ASSESSMENT_CONFIG: OnceLock<AssessmentConfig> = OnceLock::new();

impl AssessmentConfig {
    /// Get the global configuration instance
    ///
    /// Loads from the environment on first use; falls back to defaults
    /// with a warning if the environment carries invalid values.
    pub fn global() -> &'static Self {
        ASSESSMENT_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                tracing::warn!("Failed to load assessment config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults plus environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config = config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `ARETE_*` environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Ok(val) = std::env::var("ARETE_LEVEL_WEIGHT") {
            self.classifier.level_weight = val
                .parse()
                .map_err(|_| ConfigError::Parse("Invalid ARETE_LEVEL_WEIGHT".into()))?;
        }

        if let Ok(val) = std::env::var("ARETE_HOURS_WEIGHT") {
            self.classifier.hours_weight = val
                .parse()
                .map_err(|_| ConfigError::Parse("Invalid ARETE_HOURS_WEIGHT".into()))?;
        }

        if let Ok(val) = std::env::var("ARETE_ELITE_THRESHOLD") {
            self.classifier.thresholds.elite = val
                .parse()
                .map_err(|_| ConfigError::Parse("Invalid ARETE_ELITE_THRESHOLD".into()))?;
        }

        if let Ok(val) = std::env::var("ARETE_ADVANCED_THRESHOLD") {
            self.classifier.thresholds.advanced = val
                .parse()
                .map_err(|_| ConfigError::Parse("Invalid ARETE_ADVANCED_THRESHOLD".into()))?;
        }

        if let Ok(val) = std::env::var("ARETE_INTERMEDIATE_THRESHOLD") {
            self.classifier.thresholds.intermediate = val
                .parse()
                .map_err(|_| ConfigError::Parse("Invalid ARETE_INTERMEDIATE_THRESHOLD".into()))?;
        }

        if let Ok(val) = std::env::var("ARETE_MENTAL_CHALLENGE_TRIGGER") {
            self.recommendation.mental_challenge_trigger = val
                .parse()
                .map_err(|_| ConfigError::Parse("Invalid ARETE_MENTAL_CHALLENGE_TRIGGER".into()))?;
        }

        Ok(self)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let thresholds = &self.classifier.thresholds;
        if thresholds.intermediate >= thresholds.advanced {
            return Err(ConfigError::InvalidRange(
                "intermediate threshold must be < advanced threshold",
            ));
        }
        if thresholds.advanced >= thresholds.elite {
            return Err(ConfigError::InvalidRange(
                "advanced threshold must be < elite threshold",
            ));
        }

        let ceilings = &self.classifier.confidence_ceilings;
        if ceilings.elite > 100
            || ceilings.advanced > 100
            || ceilings.intermediate > 100
            || ceilings.beginner > 100
        {
            return Err(ConfigError::ValueOutOfRange(
                "confidence ceilings must be <= 100",
            ));
        }

        if self.classifier.level_weight == 0 && self.classifier.hours_weight == 0 {
            return Err(ConfigError::InvalidWeights(
                "level_weight and hours_weight cannot both be zero",
            ));
        }

        let p = &self.goal_priorities;
        let mut priorities = [
            p.pro,
            p.comeback,
            p.compete,
            p.skills,
            p.fitness,
            p.consistency,
            p.fun,
        ];
        priorities.sort_unstable();
        if priorities.windows(2).any(|pair| pair[0] == pair[1]) {
            return Err(ConfigError::InvalidWeights(
                "goal priorities must be distinct",
            ));
        }

        if self.recommendation.max_recommendations == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "max_recommendations must be >= 1",
            ));
        }

        Ok(())
    }

    /// Highest score the classifier can produce under this configuration
    pub fn max_possible_score(&self) -> u32 {
        let c = &self.classifier;
        c.level_weight * crate::models::ExperienceLevel::MAX_ORDINAL
            + c.hours_weight * crate::models::TrainingHours::MAX_ORDINAL
            + c.pro_goal_bonus
            + c.compete_goal_bonus
            + c.regular_competition_bonus
            + c.tracking_bonus
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(AssessmentConfig::default().validate().is_ok());
    }

    #[test]
    fn default_max_score_covers_elite_threshold() {
        let config = AssessmentConfig::default();
        // 6*10 + 5*8 + 10 + 5 + 8 + 5 = 128
        assert_eq!(config.max_possible_score(), 128);
        assert!(config.max_possible_score() > config.classifier.thresholds.elite);
    }

    #[test]
    fn non_ascending_thresholds_rejected() {
        let mut config = AssessmentConfig::default();
        config.classifier.thresholds.advanced = config.classifier.thresholds.elite;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange(_))
        ));
    }

    #[test]
    fn duplicate_goal_priorities_rejected() {
        let mut config = AssessmentConfig::default();
        config.goal_priorities.fun = config.goal_priorities.pro;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidWeights(_))
        ));
    }
}
