// ABOUTME: Derived athlete profile values: segment, commitment, and personalization
// ABOUTME: Recomputed from answers on every call, never persisted
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Arete Training Intelligence

use super::assessment::{ExperienceLevel, Goal, Sport, TrainingHours};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordinal athlete skill segment
///
/// Derived by the segment classifier from questionnaire answers. Ordering
/// reflects increasing competitive sophistication.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Segment {
    /// Building a foundation
    Beginner,
    /// Training consistently with structure emerging
    Intermediate,
    /// Competitive, structured training
    Advanced,
    /// Top-percentile or professional
    Elite,
}

impl Segment {
    /// Lowercase label as used in rendered results
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
            Self::Elite => "elite",
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifier output: segment plus the evidence behind it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SegmentAssessment {
    /// Assigned segment
    pub segment: Segment,
    /// Confidence in the assignment, 0-100
    pub confidence: u8,
    /// Human-readable score contributions, in evaluation order
    pub reasoning: Vec<String>,
}

/// Bucketed weekly-hours commitment indicator
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CommitmentLevel {
    /// 0-3 hours per week
    Low,
    /// 4-12 hours per week
    Medium,
    /// 13-18 hours per week
    High,
    /// 19+ hours per week
    Extreme,
}

impl CommitmentLevel {
    /// Map a training-hours bucket to a commitment level
    ///
    /// Missing answers map to `Medium`, matching the questionnaire's
    /// treatment of every unanswered lookup as a neutral default.
    pub fn from_hours(hours: Option<TrainingHours>) -> Self {
        match hours {
            Some(TrainingHours::H0To3) => Self::Low,
            Some(TrainingHours::H4To7 | TrainingHours::H8To12) | None => Self::Medium,
            Some(TrainingHours::H13To18) => Self::High,
            Some(TrainingHours::H19To25 | TrainingHours::H25Plus) => Self::Extreme,
        }
    }

    /// Whether this commitment level warrants a dedicated recovery protocol
    pub fn needs_recovery_protocol(self) -> bool {
        matches!(self, Self::High | Self::Extreme)
    }
}

/// Voice used when presenting content to the athlete
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// Encouraging, effort-focused
    Motivational,
    /// Precise, mechanics-focused
    Technical,
    /// Mix of encouragement and detail
    Balanced,
    /// Explains the "why" behind every prescription
    Educational,
}

/// How much detail the presented content carries
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Depth {
    /// Short and plain
    Simple,
    /// Standard detail
    Moderate,
    /// Thorough breakdowns
    Detailed,
    /// Full technical depth with citations
    Expert,
}

/// Preferred content format
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ContentStyle {
    /// Diagram and video first
    Visual,
    /// Mixed media
    Mixed,
    /// Long-form text
    TextHeavy,
    /// Citations and study summaries
    ResearchFocused,
}

/// How time-pressured the athlete's goals are
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    /// No deadline pressure
    Low,
    /// Steady progress expected
    Medium,
    /// Competition or recruitment window approaching
    High,
}

/// Presentation settings derived from answers and segment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PersonalizationProfile {
    /// Voice of the content
    pub tone: Tone,
    /// Detail level of the content
    pub depth: Depth,
    /// Preferred content format
    pub content_style: ContentStyle,
    /// Time pressure behind the goals
    pub urgency: Urgency,
}

impl Default for PersonalizationProfile {
    fn default() -> Self {
        Self {
            tone: Tone::Balanced,
            depth: Depth::Moderate,
            content_style: ContentStyle::Mixed,
            urgency: Urgency::Medium,
        }
    }
}

/// Complete derived view of one athlete
///
/// Computed fresh from an [`super::AssessmentAnswers`] record each time;
/// holds no state beyond its inputs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AthleteProfile {
    /// Classified skill segment
    pub segment: Segment,
    /// Classifier confidence, 0-100
    pub confidence: u8,
    /// Sport from the submission
    pub sport: Sport,
    /// Self-reported level from the submission
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<ExperienceLevel>,
    /// Weekly-hours commitment bucket
    pub commitment_level: CommitmentLevel,
    /// Highest-priority goal, absent when no goals were selected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_focus: Option<Goal>,
    /// Remaining goals in descending priority order
    pub secondary_focuses: Vec<Goal>,
    /// Whether the comeback goal was selected
    pub needs_injury_support: bool,
    /// Presentation settings for rendered output
    pub personalization: PersonalizationProfile,
}
