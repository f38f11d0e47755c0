// ABOUTME: Canned training recommendation and exercise content model
// ABOUTME: Read-only template records selected, not computed, by the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Arete Training Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Domain a recommendation targets
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationCategory {
    /// Skill and technique work
    Technical,
    /// Game strategy and competition preparation
    Tactical,
    /// Strength, conditioning, and movement
    Physical,
    /// Psychological skills
    Mental,
    /// Rest, sleep, and load management
    Recovery,
}

impl RecommendationCategory {
    /// Lowercase label as serialized
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Technical => "technical",
            Self::Tactical => "tactical",
            Self::Physical => "physical",
            Self::Mental => "mental",
            Self::Recovery => "recovery",
        }
    }
}

impl fmt::Display for RecommendationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One drill, workout, or protocol inside a recommendation
///
/// Prescription fields are optional because templates vary: a shooting
/// drill carries sets and reps, a sleep protocol carries only a duration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Exercise {
    /// Exercise name
    pub name: String,
    /// What the exercise is and why it is here
    pub description: String,
    /// Step-by-step execution points
    pub how_to: Vec<String>,
    /// Set prescription, e.g. "3-5 sets"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sets: Option<String>,
    /// Rep prescription, e.g. "10-15 reps per set"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reps: Option<String>,
    /// Time prescription, e.g. "20-30 minutes"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    /// Intensity guidance, e.g. "Moderate (focus on quality)"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intensity: Option<String>,
    /// How often to perform it, e.g. "3-4x/week"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,
    /// Who uses this and why it works, when documented
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elite_insight: Option<String>,
    /// What to measure while doing it
    pub metrics: Vec<String>,
}

/// A selected training recommendation
///
/// Static, hand-authored content keyed by goal, segment, and sport. The
/// engine selects and lightly parameterizes these records; it never
/// computes their content.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrainingRecommendation {
    /// Stable template identifier, e.g. "skill_mastery"
    pub id: String,
    /// Targeted domain
    pub category: RecommendationCategory,
    /// Display title
    pub title: String,
    /// One-line summary
    pub description: String,
    /// The research-backed reasoning behind the plan
    pub rationale: String,
    /// Prescribed exercises
    pub exercises: Vec<Exercise>,
    /// Success metrics to track
    pub metrics: Vec<String>,
    /// Weekly cadence, e.g. "3-4 days/week"
    pub frequency: String,
    /// Expected program length, e.g. "12-16 weeks"
    pub duration: String,
    /// Stages from here to the goal
    pub progression_path: Vec<String>,
    /// Citations supporting the rationale
    pub research_citations: Vec<String>,
}
