// ABOUTME: Questionnaire answer record and answer enumerations
// ABOUTME: Serde-compatible with the upstream assessment form payload strings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Arete Training Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Sport selected on the questionnaire
///
/// Covers the sports offered by the assessment form. The `Other` variant
/// carries the free-text label entered by the athlete so downstream
/// lookups can fall back gracefully instead of failing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Sport {
    /// Soccer / association football
    Soccer,
    /// Basketball
    Basketball,
    /// Tennis
    Tennis,
    /// American football
    Football,
    /// Baseball
    Baseball,
    /// Track and field
    Track,
    /// Swimming
    Swimming,
    /// Golf
    Golf,
    /// Volleyball
    Volleyball,
    /// Water polo
    Waterpolo,
    /// General fitness training
    Fitness,
    /// Barbell / strength training
    WeightTraining,
    /// Sport not covered by the standard catalog
    Other(String),
}

impl Sport {
    /// Parse a form value leniently, falling back to `Other`
    ///
    /// Normalizes case and whitespace the way the original form values
    /// are normalized, and accepts the common aliases the form produced
    /// over time ("weights", "strength_training", "general_fitness").
    pub fn from_form_value(value: &str) -> Self {
        let normalized = value.trim().to_lowercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "soccer" => Self::Soccer,
            "basketball" => Self::Basketball,
            "tennis" => Self::Tennis,
            "football" => Self::Football,
            "baseball" => Self::Baseball,
            "track" | "track_&_field" | "track_and_field" => Self::Track,
            "swimming" => Self::Swimming,
            "golf" => Self::Golf,
            "volleyball" => Self::Volleyball,
            "waterpolo" | "water_polo" => Self::Waterpolo,
            "fitness" | "general_fitness" => Self::Fitness,
            "weight_training" | "weights" | "strength_training" | "weightlifting" => {
                Self::WeightTraining
            }
            _ => Self::Other(value.trim().to_owned()),
        }
    }

    /// Display name used in recommendation titles
    pub fn display_name(&self) -> &str {
        match self {
            Self::Soccer => "Soccer",
            Self::Basketball => "Basketball",
            Self::Tennis => "Tennis",
            Self::Football => "Football",
            Self::Baseball => "Baseball",
            Self::Track => "Track & Field",
            Self::Swimming => "Swimming",
            Self::Golf => "Golf",
            Self::Volleyball => "Volleyball",
            Self::Waterpolo => "Water Polo",
            Self::Fitness => "Fitness",
            Self::WeightTraining => "Weight Training",
            Self::Other(label) => {
                if label.is_empty() {
                    "Your Sport"
                } else {
                    label
                }
            }
        }
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Self-reported competitive level
///
/// Ordinal: later variants always score at least as high as earlier ones
/// in the segment classifier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ExperienceLevel {
    /// Brand new to the sport
    #[serde(rename = "Just starting out")]
    JustStartingOut,
    /// Plays casually without structured training
    #[serde(rename = "Recreational")]
    Recreational,
    /// Trains with intent outside any formal program
    #[serde(rename = "Serious hobbyist")]
    SeriousHobbyist,
    /// High school program athlete
    #[serde(rename = "High School")]
    HighSchool,
    /// College program athlete
    #[serde(rename = "College")]
    College,
    /// Semi-professional
    #[serde(rename = "Semi-Pro")]
    SemiPro,
    /// Professional
    #[serde(rename = "Professional")]
    Professional,
}

impl ExperienceLevel {
    /// Ordinal position used by the classifier (0 = just starting, 6 = professional)
    pub fn ordinal(self) -> u32 {
        match self {
            Self::JustStartingOut => 0,
            Self::Recreational => 1,
            Self::SeriousHobbyist => 2,
            Self::HighSchool => 3,
            Self::College => 4,
            Self::SemiPro => 5,
            Self::Professional => 6,
        }
    }

    /// Highest ordinal across all levels
    pub const MAX_ORDINAL: u32 = 6;

    /// Label exactly as shown on the questionnaire
    pub fn label(self) -> &'static str {
        match self {
            Self::JustStartingOut => "Just starting out",
            Self::Recreational => "Recreational",
            Self::SeriousHobbyist => "Serious hobbyist",
            Self::HighSchool => "High School",
            Self::College => "College",
            Self::SemiPro => "Semi-Pro",
            Self::Professional => "Professional",
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Weekly training volume bucket
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TrainingHours {
    /// 0-3 hours per week
    #[serde(rename = "0-3 hours")]
    H0To3,
    /// 4-7 hours per week
    #[serde(rename = "4-7 hours")]
    H4To7,
    /// 8-12 hours per week
    #[serde(rename = "8-12 hours")]
    H8To12,
    /// 13-18 hours per week
    #[serde(rename = "13-18 hours")]
    H13To18,
    /// 19-25 hours per week
    #[serde(rename = "19-25 hours")]
    H19To25,
    /// More than 25 hours per week
    #[serde(rename = "25+ hours")]
    H25Plus,
}

impl TrainingHours {
    /// Ordinal position used by the classifier (0 = lowest bucket, 5 = highest)
    pub fn ordinal(self) -> u32 {
        match self {
            Self::H0To3 => 0,
            Self::H4To7 => 1,
            Self::H8To12 => 2,
            Self::H13To18 => 3,
            Self::H19To25 => 4,
            Self::H25Plus => 5,
        }
    }

    /// Highest ordinal across all buckets
    pub const MAX_ORDINAL: u32 = 5;

    /// Bucket label exactly as shown on the questionnaire
    pub fn label(self) -> &'static str {
        match self {
            Self::H0To3 => "0-3 hours",
            Self::H4To7 => "4-7 hours",
            Self::H8To12 => "8-12 hours",
            Self::H13To18 => "13-18 hours",
            Self::H19To25 => "19-25 hours",
            Self::H25Plus => "25+ hours",
        }
    }
}

impl fmt::Display for TrainingHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Training goal selected on the questionnaire
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    /// Compete at a higher level
    Compete,
    /// Improve overall fitness and health
    Fitness,
    /// Master specific techniques or skills
    Skills,
    /// Build consistent training habits
    Consistency,
    /// Return from injury stronger
    Comeback,
    /// Turn professional / reach D1
    Pro,
    /// Enjoy the sport more
    Fun,
}

impl Goal {
    /// Form value for this goal
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Compete => "compete",
            Self::Fitness => "fitness",
            Self::Skills => "skills",
            Self::Consistency => "consistency",
            Self::Comeback => "comeback",
            Self::Pro => "pro",
            Self::Fun => "fun",
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How often the athlete competes in organized events
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum CompetitionFrequency {
    /// Competes regularly
    Regularly,
    /// Competes occasionally
    Occasionally,
    /// Does not compete yet but would like to
    WantTo,
    /// Plays casually only
    Casual,
}

/// Self-reported clarity of progress tracking
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ProgressTracking {
    /// Tracks with clear, specific metrics
    Clear,
    /// Tracks loosely by feel or memory
    Vague,
    /// Does not track progress
    None,
}

/// How often the athlete wonders why a drill or workout is prescribed
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ConfusionFrequency {
    /// Never questions the purpose of training
    Never,
    /// Rarely
    Rarely,
    /// Sometimes
    Sometimes,
    /// Often
    Often,
    /// All the time
    Always,
}

/// How much training-related reading the athlete does
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ReadingHabits {
    /// Does not read about training
    None,
    /// Reads occasionally
    Occasionally,
    /// Reads regularly
    Regularly,
    /// Reads constantly, seeks out research
    Constantly,
}

/// Monthly budget the athlete would invest in coaching
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum WillingnessToPay {
    /// Free tier only
    #[serde(rename = "free")]
    Free,
    /// $5-10 per month
    #[serde(rename = "5-10")]
    FiveToTen,
    /// $10-25 per month
    #[serde(rename = "10-25")]
    TenToTwentyFive,
    /// $25+ per month
    #[serde(rename = "25+")]
    TwentyFivePlus,
}

/// One athlete's complete questionnaire submission
///
/// Produced once per session by the upstream form (which owns required-field
/// validation and array-length caps) and never mutated afterwards. Every
/// derived value in this crate is a pure function of one of these records.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssessmentAnswers {
    /// Submission identifier
    pub id: Uuid,
    /// Submission timestamp
    pub submitted_at: DateTime<Utc>,
    /// Selected sport
    pub sport: Sport,
    /// Self-reported competitive level, when answered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<ExperienceLevel>,
    /// Weekly training volume bucket, when answered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_hours: Option<TrainingHours>,
    /// Selected training goals
    pub goals: Vec<Goal>,
    /// Progress tracking clarity, when answered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress_tracking: Option<ProgressTracking>,
    /// Selected frustration labels
    pub frustrations: Vec<String>,
    /// Free-text frustration, when entered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frustration_other: Option<String>,
    /// How often training purpose feels unclear, when answered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confusion_frequency: Option<ConfusionFrequency>,
    /// Progress tracking methods in use
    pub tracking_methods: Vec<String>,
    /// Competition habit, when answered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compete: Option<CompetitionFrequency>,
    /// Selected mental challenge labels
    pub mental_challenges: Vec<String>,
    /// Coping strategies currently in use
    pub mental_strategies: Vec<String>,
    /// Where the athlete currently gets training advice
    pub advice_sources: Vec<String>,
    /// Reading habit bucket, when answered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reading_habits: Option<ReadingHabits>,
    /// Monthly coaching budget, when answered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub willingness_to_pay: Option<WillingnessToPay>,
    /// Injury status, present only when the comeback goal was selected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub injury_status: Option<String>,
    /// Injury details, present only when the comeback goal was selected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub injury_details: Option<String>,
}

impl AssessmentAnswers {
    /// Empty submission for the given sport
    ///
    /// Every optional answer is absent and every set is empty; useful as a
    /// baseline in tests and for partially completed sessions.
    pub fn new(sport: Sport) -> Self {
        Self {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            sport,
            level: None,
            training_hours: None,
            goals: Vec::new(),
            progress_tracking: None,
            frustrations: Vec::new(),
            frustration_other: None,
            confusion_frequency: None,
            tracking_methods: Vec::new(),
            compete: None,
            mental_challenges: Vec::new(),
            mental_strategies: Vec::new(),
            advice_sources: Vec::new(),
            reading_habits: None,
            willingness_to_pay: None,
            injury_status: None,
            injury_details: None,
        }
    }

    /// Whether the athlete selected the given goal
    pub fn has_goal(&self, goal: Goal) -> bool {
        self.goals.contains(&goal)
    }
}

impl Default for AssessmentAnswers {
    fn default() -> Self {
        Self::new(Sport::Fitness)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sport_form_parsing_is_lenient() {
        assert_eq!(Sport::from_form_value("tennis"), Sport::Tennis);
        assert_eq!(Sport::from_form_value("Water Polo"), Sport::Waterpolo);
        assert_eq!(
            Sport::from_form_value("strength_training"),
            Sport::WeightTraining
        );
        assert_eq!(
            Sport::from_form_value("ultimate frisbee"),
            Sport::Other("ultimate frisbee".into())
        );
    }

    #[test]
    fn level_ordinals_are_ascending() {
        let levels = [
            ExperienceLevel::JustStartingOut,
            ExperienceLevel::Recreational,
            ExperienceLevel::SeriousHobbyist,
            ExperienceLevel::HighSchool,
            ExperienceLevel::College,
            ExperienceLevel::SemiPro,
            ExperienceLevel::Professional,
        ];
        for pair in levels.windows(2) {
            assert!(pair[0].ordinal() < pair[1].ordinal());
        }
        assert_eq!(
            ExperienceLevel::Professional.ordinal(),
            ExperienceLevel::MAX_ORDINAL
        );
    }

    #[test]
    fn answer_enums_round_trip_form_strings() {
        let json = serde_json::to_string(&TrainingHours::H25Plus).unwrap();
        assert_eq!(json, "\"25+ hours\"");
        let back: TrainingHours = serde_json::from_str(&json).unwrap();
        assert_eq!(back, TrainingHours::H25Plus);

        let json = serde_json::to_string(&ExperienceLevel::JustStartingOut).unwrap();
        assert_eq!(json, "\"Just starting out\"");

        let json = serde_json::to_string(&CompetitionFrequency::WantTo).unwrap();
        assert_eq!(json, "\"want-to\"");

        let json = serde_json::to_string(&WillingnessToPay::TwentyFivePlus).unwrap();
        assert_eq!(json, "\"25+\"");
    }
}
