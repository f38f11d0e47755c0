// ABOUTME: Data model module for questionnaire answers and derived athlete values
// ABOUTME: Re-exports assessment, profile, and recommendation types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Arete Training Intelligence

//! Core data structures for the assessment engine.
//!
//! Three families of types live here:
//! - [`assessment`]: the immutable questionnaire answer record and its
//!   answer enums, serde-compatible with the upstream form payload.
//! - [`profile`]: values derived deterministically from an answer record
//!   (segment, commitment, personalization). Never persisted.
//! - [`recommendation`]: the canned training recommendation content model.

pub mod assessment;
pub mod profile;
pub mod recommendation;

pub use assessment::{
    AssessmentAnswers, CompetitionFrequency, ConfusionFrequency, ExperienceLevel, Goal,
    ProgressTracking, ReadingHabits, Sport, TrainingHours, WillingnessToPay,
};
pub use profile::{
    AthleteProfile, CommitmentLevel, ContentStyle, Depth, PersonalizationProfile, Segment,
    SegmentAssessment, Tone, Urgency,
};
pub use recommendation::{Exercise, RecommendationCategory, TrainingRecommendation};
