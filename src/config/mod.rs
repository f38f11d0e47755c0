// ABOUTME: Configuration module for assessment scoring and assembly parameters
// ABOUTME: Re-exports the assessment configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Arete Training Intelligence

//! Named configuration for every tunable constant in the engine.
//!
//! The scoring weights and segment thresholds have no documented
//! sports-science derivation; they are product tuning knobs. Keeping them
//! in one validated structure makes them adjustable and testable
//! independently of the scoring control flow.

pub mod assessment;

pub use assessment::{
    AssessmentConfig, ClassifierConfig, ConfidenceCeilings, ConfigError, GoalPriorities,
    RecommendationRules, SegmentThresholds,
};
