// ABOUTME: Library entry point for the Arete athlete assessment engine
// ABOUTME: Re-exports the assessment pipeline, configuration, and data model
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Arete Training Intelligence

#![deny(unsafe_code)]

//! # Arete Engine
//!
//! A rule-based athlete assessment engine. It turns a questionnaire
//! submission into a skill-segment classification, a personalization
//! profile, and a small set of research-backed training recommendations
//! with concrete exercises.
//!
//! The engine is synchronous and deterministic: identical answers
//! always produce identical output, and every evaluation function is
//! total over its input domain. Hosts (web funnels, email pipelines)
//! own IO; this crate owns the decisions.
//!
//! ## Pipeline
//!
//! - **Classification**: weighted additive scoring over answers into
//!   beginner / intermediate / advanced / elite, with per-contribution
//!   reasoning.
//! - **Personalization**: prioritized rule tables selecting tone,
//!   depth, content style, and urgency.
//! - **Assembly**: a primary plan keyed by the highest-priority goal,
//!   plus conditional mental and recovery plans, and exactly three
//!   exercises from the sport drill library.
//!
//! ## Example
//!
//! ```rust
//! use arete_engine::intelligence::AssessmentEngine;
//! use arete_engine::models::{AssessmentAnswers, Goal, Sport, TrainingHours};
//!
//! let mut answers = AssessmentAnswers::new(Sport::Tennis);
//! answers.goals = vec![Goal::Skills];
//! answers.training_hours = Some(TrainingHours::H4To7);
//!
//! let outcome = AssessmentEngine::new().evaluate(&answers);
//! assert!(!outcome.recommendations.is_empty());
//! assert_eq!(outcome.exercises.len(), 3);
//! ```

pub mod config;
pub mod intelligence;
pub mod logging;
pub mod models;

pub use config::{AssessmentConfig, ConfigError};
pub use intelligence::{AssessmentEngine, AssessmentOutcome};
pub use models::{AssessmentAnswers, AthleteProfile, Segment, TrainingRecommendation};
