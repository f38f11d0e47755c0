// ABOUTME: Adaptive question flow adjustments derived from partial answers
// ABOUTME: Drives language simplification, added depth, and education emphasis mid-assessment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Arete Training Intelligence

use crate::models::{AssessmentAnswers, ConfusionFrequency, ExperienceLevel, ReadingHabits, TrainingHours};

/// How the remaining question flow should adapt to answers so far
///
/// Computed incrementally as answers arrive, so every check tolerates
/// unanswered fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlowAdjustments {
    /// Use plain language for the remaining questions
    pub simplify_language: bool,
    /// Add technical depth to the remaining questions
    pub add_depth: bool,
    /// Lean on educational framing; the athlete is often confused by advice
    pub emphasize_education: bool,
}

/// Derive flow adjustments from the answers collected so far
pub fn question_flow_adjustments(answers: &AssessmentAnswers) -> FlowAdjustments {
    let simplify_language = answers.level == Some(ExperienceLevel::JustStartingOut)
        || answers.training_hours == Some(TrainingHours::H0To3)
        || answers.reading_habits == Some(ReadingHabits::None);

    let add_depth = matches!(
        answers.level,
        Some(ExperienceLevel::College | ExperienceLevel::SemiPro | ExperienceLevel::Professional)
    ) || answers.reading_habits == Some(ReadingHabits::Constantly);

    let emphasize_education = matches!(
        answers.confusion_frequency,
        Some(ConfusionFrequency::Often | ConfusionFrequency::Always)
    );

    FlowAdjustments {
        simplify_language,
        add_depth,
        emphasize_education,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Sport;

    #[test]
    fn blank_answers_need_no_adjustment() {
        let adjustments = question_flow_adjustments(&AssessmentAnswers::new(Sport::Tennis));
        assert_eq!(adjustments, FlowAdjustments::default());
    }

    #[test]
    fn newcomers_get_simplified_language() {
        let mut a = AssessmentAnswers::new(Sport::Soccer);
        a.level = Some(ExperienceLevel::JustStartingOut);
        assert!(question_flow_adjustments(&a).simplify_language);
    }

    #[test]
    fn simplify_and_deepen_can_coexist() {
        // A college athlete who never reads training content.
        let mut a = AssessmentAnswers::new(Sport::Basketball);
        a.level = Some(ExperienceLevel::College);
        a.reading_habits = Some(ReadingHabits::None);
        let adjustments = question_flow_adjustments(&a);
        assert!(adjustments.simplify_language);
        assert!(adjustments.add_depth);
    }

    #[test]
    fn frequent_confusion_emphasizes_education() {
        let mut a = AssessmentAnswers::new(Sport::Tennis);
        a.confusion_frequency = Some(ConfusionFrequency::Often);
        assert!(question_flow_adjustments(&a).emphasize_education);
    }
}
