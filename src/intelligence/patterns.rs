// ABOUTME: Aggregates submitted assessments into recurring response patterns
// ABOUTME: Frequency counts keyed by sport, level, and goal combination
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Arete Training Intelligence

use crate::models::{AssessmentAnswers, ExperienceLevel, Goal};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One recurring combination of sport, level, and goals
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResponsePattern {
    /// Pattern key: `sport_level_goal,goal`
    pub pattern: String,
    /// How many submissions share this combination
    pub frequency: usize,
}

fn pattern_key(answers: &AssessmentAnswers) -> String {
    let goals: Vec<&str> = answers.goals.iter().copied().map(Goal::as_str).collect();
    format!(
        "{}_{}_{}",
        answers.sport,
        answers.level.map_or("unanswered", ExperienceLevel::label),
        goals.join(",")
    )
}

/// Count recurring sport/level/goal combinations across submissions
///
/// Sorted by descending frequency, then by key, so equal-frequency
/// patterns come out in a stable order.
pub fn identify_response_patterns(responses: &[AssessmentAnswers]) -> Vec<ResponsePattern> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for response in responses {
        *counts.entry(pattern_key(response)).or_insert(0) += 1;
    }

    let mut patterns: Vec<ResponsePattern> = counts
        .into_iter()
        .map(|(pattern, frequency)| ResponsePattern { pattern, frequency })
        .collect();
    patterns.sort_by(|a, b| {
        b.frequency
            .cmp(&a.frequency)
            .then_with(|| a.pattern.cmp(&b.pattern))
    });
    patterns
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Sport;

    fn submission(sport: Sport, level: ExperienceLevel, goals: Vec<Goal>) -> AssessmentAnswers {
        let mut a = AssessmentAnswers::new(sport);
        a.level = Some(level);
        a.goals = goals;
        a
    }

    #[test]
    fn identical_combinations_collapse_into_one_pattern() {
        let responses = vec![
            submission(Sport::Tennis, ExperienceLevel::College, vec![Goal::Compete]),
            submission(Sport::Tennis, ExperienceLevel::College, vec![Goal::Compete]),
            submission(Sport::Soccer, ExperienceLevel::Recreational, vec![Goal::Fun]),
        ];

        let patterns = identify_response_patterns(&responses);
        assert_eq!(patterns.len(), 2);
        assert_eq!(patterns[0].frequency, 2);
        assert!(patterns[0].pattern.starts_with("Tennis_College"));
    }

    #[test]
    fn empty_input_yields_no_patterns() {
        assert!(identify_response_patterns(&[]).is_empty());
    }

    #[test]
    fn goal_order_distinguishes_patterns() {
        let responses = vec![
            submission(Sport::Basketball, ExperienceLevel::HighSchool, vec![Goal::Pro, Goal::Skills]),
            submission(Sport::Basketball, ExperienceLevel::HighSchool, vec![Goal::Skills, Goal::Pro]),
        ];
        assert_eq!(identify_response_patterns(&responses).len(), 2);
    }
}
