// ABOUTME: Keyword-based categorizer for free-text frustration answers
// ABOUTME: Maps open text onto research-backed frustration categories with confidence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Arete Training Intelligence

use serde::{Deserialize, Serialize};

/// Research-backed frustration categories
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FrustrationCategory {
    /// Athlete does not understand why they train the way they do
    LackOfUnderstanding,
    /// Athlete cannot see improvement
    NoVisibleProgress,
    /// Training feels repetitive
    BoredomMonotony,
    /// Athlete does not know how to recover
    UnclearRecovery,
    /// Athlete keeps getting hurt
    FrequentInjuries,
    /// No keyword family matched
    Other,
}

/// Categorization result for one free-text answer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FrustrationAnalysis {
    /// Best-matching category
    pub category: FrustrationCategory,
    /// Heuristic confidence in the match, 0.0 to 1.0
    pub confidence: f64,
    /// Keywords from the matched family that appear in the text
    pub keywords: Vec<String>,
}

struct KeywordFamily {
    category: FrustrationCategory,
    confidence: f64,
    keywords: &'static [&'static str],
}

/// Ordered by specificity; the first family with any keyword hit wins.
const FAMILIES: &[KeywordFamily] = &[
    KeywordFamily {
        category: FrustrationCategory::LackOfUnderstanding,
        confidence: 0.9,
        keywords: &["understand", "why", "purpose"],
    },
    KeywordFamily {
        category: FrustrationCategory::NoVisibleProgress,
        confidence: 0.85,
        keywords: &["progress", "improve", "better"],
    },
    KeywordFamily {
        category: FrustrationCategory::BoredomMonotony,
        confidence: 0.8,
        keywords: &["boring", "repetitive", "same"],
    },
    KeywordFamily {
        category: FrustrationCategory::UnclearRecovery,
        confidence: 0.85,
        keywords: &["recover", "rest", "tired"],
    },
    KeywordFamily {
        category: FrustrationCategory::FrequentInjuries,
        confidence: 0.9,
        keywords: &["injury", "hurt", "pain"],
    },
];

/// Categorize a free-text frustration answer
///
/// Case-insensitive substring matching against ordered keyword
/// families. Unmatched text falls through to `Other` at 0.5
/// confidence rather than failing.
pub fn categorize_frustration(text: &str) -> FrustrationAnalysis {
    let lowered = text.to_lowercase();

    for family in FAMILIES {
        let hits: Vec<String> = family
            .keywords
            .iter()
            .filter(|keyword| lowered.contains(**keyword))
            .map(ToString::to_string)
            .collect();
        if !hits.is_empty() {
            return FrustrationAnalysis {
                category: family.category,
                confidence: family.confidence,
                keywords: hits,
            };
        }
    }

    FrustrationAnalysis {
        category: FrustrationCategory::Other,
        confidence: 0.5,
        keywords: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn understanding_keywords_win_over_later_families() {
        // "why" and "progress" both appear; the earlier family wins.
        let analysis = categorize_frustration("I don't get why my progress stalled");
        assert_eq!(analysis.category, FrustrationCategory::LackOfUnderstanding);
        assert_eq!(analysis.keywords, vec!["why".to_string()]);
    }

    #[test]
    fn injury_language_is_recognized() {
        let analysis = categorize_frustration("My knee HURTS every time I sprint");
        assert_eq!(analysis.category, FrustrationCategory::FrequentInjuries);
        assert!((analysis.confidence - 0.9).abs() < f64::EPSILON);
    }

    #[test]
    fn unmatched_text_falls_through_to_other() {
        let analysis = categorize_frustration("my coach moved away");
        assert_eq!(analysis.category, FrustrationCategory::Other);
        assert!(analysis.keywords.is_empty());
        assert!((analysis.confidence - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn boredom_collects_every_matching_keyword() {
        let analysis = categorize_frustration("It's boring, the same drills, so repetitive");
        assert_eq!(analysis.category, FrustrationCategory::BoredomMonotony);
        assert_eq!(analysis.keywords.len(), 3);
    }
}
