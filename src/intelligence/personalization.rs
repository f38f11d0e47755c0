// ABOUTME: Personalization profile selector built as prioritized first-match-wins rule tables
// ABOUTME: Derives tone, depth, content style, and urgency from answers plus segment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Arete Training Intelligence

use crate::models::{
    AssessmentAnswers, ConfusionFrequency, ContentStyle, Depth, ExperienceLevel, Goal,
    PersonalizationProfile, ReadingHabits, Segment, Tone, Urgency,
};

/// One entry in a prioritized rule table
///
/// Tables are evaluated top to bottom and the first matching rule wins,
/// which makes the precedence between overlapping conditions explicit
/// and testable instead of implicit in conditional ordering.
struct Rule<T> {
    /// Short label for tracing
    name: &'static str,
    /// Whether this rule applies to the submission
    applies: fn(&AssessmentAnswers, Segment) -> bool,
    /// Value selected when the rule applies
    value: T,
}

fn confusion_is_frequent(answers: &AssessmentAnswers, _: Segment) -> bool {
    matches!(
        answers.confusion_frequency,
        Some(ConfusionFrequency::Always | ConfusionFrequency::Often)
    )
}

fn reads_constantly(answers: &AssessmentAnswers, _: Segment) -> bool {
    answers.reading_habits == Some(ReadingHabits::Constantly)
}

fn reads_regularly(answers: &AssessmentAnswers, _: Segment) -> bool {
    answers.reading_habits == Some(ReadingHabits::Regularly)
}

fn never_reads(answers: &AssessmentAnswers, _: Segment) -> bool {
    answers.reading_habits == Some(ReadingHabits::None)
}

fn just_starting(answers: &AssessmentAnswers, _: Segment) -> bool {
    answers.level == Some(ExperienceLevel::JustStartingOut)
}

const TONE_RULES: &[Rule<Tone>] = &[
    Rule {
        name: "frequent confusion wants education",
        applies: confusion_is_frequent,
        value: Tone::Educational,
    },
    Rule {
        name: "heavy readers want technical voice",
        applies: reads_constantly,
        value: Tone::Technical,
    },
    Rule {
        name: "newcomers want encouragement",
        applies: just_starting,
        value: Tone::Motivational,
    },
];

const CONTENT_STYLE_RULES: &[Rule<ContentStyle>] = &[
    Rule {
        name: "non-readers want visuals",
        applies: never_reads,
        value: ContentStyle::Visual,
    },
    Rule {
        name: "heavy readers want research",
        applies: reads_constantly,
        value: ContentStyle::ResearchFocused,
    },
    Rule {
        name: "regular readers tolerate long form",
        applies: reads_regularly,
        value: ContentStyle::TextHeavy,
    },
];

const URGENCY_RULES: &[Rule<Urgency>] = &[
    Rule {
        name: "pro or competition goals press the clock",
        applies: |answers, _| answers.has_goal(Goal::Pro) || answers.has_goal(Goal::Compete),
        value: Urgency::High,
    },
    Rule {
        name: "injury comebacks matter but cannot be rushed",
        applies: |answers, _| answers.has_goal(Goal::Comeback),
        value: Urgency::Medium,
    },
    Rule {
        name: "enjoyment goals have no deadline",
        applies: |answers, _| answers.has_goal(Goal::Fun),
        value: Urgency::Low,
    },
];

fn first_match<T: Copy>(
    rules: &[Rule<T>],
    answers: &AssessmentAnswers,
    segment: Segment,
    default: T,
) -> T {
    for rule in rules {
        if (rule.applies)(answers, segment) {
            tracing::trace!(rule = rule.name, "personalization rule matched");
            return rule.value;
        }
    }
    default
}

/// Select presentation settings for a submission
///
/// `segment` is the classifier's output for the same submission; depth
/// follows it directly while the other three dimensions follow answer
/// fields. Total over the input domain.
pub fn select(answers: &AssessmentAnswers, segment: Segment) -> PersonalizationProfile {
    let depth_rules: [Rule<Depth>; 3] = [
        Rule {
            name: "elite athletes get full depth",
            applies: segment_rule(Segment::Elite),
            value: Depth::Expert,
        },
        Rule {
            name: "advanced athletes get detail",
            applies: segment_rule(Segment::Advanced),
            value: Depth::Detailed,
        },
        Rule {
            name: "beginners get plain language",
            applies: segment_rule(Segment::Beginner),
            value: Depth::Simple,
        },
    ];

    let defaults = PersonalizationProfile::default();
    PersonalizationProfile {
        tone: first_match(TONE_RULES, answers, segment, defaults.tone),
        depth: first_match(&depth_rules, answers, segment, defaults.depth),
        content_style: first_match(CONTENT_STYLE_RULES, answers, segment, defaults.content_style),
        urgency: first_match(URGENCY_RULES, answers, segment, defaults.urgency),
    }
}

fn segment_rule(expected: Segment) -> fn(&AssessmentAnswers, Segment) -> bool {
    match expected {
        Segment::Elite => |_, s| s == Segment::Elite,
        Segment::Advanced => |_, s| s == Segment::Advanced,
        Segment::Intermediate => |_, s| s == Segment::Intermediate,
        Segment::Beginner => |_, s| s == Segment::Beginner,
    }
}
