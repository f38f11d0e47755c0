// ABOUTME: Hand-authored training recommendation templates keyed by goal and segment
// ABOUTME: Selected and lightly parameterized by the assembler, never computed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Arete Training Intelligence

use crate::models::{AthleteProfile, Exercise, RecommendationCategory, Segment, TrainingRecommendation};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

/// Technical skill development plan
///
/// Also serves as the foundation plan when the primary focus has no
/// dedicated template, so assembly always yields at least one
/// recommendation. Frequency and duration tighten for elite and
/// advanced athletes.
pub fn skill_mastery(profile: &AthleteProfile) -> TrainingRecommendation {
    let is_elite = matches!(profile.segment, Segment::Elite | Segment::Advanced);

    TrainingRecommendation {
        id: "skill_mastery".into(),
        category: RecommendationCategory::Technical,
        title: format!("{} Skill Mastery Protocol", profile.sport.display_name()),
        description: if is_elite {
            "Elite-level technical refinement through deliberate practice".into()
        } else {
            "Build technical foundation through systematic skill development".into()
        },
        rationale: "Deliberate practice with immediate feedback is the most effective way to \
                    develop expertise (Ericsson, 1993). Quality matters more than quantity."
            .into(),
        exercises: vec![
            Exercise {
                name: "Video-Guided Technical Breakdown".into(),
                description: "Record and review your technical execution with immediate feedback"
                    .into(),
                how_to: strings(&[
                    "Film from multiple angles",
                    "Compare to elite examples",
                    "Focus on one element at a time",
                    "Immediate correction",
                ]),
                duration: Some("15-20 minutes per session".into()),
                intensity: Some("Moderate (focus on quality)".into()),
                ..Exercise::default()
            },
            Exercise {
                name: "Slow-Motion Execution Drills".into(),
                description: "Practice movements at 50% speed to ingrain proper technique".into(),
                how_to: strings(&[
                    "Exaggerate correct form",
                    "Feel each phase of movement",
                    "Gradually increase speed only when perfect",
                ]),
                sets: Some("3-5 sets".into()),
                reps: Some("10-15 reps per set".into()),
                ..Exercise::default()
            },
            Exercise {
                name: "Progressive Complexity Training".into(),
                description: "Build from isolated drills to full game-speed execution".into(),
                how_to: strings(&[
                    "Start isolated (no defense)",
                    "Add constraints progressively",
                    "End with game-like scenarios",
                    "Maintain quality > speed",
                ]),
                duration: Some("20-30 minutes".into()),
                ..Exercise::default()
            },
        ],
        metrics: strings(&[
            "Technical execution score",
            "Consistency rate",
            "Success rate in game situations",
        ]),
        frequency: if is_elite { "5-6 days/week" } else { "3-4 days/week" }.into(),
        duration: if is_elite { "12-16 weeks" } else { "16-24 weeks" }.into(),
        progression_path: strings(&[
            "Isolated skill work",
            "Constrained practice",
            "Game-like situations",
            "Competitive application",
        ]),
        research_citations: strings(&[
            "Ericsson, K.A. (1993). The role of deliberate practice in expert performance.",
        ]),
    }
}

/// Graduated return-to-play plan for athletes coming back from injury
pub fn injury_recovery() -> TrainingRecommendation {
    TrainingRecommendation {
        id: "injury_recovery".into(),
        category: RecommendationCategory::Recovery,
        title: "Safe Return to Performance Protocol".into(),
        description: "Graduated return-to-play program with load management".into(),
        rationale: "Premature return is the #1 cause of re-injury (Kyritsis et al., 2016). \
                    Conservative approach with 20% volume reduction allows tissue adaptation."
            .into(),
        exercises: vec![
            Exercise {
                name: "Isometric Strength Holds".into(),
                description: "Build tissue tolerance without high-impact stress".into(),
                how_to: strings(&[
                    "Start at injured side strength",
                    "Progress when pain-free",
                    "Hold proper alignment",
                    "Breathe normally",
                ]),
                sets: Some("3-4 sets".into()),
                duration: Some("30-45 seconds per hold".into()),
                intensity: Some("Moderate (no pain)".into()),
                ..Exercise::default()
            },
            Exercise {
                name: "Single-Leg Balance Progressions".into(),
                description: "Restore neuromuscular control and proprioception".into(),
                how_to: strings(&[
                    "Eyes open, then eyes closed",
                    "Stable, then unstable surface",
                    "Add perturbations gradually",
                    "Quality over duration",
                ]),
                sets: Some("3 sets".into()),
                duration: Some("30-60 seconds each leg".into()),
                ..Exercise::default()
            },
            Exercise {
                name: "Progressive Load Training".into(),
                description: "Systematically increase training load for safe return".into(),
                how_to: strings(&[
                    "Week 1-2: Bodyweight only",
                    "Week 3-4: Light resistance",
                    "Week 5-6: Sport-specific movements",
                    "Week 7-8: Explosive work (if cleared)",
                ]),
                ..Exercise::default()
            },
        ],
        metrics: strings(&[
            "Pain levels",
            "Range of motion",
            "Strength ratios",
            "Psychological readiness",
        ]),
        frequency: "Daily monitoring, 3-5 training days/week".into(),
        duration: "8-12 weeks for safe return".into(),
        progression_path: strings(&[
            "Movement quality",
            "Load tolerance",
            "Intensity building",
            "Sport-specific",
            "Competition prep",
        ]),
        research_citations: strings(&[
            "Kyritsis, P. et al. (2016). Likelihood of ACL graft rupture.",
        ]),
    }
}

/// Periodized competition preparation plan
pub fn competition_prep() -> TrainingRecommendation {
    TrainingRecommendation {
        id: "competition_prep".into(),
        category: RecommendationCategory::Tactical,
        title: "Competition Performance Protocol".into(),
        description: "Periodization with peak performance timing".into(),
        rationale: "Block periodization shows superior results for competitive athletes \
                    (Issurin, 2010)."
            .into(),
        exercises: vec![
            Exercise {
                name: "Power Development (Olympic Lift Variations)".into(),
                description: "Explosive strength work for competitive power output".into(),
                how_to: strings(&[
                    "Full recovery between sets (2-3 min)",
                    "Explosive intent every rep",
                    "Perfect technique > heavy load",
                    "Rotate clean, snatch variations",
                ]),
                sets: Some("4-6 sets".into()),
                reps: Some("2-4 reps (max power)".into()),
                intensity: Some("High (85-95% 1RM)".into()),
                ..Exercise::default()
            },
            Exercise {
                name: "Competition Simulation Drills".into(),
                description: "Practice under game-like pressure and fatigue".into(),
                how_to: strings(&[
                    "Include pre-game routine",
                    "Simulate competition conditions",
                    "Practice clutch scenarios",
                    "Track performance metrics",
                ]),
                duration: Some("45-60 minutes".into()),
                intensity: Some("Match intensity".into()),
                ..Exercise::default()
            },
            Exercise {
                name: "Active Recovery Sessions".into(),
                description: "Strategic recovery between high-intensity days".into(),
                how_to: strings(&[
                    "Focus on mobility and blood flow",
                    "Never elevate heart rate significantly",
                    "Include breathing work",
                    "Foam rolling/stretching",
                ]),
                duration: Some("30-45 minutes".into()),
                intensity: Some("Very light (conversational pace)".into()),
                ..Exercise::default()
            },
        ],
        metrics: strings(&[
            "Competition results",
            "Performance consistency",
            "Clutch performance rating",
        ]),
        frequency: "5-6 days/week with strategic rest".into(),
        duration: "12-16 week training block".into(),
        progression_path: strings(&[
            "Base building",
            "Specific preparation",
            "Competition phase",
            "Taper",
            "Peak",
        ]),
        research_citations: strings(&[
            "Issurin, V.B. (2010). New horizons for training periodization.",
        ]),
    }
}

/// Long-horizon development plan for athletes targeting professional sport
pub fn pro_development() -> TrainingRecommendation {
    TrainingRecommendation {
        id: "pro_development".into(),
        category: RecommendationCategory::Tactical,
        title: "Professional Development Pathway".into(),
        description: "Comprehensive program for all aspects of elite performance".into(),
        rationale: "Path to professional sport requires excellence across all domains \
                    (Côté et al., 2007)."
            .into(),
        exercises: vec![
            Exercise {
                name: "Foundational Strength Complex".into(),
                description: "Build the strength base required for elite performance".into(),
                how_to: strings(&[
                    "Back Squat: 2x bodyweight target",
                    "Deadlift: 2.5x bodyweight target",
                    "Bench: 1.5x bodyweight target",
                    "Progress systematically (5lb/week)",
                ]),
                sets: Some("4-5 sets".into()),
                reps: Some("4-6 reps".into()),
                intensity: Some("Heavy (80-90% 1RM)".into()),
                ..Exercise::default()
            },
            Exercise {
                name: "Explosive Power Training".into(),
                description: "Develop rate of force development for competitive advantage".into(),
                how_to: strings(&[
                    "Box jumps (height progression)",
                    "Broad jumps (distance)",
                    "Depth jumps (reactive)",
                    "Olympic lift variations",
                ]),
                sets: Some("5-8 sets".into()),
                reps: Some("3-5 reps".into()),
                intensity: Some("Maximum effort".into()),
                ..Exercise::default()
            },
            Exercise {
                name: "Sport-Specific Energy System Work".into(),
                description: "Condition the exact energy systems used in competition".into(),
                how_to: strings(&[
                    "Analyze game demands first",
                    "Match work:rest ratios",
                    "Include decision-making under fatigue",
                    "Progressive overload",
                ]),
                duration: Some("Match competition demands".into()),
                ..Exercise::default()
            },
        ],
        metrics: strings(&[
            "Professional performance standards",
            "Competition results",
            "Recruitment interest",
        ]),
        frequency: "6 days/week with strategic recovery".into(),
        duration: "12-24 month development cycle".into(),
        progression_path: strings(&[
            "Foundation",
            "Intensive development",
            "Competition exposure",
            "Elite competition",
            "Professional opportunities",
        ]),
        research_citations: strings(&[
            "Côté, J. et al. (2007). Practice and play in development of sport expertise.",
        ]),
    }
}

/// Psychological skills plan added when many mental challenges are reported
pub fn mental_training() -> TrainingRecommendation {
    TrainingRecommendation {
        id: "mental_training".into(),
        category: RecommendationCategory::Mental,
        title: "Mental Performance Training".into(),
        description: "Develop psychological skills to enhance performance".into(),
        rationale: "Mental skills training improves performance by 10-15% on average \
                    (Weinberg & Gould, 2018)."
            .into(),
        exercises: vec![
            Exercise {
                name: "Pre-Performance Routine".into(),
                description: "Develop a consistent ritual to trigger peak state".into(),
                how_to: strings(&[
                    "Same sequence every time",
                    "Include physical and mental cues",
                    "Practice in training first",
                    "Triggers confidence and focus",
                ]),
                duration: Some("5-10 minutes before performance".into()),
                ..Exercise::default()
            },
            Exercise {
                name: "Mental Imagery Practice".into(),
                description: "Mentally rehearse successful execution in vivid detail".into(),
                how_to: strings(&[
                    "Use all senses (see, feel, hear)",
                    "Practice perfect execution",
                    "Include adversity scenarios",
                    "End with success",
                ]),
                duration: Some("10-15 minutes daily".into()),
                intensity: Some("Relaxed but focused".into()),
                ..Exercise::default()
            },
            Exercise {
                name: "Box Breathing for Focus".into(),
                description: "Breath control technique to manage arousal and enhance focus".into(),
                how_to: strings(&[
                    "Inhale 4 seconds",
                    "Hold 4 seconds",
                    "Exhale 4 seconds",
                    "Hold 4 seconds",
                    "Repeat 4-6 cycles",
                ]),
                duration: Some("2-5 minutes as needed".into()),
                ..Exercise::default()
            },
        ],
        metrics: strings(&[
            "Pre-competition anxiety",
            "Focus rating",
            "Confidence level",
            "Mental toughness score",
        ]),
        frequency: "Daily practice (10-20 min)".into(),
        duration: "8-12 weeks for skill development".into(),
        progression_path: strings(&["Awareness", "Skill building", "Application", "Integration"]),
        research_citations: strings(&[
            "Gardner, F.L. & Moore, Z.E. (2007). The MAC Approach.",
        ]),
    }
}

/// Recovery plan added for high and extreme training volumes
pub fn recovery_protocol() -> TrainingRecommendation {
    TrainingRecommendation {
        id: "recovery_protocol".into(),
        category: RecommendationCategory::Recovery,
        title: "Strategic Recovery System".into(),
        description: "Essential recovery practices to maximize adaptation".into(),
        rationale: "Recovery is where adaptation happens. Sleep is the #1 recovery tool \
                    (Mah et al., 2011)."
            .into(),
        exercises: vec![
            Exercise {
                name: "Sleep Optimization Protocol".into(),
                description: "Prioritize the #1 recovery tool for athletic performance".into(),
                how_to: strings(&[
                    "Consistent bed/wake time (even weekends)",
                    "Dark room (blackout curtains)",
                    "Cool temperature (65-68°F)",
                    "No screens 1 hour before bed",
                ]),
                duration: Some("8-10 hours per night".into()),
                ..Exercise::default()
            },
            Exercise {
                name: "Active Recovery Movement".into(),
                description: "Light movement and mobility work to enhance blood flow".into(),
                how_to: strings(&[
                    "Walking, easy cycling, or swimming",
                    "Dynamic stretching",
                    "Foam rolling tight areas",
                    "Focus on breathing",
                ]),
                duration: Some("20-30 minutes".into()),
                intensity: Some("Very light (conversational)".into()),
                ..Exercise::default()
            },
            Exercise {
                name: "Strategic Nutrition Timing".into(),
                description: "Optimize nutrient timing for recovery and adaptation".into(),
                how_to: strings(&[
                    "Protein within 2 hours post-training (20-40g)",
                    "Carbs post high-intensity (1-2g/kg bodyweight)",
                    "Hydration: clear urine throughout day",
                    "Anti-inflammatory foods (berries, fish, greens)",
                ]),
                ..Exercise::default()
            },
        ],
        metrics: strings(&[
            "Sleep quality",
            "Morning HRV",
            "Resting heart rate",
            "Subjective recovery",
        ]),
        frequency: "Daily practices".into(),
        duration: "Ongoing lifestyle integration".into(),
        progression_path: strings(&[
            "Establish sleep routine",
            "Nutrition optimization",
            "Active recovery",
            "Load monitoring",
        ]),
        research_citations: strings(&[
            "Mah, C.D. et al. (2011). Sleep extension improves athletic performance.",
        ]),
    }
}
