// ABOUTME: Static per-sport reference tables with metrics, markers, and research basis
// ABOUTME: Sports without a table fall into research mode with generic focus areas
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Arete Training Intelligence

use crate::models::{Segment, Sport};

/// Reference profile for one supported sport
///
/// Static curated content: ranking systems athletes recognize, metrics
/// worth tracking, what each segment looks like in this sport, and the
/// research the programming leans on.
#[derive(Debug, Clone, Copy)]
pub struct SportProfile {
    /// Display name
    pub name: &'static str,
    /// Ranking systems athletes in this sport use
    pub ranking_systems: &'static [&'static str],
    /// Metrics worth tracking
    pub key_metrics: &'static [&'static str],
    /// What each segment looks like, beginner through elite
    pub elite_markers: SegmentMarkers,
    /// Focus areas by training domain
    pub focus_areas: FocusAreas,
    /// Research the sport's programming is grounded in
    pub research_basis: &'static [&'static str],
    /// Extra elite-level context, where curated
    pub elite_insight: Option<&'static str>,
}

/// Per-segment skill markers
#[derive(Debug, Clone, Copy)]
pub struct SegmentMarkers {
    pub beginner: &'static str,
    pub intermediate: &'static str,
    pub advanced: &'static str,
    pub elite: &'static str,
}

impl SegmentMarkers {
    /// Marker for one segment
    pub fn for_segment(&self, segment: Segment) -> &'static str {
        match segment {
            Segment::Beginner => self.beginner,
            Segment::Intermediate => self.intermediate,
            Segment::Advanced => self.advanced,
            Segment::Elite => self.elite,
        }
    }
}

/// Focus areas split by training domain
#[derive(Debug, Clone, Copy)]
pub struct FocusAreas {
    pub technical: &'static [&'static str],
    pub tactical: &'static [&'static str],
    pub physical: &'static [&'static str],
    pub mental: &'static [&'static str],
}

impl FocusAreas {
    /// All focus areas flattened in domain order
    pub fn all(&self) -> Vec<&'static str> {
        [self.technical, self.tactical, self.physical, self.mental].concat()
    }
}

static TENNIS: SportProfile = SportProfile {
    name: "Tennis",
    ranking_systems: &["UTR", "ATP/WTA", "ITF", "USTA"],
    key_metrics: &[
        "First serve %",
        "Break point conversion",
        "Unforced errors",
        "Rally tolerance",
    ],
    elite_markers: SegmentMarkers {
        beginner: "UTR 1-4",
        intermediate: "UTR 5-8",
        advanced: "UTR 9-12",
        elite: "UTR 13+ / Professional",
    },
    focus_areas: FocusAreas {
        technical: &[
            "Serve mechanics",
            "Groundstroke consistency",
            "Net play",
            "Movement patterns",
        ],
        tactical: &[
            "Point construction",
            "Pattern recognition",
            "Match strategy",
            "Opponent analysis",
        ],
        physical: &["Court speed", "Lateral movement", "Explosive power", "Endurance"],
        mental: &[
            "Between-point routine",
            "Pressure management",
            "Momentum shifts",
            "Match temperament",
        ],
    },
    research_basis: &[
        "Kovacs - Tennis physiology and biomechanics",
        "Fernandez-Fernandez - Training periodization in tennis",
        "Reid - Skill acquisition in tennis",
    ],
    elite_insight: None,
};

static BASKETBALL: SportProfile = SportProfile {
    name: "Basketball",
    ranking_systems: &["NBA/WNBA", "NCAA D1/D2/D3", "FIBA", "AAU"],
    key_metrics: &["FG%", "TS%", "Assist/TO ratio", "Defensive rating", "PER"],
    elite_markers: SegmentMarkers {
        beginner: "Recreational leagues",
        intermediate: "High school varsity",
        advanced: "College D2/D3",
        elite: "D1 / Professional",
    },
    focus_areas: FocusAreas {
        technical: &["Shooting mechanics", "Ball handling", "Footwork", "Finishing"],
        tactical: &["Pick and roll", "Spacing", "Help defense", "Transition offense"],
        physical: &[
            "Vertical jump",
            "Lateral quickness",
            "Conditioning",
            "Contact absorption",
        ],
        mental: &[
            "Court vision",
            "Decision making",
            "Clutch performance",
            "Team chemistry",
        ],
    },
    research_basis: &[
        "Ziv - Physical attributes in basketball",
        "Sampaio - Game-related statistics",
        "Scanlan - Training load in basketball",
    ],
    elite_insight: None,
};

static SOCCER: SportProfile = SportProfile {
    name: "Soccer",
    ranking_systems: &["MLS", "USL", "NCAA", "ECNL", "DA"],
    key_metrics: &[
        "Pass completion %",
        "Expected goals (xG)",
        "Distance covered",
        "Sprint count",
        "Duels won",
    ],
    elite_markers: SegmentMarkers {
        beginner: "Recreational/Club",
        intermediate: "Competitive club/High school",
        advanced: "College/Academy",
        elite: "Professional/National team",
    },
    focus_areas: FocusAreas {
        technical: &[
            "First touch",
            "Passing accuracy",
            "Dribbling",
            "Shooting technique",
        ],
        tactical: &[
            "Positioning",
            "Off-ball movement",
            "Pressing triggers",
            "Build-up play",
        ],
        physical: &[
            "Aerobic capacity",
            "Repeated sprint ability",
            "Agility",
            "Power",
        ],
        mental: &["Game intelligence", "Anticipation", "Composure", "Leadership"],
    },
    research_basis: &[
        "Bangsbo - Physical and metabolic demands",
        "Reilly - Training load and recovery",
        "Williams - Skill acquisition and expertise",
    ],
    elite_insight: None,
};

static FITNESS: SportProfile = SportProfile {
    name: "Fitness",
    ranking_systems: &["CrossFit Open", "Powerlifting totals", "Running PRs"],
    key_metrics: &[
        "VO2 max",
        "Body composition",
        "Strength ratios",
        "Movement quality",
    ],
    elite_markers: SegmentMarkers {
        beginner: "Building foundation",
        intermediate: "Consistent training",
        advanced: "Competition level",
        elite: "Top percentile",
    },
    focus_areas: FocusAreas {
        technical: &["Movement patterns", "Form", "Breathing", "Pacing"],
        tactical: &[
            "Program design",
            "Periodization",
            "Exercise selection",
            "Progression",
        ],
        physical: &["Strength", "Endurance", "Mobility", "Power"],
        mental: &["Consistency", "Discipline", "Goal setting", "Self-efficacy"],
    },
    research_basis: &[
        "ACSM - Exercise prescription guidelines",
        "Bompa - Periodization theory",
        "Cook - Movement screening",
    ],
    elite_insight: None,
};

static WATERPOLO: SportProfile = SportProfile {
    name: "Water Polo",
    ranking_systems: &[
        "NCAA D1/D2/D3",
        "Olympic/National team",
        "European leagues",
        "FINA rankings",
    ],
    key_metrics: &[
        "Goals per game",
        "Assists",
        "Steals",
        "Exclusions drawn",
        "Shot accuracy %",
        "Sprint speed",
        "Treading efficiency",
    ],
    elite_markers: SegmentMarkers {
        beginner: "Club/recreational",
        intermediate: "Competitive club/High school varsity",
        advanced: "College D1-D3",
        elite: "National team / Professional (Greece, Hungary, Serbia leagues)",
    },
    focus_areas: FocusAreas {
        technical: &[
            "Shooting mechanics",
            "Passing accuracy",
            "Ball handling in water",
            "Eggbeater kick",
            "Swimming technique",
            "One-handed catches",
        ],
        tactical: &[
            "2-meter offense",
            "Press defense",
            "Counter-attack timing",
            "Set plays",
            "Man-up/man-down situations",
            "Position-specific roles",
        ],
        physical: &[
            "Aerobic capacity (brutal - 4km+ per game)",
            "Leg strength (eggbeater endurance)",
            "Upper body power",
            "Core stability",
            "Sprint speed",
            "Vertical jump in water",
        ],
        mental: &[
            "Physicality tolerance",
            "Spatial awareness",
            "Quick decision-making",
            "Team communication",
            "Resilience (contact sport)",
            "Game intelligence",
        ],
    },
    research_basis: &[
        "Platanou - Physiological demands of water polo",
        "Smith - Energy systems in water polo",
        "Tan - Anthropometric and physiological characteristics of elite water polo players",
    ],
    elite_insight: Some(
        "Greek dominance in water polo (Olympic silver 2004, 2020 bronze) shows emphasis on \
         technical skill + physical conditioning. Champions blend power, precision, and game \
         intelligence at the highest level.",
    ),
};

static FOOTBALL: SportProfile = SportProfile {
    name: "Football",
    ranking_systems: &[
        "NFL",
        "NCAA D1/D2/D3",
        "CFL",
        "High school rankings",
        "247Sports/Rivals",
    ],
    key_metrics: &[
        "Position-specific stats",
        "Combine metrics (40-yard, vertical, bench)",
        "3-cone drill",
        "Film grade",
        "Snap count",
        "PFF rating",
    ],
    elite_markers: SegmentMarkers {
        beginner: "Youth/rec leagues",
        intermediate: "High school varsity",
        advanced: "College D2/D3 or FCS",
        elite: "D1 FBS / NFL",
    },
    focus_areas: FocusAreas {
        technical: &[
            "Position-specific technique",
            "Footwork",
            "Hand placement",
            "Route running",
            "Tackling form",
            "Blocking technique",
        ],
        tactical: &[
            "Play recognition",
            "Coverage schemes",
            "Route concepts",
            "Blitz pickup",
            "Film study",
            "Situational awareness",
        ],
        physical: &[
            "Explosive power",
            "Position-specific strength",
            "Speed/agility",
            "Contact tolerance",
            "Recovery between plays",
            "Flexibility",
        ],
        mental: &[
            "Play memorization",
            "Pre-snap reads",
            "Pressure management",
            "Leadership",
            "Coachability",
            "Mental toughness",
        ],
    },
    research_basis: &[
        "Mann - Sprint mechanics in football",
        "Kraemer - Strength and conditioning for football",
        "DeMartini - Physical demands by position",
    ],
    elite_insight: Some(
        "Position specificity is critical. A lineman trains completely differently than a wide \
         receiver. Elite level requires mastery of both physical attributes AND mental processing \
         speed (0.5-1 second decision windows).",
    ),
};

static WEIGHT_TRAINING: SportProfile = SportProfile {
    name: "Weight Training",
    ranking_systems: &[
        "Powerlifting totals",
        "Olympic lifting totals",
        "Wilks score",
    ],
    key_metrics: &[
        "1RM lifts",
        "Strength-to-bodyweight ratio",
        "Bar velocity",
        "Volume load",
    ],
    elite_markers: SegmentMarkers {
        beginner: "Learning movements",
        intermediate: "Intermediate standards (Squat 1.5x BW)",
        advanced: "Advanced standards (Squat 2x BW)",
        elite: "Elite standards / Competition",
    },
    focus_areas: FocusAreas {
        technical: &["Lift mechanics", "Bar path", "Bracing", "Positioning"],
        tactical: &[
            "Program selection",
            "Periodization",
            "Deload timing",
            "Exercise variation",
        ],
        physical: &[
            "Maximal strength",
            "Rate of force development",
            "Work capacity",
            "Mobility",
        ],
        mental: &[
            "Focus",
            "Confidence under load",
            "Patience",
            "Process orientation",
        ],
    },
    research_basis: &[
        "Zatsiorsky - Science and practice of strength training",
        "Haff - Periodization for strength",
        "Schoenfeld - Hypertrophy mechanisms",
    ],
    elite_insight: None,
};

/// Look up the curated profile for a sport, if one exists
pub fn profile_for(sport: &Sport) -> Option<&'static SportProfile> {
    match sport {
        Sport::Tennis => Some(&TENNIS),
        Sport::Basketball => Some(&BASKETBALL),
        Sport::Soccer => Some(&SOCCER),
        Sport::Fitness => Some(&FITNESS),
        Sport::Waterpolo => Some(&WATERPOLO),
        Sport::Football => Some(&FOOTBALL),
        Sport::WeightTraining => Some(&WEIGHT_TRAINING),
        _ => None,
    }
}

/// Sport context for downstream content selection
///
/// Sports without a curated profile enter research mode: generic focus
/// areas plus a worklist of gaps to fill before the sport is supported
/// first-class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SportContext {
    /// True when no curated profile exists for the sport
    pub research_mode: bool,
    /// Focus areas to draw content from
    pub focus_areas: Vec<String>,
    /// Metrics worth surfacing to the athlete
    pub key_metrics: Vec<String>,
    /// What remains unknown about this sport
    pub research_gaps: Vec<String>,
}

/// Build the sport context for a submission
pub fn sport_context(sport: &Sport) -> SportContext {
    if let Some(profile) = profile_for(sport) {
        return SportContext {
            research_mode: false,
            focus_areas: profile.focus_areas.all().iter().map(ToString::to_string).collect(),
            key_metrics: profile.key_metrics.iter().map(ToString::to_string).collect(),
            research_gaps: Vec::new(),
        };
    }

    tracing::debug!(sport = %sport, "no curated profile, entering research mode");
    SportContext {
        research_mode: true,
        focus_areas: vec![
            "General athletic development".into(),
            "Sport-specific skills".into(),
            "Competition preparation".into(),
        ],
        key_metrics: vec![
            "Performance indicators".into(),
            "Training load".into(),
            "Recovery markers".into(),
        ],
        research_gaps: vec![
            format!("Need to research: {}", sport.display_name()),
            "Identify ranking systems".into(),
            "Define success metrics".into(),
            "Map skill progression".into(),
        ],
    }
}
