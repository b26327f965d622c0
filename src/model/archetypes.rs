use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::axes::{Axis, NormalizedScores};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Archetype {
    StructuredAchiever,
    ChaoticCreative,
    AnxiousPerfectionist,
    NoveltySeeker,
    StrategicPlanner,
    FlexibleImproviser,
    AdaptiveGeneralist,
}

/// The archetype chosen by range membership instead of distance.
pub const BALANCED_ARCHETYPE: Archetype = Archetype::AdaptiveGeneralist;

impl Archetype {
    pub const ALL: [Archetype; 7] = [
        Archetype::StructuredAchiever,
        Archetype::ChaoticCreative,
        Archetype::AnxiousPerfectionist,
        Archetype::NoveltySeeker,
        Archetype::StrategicPlanner,
        Archetype::FlexibleImproviser,
        Archetype::AdaptiveGeneralist,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Archetype::StructuredAchiever => "structured-achiever",
            Archetype::ChaoticCreative => "chaotic-creative",
            Archetype::AnxiousPerfectionist => "anxious-perfectionist",
            Archetype::NoveltySeeker => "novelty-seeker",
            Archetype::StrategicPlanner => "strategic-planner",
            Archetype::FlexibleImproviser => "flexible-improviser",
            Archetype::AdaptiveGeneralist => "adaptive-generalist",
        }
    }

    pub fn is_balanced(self) -> bool {
        self == BALANCED_ARCHETYPE
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown archetype id: {0}")]
pub struct ParseArchetypeError(pub String);

impl FromStr for Archetype {
    type Err = ParseArchetypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Archetype::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| ParseArchetypeError(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AxisRange {
    pub min: i32,
    pub max: i32,
}

impl AxisRange {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: i32) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Prototype point for one archetype, with the typical score band per axis
/// (indexed by `Axis::index`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ArchetypeProfile {
    pub archetype: Archetype,
    pub center: NormalizedScores,
    pub ranges: [AxisRange; 4],
}

impl ArchetypeProfile {
    pub fn range(&self, axis: Axis) -> AxisRange {
        self.ranges[axis.index()]
    }

    pub fn axes_in_range(&self, scores: &NormalizedScores) -> Vec<Axis> {
        Axis::ALL
            .into_iter()
            .filter(|&axis| self.range(axis).contains(scores.get(axis)))
            .collect()
    }
}

const fn r(min: i32, max: i32) -> AxisRange {
    AxisRange::new(min, max)
}

// Declaration order is the tie-break order for nearest-profile selection.
static PROFILES: [ArchetypeProfile; 7] = [
    ArchetypeProfile {
        archetype: Archetype::StructuredAchiever,
        center: NormalizedScores::new(85, 85, 20, 20),
        ranges: [r(65, 100), r(65, 100), r(0, 40), r(0, 40)],
    },
    ArchetypeProfile {
        archetype: Archetype::ChaoticCreative,
        center: NormalizedScores::new(15, 15, 85, 80),
        ranges: [r(0, 35), r(0, 35), r(65, 100), r(60, 100)],
    },
    ArchetypeProfile {
        archetype: Archetype::AnxiousPerfectionist,
        center: NormalizedScores::new(80, 40, 20, 80),
        ranges: [r(60, 100), r(20, 60), r(0, 40), r(60, 100)],
    },
    ArchetypeProfile {
        archetype: Archetype::NoveltySeeker,
        center: NormalizedScores::new(20, 80, 80, 30),
        ranges: [r(0, 40), r(60, 100), r(60, 100), r(10, 50)],
    },
    ArchetypeProfile {
        archetype: Archetype::StrategicPlanner,
        center: NormalizedScores::new(80, 70, 75, 25),
        ranges: [r(60, 100), r(50, 90), r(55, 95), r(5, 45)],
    },
    ArchetypeProfile {
        archetype: Archetype::FlexibleImproviser,
        center: NormalizedScores::new(25, 60, 40, 20),
        ranges: [r(5, 45), r(40, 80), r(20, 60), r(0, 40)],
    },
    ArchetypeProfile {
        archetype: Archetype::AdaptiveGeneralist,
        center: NormalizedScores::new(50, 50, 50, 50),
        ranges: [r(40, 60), r(40, 60), r(40, 60), r(40, 60)],
    },
];

pub fn profiles() -> &'static [ArchetypeProfile] {
    &PROFILES
}

/// Profiles eligible for distance matching, in declaration order.
pub fn matching_profiles() -> impl Iterator<Item = &'static ArchetypeProfile> {
    PROFILES.iter().filter(|p| !p.archetype.is_balanced())
}

pub fn profile(archetype: Archetype) -> &'static ArchetypeProfile {
    // PROFILES is declared in Archetype::ALL order.
    &PROFILES[archetype as usize]
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/archetypes.rs"]
mod tests;
