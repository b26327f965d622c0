use std::fmt;

use serde::{Deserialize, Serialize};

pub const QUESTIONS_PER_AXIS: usize = 7;
pub const RESPONSE_MIN: u8 = 1;
pub const RESPONSE_MAX: u8 = 5;

pub const RAW_MIN: i32 = QUESTIONS_PER_AXIS as i32 * RESPONSE_MIN as i32;
pub const RAW_MAX: i32 = QUESTIONS_PER_AXIS as i32 * RESPONSE_MAX as i32;
pub const RAW_SPAN: i32 = RAW_MAX - RAW_MIN;

pub const NORMALIZED_MIN: i32 = 0;
pub const NORMALIZED_MAX: i32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Structure,
    Motivation,
    Cognitive,
    Task,
}

impl Axis {
    pub const ALL: [Axis; 4] = [
        Axis::Structure,
        Axis::Motivation,
        Axis::Cognitive,
        Axis::Task,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Axis::Structure => "structure",
            Axis::Motivation => "motivation",
            Axis::Cognitive => "cognitive",
            Axis::Task => "task",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Axis::Structure => 0,
            Axis::Motivation => 1,
            Axis::Cognitive => 2,
            Axis::Task => 3,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-axis questionnaire totals, nominally `RAW_MIN..=RAW_MAX` each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawScores {
    pub structure: i32,
    pub motivation: i32,
    pub cognitive: i32,
    pub task: i32,
}

impl RawScores {
    pub const fn new(structure: i32, motivation: i32, cognitive: i32, task: i32) -> Self {
        Self {
            structure,
            motivation,
            cognitive,
            task,
        }
    }

    pub fn get(&self, axis: Axis) -> i32 {
        match axis {
            Axis::Structure => self.structure,
            Axis::Motivation => self.motivation,
            Axis::Cognitive => self.cognitive,
            Axis::Task => self.task,
        }
    }

    pub fn clamped(&self) -> Self {
        Self::from_fn(|axis| clamp_raw(self.get(axis)))
    }

    /// Axes whose value lies outside `RAW_MIN..=RAW_MAX`, in axis order.
    pub fn out_of_range_axes(&self) -> Vec<Axis> {
        Axis::ALL
            .into_iter()
            .filter(|&axis| !(RAW_MIN..=RAW_MAX).contains(&self.get(axis)))
            .collect()
    }

    pub fn is_in_range(&self) -> bool {
        self.out_of_range_axes().is_empty()
    }

    pub(crate) fn from_fn(mut f: impl FnMut(Axis) -> i32) -> Self {
        Self {
            structure: f(Axis::Structure),
            motivation: f(Axis::Motivation),
            cognitive: f(Axis::Cognitive),
            task: f(Axis::Task),
        }
    }
}

/// Axis scores rescaled to `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NormalizedScores {
    pub structure: i32,
    pub motivation: i32,
    pub cognitive: i32,
    pub task: i32,
}

impl NormalizedScores {
    pub const fn new(structure: i32, motivation: i32, cognitive: i32, task: i32) -> Self {
        Self {
            structure,
            motivation,
            cognitive,
            task,
        }
    }

    pub fn get(&self, axis: Axis) -> i32 {
        match axis {
            Axis::Structure => self.structure,
            Axis::Motivation => self.motivation,
            Axis::Cognitive => self.cognitive,
            Axis::Task => self.task,
        }
    }

    pub(crate) fn from_fn(mut f: impl FnMut(Axis) -> i32) -> Self {
        Self {
            structure: f(Axis::Structure),
            motivation: f(Axis::Motivation),
            cognitive: f(Axis::Cognitive),
            task: f(Axis::Task),
        }
    }
}

pub fn clamp_raw(x: i32) -> i32 {
    x.clamp(RAW_MIN, RAW_MAX)
}
