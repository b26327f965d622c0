use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::axes::{Axis, QUESTIONS_PER_AXIS, RESPONSE_MAX, RESPONSE_MIN, RawScores};

/// One questionnaire response on the 1..=5 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Answer {
    pub axis: Axis,
    pub response: u8,
    /// Reverse-keyed questions score `6 - response`.
    #[serde(default)]
    pub reverse: bool,
}

impl Answer {
    pub fn new(axis: Axis, response: u8) -> Self {
        Self {
            axis,
            response,
            reverse: false,
        }
    }

    pub fn reversed(axis: Axis, response: u8) -> Self {
        Self {
            axis,
            response,
            reverse: true,
        }
    }

    pub fn weight(&self) -> i32 {
        let response = self.response as i32;
        if self.reverse {
            (RESPONSE_MIN + RESPONSE_MAX) as i32 - response
        } else {
            response
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TallyError {
    #[error("answer {index}: response {response} outside 1..=5")]
    ResponseOutOfRange { index: usize, response: u8 },
    #[error("axis {axis}: expected {expected} answers, found {found}")]
    QuestionCount {
        axis: Axis,
        expected: usize,
        found: usize,
    },
}

pub fn tally(answers: &[Answer]) -> Result<RawScores, TallyError> {
    let mut sums = [0i32; 4];
    let mut counts = [0usize; 4];

    for (index, answer) in answers.iter().enumerate() {
        if !(RESPONSE_MIN..=RESPONSE_MAX).contains(&answer.response) {
            return Err(TallyError::ResponseOutOfRange {
                index,
                response: answer.response,
            });
        }
        let slot = answer.axis.index();
        sums[slot] += answer.weight();
        counts[slot] += 1;
    }

    for axis in Axis::ALL {
        let found = counts[axis.index()];
        if found != QUESTIONS_PER_AXIS {
            return Err(TallyError::QuestionCount {
                axis,
                expected: QUESTIONS_PER_AXIS,
                found,
            });
        }
    }

    Ok(RawScores::from_fn(|axis| sums[axis.index()]))
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_tally.rs"]
mod tests;
