use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::axes::{Axis, RawScores};
use crate::pipeline::stage1_tally::{Answer, TallyError, tally};

/// One completed quiz session as supplied by the answer-capture side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionRecord {
    pub session_id: String,
    #[serde(default)]
    pub scores: Option<RawScores>,
    #[serde(default)]
    pub answers: Option<Vec<Answer>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangePolicy {
    /// Out-of-range axes are clamped by the classifier.
    Clamp,
    /// Out-of-range axes fail the load.
    Reject,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionInput {
    pub session_id: String,
    pub raw: RawScores,
    pub out_of_range: Vec<Axis>,
}

impl SessionInput {
    pub fn clamped(&self) -> bool {
        !self.out_of_range.is_empty()
    }
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error at line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("missing input: {0}")]
    Empty(String),
    #[error("session {session_id}: provide exactly one of `scores` or `answers`")]
    AmbiguousSource { session_id: String },
    #[error("session {session_id}: {source}")]
    Tally {
        session_id: String,
        #[source]
        source: TallyError,
    },
    #[error("session {session_id}: raw {axis} score {value} outside 7..=35")]
    OutOfRange {
        session_id: String,
        axis: Axis,
        value: i32,
    },
}

impl SessionRecord {
    pub fn raw_scores(&self) -> Result<RawScores, InputError> {
        match (&self.scores, &self.answers) {
            (Some(scores), None) => Ok(*scores),
            (None, Some(answers)) => tally(answers).map_err(|source| InputError::Tally {
                session_id: self.session_id.clone(),
                source,
            }),
            _ => Err(InputError::AmbiguousSource {
                session_id: self.session_id.clone(),
            }),
        }
    }
}

pub fn load_sessions(path: &Path, policy: RangePolicy) -> Result<Vec<SessionInput>, InputError> {
    let text = std::fs::read_to_string(path)?;
    let records = parse_records(&text)?;
    if records.is_empty() {
        return Err(InputError::Empty(format!(
            "no sessions in {}",
            path.display()
        )));
    }
    tracing::info!(sessions = records.len(), path = %path.display(), "loaded sessions");
    resolve_sessions(&records, policy)
}

/// Accepts a JSON array of records or one record per line.
pub fn parse_records(text: &str) -> Result<Vec<SessionRecord>, InputError> {
    if text.trim_start().starts_with('[') {
        return serde_json::from_str(text).map_err(|source| InputError::Parse {
            line: source.line(),
            source,
        });
    }

    let mut records = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let record = serde_json::from_str(line).map_err(|source| InputError::Parse {
            line: idx + 1,
            source,
        })?;
        records.push(record);
    }
    Ok(records)
}

pub fn resolve_sessions(
    records: &[SessionRecord],
    policy: RangePolicy,
) -> Result<Vec<SessionInput>, InputError> {
    let mut out = Vec::with_capacity(records.len());
    for record in records {
        let raw = record.raw_scores()?;
        let out_of_range = raw.out_of_range_axes();
        if let Some(&axis) = out_of_range.first() {
            match policy {
                RangePolicy::Reject => {
                    return Err(InputError::OutOfRange {
                        session_id: record.session_id.clone(),
                        axis,
                        value: raw.get(axis),
                    });
                }
                RangePolicy::Clamp => {
                    tracing::warn!(
                        session = %record.session_id,
                        axes = ?out_of_range,
                        "raw scores outside 7..=35; clamping"
                    );
                }
            }
        }
        out.push(SessionInput {
            session_id: record.session_id.clone(),
            raw,
            out_of_range,
        });
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
