use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::axes::{NORMALIZED_MAX, NORMALIZED_MIN};
use crate::model::confidence::ConfidenceTier;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct ClassifierConfig {
    /// Largest winning distance still reported as high confidence.
    pub high_confidence_max_distance: i32,
    /// Largest winning distance still reported as medium confidence.
    pub medium_confidence_max_distance: i32,
    pub balanced_min: i32,
    pub balanced_max: i32,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self::default_v1()
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("parse error in {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("confidence bands must satisfy 0 <= high ({high}) <= medium ({medium})")]
    ConfidenceBands { high: i32, medium: i32 },
    #[error("balanced window [{min}, {max}] must be ordered and lie within [0, 100]")]
    BalancedWindow { min: i32, max: i32 },
}

impl ClassifierConfig {
    pub fn default_v1() -> Self {
        Self {
            high_confidence_max_distance: 40,
            medium_confidence_max_distance: 100,
            balanced_min: 40,
            balanced_max: 60,
        }
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config: Self = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let high = self.high_confidence_max_distance;
        let medium = self.medium_confidence_max_distance;
        if high < 0 || medium < high {
            return Err(ConfigError::ConfidenceBands { high, medium });
        }
        let (min, max) = (self.balanced_min, self.balanced_max);
        if min > max || min < NORMALIZED_MIN || max > NORMALIZED_MAX {
            return Err(ConfigError::BalancedWindow { min, max });
        }
        Ok(())
    }

    /// Non-increasing in `distance`.
    pub fn confidence_for(&self, distance: i32) -> ConfidenceTier {
        if distance <= self.high_confidence_max_distance {
            ConfidenceTier::High
        } else if distance <= self.medium_confidence_max_distance {
            ConfidenceTier::Medium
        } else {
            ConfidenceTier::Low
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/thresholds.rs"]
mod tests;
