//! Four-axis questionnaire scoring and archetype classification.
//!
//! Raw axis totals are normalized to `0..=100`, checked against the balanced
//! window, and otherwise matched to the nearest archetype prototype by
//! Manhattan distance.

pub mod input;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod report;

pub use model::archetypes::{Archetype, ArchetypeProfile, profile, profiles};
pub use model::axes::{Axis, NormalizedScores, RawScores};
pub use model::confidence::ConfidenceTier;
pub use model::thresholds::{ClassifierConfig, ConfigError};
pub use pipeline::stage1_tally::{Answer, TallyError, tally};
pub use pipeline::stage2_normalize::normalize;
pub use pipeline::stage3_fit::{fit_score, is_balanced};
pub use pipeline::stage4_classify::{ClassificationResult, Classifier, classify};
