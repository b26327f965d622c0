use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::archetypes::{
    Archetype, ArchetypeProfile, BALANCED_ARCHETYPE, matching_profiles, profile, profiles,
};
use crate::model::axes::{NormalizedScores, RawScores};
use crate::model::confidence::ConfidenceTier;
use crate::model::thresholds::{ClassifierConfig, ConfigError};
use crate::pipeline::stage2_normalize::normalize;
use crate::pipeline::stage3_fit::{fit_score, is_balanced_within};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassificationResult {
    pub primary: Archetype,
    pub confidence: ConfidenceTier,
    pub normalized: NormalizedScores,
    /// Distance to every profile, including the balanced one.
    pub distances: BTreeMap<Archetype, i32>,
}

impl ClassificationResult {
    pub fn primary_distance(&self) -> i32 {
        self.distances.get(&self.primary).copied().unwrap_or(0)
    }

    pub fn is_balanced(&self) -> bool {
        self.primary.is_balanced()
    }
}

#[derive(Debug, Clone)]
pub struct Classifier {
    config: ClassifierConfig,
}

impl Default for Classifier {
    fn default() -> Self {
        Self {
            config: ClassifierConfig::default_v1(),
        }
    }
}

impl Classifier {
    pub fn new(config: ClassifierConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    pub fn classify(&self, raw: &RawScores) -> ClassificationResult {
        let normalized = normalize(raw);
        let distances = profiles()
            .iter()
            .map(|p| (p.archetype, fit_score(&normalized, &p.center)))
            .collect::<BTreeMap<_, _>>();

        let (primary, confidence) = if is_balanced_within(
            &normalized,
            self.config.balanced_min,
            self.config.balanced_max,
        ) {
            (BALANCED_ARCHETYPE, ConfidenceTier::High)
        } else {
            let (archetype, distance) = nearest_profile(&normalized, matching_profiles());
            (archetype, self.config.confidence_for(distance))
        };

        tracing::debug!(
            primary = primary.as_str(),
            distance = distances.get(&primary).copied().unwrap_or(0),
            confidence = confidence.as_str(),
            "classified"
        );

        ClassificationResult {
            primary,
            confidence,
            normalized,
            distances,
        }
    }
}

/// Classifies with the default configuration.
pub fn classify(raw: &RawScores) -> ClassificationResult {
    Classifier::default().classify(raw)
}

/// Minimum-distance scan in iteration order. Only a strictly lower distance
/// replaces the current best, so ties go to the earliest profile.
pub fn nearest_profile<'a>(
    normalized: &NormalizedScores,
    candidates: impl IntoIterator<Item = &'a ArchetypeProfile>,
) -> (Archetype, i32) {
    let mut best: Option<(Archetype, i32)> = None;
    for candidate in candidates {
        let distance = fit_score(normalized, &candidate.center);
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((candidate.archetype, distance)),
        }
    }
    // An empty candidate set only arises from a caller-built list.
    best.unwrap_or_else(|| {
        let fallback = profile(BALANCED_ARCHETYPE);
        (fallback.archetype, fit_score(normalized, &fallback.center))
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_classify.rs"]
mod tests;
