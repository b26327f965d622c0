use crate::model::axes::{Axis, NormalizedScores};
use crate::model::thresholds::ClassifierConfig;

/// Manhattan distance between two points in normalized space. Lower is a
/// better fit. Saturates at `i32::MAX` for vectors far outside `0..=100`.
pub fn fit_score(a: &NormalizedScores, b: &NormalizedScores) -> i32 {
    let total = Axis::ALL
        .into_iter()
        .map(|axis| a.get(axis).abs_diff(b.get(axis)))
        .fold(0u32, u32::saturating_add);
    i32::try_from(total).unwrap_or(i32::MAX)
}

/// True when every axis lies in the closed default window `[40, 60]`.
pub fn is_balanced(normalized: &NormalizedScores) -> bool {
    let config = ClassifierConfig::default_v1();
    is_balanced_within(normalized, config.balanced_min, config.balanced_max)
}

pub fn is_balanced_within(normalized: &NormalizedScores, min: i32, max: i32) -> bool {
    Axis::ALL
        .into_iter()
        .all(|axis| (min..=max).contains(&normalized.get(axis)))
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_fit.rs"]
mod tests;
