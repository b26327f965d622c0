use crate::model::axes::{NormalizedScores, RAW_MIN, RAW_SPAN, RawScores, clamp_raw};

/// Rescales each axis to `0..=100`. Raw values outside `RAW_MIN..=RAW_MAX`
/// are clamped first, so the result never leaves `0..=100`.
pub fn normalize(raw: &RawScores) -> NormalizedScores {
    NormalizedScores::from_fn(|axis| normalize_axis(raw.get(axis)))
}

pub fn normalize_axis(value: i32) -> i32 {
    normalize_axis_unclamped(clamp_raw(value))
}

/// `round(((value - 7) / 28) * 100)`, rounding half away from zero.
pub fn normalize_axis_unclamped(value: i32) -> i32 {
    let scaled = (value - RAW_MIN) as f64 / RAW_SPAN as f64 * 100.0;
    scaled.round() as i32
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_normalize.rs"]
mod tests;
