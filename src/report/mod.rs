pub mod json;
pub mod text;

use serde::Serialize;

use crate::model::thresholds::ClassifierConfig;

#[derive(Debug, Clone, Serialize)]
pub struct ArchetypeStat {
    pub name: &'static str,
    pub count: usize,
    pub fraction: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct TierStat {
    pub name: &'static str,
    pub count: usize,
    pub fraction: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct AxisMedian {
    pub axis: &'static str,
    pub median: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryData {
    pub tool: ToolMeta,
    pub config: ClassifierConfig,
    pub input: String,
    pub range_policy: String,

    pub n_sessions: usize,
    pub n_clamped: usize,

    pub archetypes: Vec<ArchetypeStat>,
    pub confidence: Vec<TierStat>,

    pub normalized_medians: Vec<AxisMedian>,
    pub distance_median: f32,
}

pub fn format_f32_6(v: f32) -> String {
    format!("{:.6}", v)
}

/// Mean of the two middle values for even-length input.
pub fn median(values: &[f32]) -> f32 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) * 0.5
    } else {
        sorted[mid]
    }
}

pub fn fraction(count: usize, total: usize) -> f32 {
    if total == 0 {
        return 0.0;
    }
    count as f32 / total as f32
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
