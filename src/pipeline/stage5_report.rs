use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::input::{RangePolicy, SessionInput};
use crate::model::archetypes::Archetype;
use crate::model::axes::Axis;
use crate::model::confidence::ConfidenceTier;
use crate::model::thresholds::ClassifierConfig;
use crate::pipeline::stage4_classify::{ClassificationResult, Classifier};
use crate::report::json::render_summary_json;
use crate::report::text::render_report_text;
use crate::report::{
    ArchetypeStat, AxisMedian, SummaryData, TierStat, ToolMeta, fraction, median,
};

#[derive(Debug, Clone)]
pub struct SessionOutcome {
    pub input: SessionInput,
    pub result: ClassificationResult,
}

#[derive(Debug, Clone)]
pub struct ReportContext {
    pub tool_name: String,
    pub tool_version: String,
    pub input_path: String,
    pub range_policy: RangePolicy,
    pub config: ClassifierConfig,
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn classify_sessions(
    classifier: &Classifier,
    sessions: Vec<SessionInput>,
) -> Vec<SessionOutcome> {
    sessions
        .into_iter()
        .map(|input| {
            let result = classifier.classify(&input.raw);
            SessionOutcome { input, result }
        })
        .collect()
}

pub fn write_reports(
    outcomes: &[SessionOutcome],
    out_dir: &Path,
    ctx: &ReportContext,
) -> Result<(), ReportError> {
    fs::create_dir_all(out_dir)?;

    write_sessions_tsv(outcomes, &out_dir.join("sessions.tsv"))?;

    let summary = build_summary(outcomes, ctx);
    let json = render_summary_json(&summary)?;
    write_text(&out_dir.join("summary.json"), &json)?;

    let report = render_report_text(&summary);
    write_text(&out_dir.join("report.txt"), &report)?;

    tracing::info!(
        sessions = outcomes.len(),
        out = %out_dir.display(),
        "reports written"
    );
    Ok(())
}

fn write_sessions_tsv(outcomes: &[SessionOutcome], path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    let header = [
        "session_id",
        "raw_structure",
        "raw_motivation",
        "raw_cognitive",
        "raw_task",
        "norm_structure",
        "norm_motivation",
        "norm_cognitive",
        "norm_task",
        "archetype",
        "confidence",
        "distance",
        "clamped",
    ]
    .join("\t");
    writeln!(w, "{}", header)?;

    for outcome in outcomes {
        let raw = &outcome.input.raw;
        let norm = &outcome.result.normalized;
        writeln!(
            w,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            sanitize_field(&outcome.input.session_id),
            raw.structure,
            raw.motivation,
            raw.cognitive,
            raw.task,
            norm.structure,
            norm.motivation,
            norm.cognitive,
            norm.task,
            outcome.result.primary,
            outcome.result.confidence,
            outcome.result.primary_distance(),
            outcome.input.clamped(),
        )?;
    }
    w.flush()
}

pub fn build_summary(outcomes: &[SessionOutcome], ctx: &ReportContext) -> SummaryData {
    let n = outcomes.len();

    let mut archetype_counts: BTreeMap<Archetype, usize> = BTreeMap::new();
    let mut tier_counts: BTreeMap<ConfidenceTier, usize> = BTreeMap::new();
    for outcome in outcomes {
        *archetype_counts.entry(outcome.result.primary).or_insert(0) += 1;
        *tier_counts.entry(outcome.result.confidence).or_insert(0) += 1;
    }

    let archetypes = Archetype::ALL
        .into_iter()
        .map(|a| {
            let count = archetype_counts.get(&a).copied().unwrap_or(0);
            ArchetypeStat {
                name: a.as_str(),
                count,
                fraction: fraction(count, n),
            }
        })
        .collect();

    let confidence = ConfidenceTier::ALL
        .into_iter()
        .map(|t| {
            let count = tier_counts.get(&t).copied().unwrap_or(0);
            TierStat {
                name: t.as_str(),
                count,
                fraction: fraction(count, n),
            }
        })
        .collect();

    let normalized_medians = Axis::ALL
        .into_iter()
        .map(|axis| {
            let values = outcomes
                .iter()
                .map(|o| o.result.normalized.get(axis) as f32)
                .collect::<Vec<_>>();
            AxisMedian {
                axis: axis.as_str(),
                median: median(&values),
            }
        })
        .collect();

    let distances = outcomes
        .iter()
        .map(|o| o.result.primary_distance() as f32)
        .collect::<Vec<_>>();

    SummaryData {
        tool: ToolMeta {
            name: ctx.tool_name.clone(),
            version: ctx.tool_version.clone(),
        },
        config: ctx.config.clone(),
        input: ctx.input_path.clone(),
        range_policy: match ctx.range_policy {
            RangePolicy::Clamp => "clamp".to_string(),
            RangePolicy::Reject => "reject".to_string(),
        },
        n_sessions: n,
        n_clamped: outcomes.iter().filter(|o| o.input.clamped()).count(),
        archetypes,
        confidence,
        normalized_medians,
        distance_median: median(&distances),
    }
}

fn sanitize_field(value: &str) -> String {
    value.replace(['\t', '\n', '\r'], " ")
}

fn write_text(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_report.rs"]
mod tests;
