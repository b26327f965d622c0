use crate::model::archetypes::{Archetype, profile, profiles};
use crate::model::axes::Axis;
use crate::pipeline::stage4_classify::ClassificationResult;
use crate::report::{ArchetypeStat, SummaryData, format_f32_6};

pub fn render_report_text(data: &SummaryData) -> String {
    let mut out = String::new();

    out.push_str("Productivity Archetype Report\n");
    out.push_str("=============================\n\n");

    out.push_str("1. Sessions\n");
    out.push_str(&format!("Input: {}\n", data.input));
    out.push_str(&format!("Sessions classified: {}\n", data.n_sessions));
    out.push_str(&format!(
        "Sessions clamped into 7..=35: {} ({})\n",
        data.n_clamped, data.range_policy
    ));
    out.push('\n');

    out.push_str("2. Archetype distribution\n");
    out.push_str(&format!(
        "Dominant archetypes: {}\n",
        dominant_archetypes(&data.archetypes)
    ));
    for stat in &data.archetypes {
        out.push_str(&format!(
            "{:<22} {:>6}  {}\n",
            stat.name,
            stat.count,
            format_f32_6(stat.fraction)
        ));
    }
    out.push('\n');

    out.push_str("3. Confidence\n");
    for tier in &data.confidence {
        out.push_str(&format!(
            "{:<8} {:>6}  {}\n",
            tier.name,
            tier.count,
            format_f32_6(tier.fraction)
        ));
    }
    out.push_str(&format!(
        "Winning distance median: {}\n",
        format_f32_6(data.distance_median)
    ));
    out.push('\n');

    out.push_str("4. Normalized axis medians\n");
    for axis in &data.normalized_medians {
        out.push_str(&format!(
            "{:<12} {}\n",
            axis.axis,
            format_f32_6(axis.median)
        ));
    }

    out
}

pub fn render_classification_text(result: &ClassificationResult) -> String {
    let mut out = String::new();
    let winner = profile(result.primary);

    out.push_str(&format!("Archetype: {}\n", result.primary));
    out.push_str(&format!("Confidence: {}\n", result.confidence));
    if result.is_balanced() {
        out.push_str("Match: balanced profile (all axes within window)\n");
    } else {
        out.push_str(&format!("Distance: {}\n", result.primary_distance()));
    }
    out.push('\n');

    out.push_str("axis        score  typical\n");
    for axis in Axis::ALL {
        let range = winner.range(axis);
        let score = result.normalized.get(axis);
        let marker = if range.contains(score) { "" } else { "  *" };
        out.push_str(&format!(
            "{:<11} {:>5}  {}-{}{}\n",
            axis.as_str(),
            score,
            range.min,
            range.max,
            marker
        ));
    }
    out.push('\n');

    out.push_str("distances:\n");
    for archetype in Archetype::ALL {
        if let Some(distance) = result.distances.get(&archetype) {
            out.push_str(&format!("  {:<22} {:>4}\n", archetype.as_str(), distance));
        }
    }

    out
}

pub fn render_profiles_text() -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<22} {:>9} {:>10} {:>9} {:>9}\n",
        "archetype", "structure", "motivation", "cognitive", "task"
    ));
    for p in profiles() {
        out.push_str(&format!(
            "{:<22} {:>9} {:>10} {:>9} {:>9}\n",
            p.archetype.as_str(),
            p.center.structure,
            p.center.motivation,
            p.center.cognitive,
            p.center.task
        ));
    }
    out
}

fn dominant_archetypes(stats: &[ArchetypeStat]) -> String {
    let mut sorted = stats.to_vec();
    // Stable sort keeps declaration order among equal fractions.
    sorted.sort_by(|a, b| {
        b.fraction
            .partial_cmp(&a.fraction)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    let parts = sorted
        .iter()
        .filter(|s| s.count > 0)
        .take(2)
        .map(|s| format!("{} ({})", s.name, format_f32_6(s.fraction)))
        .collect::<Vec<_>>();
    if parts.is_empty() {
        "none".to_string()
    } else {
        parts.join(", ")
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
