use crate::model::archetypes::profiles;
use crate::pipeline::stage4_classify::ClassificationResult;
use crate::report::SummaryData;

pub fn render_summary_json(data: &SummaryData) -> serde_json::Result<String> {
    serde_json::to_string_pretty(data)
}

pub fn render_classification_json(result: &ClassificationResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result)
}

pub fn render_profiles_json() -> serde_json::Result<String> {
    serde_json::to_string_pretty(profiles())
}
