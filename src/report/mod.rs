pub mod json;
pub mod md;

use crate::error::GutscoreError;
use crate::types::report::{AssessmentResult, RecommendationView};
use crate::types::scoring::Contribution;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

/// Everything a renderer needs: the full result, how to slice its recommendations, and an
/// optional per-factor breakdown.
#[derive(Debug, Clone)]
pub struct ReportInput<'a> {
    pub result: &'a AssessmentResult,
    pub view: RecommendationView,
    pub breakdown: Option<&'a [Contribution]>,
}

pub fn render(input: &ReportInput<'_>, format: OutputFormat) -> Result<String, GutscoreError> {
    match format {
        OutputFormat::Json => json::to_json(&input.result.with_view(input.view))
            .map_err(GutscoreError::Json),
        OutputFormat::Md => Ok(md::to_markdown(input)),
    }
}
