use crate::error::GutscoreError;
use crate::types::report::{PriorityFilter, RecommendationView};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GutscoreConfig {
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub input: InputConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormatSetting {
    #[default]
    Md,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrioritySetting {
    #[default]
    All,
    High,
}

impl From<PrioritySetting> for PriorityFilter {
    fn from(value: PrioritySetting) -> Self {
        match value {
            PrioritySetting::All => PriorityFilter::All,
            PrioritySetting::High => PriorityFilter::High,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    #[serde(default)]
    pub format: ReportFormatSetting,
    #[serde(default)]
    pub priority: PrioritySetting,
    pub max_recommendations: Option<usize>,
    #[serde(default = "default_breakdown")]
    pub breakdown: bool,
}

fn default_breakdown() -> bool {
    true
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: ReportFormatSetting::default(),
            priority: PrioritySetting::default(),
            max_recommendations: None,
            breakdown: default_breakdown(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct InputConfig {
    #[serde(default)]
    pub strict: bool,
}

impl GutscoreConfig {
    pub fn recommendation_view(&self) -> RecommendationView {
        RecommendationView {
            priority: self.report.priority.into(),
            limit: self.report.max_recommendations,
        }
    }

    pub fn validate(&self) -> Result<(), GutscoreError> {
        if self.report.max_recommendations == Some(0) {
            return Err(GutscoreError::ConfigParse(
                "report.max_recommendations must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}
