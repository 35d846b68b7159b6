use crate::error::{GutscoreError, Result};
use crate::types::assessment::{Assessment, Factor, OptionKey};
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use tracing::debug;

/// Answer file as written by the form layer. Categorical answers stay raw strings until
/// [`RawAssessment::into_assessment`] so unknown keys can be reported instead of rejected.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAssessment {
    pub fiber: Option<String>,
    pub fat_type: Option<String>,
    pub fruits: Option<String>,
    pub vegetables: Option<String>,
    pub sugar: Option<String>,
    pub processed_food: Option<String>,
    pub fermented_food: Option<String>,
    pub nsaids: Option<String>,
    pub alcohol: Option<String>,
    pub water: Option<String>,
    pub activity: Option<String>,
    #[serde(default)]
    pub good_sleep: bool,
    #[serde(default)]
    pub stressed: bool,
    #[serde(default)]
    pub smoker: bool,
    #[serde(default)]
    pub antibiotics: bool,
    #[serde(default)]
    pub probiotics: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputIssue {
    Missing(Factor),
    Unrecognized { factor: Factor, value: String },
}

impl fmt::Display for InputIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputIssue::Missing(factor) => write!(f, "{} is not answered", factor.key()),
            InputIssue::Unrecognized { factor, value } => {
                write!(f, "{} has unrecognized option '{}'", factor.key(), value)
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoadedAssessment {
    pub assessment: Assessment,
    pub issues: Vec<InputIssue>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Toml,
    Json,
}

impl InputFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(Self::Toml),
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Self::Json),
            _ => Err(GutscoreError::UnsupportedInputFormat(
                path.display().to_string(),
            )),
        }
    }
}

pub fn load_assessment(path: &Path) -> Result<LoadedAssessment> {
    if !path.exists() {
        return Err(GutscoreError::InputNotFound(path.display().to_string()));
    }
    let format = InputFormat::from_path(path)?;
    let content = std::fs::read_to_string(path)?;
    debug!(path = %path.display(), ?format, "loaded answer file");
    parse_assessment(&content, format)
        .map_err(|e| GutscoreError::InputParse(format!("{}: {}", path.display(), e)))
}

pub fn parse_assessment(content: &str, format: InputFormat) -> Result<LoadedAssessment> {
    let raw: RawAssessment = match format {
        InputFormat::Toml => toml::from_str(content)?,
        InputFormat::Json => serde_json::from_str(content)?,
    };
    let loaded = raw.into_assessment();
    for issue in &loaded.issues {
        debug!(%issue, "input issue");
    }
    Ok(loaded)
}

impl RawAssessment {
    pub fn into_assessment(self) -> LoadedAssessment {
        let mut issues = Vec::new();
        let assessment = Assessment {
            fiber: resolve(Factor::Fiber, self.fiber, &mut issues),
            fat_type: resolve(Factor::FatType, self.fat_type, &mut issues),
            fruits: resolve(Factor::Fruits, self.fruits, &mut issues),
            vegetables: resolve(Factor::Vegetables, self.vegetables, &mut issues),
            sugar: resolve(Factor::Sugar, self.sugar, &mut issues),
            processed_food: resolve(Factor::ProcessedFood, self.processed_food, &mut issues),
            fermented_food: resolve(Factor::FermentedFood, self.fermented_food, &mut issues),
            nsaids: resolve(Factor::Nsaids, self.nsaids, &mut issues),
            alcohol: resolve(Factor::Alcohol, self.alcohol, &mut issues),
            water: resolve(Factor::Water, self.water, &mut issues),
            activity: resolve(Factor::Activity, self.activity, &mut issues),
            good_sleep: self.good_sleep,
            stressed: self.stressed,
            smoker: self.smoker,
            antibiotics: self.antibiotics,
            probiotics: self.probiotics,
        };
        LoadedAssessment { assessment, issues }
    }
}

fn resolve<T: OptionKey>(
    factor: Factor,
    value: Option<String>,
    issues: &mut Vec<InputIssue>,
) -> Option<T> {
    let value = match value {
        Some(value) if !value.trim().is_empty() => value,
        _ => {
            issues.push(InputIssue::Missing(factor));
            return None;
        }
    };
    let parsed = T::parse(&value);
    if parsed.is_none() {
        issues.push(InputIssue::Unrecognized { factor, value });
    }
    parsed
}
