use crate::types::scoring::ScoreResult;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Diet,
    Lifestyle,
    Medication,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Diet => "Diet",
            Self::Lifestyle => "Lifestyle",
            Self::Medication => "Medication",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static severity of a rule. Never derived from how far an answer is from ideal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub category: Category,
    pub issue: String,
    pub suggestion: String,
    pub priority: Priority,
}

/// Scores plus recommendations in rule-declaration order, as handed to the display layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssessmentResult {
    #[serde(flatten)]
    pub scores: ScoreResult,
    pub recommendations: Vec<Recommendation>,
}

impl AssessmentResult {
    pub fn high_priority(&self) -> Vec<&Recommendation> {
        RecommendationView::high_only().select(&self.recommendations)
    }

    /// Copy of this result whose recommendation list has been narrowed by `view`.
    pub fn with_view(&self, view: RecommendationView) -> AssessmentResult {
        AssessmentResult {
            scores: self.scores,
            recommendations: view
                .select(&self.recommendations)
                .into_iter()
                .cloned()
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriorityFilter {
    #[default]
    All,
    High,
}

/// "Priority only" and "first N" slices over an ordered recommendation list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RecommendationView {
    pub priority: PriorityFilter,
    pub limit: Option<usize>,
}

impl RecommendationView {
    pub fn high_only() -> Self {
        Self {
            priority: PriorityFilter::High,
            limit: None,
        }
    }

    /// Filters by priority first, then truncates. Relative order is never changed.
    pub fn select<'a>(&self, recommendations: &'a [Recommendation]) -> Vec<&'a Recommendation> {
        recommendations
            .iter()
            .filter(|recommendation| match self.priority {
                PriorityFilter::All => true,
                PriorityFilter::High => recommendation.priority == Priority::High,
            })
            .take(self.limit.unwrap_or(usize::MAX))
            .collect()
    }

    pub fn is_unfiltered(&self) -> bool {
        self.priority == PriorityFilter::All && self.limit.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recommendation(issue: &str, priority: Priority) -> Recommendation {
        Recommendation {
            category: Category::Diet,
            issue: issue.to_string(),
            suggestion: "suggestion".to_string(),
            priority,
        }
    }

    fn sample() -> Vec<Recommendation> {
        vec![
            recommendation("a", Priority::Medium),
            recommendation("b", Priority::High),
            recommendation("c", Priority::Low),
            recommendation("d", Priority::High),
            recommendation("e", Priority::High),
        ]
    }

    fn issues(selected: &[&Recommendation]) -> Vec<String> {
        selected.iter().map(|rec| rec.issue.clone()).collect()
    }

    #[test]
    fn default_view_keeps_everything_in_order() {
        let recs = sample();
        let view = RecommendationView::default();
        assert!(view.is_unfiltered());
        assert_eq!(issues(&view.select(&recs)), vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn high_view_filters_before_truncating() {
        let recs = sample();
        let view = RecommendationView {
            priority: PriorityFilter::High,
            limit: Some(2),
        };
        assert_eq!(issues(&view.select(&recs)), vec!["b", "d"]);
    }

    #[test]
    fn limit_takes_first_n_in_declaration_order() {
        let recs = sample();
        let view = RecommendationView {
            priority: PriorityFilter::All,
            limit: Some(3),
        };
        assert_eq!(issues(&view.select(&recs)), vec!["a", "b", "c"]);
    }

    #[test]
    fn priority_serializes_lowercase_and_category_capitalized() {
        let json = serde_json::to_string(&recommendation("x", Priority::Medium))
            .expect("recommendation should serialize");
        assert!(json.contains("\"priority\":\"medium\""));
        assert!(json.contains("\"category\":\"Diet\""));
    }
}
