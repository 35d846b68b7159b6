use crate::types::assessment::Factor;
use crate::types::report::Category;
use serde::Serialize;

pub type Score = u32;

/// Raw total plus the three normalized category percentages.
///
/// `total_score` is not capped: a fully ideal answer set reaches 106 even though the display layer
/// presents the score against a 100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub total_score: Score,
    pub diet_score: Score,
    pub lifestyle_score: Score,
    pub medication_score: Score,
}

impl ScoreResult {
    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_total(self.total_score)
    }

    pub fn category_score(&self, category: Category) -> Score {
        match category {
            Category::Diet => self.diet_score,
            Category::Lifestyle => self.lifestyle_score,
            Category::Medication => self.medication_score,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Excellent,
    Good,
    Fair,
    NeedsImprovement,
}

impl ScoreBand {
    pub fn from_total(total: Score) -> Self {
        match total {
            80.. => Self::Excellent,
            60..=79 => Self::Good,
            40..=59 => Self::Fair,
            _ => Self::NeedsImprovement,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::NeedsImprovement => "Needs Improvement",
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            Self::Excellent => {
                "You're doing an excellent job maintaining your gut health. Keep up your healthy habits."
            }
            Self::Good => {
                "You have a good foundation for gut health, with some areas left to optimize."
            }
            Self::Fair => {
                "Your gut health is fair, but there's significant room for improvement. Focus on the recommendations below."
            }
            Self::NeedsImprovement => {
                "Your gut health needs attention. Start with the high-priority recommendations below."
            }
        }
    }
}

/// One line of the per-factor breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contribution {
    pub factor: Factor,
    pub category: Category,
    pub answer: Option<&'static str>,
    pub points: Score,
    pub max_points: Score,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_thresholds_match_display_ranges() {
        assert_eq!(ScoreBand::from_total(106), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_total(80), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_total(79), ScoreBand::Good);
        assert_eq!(ScoreBand::from_total(60), ScoreBand::Good);
        assert_eq!(ScoreBand::from_total(59), ScoreBand::Fair);
        assert_eq!(ScoreBand::from_total(40), ScoreBand::Fair);
        assert_eq!(ScoreBand::from_total(39), ScoreBand::NeedsImprovement);
        assert_eq!(ScoreBand::from_total(0), ScoreBand::NeedsImprovement);
    }

    #[test]
    fn score_result_serializes_camel_case_fields() {
        let result = ScoreResult {
            total_score: 106,
            diet_score: 100,
            lifestyle_score: 100,
            medication_score: 100,
        };
        let json = serde_json::to_string(&result).expect("score result should serialize");
        assert!(json.contains("\"totalScore\":106"));
        assert!(json.contains("\"medicationScore\":100"));
    }
}
