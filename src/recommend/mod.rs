//! Ordered, independent recommendation rules.
//!
//! Rules are evaluated in declaration order and each matching rule appends exactly one
//! recommendation. Consumers slice the output by position ("top N"), so the table is an array and
//! the output is never re-sorted.

use crate::types::assessment::{
    ActivityLevel, AlcoholUse, Assessment, Factor, FatType, FiberIntake, FoodFrequency, Level,
    NsaidUse, Servings,
};
use crate::types::report::{Category, Priority, Recommendation};
use crate::types::scoring::Score;
use tracing::trace;

/// Below this total, an assessment without probiotics gets a supplementation hint.
pub const PROBIOTIC_HINT_THRESHOLD: Score = 70;

pub struct Rule {
    pub id: &'static str,
    pub factor: Factor,
    pub category: Category,
    pub issue: &'static str,
    pub suggestion: &'static str,
    pub priority: Priority,
    matches: fn(&Assessment, Score) -> bool,
}

impl Rule {
    pub fn applies(&self, assessment: &Assessment, total_score: Score) -> bool {
        (self.matches)(assessment, total_score)
    }

    fn recommendation(&self) -> Recommendation {
        Recommendation {
            category: self.category,
            issue: self.issue.to_string(),
            suggestion: self.suggestion.to_string(),
            priority: self.priority,
        }
    }
}

pub static RULES: [Rule; 16] = [
    Rule {
        id: "diet.fiber",
        factor: Factor::Fiber,
        category: Category::Diet,
        issue: "Low fiber intake",
        suggestion: "Increase fiber consumption to 25-35g daily through whole grains, legumes, fruits, and vegetables.",
        priority: Priority::High,
        matches: |a, _| a.fiber == Some(FiberIntake::Little),
    },
    Rule {
        id: "diet.fat_type",
        factor: Factor::FatType,
        category: Category::Diet,
        issue: "High saturated fat intake",
        suggestion: "Switch to unsaturated fats like olive oil, avocados, nuts, and fatty fish rich in omega-3.",
        priority: Priority::High,
        matches: |a, _| a.fat_type == Some(FatType::Saturated),
    },
    Rule {
        id: "diet.fruits",
        factor: Factor::Fruits,
        category: Category::Diet,
        issue: "Insufficient fruit consumption",
        suggestion: "Aim for at least 2-3 servings of diverse fruits daily to support beneficial bacteria.",
        priority: Priority::Medium,
        matches: |a, _| a.fruits == Some(Servings::ZeroToOne),
    },
    Rule {
        id: "diet.vegetables",
        factor: Factor::Vegetables,
        category: Category::Diet,
        issue: "Low vegetable intake",
        suggestion: "Increase vegetable consumption to 3+ servings daily for optimal gut health.",
        priority: Priority::Medium,
        matches: |a, _| a.vegetables == Some(Servings::ZeroToOne),
    },
    Rule {
        id: "diet.sugar",
        factor: Factor::Sugar,
        category: Category::Diet,
        issue: "High sugar intake",
        suggestion: "Reduce sugar consumption to less than 3 tablespoons daily to prevent harmful bacteria growth.",
        priority: Priority::High,
        matches: |a, _| a.sugar == Some(Level::High),
    },
    Rule {
        id: "diet.processed_food",
        factor: Factor::ProcessedFood,
        category: Category::Diet,
        issue: "Frequent processed food consumption",
        suggestion: "Minimize processed foods and focus on whole, natural foods.",
        priority: Priority::High,
        matches: |a, _| a.processed_food == Some(FoodFrequency::Everyday),
    },
    Rule {
        id: "diet.fermented_food",
        factor: Factor::FermentedFood,
        category: Category::Diet,
        issue: "Low probiotic food intake",
        suggestion: "Include fermented foods like yogurt, kefir, sauerkraut, or kimchi several times per week.",
        priority: Priority::Medium,
        matches: |a, _| a.fermented_food == Some(FoodFrequency::Barely),
    },
    Rule {
        id: "lifestyle.water",
        factor: Factor::Water,
        category: Category::Lifestyle,
        issue: "Insufficient hydration",
        suggestion: "Drink 8-10 cups of water daily to support digestion and gut bacteria.",
        priority: Priority::High,
        matches: |a, _| a.water == Some(Level::Low),
    },
    Rule {
        id: "lifestyle.activity",
        factor: Factor::Activity,
        category: Category::Lifestyle,
        issue: "Lack of physical activity",
        suggestion: "Engage in regular exercise at least 3-4 times per week to improve gut diversity.",
        priority: Priority::Medium,
        matches: |a, _| a.activity == Some(ActivityLevel::Inactive),
    },
    Rule {
        id: "lifestyle.sleep",
        factor: Factor::GoodSleep,
        category: Category::Lifestyle,
        issue: "Poor sleep quality",
        suggestion: "Aim for 7-9 hours of quality sleep each night to support gut health.",
        priority: Priority::Medium,
        matches: |a, _| !a.good_sleep,
    },
    Rule {
        id: "lifestyle.stress",
        factor: Factor::Stressed,
        category: Category::Lifestyle,
        issue: "Chronic stress",
        suggestion: "Practice stress management techniques like meditation, yoga, or deep breathing exercises.",
        priority: Priority::High,
        matches: |a, _| a.stressed,
    },
    Rule {
        id: "lifestyle.smoking",
        factor: Factor::Smoker,
        category: Category::Lifestyle,
        issue: "Smoking/nicotine use",
        suggestion: "Quit smoking to restore gut barrier function and improve microbiome diversity.",
        priority: Priority::High,
        matches: |a, _| a.smoker,
    },
    Rule {
        id: "medication.nsaids",
        factor: Factor::Nsaids,
        category: Category::Medication,
        issue: "Frequent NSAID use",
        suggestion: "Consult your doctor about alternative pain management to reduce gut irritation.",
        priority: Priority::Medium,
        matches: |a, _| a.nsaids == Some(NsaidUse::Daily),
    },
    Rule {
        id: "medication.alcohol",
        factor: Factor::Alcohol,
        category: Category::Medication,
        issue: "Regular alcohol consumption",
        suggestion: "Reduce alcohol intake to occasional use or eliminate completely for better gut health.",
        priority: Priority::Medium,
        matches: |a, _| a.alcohol == Some(AlcoholUse::Weekly),
    },
    Rule {
        id: "medication.antibiotics",
        factor: Factor::Antibiotics,
        category: Category::Medication,
        issue: "Chronic antibiotic use",
        suggestion: "Discuss with your doctor about probiotic supplementation during and after antibiotic treatment.",
        priority: Priority::High,
        matches: |a, _| a.antibiotics,
    },
    Rule {
        id: "medication.probiotics",
        factor: Factor::Probiotics,
        category: Category::Medication,
        issue: "No probiotic supplementation",
        suggestion: "Consider adding a high-quality probiotic supplement to support gut bacteria diversity.",
        priority: Priority::Low,
        matches: |a, total| !a.probiotics && total < PROBIOTIC_HINT_THRESHOLD,
    },
];

/// Recommendations for every matching rule, in declaration order.
pub fn generate(assessment: &Assessment, total_score: Score) -> Vec<Recommendation> {
    RULES
        .iter()
        .filter(|rule| rule.applies(assessment, total_score))
        .inspect(|rule| trace!(rule = rule.id, priority = %rule.priority, "rule fired"))
        .map(Rule::recommendation)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score;
    use crate::types::assessment::fixtures::{ideal, worst};

    fn issues(recommendations: &[Recommendation]) -> Vec<&str> {
        recommendations
            .iter()
            .map(|recommendation| recommendation.issue.as_str())
            .collect()
    }

    #[test]
    fn ideal_assessment_produces_no_recommendations() {
        let assessment = ideal();
        let total = score::compute(&assessment).total_score;
        assert!(generate(&assessment, total).is_empty());
    }

    #[test]
    fn worst_assessment_fires_every_rule_in_order() {
        let assessment = worst();
        let total = score::compute(&assessment).total_score;
        let recommendations = generate(&assessment, total);

        let expected = RULES.iter().map(|rule| rule.issue).collect::<Vec<_>>();
        assert_eq!(issues(&recommendations), expected);
        assert_eq!(recommendations.len(), 16);
        assert_eq!(
            recommendations.last().map(|rec| rec.priority),
            Some(Priority::Low)
        );
    }

    #[test]
    fn priorities_match_static_rule_table() {
        let expected = [
            Priority::High,
            Priority::High,
            Priority::Medium,
            Priority::Medium,
            Priority::High,
            Priority::High,
            Priority::Medium,
            Priority::High,
            Priority::Medium,
            Priority::Medium,
            Priority::High,
            Priority::High,
            Priority::Medium,
            Priority::Medium,
            Priority::High,
            Priority::Low,
        ];
        let recommendations = generate(&worst(), 0);
        let actual = recommendations
            .iter()
            .map(|rec| rec.priority)
            .collect::<Vec<_>>();
        assert_eq!(actual, expected);
    }

    #[test]
    fn categories_follow_rule_table() {
        let recommendations = generate(&worst(), 0);
        let diet = recommendations
            .iter()
            .filter(|rec| rec.category == Category::Diet)
            .count();
        let lifestyle = recommendations
            .iter()
            .filter(|rec| rec.category == Category::Lifestyle)
            .count();
        let medication = recommendations
            .iter()
            .filter(|rec| rec.category == Category::Medication)
            .count();
        assert_eq!((diet, lifestyle, medication), (7, 5, 4));
    }

    #[test]
    fn probiotic_hint_depends_on_total_threshold() {
        let mut assessment = ideal();
        assessment.probiotics = false;

        let below = generate(&assessment, PROBIOTIC_HINT_THRESHOLD - 1);
        assert_eq!(issues(&below), vec!["No probiotic supplementation"]);

        let at = generate(&assessment, PROBIOTIC_HINT_THRESHOLD);
        assert!(at.is_empty());
    }

    #[test]
    fn probiotic_hint_never_fires_when_taking_probiotics() {
        let mut assessment = worst();
        assessment.probiotics = true;
        let recommendations = generate(&assessment, 0);
        assert!(!issues(&recommendations).contains(&"No probiotic supplementation"));
    }

    #[test]
    fn toggling_one_factor_only_changes_its_rule() {
        let mut assessment = ideal();
        assessment.water = Some(Level::Low);
        let total = score::compute(&assessment).total_score;
        assert_eq!(issues(&generate(&assessment, total)), vec!["Insufficient hydration"]);

        let mut assessment = ideal();
        assessment.stressed = true;
        let total = score::compute(&assessment).total_score;
        assert_eq!(total, 102);
        assert_eq!(issues(&generate(&assessment, total)), vec!["Chronic stress"]);
    }

    #[test]
    fn unanswered_factors_trigger_no_categorical_rules() {
        let assessment = Assessment::default();
        let total = score::compute(&assessment).total_score;
        let recommendations = generate(&assessment, total);
        assert_eq!(
            issues(&recommendations),
            vec!["Poor sleep quality", "No probiotic supplementation"]
        );
    }

    #[test]
    fn generate_is_deterministic() {
        let assessment = worst();
        assert_eq!(generate(&assessment, 22), generate(&assessment, 22));
    }

    #[test]
    fn rule_ids_are_unique() {
        let mut ids = RULES.iter().map(|rule| rule.id).collect::<Vec<_>>();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), RULES.len());
    }
}
