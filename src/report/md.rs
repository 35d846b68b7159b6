use super::ReportInput;
use crate::types::report::Category;

pub fn to_markdown(input: &ReportInput<'_>) -> String {
    let result = input.result;
    let band = result.scores.band();

    let mut output = String::new();
    output.push_str("# Gut Microbiome Report\n\n");
    output.push_str(&format!(
        "Total score: {} ({})\n\n",
        result.scores.total_score,
        band.label()
    ));
    output.push_str(band.summary());
    output.push_str("\n\n");

    output.push_str("## Category Scores\n\n");
    for category in [Category::Diet, Category::Lifestyle, Category::Medication] {
        output.push_str(&format!(
            "- {}: {}\n",
            category,
            result.scores.category_score(category)
        ));
    }
    output.push('\n');

    if let Some(breakdown) = input.breakdown {
        output.push_str("## Factor Breakdown\n\n");
        for entry in breakdown {
            output.push_str(&format!(
                "- {} ({}): {} ({}/{})\n",
                entry.factor.key(),
                entry.category,
                entry.answer.unwrap_or("-"),
                entry.points,
                entry.max_points
            ));
        }
        output.push('\n');
    }

    output.push_str("## Recommendations\n\n");
    let selected = input.view.select(&result.recommendations);
    if !input.view.is_unfiltered() {
        output.push_str(&format!(
            "Showing {} of {} recommendations.\n\n",
            selected.len(),
            result.recommendations.len()
        ));
    }
    if selected.is_empty() {
        output.push_str("- none\n");
    } else {
        for recommendation in selected {
            output.push_str(&format!(
                "- [{}] {} / {}: {}\n",
                recommendation.priority,
                recommendation.category,
                recommendation.issue,
                recommendation.suggestion
            ));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score;
    use crate::types::assessment::fixtures::{ideal, worst};
    use crate::types::report::RecommendationView;

    #[test]
    fn markdown_report_contains_sections() {
        let result = crate::evaluate(&worst());
        let rendered = to_markdown(&ReportInput {
            result: &result,
            view: RecommendationView::default(),
            breakdown: None,
        });

        assert!(rendered.contains("# Gut Microbiome Report"));
        assert!(rendered.contains("Total score: 22 (Needs Improvement)"));
        assert!(rendered.contains("## Category Scores"));
        assert!(rendered.contains("- Lifestyle: 13"));
        assert!(rendered.contains("## Recommendations"));
        assert!(rendered.contains("- [high] Diet / Low fiber intake:"));
        assert!(!rendered.contains("## Factor Breakdown"));
        assert!(!rendered.contains("Showing"));
    }

    #[test]
    fn markdown_report_renders_breakdown_and_uncapped_total() {
        let assessment = ideal();
        let result = crate::evaluate(&assessment);
        let breakdown = score::breakdown(&assessment);
        let rendered = to_markdown(&ReportInput {
            result: &result,
            view: RecommendationView::default(),
            breakdown: Some(&breakdown),
        });

        assert!(rendered.contains("Total score: 106 (Excellent)"));
        assert!(rendered.contains("- fiber (Diet): much (10/10)"));
        assert!(rendered.contains("- probiotics (Medication): true (3/3)"));
        assert!(rendered.contains("- none"));
    }

    #[test]
    fn markdown_report_notes_filtered_view() {
        let result = crate::evaluate(&worst());
        let rendered = to_markdown(&ReportInput {
            result: &result,
            view: RecommendationView {
                limit: Some(2),
                ..RecommendationView::high_only()
            },
            breakdown: None,
        });

        assert!(rendered.contains("Showing 2 of 16 recommendations."));
        assert!(rendered.contains("High saturated fat intake"));
        assert!(!rendered.contains("Insufficient fruit consumption"));
    }
}
