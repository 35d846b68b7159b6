//! Point tables and score normalization.
//!
//! Every factor maps to a fixed number of points. The total is the plain sum. Each category score
//! is the rounded mean of `points / max_points` over the factors in that category, so a perfect
//! answer on every factor in a category yields 100.

pub mod diet;
pub mod lifestyle;
pub mod medication;

use crate::types::assessment::{Assessment, Factor, OptionKey};
use crate::types::report::Category;
use crate::types::scoring::{Contribution, Score, ScoreResult};
use tracing::debug;

pub fn compute(assessment: &Assessment) -> ScoreResult {
    let total_score = Factor::ALL
        .iter()
        .map(|factor| factor_points(assessment, *factor))
        .sum();

    let result = ScoreResult {
        total_score,
        diet_score: category_score(assessment, Category::Diet),
        lifestyle_score: category_score(assessment, Category::Lifestyle),
        medication_score: category_score(assessment, Category::Medication),
    };
    debug!(
        total = result.total_score,
        diet = result.diet_score,
        lifestyle = result.lifestyle_score,
        medication = result.medication_score,
        "computed scores"
    );
    result
}

/// Points earned by one factor. Unanswered categorical factors earn 0.
pub fn factor_points(assessment: &Assessment, factor: Factor) -> Score {
    match factor {
        Factor::Fiber => diet::fiber(assessment.fiber),
        Factor::FatType => diet::fat_type(assessment.fat_type),
        Factor::Fruits => diet::servings(assessment.fruits),
        Factor::Vegetables => diet::servings(assessment.vegetables),
        Factor::Sugar => diet::sugar(assessment.sugar),
        Factor::ProcessedFood => diet::processed_food(assessment.processed_food),
        Factor::FermentedFood => diet::fermented_food(assessment.fermented_food),
        Factor::Nsaids => medication::nsaids(assessment.nsaids),
        Factor::Alcohol => medication::alcohol(assessment.alcohol),
        Factor::Water => lifestyle::water(assessment.water),
        Factor::Activity => lifestyle::activity(assessment.activity),
        Factor::GoodSleep => lifestyle::good_sleep(assessment.good_sleep),
        Factor::Stressed => lifestyle::stressed(assessment.stressed),
        Factor::Smoker => lifestyle::smoker(assessment.smoker),
        Factor::Antibiotics => medication::antibiotics(assessment.antibiotics),
        Factor::Probiotics => medication::probiotics(assessment.probiotics),
    }
}

/// Answer key to points for every option of `factor`, in option order.
pub fn option_table(factor: Factor) -> Vec<(&'static str, Score)> {
    match factor {
        Factor::Fiber => options(diet::fiber),
        Factor::FatType => options(diet::fat_type),
        Factor::Fruits | Factor::Vegetables => options(diet::servings),
        Factor::Sugar => options(diet::sugar),
        Factor::ProcessedFood => options(diet::processed_food),
        Factor::FermentedFood => options(diet::fermented_food),
        Factor::Nsaids => options(medication::nsaids),
        Factor::Alcohol => options(medication::alcohol),
        Factor::Water => options(lifestyle::water),
        Factor::Activity => options(lifestyle::activity),
        Factor::GoodSleep => flags(lifestyle::good_sleep),
        Factor::Stressed => flags(lifestyle::stressed),
        Factor::Smoker => flags(lifestyle::smoker),
        Factor::Antibiotics => flags(medication::antibiotics),
        Factor::Probiotics => flags(medication::probiotics),
    }
}

pub fn max_points(factor: Factor) -> Score {
    option_table(factor)
        .into_iter()
        .map(|(_, points)| points)
        .max()
        .unwrap_or(0)
}

/// Per-factor contributions in table order.
pub fn breakdown(assessment: &Assessment) -> Vec<Contribution> {
    Factor::ALL
        .iter()
        .map(|factor| Contribution {
            factor: *factor,
            category: factor.category(),
            answer: assessment.answer(*factor),
            points: factor_points(assessment, *factor),
            max_points: max_points(*factor),
        })
        .collect()
}

fn category_score(assessment: &Assessment, category: Category) -> Score {
    let ratios = Factor::ALL
        .iter()
        .filter(|factor| factor.category() == category)
        .map(|factor| f64::from(factor_points(assessment, *factor)) / f64::from(max_points(*factor)))
        .collect::<Vec<_>>();
    percentage(&ratios)
}

/// Mean of `ratios` as a whole percentage. `f64::round` rounds half away from zero, so 12.5
/// becomes 13.
fn percentage(ratios: &[f64]) -> Score {
    if ratios.is_empty() {
        return 0;
    }
    let mean = ratios.iter().sum::<f64>() / ratios.len() as f64;
    (mean * 100.0).round() as Score
}

fn options<T: OptionKey>(points: fn(Option<T>) -> Score) -> Vec<(&'static str, Score)> {
    T::ALL
        .iter()
        .map(|option| (option.key(), points(Some(*option))))
        .collect()
}

fn flags(points: fn(bool) -> Score) -> Vec<(&'static str, Score)> {
    vec![("true", points(true)), ("false", points(false))]
}
