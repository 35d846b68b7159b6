//! Habit scoring and recommendation engine for gut-health questionnaires.
//!
//! [`evaluate`] runs the score calculator and the recommendation rules over one answer set and
//! merges both outputs into an [`AssessmentResult`]. Both stages are pure; concurrent calls need
//! no coordination.

pub mod config;
pub mod error;
pub mod input;
pub mod recommend;
pub mod report;
pub mod score;
pub mod types;

pub use types::assessment::{Assessment, Factor, OptionKey};
pub use types::report::{AssessmentResult, Category, Priority, Recommendation, RecommendationView};
pub use types::scoring::{ScoreBand, ScoreResult};

pub fn evaluate(assessment: &Assessment) -> AssessmentResult {
    let scores = score::compute(assessment);
    let recommendations = recommend::generate(assessment, scores.total_score);
    AssessmentResult {
        scores,
        recommendations,
    }
}
