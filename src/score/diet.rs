use crate::types::assessment::{FatType, FiberIntake, FoodFrequency, Level, Servings};
use crate::types::scoring::Score;

pub fn fiber(answer: Option<FiberIntake>) -> Score {
    match answer {
        Some(FiberIntake::Little) => 3,
        Some(FiberIntake::Medium) => 6,
        Some(FiberIntake::Much) => 10,
        None => 0,
    }
}

pub fn fat_type(answer: Option<FatType>) -> Score {
    match answer {
        Some(FatType::Saturated) => 3,
        Some(FatType::Unsaturated) => 10,
        None => 0,
    }
}

/// Fruits and vegetables share one table.
pub fn servings(answer: Option<Servings>) -> Score {
    match answer {
        Some(Servings::ZeroToOne) => 2,
        Some(Servings::TwoToThree) => 5,
        Some(Servings::MoreThanThree) => 8,
        None => 0,
    }
}

pub fn sugar(answer: Option<Level>) -> Score {
    match answer {
        Some(Level::Low) => 8,
        Some(Level::Medium) => 4,
        Some(Level::High) => 1,
        None => 0,
    }
}

pub fn processed_food(answer: Option<FoodFrequency>) -> Score {
    match answer {
        Some(FoodFrequency::Barely) => 7,
        Some(FoodFrequency::Few) => 4,
        Some(FoodFrequency::Everyday) => 1,
        None => 0,
    }
}

pub fn fermented_food(answer: Option<FoodFrequency>) -> Score {
    match answer {
        Some(FoodFrequency::Barely) => 2,
        Some(FoodFrequency::Few) => 5,
        Some(FoodFrequency::Everyday) => 7,
        None => 0,
    }
}
