use crate::types::assessment::{ActivityLevel, Level};
use crate::types::scoring::Score;

pub fn water(answer: Option<Level>) -> Score {
    match answer {
        Some(Level::Low) => 3,
        Some(Level::Medium) => 6,
        Some(Level::High) => 8,
        None => 0,
    }
}

pub fn activity(answer: Option<ActivityLevel>) -> Score {
    match answer {
        Some(ActivityLevel::Inactive) => 2,
        Some(ActivityLevel::Few) => 5,
        Some(ActivityLevel::Everyday) => 8,
        None => 0,
    }
}

pub fn good_sleep(good_sleep: bool) -> Score {
    if good_sleep {
        6
    } else {
        0
    }
}

pub fn stressed(stressed: bool) -> Score {
    if stressed {
        0
    } else {
        4
    }
}

pub fn smoker(smoker: bool) -> Score {
    if smoker {
        0
    } else {
        4
    }
}
