use crate::types::assessment::{AlcoholUse, NsaidUse};
use crate::types::scoring::Score;

pub fn nsaids(answer: Option<NsaidUse>) -> Score {
    match answer {
        Some(NsaidUse::Special) => 6,
        Some(NsaidUse::Monthly) => 3,
        Some(NsaidUse::Daily) => 1,
        None => 0,
    }
}

pub fn alcohol(answer: Option<AlcoholUse>) -> Score {
    match answer {
        Some(AlcoholUse::Never) => 6,
        Some(AlcoholUse::Monthly) => 4,
        Some(AlcoholUse::Weekly) => 2,
        None => 0,
    }
}

pub fn antibiotics(antibiotics: bool) -> Score {
    if antibiotics {
        0
    } else {
        3
    }
}

pub fn probiotics(probiotics: bool) -> Score {
    if probiotics {
        3
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn medication_flags_award_bonus_on_healthy_answer() {
        assert_eq!(antibiotics(false), 3);
        assert_eq!(antibiotics(true), 0);
        assert_eq!(probiotics(true), 3);
        assert_eq!(probiotics(false), 0);
    }
}
