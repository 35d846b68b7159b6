use crate::types::report::Category;
use serde::{Serialize, Serializer};

/// Closed set of answer keys for one categorical factor.
///
/// `parse` is total and exact: any key outside `ALL` (including the empty string or a key padded
/// with whitespace) yields `None`, which the scorer treats as zero points and the rule table
/// treats as "no match".
pub trait OptionKey: Copy + Sized + 'static {
    const ALL: &'static [Self];

    fn key(self) -> &'static str;

    fn parse(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|option| option.key() == key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FiberIntake {
    Little,
    Medium,
    Much,
}

impl OptionKey for FiberIntake {
    const ALL: &'static [Self] = &[Self::Little, Self::Medium, Self::Much];

    fn key(self) -> &'static str {
        match self {
            Self::Little => "little",
            Self::Medium => "medium",
            Self::Much => "much",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FatType {
    Saturated,
    Unsaturated,
}

impl OptionKey for FatType {
    const ALL: &'static [Self] = &[Self::Saturated, Self::Unsaturated];

    fn key(self) -> &'static str {
        match self {
            Self::Saturated => "saturated",
            Self::Unsaturated => "unsaturated",
        }
    }
}

/// Daily servings, shared by fruits and vegetables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Servings {
    ZeroToOne,
    TwoToThree,
    MoreThanThree,
}

impl OptionKey for Servings {
    const ALL: &'static [Self] = &[Self::ZeroToOne, Self::TwoToThree, Self::MoreThanThree];

    fn key(self) -> &'static str {
        match self {
            Self::ZeroToOne => "0-1",
            Self::TwoToThree => "2-3",
            Self::MoreThanThree => ">3",
        }
    }
}

/// Low/medium/high scale, shared by sugar and water intake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Low,
    Medium,
    High,
}

impl OptionKey for Level {
    const ALL: &'static [Self] = &[Self::Low, Self::Medium, Self::High];

    fn key(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// How often a food is eaten, shared by processed and fermented food.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoodFrequency {
    Barely,
    Few,
    Everyday,
}

impl OptionKey for FoodFrequency {
    const ALL: &'static [Self] = &[Self::Barely, Self::Few, Self::Everyday];

    fn key(self) -> &'static str {
        match self {
            Self::Barely => "barely",
            Self::Few => "few",
            Self::Everyday => "everyday",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NsaidUse {
    Special,
    Monthly,
    Daily,
}

impl OptionKey for NsaidUse {
    const ALL: &'static [Self] = &[Self::Special, Self::Monthly, Self::Daily];

    fn key(self) -> &'static str {
        match self {
            Self::Special => "special",
            Self::Monthly => "monthly",
            Self::Daily => "daily",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlcoholUse {
    Never,
    Monthly,
    Weekly,
}

impl OptionKey for AlcoholUse {
    const ALL: &'static [Self] = &[Self::Never, Self::Monthly, Self::Weekly];

    fn key(self) -> &'static str {
        match self {
            Self::Never => "none",
            Self::Monthly => "monthly",
            Self::Weekly => "weekly",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityLevel {
    Inactive,
    Few,
    Everyday,
}

impl OptionKey for ActivityLevel {
    const ALL: &'static [Self] = &[Self::Inactive, Self::Few, Self::Everyday];

    fn key(self) -> &'static str {
        match self {
            Self::Inactive => "none",
            Self::Few => "few",
            Self::Everyday => "everyday",
        }
    }
}

/// A completed answer set. `None` on a categorical field means the answer was absent or not one
/// of the known option keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assessment {
    pub fiber: Option<FiberIntake>,
    pub fat_type: Option<FatType>,
    pub fruits: Option<Servings>,
    pub vegetables: Option<Servings>,
    pub sugar: Option<Level>,
    pub processed_food: Option<FoodFrequency>,
    pub fermented_food: Option<FoodFrequency>,
    pub nsaids: Option<NsaidUse>,
    pub alcohol: Option<AlcoholUse>,
    pub water: Option<Level>,
    pub activity: Option<ActivityLevel>,
    pub good_sleep: bool,
    pub stressed: bool,
    pub smoker: bool,
    pub antibiotics: bool,
    pub probiotics: bool,
}

impl Assessment {
    /// Answer key recorded for `factor`, if any. Boolean factors always answer `"true"` or
    /// `"false"`.
    pub fn answer(&self, factor: Factor) -> Option<&'static str> {
        fn flag(value: bool) -> Option<&'static str> {
            Some(if value { "true" } else { "false" })
        }

        match factor {
            Factor::Fiber => self.fiber.map(OptionKey::key),
            Factor::FatType => self.fat_type.map(OptionKey::key),
            Factor::Fruits => self.fruits.map(OptionKey::key),
            Factor::Vegetables => self.vegetables.map(OptionKey::key),
            Factor::Sugar => self.sugar.map(OptionKey::key),
            Factor::ProcessedFood => self.processed_food.map(OptionKey::key),
            Factor::FermentedFood => self.fermented_food.map(OptionKey::key),
            Factor::Nsaids => self.nsaids.map(OptionKey::key),
            Factor::Alcohol => self.alcohol.map(OptionKey::key),
            Factor::Water => self.water.map(OptionKey::key),
            Factor::Activity => self.activity.map(OptionKey::key),
            Factor::GoodSleep => flag(self.good_sleep),
            Factor::Stressed => flag(self.stressed),
            Factor::Smoker => flag(self.smoker),
            Factor::Antibiotics => flag(self.antibiotics),
            Factor::Probiotics => flag(self.probiotics),
        }
    }

    /// Categorical factors without a recognized answer, in table order.
    pub fn missing_factors(&self) -> Vec<Factor> {
        Factor::ALL
            .iter()
            .copied()
            .filter(|factor| factor.is_categorical() && self.answer(*factor).is_none())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_factors().is_empty()
    }
}

/// Every named dimension of an [`Assessment`], in point-table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Factor {
    Fiber,
    FatType,
    Fruits,
    Vegetables,
    Sugar,
    ProcessedFood,
    FermentedFood,
    Nsaids,
    Alcohol,
    Water,
    Activity,
    GoodSleep,
    Stressed,
    Smoker,
    Antibiotics,
    Probiotics,
}

impl Factor {
    pub const ALL: [Factor; 16] = [
        Factor::Fiber,
        Factor::FatType,
        Factor::Fruits,
        Factor::Vegetables,
        Factor::Sugar,
        Factor::ProcessedFood,
        Factor::FermentedFood,
        Factor::Nsaids,
        Factor::Alcohol,
        Factor::Water,
        Factor::Activity,
        Factor::GoodSleep,
        Factor::Stressed,
        Factor::Smoker,
        Factor::Antibiotics,
        Factor::Probiotics,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Factor::Fiber => "fiber",
            Factor::FatType => "fatType",
            Factor::Fruits => "fruits",
            Factor::Vegetables => "vegetables",
            Factor::Sugar => "sugar",
            Factor::ProcessedFood => "processedFood",
            Factor::FermentedFood => "fermentedFood",
            Factor::Nsaids => "nsaids",
            Factor::Alcohol => "alcohol",
            Factor::Water => "water",
            Factor::Activity => "activity",
            Factor::GoodSleep => "goodSleep",
            Factor::Stressed => "stressed",
            Factor::Smoker => "smoker",
            Factor::Antibiotics => "antibiotics",
            Factor::Probiotics => "probiotics",
        }
    }

    pub fn from_key(key: &str) -> Option<Factor> {
        Factor::ALL.iter().copied().find(|factor| factor.key() == key)
    }

    pub fn is_categorical(self) -> bool {
        !matches!(
            self,
            Factor::GoodSleep
                | Factor::Stressed
                | Factor::Smoker
                | Factor::Antibiotics
                | Factor::Probiotics
        )
    }

    /// Category whose normalized score this factor feeds.
    pub fn category(self) -> Category {
        match self {
            Factor::Fiber
            | Factor::FatType
            | Factor::Fruits
            | Factor::Vegetables
            | Factor::Sugar
            | Factor::ProcessedFood
            | Factor::FermentedFood => Category::Diet,
            Factor::Water
            | Factor::Activity
            | Factor::GoodSleep
            | Factor::Stressed
            | Factor::Smoker => Category::Lifestyle,
            Factor::Nsaids | Factor::Alcohol | Factor::Antibiotics | Factor::Probiotics => {
                Category::Medication
            }
        }
    }
}

impl Serialize for Factor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::{ideal, worst};
    use super::*;

    #[test]
    fn parse_accepts_documented_keys() {
        assert_eq!(Servings::parse("0-1"), Some(Servings::ZeroToOne));
        assert_eq!(Servings::parse(">3"), Some(Servings::MoreThanThree));
        assert_eq!(AlcoholUse::parse("none"), Some(AlcoholUse::Never));
        assert_eq!(ActivityLevel::parse("none"), Some(ActivityLevel::Inactive));
        assert_eq!(FoodFrequency::parse("everyday"), Some(FoodFrequency::Everyday));
    }

    #[test]
    fn parse_rejects_unknown_and_empty_keys() {
        assert_eq!(FiberIntake::parse(""), None);
        assert_eq!(FiberIntake::parse("lots"), None);
        assert_eq!(FatType::parse("Saturated"), None);
        assert_eq!(Servings::parse("4+"), None);
        assert_eq!(FoodFrequency::parse(" everyday "), None);
        assert_eq!(FiberIntake::parse("much\n"), None);
    }

    #[test]
    fn every_option_key_round_trips_through_parse() {
        for option in NsaidUse::ALL {
            assert_eq!(NsaidUse::parse(option.key()), Some(*option));
        }
        for option in Level::ALL {
            assert_eq!(Level::parse(option.key()), Some(*option));
        }
    }

    #[test]
    fn default_assessment_is_missing_every_categorical_factor() {
        let assessment = Assessment::default();
        let missing = assessment.missing_factors();
        assert_eq!(missing.len(), 11);
        assert_eq!(missing.first(), Some(&Factor::Fiber));
        assert_eq!(missing.last(), Some(&Factor::Activity));
        assert!(!assessment.is_complete());
    }

    #[test]
    fn complete_assessments_report_no_missing_factors() {
        assert!(ideal().is_complete());
        assert!(worst().is_complete());
    }

    #[test]
    fn answer_reports_boolean_factors_as_flags() {
        let assessment = worst();
        assert_eq!(assessment.answer(Factor::Smoker), Some("true"));
        assert_eq!(assessment.answer(Factor::GoodSleep), Some("false"));
        assert_eq!(assessment.answer(Factor::Fruits), Some("0-1"));
    }

    #[test]
    fn factor_keys_resolve_back_to_factors() {
        for factor in Factor::ALL {
            assert_eq!(Factor::from_key(factor.key()), Some(factor));
        }
        assert_eq!(Factor::from_key("fat_type"), None);
    }

    #[test]
    fn factors_map_to_expected_categories() {
        assert_eq!(Factor::FermentedFood.category(), Category::Diet);
        assert_eq!(Factor::Smoker.category(), Category::Lifestyle);
        assert_eq!(Factor::Probiotics.category(), Category::Medication);
    }
}
