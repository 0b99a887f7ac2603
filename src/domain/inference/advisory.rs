//! Advisory classifier - category name to advisory tier and message.
//!
//! Matching is content-based: a category containing "Obesity" is an obesity
//! tier regardless of what else it contains. Rules are evaluated top-down and
//! the first match wins.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse advisory bucket derived from a category name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    Obesity,
    Overweight,
    NormalWeight,
    Other,
}

impl Tier {
    /// The fixed advisory message shown verbatim for this tier.
    pub fn message(&self) -> &'static str {
        match self {
            Tier::Obesity => {
                "You fall within the obesity category. Start regular physical activity and pay attention to what you eat!"
            }
            Tier::Overweight => {
                "You are in the overweight category. Keep your diet balanced and add more movement to your day!"
            }
            Tier::NormalWeight => {
                "Your weight is normal! Keep up a healthy lifestyle and stay active."
            }
            Tier::Other => {
                "An unusual category was detected. For an accurate result, please consult a nutrition specialist."
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Obesity => "Obesity",
            Tier::Overweight => "Overweight",
            Tier::NormalWeight => "NormalWeight",
            Tier::Other => "Other",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How a rule tests a category name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryMatcher {
    Contains(&'static str),
    Equals(&'static str),
}

impl CategoryMatcher {
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryMatcher::Contains(needle) => category.contains(*needle),
            CategoryMatcher::Equals(expected) => category == *expected,
        }
    }
}

/// Ordered advisory rules. Categories matching none fall back to [`Tier::Other`].
pub const ADVISORY_RULES: &[(CategoryMatcher, Tier)] = &[
    (CategoryMatcher::Contains("Obesity"), Tier::Obesity),
    (CategoryMatcher::Contains("Overweight"), Tier::Overweight),
    (CategoryMatcher::Equals("Normal_Weight"), Tier::NormalWeight),
];

/// Tier plus its advisory message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advisory {
    pub tier: Tier,
    pub message: &'static str,
}

/// Maps category names to advisories using [`ADVISORY_RULES`].
pub struct AdvisoryClassifier;

impl AdvisoryClassifier {
    pub fn tier_for(category: &str) -> Tier {
        ADVISORY_RULES
            .iter()
            .find(|(matcher, _)| matcher.matches(category))
            .map(|(_, tier)| *tier)
            .unwrap_or(Tier::Other)
    }

    pub fn classify(category: &str) -> Advisory {
        let tier = Self::tier_for(category);
        Advisory {
            tier,
            message: tier.message(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn obesity_categories_map_to_obesity() {
        for category in ["Obesity_Type_I", "Obesity_Type_II", "Obesity_Type_III"] {
            assert_eq!(AdvisoryClassifier::tier_for(category), Tier::Obesity, "{}", category);
        }
    }

    #[test]
    fn overweight_categories_map_to_overweight() {
        for category in ["Overweight_Level_I", "Overweight_Level_II"] {
            assert_eq!(AdvisoryClassifier::tier_for(category), Tier::Overweight);
        }
    }

    #[test]
    fn normal_weight_requires_exact_match() {
        assert_eq!(AdvisoryClassifier::tier_for("Normal_Weight"), Tier::NormalWeight);
        assert_eq!(AdvisoryClassifier::tier_for("Normal_Weight_Plus"), Tier::Other);
        assert_eq!(AdvisoryClassifier::tier_for("normal_weight"), Tier::Other);
    }

    #[test]
    fn unknown_categories_map_to_other() {
        assert_eq!(AdvisoryClassifier::tier_for("Mystery_Category"), Tier::Other);
        assert_eq!(AdvisoryClassifier::tier_for("Insufficient_Weight"), Tier::Other);
        assert_eq!(AdvisoryClassifier::tier_for(""), Tier::Other);
    }

    #[test]
    fn obesity_rule_takes_precedence_over_overweight() {
        assert_eq!(
            AdvisoryClassifier::tier_for("Overweight_Obesity_Mix"),
            Tier::Obesity
        );
        assert_eq!(AdvisoryClassifier::tier_for("Obesity_Type_II"), Tier::Obesity);
    }

    #[test]
    fn substring_rules_precede_exact_rule() {
        assert_eq!(ADVISORY_RULES[0].1, Tier::Obesity);
        assert_eq!(ADVISORY_RULES[1].1, Tier::Overweight);
        assert_eq!(ADVISORY_RULES[2].1, Tier::NormalWeight);
    }

    #[test]
    fn classify_attaches_tier_message() {
        let advisory = AdvisoryClassifier::classify("Normal_Weight");
        assert_eq!(advisory.tier, Tier::NormalWeight);
        assert_eq!(
            advisory.message,
            "Your weight is normal! Keep up a healthy lifestyle and stay active."
        );
    }

    #[test]
    fn every_tier_has_a_distinct_message() {
        let tiers = [Tier::Obesity, Tier::Overweight, Tier::NormalWeight, Tier::Other];
        for (i, a) in tiers.iter().enumerate() {
            assert!(!a.message().is_empty());
            for b in &tiers[i + 1..] {
                assert_ne!(a.message(), b.message());
            }
        }
    }

    #[test]
    fn tier_serializes_by_name() {
        assert_eq!(serde_json::to_string(&Tier::NormalWeight).unwrap(), "\"NormalWeight\"");
    }
}
