//! Survey answers as submitted, and their validated form.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

pub const AGE_RANGE: RangeInclusive<f64> = 10.0..=100.0;
pub const WEIGHT_RANGE: RangeInclusive<f64> = 20.0..=200.0;
pub const VEGETABLE_RANGE: RangeInclusive<f64> = 1.0..=3.0;
pub const WATER_RANGE: RangeInclusive<f64> = 0.0..=3.0;
pub const ACTIVITY_RANGE: RangeInclusive<f64> = 0.0..=3.0;

/// A yes/no answer, given either as a JSON boolean or as `"yes"` / `"no"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FlagAnswer {
    Bool(bool),
    Text(String),
}

impl From<bool> for FlagAnswer {
    fn from(value: bool) -> Self {
        FlagAnswer::Bool(value)
    }
}

impl From<&str> for FlagAnswer {
    fn from(value: &str) -> Self {
        FlagAnswer::Text(value.to_string())
    }
}

/// One survey response exactly as received.
///
/// Every field is optional so that an absent answer surfaces as a
/// [`ValidationError`] naming the field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawAnswers {
    #[serde(default)]
    pub age: Option<f64>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub weight: Option<f64>,
    /// Frequently eats high-calorie food.
    #[serde(default)]
    pub favc: Option<FlagAnswer>,
    /// Vegetable consumption frequency.
    #[serde(default)]
    pub fcvc: Option<f64>,
    /// Monitors calorie intake.
    #[serde(default)]
    pub scc: Option<FlagAnswer>,
    /// Alcohol consumption.
    #[serde(default)]
    pub calc: Option<String>,
    /// Daily water intake.
    #[serde(default)]
    pub ch2o: Option<f64>,
    #[serde(default, alias = "family_history_with_overweight")]
    pub family_history_overweight: Option<FlagAnswer>,
    /// Weekly physical activity.
    #[serde(default)]
    pub faf: Option<f64>,
    /// Snacking frequency.
    #[serde(default)]
    pub caec: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ACCEPTED: &'static [&'static str] = &["Male", "Female"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }

    /// Numeric code used by the training schema.
    pub fn code(&self) -> f64 {
        match self {
            Gender::Male => 1.0,
            Gender::Female => 0.0,
        }
    }
}

impl FromStr for Gender {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Male" => Ok(Gender::Male),
            "Female" => Ok(Gender::Female),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Ordinal frequency scale shared by the alcohol and snacking questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Frequency {
    No,
    Sometimes,
    Frequently,
    Always,
}

impl Frequency {
    pub const ACCEPTED: &'static [&'static str] = &["no", "Sometimes", "Frequently", "Always"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::No => "no",
            Frequency::Sometimes => "Sometimes",
            Frequency::Frequently => "Frequently",
            Frequency::Always => "Always",
        }
    }

    /// Numeric code used by the training schema.
    pub fn code(&self) -> f64 {
        match self {
            Frequency::No => 0.0,
            Frequency::Sometimes => 1.0,
            Frequency::Frequently => 2.0,
            Frequency::Always => 3.0,
        }
    }
}

impl FromStr for Frequency {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "no" => Ok(Frequency::No),
            "Sometimes" => Ok(Frequency::Sometimes),
            "Frequently" => Ok(Frequency::Frequently),
            "Always" => Ok(Frequency::Always),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A fully validated survey response.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurveyResponse {
    pub age: u8,
    pub gender: Gender,
    pub weight: f64,
    pub high_calorie_food: bool,
    pub vegetable_frequency: f64,
    pub monitors_calories: bool,
    pub alcohol: Frequency,
    pub water_intake: f64,
    pub family_history_overweight: bool,
    pub physical_activity: f64,
    pub snacking: Frequency,
}

impl TryFrom<&RawAnswers> for SurveyResponse {
    type Error = ValidationError;

    /// Validates fields in feature order and stops at the first failure.
    fn try_from(raw: &RawAnswers) -> Result<Self, Self::Error> {
        Ok(Self {
            age: whole_number(raw.age, "age", AGE_RANGE)?,
            gender: choice(raw.gender.as_deref(), "gender", Gender::ACCEPTED)?,
            weight: ranged(raw.weight, "weight", WEIGHT_RANGE)?,
            alcohol: choice(raw.calc.as_deref(), "calc", Frequency::ACCEPTED)?,
            high_calorie_food: flag(raw.favc.as_ref(), "favc")?,
            vegetable_frequency: ranged(raw.fcvc, "fcvc", VEGETABLE_RANGE)?,
            monitors_calories: flag(raw.scc.as_ref(), "scc")?,
            water_intake: ranged(raw.ch2o, "ch2o", WATER_RANGE)?,
            family_history_overweight: flag(
                raw.family_history_overweight.as_ref(),
                "family_history_overweight",
            )?,
            physical_activity: ranged(raw.faf, "faf", ACTIVITY_RANGE)?,
            snacking: choice(raw.caec.as_deref(), "caec", Frequency::ACCEPTED)?,
        })
    }
}

fn ranged(
    value: Option<f64>,
    field: &'static str,
    range: RangeInclusive<f64>,
) -> Result<f64, ValidationError> {
    let value = value.ok_or_else(|| ValidationError::missing(field))?;
    // NaN fails `contains`, infinities fall outside every bound.
    if !range.contains(&value) {
        return Err(ValidationError::out_of_range(
            field,
            *range.start(),
            *range.end(),
            value,
        ));
    }
    Ok(value)
}

fn whole_number(
    value: Option<f64>,
    field: &'static str,
    range: RangeInclusive<f64>,
) -> Result<u8, ValidationError> {
    let value = ranged(value, field, range)?;
    if value.fract() != 0.0 {
        return Err(ValidationError::NotWholeNumber {
            field,
            actual: value,
        });
    }
    Ok(value as u8)
}

fn choice<T: FromStr>(
    value: Option<&str>,
    field: &'static str,
    accepted: &[&str],
) -> Result<T, ValidationError> {
    let value = value.ok_or_else(|| ValidationError::missing(field))?;
    value
        .parse()
        .map_err(|_| ValidationError::unrecognized(field, value, accepted))
}

fn flag(value: Option<&FlagAnswer>, field: &'static str) -> Result<bool, ValidationError> {
    match value {
        None => Err(ValidationError::missing(field)),
        Some(FlagAnswer::Bool(b)) => Ok(*b),
        Some(FlagAnswer::Text(text)) => match text.as_str() {
            "yes" => Ok(true),
            "no" => Ok(false),
            other => Err(ValidationError::unrecognized(field, other, &["yes", "no"])),
        },
    }
}
