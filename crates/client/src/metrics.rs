//! Body-mass index and basal metabolic rate.
//!
//! Pure formulas with no I/O. BMR uses the Mifflin-St Jeor equation.

use crate::error::{ClientError, ClientResult};
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sex {
    Male,
    Female,
}

impl FromStr for Sex {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" => Ok(Sex::Male),
            "female" | "f" => Ok(Sex::Female),
            other => Err(ClientError::InvalidInput(format!("unknown sex {other:?}"))),
        }
    }
}

fn require_positive(label: &str, value: f64) -> ClientResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ClientError::InvalidInput(format!(
            "{label} must be a positive number, got {value}"
        )))
    }
}

/// Body-mass index: weight in kilograms over height in metres squared.
pub fn bmi(weight_kg: f64, height_cm: f64) -> ClientResult<f64> {
    let weight = require_positive("weight", weight_kg)?;
    let height_m = require_positive("height", height_cm)? / 100.0;
    Ok(weight / (height_m * height_m))
}

/// Basal metabolic rate in kcal/day.
pub fn bmr(sex: Sex, weight_kg: f64, height_cm: f64, age_years: u32) -> ClientResult<f64> {
    let weight = require_positive("weight", weight_kg)?;
    let height = require_positive("height", height_cm)?;
    let base = 10.0 * weight + 6.25 * height - 5.0 * f64::from(age_years);
    Ok(match sex {
        Sex::Male => base + 5.0,
        Sex::Female => base - 161.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_profile() {
        let bmi = bmi(68.5, 165.2).unwrap();
        assert_eq!(format!("{bmi:.2}"), "25.10");

        let male = bmr(Sex::Male, 68.5, 165.2, 25).unwrap();
        assert!((male - 1597.5).abs() < 1e-9);

        let female = bmr(Sex::Female, 68.5, 165.2, 25).unwrap();
        assert!((female - 1431.5).abs() < 1e-9);
    }

    #[test]
    fn rejects_non_positive_measurements() {
        assert!(bmi(0.0, 170.0).is_err());
        assert!(bmi(70.0, -1.0).is_err());
        assert!(bmr(Sex::Male, f64::NAN, 170.0, 30).is_err());
    }

    #[test]
    fn parses_sex() {
        assert_eq!("Male".parse::<Sex>().unwrap(), Sex::Male);
        assert_eq!(" f ".parse::<Sex>().unwrap(), Sex::Female);
        assert!("x".parse::<Sex>().is_err());
    }
}
