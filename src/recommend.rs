//! Daily portion recommendations.
//!
//! Pure functions of the pet profile.  No state, recomputed on every query.
//!
//! ```text
//!   food  = round(weight * 35 * age_factor * diet_factor)   g/day
//!   water = max(450, round(weight * 60))                     mL/day
//! ```

use serde::Serialize;

use crate::profile::{Diet, PetProfile};

/// Grams of food per kg of body weight per day.
const FOOD_G_PER_KG: f64 = 35.0;
/// Millilitres of water per kg of body weight per day.
const WATER_ML_PER_KG: f64 = 60.0;
/// Default floor for the daily water recommendation.
pub const MIN_DAILY_WATER_ML: u32 = 450;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub food_g: u32,
    pub water_ml: u32,
}

impl Recommendation {
    pub fn for_profile(profile: &PetProfile, min_water_ml: u32) -> Self {
        Self {
            food_g: recommended_food(profile.weight_kg, profile.age_years, profile.diet),
            water_ml: recommended_water_with_floor(profile.weight_kg, min_water_ml),
        }
    }
}

/// Puppies eat more, seniors less.
fn age_factor(age_years: f64) -> f64 {
    if age_years < 1.0 {
        1.25
    } else if age_years > 7.0 {
        0.9
    } else {
        1.0
    }
}

fn diet_factor(diet: Diet) -> f64 {
    match diet {
        Diet::HighEnergy => 1.15,
        Diet::Light => 0.88,
        Diet::Standard | Diet::Hypoallergenic => 1.0,
    }
}

/// Recommended food in grams per day.
pub fn recommended_food(weight_kg: f64, age_years: f64, diet: Diet) -> u32 {
    let base = sanitize(weight_kg) * FOOD_G_PER_KG;
    (base * age_factor(sanitize(age_years)) * diet_factor(diet)).round() as u32
}

/// Recommended water in millilitres per day, with the default 450 mL floor.
pub fn recommended_water(weight_kg: f64) -> u32 {
    recommended_water_with_floor(weight_kg, MIN_DAILY_WATER_ML)
}

pub fn recommended_water_with_floor(weight_kg: f64, min_ml: u32) -> u32 {
    let base = (sanitize(weight_kg) * WATER_ML_PER_KG).round() as u32;
    base.max(min_ml)
}

/// Non-finite or negative input counts as 0.
fn sanitize(v: f64) -> f64 {
    if v.is_finite() { v.max(0.0) } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_adult() {
        assert_eq!(recommended_food(6.5, 3.0, Diet::Standard), 228);
        assert_eq!(recommended_water(6.5), 450);
    }

    #[test]
    fn puppy_high_energy() {
        assert_eq!(recommended_food(10.0, 0.5, Diet::HighEnergy), 503);
    }

    #[test]
    fn senior_light() {
        // 20 * 35 * 0.9 * 0.88 = 554.4
        assert_eq!(recommended_food(20.0, 9.0, Diet::Light), 554);
    }

    #[test]
    fn age_boundaries_are_exclusive() {
        assert_eq!(recommended_food(10.0, 1.0, Diet::Standard), 350);
        assert_eq!(recommended_food(10.0, 7.0, Diet::Standard), 350);
        assert_eq!(recommended_food(10.0, 7.5, Diet::Standard), 315);
    }

    #[test]
    fn hypoallergenic_has_no_factor() {
        assert_eq!(
            recommended_food(8.0, 4.0, Diet::Hypoallergenic),
            recommended_food(8.0, 4.0, Diet::Standard)
        );
    }

    #[test]
    fn water_above_floor_scales_with_weight() {
        assert_eq!(recommended_water(12.0), 720);
        assert_eq!(recommended_water_with_floor(2.0, 300), 300);
    }

    #[test]
    fn malformed_input_never_negative() {
        assert_eq!(recommended_food(-5.0, -1.0, Diet::HighEnergy), 0);
        assert_eq!(recommended_food(f64::NAN, 3.0, Diet::Standard), 0);
        assert_eq!(recommended_water(-5.0), 450);
    }

    #[test]
    fn infinite_input_is_treated_as_zero() {
        assert_eq!(recommended_food(f64::INFINITY, 3.0, Diet::Standard), 0);
        assert_eq!(recommended_food(6.5, f64::INFINITY, Diet::Standard), 284);
        assert_eq!(recommended_water(f64::INFINITY), 450);
        assert_eq!(recommended_water_with_floor(f64::NEG_INFINITY, 300), 300);
    }

    #[test]
    fn recommendation_for_default_profile() {
        let r = Recommendation::for_profile(&PetProfile::default(), MIN_DAILY_WATER_ML);
        assert_eq!(r, Recommendation { food_g: 228, water_ml: 450 });
    }
}
