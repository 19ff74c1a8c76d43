//! Pet profile store.
//!
//! A single profile, edited one field at a time through [`ProfileUpdate`].
//! Numeric fields are sanitised at this boundary so the recommendation
//! engine never sees a negative or NaN weight or age.

use core::fmt;
use core::str::FromStr;

use log::{info, warn};
use serde::Serialize;

use crate::error::Error;

/// Diet category selected for the pet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Diet {
    Standard,
    HighEnergy,
    Light,
    Hypoallergenic,
}

impl Diet {
    pub const ALL: [Diet; 4] = [Diet::Standard, Diet::HighEnergy, Diet::Light, Diet::Hypoallergenic];

    /// Label shown in the diet selector.
    pub fn label(self) -> &'static str {
        match self {
            Self::Standard => "Balanceada premium",
            Self::HighEnergy => "Alta energía",
            Self::Light => "Light",
            Self::Hypoallergenic => "Hipoalergénica",
        }
    }

    /// Snake-case key used in config files and commands.
    pub fn key(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::HighEnergy => "high_energy",
            Self::Light => "light",
            Self::Hypoallergenic => "hypoallergenic",
        }
    }
}

impl fmt::Display for Diet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Diet {
    type Err = Error;

    /// Accepts either the display label or the snake-case key.
    fn from_str(s: &str) -> Result<Self, Error> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|d| d.label() == s || d.key() == s)
            .ok_or(Error::InvalidInput("diet"))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PetProfile {
    pub name: String,
    /// Body weight in kg.
    pub weight_kg: f64,
    /// Age in years.
    pub age_years: f64,
    pub diet: Diet,
}

impl Default for PetProfile {
    fn default() -> Self {
        Self {
            name: "Luna".to_string(),
            weight_kg: 6.5,
            age_years: 3.0,
            diet: Diet::Standard,
        }
    }
}

/// One field replacement.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileUpdate {
    SetName(String),
    SetWeight(f64),
    SetAge(f64),
    SetDiet(Diet),
}

#[derive(Debug, Clone, Default)]
pub struct ProfileStore {
    profile: PetProfile,
}

impl ProfileStore {
    pub fn new(profile: PetProfile) -> Self {
        Self {
            profile: PetProfile {
                weight_kg: non_negative(profile.weight_kg, "weight"),
                age_years: non_negative(profile.age_years, "age"),
                ..profile
            },
        }
    }

    /// Replace one field.  Weight and age are clamped to a finite `>= 0`.
    pub fn apply(&mut self, update: ProfileUpdate) {
        match update {
            ProfileUpdate::SetName(name) => self.profile.name = name,
            ProfileUpdate::SetWeight(kg) => self.profile.weight_kg = non_negative(kg, "weight"),
            ProfileUpdate::SetAge(years) => self.profile.age_years = non_negative(years, "age"),
            ProfileUpdate::SetDiet(diet) => self.profile.diet = diet,
        }
        info!(
            "Profile: name='{}' weight={:.1}kg age={:.1}y diet={:?}",
            self.profile.name, self.profile.weight_kg, self.profile.age_years, self.profile.diet
        );
    }

    pub fn profile(&self) -> &PetProfile {
        &self.profile
    }
}

fn non_negative(value: f64, field: &str) -> f64 {
    if !value.is_finite() || value < 0.0 {
        warn!("Profile: {} {} out of range, clamped to 0", field, value);
        return 0.0;
    }
    value
}
