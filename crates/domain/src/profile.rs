use std::{
    collections::{BTreeMap, BTreeSet},
    ops::RangeInclusive,
    slice::Iter,
};

use serde::{Deserialize, Serialize};

use crate::{Equipment, ExerciseID, Muscle, Property};

pub const DAYS_PER_WEEK: RangeInclusive<u32> = 1..=6;
pub const SESSION_MINUTES: RangeInclusive<u32> = 30..=120;
pub const EXERCISES_PER_DAY: RangeInclusive<u32> = 3..=10;
pub const SETS: RangeInclusive<u32> = 2..=6;
pub const REPS: RangeInclusive<u32> = 3..=15;
pub const REST_SECONDS: RangeInclusive<u32> = 30..=240;

/// Constraints collected from the user for one generation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct Profile {
    pub goal: Goal,
    pub days_per_week: u32,
    pub session_minutes_cap: u32,
    pub max_exercises_per_day: u32,
    pub default_sets: u32,
    pub default_reps: u32,
    pub rest_seconds: u32,
    #[serde(default)]
    pub supersets_enabled: bool,
    #[serde(default)]
    pub progressive_overload: bool,
    #[serde(default)]
    pub allowed_equipment: BTreeSet<Equipment>,
    #[serde(default)]
    pub blacklisted_equipment: BTreeSet<Equipment>,
    /// Muscle to 0 or 1, where 1 marks the muscle as a priority.
    #[serde(default)]
    pub emphasis: BTreeMap<Muscle, u8>,
    #[serde(default)]
    pub blacklisted_muscles: BTreeSet<Muscle>,
    #[serde(default)]
    pub blacklisted_exercise_ids: BTreeSet<ExerciseID>,
}

impl Profile {
    pub fn validate(&self) -> Result<(), ProfileError> {
        check("days_per_week", self.days_per_week, DAYS_PER_WEEK)?;
        check(
            "session_minutes_cap",
            self.session_minutes_cap,
            SESSION_MINUTES,
        )?;
        check(
            "max_exercises_per_day",
            self.max_exercises_per_day,
            EXERCISES_PER_DAY,
        )?;
        check("default_sets", self.default_sets, SETS)?;
        check("default_reps", self.default_reps, REPS)?;
        check("rest_seconds", self.rest_seconds, REST_SECONDS)?;
        if let Some((muscle, value)) = self.emphasis.iter().find(|(_, v)| **v > 1) {
            return Err(ProfileError::InvalidEmphasis {
                muscle: muscle.clone(),
                value: *value,
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn emphasized_muscles(&self) -> BTreeSet<&Muscle> {
        self.emphasis
            .iter()
            .filter(|(_, v)| **v == 1)
            .map(|(m, _)| m)
            .collect()
    }

    #[must_use]
    pub fn is_emphasized(&self, muscle: &Muscle) -> bool {
        self.emphasis.get(muscle) == Some(&1)
    }

    #[must_use]
    pub fn emphasize(mut self, muscle: impl Into<Muscle>) -> Self {
        self.emphasis.insert(muscle.into(), 1);
        self
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            goal: Goal::Hypertrophy,
            days_per_week: 3,
            session_minutes_cap: 60,
            max_exercises_per_day: 5,
            default_sets: 3,
            default_reps: 10,
            rest_seconds: 90,
            supersets_enabled: false,
            progressive_overload: false,
            allowed_equipment: BTreeSet::new(),
            blacklisted_equipment: BTreeSet::new(),
            emphasis: BTreeMap::new(),
            blacklisted_muscles: BTreeSet::new(),
            blacklisted_exercise_ids: BTreeSet::new(),
        }
    }
}

fn check(field: &'static str, value: u32, range: RangeInclusive<u32>) -> Result<(), ProfileError> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(ProfileError::OutOfRange {
            field,
            value,
            min: *range.start(),
            max: *range.end(),
        })
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ProfileError {
    #[error("{field} must be between {min} and {max} ({value})")]
    OutOfRange {
        field: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },
    #[error("emphasis for {muscle} must be 0 or 1 ({value})")]
    InvalidEmphasis { muscle: Muscle, value: u8 },
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[derive(Serialize, Deserialize, strum::Display, strum::EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Goal {
    #[default]
    Hypertrophy,
    Strength,
    Hybrid,
}

impl Property for Goal {
    fn iter() -> Iter<'static, Goal> {
        static GOALS: [Goal; 3] = [Goal::Hypertrophy, Goal::Strength, Goal::Hybrid];
        GOALS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Goal::Hypertrophy => "Hypertrophy",
            Goal::Strength => "Strength",
            Goal::Hybrid => "Hybrid",
        }
    }
}
