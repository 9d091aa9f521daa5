use std::slice::Iter;

use derive_more::{AsRef, Deref, Display};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: ExerciseID,
    pub name: String,
    #[serde(alias = "exrx_url")]
    pub external_link: String,
    pub primary_muscles: Vec<Muscle>,
    pub function: String,
    pub equipment: Vec<Equipment>,
    #[serde(rename = "type", default)]
    pub kind: ExerciseType,
    #[serde(default)]
    pub enriched: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Exercise {
    #[must_use]
    pub fn is_compound(&self) -> bool {
        self.kind == ExerciseType::Compound
    }

    #[must_use]
    pub fn hits(&self, muscle: &Muscle) -> bool {
        self.primary_muscles.contains(muscle)
    }

    #[must_use]
    pub fn shares_muscle_with(&self, other: &Exercise) -> bool {
        self.primary_muscles.iter().any(|m| other.hits(m))
    }

    #[must_use]
    pub fn uses_any(&self, equipment: &[Equipment]) -> bool {
        self.equipment.iter().any(|e| equipment.contains(e))
    }
}

#[derive(Deref, Display, Debug, Default, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExerciseID(String);

impl ExerciseID {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ExerciseID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ExerciseID {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Muscle names are compared case-insensitively, so they are stored in lower case.
#[derive(AsRef, Display, Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Muscle(String);

impl Muscle {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self(name.trim().to_lowercase())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Muscle {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Muscle {
    fn from(value: String) -> Self {
        Self::new(&value)
    }
}

impl From<Muscle> for String {
    fn from(value: Muscle) -> Self {
        value.0
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[derive(Serialize, Deserialize, strum::Display, strum::EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Equipment {
    Barbell,
    Dumbbell,
    Machines,
    Cables,
    Kettlebells,
    Bodyweight,
}

impl Property for Equipment {
    fn iter() -> Iter<'static, Equipment> {
        static EQUIPMENT: [Equipment; 6] = [
            Equipment::Barbell,
            Equipment::Dumbbell,
            Equipment::Machines,
            Equipment::Cables,
            Equipment::Kettlebells,
            Equipment::Bodyweight,
        ];
        EQUIPMENT.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Equipment::Barbell => "Barbell",
            Equipment::Dumbbell => "Dumbbell",
            Equipment::Machines => "Machines",
            Equipment::Cables => "Cables",
            Equipment::Kettlebells => "Kettlebells",
            Equipment::Bodyweight => "Bodyweight",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[derive(Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ExerciseType {
    Compound,
    Isolation,
    #[default]
    Unknown,
}

impl Property for ExerciseType {
    fn iter() -> Iter<'static, ExerciseType> {
        static TYPES: [ExerciseType; 3] = [
            ExerciseType::Compound,
            ExerciseType::Isolation,
            ExerciseType::Unknown,
        ];
        TYPES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            ExerciseType::Compound => "Compound",
            ExerciseType::Isolation => "Isolation",
            ExerciseType::Unknown => "Unknown",
        }
    }
}

pub trait Property: Clone + Copy + Sized {
    fn iter() -> Iter<'static, Self>;
    fn name(self) -> &'static str;
}

/// Turns identifiers like `front_delts` or `horizontal_push` into display text.
#[must_use]
pub fn pretty(identifier: &str) -> String {
    identifier
        .split(['_', '-', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::str::FromStr;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn exercise(id: &str, muscles: &[&str]) -> Exercise {
        Exercise {
            id: id.into(),
            name: id.to_string(),
            external_link: String::new(),
            primary_muscles: muscles.iter().map(|m| Muscle::new(m)).collect(),
            function: "horizontal_push".to_string(),
            equipment: vec![Equipment::Barbell],
            kind: ExerciseType::Compound,
            enriched: false,
            notes: None,
        }
    }

    #[rstest]
    #[case("chest", "chest")]
    #[case("Front_Delts", "front_delts")]
    #[case("  QUADS ", "quads")]
    fn test_muscle_new(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(Muscle::new(name).as_str(), expected);
    }

    #[rstest]
    #[case("front_delts", "Front Delts")]
    #[case("horizontal_push", "Horizontal Push")]
    #[case("full-body", "Full Body")]
    #[case("abs", "Abs")]
    #[case("", "")]
    fn test_pretty(#[case] identifier: &str, #[case] expected: &str) {
        assert_eq!(pretty(identifier), expected);
    }

    #[test]
    fn test_equipment_name() {
        let mut names = HashSet::new();

        for equipment in Equipment::iter() {
            let name = equipment.name();

            assert!(!name.is_empty());
            assert!(!names.contains(name));

            names.insert(name);
        }
    }

    #[rstest]
    #[case("barbell", Equipment::Barbell)]
    #[case("Cables", Equipment::Cables)]
    #[case("BODYWEIGHT", Equipment::Bodyweight)]
    fn test_equipment_from_str(#[case] value: &str, #[case] expected: Equipment) {
        assert_eq!(Equipment::from_str(value), Ok(expected));
    }

    #[test]
    fn test_exercise_type_name() {
        let mut names = HashSet::new();

        for kind in ExerciseType::iter() {
            assert!(names.insert(kind.name()));
        }
    }

    #[test]
    fn test_exercise_shares_muscle_with() {
        let bench = exercise("a", &["chest", "triceps"]);
        let dip = exercise("b", &["Triceps"]);
        let squat = exercise("c", &["quads"]);

        assert!(bench.shares_muscle_with(&dip));
        assert!(!bench.shares_muscle_with(&squat));
    }

    #[test]
    fn test_exercise_deserialize() {
        let json = r#"{
            "id": "exrx:BBBenchPress",
            "name": "Barbell Bench Press",
            "exrx_url": "https://exrx.net/WeightExercises/PectoralSternal/BBBenchPress",
            "primary_muscles": ["Chest", "front_delts", "triceps"],
            "function": "horizontal_push",
            "equipment": ["barbell"],
            "type": "compound",
            "enriched": false
        }"#;

        let exercise: Exercise = serde_json::from_str(json).unwrap();

        assert_eq!(exercise.id, ExerciseID::from("exrx:BBBenchPress"));
        assert_eq!(
            exercise.external_link,
            "https://exrx.net/WeightExercises/PectoralSternal/BBBenchPress"
        );
        assert_eq!(exercise.primary_muscles[0], Muscle::new("chest"));
        assert!(exercise.is_compound());
        assert_eq!(exercise.notes, None);
    }

    #[test]
    fn test_exercise_serialize() {
        let value = serde_json::to_value(exercise("a", &["chest"])).unwrap();

        assert_eq!(value["type"], "compound");
        assert_eq!(value["equipment"][0], "barbell");
        assert!(value.get("notes").is_none());
    }
}
