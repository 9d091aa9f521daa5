use std::{
    collections::{BTreeSet, HashMap},
    path::Path,
    sync::LazyLock,
};

use log::debug;

use crate::{CatalogError, Equipment, Exercise, ExerciseID, ExerciseType, Muscle};

/// Immutable exercise lookup table.
///
/// Keeps the original record order, which the shortlist relies on for stable tie-breaking.
#[derive(Debug, Clone)]
pub struct Catalog {
    exercises: Vec<Exercise>,
    index: HashMap<ExerciseID, usize>,
}

impl Catalog {
    pub fn new(exercises: Vec<Exercise>) -> Result<Self, CatalogError> {
        if exercises.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut index = HashMap::with_capacity(exercises.len());
        for (position, exercise) in exercises.iter().enumerate() {
            if index.insert(exercise.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateId(exercise.id.clone()));
            }
        }
        Ok(Self { exercises, index })
    }

    /// The catalog compiled into the binary, built on first use.
    #[must_use]
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Self::new(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        debug!("loading catalog from {}", path.display());
        Self::from_json(&std::fs::read_to_string(path)?)
    }

    #[must_use]
    pub fn get(&self, id: &ExerciseID) -> Option<&Exercise> {
        self.index.get(id).map(|position| &self.exercises[*position])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Exercise> {
        self.exercises.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    /// Looks up `ids` in order, skipping unknown ones.
    #[must_use]
    pub fn resolve(&self, ids: &[ExerciseID]) -> Vec<&Exercise> {
        ids.iter().filter_map(|id| self.get(id)).collect()
    }

    #[must_use]
    pub fn muscles(&self) -> BTreeSet<&Muscle> {
        self.exercises
            .iter()
            .flat_map(|e| e.primary_muscles.iter())
            .collect()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Exercise;
    type IntoIter = std::slice::Iter<'a, Exercise>;

    fn into_iter(self) -> Self::IntoIter {
        self.exercises.iter()
    }
}

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| {
    let exercises = BASE_EXERCISES
        .iter()
        .flat_map(|base| {
            std::iter::once(Exercise::from(base)).chain(base.variants.iter().map(|variant| {
                Exercise {
                    id: variant.id.into(),
                    name: variant.name.to_string(),
                    external_link: exrx_link(variant.path),
                    primary_muscles: muscles(variant.muscles.unwrap_or(base.muscles)),
                    function: variant.function.unwrap_or(base.function).to_string(),
                    equipment: variant.equipment.unwrap_or(base.equipment).to_vec(),
                    kind: variant.kind.unwrap_or(base.kind),
                    enriched: false,
                    notes: None,
                }
            }))
        })
        .collect::<Vec<_>>();
    let index = exercises
        .iter()
        .enumerate()
        .map(|(position, e)| (e.id.clone(), position))
        .collect();
    Catalog { exercises, index }
});

struct BaseExercise {
    id: &'static str,
    name: &'static str,
    path: &'static str,
    muscles: &'static [&'static str],
    function: &'static str,
    equipment: &'static [Equipment],
    kind: ExerciseType,
    variants: &'static [ExerciseVariant],
}

impl From<&BaseExercise> for Exercise {
    fn from(value: &BaseExercise) -> Self {
        Exercise {
            id: value.id.into(),
            name: value.name.to_string(),
            external_link: exrx_link(value.path),
            primary_muscles: muscles(value.muscles),
            function: value.function.to_string(),
            equipment: value.equipment.to_vec(),
            kind: value.kind,
            enriched: false,
            notes: None,
        }
    }
}

struct ExerciseVariant {
    id: &'static str,
    name: &'static str,
    path: &'static str,
    muscles: Option<&'static [&'static str]>,
    function: Option<&'static str>,
    equipment: Option<&'static [Equipment]>,
    kind: Option<ExerciseType>,
}

impl ExerciseVariant {
    const fn default() -> Self {
        Self {
            id: "",
            name: "",
            path: "",
            muscles: None,
            function: None,
            equipment: None,
            kind: None,
        }
    }
}

fn exrx_link(path: &str) -> String {
    format!("https://exrx.net/{path}")
}

fn muscles(names: &[&str]) -> Vec<Muscle> {
    names.iter().map(|m| Muscle::new(m)).collect()
}

static BASE_EXERCISES: [BaseExercise; 34] = [
    BaseExercise {
        id: "exrx:BBBenchPress",
        name: "Barbell Bench Press",
        path: "WeightExercises/PectoralSternal/BBBenchPress",
        muscles: &["chest", "front_delts", "triceps"],
        function: "horizontal_push",
        equipment: &[Equipment::Barbell],
        kind: ExerciseType::Compound,
        variants: &[
            ExerciseVariant {
                id: "exrx:DBBenchPress",
                name: "Dumbbell Bench Press",
                path: "WeightExercises/PectoralSternal/DBBenchPress",
                equipment: Some(&[Equipment::Dumbbell]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "exrx:LVChestPress",
                name: "Lever Chest Press",
                path: "WeightExercises/PectoralSternal/LVChestPress",
                equipment: Some(&[Equipment::Machines]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "exrx:CBStandingChestPress",
                name: "Cable Standing Chest Press",
                path: "WeightExercises/PectoralSternal/CBStandingChestPress",
                equipment: Some(&[Equipment::Cables]),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        id: "exrx:BBInclineBenchPress",
        name: "Barbell Incline Bench Press",
        path: "WeightExercises/PectoralClavicular/BBInclineBenchPress",
        muscles: &["chest", "front_delts", "triceps"],
        function: "incline_push",
        equipment: &[Equipment::Barbell],
        kind: ExerciseType::Compound,
        variants: &[ExerciseVariant {
            id: "exrx:DBInclineBenchPress",
            name: "Dumbbell Incline Bench Press",
            path: "WeightExercises/PectoralClavicular/DBInclineBenchPress",
            equipment: Some(&[Equipment::Dumbbell]),
            ..ExerciseVariant::default()
        }],
    },
    BaseExercise {
        id: "exrx:BWPushUp",
        name: "Push-up",
        path: "WeightExercises/PectoralSternal/BWPushup",
        muscles: &["chest", "front_delts", "triceps"],
        function: "horizontal_push",
        equipment: &[Equipment::Bodyweight],
        kind: ExerciseType::Compound,
        variants: &[ExerciseVariant {
            id: "exrx:BWDeclinePushUp",
            name: "Decline Push-up",
            path: "WeightExercises/PectoralClavicular/BWDeclinePushup",
            ..ExerciseVariant::default()
        }],
    },
    BaseExercise {
        id: "exrx:DBFly",
        name: "Dumbbell Fly",
        path: "WeightExercises/PectoralSternal/DBFly",
        muscles: &["chest"],
        function: "chest_fly",
        equipment: &[Equipment::Dumbbell],
        kind: ExerciseType::Isolation,
        variants: &[
            ExerciseVariant {
                id: "exrx:CBCrossover",
                name: "Cable Crossover",
                path: "WeightExercises/PectoralSternal/CBStandingFly",
                equipment: Some(&[Equipment::Cables]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "exrx:LVPecDeckFly",
                name: "Lever Pec Deck Fly",
                path: "WeightExercises/PectoralSternal/LVPecDeckFly",
                equipment: Some(&[Equipment::Machines]),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        id: "exrx:BWChestDip",
        name: "Chest Dip",
        path: "WeightExercises/PectoralSternal/BWChestDip",
        muscles: &["chest", "triceps", "front_delts"],
        function: "dip",
        equipment: &[Equipment::Bodyweight],
        kind: ExerciseType::Compound,
        variants: &[],
    },
    BaseExercise {
        id: "exrx:BBMilitaryPress",
        name: "Barbell Military Press",
        path: "WeightExercises/DeltoidAnterior/BBMilitaryPress",
        muscles: &["front_delts", "side_delts", "triceps"],
        function: "vertical_push",
        equipment: &[Equipment::Barbell],
        kind: ExerciseType::Compound,
        variants: &[
            ExerciseVariant {
                id: "exrx:DBShoulderPress",
                name: "Dumbbell Shoulder Press",
                path: "WeightExercises/DeltoidAnterior/DBShoulderPress",
                equipment: Some(&[Equipment::Dumbbell]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "exrx:LVShoulderPress",
                name: "Lever Shoulder Press",
                path: "WeightExercises/DeltoidAnterior/LVShoulderPress",
                equipment: Some(&[Equipment::Machines]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "exrx:KBPress",
                name: "Kettlebell Press",
                path: "WeightExercises/DeltoidAnterior/KBPress",
                equipment: Some(&[Equipment::Kettlebells]),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        id: "exrx:DBLateralRaise",
        name: "Dumbbell Lateral Raise",
        path: "WeightExercises/DeltoidLateral/DBLateralRaise",
        muscles: &["side_delts"],
        function: "shoulder_abduction",
        equipment: &[Equipment::Dumbbell],
        kind: ExerciseType::Isolation,
        variants: &[
            ExerciseVariant {
                id: "exrx:CBLateralRaise",
                name: "Cable Lateral Raise",
                path: "WeightExercises/DeltoidLateral/CBLateralRaise",
                equipment: Some(&[Equipment::Cables]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "exrx:LVLateralRaise",
                name: "Lever Lateral Raise",
                path: "WeightExercises/DeltoidLateral/LVLateralRaise",
                equipment: Some(&[Equipment::Machines]),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        id: "exrx:DBRearLateralRaise",
        name: "Dumbbell Rear Lateral Raise",
        path: "WeightExercises/DeltoidPosterior/DBRearLateralRaise",
        muscles: &["rear_delts"],
        function: "rear_fly",
        equipment: &[Equipment::Dumbbell],
        kind: ExerciseType::Isolation,
        variants: &[ExerciseVariant {
            id: "exrx:LVRearDeltFly",
            name: "Lever Rear Delt Fly",
            path: "WeightExercises/DeltoidPosterior/LVSeatedRearDeltFly",
            equipment: Some(&[Equipment::Machines]),
            ..ExerciseVariant::default()
        }],
    },
    BaseExercise {
        id: "exrx:CBFacePull",
        name: "Cable Face Pull",
        path: "WeightExercises/DeltoidPosterior/CBStandingRearDeltRowRope",
        muscles: &["rear_delts", "upper_back"],
        function: "face_pull",
        equipment: &[Equipment::Cables],
        kind: ExerciseType::Compound,
        variants: &[],
    },
    BaseExercise {
        id: "exrx:BBBentOverRow",
        name: "Barbell Bent-over Row",
        path: "WeightExercises/BackGeneral/BBBentOverRow",
        muscles: &["lats", "upper_back", "rear_delts"],
        function: "horizontal_pull",
        equipment: &[Equipment::Barbell],
        kind: ExerciseType::Compound,
        variants: &[
            ExerciseVariant {
                id: "exrx:DBBentOverRow",
                name: "Dumbbell One Arm Row",
                path: "WeightExercises/BackGeneral/DBBentOverRow",
                equipment: Some(&[Equipment::Dumbbell]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "exrx:CBSeatedRow",
                name: "Cable Seated Row",
                path: "WeightExercises/BackGeneral/CBSeatedRow",
                equipment: Some(&[Equipment::Cables]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "exrx:LVSeatedRow",
                name: "Lever Seated Row",
                path: "WeightExercises/BackGeneral/LVSeatedRow",
                equipment: Some(&[Equipment::Machines]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "exrx:KBRow",
                name: "Kettlebell One Arm Row",
                path: "WeightExercises/BackGeneral/KBOneArmRow",
                equipment: Some(&[Equipment::Kettlebells]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "exrx:BWInvertedRow",
                name: "Inverted Row",
                path: "WeightExercises/BackGeneral/BWInvertedRow",
                equipment: Some(&[Equipment::Bodyweight]),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        id: "exrx:BWPullUp",
        name: "Pull-up",
        path: "WeightExercises/LatissimusDorsi/BWPullup",
        muscles: &["lats", "biceps", "upper_back"],
        function: "vertical_pull",
        equipment: &[Equipment::Bodyweight],
        kind: ExerciseType::Compound,
        variants: &[
            ExerciseVariant {
                id: "exrx:BWChinUp",
                name: "Chin-up",
                path: "WeightExercises/LatissimusDorsi/BWChinup",
                muscles: Some(&["lats", "biceps"]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "exrx:CBLatPulldown",
                name: "Cable Lat Pulldown",
                path: "WeightExercises/LatissimusDorsi/CBFrontPulldown",
                equipment: Some(&[Equipment::Cables]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "exrx:LVLatPulldown",
                name: "Lever Lat Pulldown",
                path: "WeightExercises/LatissimusDorsi/LVFrontPulldown",
                equipment: Some(&[Equipment::Machines]),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        id: "exrx:CBStraightArmPulldown",
        name: "Cable Straight-arm Pulldown",
        path: "WeightExercises/LatissimusDorsi/CBStraightArmPulldown",
        muscles: &["lats"],
        function: "shoulder_extension",
        equipment: &[Equipment::Cables],
        kind: ExerciseType::Isolation,
        variants: &[ExerciseVariant {
            id: "exrx:DBPullover",
            name: "Dumbbell Pullover",
            path: "WeightExercises/LatissimusDorsi/DBPullover",
            equipment: Some(&[Equipment::Dumbbell]),
            ..ExerciseVariant::default()
        }],
    },
    BaseExercise {
        id: "exrx:BBShrug",
        name: "Barbell Shrug",
        path: "WeightExercises/TrapeziusUpper/BBShrug",
        muscles: &["traps"],
        function: "shrug",
        equipment: &[Equipment::Barbell],
        kind: ExerciseType::Isolation,
        variants: &[
            ExerciseVariant {
                id: "exrx:DBShrug",
                name: "Dumbbell Shrug",
                path: "WeightExercises/TrapeziusUpper/DBShrug",
                equipment: Some(&[Equipment::Dumbbell]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "exrx:LVShrug",
                name: "Lever Shrug",
                path: "WeightExercises/TrapeziusUpper/LVShrug",
                equipment: Some(&[Equipment::Machines]),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        id: "exrx:BBCurl",
        name: "Barbell Curl",
        path: "WeightExercises/Biceps/BBCurl",
        muscles: &["biceps"],
        function: "elbow_flexion",
        equipment: &[Equipment::Barbell],
        kind: ExerciseType::Isolation,
        variants: &[
            ExerciseVariant {
                id: "exrx:DBCurl",
                name: "Dumbbell Curl",
                path: "WeightExercises/Biceps/DBCurl",
                equipment: Some(&[Equipment::Dumbbell]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "exrx:DBHammerCurl",
                name: "Dumbbell Hammer Curl",
                path: "WeightExercises/Brachioradialis/DBHammerCurl",
                muscles: Some(&["biceps", "forearms"]),
                equipment: Some(&[Equipment::Dumbbell]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "exrx:CBCurl",
                name: "Cable Curl",
                path: "WeightExercises/Biceps/CBCurl",
                equipment: Some(&[Equipment::Cables]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "exrx:LVPreacherCurl",
                name: "Lever Preacher Curl",
                path: "WeightExercises/Biceps/LVPreacherCurl",
                equipment: Some(&[Equipment::Machines]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "exrx:KBCurl",
                name: "Kettlebell Curl",
                path: "WeightExercises/Biceps/KBCurl",
                equipment: Some(&[Equipment::Kettlebells]),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        id: "exrx:BBLyingTricepsExtension",
        name: "Barbell Lying Triceps Extension",
        path: "WeightExercises/Triceps/BBLyingTriExt",
        muscles: &["triceps"],
        function: "elbow_extension",
        equipment: &[Equipment::Barbell],
        kind: ExerciseType::Isolation,
        variants: &[
            ExerciseVariant {
                id: "exrx:DBOverheadTricepsExtension",
                name: "Dumbbell Overhead Triceps Extension",
                path: "WeightExercises/Triceps/DBSeatedTriExt",
                equipment: Some(&[Equipment::Dumbbell]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "exrx:CBPushdown",
                name: "Cable Pushdown",
                path: "WeightExercises/Triceps/CBPushdown",
                equipment: Some(&[Equipment::Cables]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "exrx:LVTricepsExtension",
                name: "Lever Triceps Extension",
                path: "WeightExercises/Triceps/LVTriExt",
                equipment: Some(&[Equipment::Machines]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "exrx:BWBenchDip",
                name: "Bench Dip",
                path: "WeightExercises/Triceps/BWBenchDip",
                equipment: Some(&[Equipment::Bodyweight]),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        id: "exrx:BBCloseGripBenchPress",
        name: "Barbell Close Grip Bench Press",
        path: "WeightExercises/Triceps/BBCloseGripBenchPress",
        muscles: &["triceps", "chest", "front_delts"],
        function: "horizontal_push",
        equipment: &[Equipment::Barbell],
        kind: ExerciseType::Compound,
        variants: &[],
    },
    BaseExercise {
        id: "exrx:BBWristCurl",
        name: "Barbell Wrist Curl",
        path: "WeightExercises/WristFlexors/BBWristCurl",
        muscles: &["forearms"],
        function: "wrist_flexion",
        equipment: &[Equipment::Barbell],
        kind: ExerciseType::Isolation,
        variants: &[ExerciseVariant {
            id: "exrx:DBWristCurl",
            name: "Dumbbell Wrist Curl",
            path: "WeightExercises/WristFlexors/DBWristCurl",
            equipment: Some(&[Equipment::Dumbbell]),
            ..ExerciseVariant::default()
        }],
    },
    BaseExercise {
        id: "exrx:BBFullSquat",
        name: "Barbell Full Squat",
        path: "WeightExercises/Quadriceps/BBFullSquat",
        muscles: &["quads", "glutes", "adductors"],
        function: "squat",
        equipment: &[Equipment::Barbell],
        kind: ExerciseType::Compound,
        variants: &[
            ExerciseVariant {
                id: "exrx:BBFrontSquat",
                name: "Barbell Front Squat",
                path: "WeightExercises/Quadriceps/BBFrontSquat",
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "exrx:DBGobletSquat",
                name: "Dumbbell Goblet Squat",
                path: "WeightExercises/Quadriceps/DBGobletSquat",
                muscles: Some(&["quads", "glutes"]),
                equipment: Some(&[Equipment::Dumbbell]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "exrx:KBGobletSquat",
                name: "Kettlebell Goblet Squat",
                path: "WeightExercises/Quadriceps/KBGobletSquat",
                muscles: Some(&["quads", "glutes"]),
                equipment: Some(&[Equipment::Kettlebells]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "exrx:LVHackSquat",
                name: "Lever Hack Squat",
                path: "WeightExercises/Quadriceps/LVHackSquat",
                muscles: Some(&["quads", "glutes"]),
                equipment: Some(&[Equipment::Machines]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "exrx:BWSquat",
                name: "Bodyweight Squat",
                path: "WeightExercises/Quadriceps/BWSquat",
                muscles: Some(&["quads", "glutes"]),
                equipment: Some(&[Equipment::Bodyweight]),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        id: "exrx:SLLegPress",
        name: "Sled Leg Press",
        path: "WeightExercises/Quadriceps/SL45LegPress",
        muscles: &["quads", "glutes"],
        function: "leg_press",
        equipment: &[Equipment::Machines],
        kind: ExerciseType::Compound,
        variants: &[],
    },
    BaseExercise {
        id: "exrx:LVLegExtension",
        name: "Lever Leg Extension",
        path: "WeightExercises/Quadriceps/LVLegExtension",
        muscles: &["quads"],
        function: "knee_extension",
        equipment: &[Equipment::Machines],
        kind: ExerciseType::Isolation,
        variants: &[],
    },
    BaseExercise {
        id: "exrx:BBLunge",
        name: "Barbell Lunge",
        path: "WeightExercises/Quadriceps/BBLunge",
        muscles: &["quads", "glutes"],
        function: "lunge",
        equipment: &[Equipment::Barbell],
        kind: ExerciseType::Compound,
        variants: &[
            ExerciseVariant {
                id: "exrx:DBLunge",
                name: "Dumbbell Lunge",
                path: "WeightExercises/Quadriceps/DBLunge",
                equipment: Some(&[Equipment::Dumbbell]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "exrx:DBSplitSquat",
                name: "Dumbbell Bulgarian Split Squat",
                path: "WeightExercises/Quadriceps/DBSingleLegSplitSquat",
                equipment: Some(&[Equipment::Dumbbell]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "exrx:BWWalkingLunge",
                name: "Walking Lunge",
                path: "WeightExercises/Quadriceps/BWWalkingLunge",
                equipment: Some(&[Equipment::Bodyweight]),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        id: "exrx:BBDeadlift",
        name: "Barbell Deadlift",
        path: "WeightExercises/GluteusMaximus/BBDeadlift",
        muscles: &["glutes", "hamstrings", "lower_back"],
        function: "hinge",
        equipment: &[Equipment::Barbell],
        kind: ExerciseType::Compound,
        variants: &[
            ExerciseVariant {
                id: "exrx:BBRomanianDeadlift",
                name: "Barbell Romanian Deadlift",
                path: "WeightExercises/Hamstrings/BBRomanianDeadlift",
                muscles: Some(&["hamstrings", "glutes"]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "exrx:DBRomanianDeadlift",
                name: "Dumbbell Romanian Deadlift",
                path: "WeightExercises/Hamstrings/DBRomanianDeadlift",
                muscles: Some(&["hamstrings", "glutes"]),
                equipment: Some(&[Equipment::Dumbbell]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "exrx:KBDeadlift",
                name: "Kettlebell Deadlift",
                path: "WeightExercises/GluteusMaximus/KBDeadlift",
                equipment: Some(&[Equipment::Kettlebells]),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        id: "exrx:KBSwing",
        name: "Kettlebell Swing",
        path: "WeightExercises/GluteusMaximus/KBSwing",
        muscles: &["glutes", "hamstrings"],
        function: "hinge",
        equipment: &[Equipment::Kettlebells],
        kind: ExerciseType::Compound,
        variants: &[],
    },
    BaseExercise {
        id: "exrx:BBHipThrust",
        name: "Barbell Hip Thrust",
        path: "WeightExercises/GluteusMaximus/BBHipThrust",
        muscles: &["glutes"],
        function: "hip_extension",
        equipment: &[Equipment::Barbell],
        kind: ExerciseType::Isolation,
        variants: &[
            ExerciseVariant {
                id: "exrx:BWGluteBridge",
                name: "Glute Bridge",
                path: "WeightExercises/GluteusMaximus/BWHipBridge",
                equipment: Some(&[Equipment::Bodyweight]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "exrx:CBPullThrough",
                name: "Cable Pull-through",
                path: "WeightExercises/GluteusMaximus/CBPullThrough",
                equipment: Some(&[Equipment::Cables]),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        id: "exrx:LVLyingLegCurl",
        name: "Lever Lying Leg Curl",
        path: "WeightExercises/Hamstrings/LVLyingLegCurl",
        muscles: &["hamstrings"],
        function: "knee_flexion",
        equipment: &[Equipment::Machines],
        kind: ExerciseType::Isolation,
        variants: &[
            ExerciseVariant {
                id: "exrx:LVSeatedLegCurl",
                name: "Lever Seated Leg Curl",
                path: "WeightExercises/Hamstrings/LVSeatedLegCurl",
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "exrx:BWNordicCurl",
                name: "Nordic Hamstring Curl",
                path: "WeightExercises/Hamstrings/BWNordicCurl",
                equipment: Some(&[Equipment::Bodyweight]),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        id: "exrx:LVStandingCalfRaise",
        name: "Lever Standing Calf Raise",
        path: "WeightExercises/Gastrocnemius/LVStandingCalfRaise",
        muscles: &["calves"],
        function: "calf_raise",
        equipment: &[Equipment::Machines],
        kind: ExerciseType::Isolation,
        variants: &[
            ExerciseVariant {
                id: "exrx:DBCalfRaise",
                name: "Dumbbell Single Leg Calf Raise",
                path: "WeightExercises/Gastrocnemius/DBSingleLegCalfRaise",
                equipment: Some(&[Equipment::Dumbbell]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "exrx:BWCalfRaise",
                name: "Standing Calf Raise",
                path: "WeightExercises/Gastrocnemius/BWStandingCalfRaise",
                equipment: Some(&[Equipment::Bodyweight]),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        id: "exrx:LVHipAdduction",
        name: "Lever Hip Adduction",
        path: "WeightExercises/HipAdductors/LVHipAdduction",
        muscles: &["adductors"],
        function: "hip_adduction",
        equipment: &[Equipment::Machines],
        kind: ExerciseType::Isolation,
        variants: &[ExerciseVariant {
            id: "exrx:CBHipAdduction",
            name: "Cable Hip Adduction",
            path: "WeightExercises/HipAdductors/CBHipAdduction",
            equipment: Some(&[Equipment::Cables]),
            ..ExerciseVariant::default()
        }],
    },
    BaseExercise {
        id: "exrx:BWBackExtension",
        name: "Back Extension",
        path: "WeightExercises/ErectorSpinae/BWBackExtension",
        muscles: &["lower_back"],
        function: "spinal_extension",
        equipment: &[Equipment::Bodyweight],
        kind: ExerciseType::Isolation,
        variants: &[],
    },
    BaseExercise {
        id: "exrx:BWCrunch",
        name: "Crunch",
        path: "WeightExercises/RectusAbdominis/BWCrunch",
        muscles: &["abs"],
        function: "spinal_flexion",
        equipment: &[Equipment::Bodyweight],
        kind: ExerciseType::Isolation,
        variants: &[
            ExerciseVariant {
                id: "exrx:CBKneelingCrunch",
                name: "Cable Kneeling Crunch",
                path: "WeightExercises/RectusAbdominis/CBKneelingCrunch",
                equipment: Some(&[Equipment::Cables]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "exrx:LVCrunch",
                name: "Lever Crunch",
                path: "WeightExercises/RectusAbdominis/LVCrunch",
                equipment: Some(&[Equipment::Machines]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "exrx:BWHangingLegRaise",
                name: "Hanging Leg Raise",
                path: "WeightExercises/RectusAbdominis/BWHangingLegHipRaise",
                function: Some("hip_flexion"),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        id: "exrx:BWFrontPlank",
        name: "Front Plank",
        path: "WeightExercises/RectusAbdominis/BWFrontPlank",
        muscles: &["abs"],
        function: "anti_extension",
        equipment: &[Equipment::Bodyweight],
        kind: ExerciseType::Isolation,
        variants: &[ExerciseVariant {
            id: "exrx:BBRollout",
            name: "Barbell Rollout",
            path: "WeightExercises/RectusAbdominis/BBRollout",
            equipment: Some(&[Equipment::Barbell]),
            ..ExerciseVariant::default()
        }],
    },
    BaseExercise {
        id: "exrx:BWSidePlank",
        name: "Side Plank",
        path: "WeightExercises/Obliques/BWSideBridge",
        muscles: &["obliques"],
        function: "anti_lateral_flexion",
        equipment: &[Equipment::Bodyweight],
        kind: ExerciseType::Isolation,
        variants: &[ExerciseVariant {
            id: "exrx:DBSideBend",
            name: "Dumbbell Side Bend",
            path: "WeightExercises/Obliques/DBSideBend",
            function: Some("lateral_flexion"),
            equipment: Some(&[Equipment::Dumbbell]),
            ..ExerciseVariant::default()
        }],
    },
    BaseExercise {
        id: "exrx:CBWoodChop",
        name: "Cable Wood Chop",
        path: "WeightExercises/Obliques/CBStandingHighPulleyWoodChop",
        muscles: &["obliques", "abs"],
        function: "rotation",
        equipment: &[Equipment::Cables],
        kind: ExerciseType::Compound,
        variants: &[],
    },
    BaseExercise {
        id: "exrx:DBFarmersWalk",
        name: "Dumbbell Farmer's Walk",
        path: "WeightExercises/Forearms/DBFarmersWalk",
        muscles: &["forearms", "traps"],
        function: "carry",
        equipment: &[Equipment::Dumbbell],
        kind: ExerciseType::Compound,
        variants: &[ExerciseVariant {
            id: "exrx:KBFarmersWalk",
            name: "Kettlebell Farmer's Walk",
            path: "WeightExercises/Forearms/KBFarmersWalk",
            equipment: Some(&[Equipment::Kettlebells]),
            ..ExerciseVariant::default()
        }],
    },
    BaseExercise {
        id: "exrx:KBTurkishGetUp",
        name: "Kettlebell Turkish Get-up",
        path: "WeightExercises/Obliques/KBTurkishGetUp",
        muscles: &["front_delts", "abs", "glutes"],
        function: "get_up",
        equipment: &[Equipment::Kettlebells],
        kind: ExerciseType::Compound,
        variants: &[],
    },
];
