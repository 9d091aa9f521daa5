use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::{Exercise, ExerciseID, Muscle, PlanError};

pub const SOURCE_KEY: &str = "source";
pub const GENERATED_AT_KEY: &str = "generated_at";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupersetPair {
    pub a_exercise_id: ExerciseID,
    pub b_exercise_id: ExerciseID,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    pub day_index: usize,
    pub label: String,
    pub exercises: Vec<Exercise>,
    pub sets: u32,
    pub reps: u32,
    pub rest_seconds: u32,
    #[serde(default)]
    pub supersets: Vec<SupersetPair>,
}

impl DayPlan {
    #[must_use]
    pub fn contains(&self, id: &ExerciseID) -> bool {
        self.exercises.iter().any(|e| e.id == *id)
    }

    /// Ids occurring more than once, sorted.
    #[must_use]
    pub fn duplicate_ids(&self) -> Vec<&ExerciseID> {
        let mut seen = HashSet::new();
        let mut duplicates = self
            .exercises
            .iter()
            .filter(|e| !seen.insert(&e.id))
            .map(|e| &e.id)
            .collect::<Vec<_>>();
        duplicates.sort();
        duplicates.dedup();
        duplicates
    }

    #[must_use]
    pub fn muscles(&self) -> Vec<&Muscle> {
        let mut muscles = self
            .exercises
            .iter()
            .flat_map(|e| e.primary_muscles.iter())
            .collect::<Vec<_>>();
        muscles.sort();
        muscles.dedup();
        muscles
    }

    fn deduplicate(&mut self) {
        let mut seen = HashSet::new();
        self.exercises.retain(|e| seen.insert(e.id.clone()));
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum PlanSource {
    Local,
    Llm,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    pub days: Vec<DayPlan>,
    #[serde(default)]
    pub weekly_focus: BTreeMap<Muscle, u32>,
    #[serde(default)]
    pub meta: BTreeMap<String, String>,
}

impl Plan {
    #[must_use]
    pub fn new(days: Vec<DayPlan>, source: PlanSource) -> Self {
        let mut plan = Self {
            days,
            weekly_focus: BTreeMap::new(),
            meta: BTreeMap::new(),
        };
        plan.refresh_weekly_focus();
        plan.with_source(source)
    }

    /// Sets the source and adds a generation timestamp unless one is present.
    #[must_use]
    pub fn with_source(mut self, source: PlanSource) -> Self {
        self.set_source(source);
        self.meta
            .entry(GENERATED_AT_KEY.to_string())
            .or_insert_with(|| chrono::Local::now().to_rfc3339());
        self
    }

    #[must_use]
    pub fn source(&self) -> Option<PlanSource> {
        self.meta.get(SOURCE_KEY).and_then(|s| s.parse().ok())
    }

    pub fn set_source(&mut self, source: PlanSource) {
        self.meta.insert(SOURCE_KEY.to_string(), source.to_string());
    }

    #[must_use]
    pub fn exercise_count(&self) -> usize {
        self.days.iter().map(|d| d.exercises.len()).sum()
    }

    pub fn refresh_weekly_focus(&mut self) {
        self.weekly_focus = weekly_focus(&self.days);
    }

    /// Drops repeated exercise ids within each day, keeping the first occurrence.
    #[must_use]
    pub fn deduplicated(mut self) -> Self {
        for day in &mut self.days {
            day.deduplicate();
        }
        self.refresh_weekly_focus();
        self
    }

    pub(crate) fn day(&self, index: usize) -> Result<&DayPlan, PlanError> {
        self.days.get(index).ok_or(PlanError::DayOutOfRange {
            index,
            days: self.days.len(),
        })
    }
}

#[must_use]
pub fn weekly_focus(days: &[DayPlan]) -> BTreeMap<Muscle, u32> {
    let mut counts = BTreeMap::new();
    for muscle in days
        .iter()
        .flat_map(|d| d.exercises.iter())
        .flat_map(|e| e.primary_muscles.iter())
    {
        *counts.entry(muscle.clone()).or_insert(0) += 1;
    }
    counts
}

/// Returns a copy of `plan` with `target` in day `day_index` replaced by a similar candidate.
///
/// A candidate qualifies if it is neither the target nor already part of the day, and it shares
/// the target's movement function or at least one primary muscle. The first qualifying candidate
/// takes the target's position. If the target is not in the day or nothing qualifies, the day is
/// left unchanged.
pub fn swap_exercise(
    plan: &Plan,
    day_index: usize,
    target: &ExerciseID,
    candidates: &[&Exercise],
) -> Result<Plan, PlanError> {
    let day = plan.day(day_index)?;
    let mut result = plan.clone();

    let Some(position) = day.exercises.iter().position(|e| e.id == *target) else {
        return Ok(result);
    };
    let current = &day.exercises[position];

    if let Some(replacement) = candidates.iter().find(|c| {
        c.id != *target
            && !day.contains(&c.id)
            && (c.function == current.function || c.shares_muscle_with(current))
    }) {
        result.days[day_index].exercises[position] = (*replacement).clone();
    }
    result.refresh_weekly_focus();
    Ok(result)
}

/// Returns a copy of `plan` without the first occurrence of `target` in day `day_index`.
pub fn remove_exercise(
    plan: &Plan,
    day_index: usize,
    target: &ExerciseID,
) -> Result<Plan, PlanError> {
    let day = plan.day(day_index)?;
    let mut result = plan.clone();
    if let Some(position) = day.exercises.iter().position(|e| e.id == *target) {
        result.days[day_index].exercises.remove(position);
    }
    result.refresh_weekly_focus();
    Ok(result)
}
