use serde::{Deserialize, Serialize};

use crate::{Plan, Profile};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(strum::Display, strum::EnumString)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueCode {
    DayCountMismatch,
    ExceedsMaxExercises,
    EquipmentBlocked,
    MuscleUndercovered,
    DuplicateExercise,
    SequencingImplausible,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub code: IssueCode,
    pub message: String,
}

impl Issue {
    #[must_use]
    pub fn new(code: IssueCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub ok: bool,
    #[serde(default)]
    pub issues: Vec<Issue>,
}

impl ValidationReport {
    #[must_use]
    pub fn from_issues(issues: Vec<Issue>) -> Self {
        Self {
            ok: issues.is_empty(),
            issues,
        }
    }
}

/// Checks the structural constraints of a plan. All checks are evaluated.
#[must_use]
pub fn validate_plan(profile: &Profile, plan: &Plan) -> ValidationReport {
    let mut issues = vec![];

    if plan.days.len() != profile.days_per_week as usize {
        issues.push(Issue::new(
            IssueCode::DayCountMismatch,
            "Day count does not match profile.",
        ));
    }

    for day in &plan.days {
        if day.exercises.len() > profile.max_exercises_per_day as usize {
            issues.push(Issue::new(
                IssueCode::ExceedsMaxExercises,
                format!("Day {} exceeds maximum exercises.", day.day_index),
            ));
        }
        let duplicates = day.duplicate_ids();
        if !duplicates.is_empty() {
            issues.push(Issue::new(
                IssueCode::DuplicateExercise,
                format!(
                    "Day {} has duplicate exercises: {}",
                    day.day_index,
                    duplicates
                        .iter()
                        .map(|id| id.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
            ));
        }
    }

    ValidationReport::from_issues(issues)
}
