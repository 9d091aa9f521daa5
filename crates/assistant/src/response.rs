//! Wire types of model responses.
//!
//! A response must match its schema exactly. Unlike the domain types, which also read
//! hand-edited plan files, these reject unknown properties and missing properties.

use gymplan_domain::{
    DayPlan, Equipment, Exercise, ExerciseType, Issue, IssueCode, Muscle, Plan, PlanSummary,
    SupersetPair, ValidationReport,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlanResponse {
    plan: WirePlan,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct WirePlan {
    days: Vec<WireDay>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct WireDay {
    day_index: usize,
    label: String,
    exercises: Vec<WireExercise>,
    sets: u32,
    reps: u32,
    rest_seconds: u32,
    supersets: Vec<WireSuperset>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct WireExercise {
    id: String,
    name: String,
    external_link: String,
    primary_muscles: Vec<Muscle>,
    function: String,
    equipment: Vec<Equipment>,
    #[serde(rename = "type")]
    kind: ExerciseType,
    enriched: bool,
    #[serde(deserialize_with = "Option::deserialize")]
    notes: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct WireSuperset {
    a_exercise_id: String,
    b_exercise_id: String,
}

impl From<PlanResponse> for Plan {
    fn from(response: PlanResponse) -> Self {
        let mut plan = Plan {
            days: response
                .plan
                .days
                .into_iter()
                .map(DayPlan::from)
                .collect(),
            ..Plan::default()
        };
        plan.refresh_weekly_focus();
        plan
    }
}

impl From<WireDay> for DayPlan {
    fn from(day: WireDay) -> Self {
        DayPlan {
            day_index: day.day_index,
            label: day.label,
            exercises: day.exercises.into_iter().map(Exercise::from).collect(),
            sets: day.sets,
            reps: day.reps,
            rest_seconds: day.rest_seconds,
            supersets: day
                .supersets
                .into_iter()
                .map(|pair| SupersetPair {
                    a_exercise_id: pair.a_exercise_id.into(),
                    b_exercise_id: pair.b_exercise_id.into(),
                })
                .collect(),
        }
    }
}

impl From<WireExercise> for Exercise {
    fn from(exercise: WireExercise) -> Self {
        Exercise {
            id: exercise.id.into(),
            name: exercise.name,
            external_link: exercise.external_link,
            primary_muscles: exercise.primary_muscles,
            function: exercise.function,
            equipment: exercise.equipment,
            kind: exercise.kind,
            enriched: exercise.enriched,
            notes: exercise.notes,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportResponse {
    #[allow(dead_code)]
    ok: bool,
    issues: Vec<WireIssue>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct WireIssue {
    code: IssueCode,
    message: String,
}

impl From<ReportResponse> for ValidationReport {
    /// `ok` is derived from the issues.
    fn from(response: ReportResponse) -> Self {
        ValidationReport::from_issues(
            response
                .issues
                .into_iter()
                .map(|issue| Issue::new(issue.code, issue.message))
                .collect(),
        )
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SummaryResponse {
    overall: String,
    day_summaries: Vec<String>,
}

impl From<SummaryResponse> for PlanSummary {
    fn from(response: SummaryResponse) -> Self {
        PlanSummary {
            overall: response.overall,
            day_summaries: response.day_summaries,
            reasons: vec![],
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnswerResponse {
    pub answer: String,
}
