//! Response schemas for structured output.
//!
//! Strict mode requires every property to be listed as required and forbids additional
//! properties, so derived fields like the weekly focus are left out and recomputed locally.

use gymplan_domain::{Equipment, ExerciseType, IssueCode, Property};
use serde_json::{Value, json};

pub struct Schema {
    pub name: &'static str,
    pub schema: Value,
}

fn object(properties: &Value) -> Value {
    let required = properties
        .as_object()
        .map(|p| p.keys().cloned().collect::<Vec<_>>())
        .unwrap_or_default();
    json!({
        "type": "object",
        "properties": properties,
        "required": required,
        "additionalProperties": false,
    })
}

fn strings() -> Value {
    json!({ "type": "array", "items": { "type": "string" } })
}

fn exercise() -> Value {
    object(&json!({
        "id": { "type": "string" },
        "name": { "type": "string" },
        "external_link": { "type": "string" },
        "primary_muscles": strings(),
        "function": { "type": "string" },
        "equipment": {
            "type": "array",
            "items": {
                "type": "string",
                "enum": Equipment::iter().map(ToString::to_string).collect::<Vec<_>>(),
            },
        },
        "type": {
            "type": "string",
            "enum": ExerciseType::iter().map(ToString::to_string).collect::<Vec<_>>(),
        },
        "enriched": { "type": "boolean" },
        "notes": { "type": ["string", "null"] },
    }))
}

fn plan() -> Value {
    let superset = object(&json!({
        "a_exercise_id": { "type": "string" },
        "b_exercise_id": { "type": "string" },
    }));
    let day = object(&json!({
        "day_index": { "type": "integer" },
        "label": { "type": "string" },
        "exercises": { "type": "array", "items": exercise() },
        "sets": { "type": "integer" },
        "reps": { "type": "integer" },
        "rest_seconds": { "type": "integer" },
        "supersets": { "type": "array", "items": superset },
    }));
    object(&json!({
        "days": { "type": "array", "items": day },
    }))
}

#[must_use]
pub fn plan_response() -> Schema {
    Schema {
        name: "plan_response",
        schema: object(&json!({ "plan": plan() })),
    }
}

#[must_use]
pub fn validation_report() -> Schema {
    let issue = object(&json!({
        "code": {
            "type": "string",
            "enum": [
                IssueCode::DayCountMismatch.to_string(),
                IssueCode::ExceedsMaxExercises.to_string(),
                IssueCode::EquipmentBlocked.to_string(),
                IssueCode::MuscleUndercovered.to_string(),
                IssueCode::DuplicateExercise.to_string(),
                IssueCode::SequencingImplausible.to_string(),
            ],
        },
        "message": { "type": "string" },
    }));
    Schema {
        name: "validation_report",
        schema: object(&json!({
            "ok": { "type": "boolean" },
            "issues": { "type": "array", "items": issue },
        })),
    }
}

#[must_use]
pub fn plan_summary() -> Schema {
    Schema {
        name: "plan_summary",
        schema: object(&json!({
            "overall": { "type": "string" },
            "day_summaries": strings(),
        })),
    }
}

#[must_use]
pub fn answer() -> Schema {
    Schema {
        name: "plan_answer",
        schema: object(&json!({ "answer": { "type": "string" } })),
    }
}
