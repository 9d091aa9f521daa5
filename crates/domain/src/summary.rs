use std::{collections::BTreeSet, ops::RangeInclusive};

use serde::{Deserialize, Serialize};

use crate::{DayPlan, Plan, Profile, Property, pretty};

pub const QUESTION_LENGTH: RangeInclusive<usize> = 5..=300;

const FITNESS_KEYWORDS: [&str; 29] = [
    "exercise",
    "exercises",
    "set",
    "sets",
    "rep",
    "reps",
    "rest",
    "muscle",
    "muscles",
    "volume",
    "frequency",
    "intensity",
    "superset",
    "warmup",
    "cooldown",
    "day",
    "plan",
    "chest",
    "back",
    "legs",
    "shoulders",
    "biceps",
    "triceps",
    "quads",
    "hamstrings",
    "glutes",
    "calves",
    "core",
    "abs",
];

const EXTERNAL_REFERENCES: [&str; 4] = ["http://", "https://", "www.", "@"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanSummary {
    pub overall: String,
    pub day_summaries: Vec<String>,
    #[serde(default)]
    pub reasons: Vec<String>,
}

#[must_use]
pub fn summarize_plan(profile: &Profile, plan: &Plan) -> PlanSummary {
    PlanSummary {
        overall: format!(
            "Your plan supports a {} goal with {} sessions, balancing major muscle groups and your selections.",
            profile.goal,
            plan.days.len()
        ),
        day_summaries: plan
            .days
            .iter()
            .map(|day| format!("Day {}: {}", day.day_index + 1, pretty_muscles(day)))
            .collect(),
        reasons: reasons(profile, plan),
    }
}

/// Local reasoning about why the plan fits the profile.
#[must_use]
pub fn reasons(profile: &Profile, plan: &Plan) -> Vec<String> {
    let mut reasons = vec![];

    let functions = plan
        .days
        .iter()
        .flat_map(|d| d.exercises.iter())
        .map(|e| e.function.as_str())
        .filter(|f| !f.is_empty())
        .collect::<BTreeSet<_>>();
    if !functions.is_empty() {
        reasons.push(format!(
            "Balanced variety of movement patterns ({}) across the week.",
            functions
                .iter()
                .map(|f| pretty(f))
                .collect::<Vec<_>>()
                .join(", ")
        ));
    }

    if !profile.allowed_equipment.is_empty() {
        reasons.push(format!(
            "Matches your equipment selections: {}.",
            profile
                .allowed_equipment
                .iter()
                .map(|e| e.name())
                .collect::<Vec<_>>()
                .join(", ")
        ));
    }

    let emphasized = profile.emphasized_muscles();
    if !emphasized.is_empty() {
        let covered = emphasized
            .iter()
            .filter(|m| plan.weekly_focus.get(**m).copied().unwrap_or_default() > 0)
            .map(|m| pretty(m.as_str()))
            .collect::<Vec<_>>();
        if covered.is_empty() {
            reasons.push(
                "Attempts to honor your muscle focus while respecting other constraints."
                    .to_string(),
            );
        } else {
            reasons.push(format!(
                "Honors your focus areas, including {}.",
                covered.join(", ")
            ));
        }
    }

    reasons.push("Avoids duplicate exercises within each session.".to_string());
    reasons.push(format!(
        "Keeps each day within your max of {} exercises and targets sessions around {} minutes.",
        profile.max_exercises_per_day, profile.session_minutes_cap
    ));

    reasons
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum QuestionError {
    #[error("Please enter a concise question (5-300 chars).")]
    Length,
    #[error("Links, emails, or external references are not allowed.")]
    ExternalReference,
    #[error("Only fitness-related questions are allowed.")]
    OffTopic,
}

/// Returns the trimmed question if it is short, self-contained and about training.
pub fn check_question(text: &str) -> Result<&str, QuestionError> {
    let question = text.trim();
    if !QUESTION_LENGTH.contains(&question.chars().count()) {
        return Err(QuestionError::Length);
    }
    let lower = question.to_lowercase();
    if EXTERNAL_REFERENCES.iter().any(|r| lower.contains(r)) {
        return Err(QuestionError::ExternalReference);
    }
    if !FITNESS_KEYWORDS.iter().any(|k| lower.contains(k)) {
        return Err(QuestionError::OffTopic);
    }
    Ok(question)
}

/// Answers a question about the plan from its structure alone.
#[must_use]
pub fn answer_locally(plan: &Plan, question: &str) -> String {
    let lower = question.to_lowercase();
    let mut lines = vec![];

    if ["day", "which", "when"].iter().any(|k| lower.contains(k)) {
        for day in &plan.days {
            lines.push(format!(
                "Day {} ({}) covers: {}",
                day.day_index + 1,
                day.label,
                pretty_muscles(day)
            ));
        }
    }

    let muscles = plan
        .days
        .iter()
        .flat_map(DayPlan::muscles)
        .collect::<BTreeSet<_>>();
    for muscle in muscles.into_iter().filter(|m| {
        lower.contains(m.as_str()) || lower.contains(&m.as_str().replace('_', " "))
    }) {
        let hits = plan
            .days
            .iter()
            .filter_map(|day| {
                let names = day
                    .exercises
                    .iter()
                    .filter(|e| e.hits(muscle))
                    .map(|e| e.name.as_str())
                    .collect::<Vec<_>>();
                (!names.is_empty())
                    .then(|| format!("Day {}: {}", day.day_index + 1, names.join(", ")))
            })
            .collect::<Vec<_>>();
        lines.push(format!(
            "Muscle '{}' appears in: {}",
            pretty(muscle.as_str()),
            hits.join(" | ")
        ));
    }

    if ["set", "rep", "rest"].iter().any(|k| lower.contains(k)) {
        for day in &plan.days {
            lines.push(format!(
                "Day {}: {} sets of {} reps with {}s rest.",
                day.day_index + 1,
                day.sets,
                day.reps,
                day.rest_seconds
            ));
        }
    }

    if lines.is_empty() {
        lines.push(
            "This plan is designed around your selections. Try asking about muscles (e.g., chest) or which days cover a body part."
                .to_string(),
        );
    }
    lines.join("\n")
}

fn pretty_muscles(day: &DayPlan) -> String {
    day.muscles()
        .iter()
        .map(|m| pretty(m.as_str()))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::{
        Equipment, PlanSource,
        plan::tests::{day, exercise},
    };

    fn plan() -> Plan {
        let mut second = day(
            1,
            vec![
                exercise("squat", "squat", &["quads", "glutes"]),
                exercise("raise", "shoulder_abduction", &["side_delts"]),
            ],
        );
        second.label = "Lower Body".to_string();
        Plan::new(
            vec![
                day(
                    0,
                    vec![
                        exercise("bench", "horizontal_push", &["chest", "triceps"]),
                        exercise("fly", "chest_fly", &["chest"]),
                    ],
                ),
                second,
            ],
            PlanSource::Local,
        )
    }

    #[test]
    fn test_summarize_plan() {
        let profile = Profile {
            days_per_week: 2,
            allowed_equipment: BTreeSet::from([Equipment::Barbell, Equipment::Dumbbell]),
            ..Profile::default()
        }
        .emphasize("chest")
        .emphasize("calves");

        assert_eq!(
            summarize_plan(&profile, &plan()),
            PlanSummary {
                overall: "Your plan supports a hypertrophy goal with 2 sessions, balancing major muscle groups and your selections.".to_string(),
                day_summaries: vec![
                    "Day 1: Chest, Triceps".to_string(),
                    "Day 2: Glutes, Quads, Side Delts".to_string(),
                ],
                reasons: vec![
                    "Balanced variety of movement patterns (Chest Fly, Horizontal Push, Shoulder Abduction, Squat) across the week.".to_string(),
                    "Matches your equipment selections: Barbell, Dumbbell.".to_string(),
                    "Honors your focus areas, including Chest.".to_string(),
                    "Avoids duplicate exercises within each session.".to_string(),
                    "Keeps each day within your max of 5 exercises and targets sessions around 60 minutes.".to_string(),
                ],
            }
        );
    }

    #[test]
    fn test_reasons_uncovered_emphasis() {
        let profile = Profile::default().emphasize("calves");

        assert!(reasons(&profile, &plan()).contains(
            &"Attempts to honor your muscle focus while respecting other constraints.".to_string()
        ));
    }

    #[rstest]
    #[case::too_short("day?", Err(QuestionError::Length))]
    #[case::too_long(&"day ".repeat(80), Err(QuestionError::Length))]
    #[case::link("Is https://example.com a good plan?", Err(QuestionError::ExternalReference))]
    #[case::email("Mail my plan to me@example.com", Err(QuestionError::ExternalReference))]
    #[case::off_topic("What is the weather like?", Err(QuestionError::OffTopic))]
    #[case::valid("  Which days train Chest?  ", Ok("Which days train Chest?"))]
    #[case::abs("How often do I hit abs?", Ok("How often do I hit abs?"))]
    fn test_check_question(#[case] text: &str, #[case] expected: Result<&str, QuestionError>) {
        assert_eq!(check_question(text), expected);
    }

    #[test]
    fn test_answer_locally_days_and_muscles() {
        assert_eq!(
            answer_locally(&plan(), "Which day trains chest and side delts?"),
            [
                "Day 1 (Full Body) covers: Chest, Triceps",
                "Day 2 (Lower Body) covers: Glutes, Quads, Side Delts",
                "Muscle 'Chest' appears in: Day 1: bench, fly",
                "Muscle 'Side Delts' appears in: Day 2: raise",
            ]
            .join("\n")
        );
    }

    #[test]
    fn test_answer_locally_prescription() {
        assert_eq!(
            answer_locally(&plan(), "How long should I rest?"),
            "Day 1: 3 sets of 10 reps with 90s rest.\nDay 2: 3 sets of 10 reps with 90s rest."
        );
    }

    #[test]
    fn test_answer_locally_default_hint() {
        assert!(answer_locally(&plan(), "Is this plan good?").starts_with("This plan is designed"));
    }
}
