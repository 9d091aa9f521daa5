use log::debug;

use crate::{Catalog, DayPlan, Exercise, ExerciseID, Plan, PlanError, PlanSource, Profile};

pub const LABELS: [&str; 6] = [
    "Upper Body",
    "Lower Body",
    "Push",
    "Pull",
    "Full Body",
    "Accessory",
];

#[must_use]
pub fn label_for_day(index: usize, days: usize) -> &'static str {
    if days == 1 {
        "Full Body"
    } else {
        LABELS[index % LABELS.len()]
    }
}

/// Builds a plan by cycling through the allowed exercises.
///
/// Unknown ids are skipped. The cursor into the allowed list carries over from one day to the
/// next, so consecutive days start at different exercises.
pub fn generate_local_plan(
    catalog: &Catalog,
    profile: &Profile,
    allowed_ids: &[ExerciseID],
) -> Result<Plan, PlanError> {
    let allowed = catalog.resolve(allowed_ids);
    if allowed.is_empty() {
        return Err(PlanError::NoExercisesAvailable);
    }

    let days_per_week = profile.days_per_week as usize;
    let mut cursor = 0;
    let mut days = Vec::with_capacity(days_per_week);
    for day_index in 0..days_per_week {
        let (exercises, next) = build_day(profile, &allowed, cursor);
        cursor = next;
        days.push(day_plan(
            profile,
            day_index,
            label_for_day(day_index, days_per_week),
            exercises.into_iter().cloned().collect(),
        ));
    }

    let mut plan = Plan::new(days, PlanSource::Local);
    ensure_emphasis(&mut plan, profile, &allowed);
    debug!(
        "generated local plan with {} days and {} exercises",
        plan.days.len(),
        plan.exercise_count()
    );
    Ok(plan)
}

/// Picks the exercises of one day starting at `cursor` and returns them with the advanced cursor.
#[must_use]
pub fn build_day<'a>(
    profile: &Profile,
    allowed: &[&'a Exercise],
    cursor: usize,
) -> (Vec<&'a Exercise>, usize) {
    let mut chosen = vec![];
    let mut cursor = fill(
        &mut chosen,
        allowed,
        profile.max_exercises_per_day as usize,
        cursor,
    );
    if chosen.is_empty() && !allowed.is_empty() {
        chosen.push(allowed[cursor % allowed.len()]);
        cursor += 1;
    }
    (chosen, cursor)
}

/// Fills days that have fewer than the maximum number of exercises.
///
/// Uses the same selection rule as the local generator with a cursor starting at the beginning
/// of the allowed list.
#[must_use]
pub fn top_up_days(
    catalog: &Catalog,
    profile: &Profile,
    allowed_ids: &[ExerciseID],
    mut plan: Plan,
) -> Plan {
    let allowed = catalog.resolve(allowed_ids);
    if allowed.is_empty() {
        return plan;
    }

    let max = profile.max_exercises_per_day as usize;
    let mut cursor = 0;
    for day in &mut plan.days {
        let existing = std::mem::take(&mut day.exercises);
        let mut chosen = existing.iter().collect::<Vec<_>>();
        cursor = fill(&mut chosen, &allowed, max, cursor);
        let added = chosen[existing.len()..]
            .iter()
            .map(|e| (*e).clone())
            .collect::<Vec<_>>();
        if !added.is_empty() {
            debug!("topped up day {} with {} exercises", day.day_index, added.len());
        }
        day.exercises = existing;
        day.exercises.extend(added);
    }
    plan.refresh_weekly_focus();
    plan
}

/// Two passes over the allowed list. The first one avoids repeating a movement function within
/// the day, the second one only avoids repeating an exercise. Each pass is bounded by twice the
/// length of the allowed list.
fn fill<'a>(
    chosen: &mut Vec<&'a Exercise>,
    allowed: &[&'a Exercise],
    max: usize,
    mut cursor: usize,
) -> usize {
    for diverse in [true, false] {
        let mut attempts = 0;
        while chosen.len() < max && attempts < allowed.len() * 2 {
            let candidate = allowed[cursor % allowed.len()];
            cursor += 1;
            attempts += 1;
            if chosen.iter().any(|e| e.id == candidate.id) {
                continue;
            }
            if diverse && chosen.iter().any(|e| e.function == candidate.function) {
                continue;
            }
            chosen.push(candidate);
        }
    }
    cursor
}

fn day_plan(profile: &Profile, day_index: usize, label: &str, exercises: Vec<Exercise>) -> DayPlan {
    DayPlan {
        day_index,
        label: label.to_string(),
        exercises,
        sets: profile.default_sets,
        reps: profile.default_reps,
        rest_seconds: profile.rest_seconds,
        supersets: vec![],
    }
}

/// Replaces the last exercise of the first day once if an emphasized muscle is not trained at all.
fn ensure_emphasis(plan: &mut Plan, profile: &Profile, allowed: &[&Exercise]) {
    let uncovered = profile
        .emphasized_muscles()
        .into_iter()
        .filter(|m| plan.weekly_focus.get(*m).copied().unwrap_or_default() == 0)
        .collect::<Vec<_>>();
    if uncovered.is_empty() {
        return;
    }
    let Some(first_day) = plan.days.first_mut() else {
        return;
    };
    let Some(replacement) = allowed.iter().find(|e| {
        e.primary_muscles.iter().any(|m| profile.is_emphasized(m)) && !first_day.contains(&e.id)
    }) else {
        return;
    };
    if let Some(last) = first_day.exercises.last_mut() {
        debug!(
            "replacing {} by {} to cover {}",
            last.id,
            replacement.id,
            uncovered
                .iter()
                .map(|m| m.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
        *last = (*replacement).clone();
        plan.refresh_weekly_focus();
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::{DEFAULT_SHORTLIST_CAP, Muscle, plan::tests::exercise, shortlist};

    fn catalog() -> Catalog {
        Catalog::new(vec![
            exercise("a", "horizontal_push", &["chest"]),
            exercise("b", "squat", &["quads"]),
            exercise("c", "vertical_pull", &["lats"]),
            exercise("d", "elbow_flexion", &["biceps"]),
        ])
        .unwrap()
    }

    fn all_ids(catalog: &Catalog) -> Vec<ExerciseID> {
        catalog.iter().map(|e| e.id.clone()).collect()
    }

    fn ids(exercises: &[&Exercise]) -> Vec<String> {
        exercises.iter().map(|e| e.id.to_string()).collect()
    }

    #[rstest]
    #[case::single_day(0, 1, "Full Body")]
    #[case::first(0, 3, "Upper Body")]
    #[case::second(1, 3, "Lower Body")]
    #[case::last(5, 6, "Accessory")]
    #[case::wrapped(6, 6, "Upper Body")]
    fn test_label_for_day(#[case] index: usize, #[case] days: usize, #[case] expected: &str) {
        assert_eq!(label_for_day(index, days), expected);
    }

    #[test]
    fn test_build_day_carries_cursor() {
        let catalog = catalog();
        let allowed = catalog.iter().collect::<Vec<_>>();
        let profile = Profile {
            max_exercises_per_day: 3,
            ..Profile::default()
        };

        let (first, cursor) = build_day(&profile, &allowed, 0);
        assert_eq!(ids(&first), vec!["a", "b", "c"]);
        assert_eq!(cursor, 3);

        let (second, cursor) = build_day(&profile, &allowed, cursor);
        assert_eq!(ids(&second), vec!["d", "a", "b"]);
        assert_eq!(cursor, 6);
    }

    #[test]
    fn test_build_day_relaxes_function_diversity() {
        let catalog = Catalog::new(vec![
            exercise("a", "press", &["chest"]),
            exercise("b", "press", &["chest"]),
            exercise("c", "press", &["chest"]),
        ])
        .unwrap();
        let allowed = catalog.iter().collect::<Vec<_>>();
        let profile = Profile {
            max_exercises_per_day: 3,
            ..Profile::default()
        };

        let (day, cursor) = build_day(&profile, &allowed, 0);

        assert_eq!(ids(&day), vec!["a", "b", "c"]);
        assert_eq!(cursor, 9);
    }

    #[test]
    fn test_build_day_forces_one_exercise() {
        let catalog = catalog();
        let allowed = catalog.iter().collect::<Vec<_>>();
        let profile = Profile {
            max_exercises_per_day: 0,
            ..Profile::default()
        };

        let (day, cursor) = build_day(&profile, &allowed, 2);

        assert_eq!(ids(&day), vec!["c"]);
        assert_eq!(cursor, 3);
    }

    #[test]
    fn test_generate_local_plan_scenario() {
        let catalog = Catalog::builtin();
        let profile = Profile {
            days_per_week: 3,
            max_exercises_per_day: 5,
            ..Profile::default()
        };
        let allowed = shortlist(catalog, &profile, DEFAULT_SHORTLIST_CAP);

        let plan = generate_local_plan(catalog, &profile, &allowed).unwrap();

        assert_eq!(plan.days.len(), 3);
        assert_eq!(plan.source(), Some(PlanSource::Local));
        assert_eq!(
            plan.days.iter().map(|d| d.label.as_str()).collect::<Vec<_>>(),
            vec!["Upper Body", "Lower Body", "Push"]
        );
        for (index, day) in plan.days.iter().enumerate() {
            assert_eq!(day.day_index, index);
            assert_eq!(day.exercises.len(), 5);
            assert_eq!(
                day.exercises.iter().map(|e| &e.id).collect::<HashSet<_>>().len(),
                day.exercises.len()
            );
            assert_eq!(
                (day.sets, day.reps, day.rest_seconds),
                (profile.default_sets, profile.default_reps, profile.rest_seconds)
            );
        }
        assert_ne!(plan.days[0].exercises[0].id, plan.days[1].exercises[0].id);
        assert_eq!(plan.weekly_focus, crate::weekly_focus(&plan.days));
    }

    #[test]
    fn test_generate_local_plan_skips_unknown_ids() {
        let catalog = catalog();
        let profile = Profile {
            days_per_week: 1,
            max_exercises_per_day: 3,
            ..Profile::default()
        };

        let plan =
            generate_local_plan(&catalog, &profile, &["x".into(), "b".into(), "y".into()]).unwrap();

        assert_eq!(
            plan.days[0]
                .exercises
                .iter()
                .map(|e| e.id.as_str())
                .collect::<Vec<_>>(),
            vec!["b"]
        );
    }

    #[rstest]
    #[case::no_ids(vec![])]
    #[case::unknown_ids(vec!["x".into(), "y".into()])]
    fn test_generate_local_plan_no_exercises(#[case] allowed: Vec<ExerciseID>) {
        assert_eq!(
            generate_local_plan(&catalog(), &Profile::default(), &allowed),
            Err(PlanError::NoExercisesAvailable)
        );
    }

    #[test]
    fn test_generate_local_plan_covers_emphasis() {
        let catalog = catalog();
        let profile = Profile {
            days_per_week: 1,
            max_exercises_per_day: 3,
            ..Profile::default()
        }
        .emphasize("biceps");

        let plan = generate_local_plan(&catalog, &profile, &all_ids(&catalog)).unwrap();

        assert_eq!(
            plan.days[0]
                .exercises
                .iter()
                .map(|e| e.id.as_str())
                .collect::<Vec<_>>(),
            vec!["a", "b", "d"]
        );
        assert_eq!(plan.weekly_focus[&Muscle::new("biceps")], 1);
        assert_eq!(plan.weekly_focus.get(&Muscle::new("lats")), None);
    }

    #[test]
    fn test_generate_local_plan_emphasis_already_covered() {
        let catalog = catalog();
        let profile = Profile {
            days_per_week: 1,
            max_exercises_per_day: 3,
            ..Profile::default()
        }
        .emphasize("chest");

        let plan = generate_local_plan(&catalog, &profile, &all_ids(&catalog)).unwrap();

        assert_eq!(
            plan.days[0]
                .exercises
                .iter()
                .map(|e| e.id.as_str())
                .collect::<Vec<_>>(),
            vec!["a", "b", "c"]
        );
    }

    #[test]
    fn test_top_up_days() {
        let catalog = catalog();
        let profile = Profile {
            max_exercises_per_day: 3,
            ..Profile::default()
        };
        let plan = Plan::new(
            vec![
                crate::plan::tests::day(0, vec![exercise("b", "squat", &["quads"])]),
                crate::plan::tests::day(
                    1,
                    vec![
                        exercise("a", "horizontal_push", &["chest"]),
                        exercise("b", "squat", &["quads"]),
                        exercise("c", "vertical_pull", &["lats"]),
                    ],
                ),
            ],
            PlanSource::Llm,
        );

        let plan = top_up_days(&catalog, &profile, &all_ids(&catalog), plan);

        assert_eq!(
            plan.days
                .iter()
                .map(|d| d.exercises.iter().map(|e| e.id.as_str()).collect::<Vec<_>>())
                .collect::<Vec<_>>(),
            vec![vec!["b", "a", "c"], vec!["a", "b", "c"]]
        );
        assert_eq!(plan.weekly_focus[&Muscle::new("quads")], 2);
        assert_eq!(plan.source(), Some(PlanSource::Llm));
    }
}
