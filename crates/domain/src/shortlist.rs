use log::debug;

use crate::{Catalog, Exercise, ExerciseID, Profile};

pub const DEFAULT_SHORTLIST_CAP: usize = 200;

/// Filters the catalog by the profile's equipment, muscle and id constraints.
///
/// Survivors are ordered by emphasis, then by preferring compound movements. Ties keep catalog
/// order. The result holds at most `cap` ids.
#[must_use]
pub fn shortlist(catalog: &Catalog, profile: &Profile, cap: usize) -> Vec<ExerciseID> {
    let mut exercises = catalog
        .iter()
        .filter(|e| is_allowed(e, profile))
        .collect::<Vec<_>>();
    exercises.sort_by_key(|e| std::cmp::Reverse(priority(e, profile)));
    debug!(
        "shortlisted {} of {} exercises (cap {cap})",
        exercises.len(),
        catalog.len()
    );
    exercises
        .into_iter()
        .take(cap)
        .map(|e| e.id.clone())
        .collect()
}

fn is_allowed(exercise: &Exercise, profile: &Profile) -> bool {
    (profile.allowed_equipment.is_empty()
        || exercise
            .equipment
            .iter()
            .any(|e| profile.allowed_equipment.contains(e)))
        && !exercise
            .equipment
            .iter()
            .any(|e| profile.blacklisted_equipment.contains(e))
        && !exercise
            .primary_muscles
            .iter()
            .any(|m| profile.blacklisted_muscles.contains(m))
        && !profile.blacklisted_exercise_ids.contains(&exercise.id)
}

fn priority(exercise: &Exercise, profile: &Profile) -> (u8, u8) {
    (
        u8::from(
            exercise
                .primary_muscles
                .iter()
                .any(|m| profile.is_emphasized(m)),
        ),
        u8::from(exercise.is_compound()),
    )
}
