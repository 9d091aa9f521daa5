#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;
mod error;
mod exercise;
pub mod export;
mod plan;
mod planner;
mod profile;
mod service;
mod shortlist;
mod summary;
mod validation;

pub use catalog::Catalog;
pub use error::{AssistantError, CatalogError, PlanError};
pub use exercise::{Equipment, Exercise, ExerciseID, ExerciseType, Muscle, Property, pretty};
pub use plan::{
    DayPlan, GENERATED_AT_KEY, Plan, PlanSource, SOURCE_KEY, SupersetPair, remove_exercise,
    swap_exercise, weekly_focus,
};
pub use planner::{LABELS, build_day, generate_local_plan, label_for_day, top_up_days};
pub use profile::{
    DAYS_PER_WEEK, EXERCISES_PER_DAY, Goal, Profile, ProfileError, REPS, REST_SECONDS,
    SESSION_MINUTES, SETS,
};
pub use service::{
    Offline, PlanAdvisor, PlanAssistant, PlanOutcome, PlannerSettings, Service,
};
pub use shortlist::{DEFAULT_SHORTLIST_CAP, shortlist};
pub use summary::{
    PlanSummary, QUESTION_LENGTH, QuestionError, answer_locally, check_question, reasons,
    summarize_plan,
};
pub use validation::{Issue, IssueCode, ValidationReport, validate_plan};
