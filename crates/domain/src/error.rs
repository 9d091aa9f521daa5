use crate::ExerciseID;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum PlanError {
    #[error("no exercises available after applying constraints")]
    NoExercisesAvailable,
    #[error("day {index} does not exist (plan has {days} days)")]
    DayOutOfRange { index: usize, days: usize },
}

#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog: {0}")]
    Json(#[from] serde_json::Error),
    #[error("duplicate exercise id {0}")]
    DuplicateId(ExerciseID),
    #[error("catalog contains no exercises")]
    Empty,
}

#[derive(thiserror::Error, Debug)]
pub enum AssistantError {
    #[error("assistant unavailable")]
    Unavailable,
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}
