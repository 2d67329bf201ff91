use thiserror::Error;

use crate::WorkoutType;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TrainingError {
    #[error("unknown workout code `{0}`")]
    UnknownWorkoutCode(String),
    #[error("{workout} packet carries {got} values, expected {expected}")]
    FieldCountMismatch {
        workout: WorkoutType,
        expected: usize,
        got: usize,
    },
    /// Reserved: every current workout type has a calorie model.
    #[error("no calorie model for {0}")]
    UnsupportedCalculation(WorkoutType),
}
