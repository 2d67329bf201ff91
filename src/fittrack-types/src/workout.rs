use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::TrainingError;

/// Workout discipline, identified on the wire by a three-letter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkoutType {
    #[serde(rename = "SWM")]
    Swimming,
    #[serde(rename = "RUN")]
    Running,
    #[serde(rename = "WLK")]
    SportsWalking,
}

impl WorkoutType {
    /// Sensor packet code for this workout.
    pub fn code(&self) -> &'static str {
        match self {
            WorkoutType::Swimming => "SWM",
            WorkoutType::Running => "RUN",
            WorkoutType::SportsWalking => "WLK",
        }
    }

    /// Number of values a packet of this type must carry:
    /// action, duration, weight, plus the variant extras.
    pub fn field_count(&self) -> usize {
        match self {
            WorkoutType::Swimming => 5,
            WorkoutType::Running => 3,
            WorkoutType::SportsWalking => 4,
        }
    }
}

impl Display for WorkoutType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            WorkoutType::Swimming => "Swimming",
            WorkoutType::Running => "Running",
            WorkoutType::SportsWalking => "SportsWalking",
        };

        write!(f, "{}", s)
    }
}

impl FromStr for WorkoutType {
    type Err = TrainingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SWM" => Ok(WorkoutType::Swimming),
            "RUN" => Ok(WorkoutType::Running),
            "WLK" => Ok(WorkoutType::SportsWalking),
            _ => Err(TrainingError::UnknownWorkoutCode(s.to_owned())),
        }
    }
}
