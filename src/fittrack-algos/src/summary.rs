use std::fmt::Display;

use fittrack_types::WorkoutType;

/// Per-workout report: the four derived quantities plus the workout label.
/// Rendered as the single fixed-format line handed to the athlete.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutSummary {
    pub workout: WorkoutType,
    pub duration_h: f64,
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories_kcal: f64,
}

impl Display for WorkoutSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
            self.workout, self.duration_h, self.distance_km, self.mean_speed_kmh, self.calories_kcal
        ))
    }
}
