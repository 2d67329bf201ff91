use fittrack_types::{SensorPacket, TrainingError, WorkoutType};

use crate::{Running, SportsWalking, Swimming, WorkoutSummary};

/// A decoded workout, ready to derive distance, mean speed and calories.
#[derive(Debug, Clone, PartialEq)]
pub enum Workout {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl Workout {
    /// Decode one sensor packet. The code selects the variant; the values
    /// bind positionally as action, duration (hours, non-zero), weight (kg),
    /// then the variant extras (height, or pool length and lap count).
    pub fn decode(packet: &SensorPacket) -> Result<Self, TrainingError> {
        let workout = packet.code.parse::<WorkoutType>()?;
        let values = &packet.values;
        if values.len() != workout.field_count() {
            return Err(TrainingError::FieldCountMismatch {
                workout,
                expected: workout.field_count(),
                got: values.len(),
            });
        }

        Ok(match workout {
            WorkoutType::Running => {
                Self::Running(Running::new(values[0] as u32, values[1], values[2]))
            }
            WorkoutType::SportsWalking => Self::SportsWalking(SportsWalking::new(
                values[0] as u32,
                values[1],
                values[2],
                values[3],
            )),
            WorkoutType::Swimming => Self::Swimming(Swimming::new(
                values[0] as u32,
                values[1],
                values[2],
                values[3],
                values[4] as u32,
            )),
        })
    }

    pub fn workout_type(&self) -> WorkoutType {
        match self {
            Self::Running(_) => WorkoutType::Running,
            Self::SportsWalking(_) => WorkoutType::SportsWalking,
            Self::Swimming(_) => WorkoutType::Swimming,
        }
    }

    pub fn duration_h(&self) -> f64 {
        match self {
            Self::Running(w) => w.duration_h,
            Self::SportsWalking(w) => w.duration_h,
            Self::Swimming(w) => w.duration_h,
        }
    }

    pub fn distance_km(&self) -> f64 {
        match self {
            Self::Running(w) => w.distance_km(),
            Self::SportsWalking(w) => w.distance_km(),
            Self::Swimming(w) => w.distance_km(),
        }
    }

    pub fn mean_speed_kmh(&self) -> f64 {
        match self {
            Self::Running(w) => w.mean_speed_kmh(),
            Self::SportsWalking(w) => w.mean_speed_kmh(),
            Self::Swimming(w) => w.mean_speed_kmh(),
        }
    }

    pub fn spent_calories(&self) -> f64 {
        match self {
            Self::Running(w) => w.spent_calories(),
            Self::SportsWalking(w) => w.spent_calories(),
            Self::Swimming(w) => w.spent_calories(),
        }
    }

    pub fn summary(&self) -> WorkoutSummary {
        WorkoutSummary {
            workout: self.workout_type(),
            duration_h: self.duration_h(),
            distance_km: self.distance_km(),
            mean_speed_kmh: self.mean_speed_kmh(),
            calories_kcal: self.spent_calories(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_swimming_packet() {
        let packet = SensorPacket::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]);
        let workout = Workout::decode(&packet).unwrap();

        assert_eq!(
            workout,
            Workout::Swimming(Swimming::new(720, 1.0, 80.0, 25.0, 40))
        );
        assert_eq!(format!("{:.3}", workout.spent_calories()), "336.000");
    }

    #[test]
    fn decodes_running_packet() {
        let packet = SensorPacket::new("RUN", vec![15000.0, 1.0, 75.0]);
        let workout = Workout::decode(&packet).unwrap();

        assert_eq!(workout.workout_type(), WorkoutType::Running);
        assert_eq!(format!("{:.3}", workout.mean_speed_kmh()), "9.750");
        assert_eq!(format!("{:.3}", workout.spent_calories()), "797.805");
    }

    #[test]
    fn decodes_walking_packet() {
        let packet = SensorPacket::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]);
        let workout = Workout::decode(&packet).unwrap();

        assert_eq!(
            workout,
            Workout::SportsWalking(SportsWalking::new(9000, 1.0, 75.0, 180.0))
        );
        assert_eq!(format!("{:.3}", workout.spent_calories()), "349.252");
    }

    #[test]
    fn unknown_code_is_rejected() {
        let packet = SensorPacket::new("XYZ", vec![1.0, 2.0, 3.0]);
        let err = Workout::decode(&packet).unwrap_err();
        assert_eq!(err, TrainingError::UnknownWorkoutCode("XYZ".to_owned()));
    }

    #[test]
    fn wrong_value_count_is_rejected() {
        let packet = SensorPacket::new("RUN", vec![1.0, 2.0]);
        let err = Workout::decode(&packet).unwrap_err();
        assert_eq!(
            err,
            TrainingError::FieldCountMismatch {
                workout: WorkoutType::Running,
                expected: 3,
                got: 2,
            }
        );
    }

    #[test]
    fn extra_value_is_rejected() {
        let packet = SensorPacket::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0, 7.0]);
        let err = Workout::decode(&packet).unwrap_err();
        assert_eq!(
            err,
            TrainingError::FieldCountMismatch {
                workout: WorkoutType::Swimming,
                expected: 5,
                got: 6,
            }
        );
    }

    #[test]
    fn summary_carries_the_derived_quantities() {
        let packet = SensorPacket::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]);
        let workout = Workout::decode(&packet).unwrap();
        let summary = workout.summary();

        assert_eq!(summary.workout, WorkoutType::Swimming);
        assert_eq!(summary.duration_h, 1.0);
        assert_eq!(
            summary.to_string(),
            "Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; \
             Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000."
        );
    }
}
