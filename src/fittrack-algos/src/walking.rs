use crate::{M_IN_KM, MIN_IN_H};

/// Sports walking session; calories additionally depend on athlete height.
#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    pub action: u32,
    pub duration_h: f64,
    pub weight_kg: f64,
    pub height_cm: f64,
}

impl SportsWalking {
    /// Metres covered per step.
    pub const STEP_LEN_M: f64 = 0.65;

    const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
    const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
    /// One km/h expressed in m/s.
    const MS_IN_KMH: f64 = 0.278;
    const CM_IN_M: f64 = 100.0;

    pub fn new(action: u32, duration_h: f64, weight_kg: f64, height_cm: f64) -> Self {
        Self {
            action,
            duration_h,
            weight_kg,
            height_cm,
        }
    }

    pub fn distance_km(&self) -> f64 {
        f64::from(self.action) * Self::STEP_LEN_M / M_IN_KM
    }

    pub fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.duration_h
    }

    pub fn spent_calories(&self) -> f64 {
        let speed_ms = self.mean_speed_kmh() * Self::MS_IN_KMH;
        let height_m = self.height_cm / Self::CM_IN_M;

        (Self::CALORIES_WEIGHT_MULTIPLIER * self.weight_kg
            + speed_ms.powi(2) / height_m * Self::CALORIES_SPEED_HEIGHT_MULTIPLIER * self.weight_kg)
            * self.duration_h
            * MIN_IN_H
    }
}
