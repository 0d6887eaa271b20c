use crate::types::Workout;
use std::fmt;

/// Read-only projection of one computed workout, ready for printing.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryMessage {
    pub training_type: &'static str,
    pub duration_h: f64,
    pub distance_km: f64,
    pub speed_kmh: f64,
    pub calories: f64,
}

impl SummaryMessage {
    pub fn from_workout(workout: &Workout) -> Self {
        Self {
            training_type: workout.training_type(),
            duration_h: workout.duration_h(),
            distance_km: workout.distance_km(),
            speed_kmh: workout.mean_speed_kmh(),
            calories: workout.spent_calories(),
        }
    }
}

impl fmt::Display for SummaryMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Training type: {}; Duration: {:.3} h; Distance: {:.3} km; \
             Mean speed: {:.3} km/h; Calories burned: {:.3}.",
            self.training_type, self.duration_h, self.distance_km, self.speed_kmh, self.calories
        )
    }
}
