use crate::types::{Running, SensorBase, Swimming, Walking, Workout};

pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_H: f64 = 60.0;

/// Metres covered per step (running, walking).
pub const STEP_LEN_M: f64 = 0.65;
/// Metres covered per stroke (swimming).
pub const STROKE_LEN_M: f64 = 1.38;

impl SensorBase {
    /// Distance in km for a given stride length.
    pub fn distance_km(&self, stride_m: f64) -> f64 {
        f64::from(self.action) * stride_m / M_IN_KM
    }

    /// Mean speed in km/h: distance over the full duration.
    pub fn mean_speed_kmh(&self, stride_m: f64) -> f64 {
        self.distance_km(stride_m) / self.duration_h
    }
}

impl Running {
    const SPEED_MULTIPLIER: f64 = 18.0;
    const SPEED_SHIFT: f64 = 1.79;

    pub fn distance_km(&self) -> f64 {
        self.base.distance_km(STEP_LEN_M)
    }

    pub fn mean_speed_kmh(&self) -> f64 {
        self.base.mean_speed_kmh(STEP_LEN_M)
    }

    /// (18 × speed + 1.79) × weight / 1000 × minutes
    pub fn spent_calories(&self) -> f64 {
        (Self::SPEED_MULTIPLIER * self.mean_speed_kmh() + Self::SPEED_SHIFT)
            * self.base.weight_kg
            / M_IN_KM
            * (self.base.duration_h * MIN_IN_H)
    }
}

impl Walking {
    const WEIGHT_FACTOR: f64 = 0.035;
    const SPEED_HEIGHT_FACTOR: f64 = 0.029;
    /// km/h → m/s.
    const KMH_IN_MS: f64 = 0.278;
    const CM_IN_M: f64 = 100.0;

    pub fn distance_km(&self) -> f64 {
        self.base.distance_km(STEP_LEN_M)
    }

    pub fn mean_speed_kmh(&self) -> f64 {
        self.base.mean_speed_kmh(STEP_LEN_M)
    }

    /// (0.035 × weight + speed_ms² / height_m × 0.029 × weight) × minutes
    pub fn spent_calories(&self) -> f64 {
        let speed_ms = self.mean_speed_kmh() * Self::KMH_IN_MS;
        let height_m = self.height_cm / Self::CM_IN_M;

        (Self::WEIGHT_FACTOR * self.base.weight_kg
            + speed_ms.powi(2) / height_m * Self::SPEED_HEIGHT_FACTOR * self.base.weight_kg)
            * (self.base.duration_h * MIN_IN_H)
    }
}

impl Swimming {
    const SPEED_SHIFT: f64 = 1.1;
    const WEIGHT_MULTIPLIER: f64 = 2.0;

    pub fn distance_km(&self) -> f64 {
        self.base.distance_km(STROKE_LEN_M)
    }

    /// Pool-length based, not stroke based: pool_m × count / 1000 / hours.
    pub fn mean_speed_kmh(&self) -> f64 {
        self.pool_length_m * f64::from(self.pool_count) / M_IN_KM / self.base.duration_h
    }

    /// (speed + 1.1) × 2 × weight × hours
    pub fn spent_calories(&self) -> f64 {
        (self.mean_speed_kmh() + Self::SPEED_SHIFT)
            * Self::WEIGHT_MULTIPLIER
            * self.base.weight_kg
            * self.base.duration_h
    }
}

impl Workout {
    pub fn training_type(&self) -> &'static str {
        match self {
            Self::Running(_) => "Running",
            Self::Walking(_) => "Walking",
            Self::Swimming(_) => "Swimming",
        }
    }

    pub fn duration_h(&self) -> f64 {
        self.base().duration_h
    }

    fn base(&self) -> &SensorBase {
        match self {
            Self::Running(r) => &r.base,
            Self::Walking(w) => &w.base,
            Self::Swimming(s) => &s.base,
        }
    }

    pub fn distance_km(&self) -> f64 {
        match self {
            Self::Running(r) => r.distance_km(),
            Self::Walking(w) => w.distance_km(),
            Self::Swimming(s) => s.distance_km(),
        }
    }

    pub fn mean_speed_kmh(&self) -> f64 {
        match self {
            Self::Running(r) => r.mean_speed_kmh(),
            Self::Walking(w) => w.mean_speed_kmh(),
            Self::Swimming(s) => s.mean_speed_kmh(),
        }
    }

    pub fn spent_calories(&self) -> f64 {
        match self {
            Self::Running(r) => r.spent_calories(),
            Self::Walking(w) => w.spent_calories(),
            Self::Swimming(s) => s.spent_calories(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::types::{Running, SensorBase, Swimming, Walking, Workout};

    const EPS: f64 = 1e-9;

    fn base(action: u32, duration_h: f64, weight_kg: f64) -> SensorBase {
        SensorBase {
            action,
            duration_h,
            weight_kg,
        }
    }

    #[test]
    fn running_distance_and_speed() {
        let r = Running {
            base: base(15_000, 1.0, 75.0),
        };

        // 15000 × 0.65 / 1000 = 9.75 km, over 1 h.
        assert!((r.distance_km() - 9.75).abs() < EPS);
        assert!((r.mean_speed_kmh() - 9.75).abs() < EPS);
    }

    #[test]
    fn running_calories() {
        let r = Running {
            base: base(15_000, 1.0, 75.0),
        };

        // (18 × 9.75 + 1.79) × 75 / 1000 × 60 = 797.805
        assert!((r.spent_calories() - 797.805).abs() < 1e-6);
    }

    #[test]
    fn walking_calories_use_height() {
        let w = Walking {
            base: base(9_000, 1.0, 75.0),
            height_cm: 180.0,
        };

        // Closed-form substitution with height 180 cm = 1.8 m.
        let speed_ms = w.mean_speed_kmh() * 0.278;
        let expected = (0.035 * 75.0 + speed_ms.powi(2) / 1.8 * 0.029 * 75.0) * 60.0;
        assert!((w.spent_calories() - expected).abs() < EPS);

        // 5.85 km/h → ≈349.252 kcal.
        assert!((w.spent_calories() - 349.252).abs() < 1e-3);
    }

    #[test]
    fn swimming_speed_uses_pool_not_strokes() {
        let s = Swimming {
            base: base(720, 1.0, 80.0),
            pool_length_m: 25.0,
            pool_count: 40,
        };

        // 25 × 40 / 1000 / 1 = 1 km/h; stroke distance would give 0.9936 km/h.
        assert!((s.mean_speed_kmh() - 1.0).abs() < EPS);
        assert!((s.distance_km() - 0.9936).abs() < EPS);
    }

    #[test]
    fn swimming_calories() {
        let s = Swimming {
            base: base(720, 1.0, 80.0),
            pool_length_m: 25.0,
            pool_count: 40,
        };

        // (1.0 + 1.1) × 2 × 80 × 1 = 336
        assert!((s.spent_calories() - 336.0).abs() < EPS);
    }

    #[test]
    fn workout_delegates_to_variant() {
        let r = Running {
            base: base(15_000, 1.0, 75.0),
        };
        let w = Workout::Running(r);

        assert_eq!(w.training_type(), "Running");
        assert!((w.duration_h() - 1.0).abs() < EPS);
        assert!((w.distance_km() - r.distance_km()).abs() < EPS);
        assert!((w.mean_speed_kmh() - r.mean_speed_kmh()).abs() < EPS);
        assert!((w.spent_calories() - r.spent_calories()).abs() < EPS);
    }
}
