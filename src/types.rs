/// Raw sensor readings shared by every workout type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorBase {
    /// Steps for running and walking, strokes for swimming.
    pub action: u32,
    /// Workout length in hours. Positive: it is used as a divisor.
    pub duration_h: f64,
    /// Athlete weight in kilograms.
    pub weight_kg: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Running {
    pub base: SensorBase,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Walking {
    pub base: SensorBase,
    /// Athlete height in centimetres, feeds the speed-squared calorie term.
    pub height_cm: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swimming {
    pub base: SensorBase,
    /// Pool length in metres.
    pub pool_length_m: f64,
    /// Pool lengths completed.
    pub pool_count: u32,
}

/// One decoded workout. Only the three concrete types exist; a bare
/// `SensorBase` carries no calorie formula and cannot be summarized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Workout {
    Running(Running),
    Walking(Walking),
    Swimming(Swimming),
}
