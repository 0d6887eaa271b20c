use crate::types::{Running, SensorBase, Swimming, Walking, Workout};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use thiserror::Error;

/// Errors raised while decoding a sensor package.
#[derive(Debug, Error)]
pub enum PackageError {
    /// The sensor tag does not name a known workout type.
    #[error("unsupported workout type: {tag:?}")]
    UnsupportedType { tag: String },

    /// The payload length does not match the workout type's field count.
    #[error("{tag}: expected {expected} sensor values, got {got}")]
    ArgumentCount {
        tag: &'static str,
        expected: usize,
        got: usize,
    },
}

struct PackageSpec {
    arity: usize,
    build: fn(&[f64]) -> Workout,
}

/// Tag → decoder table. Built once, never mutated.
static PACKAGE_TYPES: Lazy<HashMap<&'static str, PackageSpec>> = Lazy::new(|| {
    HashMap::from([
        (
            "RUN",
            PackageSpec {
                arity: 3,
                build: build_running,
            },
        ),
        (
            "WLK",
            PackageSpec {
                arity: 4,
                build: build_walking,
            },
        ),
        (
            "SWM",
            PackageSpec {
                arity: 5,
                build: build_swimming,
            },
        ),
    ])
});

/// Decode one `(tag, data)` sensor package into a workout record.
///
/// The tag must be one of `RUN`, `WLK`, `SWM` and the payload length must
/// equal the field count of the matching record (3, 4 and 5 respectively).
/// Nothing is constructed on failure.
pub fn read_package(tag: &str, data: &[f64]) -> Result<Workout, PackageError> {
    let Some((&canonical, spec)) = PACKAGE_TYPES.get_key_value(tag) else {
        return Err(PackageError::UnsupportedType {
            tag: tag.to_string(),
        });
    };

    if data.len() != spec.arity {
        return Err(PackageError::ArgumentCount {
            tag: canonical,
            expected: spec.arity,
            got: data.len(),
        });
    }

    Ok((spec.build)(data))
}

// Builders run after the arity check; indexing is in bounds.

fn base_from(data: &[f64]) -> SensorBase {
    SensorBase {
        action: data[0] as u32,
        duration_h: data[1],
        weight_kg: data[2],
    }
}

fn build_running(data: &[f64]) -> Workout {
    Workout::Running(Running {
        base: base_from(data),
    })
}

fn build_walking(data: &[f64]) -> Workout {
    Workout::Walking(Walking {
        base: base_from(data),
        height_cm: data[3],
    })
}

fn build_swimming(data: &[f64]) -> Workout {
    Workout::Swimming(Swimming {
        base: base_from(data),
        pool_length_m: data[3],
        pool_count: data[4] as u32,
    })
}
