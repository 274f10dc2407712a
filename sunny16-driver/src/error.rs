use sunny16_core::{common::Lux, exposure::Aperture, sensor::SensorFault};

use thiserror::Error;

/// The side of the stop ladder an unattainable exposure ran off.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Saturation {
    /// The scene needs a faster or narrower pair than the ladder offers.
    TooBright,
    /// The scene needs a slower or wider pair than the ladder offers.
    TooDim,
}

impl core::fmt::Display for Saturation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Saturation::TooBright => write!(f, "too bright"),
            Saturation::TooDim => write!(f, "too dim"),
        }
    }
}

/// An interface for error handling in sunny16-driver.
#[derive(Error, Debug, PartialEq, Clone)]
#[non_exhaustive]
pub enum ExposureError {
    /// Illuminance reading cannot be quantized.
    #[error("Illuminance ({0:?}) is out of range")]
    LuxOutOfRange(Lux),
    /// Correct exposure is unattainable with the fixed control.
    #[error("Correct exposure is unattainable ({0})")]
    NoSolution(Saturation),
    /// The lens cannot reach the stop even after clamping.
    #[error("Lens cannot reach {0:?}")]
    UnsupportedAperture(Aperture),
    /// Error in the light sensor.
    #[error("{0}")]
    Sensor(#[from] SensorFault),
}
