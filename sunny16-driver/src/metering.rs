use sunny16_core::{common::Lux, exposure::Ev};

use crate::error::ExposureError;

/// Half-stop illuminance boundaries between adjacent light levels.
///
/// `BOUNDARIES[n]` is the lowest reading bucketed as `Ev(n + 1)`.
const BOUNDARIES: [f32; 15] = [
    3.5, 7., 14., 28., 56., 112., 225., 450., 900., 1800., 3600., 7200., 14400., 28900., 57800.,
];

/// Buckets an illuminance reading into a whole-stop light level.
///
/// Readings at a boundary land in the stop above it. Readings above the top boundary
/// saturate at [`Ev::MAX`]. Negative and non-finite readings are rejected, never folded
/// into [`Ev::MIN`].
pub fn quantize(lux: Lux) -> Result<Ev, ExposureError> {
    if !lux.lx().is_finite() || lux.lx() < 0. {
        return Err(ExposureError::LuxOutOfRange(lux));
    }
    Ok(Ev(BOUNDARIES.iter().filter(|&&b| b <= lux.lx()).count() as u8))
}
