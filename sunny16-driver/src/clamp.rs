use sunny16_core::{
    exposure::{Aperture, ShutterSpeed},
    lens::Lens,
};

use crate::error::{ExposureError, Saturation};

/// Clamps a stop to what the lens can take.
///
/// A stop the lens does not answer walks toward the narrow end, one full stop at a time,
/// until the lens answers. A lens stops down past its fastest stop without harm but is
/// never driven wider than it opens. Walking off the narrow end is reported as
/// [`ExposureError::UnsupportedAperture`].
pub fn aperture<L: Lens>(raw: Aperture, lens: &L) -> Result<Aperture, ExposureError> {
    if raw.is_none() {
        return Err(ExposureError::UnsupportedAperture(raw));
    }
    let mut stop = raw;
    loop {
        if lens.is_aperture_supported(stop) {
            if stop != raw {
                tracing::trace!("Walked {:?} down to {:?}.", raw, stop);
            }
            return Ok(stop);
        }
        if stop == Aperture::NARROWEST {
            return Err(ExposureError::UnsupportedAperture(raw));
        }
        stop = stop.stopped_down(1);
    }
}

/// Clamps a timed speed to what the shutter can fire.
///
/// A speed faster than `max_speed` saturates to `max_speed`. The two sentinels are
/// refused: the blank entry marks a level brighter than the fastest timed speed, and Bulb
/// is never armed on the user's behalf.
pub fn shutter(raw: ShutterSpeed, max_speed: ShutterSpeed) -> Result<ShutterSpeed, ExposureError> {
    if raw.is_none() {
        return Err(ExposureError::NoSolution(Saturation::TooBright));
    }
    if raw.is_bulb() {
        return Err(ExposureError::NoSolution(Saturation::TooDim));
    }
    if raw.0 < max_speed.0 {
        tracing::trace!("Clamped {:?} to {:?}.", raw, max_speed);
        return Ok(max_speed);
    }
    Ok(raw)
}
