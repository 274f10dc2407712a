use sunny16_core::{
    exposure::{Aperture, Iso, ShutterSpeed},
    lens::{Lens, LensKind},
    sensor::LightSensor,
    state::{ExposureState, Mode},
};

use sunny16_driver::{
    clamp,
    error::ExposureError,
    metering,
    program::{self, Exposure},
};

use crate::error::CameraError;

/// The configuration of a [`Camera`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CameraOption {
    /// The fastest speed the shutter curtain can fire.
    pub max_speed: ShutterSpeed,
}

impl Default for CameraOption {
    fn default() -> Self {
        Self {
            max_speed: ShutterSpeed::T1000,
        }
    }
}

/// A manual film SLR camera body.
///
/// All operations on the body are done through this struct.
pub struct Camera<S: LightSensor, L: Lens> {
    sensor: S,
    lens: L,
    state: ExposureState,
    /// The configuration of the body.
    pub option: CameraOption,
}

impl<S: LightSensor, L: Lens> std::ops::Deref for Camera<S, L> {
    type Target = ExposureState;

    fn deref(&self) -> &Self::Target {
        &self.state
    }
}

impl<S: LightSensor, L: Lens> Camera<S, L> {
    /// Equivalent to [`Self::with_option`] with default [`CameraOption`].
    pub fn new(sensor: S, lens: L) -> Self {
        Self::with_option(sensor, lens, CameraOption::default())
    }

    /// Creates a camera with a [`CameraOption`].
    ///
    /// The body powers on with [`ExposureState::default`]. The pair is not reconciled with
    /// the light level until the first [`meter`](Self::meter).
    pub fn with_option(sensor: S, lens: L, option: CameraOption) -> Self {
        Self {
            sensor,
            lens,
            state: ExposureState::default(),
            option,
        }
    }

    #[doc(hidden)]
    pub const fn sensor(&self) -> &S {
        &self.sensor
    }

    #[doc(hidden)]
    pub const fn sensor_mut(&mut self) -> &mut S {
        &mut self.sensor
    }

    #[doc(hidden)]
    pub const fn lens(&self) -> &L {
        &self.lens
    }

    /// Returns the aperture and shutter speed pair currently set on the body.
    pub const fn exposure(&self) -> Exposure {
        Exposure {
            aperture: self.state.aperture,
            shutter: self.state.shutter,
        }
    }

    /// Reads the light sensor and resolves the exposure.
    ///
    /// The metered light level is kept even when resolution fails, so switching to a mode
    /// with a solution does not require metering again. In the manual modes the reading
    /// only moves the meter needle.
    pub fn meter(&mut self) -> Result<(), CameraError> {
        let lux = self.sensor.read().map_err(ExposureError::from)?;
        let ev = metering::quantize(lux)?;
        self.state.ev = ev;
        tracing::debug!("Metered {:?} as {:?}.", lux, ev);
        self.resolve()
    }

    /// Selects the operating mode.
    ///
    /// Entering a priority mode resolves the pair against the last metered light level. The
    /// mode is kept even when resolution fails.
    pub fn set_mode(&mut self, mode: Mode) -> Result<(), CameraError> {
        self.state.mode = mode;
        tracing::debug!("Selected {:?} mode.", mode);
        self.resolve()
    }

    /// Loads a film speed.
    ///
    /// The film speed is kept even when resolution fails.
    pub fn set_iso(&mut self, iso: Iso) -> Result<(), CameraError> {
        if self.state.mode == Mode::LensInstall {
            return Err(CameraError::InvalidMode(self.state.mode));
        }
        self.state.iso = iso;
        self.resolve()
    }

    /// Dials an aperture.
    ///
    /// A stop the lens cannot take is walked toward the narrow end before it is stored, as
    /// on an EF lens commanded past its wide-open stop.
    pub fn set_aperture(&mut self, aperture: Aperture) -> Result<(), CameraError> {
        if !matches!(
            self.state.mode,
            Mode::ManualAperture | Mode::AperturePriority
        ) {
            return Err(CameraError::InvalidMode(self.state.mode));
        }
        if aperture.is_none() || aperture > Aperture::NARROWEST {
            return Err(CameraError::StopOutOfRange(
                aperture.0,
                Aperture::WIDEST.0,
                Aperture::NARROWEST.0,
            ));
        }
        self.state.aperture = clamp::aperture(aperture, &self.lens)?;
        self.resolve()
    }

    /// Dials a shutter speed.
    ///
    /// A speed faster than the curtain can fire is clamped to [`CameraOption::max_speed`].
    /// Bulb stays where it is dialed and is never part of a resolved pair.
    pub fn set_shutter(&mut self, shutter: ShutterSpeed) -> Result<(), CameraError> {
        if !matches!(self.state.mode, Mode::ManualShutter | Mode::ShutterPriority) {
            return Err(CameraError::InvalidMode(self.state.mode));
        }
        if shutter.is_none() || shutter > ShutterSpeed::BULB {
            return Err(CameraError::StopOutOfRange(
                shutter.0,
                ShutterSpeed::FASTEST.0,
                ShutterSpeed::BULB.0,
            ));
        }
        if shutter.is_bulb() {
            if self.state.mode != Mode::ManualShutter {
                return Err(CameraError::BulbNotManual);
            }
            self.state.shutter = shutter;
            return Ok(());
        }
        self.state.shutter = clamp::shutter(shutter, self.option.max_speed)?;
        self.resolve()
    }
}

impl<S: LightSensor, L: Lens> Camera<S, L> {
    fn resolve(&mut self) -> Result<(), CameraError> {
        let exposure = match self.state.mode {
            Mode::AperturePriority => program::resolve_aperture_priority(
                self.state.ev,
                self.state.iso,
                self.state.aperture,
                &self.lens,
                self.option.max_speed,
            )?,
            Mode::ShutterPriority => program::resolve_shutter_priority(
                self.state.ev,
                self.state.iso,
                self.state.shutter,
                &self.lens,
                self.option.max_speed,
            )?,
            _ => return Ok(()),
        };
        tracing::trace!(
            "Resolved {:?} at {:?} to {:?}.",
            self.state.ev,
            self.state.iso,
            exposure
        );
        self.state.aperture = exposure.aperture;
        self.state.shutter = exposure.shutter;
        Ok(())
    }
}

impl<S: LightSensor> Camera<S, LensKind> {
    /// Mounts a lens.
    ///
    /// The stored aperture is reconciled with the new lens when the body next resolves.
    pub fn set_lens(&mut self, lens: LensKind) -> Result<(), CameraError> {
        if self.state.mode != Mode::LensInstall {
            return Err(CameraError::InvalidMode(self.state.mode));
        }
        self.lens = lens;
        tracing::debug!("Mounted {:?}.", lens);
        Ok(())
    }
}
