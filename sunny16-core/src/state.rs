use crate::exposure::{Aperture, Ev, Iso, ShutterSpeed};

/// The operating mode selected on the body.
///
/// The mode decides which controls the user may touch. It never changes how an exposure is
/// resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Lens installation. Only the lens may change.
    LensInstall,
    /// Manual shooting with the aperture ring. The meter only recommends.
    ManualAperture,
    /// Manual shooting with the shutter dial. The meter only recommends.
    ManualShutter,
    /// The user fixes the aperture and the body derives the shutter speed.
    #[default]
    AperturePriority,
    /// The user fixes the shutter speed and the body derives the aperture.
    ShutterPriority,
}

/// The exposure settings held by the body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExposureState {
    /// The last metered light level.
    pub ev: Ev,
    /// The loaded film speed.
    pub iso: Iso,
    /// The selected or derived aperture.
    pub aperture: Aperture,
    /// The selected or derived shutter speed.
    pub shutter: ShutterSpeed,
    /// The selected operating mode.
    pub mode: Mode,
}

impl Default for ExposureState {
    /// Power-on values. The pair is not reconciled with the light level until the first
    /// metering.
    fn default() -> Self {
        Self {
            ev: Ev(13),
            iso: Iso::Iso100,
            aperture: Aperture::F5_6,
            shutter: ShutterSpeed::T125,
            mode: Mode::AperturePriority,
        }
    }
}
