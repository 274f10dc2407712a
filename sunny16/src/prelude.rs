pub use crate::{
    camera::{Camera, CameraOption},
    error::CameraError,
    sensor::{Broken, Fixed},
};

pub use sunny16_core::{
    common::{lx, Lux},
    exposure::{Aperture, Ev, Iso, ShutterSpeed},
    lens::{EosModel, Lens, LensKind},
    sensor::{LightSensor, SensorFault},
    state::{ExposureState, Mode},
};

pub use sunny16_driver::{
    error::{ExposureError, Saturation},
    program::Exposure,
};
