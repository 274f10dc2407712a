use crate::common::Lux;

use super::error::SensorFault;

use alloc::boxed::Box;

/// A trait that provides the interface with the metering cell.
pub trait LightSensor: Send {
    /// Takes one illuminance reading.
    fn read(&mut self) -> Result<Lux, SensorFault>;
}

impl LightSensor for Box<dyn LightSensor> {
    fn read(&mut self) -> Result<Lux, SensorFault> {
        self.as_mut().read()
    }
}
