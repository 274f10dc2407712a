use sunny16_core::{
    common::Lux,
    sensor::{LightSensor, SensorFault},
};

/// A [`LightSensor`] that always reads the same illuminance.
///
/// This sensor is mainly used for explanation and testing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fixed {
    /// The illuminance to report.
    pub lux: Lux,
}

impl LightSensor for Fixed {
    fn read(&mut self) -> Result<Lux, SensorFault> {
        Ok(self.lux)
    }
}

/// A [`LightSensor`] that always fails.
///
/// This sensor is mainly used for explanation and testing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Broken;

impl LightSensor for Broken {
    fn read(&mut self) -> Result<Lux, SensorFault> {
        Err(SensorFault::new("Sensor is broken"))
    }
}
