mod error;
mod sync;

pub use error::SensorFault;
pub use sync::LightSensor;
