use alloc::string::String;

use derive_more::Display;
use derive_new::new;
use thiserror::Error;

#[derive(new, Error, Debug, Display, PartialEq, Clone)]
#[display("{}", msg)]
/// An error produced by the light sensor.
pub struct SensorFault {
    #[new(into)]
    msg: String,
}
