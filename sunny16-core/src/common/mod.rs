mod illuminance;

pub use illuminance::*;
