#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::unescaped_backticks)]

//! Exposure metering library for manual film SLR bodies.

/// The camera body.
pub mod camera;
/// Error types for camera operations.
pub mod error;
/// Frequently used traits and types.
pub mod prelude;
/// Light sensors for testing and explanation.
pub mod sensor;

pub use sunny16_core as core;
pub use sunny16_driver as driver;

pub use camera::Camera;
