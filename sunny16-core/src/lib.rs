#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::unescaped_backticks)]

//! Core traits and types for the sunny16 exposure engine.

extern crate alloc;

#[cfg_attr(docsrs, doc(cfg(feature = "common")))]
#[cfg(feature = "common")]
/// Common units and constants.
pub mod common;
#[cfg_attr(docsrs, doc(cfg(feature = "exposure")))]
#[cfg(feature = "exposure")]
/// Exposure stop tables and their value types.
pub mod exposure;
#[cfg_attr(docsrs, doc(cfg(feature = "lens")))]
#[cfg(feature = "lens")]
/// Lens models and the lens interface.
pub mod lens;
#[cfg_attr(docsrs, doc(cfg(feature = "sensor")))]
#[cfg(feature = "sensor")]
/// An interface to the light sensor.
pub mod sensor;
#[cfg_attr(docsrs, doc(cfg(feature = "state")))]
#[cfg(feature = "state")]
/// The exposure state owned by the camera controller.
pub mod state;
