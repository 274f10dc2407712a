#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::unescaped_backticks)]

//! Exposure resolution engine for the sunny16 camera body.

/// Lens and shutter capability clamping.
pub mod clamp;
/// Error types for exposure resolution.
pub mod error;
/// Illuminance quantization.
pub mod metering;
/// The exposure program tables and lookups.
pub mod program;
