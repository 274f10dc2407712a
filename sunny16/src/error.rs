use sunny16_core::state::Mode;
use sunny16_driver::error::ExposureError;

use thiserror::Error;

/// An interface for error handling in sunny16.
#[derive(Error, Debug, PartialEq, Clone)]
#[non_exhaustive]
pub enum CameraError {
    /// The control is not selectable in the current mode.
    #[error("Control is not selectable in {0:?} mode")]
    InvalidMode(Mode),
    /// The dialed stop sits off its ladder.
    #[error("Stop index ({0}) is out of range ([{1}, {2}])")]
    StopOutOfRange(u8, u8, u8),
    /// Bulb cannot be armed automatically.
    #[error("Bulb can only be armed in manual shutter mode")]
    BulbNotManual,
    /// Error during exposure resolution.
    #[error("{0}")]
    Exposure(#[from] ExposureError),
}
