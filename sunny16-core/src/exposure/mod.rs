mod aperture;
mod ev;
mod iso;
mod shutter;

pub use aperture::Aperture;
pub use ev::Ev;
pub use iso::Iso;
pub use shutter::ShutterSpeed;
