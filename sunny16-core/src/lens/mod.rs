mod eos;

pub use eos::EosModel;

use crate::exposure::Aperture;

use alloc::boxed::Box;

/// The mounted lens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LensKind {
    /// A mechanical lens with a click-stopped aperture ring.
    Manual {
        /// The widest stop on the ring.
        widest: Aperture,
    },
    /// An EOS EF lens driven over the mount contacts.
    Eos(EosModel),
}

/// A trait that provides the aperture capabilities of the mounted lens.
pub trait Lens: Send {
    /// The lens description.
    fn kind(&self) -> LensKind;

    /// Checks if the lens can be set to `aperture`.
    #[must_use]
    fn is_aperture_supported(&self, aperture: Aperture) -> bool {
        match self.kind() {
            LensKind::Manual { widest } => {
                !aperture.is_none() && !widest.is_none() && widest <= aperture
            }
            LensKind::Eos(model) => model.is_aperture_supported(aperture),
        }
    }

    /// The widest stop the lens accepts.
    #[must_use]
    fn widest(&self) -> Aperture {
        match self.kind() {
            LensKind::Manual { widest } => widest,
            LensKind::Eos(model) => model.widest(),
        }
    }

    /// The narrowest stop the lens accepts.
    #[must_use]
    fn narrowest(&self) -> Aperture {
        match self.kind() {
            LensKind::Manual { .. } => Aperture::NARROWEST,
            LensKind::Eos(model) => model.narrowest(),
        }
    }
}

impl Lens for LensKind {
    fn kind(&self) -> LensKind {
        *self
    }
}

impl Lens for Box<dyn Lens> {
    fn kind(&self) -> LensKind {
        self.as_ref().kind()
    }

    fn is_aperture_supported(&self, aperture: Aperture) -> bool {
        self.as_ref().is_aperture_supported(aperture)
    }

    fn widest(&self) -> Aperture {
        self.as_ref().widest()
    }

    fn narrowest(&self) -> Aperture {
        self.as_ref().narrowest()
    }
}
