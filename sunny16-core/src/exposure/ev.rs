/// The metered light level, in whole photographic stops.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(C)]
pub struct Ev(pub u8);

impl core::fmt::Debug for Ev {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "EV {}", self.0)
    }
}

impl Ev {
    /// The darkest meterable light level.
    pub const MIN: Ev = Ev(0);
    /// The brightest meterable light level.
    pub const MAX: Ev = Ev(15);
}

impl core::ops::Add<u8> for Ev {
    type Output = Self;

    fn add(self, rhs: u8) -> Self::Output {
        match self.0.saturating_add(rhs) {
            v if v > Self::MAX.0 => Self::MAX,
            v => Self(v),
        }
    }
}

impl core::ops::Sub<u8> for Ev {
    type Output = Self;

    fn sub(self, rhs: u8) -> Self::Output {
        Self(self.0.saturating_sub(rhs))
    }
}
