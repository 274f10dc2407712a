/// \[lx\]
#[allow(non_camel_case_types)]
pub struct lx;

/// Illuminance
#[derive(Clone, Copy, PartialEq, PartialOrd)]
pub struct Lux {
    pub(crate) lux: f32,
}

impl core::fmt::Debug for Lux {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} lx", self.lux)
    }
}

impl Lux {
    #[inline]
    /// Returns the illuminance in lx.
    pub const fn lx(&self) -> f32 {
        self.lux
    }
}

impl core::ops::Mul<lx> for f32 {
    type Output = Lux;

    fn mul(self, _rhs: lx) -> Self::Output {
        Self::Output { lux: self }
    }
}

impl core::ops::Mul<lx> for u32 {
    type Output = Lux;

    fn mul(self, _rhs: lx) -> Self::Output {
        Self::Output { lux: self as f32 }
    }
}

impl core::ops::Add<Lux> for Lux {
    type Output = Lux;

    fn add(self, rhs: Lux) -> Self::Output {
        Lux {
            lux: self.lux + rhs.lux,
        }
    }
}

impl core::ops::Sub<Lux> for Lux {
    type Output = Lux;

    fn sub(self, rhs: Lux) -> Self::Output {
        Lux {
            lux: self.lux - rhs.lux,
        }
    }
}

impl core::ops::Mul<f32> for Lux {
    type Output = Lux;

    fn mul(self, rhs: f32) -> Self::Output {
        Lux {
            lux: self.lux * rhs,
        }
    }
}

impl core::ops::Div<f32> for Lux {
    type Output = Lux;

    fn div(self, rhs: f32) -> Self::Output {
        Lux {
            lux: self.lux / rhs,
        }
    }
}
