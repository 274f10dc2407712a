/// An aperture stop on the full-stop f-number ladder.
///
/// Index `0` is the blank sentinel shown as `-` on the indicator. Indices `1..=13` select
/// `f/1.0` through `f/64`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(C)]
pub struct Aperture(pub u8);

impl Aperture {
    /// No aperture. The indicator shows `-`.
    pub const NONE: Aperture = Aperture(0);
    /// f/1.0
    pub const F1_0: Aperture = Aperture(1);
    /// f/1.4
    pub const F1_4: Aperture = Aperture(2);
    /// f/2
    pub const F2: Aperture = Aperture(3);
    /// f/2.8
    pub const F2_8: Aperture = Aperture(4);
    /// f/4
    pub const F4: Aperture = Aperture(5);
    /// f/5.6
    pub const F5_6: Aperture = Aperture(6);
    /// f/8
    pub const F8: Aperture = Aperture(7);
    /// f/11
    pub const F11: Aperture = Aperture(8);
    /// f/16
    pub const F16: Aperture = Aperture(9);
    /// f/22
    pub const F22: Aperture = Aperture(10);
    /// f/32
    pub const F32: Aperture = Aperture(11);
    /// f/45
    pub const F45: Aperture = Aperture(12);
    /// f/64
    pub const F64: Aperture = Aperture(13);

    /// The widest stop on the ladder.
    pub const WIDEST: Aperture = Aperture::F1_0;
    /// The narrowest stop on the ladder.
    pub const NARROWEST: Aperture = Aperture::F64;

    /// Returns `true` if this is the blank sentinel.
    pub const fn is_none(self) -> bool {
        self.0 == Self::NONE.0
    }

    /// The marked f-number, or `None` for the blank sentinel.
    pub const fn f_number(self) -> Option<f32> {
        match self.0 {
            1 => Some(1.0),
            2 => Some(1.4),
            3 => Some(2.0),
            4 => Some(2.8),
            5 => Some(4.0),
            6 => Some(5.6),
            7 => Some(8.0),
            8 => Some(11.0),
            9 => Some(16.0),
            10 => Some(22.0),
            11 => Some(32.0),
            12 => Some(45.0),
            13 => Some(64.0),
            _ => None,
        }
    }

    /// The engraving for this stop. The blank sentinel is engraved `-`.
    pub const fn marking(self) -> &'static str {
        match self.0 {
            1 => "1",
            2 => "1.4",
            3 => "2",
            4 => "2.8",
            5 => "4",
            6 => "5.6",
            7 => "8",
            8 => "11",
            9 => "16",
            10 => "22",
            11 => "32",
            12 => "45",
            13 => "64",
            _ => "-",
        }
    }

    /// Closes the aperture by `stops`, saturating at [`Aperture::NARROWEST`].
    ///
    /// The blank sentinel stays blank.
    pub const fn stopped_down(self, stops: u8) -> Self {
        if self.is_none() {
            return self;
        }
        match self.0.saturating_add(stops) {
            v if v > Self::NARROWEST.0 => Self::NARROWEST,
            v => Self(v),
        }
    }

    /// Opens the aperture by `stops`, saturating at [`Aperture::WIDEST`].
    ///
    /// The blank sentinel stays blank.
    pub const fn opened_up(self, stops: u8) -> Self {
        if self.is_none() {
            return self;
        }
        match self.0.saturating_sub(stops) {
            v if v < Self::WIDEST.0 => Self::WIDEST,
            v => Self(v),
        }
    }
}

impl core::fmt::Display for Aperture {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.marking())
    }
}

impl core::fmt::Debug for Aperture {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "f/{}", self.marking())
    }
}
