use core::time::Duration;

/// A shutter speed on the full-stop ladder.
///
/// Index `0` is the blank sentinel shown as `-` on the indicator. Indices `1..=14` select
/// the timed speeds `1/8000` through `1s`, and index `15` is `Bulb`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(C)]
pub struct ShutterSpeed(pub u8);

impl ShutterSpeed {
    /// No shutter speed. The indicator shows `-`.
    pub const NONE: ShutterSpeed = ShutterSpeed(0);
    /// 1/8000 s
    pub const T8000: ShutterSpeed = ShutterSpeed(1);
    /// 1/4000 s
    pub const T4000: ShutterSpeed = ShutterSpeed(2);
    /// 1/2000 s
    pub const T2000: ShutterSpeed = ShutterSpeed(3);
    /// 1/1000 s
    pub const T1000: ShutterSpeed = ShutterSpeed(4);
    /// 1/500 s
    pub const T500: ShutterSpeed = ShutterSpeed(5);
    /// 1/250 s
    pub const T250: ShutterSpeed = ShutterSpeed(6);
    /// 1/125 s
    pub const T125: ShutterSpeed = ShutterSpeed(7);
    /// 1/60 s
    pub const T60: ShutterSpeed = ShutterSpeed(8);
    /// 1/30 s
    pub const T30: ShutterSpeed = ShutterSpeed(9);
    /// 1/15 s
    pub const T15: ShutterSpeed = ShutterSpeed(10);
    /// 1/8 s
    pub const T8: ShutterSpeed = ShutterSpeed(11);
    /// 1/4 s
    pub const T4: ShutterSpeed = ShutterSpeed(12);
    /// 1/2 s
    pub const T2: ShutterSpeed = ShutterSpeed(13);
    /// 1 s
    pub const T1: ShutterSpeed = ShutterSpeed(14);
    /// Bulb. The shutter stays open while the release is held.
    pub const BULB: ShutterSpeed = ShutterSpeed(15);

    /// The fastest timed speed on the ladder.
    pub const FASTEST: ShutterSpeed = ShutterSpeed::T8000;
    /// The slowest timed speed on the ladder.
    pub const SLOWEST: ShutterSpeed = ShutterSpeed::T1;

    /// Returns `true` if this is the blank sentinel.
    pub const fn is_none(self) -> bool {
        self.0 == Self::NONE.0
    }

    /// Returns `true` if this is `Bulb`.
    pub const fn is_bulb(self) -> bool {
        self.0 == Self::BULB.0
    }

    /// The curtain interval, or `None` for the blank sentinel and `Bulb`.
    ///
    /// `1/8000` through `1/2000` are exact in microseconds. Slower timed speeds are rounded
    /// to whole milliseconds.
    pub const fn duration(self) -> Option<Duration> {
        const MILLIS: [u64; 11] = [1, 2, 4, 8, 17, 33, 67, 125, 250, 500, 1000];
        match self.0 {
            1 => Some(Duration::from_micros(125)),
            2 => Some(Duration::from_micros(250)),
            3 => Some(Duration::from_micros(500)),
            v @ 4..=14 => Some(Duration::from_millis(MILLIS[(v - 4) as usize])),
            _ => None,
        }
    }

    /// The engraved denominator, or `None` for the blank sentinel and `Bulb`.
    ///
    /// `1s` is engraved `1`.
    pub const fn marking(self) -> Option<u16> {
        const MARKINGS: [u16; 14] = [
            8000, 4000, 2000, 1000, 500, 250, 125, 60, 30, 15, 8, 4, 2, 1,
        ];
        match self.0 {
            v @ 1..=14 => Some(MARKINGS[(v - 1) as usize]),
            _ => None,
        }
    }

    /// Shifts by `stops` toward the fast end, saturating at [`ShutterSpeed::FASTEST`].
    ///
    /// The blank sentinel stays blank.
    pub const fn faster(self, stops: u8) -> Self {
        if self.is_none() {
            return self;
        }
        match self.0.saturating_sub(stops) {
            v if v < Self::FASTEST.0 => Self::FASTEST,
            v => Self(v),
        }
    }

    /// Shifts by `stops` toward the slow end, saturating at [`ShutterSpeed::BULB`].
    ///
    /// The blank sentinel stays blank.
    pub const fn slower(self, stops: u8) -> Self {
        if self.is_none() {
            return self;
        }
        match self.0.saturating_add(stops) {
            v if v > Self::BULB.0 => Self::BULB,
            v => Self(v),
        }
    }
}

impl core::fmt::Display for ShutterSpeed {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.0 {
            0 => write!(f, "-"),
            14 => write!(f, "1s"),
            15 => write!(f, "Bulb"),
            v => match Self(v).marking() {
                Some(m) => write!(f, "{}", m),
                None => write!(f, "-"),
            },
        }
    }
}

impl core::fmt::Debug for ShutterSpeed {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.0 {
            0 => write!(f, "-"),
            14 => write!(f, "1s"),
            15 => write!(f, "Bulb"),
            v => match Self(v).marking() {
                Some(m) => write!(f, "1/{}", m),
                None => write!(f, "-"),
            },
        }
    }
}
