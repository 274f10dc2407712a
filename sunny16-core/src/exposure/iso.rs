/// A film speed on the full-stop ISO ladder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Iso {
    /// ISO 25
    Iso25,
    /// ISO 50
    Iso50,
    /// ISO 100
    #[default]
    Iso100,
    /// ISO 200
    Iso200,
    /// ISO 400
    Iso400,
    /// ISO 800
    Iso800,
    /// ISO 1600
    Iso1600,
    /// ISO 3200
    Iso3200,
}

impl Iso {
    /// All speeds, slowest first.
    pub const VALUES: [Iso; 8] = [
        Iso::Iso25,
        Iso::Iso50,
        Iso::Iso100,
        Iso::Iso200,
        Iso::Iso400,
        Iso::Iso800,
        Iso::Iso1600,
        Iso::Iso3200,
    ];

    /// The arithmetic film speed.
    pub const fn speed(self) -> u16 {
        match self {
            Iso::Iso25 => 25,
            Iso::Iso50 => 50,
            Iso::Iso100 => 100,
            Iso::Iso200 => 200,
            Iso::Iso400 => 400,
            Iso::Iso800 => 800,
            Iso::Iso1600 => 1600,
            Iso::Iso3200 => 3200,
        }
    }

    /// The sensitivity offset in whole stops relative to ISO 100.
    pub const fn offset(self) -> i8 {
        match self {
            Iso::Iso25 => -2,
            Iso::Iso50 => -1,
            Iso::Iso100 => 0,
            Iso::Iso200 => 1,
            Iso::Iso400 => 2,
            Iso::Iso800 => 3,
            Iso::Iso1600 => 4,
            Iso::Iso3200 => 5,
        }
    }

    /// The ladder stop at or below an arbitrary film speed.
    ///
    /// Third-stop emulsions rate down to the full stop beneath them, so ISO 160 film is
    /// exposed as ISO 100. Speeds below 25 rate as ISO 25.
    pub const fn from_film_speed(speed: u16) -> Iso {
        match speed {
            0..=49 => Iso::Iso25,
            50..=99 => Iso::Iso50,
            100..=199 => Iso::Iso100,
            200..=399 => Iso::Iso200,
            400..=799 => Iso::Iso400,
            800..=1599 => Iso::Iso800,
            1600..=3199 => Iso::Iso1600,
            _ => Iso::Iso3200,
        }
    }
}

impl core::fmt::Display for Iso {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "ISO {}", self.speed())
    }
}
