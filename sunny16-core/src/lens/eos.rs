use crate::exposure::Aperture;

const EF_50MM_F12: [i8; 13] = [12, 16, 24, 32, 40, 48, 56, 64, 72, -1, -1, -1, -1];
const EF_50MM_F14: [i8; 13] = [0, 16, 24, 32, 40, 48, 56, 64, 72, 80, -1, -1, -1];
const EF_50MM_F18: [i8; 13] = [0, 22, 24, 32, 40, 48, 56, 64, 72, 80, -1, -1, -1];
const EF_85MM_F12: [i8; 13] = [12, 16, 24, 32, 40, 48, 56, 64, 72, -1, -1, -1, -1];
const EF_85MM_F18: [i8; 13] = [0, 22, 24, 32, 40, 48, 56, 64, 72, 80, -1, -1, -1];

/// An EOS EF lens driven over the mount contacts.
///
/// Each model answers a full-stop request with the byte its aperture motor takes. A lens
/// whose wide end sits on a third stop answers the adjacent full-stop request with its
/// wide-open byte, so `f/1.0` on an f/1.2 model programs `12`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EosModel {
    /// EF 50mm f/1.2
    Ef50mmF12,
    /// EF 50mm f/1.4
    Ef50mmF14,
    /// EF 50mm f/1.8
    Ef50mmF18,
    /// EF 85mm f/1.2
    Ef85mmF12,
    /// EF 85mm f/1.8
    Ef85mmF18,
}

impl EosModel {
    /// All supported models.
    pub const VALUES: [EosModel; 5] = [
        EosModel::Ef50mmF12,
        EosModel::Ef50mmF14,
        EosModel::Ef50mmF18,
        EosModel::Ef85mmF12,
        EosModel::Ef85mmF18,
    ];

    const fn table(self) -> &'static [i8; 13] {
        match self {
            EosModel::Ef50mmF12 => &EF_50MM_F12,
            EosModel::Ef50mmF14 => &EF_50MM_F14,
            EosModel::Ef50mmF18 => &EF_50MM_F18,
            EosModel::Ef85mmF12 => &EF_85MM_F12,
            EosModel::Ef85mmF18 => &EF_85MM_F18,
        }
    }

    /// The table entry for `aperture`. `0` marks a stop wider than the lens opens, `-1` a
    /// stop narrower than the lens closes.
    const fn entry(self, aperture: Aperture) -> i8 {
        match aperture.0 {
            v @ 1..=13 => self.table()[(v - 1) as usize],
            _ => -1,
        }
    }

    /// The byte to program for `aperture`, or `None` if the lens cannot take it.
    pub const fn ef_code(self, aperture: Aperture) -> Option<u8> {
        match self.entry(aperture) {
            code if code > 0 => Some(code as u8),
            _ => None,
        }
    }

    /// Checks if the lens can be set to `aperture`.
    pub const fn is_aperture_supported(self, aperture: Aperture) -> bool {
        self.entry(aperture) > 0
    }

    /// The widest full-stop request the lens accepts.
    pub const fn widest(self) -> Aperture {
        let table = self.table();
        let mut i = 0;
        while i < table.len() {
            if table[i] > 0 {
                return Aperture(i as u8 + 1);
            }
            i += 1;
        }
        Aperture::NONE
    }

    /// The narrowest full-stop request the lens accepts.
    pub const fn narrowest(self) -> Aperture {
        let table = self.table();
        let mut i = table.len();
        while i > 0 {
            if table[i - 1] > 0 {
                return Aperture(i as u8);
            }
            i -= 1;
        }
        Aperture::NONE
    }
}

impl core::fmt::Display for EosModel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            EosModel::Ef50mmF12 => write!(f, "EF 50mm f/1.2"),
            EosModel::Ef50mmF14 => write!(f, "EF 50mm f/1.4"),
            EosModel::Ef50mmF18 => write!(f, "EF 50mm f/1.8"),
            EosModel::Ef85mmF12 => write!(f, "EF 85mm f/1.2"),
            EosModel::Ef85mmF18 => write!(f, "EF 85mm f/1.8"),
        }
    }
}
