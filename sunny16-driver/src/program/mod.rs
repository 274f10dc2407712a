mod table;

use sunny16_core::{
    exposure::{Aperture, Ev, Iso, ShutterSpeed},
    lens::Lens,
};

use crate::{
    clamp,
    error::{ExposureError, Saturation},
};

/// A resolved aperture and shutter speed pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Exposure {
    /// The aperture to set.
    pub aperture: Aperture,
    /// The shutter speed to set.
    pub shutter: ShutterSpeed,
}

/// Looks up the shutter speed for a fixed aperture.
///
/// Returns the raw program entry. [`ShutterSpeed::NONE`] marks a level brighter than the
/// fastest timed speed can expose at this aperture, [`ShutterSpeed::BULB`] one that only
/// Bulb could. Fixed apertures off the ladder yield [`ShutterSpeed::NONE`].
pub const fn shutter_for(ev: Ev, iso: Iso, aperture: Aperture) -> ShutterSpeed {
    match (ev.0, aperture.0) {
        (e @ 0..=15, a @ 1..=13) => {
            let col = (e as i8 + iso.offset() + 2) as usize;
            ShutterSpeed(table::SHUTTER[(a - 1) as usize][col])
        }
        _ => ShutterSpeed::NONE,
    }
}

/// Looks up the aperture for a fixed timed shutter speed.
///
/// Returns the raw program entry. [`Aperture::NONE`] marks a level the f-number ladder
/// cannot span at this speed, on either side. Fixed speeds off the timed ladder, Bulb
/// included, yield [`Aperture::NONE`].
pub const fn aperture_for(ev: Ev, iso: Iso, shutter: ShutterSpeed) -> Aperture {
    match (ev.0, shutter.0) {
        (e @ 0..=15, t @ 1..=14) => {
            let col = (e as i8 + iso.offset() + 2) as usize;
            Aperture(table::APERTURE[(t - 1) as usize][col])
        }
        _ => Aperture::NONE,
    }
}

/// Resolves the shutter speed for a user-fixed aperture.
///
/// The fixed aperture is first clamped to what the lens can take, the derived speed to
/// what the shutter can fire. A level the program cannot expose at the clamped aperture is
/// reported as [`ExposureError::NoSolution`], never rounded to the nearest stop.
pub fn resolve_aperture_priority<L: Lens>(
    ev: Ev,
    iso: Iso,
    aperture: Aperture,
    lens: &L,
    max_speed: ShutterSpeed,
) -> Result<Exposure, ExposureError> {
    let aperture = clamp::aperture(aperture, lens)?;
    let shutter = clamp::shutter(shutter_for(ev, iso, aperture), max_speed)?;
    Ok(Exposure { aperture, shutter })
}

/// Resolves the aperture for a user-fixed shutter speed.
///
/// The fixed speed is first clamped to what the shutter can fire, the derived stop to what
/// the lens can take.
pub fn resolve_shutter_priority<L: Lens>(
    ev: Ev,
    iso: Iso,
    shutter: ShutterSpeed,
    lens: &L,
    max_speed: ShutterSpeed,
) -> Result<Exposure, ExposureError> {
    let shutter = clamp::shutter(shutter, max_speed)?;
    let raw = aperture_for(ev, iso, shutter);
    if raw.is_none() {
        let stop = ev.0 as i16 + iso.offset() as i16 + shutter.0 as i16 - 13;
        return Err(ExposureError::NoSolution(if stop <= 0 {
            Saturation::TooDim
        } else {
            Saturation::TooBright
        }));
    }
    let aperture = clamp::aperture(raw, lens)?;
    Ok(Exposure { aperture, shutter })
}

#[cfg(test)]
mod tests {
    use super::*;

    use sunny16_core::lens::{EosModel, LensKind};

    #[rstest::rstest]
    #[case::f1_iso100(
        Aperture::F1_0,
        Iso::Iso100,
        [14, 13, 12, 11, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1, 0, 0]
    )]
    #[case::f5_6_iso100(
        Aperture::F5_6,
        Iso::Iso100,
        [15, 15, 15, 15, 15, 14, 13, 12, 11, 10, 9, 8, 7, 6, 5, 4]
    )]
    #[case::f64_iso100(
        Aperture::F64,
        Iso::Iso100,
        [15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 14, 13, 12, 11]
    )]
    #[case::f1_iso25(
        Aperture::F1_0,
        Iso::Iso25,
        [15, 15, 14, 13, 12, 11, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1]
    )]
    #[case::f64_iso25(
        Aperture::F64,
        Iso::Iso25,
        [15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 14, 13]
    )]
    #[case::f1_iso800(
        Aperture::F1_0,
        Iso::Iso800,
        [11, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1, 0, 0, 0, 0, 0]
    )]
    #[case::f5_6_iso400(
        Aperture::F5_6,
        Iso::Iso400,
        [15, 15, 15, 14, 13, 12, 11, 10, 9, 8, 7, 6, 5, 4, 3, 2]
    )]
    fn shutter_families(
        #[case] aperture: Aperture,
        #[case] iso: Iso,
        #[case] expected: [u8; 16],
    ) {
        (0..=15).for_each(|ev| {
            assert_eq!(
                ShutterSpeed(expected[ev as usize]),
                shutter_for(Ev(ev), iso, aperture)
            );
        });
    }

    #[rstest::rstest]
    #[case::t1s_iso100(
        ShutterSpeed::T1,
        Iso::Iso100,
        [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 0, 0, 0]
    )]
    #[case::t8000_iso100(
        ShutterSpeed::T8000,
        Iso::Iso100,
        [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 3]
    )]
    #[case::t1s_iso25(
        ShutterSpeed::T1,
        Iso::Iso25,
        [0, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 0]
    )]
    #[case::t15_iso400(
        ShutterSpeed::T15,
        Iso::Iso400,
        [0, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 0]
    )]
    #[case::t8000_iso800(
        ShutterSpeed::T8000,
        Iso::Iso800,
        [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 3, 4, 5, 6]
    )]
    fn aperture_families(
        #[case] shutter: ShutterSpeed,
        #[case] iso: Iso,
        #[case] expected: [u8; 16],
    ) {
        (0..=15).for_each(|ev| {
            assert_eq!(
                Aperture(expected[ev as usize]),
                aperture_for(Ev(ev), iso, shutter)
            );
        });
    }

    #[rstest::rstest]
    #[case::blank(Aperture::NONE)]
    #[case::off_ladder(Aperture(14))]
    fn shutter_for_rejects_fixed(#[case] aperture: Aperture) {
        assert_eq!(
            ShutterSpeed::NONE,
            shutter_for(Ev(8), Iso::Iso100, aperture)
        );
    }

    #[rstest::rstest]
    #[case::blank(ShutterSpeed::NONE)]
    #[case::bulb(ShutterSpeed::BULB)]
    fn aperture_for_rejects_fixed(#[case] shutter: ShutterSpeed) {
        assert_eq!(Aperture::NONE, aperture_for(Ev(8), Iso::Iso100, shutter));
    }

    #[test]
    fn one_stop_reciprocity() {
        itertools::iproduct!(0u8..15, Iso::VALUES, 1u8..=13).for_each(|(ev, iso, av)| {
            let dim = shutter_for(Ev(ev), iso, Aperture(av));
            let bright = shutter_for(Ev(ev + 1), iso, Aperture(av));
            if !dim.is_none() && !dim.is_bulb() && !bright.is_none() && !bright.is_bulb() {
                assert_eq!(dim.0 - 1, bright.0);
            }
        });
        itertools::iproduct!(0u8..15, Iso::VALUES, 1u8..=14).for_each(|(ev, iso, tv)| {
            let dim = aperture_for(Ev(ev), iso, ShutterSpeed(tv));
            let bright = aperture_for(Ev(ev + 1), iso, ShutterSpeed(tv));
            if !dim.is_none() && !bright.is_none() {
                assert_eq!(dim.0 + 1, bright.0);
            }
        });
    }

    #[test]
    fn aperture_priority_nominal() -> anyhow::Result<()> {
        let lens = LensKind::Manual {
            widest: Aperture::F1_0,
        };
        assert_eq!(
            Exposure {
                aperture: Aperture::F5_6,
                shutter: ShutterSpeed::T1,
            },
            resolve_aperture_priority(
                Ev(5),
                Iso::Iso100,
                Aperture::F5_6,
                &lens,
                ShutterSpeed::T1000
            )?
        );
        Ok(())
    }

    #[test]
    fn aperture_priority_walks_fixed_stop() -> anyhow::Result<()> {
        let lens = LensKind::Eos(EosModel::Ef50mmF14);
        assert_eq!(
            Exposure {
                aperture: Aperture::F1_4,
                shutter: ShutterSpeed::T1000,
            },
            resolve_aperture_priority(
                Ev(13),
                Iso::Iso100,
                Aperture::F1_0,
                &lens,
                ShutterSpeed::T1000
            )?
        );
        Ok(())
    }

    #[rstest::rstest]
    #[case::too_bright(
        Saturation::TooBright,
        Ev(15),
        Iso::Iso800,
        Aperture::F1_0
    )]
    #[case::too_dim(Saturation::TooDim, Ev(0), Iso::Iso25, Aperture::F64)]
    fn aperture_priority_saturates(
        #[case] expected: Saturation,
        #[case] ev: Ev,
        #[case] iso: Iso,
        #[case] aperture: Aperture,
    ) {
        let lens = LensKind::Manual {
            widest: Aperture::F1_0,
        };
        assert_eq!(
            Err(ExposureError::NoSolution(expected)),
            resolve_aperture_priority(ev, iso, aperture, &lens, ShutterSpeed::T1000)
        );
    }

    #[test]
    fn shutter_priority_nominal() -> anyhow::Result<()> {
        let lens = LensKind::Manual {
            widest: Aperture::F1_0,
        };
        assert_eq!(
            Exposure {
                aperture: Aperture::F8,
                shutter: ShutterSpeed::T125,
            },
            resolve_shutter_priority(
                Ev(13),
                Iso::Iso100,
                ShutterSpeed::T125,
                &lens,
                ShutterSpeed::T1000
            )?
        );
        Ok(())
    }

    #[test]
    fn shutter_priority_clamps_fixed_speed() -> anyhow::Result<()> {
        let lens = LensKind::Manual {
            widest: Aperture::F1_0,
        };
        assert_eq!(
            Exposure {
                aperture: Aperture::F2_8,
                shutter: ShutterSpeed::T1000,
            },
            resolve_shutter_priority(
                Ev(13),
                Iso::Iso100,
                ShutterSpeed::T4000,
                &lens,
                ShutterSpeed::T1000
            )?
        );
        Ok(())
    }

    #[test]
    fn shutter_priority_dim_scene_has_no_solution() {
        let lens = LensKind::Manual {
            widest: Aperture::F1_0,
        };
        assert_eq!(
            Err(ExposureError::NoSolution(Saturation::TooDim)),
            resolve_shutter_priority(
                Ev(0),
                Iso::Iso100,
                ShutterSpeed::T125,
                &lens,
                ShutterSpeed::T1000
            )
        );
    }

    #[test]
    fn shutter_priority_reports_unreachable_stop() {
        let lens = LensKind::Eos(EosModel::Ef50mmF12);
        assert_eq!(
            Err(ExposureError::UnsupportedAperture(Aperture::F22)),
            resolve_shutter_priority(
                Ev(13),
                Iso::Iso200,
                ShutterSpeed::T30,
                &lens,
                ShutterSpeed::T1000
            )
        );
    }
}
