// Effective light levels span -2 (the ISO 25 floor) to 20 (the ISO 3200 ceiling).
pub(crate) const COLUMNS: usize = 23;

const fn shutter_rows() -> [[u8; COLUMNS]; 13] {
    let mut rows = [[0u8; COLUMNS]; 13];
    let mut av = 1;
    while av <= 13 {
        let mut col = 0;
        while col < COLUMNS {
            let ev = col as i16 - 2;
            let speed = av as i16 + 13 - ev;
            rows[av - 1][col] = if speed <= 0 {
                0
            } else if speed >= 15 {
                15
            } else {
                speed as u8
            };
            col += 1;
        }
        av += 1;
    }
    rows
}

const fn aperture_rows() -> [[u8; COLUMNS]; 14] {
    let mut rows = [[0u8; COLUMNS]; 14];
    let mut tv = 1;
    while tv <= 14 {
        let mut col = 0;
        while col < COLUMNS {
            let ev = col as i16 - 2;
            let stop = ev + tv as i16 - 13;
            rows[tv - 1][col] = if 1 <= stop && stop <= 13 { stop as u8 } else { 0 };
            col += 1;
        }
        tv += 1;
    }
    rows
}

/// Shutter speed indices by fixed aperture row and effective light level column.
///
/// Row `av - 1` holds the apertures `f/1.0` through `f/64`. Column `ev + 2` spans the
/// effective levels `-2..=20`, one column per film speed shift. `0` marks a level brighter
/// than the fastest timed speed can expose, `15` one that only Bulb could.
pub(crate) const SHUTTER: [[u8; COLUMNS]; 13] = shutter_rows();

/// Aperture indices by fixed shutter speed row and effective light level column.
///
/// Row `tv - 1` holds the timed speeds `1/8000` through `1s`. `0` marks a level outside
/// what the f-number ladder spans at that speed, on either side.
pub(crate) const APERTURE: [[u8; COLUMNS]; 14] = aperture_rows();
