//! UTM latitude bands

/// Latitude band: [south, north) in degrees, and its letter.
/// The northernmost band also includes its northern edge.
struct Band {
    south: f64,
    north: f64,
    letter: char,
}

const fn band(south: f64, north: f64, letter: char) -> Band {
    Band {
        south,
        north,
        letter,
    }
}

/// UTM bands, tested in order, first match wins.
const BANDS: [Band; 20] = [
    band(72.0, 84.0, 'X'),
    band(64.0, 72.0, 'W'),
    band(56.0, 64.0, 'V'),
    band(48.0, 56.0, 'U'),
    band(40.0, 48.0, 'T'),
    band(32.0, 40.0, 'S'),
    band(24.0, 32.0, 'R'),
    band(16.0, 24.0, 'Q'),
    band(8.0, 16.0, 'P'),
    band(0.0, 8.0, 'N'),
    band(-8.0, 0.0, 'M'),
    band(-16.0, -8.0, 'L'),
    band(-24.0, -16.0, 'K'),
    band(-32.0, -24.0, 'J'),
    band(-40.0, -32.0, 'H'),
    band(-48.0, -40.0, 'G'),
    band(-56.0, -48.0, 'F'),
    band(-64.0, -56.0, 'E'),
    band(-72.0, -64.0, 'D'),
    band(-80.0, -72.0, 'C'),
];

impl Band {
    fn contains(&self, lat_deg: f64) -> bool {
        lat_deg >= self.south
            && (lat_deg < self.north || (self.letter == 'X' && lat_deg <= self.north))
    }
}

/// Returns the UTM latitude band letter of `lat_deg` (degrees),
/// or None outside the UTM domain [-80°, 84°].
pub fn latitude_band(lat_deg: f64) -> Option<char> {
    BANDS
        .iter()
        .find(|band| band.contains(lat_deg))
        .map(|band| band.letter)
}
