//! ElAc receiver records
use itertools::Itertools;

use crate::{
    cfg::Config,
    constants::RECEIVER_TOKEN,
    coordinate::Coordinate,
    station::Station,
};

/// Formats `value` with exactly 2 fractional digits.
/// Values that round to zero are printed unsigned.
pub(crate) fn fixed2(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    if formatted == "-0.00" {
        "0.00".to_string()
    } else {
        formatted
    }
}

/// [ReceiverRecord] as expressed in ElAc input files
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiverRecord {
    pub coordinate: Coordinate,
    /// Recorded variables
    pub variables: String,
    /// SAC format flag
    pub sac_format: u8,
    /// Output file identifier
    pub file: String,
}

impl ReceiverRecord {
    /// Builds the [ReceiverRecord] of a synthesized [Station]
    pub fn from_station(station: &Station, cfg: &Config) -> Self {
        Self {
            coordinate: station.coordinate,
            variables: cfg.variables.clone(),
            sac_format: cfg.sac_format,
            file: station.name.to_string(),
        }
    }
}

impl std::fmt::Display for ReceiverRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} x={} y={} z={} variables={} sacformat={} file={}",
            RECEIVER_TOKEN,
            fixed2(self.coordinate.x()),
            fixed2(self.coordinate.y()),
            fixed2(self.coordinate.z()),
            self.variables,
            self.sac_format,
            self.file,
        )
    }
}

/// Final output text: original (normalized) lines, one blank separator line,
/// then one line per record. Text ends with a single newline.
pub fn assemble<S: AsRef<str>>(lines: &[S], records: &[ReceiverRecord]) -> String {
    let original = lines.iter().map(|line| line.as_ref().to_string());
    let synthesized = records.iter().map(ToString::to_string);

    let mut text = original
        .chain(std::iter::once(String::new()))
        .chain(synthesized)
        .join("\n");

    text.push('\n');
    text
}
