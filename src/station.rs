//! Air stations synthesis
use log::{debug, info};

use crate::{
    arc::{semicircle, CrossSection, Plane},
    cfg::Config,
    coordinate::{Coordinate, SourcePosition},
    error::Error,
};

/// Deterministic [StationName]: plane tag, ring and point indices
/// (both 1-based), for example `HX2_17`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationName {
    pub plane: Plane,
    /// 1-based ring index, in [Config] order
    pub ring: usize,
    /// 1-based point index along the arc
    pub point: usize,
}

impl std::fmt::Display for StationName {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}_{}", self.plane.tag(), self.ring, self.point)
    }
}

/// Synthesized air [Station]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Station {
    pub name: StationName,
    pub coordinate: Coordinate,
}

/// Result of [synthesize]
#[derive(Debug, Clone, PartialEq)]
pub struct Synthesis {
    /// All stations, in emission order
    pub stations: Vec<Station>,
    /// One [CrossSection] per [Plane], in [Plane::ALL] order
    pub sections: Vec<CrossSection>,
}

/// Generates the air stations of every ring, in both planes.
/// For each ring (in [Config] order) the North-South arc is emitted
/// first, then the East-West arc.
pub fn synthesize(source: &SourcePosition, cfg: &Config) -> Result<Synthesis, Error> {
    cfg.validate()?;

    let mut stations = Vec::with_capacity(cfg.total_stations());
    let mut sections = Plane::ALL.map(CrossSection::new);

    for (ring_idx, radius) in cfg.rings.iter().enumerate() {
        let ring = ring_idx + 1;
        for section in sections.iter_mut() {
            let plane = section.plane;
            let arc = semicircle(
                source,
                *radius,
                cfg.points_per_arc,
                cfg.vertical_offset,
                plane,
            );

            section.extend(source, *radius, &arc);

            stations.extend(arc.into_iter().enumerate().map(|(pt_idx, coordinate)| {
                Station {
                    name: StationName {
                        plane,
                        ring,
                        point: pt_idx + 1,
                    },
                    coordinate,
                }
            }));
        }
        debug!("ring #{} ({} m): {} stations", ring, radius, 2 * cfg.points_per_arc);
    }

    info!(
        "generated {} air stations ({} rings x {} pts x 2 planes)",
        stations.len(),
        cfg.rings.len(),
        cfg.points_per_arc
    );

    Ok(Synthesis {
        stations,
        sections: sections.into(),
    })
}
