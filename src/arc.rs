//! Semicircular arcs in vertical planes
use std::f64::consts::PI;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::GROUND_LEVEL_M,
    coordinate::{Coordinate, SourcePosition},
};

/// Vertical [Plane] containing the source, in which arcs are drawn.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Plane {
    /// North-South like plane: x is pinned to the source,
    /// the arc spans the y axis.
    NorthSouth,
    /// East-West like plane: y is pinned to the source,
    /// the arc spans the x axis.
    EastWest,
}

impl std::fmt::Display for Plane {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::NorthSouth => write!(f, "NS"),
            Self::EastWest => write!(f, "EW"),
        }
    }
}

impl Plane {
    /// Both planes, in emission order.
    pub const ALL: [Plane; 2] = [Plane::NorthSouth, Plane::EastWest];

    /// Station name prefix of this [Plane]
    pub fn tag(&self) -> &'static str {
        match self {
            Self::NorthSouth => "HX",
            Self::EastWest => "HY",
        }
    }

    /// Places a point lying at horizontal `offset` [m] from the source,
    /// within [Self], at elevation `z` [m].
    pub fn place(&self, source: &SourcePosition, offset: f64, z: f64) -> Coordinate {
        match self {
            Self::NorthSouth => Coordinate::new(source.x, source.y + offset, z),
            Self::EastWest => Coordinate::new(source.x + offset, source.y, z),
        }
    }

    /// Signed horizontal offset [m] of `coord` from the source, within [Self].
    pub fn offset(&self, source: &SourcePosition, coord: &Coordinate) -> f64 {
        match self {
            Self::NorthSouth => coord.y() - source.y,
            Self::EastWest => coord.x() - source.x,
        }
    }
}

/// (cos θ, sin θ) of the i-th of n angles evenly spread over [0, π].
/// Endpoints and apex are exact.
fn half_circle(i: usize, n: usize) -> (f64, f64) {
    let last = n - 1;
    if i == 0 {
        (1.0, 0.0)
    } else if i == last {
        (-1.0, 0.0)
    } else if 2 * i == last {
        (0.0, 1.0)
    } else {
        let theta = i as f64 * PI / last as f64;
        (theta.cos(), theta.sin())
    }
}

/// Samples a semicircle of given `radius` [m] standing above the source
/// in requested [Plane]: `n_points` evenly spaced angles from 0 to π,
/// both included. Sample i lies at horizontal offset R cos θ and at height
/// R sin θ + `vertical_offset` above ground.
///
/// `n_points` must be at least 2: this is a precondition
/// of the [Config](crate::prelude::Config), checked ahead of time.
pub fn semicircle(
    source: &SourcePosition,
    radius: f64,
    n_points: usize,
    vertical_offset: f64,
    plane: Plane,
) -> Vec<Coordinate> {
    debug_assert!(n_points >= 2, "semicircle requires at least 2 points");
    (0..n_points)
        .map(|i| {
            let (cos, sin) = half_circle(i, n_points);
            let height = radius * sin + vertical_offset;
            plane.place(source, radius * cos, GROUND_LEVEL_M - height)
        })
        .collect()
}

/// Cross section sample, used for diagnostics
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ArcSample {
    /// Horizontal offset to the source [m], within the plane
    pub offset: f64,
    /// Elevation [m] (inverted-z)
    pub elevation: f64,
    /// Radius of the ring this sample belongs to [m]
    pub radius: f64,
}

/// All samples generated within one [Plane]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CrossSection {
    pub plane: Plane,
    pub samples: Vec<ArcSample>,
}

impl CrossSection {
    pub fn new(plane: Plane) -> Self {
        Self {
            plane,
            samples: Vec::new(),
        }
    }

    /// Stores all points of one arc
    pub(crate) fn extend(&mut self, source: &SourcePosition, radius: f64, arc: &[Coordinate]) {
        self.samples.extend(arc.iter().map(|coord| ArcSample {
            offset: self.plane.offset(source, coord),
            elevation: coord.z(),
            radius,
        }));
    }
}
