//! Local cartesian coordinates
use crate::constants::GROUND_LEVEL_M;
use crate::prelude::Vector3;

/// [Coordinate] in the simulation frame, in meters.
/// The z axis is inverted: more negative means higher above ground,
/// ground level being z = 0.
#[derive(Default, Debug, Copy, Clone, PartialEq)]
pub struct Coordinate(pub(crate) Vector3<f64>);

impl Coordinate {
    /// Builds new [Coordinate] from x, y, z [m]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self(Vector3::new(x, y, z))
    }
    /// First horizontal coordinate [m]
    pub fn x(&self) -> f64 {
        self.0[0]
    }
    /// Second horizontal coordinate [m]
    pub fn y(&self) -> f64 {
        self.0[1]
    }
    /// Elevation [m], inverted-z convention
    pub fn z(&self) -> f64 {
        self.0[2]
    }
    /// Height above ground [m]
    pub fn height(&self) -> f64 {
        GROUND_LEVEL_M - self.z()
    }
}

/// Horizontal position of the source, read once from the input.
#[derive(Default, Debug, Copy, Clone, PartialEq)]
pub struct SourcePosition {
    /// First horizontal coordinate [m]
    pub x: f64,
    /// Second horizontal coordinate [m]
    pub y: f64,
}

impl SourcePosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "x={:.2}, y={:.2}", self.x, self.y)
    }
}
