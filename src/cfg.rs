use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::{
    ACOUSTIC_VARIABLES, DEFAULT_ARC_POINTS, DEFAULT_RINGS_M, MIN_ARC_POINTS, SAC_FORMAT,
};

/// Configuration Error
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("at least 2 points per arc are required, got {0}")]
    NotEnoughArcPoints(usize),
    #[error("no ring radius defined")]
    NoRings,
    #[error("invalid ring radius {0} (must be finite and > 0)")]
    InvalidRadius(f64),
    /// Vertical offset must be finite. Negative offsets are rejected too:
    /// they would bury arc endpoints below ground level.
    #[error("invalid vertical offset {0} (must be finite and >= 0)")]
    InvalidVerticalOffset(f64),
}

fn default_rings() -> Vec<f64> {
    DEFAULT_RINGS_M.to_vec()
}

fn default_points_per_arc() -> usize {
    DEFAULT_ARC_POINTS
}

fn default_vertical_offset() -> f64 {
    0.0
}

fn default_variables() -> String {
    ACOUSTIC_VARIABLES.to_string()
}

fn default_sac_format() -> u8 {
    SAC_FORMAT
}

/// Ring [Config]uration, fixed for the whole run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Ring radii [m], in emission order.
    /// Ring indices in station names follow this order.
    #[cfg_attr(feature = "serde", serde(default = "default_rings"))]
    pub rings: Vec<f64>,
    /// Number of samples per semicircle, both endpoints included.
    #[cfg_attr(feature = "serde", serde(default = "default_points_per_arc"))]
    pub points_per_arc: usize,
    /// Constant height [m] added above every arc sample.
    /// Arcs are lifted by this amount (z becomes more negative).
    #[cfg_attr(feature = "serde", serde(default = "default_vertical_offset"))]
    pub vertical_offset: f64,
    /// Variables recorded by synthesized receivers
    #[cfg_attr(feature = "serde", serde(default = "default_variables"))]
    pub variables: String,
    /// SAC format flag of synthesized receivers
    #[cfg_attr(feature = "serde", serde(default = "default_sac_format"))]
    pub sac_format: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rings: default_rings(),
            points_per_arc: default_points_per_arc(),
            vertical_offset: default_vertical_offset(),
            variables: default_variables(),
            sac_format: default_sac_format(),
        }
    }
}

impl Config {
    /// Copies [Self] with new ring radii [m]
    pub fn with_rings(&self, rings: &[f64]) -> Self {
        let mut s = self.clone();
        s.rings = rings.to_vec();
        s
    }

    /// Copies [Self] with new number of samples per arc
    pub fn with_points_per_arc(&self, points: usize) -> Self {
        let mut s = self.clone();
        s.points_per_arc = points;
        s
    }

    /// Copies [Self] with new vertical offset [m]
    pub fn with_vertical_offset(&self, offset_m: f64) -> Self {
        let mut s = self.clone();
        s.vertical_offset = offset_m;
        s
    }

    /// Total number of stations this [Config] synthesizes (both planes).
    pub fn total_stations(&self) -> usize {
        2 * self.points_per_arc * self.rings.len()
    }

    /// Verifies the preconditions of the arc generation.
    /// Must pass before any station is generated.
    pub fn validate(&self) -> Result<(), Error> {
        if self.points_per_arc < MIN_ARC_POINTS {
            return Err(Error::NotEnoughArcPoints(self.points_per_arc));
        }
        if self.rings.is_empty() {
            return Err(Error::NoRings);
        }
        if let Some(radius) = self
            .rings
            .iter()
            .find(|r| !r.is_finite() || **r <= 0.0)
        {
            return Err(Error::InvalidRadius(*radius));
        }
        if !self.vertical_offset.is_finite() || self.vertical_offset < 0.0 {
            return Err(Error::InvalidVerticalOffset(self.vertical_offset));
        }
        Ok(())
    }
}
