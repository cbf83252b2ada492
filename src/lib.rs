#![doc = include_str!("../README.md")]
#![cfg_attr(docrs, feature(doc_cfg))]

// private modules
mod arc;
mod cfg;
mod constants;
mod coordinate;
mod error;
mod injector;
mod keyval;
mod normalizer;
mod parser;
mod record;
mod station;

pub mod utm;

#[cfg(test)]
mod tests;

// prelude
pub mod prelude {
    pub use crate::arc::{semicircle, ArcSample, CrossSection, Plane};
    pub use crate::cfg::{Config, Error as ConfigError};
    pub use crate::constants::{
        ACOUSTIC_VARIABLES, DEFAULT_ARC_POINTS, DEFAULT_RINGS_M, GROUND_LEVEL_M, SAC_FORMAT,
    };
    pub use crate::coordinate::{Coordinate, SourcePosition};
    pub use crate::error::Error;
    pub use crate::injector::{
        FileInput, FileOutput, InputSource, Injection, Injector, OutputSink,
    };
    pub use crate::normalizer::{normalize_line, normalize_receivers};
    pub use crate::parser::parse_source;
    pub use crate::record::{assemble, ReceiverRecord};
    pub use crate::station::{synthesize, Station, StationName, Synthesis};
    pub use crate::utm::latitude_band;
    // re-export
    pub use nalgebra::Vector3;
}

// pub export
pub use error::Error;
