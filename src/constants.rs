/// Leading token of the seismic/acoustic source line
pub const SOURCE_TOKEN: &str = "source";

/// Leading token of every receiver line
pub const RECEIVER_TOKEN: &str = "rec";

/// First horizontal coordinate key
pub const X_KEY: &str = "x";

/// Second horizontal coordinate key
pub const Y_KEY: &str = "y";

/// Elevation key. ElAc counts z positive downward (inverted-z).
pub const Z_KEY: &str = "z";

/// Ground level elevation (meters)
pub const GROUND_LEVEL_M: f64 = 0.0;

/// Output variable recorded by synthesized receivers
pub const ACOUSTIC_VARIABLES: &str = "acoustic";

/// SAC output format flag
pub const SAC_FORMAT: u8 = 1;

/// Minimal number of samples per arc: both endpoints
pub const MIN_ARC_POINTS: usize = 2;

/// Default ring radii (meters)
pub const DEFAULT_RINGS_M: [f64; 3] = [100.0, 300.0, 500.0];

/// Default number of samples per semicircle: one per degree, 0° to 180°
pub const DEFAULT_ARC_POINTS: usize = 181;
