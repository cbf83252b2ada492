mod injector;

use log::LevelFilter;
use std::sync::Once;

static INIT: Once = Once::new();

pub fn init_logger() {
    INIT.call_once(|| {
        env_logger::builder()
            .is_test(true)
            .filter_level(LevelFilter::Debug)
            .init();
    });
}

/// Sample ElAc input file: one source, two pre-existing receivers.
pub const ELAC_INPUT: &str = "\
# ElAc input
grid nx=401 ny=401 nz=201 dh=5.0
time dt=0.001 tmax=10.0
source x=1000.0 y=-250.5 z=-2.0 type=explosion
rec x=1100.0 y=-250.5 z=12.5 variables=velocity sacformat=1 file=R1
rec x=900.0 y=-250.5 z=-3 variables=velocity sacformat=1 file=R2
";

/// Maximal error we tolerate on coordinates [m]
pub const MAX_COORD_ERR_M: f64 = 1.0E-9;
