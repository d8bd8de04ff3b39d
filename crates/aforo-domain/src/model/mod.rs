//! Domain model types

pub mod calibration;
pub mod observation;
pub mod tank_geometry;

pub use calibration::CalibrationExponent;
pub use observation::Observation;
pub use tank_geometry::TankGeometry;
