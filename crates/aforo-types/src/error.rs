//! Error types for aforo-checker

use thiserror::Error;

/// Tank geometry invariant violations, raised at construction
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("gallons_per_inch must be > 0, got {0}")]
    NonPositiveGallonsPerInch(f64),

    #[error("bell_height_inches must be > 0, got {0}")]
    NonPositiveBellHeight(f64),

    #[error("bell_capacity_gallons must be >= 0, got {0}")]
    NegativeBellCapacity(f64),

    #[error("total_capacity_gallons ({total}) must be >= bell_capacity_gallons ({bell})")]
    CapacityBelowBell { total: f64, bell: f64 },

    #[error("geometry field {0} is not finite")]
    NonFinite(&'static str),
}

/// Calibration input violations, raised by observation construction and solvers
#[derive(Debug, Error)]
pub enum ObservationError {
    #[error("space_inches must be > 0 and finite, got {0}")]
    InvalidSpace(f64),

    #[error("expected_empty_gallons must be > 0 and finite, got {0}")]
    InvalidEmptyGallons(f64),

    #[error("space {space} in must lie strictly inside the bell (height {bell_height} in)")]
    SpaceOutsideBell { space: f64, bell_height: f64 },

    #[error("expected empty volume {gallons} gal must be strictly below bell capacity ({bell_capacity} gal)")]
    VolumeOutsideBell { gallons: f64, bell_capacity: f64 },

    #[error("cannot solve the exponent from an empty observation set")]
    NoObservations,

    #[error("bell with zero capacity cannot be calibrated")]
    DegenerateBell,
}

/// Tank registry configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Tank registry not found")]
    NotFound,

    #[error("Failed to parse tank registry: {0}")]
    ParseError(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid tank geometry: {0}")]
    Geometry(#[from] GeometryError),

    #[error("Invalid observation: {0}")]
    Observation(#[from] ObservationError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Tank not found in registry: {0}")]
    TankNotFound(String),

    #[error("Calibration exponent must be > 0 and finite, got {0}")]
    InvalidExponent(f64),
}

pub type Result<T> = std::result::Result<T, Error>;
