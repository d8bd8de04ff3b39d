//! Field observation used for exponent calibration

use aforo_types::{Error, ObservationError};
use serde::{Deserialize, Serialize};

/// One field-measured reference point: with `space_inches` of empty height
/// read off the dipstick, the operator judged `expected_empty_gallons` of
/// wine to be missing from the bell.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "RawObservation")]
pub struct Observation {
    space_inches: f64,
    expected_empty_gallons: f64,
}

/// Unvalidated mirror used for deserialization
#[derive(Debug, Deserialize)]
struct RawObservation {
    space_inches: f64,
    expected_empty_gallons: f64,
}

impl TryFrom<RawObservation> for Observation {
    type Error = Error;

    fn try_from(raw: RawObservation) -> Result<Self, Error> {
        Observation::new(raw.space_inches, raw.expected_empty_gallons)
    }
}

impl Observation {
    /// Create an observation; both values must be finite and > 0.
    ///
    /// The bell-interior constraints (`space < bell_height`,
    /// `expected < bell_capacity`) depend on the tank and are checked by the
    /// solver against a concrete geometry.
    pub fn new(space_inches: f64, expected_empty_gallons: f64) -> Result<Self, Error> {
        if !space_inches.is_finite() || space_inches <= 0.0 {
            return Err(ObservationError::InvalidSpace(space_inches).into());
        }
        if !expected_empty_gallons.is_finite() || expected_empty_gallons <= 0.0 {
            return Err(ObservationError::InvalidEmptyGallons(expected_empty_gallons).into());
        }
        Ok(Self {
            space_inches,
            expected_empty_gallons,
        })
    }

    pub fn space_inches(&self) -> f64 {
        self.space_inches
    }

    pub fn expected_empty_gallons(&self) -> f64 {
        self.expected_empty_gallons
    }
}
