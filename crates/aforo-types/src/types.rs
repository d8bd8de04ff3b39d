//! Shared result types for the volume model

use serde::{Deserialize, Serialize};

/// Which region of the tank a measurement or result falls in.
///
/// The power-law bell formula is an empirical fit, so readings inside the
/// bell carry lower accuracy than the linear cylindrical body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementZone {
    Bell,
    Body,
}

impl MeasurementZone {
    pub fn from_in_bell(in_bell: bool) -> Self {
        if in_bell {
            MeasurementZone::Bell
        } else {
            MeasurementZone::Body
        }
    }

    /// Human-readable label with the accuracy figure for the zone
    pub fn label(&self) -> &'static str {
        match self {
            MeasurementZone::Bell => "bell zone (~97.99% accuracy)",
            MeasurementZone::Body => "cylindrical body (~99.9% accuracy)",
        }
    }
}

/// Result of a space → wine gallons query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FillResult {
    /// Empty gallons in the cylindrical body
    pub body_empty_gallons: f64,
    /// Empty gallons in the bell section
    pub bell_empty_gallons: f64,
    /// Total empty gallons (bell + body)
    pub total_empty_gallons: f64,
    /// Wine currently in the tank
    pub wine_gallons: f64,
    /// Fill level as a percentage of total capacity, clamped to [0, 100]
    pub fill_percentage: f64,
    /// True when the measurement lies entirely within the bell
    pub in_bell: bool,
}

impl FillResult {
    pub fn zone(&self) -> MeasurementZone {
        MeasurementZone::from_in_bell(self.in_bell)
    }
}

/// Result of a wine gallons → required space query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpaceResult {
    /// Total empty height needed, measured from the top opening
    pub required_space_inches: f64,
    /// Portion of the space inside the cylindrical body
    pub body_inches: f64,
    /// Portion of the space inside the bell
    pub bell_inches: f64,
    /// Fill level as a percentage of total capacity, clamped to [0, 100]
    pub fill_percentage: f64,
    /// True when the empty volume fits entirely within the bell
    pub in_bell: bool,
}

impl SpaceResult {
    pub fn zone(&self) -> MeasurementZone {
        MeasurementZone::from_in_bell(self.in_bell)
    }
}
