//! Tank geometry record

use aforo_types::{Error, GeometryError};
use serde::{Deserialize, Serialize};

/// Geometry of one physical tank: a cylindrical body topped by a
/// non-cylindrical "bell" cap.
///
/// Immutable after construction. `new` enforces the invariants, so a value
/// of this type is always usable by the volume model without re-checking.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "RawTankGeometry")]
pub struct TankGeometry {
    /// Gallons of wine per inch of height in the cylindrical body
    gallons_per_inch: f64,
    /// Total empty volume when the bell is completely empty
    bell_capacity_gallons: f64,
    /// Height of the bell, measured from the top opening downward
    bell_height_inches: f64,
    /// Total wine volume when the tank is full
    total_capacity_gallons: f64,
}

/// Unvalidated mirror used for deserialization
#[derive(Debug, Deserialize)]
struct RawTankGeometry {
    gallons_per_inch: f64,
    bell_capacity_gallons: f64,
    bell_height_inches: f64,
    total_capacity_gallons: f64,
}

impl TryFrom<RawTankGeometry> for TankGeometry {
    type Error = Error;

    fn try_from(raw: RawTankGeometry) -> Result<Self, Error> {
        TankGeometry::new(
            raw.gallons_per_inch,
            raw.bell_capacity_gallons,
            raw.bell_height_inches,
            raw.total_capacity_gallons,
        )
    }
}

impl TankGeometry {
    /// Create a validated TankGeometry.
    ///
    /// Invariants: all fields finite, `gallons_per_inch > 0`,
    /// `bell_height_inches > 0`, `0 <= bell_capacity_gallons <= total_capacity_gallons`.
    pub fn new(
        gallons_per_inch: f64,
        bell_capacity_gallons: f64,
        bell_height_inches: f64,
        total_capacity_gallons: f64,
    ) -> Result<Self, Error> {
        for (name, value) in [
            ("gallons_per_inch", gallons_per_inch),
            ("bell_capacity_gallons", bell_capacity_gallons),
            ("bell_height_inches", bell_height_inches),
            ("total_capacity_gallons", total_capacity_gallons),
        ] {
            if !value.is_finite() {
                return Err(GeometryError::NonFinite(name).into());
            }
        }
        if gallons_per_inch <= 0.0 {
            return Err(GeometryError::NonPositiveGallonsPerInch(gallons_per_inch).into());
        }
        if bell_height_inches <= 0.0 {
            return Err(GeometryError::NonPositiveBellHeight(bell_height_inches).into());
        }
        if bell_capacity_gallons < 0.0 {
            return Err(GeometryError::NegativeBellCapacity(bell_capacity_gallons).into());
        }
        if total_capacity_gallons < bell_capacity_gallons {
            return Err(GeometryError::CapacityBelowBell {
                total: total_capacity_gallons,
                bell: bell_capacity_gallons,
            }
            .into());
        }
        Ok(Self {
            gallons_per_inch,
            bell_capacity_gallons,
            bell_height_inches,
            total_capacity_gallons,
        })
    }

    pub fn gallons_per_inch(&self) -> f64 {
        self.gallons_per_inch
    }

    pub fn bell_capacity_gallons(&self) -> f64 {
        self.bell_capacity_gallons
    }

    pub fn bell_height_inches(&self) -> f64 {
        self.bell_height_inches
    }

    pub fn total_capacity_gallons(&self) -> f64 {
        self.total_capacity_gallons
    }

    /// Equivalent total height in inches: bell height plus the body height
    /// implied by the remaining capacity at the linear rate.
    pub fn total_height_inches(&self) -> f64 {
        self.bell_height_inches
            + (self.total_capacity_gallons - self.bell_capacity_gallons) / self.gallons_per_inch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn f12() -> TankGeometry {
        TankGeometry::new(44.678, 263.282, 19.90, 6561.717).unwrap()
    }

    #[test]
    fn valid_geometry() {
        let g = f12();
        assert_eq!(g.gallons_per_inch(), 44.678);
        assert_eq!(g.bell_capacity_gallons(), 263.282);
        assert_eq!(g.bell_height_inches(), 19.90);
        assert_eq!(g.total_capacity_gallons(), 6561.717);
    }

    #[test]
    fn zero_gallons_per_inch_rejected() {
        assert!(TankGeometry::new(0.0, 263.282, 19.90, 6561.717).is_err());
    }

    #[test]
    fn negative_bell_height_rejected() {
        assert!(TankGeometry::new(44.678, 263.282, -1.0, 6561.717).is_err());
    }

    #[test]
    fn negative_bell_capacity_rejected() {
        assert!(TankGeometry::new(44.678, -0.1, 19.90, 6561.717).is_err());
    }

    #[test]
    fn total_below_bell_capacity_rejected() {
        assert!(TankGeometry::new(44.678, 263.282, 19.90, 100.0).is_err());
    }

    #[test]
    fn nan_rejected() {
        assert!(TankGeometry::new(f64::NAN, 263.282, 19.90, 6561.717).is_err());
    }

    #[test]
    fn zero_bell_capacity_allowed() {
        assert!(TankGeometry::new(44.678, 0.0, 19.90, 6561.717).is_ok());
    }

    #[test]
    fn total_height() {
        let g = f12();
        let expected = 19.90 + (6561.717 - 263.282) / 44.678;
        assert!((g.total_height_inches() - expected).abs() < 1e-9);
    }

    #[test]
    fn deserialization_validates() {
        let good: Result<TankGeometry, _> = serde_json::from_str(
            r#"{"gallons_per_inch": 44.678, "bell_capacity_gallons": 263.282,
                "bell_height_inches": 19.90, "total_capacity_gallons": 6561.717}"#,
        );
        assert!(good.is_ok());

        let bad: Result<TankGeometry, _> = serde_json::from_str(
            r#"{"gallons_per_inch": -1.0, "bell_capacity_gallons": 263.282,
                "bell_height_inches": 19.90, "total_capacity_gallons": 6561.717}"#,
        );
        assert!(bad.is_err());
    }
}
