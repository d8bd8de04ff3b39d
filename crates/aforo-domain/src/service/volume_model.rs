//! Two-region volume model: power-law bell over a linear cylindrical body
//!
//! The bell is an empirical power law,
//! `empty = bell_capacity × (space / bell_height)^n`, the body is linear at
//! `gallons_per_inch`. Both directions are exact algebraic inverses of each
//! other.
//!
//! Query-time inputs are clamped, never rejected: a dipstick reading is
//! sensor data, and the model should still produce a displayable result on
//! noise or a typo. Malformed geometry is rejected earlier, at
//! `TankGeometry` construction.

use crate::model::{CalibrationExponent, TankGeometry};
use aforo_types::{FillResult, SpaceResult};

/// Compute the wine volume from a dipstick "empty space" reading.
///
/// `space_inches` is measured from the top opening downward. Negative
/// readings count as a full tank; readings past the tank bottom report
/// empty. Never fails.
pub fn space_to_wine(
    geometry: &TankGeometry,
    n: CalibrationExponent,
    space_inches: f64,
) -> FillResult {
    let bell_height = geometry.bell_height_inches();
    let bell_capacity = geometry.bell_capacity_gallons();
    let total = geometry.total_capacity_gallons();

    let (bell_empty, body_empty, in_bell) = if space_inches <= 0.0 {
        (0.0, 0.0, true)
    } else if space_inches <= bell_height {
        let ratio = space_inches / bell_height;
        (bell_capacity * ratio.powf(n.value()), 0.0, true)
    } else {
        (
            bell_capacity,
            (space_inches - bell_height) * geometry.gallons_per_inch(),
            false,
        )
    };

    let total_empty = (bell_empty + body_empty).max(0.0);
    let wine = (total - total_empty).max(0.0);
    let fill_percentage = if total > 0.0 {
        (wine / total * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    };

    FillResult {
        body_empty_gallons: body_empty.max(0.0),
        bell_empty_gallons: bell_empty.max(0.0),
        total_empty_gallons: total_empty,
        wine_gallons: wine,
        fill_percentage,
        in_bell,
    }
}

/// Compute the dipstick space needed to hold a desired wine volume.
///
/// Exact inverse of [`space_to_wine`]. The implied empty volume is clamped
/// into `[0, total_capacity]`, so over-capacity requests report zero space
/// and negative requests report the empty tank.
///
/// The fill percentage is computed directly from
/// `desired / total_capacity`, not by round-tripping the space figure
/// through [`space_to_wine`]; for in-range inputs the two agree.
pub fn wine_to_space(
    geometry: &TankGeometry,
    n: CalibrationExponent,
    desired_wine_gallons: f64,
) -> SpaceResult {
    let bell_height = geometry.bell_height_inches();
    let bell_capacity = geometry.bell_capacity_gallons();
    let total = geometry.total_capacity_gallons();

    let empty = (total - desired_wine_gallons).clamp(0.0, total);

    let (bell_inches, body_inches, in_bell) = if bell_capacity > 0.0 && empty <= bell_capacity {
        let ratio = empty / bell_capacity;
        (bell_height * ratio.powf(1.0 / n.value()), 0.0, true)
    } else if empty <= 0.0 {
        // Degenerate bell holds no volume; a full tank needs no space.
        (0.0, 0.0, true)
    } else {
        let body_gallons = empty - bell_capacity;
        (
            bell_height,
            body_gallons / geometry.gallons_per_inch(),
            false,
        )
    };

    let required = (bell_inches + body_inches).max(0.0);
    let fill_percentage = if total > 0.0 {
        (desired_wine_gallons / total * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    };

    SpaceResult {
        required_space_inches: required,
        body_inches: body_inches.max(0.0),
        bell_inches: bell_inches.max(0.0),
        fill_percentage,
        in_bell,
    }
}
