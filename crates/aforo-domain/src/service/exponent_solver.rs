//! Exponent calibration from field observations
//!
//! The bell power law has a single free parameter, so one observation
//! strictly inside the bell determines `n` in closed form:
//!
//! `n = ln(expected / bell_capacity) / ln(space / bell_height)`
//!
//! Both ratios must lie strictly in (0, 1), so both logarithms are negative
//! and `n` comes out positive. With several observations the same
//! relation is fitted by least squares through the origin of the
//! log-linearized form.

use crate::model::{CalibrationExponent, Observation};
use aforo_types::{Error, ObservationError};

/// Strategy for deriving the bell exponent from observations.
pub trait ExponentSolver {
    fn solve(
        &self,
        bell_capacity_gallons: f64,
        bell_height_inches: f64,
        observations: &[Observation],
    ) -> Result<CalibrationExponent, Error>;
}

/// Validate one observation against the bell and return the log-ratio pair
/// `(ln(space/height), ln(expected/capacity))`.
fn log_ratios(
    bell_capacity_gallons: f64,
    bell_height_inches: f64,
    obs: &Observation,
) -> Result<(f64, f64), Error> {
    if bell_capacity_gallons <= 0.0 {
        return Err(ObservationError::DegenerateBell.into());
    }
    let space = obs.space_inches();
    let gallons = obs.expected_empty_gallons();
    if space >= bell_height_inches {
        return Err(ObservationError::SpaceOutsideBell {
            space,
            bell_height: bell_height_inches,
        }
        .into());
    }
    if gallons >= bell_capacity_gallons {
        return Err(ObservationError::VolumeOutsideBell {
            gallons,
            bell_capacity: bell_capacity_gallons,
        }
        .into());
    }
    Ok((
        (space / bell_height_inches).ln(),
        (gallons / bell_capacity_gallons).ln(),
    ))
}

/// Closed-form solver for a single observation.
///
/// With more than one observation only the first is used; fit multiple
/// points with [`LeastSquaresSolver`].
#[derive(Debug, Default, Clone, Copy)]
pub struct ExactSolver;

impl ExponentSolver for ExactSolver {
    fn solve(
        &self,
        bell_capacity_gallons: f64,
        bell_height_inches: f64,
        observations: &[Observation],
    ) -> Result<CalibrationExponent, Error> {
        let obs = observations
            .first()
            .ok_or(ObservationError::NoObservations)?;
        let (x, y) = log_ratios(bell_capacity_gallons, bell_height_inches, obs)?;
        CalibrationExponent::new(y / x)
    }
}

/// Least-squares fit of `y = n·x` over the log-linearized observations,
/// `x = ln(space/height)`, `y = ln(expected/capacity)`.
///
/// The line is constrained through the origin (a full bell must report its
/// full capacity), so `n = Σxy / Σx²`. With one observation this reduces to
/// the closed form.
#[derive(Debug, Default, Clone, Copy)]
pub struct LeastSquaresSolver;

impl ExponentSolver for LeastSquaresSolver {
    fn solve(
        &self,
        bell_capacity_gallons: f64,
        bell_height_inches: f64,
        observations: &[Observation],
    ) -> Result<CalibrationExponent, Error> {
        if observations.is_empty() {
            return Err(ObservationError::NoObservations.into());
        }
        let mut sum_xy = 0.0;
        let mut sum_xx = 0.0;
        for obs in observations {
            let (x, y) = log_ratios(bell_capacity_gallons, bell_height_inches, obs)?;
            sum_xy += x * y;
            sum_xx += x * x;
        }
        CalibrationExponent::new(sum_xy / sum_xx)
    }
}
