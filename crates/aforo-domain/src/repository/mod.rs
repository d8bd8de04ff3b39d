//! Repository trait definitions for tank data

use crate::model::TankGeometry;
use aforo_types::Error;

/// Registry of tank geometries, keyed by tank name (e.g. "F12", "A1")
pub trait TankRegistry {
    /// Find a tank's geometry by name
    fn find_by_name(&self, name: &str) -> Result<Option<TankGeometry>, Error>;

    /// All registered tanks as (name, geometry) pairs
    fn find_all(&self) -> Result<Vec<(String, TankGeometry)>, Error>;

    /// Names of all registered tanks, sorted
    fn tank_names(&self) -> Result<Vec<String>, Error>;
}
