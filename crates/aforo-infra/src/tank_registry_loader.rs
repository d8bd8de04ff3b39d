//! Tank registry loader from TOML configuration
//!
//! The registry file holds one table per tank:
//!
//! ```toml
//! [tanks.F12]
//! gallons_per_inch = 44.678
//! bell_capacity_gallons = 263.282
//! bell_height_inches = 19.90
//! total_capacity_gallons = 6561.717
//! ```
//!
//! Every row is validated through `TankGeometry` on load, so a malformed
//! registry is rejected before any geometry reaches the volume model.

use aforo_domain::model::TankGeometry;
use aforo_types::{ConfigError, Error, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Container for parsing tanks.toml
#[derive(Debug, Deserialize)]
struct TankRegistryConfig {
    tanks: HashMap<String, TankGeometry>,
}

/// Tank registry data loaded from TOML
#[derive(Debug)]
pub struct TankRegistryLoader {
    /// Map of tank name to geometry
    tanks: HashMap<String, TankGeometry>,
}

impl TankRegistryLoader {
    /// Load the tank registry from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(ConfigError::ParseError(format!(
                "Failed to read tank registry file: {}",
                e
            )))
        })?;

        Self::load_from_str(&content)
    }

    /// Load the tank registry from a TOML string
    pub fn load_from_str(toml_content: &str) -> Result<Self> {
        let config: TankRegistryConfig = toml::from_str(toml_content).map_err(|e| {
            Error::Config(ConfigError::ParseError(format!(
                "Failed to parse tank registry TOML: {}",
                e
            )))
        })?;

        Ok(Self {
            tanks: config.tanks,
        })
    }

    /// Look up a tank's geometry by name
    pub fn get_tank(&self, name: &str) -> Option<&TankGeometry> {
        self.tanks.get(name)
    }

    /// All tanks as (name, geometry) pairs
    pub fn all_tanks(&self) -> Vec<(&str, &TankGeometry)> {
        self.tanks.iter().map(|(k, v)| (k.as_str(), v)).collect()
    }

    /// Check if a tank name exists in the registry
    pub fn has_tank(&self, name: &str) -> bool {
        self.tanks.contains_key(name)
    }

    /// Number of registered tanks
    pub fn tank_count(&self) -> usize {
        self.tanks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[tanks.F12]
gallons_per_inch = 44.678
bell_capacity_gallons = 263.282
bell_height_inches = 19.90
total_capacity_gallons = 6561.717

[tanks.BL1]
gallons_per_inch = 82.74
bell_capacity_gallons = 373.56
bell_height_inches = 24.15
total_capacity_gallons = 16239.42
"#;

    #[test]
    fn loads_registry_from_toml() {
        let loader = TankRegistryLoader::load_from_str(SAMPLE).unwrap();
        assert_eq!(loader.tank_count(), 2);
        assert!(loader.has_tank("F12"));
        let f12 = loader.get_tank("F12").unwrap();
        assert_eq!(f12.gallons_per_inch(), 44.678);
        assert_eq!(f12.total_capacity_gallons(), 6561.717);
    }

    #[test]
    fn unknown_tank_is_none() {
        let loader = TankRegistryLoader::load_from_str(SAMPLE).unwrap();
        assert!(loader.get_tank("Z99").is_none());
    }

    #[test]
    fn invalid_geometry_row_rejected() {
        let bad = r#"
[tanks.BAD]
gallons_per_inch = -1.0
bell_capacity_gallons = 263.282
bell_height_inches = 19.90
total_capacity_gallons = 6561.717
"#;
        let err = TankRegistryLoader::load_from_str(bad);
        assert!(matches!(err, Err(Error::Config(ConfigError::ParseError(_)))));
    }

    #[test]
    fn malformed_toml_rejected() {
        assert!(TankRegistryLoader::load_from_str("not toml [").is_err());
    }
}
