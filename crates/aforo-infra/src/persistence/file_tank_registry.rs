//! File-based implementation of TankRegistry

use std::path::PathBuf;

use aforo_domain::model::TankGeometry;
use aforo_domain::repository::TankRegistry;
use aforo_types::Error;

use crate::tank_registry_loader::TankRegistryLoader;

/// TOML-file-backed tank registry
pub struct FileTankRegistry {
    toml_path: PathBuf,
    loader: TankRegistryLoader,
}

impl FileTankRegistry {
    /// Create a registry from a TOML file path
    pub fn new(toml_path: PathBuf) -> Result<Self, Error> {
        let loader = TankRegistryLoader::load_from_file(&toml_path)?;
        Ok(Self { toml_path, loader })
    }

    /// Get the TOML path
    pub fn toml_path(&self) -> &PathBuf {
        &self.toml_path
    }

    /// Reload data from the TOML file
    pub fn reload(&mut self) -> Result<(), Error> {
        self.loader = TankRegistryLoader::load_from_file(&self.toml_path)?;
        Ok(())
    }
}

impl TankRegistry for FileTankRegistry {
    fn find_by_name(&self, name: &str) -> Result<Option<TankGeometry>, Error> {
        Ok(self.loader.get_tank(name).copied())
    }

    fn find_all(&self) -> Result<Vec<(String, TankGeometry)>, Error> {
        Ok(self
            .loader
            .all_tanks()
            .into_iter()
            .map(|(name, geometry)| (name.to_string(), *geometry))
            .collect())
    }

    fn tank_names(&self) -> Result<Vec<String>, Error> {
        let mut names: Vec<String> = self
            .loader
            .all_tanks()
            .into_iter()
            .map(|(name, _)| name.to_string())
            .collect();
        names.sort();
        Ok(names)
    }
}
