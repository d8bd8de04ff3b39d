//! Infrastructure layer for aforo-checker

pub mod persistence;
pub mod tank_registry_loader;

pub use persistence::FileTankRegistry;
pub use tank_registry_loader::TankRegistryLoader;
