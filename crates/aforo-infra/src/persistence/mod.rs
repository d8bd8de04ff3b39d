//! Persistence implementations

pub mod file_tank_registry;

pub use file_tank_registry::FileTankRegistry;
