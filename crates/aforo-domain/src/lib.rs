//! Domain layer for aforo-checker
//!
//! Two-region volumetric model for wine tanks with a non-cylindrical bell
//! cap, plus the calibration routine that derives the bell exponent from
//! field observations.

pub mod model;
pub mod repository;
pub mod service;
