//! Domain services

pub mod exponent_solver;
pub mod fill_report;
pub mod volume_model;

pub use exponent_solver::{ExactSolver, ExponentSolver, LeastSquaresSolver};
pub use fill_report::{generate_fill_table, generate_model_comparison};
pub use volume_model::{space_to_wine, wine_to_space};
