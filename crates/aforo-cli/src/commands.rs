//! Command handlers

use std::path::Path;

use aforo_domain::model::{CalibrationExponent, Observation, TankGeometry};
use aforo_domain::repository::TankRegistry;
use aforo_domain::service::fill_report::DEFAULT_SPACES;
use aforo_domain::service::{
    generate_fill_table, generate_model_comparison, space_to_wine, wine_to_space, ExactSolver,
    ExponentSolver, LeastSquaresSolver,
};
use aforo_infra::FileTankRegistry;
use aforo_types::{Error, Result};

use crate::cli::{Cli, Commands};
use crate::output::{output_exponent, output_fill_result, output_space_result, output_tank_list};

pub fn execute(cli: Cli) -> Result<()> {
    let exponent = match cli.exponent {
        Some(n) => CalibrationExponent::new(n)?,
        None => CalibrationExponent::FIELD_CALIBRATED,
    };

    match cli.command {
        Commands::Fill { tank, space_inches } => {
            let geometry = load_geometry(&cli.registry, &tank)?;
            let result = space_to_wine(&geometry, exponent, space_inches);
            output_fill_result(cli.format, &tank, &result)
        }
        Commands::Space { tank, gallons } => {
            let geometry = load_geometry(&cli.registry, &tank)?;
            let result = wine_to_space(&geometry, exponent, gallons);
            output_space_result(cli.format, &tank, &result)
        }
        Commands::Table {
            tank,
            spaces,
            compare,
        } => {
            let geometry = load_geometry(&cli.registry, &tank)?;
            let spaces = spaces.unwrap_or_else(|| DEFAULT_SPACES.to_vec());
            let report = if compare {
                generate_model_comparison(&geometry, exponent, &spaces)
            } else {
                generate_fill_table(&geometry, exponent, &spaces)
            };
            println!("{}", report);
            Ok(())
        }
        Commands::Tanks => {
            let registry = FileTankRegistry::new(cli.registry.clone())?;
            output_tank_list(cli.format, &registry)
        }
        Commands::Calibrate {
            bell_capacity,
            bell_height,
            observations,
        } => {
            let observations: Vec<Observation> = observations
                .into_iter()
                .map(|(space, gallons)| Observation::new(space, gallons))
                .collect::<Result<_>>()?;
            // One observation determines the exponent exactly; several are
            // reconciled by least squares.
            let n = if observations.len() == 1 {
                ExactSolver.solve(bell_capacity, bell_height, &observations)?
            } else {
                LeastSquaresSolver.solve(bell_capacity, bell_height, &observations)?
            };
            output_exponent(cli.format, n, observations.len())
        }
    }
}

fn load_geometry(registry_path: &Path, tank: &str) -> Result<TankGeometry> {
    let registry = FileTankRegistry::new(registry_path.to_path_buf())?;
    registry
        .find_by_name(tank)?
        .ok_or_else(|| Error::TankNotFound(tank.to_string()))
}
