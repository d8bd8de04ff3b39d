//! Output formatting module

use aforo_domain::model::CalibrationExponent;
use aforo_domain::repository::TankRegistry;
use aforo_types::{FillResult, OutputFormat, Result, SpaceResult};

pub fn output_fill_result(format: OutputFormat, tank: &str, result: &FillResult) -> Result<()> {
    if format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(result)?;
        println!("{}", content);
    } else {
        println!("\nFill for tank {}", tank);
        println!("================");
        println!("Empty in bell:   {:.2} gal", result.bell_empty_gallons);
        println!("Empty in body:   {:.2} gal", result.body_empty_gallons);
        println!("Empty total:     {:.2} gal", result.total_empty_gallons);
        println!("Wine:            {:.2} gal", result.wine_gallons);
        println!("Fill:            {:.1}%", result.fill_percentage);
        println!("Zone:            {}", result.zone().label());
    }

    Ok(())
}

pub fn output_space_result(format: OutputFormat, tank: &str, result: &SpaceResult) -> Result<()> {
    if format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(result)?;
        println!("{}", content);
    } else {
        println!("\nRequired space for tank {}", tank);
        println!("==========================");
        println!("Space total:     {:.2} in", result.required_space_inches);
        println!("  in bell:       {:.2} in", result.bell_inches);
        println!("  in body:       {:.2} in", result.body_inches);
        println!("Fill:            {:.1}%", result.fill_percentage);
        println!("Zone:            {}", result.zone().label());
    }

    Ok(())
}

pub fn output_exponent(
    format: OutputFormat,
    n: CalibrationExponent,
    observation_count: usize,
) -> Result<()> {
    if format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(&n)?;
        println!("{}", content);
    } else {
        println!("\nCalibration result");
        println!("==================");
        println!("Observations:    {}", observation_count);
        println!("Exponent n:      {:.4}", n.value());
        println!("(n = 1 is a cylinder, n = 3 a true cone)");
    }

    Ok(())
}

pub fn output_tank_list(format: OutputFormat, registry: &dyn TankRegistry) -> Result<()> {
    if format == OutputFormat::Json {
        let names = registry.tank_names()?;
        let content = serde_json::to_string_pretty(&names)?;
        println!("{}", content);
    } else {
        let tanks = registry.find_all()?;
        let mut tanks: Vec<_> = tanks.into_iter().collect();
        tanks.sort_by(|a, b| a.0.cmp(&b.0));
        println!(
            "{:<8} {:>12} {:>12} {:>12} {:>14}",
            "Tank", "Gal/inch", "Bell (gal)", "Bell (in)", "Capacity (gal)"
        );
        for (name, g) in tanks {
            println!(
                "{:<8} {:>12.3} {:>12.2} {:>12.2} {:>14.2}",
                name,
                g.gallons_per_inch(),
                g.bell_capacity_gallons(),
                g.bell_height_inches(),
                g.total_capacity_gallons()
            );
        }
    }

    Ok(())
}
