//! End-to-end check: tank registry file through the volume model and back.
//!
//! Uses the shipped registry at data/tanks.toml so the sample data stays in
//! sync with what the model produces for the known field scenarios.

use std::path::PathBuf;

use aforo_domain::model::{CalibrationExponent, Observation};
use aforo_domain::repository::TankRegistry;
use aforo_domain::service::{space_to_wine, wine_to_space, ExactSolver, ExponentSolver};
use aforo_infra::FileTankRegistry;

fn registry_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("data")
        .join("tanks.toml")
}

fn open_registry() -> FileTankRegistry {
    FileTankRegistry::new(registry_path()).expect("shipped registry must load")
}

#[test]
fn shipped_registry_loads_and_lists_f12() {
    let registry = open_registry();
    let names = registry.tank_names().unwrap();
    assert!(names.contains(&"F12".to_string()));
    assert!(names.contains(&"A1".to_string()));
}

#[test]
fn f12_field_scenario_through_the_registry() {
    // 120 inches of space on F12: the bell is fully empty plus 100.1 inches
    // of body at 44.678 gal/in.
    let registry = open_registry();
    let f12 = registry.find_by_name("F12").unwrap().unwrap();
    let n = CalibrationExponent::FIELD_CALIBRATED;

    let fill = space_to_wine(&f12, n, 120.0);
    let expected_body = (120.0 - 19.90) * 44.678;
    assert!(!fill.in_bell);
    assert!((fill.body_empty_gallons - expected_body).abs() < 1e-6);
    assert!((fill.bell_empty_gallons - 263.282).abs() < 1e-6);
    assert!((fill.wine_gallons - (6561.717 - 263.282 - expected_body)).abs() < 1e-6);

    let back = wine_to_space(&f12, n, fill.wine_gallons);
    assert!((back.required_space_inches - 120.0).abs() < 1e-6);
}

#[test]
fn five_inch_rule_of_thumb_holds() {
    // The calibration anchor: 5 inches of space on F12 is roughly
    // 12.5 gallons empty, and solving from that anchor reproduces it.
    let registry = open_registry();
    let f12 = registry.find_by_name("F12").unwrap().unwrap();

    let anchor = Observation::new(5.0, 12.5).unwrap();
    let n = ExactSolver
        .solve(
            f12.bell_capacity_gallons(),
            f12.bell_height_inches(),
            &[anchor],
        )
        .unwrap();
    assert!((n.value() - 2.2).abs() < 0.05);

    let fill = space_to_wine(&f12, n, 5.0);
    assert!(fill.in_bell);
    assert!((fill.bell_empty_gallons - 12.5).abs() < 1e-9);

    // With the rounded production exponent the figure stays in the
    // operator's 10-15 gallon window.
    let production = space_to_wine(&f12, CalibrationExponent::FIELD_CALIBRATED, 5.0);
    assert!(production.bell_empty_gallons > 10.0 && production.bell_empty_gallons < 15.0);
}

#[test]
fn every_registered_tank_round_trips() {
    let registry = open_registry();
    let n = CalibrationExponent::FIELD_CALIBRATED;
    for (name, geometry) in registry.find_all().unwrap() {
        for fraction in [0.1, 0.5, 0.9] {
            let space = geometry.total_height_inches() * fraction;
            let wine = space_to_wine(&geometry, n, space).wine_gallons;
            let back = wine_to_space(&geometry, n, wine).required_space_inches;
            assert!(
                (back - space).abs() / space < 1e-6,
                "round trip failed for tank {name} at {space} in: got {back}"
            );
        }
    }
}
