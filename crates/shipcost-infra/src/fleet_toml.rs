//! Fleet tariffs from a TOML file
//!
//! ```toml
//! [[vehicles]]
//! name = "Truck"
//! capacity_kg = 10000.0
//! rate_per_kg_per_km = 0.12
//! fuel_surcharge_fraction = 0.12
//! handling_fee = 500.0
//! oversize_threshold_cm = 250.0
//! oversize_fee = 2500.0
//! min_charge = 5000.0
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;
use shipcost_domain::model::VehicleTariff;
use shipcost_types::LoaderError;
use tracing::info;

/// Container for parsing fleet.toml
#[derive(Debug, Deserialize)]
struct FleetConfig {
    #[serde(default)]
    vehicles: Vec<VehicleTariff>,
}

pub fn load_fleet_toml(path: &Path) -> Result<Vec<VehicleTariff>, LoaderError> {
    let content = fs::read_to_string(path)?;
    let fleet = parse_fleet_toml(&content)?;
    info!(path = %path.display(), count = fleet.len(), "loaded fleet");
    Ok(fleet)
}

pub fn parse_fleet_toml(content: &str) -> Result<Vec<VehicleTariff>, LoaderError> {
    let config: FleetConfig = toml::from_str(content)?;
    Ok(config.vehicles)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_TOML: &str = r#"
[[vehicles]]
name = "Truck"
capacity_kg = 10000.0
rate_per_kg_per_km = 0.12
fuel_surcharge_fraction = 0.12
handling_fee = 500.0
oversize_threshold_cm = 250.0
oversize_fee = 2500.0
min_charge = 5000.0

[[vehicles]]
name = "Bike"
capacity_kg = 30.0
rate_per_kg_per_km = 0.8
fuel_surcharge_fraction = 0.05
handling_fee = 50.0
oversize_threshold_cm = 60.0
oversize_fee = 200.0
min_charge = 100.0
"#;

    #[test]
    fn test_parse_fleet_toml_keeps_order() {
        let fleet = parse_fleet_toml(TEST_TOML).unwrap();
        assert_eq!(fleet.len(), 2);
        assert_eq!(fleet[0].name, "Truck");
        assert_eq!(fleet[1].name, "Bike");
        assert_eq!(fleet[1].capacity_kg, 30.0);
    }

    #[test]
    fn test_missing_field_is_an_error() {
        let toml = "[[vehicles]]\nname = \"Van\"\ncapacity_kg = 1500.0\n";
        assert!(matches!(parse_fleet_toml(toml), Err(LoaderError::Toml(_))));
    }
}
