//! Error types for shipcost

use serde::Serialize;
use thiserror::Error;

/// Rejection raised by the cost model for a single vehicle/shipment pairing
#[derive(Debug, Clone, PartialEq, Serialize, Error)]
pub enum CostError {
    #[error("{vehicle} cannot carry {required_kg:?} kg (capacity {capacity_kg:?} kg).")]
    CapacityExceeded {
        vehicle: String,
        required_kg: f64,
        capacity_kg: f64,
    },
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

/// Errors raised while reading route, fleet or shipment files
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid number in {file} row {row}, column {column}: {value:?}")]
    InvalidNumber {
        file: String,
        row: usize,
        column: String,
        value: String,
    },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Loader error: {0}")]
    Loader(#[from] LoaderError),

    #[error("{0}")]
    Cost(#[from] CostError),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Unknown route: {0}")]
    RouteNotFound(String),

    #[error("Unknown vehicle: {0}")]
    VehicleNotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Excel export error: {0}")]
    Excel(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_message_names_vehicle_and_limits() {
        let err = CostError::CapacityExceeded {
            vehicle: "Bike".to_string(),
            required_kg: 43.2,
            capacity_kg: 30.0,
        };
        assert_eq!(err.to_string(), "Bike cannot carry 43.2 kg (capacity 30.0 kg).");
    }

    #[test]
    fn test_cost_error_converts_into_error() {
        let err: Error = CostError::CapacityExceeded {
            vehicle: "Van".to_string(),
            required_kg: 2000.0,
            capacity_kg: 1500.0,
        }
        .into();
        assert!(matches!(err, Error::Cost(_)));
    }
}
