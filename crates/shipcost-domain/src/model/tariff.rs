use serde::{Deserialize, Serialize};

/// Pricing parameters of one vehicle type in the fleet.
///
/// Values are taken as loaded; a zero capacity or rate is only noticed when
/// a shipment is priced against the tariff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleTariff {
    pub name: String,
    pub capacity_kg: f64,
    pub rate_per_kg_per_km: f64,
    /// Fraction of the base cost, e.g. 0.12 for 12%
    pub fuel_surcharge_fraction: f64,
    pub handling_fee: f64,
    pub oversize_threshold_cm: f64,
    pub oversize_fee: f64,
    pub min_charge: f64,
}
