use serde::{Deserialize, Serialize};

/// Itemised price of moving one shipment with one vehicle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub vehicle_name: String,
    pub chargeable_weight_kg: f64,
    pub base_cost: f64,
    pub fuel_surcharge: f64,
    pub handling_fee: f64,
    pub oversize_fee: f64,
    pub total: f64,
}

impl CostBreakdown {
    /// Build a breakdown; `total` is always the sum of the four components
    pub fn new(
        vehicle_name: impl Into<String>,
        chargeable_weight_kg: f64,
        base_cost: f64,
        fuel_surcharge: f64,
        handling_fee: f64,
        oversize_fee: f64,
    ) -> Self {
        Self {
            vehicle_name: vehicle_name.into(),
            chargeable_weight_kg,
            base_cost,
            fuel_surcharge,
            handling_fee,
            oversize_fee,
            total: base_cost + fuel_surcharge + handling_fee + oversize_fee,
        }
    }
}
