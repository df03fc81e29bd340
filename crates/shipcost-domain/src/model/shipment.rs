//! Shipment record and its physical dimensions

use serde::{Deserialize, Serialize};

use crate::service::sizing;

/// Package dimensions in centimetres
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub length_cm: f64,
    pub width_cm: f64,
    pub height_cm: f64,
}

impl Dimensions {
    pub fn new(length_cm: f64, width_cm: f64, height_cm: f64) -> Self {
        Self {
            length_cm,
            width_cm,
            height_cm,
        }
    }

    pub fn volume_cm3(&self) -> f64 {
        self.length_cm * self.width_cm * self.height_cm
    }

    /// True when any single side is strictly longer than `threshold_cm`
    pub fn any_exceeds(&self, threshold_cm: f64) -> bool {
        self.length_cm > threshold_cm || self.width_cm > threshold_cm || self.height_cm > threshold_cm
    }
}

/// A parcel to be moved along a route.
///
/// `route_id` is not checked when the record is loaded; an unknown id only
/// surfaces when the shipment is priced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shipment {
    pub shipment_id: String,
    pub actual_weight_kg: f64,
    #[serde(flatten)]
    pub dimensions: Dimensions,
    pub route_id: String,
}

impl Shipment {
    pub fn new(
        shipment_id: impl Into<String>,
        actual_weight_kg: f64,
        dimensions: Dimensions,
        route_id: impl Into<String>,
    ) -> Self {
        Self {
            shipment_id: shipment_id.into(),
            actual_weight_kg,
            dimensions,
            route_id: route_id.into(),
        }
    }

    pub fn chargeable_weight_kg(&self) -> f64 {
        sizing::chargeable_weight_kg(self.actual_weight_kg, &self.dimensions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_exceeds_is_strict() {
        let dims = Dimensions::new(250.0, 100.0, 100.0);
        assert!(!dims.any_exceeds(250.0));
        assert!(dims.any_exceeds(249.9));
    }

    #[test]
    fn test_shipment_uses_volumetric_when_heavier() {
        let s = Shipment::new("S1", 14.0, Dimensions::new(60.0, 40.0, 30.0), "R001");
        assert!((sizing::volumetric_weight_kg(&s.dimensions) - 14.4).abs() < 1e-9);
        assert!((s.chargeable_weight_kg() - 14.4).abs() < 1e-9);
    }
}
