//! Chargeable weight calculation

use crate::model::Dimensions;

/// cm³ per billable kg
pub const VOLUMETRIC_DIVISOR: f64 = 5000.0;

pub fn volumetric_weight_kg(dimensions: &Dimensions) -> f64 {
    dimensions.volume_cm3() / VOLUMETRIC_DIVISOR
}

/// The weight actually billed: the greater of actual and volumetric weight
pub fn chargeable_weight_kg(actual_weight_kg: f64, dimensions: &Dimensions) -> f64 {
    actual_weight_kg.max(volumetric_weight_kg(dimensions))
}
