//! Vehicle cost model
//!
//! Prices a shipment against one tariff. The minimum charge is enforced by
//! topping up the base cost, after which the fuel surcharge is re-derived from
//! the new base. Because fuel follows the raised base, a corrected total lands
//! above `min_charge` by `shortfall * fuel_surcharge_fraction`.

use shipcost_types::CostError;

use crate::model::{CostBreakdown, Shipment, VehicleTariff};

/// Price `shipment` over `distance_km` with one tariff.
///
/// Fails with `CapacityExceeded` when the chargeable weight is above the
/// tariff's capacity; nothing else is computed in that case.
pub fn calculate_cost(
    tariff: &VehicleTariff,
    shipment: &Shipment,
    distance_km: f64,
) -> Result<CostBreakdown, CostError> {
    let chargeable = shipment.chargeable_weight_kg();
    if chargeable > tariff.capacity_kg {
        return Err(CostError::CapacityExceeded {
            vehicle: tariff.name.clone(),
            required_kg: chargeable,
            capacity_kg: tariff.capacity_kg,
        });
    }

    let base = tariff.rate_per_kg_per_km * chargeable * distance_km;
    let fuel = base * tariff.fuel_surcharge_fraction;
    let handling = tariff.handling_fee;
    let oversize = if shipment.dimensions.any_exceeds(tariff.oversize_threshold_cm) {
        tariff.oversize_fee
    } else {
        0.0
    };

    let subtotal = base + fuel + handling + oversize;
    let base = if subtotal < tariff.min_charge {
        base + (tariff.min_charge - subtotal)
    } else {
        base
    };
    // Always re-derived, whether or not the minimum kicked in.
    let fuel = base * tariff.fuel_surcharge_fraction;

    Ok(CostBreakdown::new(
        tariff.name.clone(),
        chargeable,
        base,
        fuel,
        handling,
        oversize,
    ))
}
