//! Fleet best-option selection
//!
//! Every shipment is priced against every tariff in fleet order. Capacity
//! rejections are kept alongside the feasible quotes and never stop the scan.

use serde::Serialize;
use shipcost_types::CostError;
use tracing::debug;

use crate::model::{CostBreakdown, Route, Shipment, VehicleTariff};
use crate::repository::RouteLookup;
use crate::service::cost_model::calculate_cost;

/// Final verdict for one shipment
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SelectionOutcome {
    Best(CostBreakdown),
    RouteNotFound { shipment_id: String, route_id: String },
    NoFeasibleVehicle { shipment_id: String },
}

impl SelectionOutcome {
    pub fn best(&self) -> Option<&CostBreakdown> {
        match self {
            SelectionOutcome::Best(cb) => Some(cb),
            _ => None,
        }
    }
}

/// Everything learned while pricing one shipment across the fleet
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FleetEvaluation {
    pub shipment_id: String,
    pub route: Option<Route>,
    /// Feasible quotes, in fleet order
    pub options: Vec<CostBreakdown>,
    pub rejections: Vec<CostError>,
    pub outcome: SelectionOutcome,
}

impl FleetEvaluation {
    /// Index into `options` of the selected quote, if any
    pub fn best_index(&self) -> Option<usize> {
        match self.outcome {
            SelectionOutcome::Best(_) => best_option_index(&self.options),
            _ => None,
        }
    }
}

/// Position of the cheapest option.
///
/// A later option takes over only when its total is strictly lower, so exact
/// ties keep the earliest entry and a NaN total never displaces a best.
pub fn best_option_index(options: &[CostBreakdown]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (idx, cb) in options.iter().enumerate() {
        if best.map_or(true, |b| cb.total < options[b].total) {
            best = Some(idx);
        }
    }
    best
}

/// Cheapest option; on an exact tie the earliest one wins
pub fn best_option(options: &[CostBreakdown]) -> Option<&CostBreakdown> {
    best_option_index(options).map(|idx| &options[idx])
}

/// Price `shipment` against every tariff in `fleet`, in order.
///
/// An unknown route yields `RouteNotFound` without pricing anything. Capacity
/// rejections are collected and the scan carries on with the next vehicle.
pub fn evaluate_fleet<R>(shipment: &Shipment, routes: &R, fleet: &[VehicleTariff]) -> FleetEvaluation
where
    R: RouteLookup + ?Sized,
{
    let Some(route) = routes.find_route(&shipment.route_id) else {
        return FleetEvaluation {
            shipment_id: shipment.shipment_id.clone(),
            route: None,
            options: Vec::new(),
            rejections: Vec::new(),
            outcome: SelectionOutcome::RouteNotFound {
                shipment_id: shipment.shipment_id.clone(),
                route_id: shipment.route_id.clone(),
            },
        };
    };

    let mut options = Vec::new();
    let mut rejections = Vec::new();
    for tariff in fleet {
        match calculate_cost(tariff, shipment, route.distance_km) {
            Ok(cb) => options.push(cb),
            Err(e) => {
                debug!(shipment = %shipment.shipment_id, "{}", e);
                rejections.push(e);
            }
        }
    }

    let outcome = match best_option(&options) {
        Some(cb) => SelectionOutcome::Best(cb.clone()),
        None => SelectionOutcome::NoFeasibleVehicle {
            shipment_id: shipment.shipment_id.clone(),
        },
    };

    FleetEvaluation {
        shipment_id: shipment.shipment_id.clone(),
        route: Some(route.clone()),
        options,
        rejections,
        outcome,
    }
}

/// Evaluate each shipment independently; one failure never affects another
pub fn evaluate_shipments<R>(
    shipments: &[Shipment],
    routes: &R,
    fleet: &[VehicleTariff],
) -> Vec<FleetEvaluation>
where
    R: RouteLookup + ?Sized,
{
    shipments
        .iter()
        .map(|s| evaluate_fleet(s, routes, fleet))
        .collect()
}

/// Outcome counts over a batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SelectionSummary {
    pub total: usize,
    pub priced: usize,
    pub route_not_found: usize,
    pub no_feasible_vehicle: usize,
}

/// Count outcomes by kind
pub fn summarize(evaluations: &[FleetEvaluation]) -> SelectionSummary {
    let mut summary = SelectionSummary {
        total: evaluations.len(),
        ..Default::default()
    };
    for eval in evaluations {
        match eval.outcome {
            SelectionOutcome::Best(_) => summary.priced += 1,
            SelectionOutcome::RouteNotFound { .. } => summary.route_not_found += 1,
            SelectionOutcome::NoFeasibleVehicle { .. } => summary.no_feasible_vehicle += 1,
        }
    }
    summary
}
