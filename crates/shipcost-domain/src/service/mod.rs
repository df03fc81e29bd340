//! Domain services

pub mod cost_model;
pub mod fleet_selector;
pub mod sizing;

pub use cost_model::calculate_cost;
pub use fleet_selector::{
    best_option, best_option_index, evaluate_fleet, evaluate_shipments, summarize, FleetEvaluation,
    SelectionOutcome, SelectionSummary,
};
pub use sizing::{chargeable_weight_kg, volumetric_weight_kg, VOLUMETRIC_DIVISOR};
