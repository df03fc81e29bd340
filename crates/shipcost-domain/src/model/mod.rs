//! Domain model types

pub mod cost;
pub mod route;
pub mod shipment;
pub mod tariff;

pub use cost::CostBreakdown;
pub use route::Route;
pub use shipment::{Dimensions, Shipment};
pub use tariff::VehicleTariff;
