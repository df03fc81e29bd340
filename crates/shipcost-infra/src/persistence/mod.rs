//! Persistence implementations
//!
//! File-backed implementations of the domain repository traits.

mod file_fleet_repo;
mod file_route_repo;
mod file_shipment_repo;

pub use file_fleet_repo::FileFleetRepository;
pub use file_route_repo::FileRouteRepository;
pub use file_shipment_repo::FileShipmentRepository;
