//! Repository trait definitions for loaded catalog data

use std::collections::HashMap;

use crate::model::{Route, Shipment, VehicleTariff};
use shipcost_types::Error;

/// Resolve a route by id
pub trait RouteLookup {
    fn find_route(&self, route_id: &str) -> Option<&Route>;
}

impl RouteLookup for HashMap<String, Route> {
    fn find_route(&self, route_id: &str) -> Option<&Route> {
        self.get(route_id)
    }
}

impl RouteLookup for [Route] {
    fn find_route(&self, route_id: &str) -> Option<&Route> {
        self.iter().find(|r| r.route_id == route_id)
    }
}

impl RouteLookup for Vec<Route> {
    fn find_route(&self, route_id: &str) -> Option<&Route> {
        self.as_slice().find_route(route_id)
    }
}

/// Repository for routes
pub trait RouteRepository {
    /// Load all routes in file order
    fn find_all(&self) -> Result<Vec<Route>, Error>;
}

/// Repository for vehicle tariffs
pub trait FleetRepository {
    /// Load the fleet in file order
    fn find_all(&self) -> Result<Vec<VehicleTariff>, Error>;
}

/// Repository for shipments awaiting a quote
pub trait ShipmentRepository {
    /// Load all shipments in file order
    fn find_all(&self) -> Result<Vec<Shipment>, Error>;

    /// Find shipments travelling on a route
    fn find_by_route(&self, route_id: &str) -> Result<Vec<Shipment>, Error>;
}
