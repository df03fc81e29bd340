//! Read-only routes and fleet loaded once per session

use shipcost_domain::model::{Route, VehicleTariff};
use shipcost_domain::repository::{FleetRepository, RouteLookup, RouteRepository};
use shipcost_infra::persistence::{FileFleetRepository, FileRouteRepository};
use shipcost_infra::DataFiles;
use shipcost_types::{Error, Result};
use tracing::info;

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    routes: Vec<Route>,
    fleet: Vec<VehicleTariff>,
}

impl Catalog {
    pub fn new(routes: Vec<Route>, fleet: Vec<VehicleTariff>) -> Self {
        Self { routes, fleet }
    }

    pub fn load(files: &DataFiles) -> Result<Self> {
        for path in [&files.routes, &files.fleet] {
            if !path.exists() {
                return Err(Error::FileNotFound(path.display().to_string()));
            }
        }
        let routes = FileRouteRepository::new(&files.routes)?.find_all()?;
        let fleet = FileFleetRepository::new(&files.fleet)?.find_all()?;
        info!(routes = routes.len(), vehicles = fleet.len(), "catalog ready");
        Ok(Self::new(routes, fleet))
    }

    /// Routes in file order
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Fleet in file order, which is also the tie-break order
    pub fn fleet(&self) -> &[VehicleTariff] {
        &self.fleet
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty() || self.fleet.is_empty()
    }

    pub fn route(&self, route_id: &str) -> Result<&Route> {
        self.find_route(route_id)
            .ok_or_else(|| Error::RouteNotFound(route_id.to_string()))
    }

    /// Resolve a vehicle by 1-based menu number or by name (case-insensitive)
    pub fn vehicle(&self, selector: &str) -> Result<&VehicleTariff> {
        let selector = selector.trim();
        let by_number = selector
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|idx| self.fleet.get(idx));
        by_number
            .or_else(|| {
                self.fleet
                    .iter()
                    .find(|v| v.name.eq_ignore_ascii_case(selector))
            })
            .ok_or_else(|| Error::VehicleNotFound(selector.to_string()))
    }
}

impl RouteLookup for Catalog {
    fn find_route(&self, route_id: &str) -> Option<&Route> {
        self.routes.find_route(route_id)
    }
}
