//! Quote use cases: price one shipment on one vehicle, or find the best
//! vehicle for every shipment in the shipments file.

use std::path::PathBuf;

use serde::Serialize;
use shipcost_domain::model::{CostBreakdown, Dimensions, Route, Shipment};
use shipcost_domain::repository::ShipmentRepository;
use shipcost_domain::service::{calculate_cost, evaluate_shipments, FleetEvaluation};
use shipcost_infra::persistence::FileShipmentRepository;
use shipcost_infra::sample_data::create_samples_if_missing;
use shipcost_infra::DataFiles;
use shipcost_types::Result;
use tracing::info;

use crate::catalog::Catalog;
use crate::config::Config;

/// Id given to shipments entered by hand
pub const AD_HOC_SHIPMENT_ID: &str = "S";

/// A single priced shipment together with the route it was priced on
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quote {
    pub route: Route,
    pub shipment: Shipment,
    pub breakdown: CostBreakdown,
}

pub struct QuoteService {
    catalog: Catalog,
    shipments: FileShipmentRepository,
}

impl QuoteService {
    pub fn new(catalog: Catalog, shipments_path: PathBuf) -> Self {
        Self {
            catalog,
            shipments: FileShipmentRepository::new(shipments_path),
        }
    }

    /// Prepare the data directory (samples if enabled) and load the catalog
    pub fn open(config: &Config) -> Result<Self> {
        let files = config.data_files();
        if config.create_samples && create_samples_if_missing(&files)? {
            info!(dir = %config.data_dir().display(), "created sample data files");
        }
        Self::open_files(&files)
    }

    pub fn open_files(files: &DataFiles) -> Result<Self> {
        let catalog = Catalog::load(files)?;
        Ok(Self::new(catalog, files.shipments.clone()))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Price an ad-hoc shipment with a chosen vehicle on a chosen route
    pub fn quote(
        &self,
        vehicle: &str,
        route_id: &str,
        actual_weight_kg: f64,
        dimensions: Dimensions,
    ) -> Result<Quote> {
        let tariff = self.catalog.vehicle(vehicle)?;
        let route = self.catalog.route(route_id)?;
        let shipment = Shipment::new(AD_HOC_SHIPMENT_ID, actual_weight_kg, dimensions, route_id);
        let breakdown = calculate_cost(tariff, &shipment, route.distance_km)?;
        Ok(Quote {
            route: route.clone(),
            shipment,
            breakdown,
        })
    }

    /// Evaluate every shipment in the configured shipments file.
    ///
    /// The file is read on each call.
    pub fn best_options(&self) -> Result<Vec<FleetEvaluation>> {
        self.best_options_for(&self.shipments)
    }

    pub fn best_options_from(&self, shipments_path: PathBuf) -> Result<Vec<FleetEvaluation>> {
        self.best_options_for(&FileShipmentRepository::new(shipments_path))
    }

    /// Evaluate only the shipments travelling on `route_id`.
    ///
    /// Reads `shipments_path` when given, otherwise the configured file. The
    /// route must exist in the catalog.
    pub fn best_options_on_route(
        &self,
        route_id: &str,
        shipments_path: Option<PathBuf>,
    ) -> Result<Vec<FleetEvaluation>> {
        self.catalog.route(route_id)?;
        let shipments = match shipments_path {
            Some(path) => FileShipmentRepository::new(path).find_by_route(route_id)?,
            None => self.shipments.find_by_route(route_id)?,
        };
        Ok(self.evaluate(&shipments))
    }

    fn best_options_for(&self, repo: &dyn ShipmentRepository) -> Result<Vec<FleetEvaluation>> {
        let shipments = repo.find_all()?;
        Ok(self.evaluate(&shipments))
    }

    fn evaluate(&self, shipments: &[Shipment]) -> Vec<FleetEvaluation> {
        evaluate_shipments(shipments, &self.catalog, self.catalog.fleet())
    }
}
