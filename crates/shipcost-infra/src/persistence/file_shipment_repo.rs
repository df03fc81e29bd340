//! File-based implementation of ShipmentRepository
//!
//! The shipments file is read on every query so edits made while a session
//! is running are picked up.

use std::path::PathBuf;

use shipcost_domain::model::Shipment;
use shipcost_domain::repository::ShipmentRepository;
use shipcost_types::Error;

use crate::csv_loader::load_shipments;

pub struct FileShipmentRepository {
    csv_path: PathBuf,
}

impl FileShipmentRepository {
    pub fn new(csv_path: PathBuf) -> Self {
        Self { csv_path }
    }
}

impl ShipmentRepository for FileShipmentRepository {
    fn find_all(&self) -> Result<Vec<Shipment>, Error> {
        if !self.csv_path.exists() {
            return Err(Error::FileNotFound(self.csv_path.display().to_string()));
        }
        Ok(load_shipments(&self.csv_path)?)
    }

    fn find_by_route(&self, route_id: &str) -> Result<Vec<Shipment>, Error> {
        Ok(self
            .find_all()?
            .into_iter()
            .filter(|s| s.route_id == route_id)
            .collect())
    }
}
