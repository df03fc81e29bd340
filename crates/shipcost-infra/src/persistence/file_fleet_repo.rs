//! File-based implementation of FleetRepository (CSV or TOML)

use std::path::Path;

use shipcost_domain::model::VehicleTariff;
use shipcost_domain::repository::FleetRepository;
use shipcost_types::Error;

use crate::load_fleet_file;

/// Fleet read once; the format follows the file extension
pub struct FileFleetRepository {
    fleet: Vec<VehicleTariff>,
}

impl FileFleetRepository {
    pub fn new(path: &Path) -> Result<Self, Error> {
        Ok(Self {
            fleet: load_fleet_file(path)?,
        })
    }
}

impl FleetRepository for FileFleetRepository {
    fn find_all(&self) -> Result<Vec<VehicleTariff>, Error> {
        Ok(self.fleet.clone())
    }
}
