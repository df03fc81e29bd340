//! Infrastructure layer - file loaders, sample data, and repository implementations

pub mod csv_loader;
pub mod fleet_toml;
pub mod persistence;
pub mod sample_data;

use std::path::{Path, PathBuf};

use shipcost_domain::model::VehicleTariff;
use shipcost_types::LoaderError;

/// Locations of the three input files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataFiles {
    pub routes: PathBuf,
    pub fleet: PathBuf,
    pub shipments: PathBuf,
}

impl DataFiles {
    /// Default file names inside `dir`
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            routes: dir.join("routes.csv"),
            fleet: dir.join("fleet.csv"),
            shipments: dir.join("shipments.csv"),
        }
    }

    pub fn all_exist(&self) -> bool {
        self.routes.exists() && self.fleet.exists() && self.shipments.exists()
    }
}

/// Load a fleet file, choosing the parser from the extension (`.toml` or CSV)
pub fn load_fleet_file(path: &Path) -> Result<Vec<VehicleTariff>, LoaderError> {
    if is_toml(path) {
        fleet_toml::load_fleet_toml(path)
    } else {
        csv_loader::load_fleet(path)
    }
}

pub(crate) fn is_toml(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("toml"))
}
