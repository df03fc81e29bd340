//! File-based implementation of RouteRepository

use std::path::Path;

use shipcost_domain::model::Route;
use shipcost_domain::repository::RouteRepository;
use shipcost_types::Error;

use crate::csv_loader::load_routes;

/// Routes read once from a CSV file
pub struct FileRouteRepository {
    routes: Vec<Route>,
}

impl FileRouteRepository {
    pub fn new(csv_path: &Path) -> Result<Self, Error> {
        Ok(Self {
            routes: load_routes(csv_path)?,
        })
    }
}

impl RouteRepository for FileRouteRepository {
    fn find_all(&self) -> Result<Vec<Route>, Error> {
        Ok(self.routes.clone())
    }
}
