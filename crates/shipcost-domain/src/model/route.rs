use serde::{Deserialize, Serialize};

/// A fixed origin/destination pair with its road distance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub route_id: String,
    pub origin: String,
    pub destination: String,
    pub distance_km: f64,
}

impl Route {
    pub fn new(
        route_id: impl Into<String>,
        origin: impl Into<String>,
        destination: impl Into<String>,
        distance_km: f64,
    ) -> Self {
        Self {
            route_id: route_id.into(),
            origin: origin.into(),
            destination: destination.into(),
            distance_km,
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} -> {} ({:?} km)",
            self.route_id, self.origin, self.destination, self.distance_km
        )
    }
}
